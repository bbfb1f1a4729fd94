pub mod catalog;
pub mod history;
pub mod local_store;
pub mod outcome;
