pub mod catalog;
pub mod leaderboard;
pub mod selection;
