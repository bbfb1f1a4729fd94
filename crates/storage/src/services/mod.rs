pub mod git_sync;
pub mod scoring;
