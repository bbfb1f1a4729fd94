pub mod categories;
pub mod leaderboard;
pub mod selections;
