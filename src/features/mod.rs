pub mod auth;
pub mod fixtures;
pub mod schedule;
pub mod standings;
pub mod tournament;
