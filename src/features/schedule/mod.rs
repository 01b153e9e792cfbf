//! Schedule generation: round-robin pairings, field and kickoff allocation.

mod generator;
mod kickoff;

pub use generator::generate_tournament;
pub use kickoff::Kickoff;
