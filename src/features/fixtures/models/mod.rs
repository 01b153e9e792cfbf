mod fixture;

pub use fixture::{Fixture, FixtureScores, FixtureWrite, NewFixture, Phase};
