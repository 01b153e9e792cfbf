use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::fixtures::models::{Fixture, FixtureWrite, NewFixture};

/// Storage seam for fixtures.
///
/// Implementations must keep one fixture per (category, phase, unordered
/// pairing) and return fixtures in insertion order.
#[async_trait]
pub trait FixtureRepository: Send + Sync {
    /// All stored fixtures, in insertion order
    async fn list(&self) -> Result<Vec<Fixture>>;

    /// Update the fixture named by `write.id`, or, without an id, insert it
    /// unless a fixture with the same pairing exists, in which case that one
    /// is overwritten.
    async fn upsert(&self, write: FixtureWrite) -> Result<Fixture>;

    /// Remove every fixture, returning how many were removed
    async fn delete_all(&self) -> Result<u64>;

    /// Atomically swap the whole fixture set for `fixtures`.
    ///
    /// On error the previous fixtures are left untouched.
    async fn replace_all(&self, fixtures: Vec<NewFixture>) -> Result<Vec<Fixture>>;
}
