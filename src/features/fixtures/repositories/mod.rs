mod fixture_repository;
mod memory_fixture_repository;
mod pg_fixture_repository;

pub use fixture_repository::FixtureRepository;
pub use memory_fixture_repository::InMemoryFixtureRepository;
pub use pg_fixture_repository::PgFixtureRepository;
