pub mod fixture_dto;

pub use fixture_dto::{FixtureResponseDto, ListFixturesQuery, UpsertFixtureDto};
