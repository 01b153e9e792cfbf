pub mod standing_dto;

pub use standing_dto::{CategoryStandingsDto, StandingDto};
