pub mod tournament_dto;

pub use tournament_dto::{
    AfternoonFixtureDto, CategoryRosterDto, MorningPhaseDto, TournamentResponseDto,
};
