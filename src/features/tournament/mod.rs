//! Tournament settings: categories, squads and the day's timetable.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/tournament` | No | Categories, rosters and phase timetable |

pub mod dtos;
pub mod handlers;
pub mod routes;
mod settings;

pub use settings::{CategorySettings, MorningSettings, SettingsError, TournamentSettings};
