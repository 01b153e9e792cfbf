//! Stored fixtures: score entry for admins, the public scoreboard feed and
//! full schedule regeneration.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/scores` | No | List fixtures (`categorie`, `phase` filters) |
//! | POST | `/api/scores` | Bearer | Create or update one fixture |
//! | DELETE | `/api/scores` | Bearer | Delete every fixture |
//! | POST | `/api/scores/generate` | Bearer | Replace fixtures with a generated schedule |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{FixtureRepository, InMemoryFixtureRepository, PgFixtureRepository};
pub use services::FixtureService;
