//! League tables of the morning pool, recomputed from stored fixtures on every read.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/standings` | No | Standings of every category |
//! | GET | `/api/standings/{categorie}` | No | Standings of one category |

pub mod dtos;
pub mod handlers;
pub mod ranking;
pub mod routes;
pub mod services;

pub use services::StandingsService;
