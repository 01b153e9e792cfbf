pub mod tournament_handler;

pub use tournament_handler::{__path_get_tournament, get_tournament};
