pub mod standings_handler;

pub use standings_handler::{
    __path_get_category_standings, __path_list_standings, get_category_standings, list_standings,
};
