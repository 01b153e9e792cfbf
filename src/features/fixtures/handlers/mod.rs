pub mod fixture_handler;

pub use fixture_handler::{
    __path_clear_fixtures, __path_generate_fixtures, __path_list_fixtures, __path_upsert_fixture,
    clear_fixtures, generate_fixtures, list_fixtures, upsert_fixture,
};
