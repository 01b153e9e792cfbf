mod fixture_service;

pub use fixture_service::FixtureService;
