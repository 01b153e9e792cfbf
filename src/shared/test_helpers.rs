#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::time::Duration;

#[cfg(test)]
use axum_test::TestServer;

#[cfg(test)]
use crate::app::{router, AppServices};
#[cfg(test)]
use crate::core::config::AuthConfig;
#[cfg(test)]
use crate::features::auth::TokenService;
#[cfg(test)]
use crate::features::fixtures::InMemoryFixtureRepository;
#[cfg(test)]
use crate::features::tournament::TournamentSettings;

#[cfg(test)]
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        admin_password: "test-admin-password".to_string(),
        token_secret: "test-token-secret".to_string(),
        token_ttl: Duration::from_secs(600),
    }
}

/// A token accepted by `test_server`
#[cfg(test)]
pub fn admin_token() -> String {
    TokenService::new(test_auth_config())
        .issue_token()
        .expect("token should sign")
}

/// The full API router over an empty in-memory store and the built-in settings
#[cfg(test)]
pub fn test_server() -> TestServer {
    let services = AppServices::new(
        TournamentSettings::default(),
        Arc::new(InMemoryFixtureRepository::new()),
        TokenService::new(test_auth_config()),
    );
    TestServer::new(router(&services)).expect("router should start")
}
