use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sha2::Sha256;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::LoginResponseDto;
use crate::features::auth::model::{AdminClaims, AdminSession};
use crate::shared::constants::{ADMIN_SUBJECT, TOKEN_ISSUER};

type HmacSha256 = Hmac<Sha256>;

/// Checks the admin password and mints and verifies HS256 admin tokens
pub struct TokenService {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        let secret = config.token_secret.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            config,
        }
    }

    /// Exchange the admin password for a bearer token
    pub fn login(&self, password: &str) -> Result<LoginResponseDto> {
        if let Err(e) = self.verify_password(password) {
            tracing::warn!("Rejected admin login attempt");
            return Err(e);
        }

        let access_token = self.issue_token()?;
        tracing::info!("Admin logged in");

        Ok(LoginResponseDto {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.config.token_ttl.as_secs() as i64,
        })
    }

    /// Compare `candidate` with the configured password in constant time
    pub fn verify_password(&self, candidate: &str) -> Result<()> {
        let mut expected = self.keyed_mac()?;
        expected.update(self.config.admin_password.as_bytes());
        let tag = expected.finalize().into_bytes();

        let mut supplied = self.keyed_mac()?;
        supplied.update(candidate.as_bytes());
        supplied
            .verify_slice(&tag)
            .map_err(|_| AppError::Unauthorized("Invalid password".to_string()))
    }

    pub fn issue_token(&self) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = AdminClaims {
            sub: ADMIN_SUBJECT.to_string(),
            iss: TOKEN_ISSUER.to_string(),
            iat: now,
            exp: now + self.config.token_ttl.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign admin token: {}", e);
            AppError::Internal("Failed to sign token".to_string())
        })
    }

    pub fn validate_token(&self, token: &str) -> Result<AdminSession> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let claims = decode::<AdminClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?
            .claims;

        if claims.sub != ADMIN_SUBJECT {
            return Err(AppError::Unauthorized(
                "Token does not grant admin access".to_string(),
            ));
        }

        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AppError::Unauthorized("Invalid token expiry".to_string()))?;

        Ok(AdminSession {
            subject: claims.sub,
            expires_at,
        })
    }

    fn keyed_mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(self.config.token_secret.as_bytes())
            .map_err(|e| AppError::Internal(format!("Invalid token secret: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn service(secret: &str) -> TokenService {
        TokenService::new(AuthConfig {
            admin_password: "coach-password".to_string(),
            token_secret: secret.to_string(),
            token_ttl: Duration::from_secs(3600),
        })
    }

    #[test]
    fn test_login_issues_token_that_validates() {
        let tokens = service("test-secret");
        let response = tokens.login("coach-password").unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);

        let session = tokens.validate_token(&response.access_token).unwrap();
        assert_eq!(session.subject, ADMIN_SUBJECT);
        assert!(session.expires_at > Utc::now());
    }

    #[test]
    fn test_wrong_password_is_unauthorized() {
        let err = service("test-secret").login("coach-passwor").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
        assert!(service("test-secret").verify_password("").is_err());
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let token = service("secret-a").issue_token().unwrap();
        let err = service("secret-b").validate_token(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let tokens = service("test-secret");
        let past = Utc::now().timestamp() - 7200;
        let claims = AdminClaims {
            sub: ADMIN_SUBJECT.to_string(),
            iss: TOKEN_ISSUER.to_string(),
            iat: past,
            exp: past + 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(tokens.validate_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(service("test-secret").validate_token("not-a-jwt").is_err());
    }
}
