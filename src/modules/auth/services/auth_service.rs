use tracing::info;

use crate::config::AuthConfig;
use crate::core::{AppError, Result};
use crate::modules::auth::models::TokenPair;
use crate::modules::auth::services::{password, tokens};

/// Verifies the single workshop login and issues token pairs
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn login(&self, username: &str, plain_password: &str) -> Result<TokenPair> {
        let valid = username == self.config.username
            && password::verify_password(plain_password, &self.config.password_hash)?;

        if !valid {
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        info!(%username, "Login succeeded");

        tokens::issue_pair(
            username,
            &self.config.jwt_secret,
            self.config.access_token_minutes,
            self.config.refresh_token_days,
        )
    }

    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt_secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(AuthConfig {
            username: "admin".to_string(),
            password_hash: password::hash_password("workshop").unwrap(),
            jwt_secret: "test-secret-0123456789".to_string(),
            access_token_minutes: 60,
            refresh_token_days: 7,
        })
    }

    #[test]
    fn test_login_with_valid_credentials() {
        let pair = service().login("admin", "workshop").unwrap();
        assert!(!pair.access.is_empty());
        assert!(!pair.refresh.is_empty());
    }

    #[test]
    fn test_login_with_wrong_password() {
        assert!(service().login("admin", "nope").is_err());
    }

    #[test]
    fn test_login_with_unknown_user() {
        assert!(service().login("root", "workshop").is_err());
    }
}
