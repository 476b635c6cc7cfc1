use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::core::{AppError, Result};
use crate::modules::auth::models::{Claims, TokenPair};

pub const ACCESS_TOKEN: &str = "access";
pub const REFRESH_TOKEN: &str = "refresh";

/// Issue an access/refresh pair for a verified login
pub fn issue_pair(
    username: &str,
    secret: &str,
    access_minutes: i64,
    refresh_days: i64,
) -> Result<TokenPair> {
    let access = issue(
        username,
        secret,
        ACCESS_TOKEN,
        Duration::minutes(access_minutes),
    )?;
    let refresh = issue(username, secret, REFRESH_TOKEN, Duration::days(refresh_days))?;

    Ok(TokenPair { access, refresh })
}

fn issue(username: &str, secret: &str, token_type: &str, ttl: Duration) -> Result<String> {
    let claims = Claims {
        sub: username.to_string(),
        exp: (Utc::now() + ttl).timestamp(),
        token_type: token_type.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))
}

/// Decode and verify a token, rejecting anything expired or tampered
pub fn verify(token: &str, secret: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-0123456789";

    #[test]
    fn test_pair_round_trip() {
        let pair = issue_pair("admin", SECRET, 60, 7).unwrap();

        let access = verify(&pair.access, SECRET).unwrap();
        assert_eq!(access.sub, "admin");
        assert_eq!(access.token_type, ACCESS_TOKEN);

        let refresh = verify(&pair.refresh, SECRET).unwrap();
        assert_eq!(refresh.token_type, REFRESH_TOKEN);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let pair = issue_pair("admin", SECRET, 60, 7).unwrap();
        assert!(verify(&pair.access, "another-secret-987654").is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(verify("not-a-token", SECRET).is_err());
    }
}
