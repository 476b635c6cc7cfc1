use serde::{Deserialize, Serialize};

/// Login payload for the single workshop account
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Access/refresh token pair returned on login
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// JWT payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// Expiry as a unix timestamp
    pub exp: i64,
    /// "access" or "refresh"
    pub token_type: String,
}
