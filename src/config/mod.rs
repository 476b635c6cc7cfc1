use crate::core::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub company: CompanyProfile,
    pub smtp: SmtpSettings,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Credentials and token parameters for the single workshop login.
///
/// The password is stored as an Argon2 PHC hash; AUTH_PASSWORD is accepted
/// as a plain-text fallback for local development and hashed at startup.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password_hash: String,
    pub jwt_secret: String,
    pub access_token_minutes: i64,
    pub refresh_token_days: i64,
}

/// Company identity printed on quotations and invoices.
///
/// Every field has a hardcoded fallback so document rendering works on a
/// fresh install with nothing configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub gstin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            company: CompanyProfile::from_env(),
            smtp: SmtpSettings::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.len() < 16 {
            return Err(AppError::Configuration(
                "JWT_SECRET must be at least 16 characters".to_string(),
            ));
        }

        if self.auth.access_token_minutes <= 0 || self.auth.refresh_token_days <= 0 {
            return Err(AppError::Configuration(
                "Token lifetimes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl AuthConfig {
    pub fn from_env() -> Result<Self> {
        let password_hash = match env::var("AUTH_PASSWORD_HASH") {
            Ok(hash) => hash,
            Err(_) => {
                let plain = env::var("AUTH_PASSWORD").map_err(|_| {
                    AppError::Configuration(
                        "Neither AUTH_PASSWORD_HASH nor AUTH_PASSWORD is set".to_string(),
                    )
                })?;
                crate::modules::auth::services::hash_password(&plain)?
            }
        };

        Ok(Self {
            username: env::var("AUTH_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            password_hash,
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| AppError::Configuration("JWT_SECRET not set".to_string()))?,
            access_token_minutes: env::var("ACCESS_TOKEN_MINUTES")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid ACCESS_TOKEN_MINUTES".to_string()))?,
            refresh_token_days: env::var("REFRESH_TOKEN_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid REFRESH_TOKEN_DAYS".to_string()))?,
        })
    }
}

impl CompanyProfile {
    /// Hardcoded identity used when nothing is configured
    pub fn fallback() -> Self {
        Self {
            name: "NiYo Motor Windings".to_string(),
            address: "123 Workshop Street, Industrial Area, Bengaluru - 560001".to_string(),
            phone: "+91 98765 43210".to_string(),
            gstin: "29AAAAA0000A1Z5".to_string(),
        }
    }

    pub fn from_env() -> Self {
        let fallback = Self::fallback();
        Self {
            name: env::var("COMPANY_NAME").unwrap_or(fallback.name),
            address: env::var("COMPANY_ADDRESS").unwrap_or(fallback.address),
            phone: env::var("COMPANY_PHONE").unwrap_or(fallback.phone),
            gstin: env::var("COMPANY_GSTIN").unwrap_or(fallback.gstin),
        }
    }
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 587,
            username: String::new(),
            password: String::new(),
            from_address: String::new(),
        }
    }
}

impl SmtpSettings {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("SMTP_HOST").unwrap_or_default(),
            port: env::var("SMTP_PORT")
                .unwrap_or_else(|_| "587".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid SMTP_PORT".to_string()))?,
            username: env::var("SMTP_USERNAME").unwrap_or_default(),
            password: env::var("SMTP_PASSWORD").unwrap_or_default(),
            from_address: env::var("SMTP_FROM").unwrap_or_default(),
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.host.is_empty() && !self.from_address.is_empty()
    }
}
