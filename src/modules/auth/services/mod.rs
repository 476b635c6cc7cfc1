pub mod auth_service;
pub mod password;
pub mod tokens;

pub use auth_service::AuthService;
pub use password::{hash_password, verify_password};
