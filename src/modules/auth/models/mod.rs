pub mod auth;

pub use auth::{Claims, LoginRequest, TokenPair};
