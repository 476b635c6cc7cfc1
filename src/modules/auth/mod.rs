pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Claims, LoginRequest, TokenPair};
pub use services::AuthService;
