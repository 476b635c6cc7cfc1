pub mod runtime_settings;

pub use runtime_settings::{SettingsUpdate, SharedSettings};
