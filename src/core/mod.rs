//! Core module - Application configuration and error types
//!
//! - [`Settings`] - User preferences loaded from `settings.json`
//! - [`CoreError`] - Settings I/O and serialization failures

pub mod error;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use settings::{load_settings, save_settings, settings_path, HostColor, Settings};
