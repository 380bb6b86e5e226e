mod config;
pub mod repository;

pub use config::{Config, NotificationsConfig, RingingConfig};
pub use repository::AlarmStore;

use std::path::PathBuf;

/// Returns `~/.config/albadock[-dev]/` based on ALBADOCK_ENV.
///
/// Set ALBADOCK_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ALBADOCK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("albadock-dev")
    } else {
        base_dir.join("albadock")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
