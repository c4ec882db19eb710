//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CORNER_SHOP_DATA_DIR` - Directory holding the persisted cart
//!   (default: `data`)
//! - `CORNER_SHOP_CART_KEY` - Storage key the cart persists under
//!   (default: `cart_v1`)
//! - `CORNER_SHOP_CATALOG` - Path to a JSON catalog file; when unset the
//!   built-in sample catalog is used

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the cart storage slot lives in.
    pub data_dir: PathBuf,
    /// Storage key the cart persists under.
    pub cart_key: String,
    /// Path to a JSON catalog file; `None` means the built-in sample.
    pub catalog_path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the cart key is empty or not a plain file
    /// name (it becomes a file inside the data directory).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("CORNER_SHOP_DATA_DIR", "data"));
        let cart_key = get_env_or_default("CORNER_SHOP_CART_KEY", "cart_v1");
        validate_cart_key(&cart_key)?;
        let catalog_path = get_optional_env("CORNER_SHOP_CATALOG").map(PathBuf::from);

        Ok(Self {
            data_dir,
            cart_key,
            catalog_path,
        })
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// The cart key names a file inside the data directory.
fn validate_cart_key(key: &str) -> Result<(), ConfigError> {
    if key.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            "CORNER_SHOP_CART_KEY".to_string(),
            "must not be empty".to_string(),
        ));
    }
    if key.contains(['/', '\\']) || key.contains("..") {
        return Err(ConfigError::InvalidEnvVar(
            "CORNER_SHOP_CART_KEY".to_string(),
            format!("must be a plain file name (got {key:?})"),
        ));
    }
    Ok(())
}
