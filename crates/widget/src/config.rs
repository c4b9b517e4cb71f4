//! Widget configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_STORAGE_PATH` - Backing file for the persistent store (default: .cart-storage.json)
//! - `CART_STORAGE_KEY` - Key the cart is stored under (default: cart)
//! - `CART_COUNTER_ID` - Id of the counter display element (default: cart-counter)
//! - `CART_PRODUCTS_ID` - Id of the products section (default: products)
//! - `CART_LOCALE` - Acknowledgment message locale, `en` or `fa` (default: en)

use std::path::PathBuf;

use thiserror::Error;

use crate::ui::Locale;

/// Default key for the persisted cart.
pub const DEFAULT_STORAGE_KEY: &str = "cart";
/// Default id of the counter display element.
pub const DEFAULT_COUNTER_ID: &str = "cart-counter";
/// Default id of the products section anchor.
pub const DEFAULT_PRODUCTS_ID: &str = "products";

const DEFAULT_STORAGE_PATH: &str = ".cart-storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Backing file for the persistent key-value store
    pub storage_path: PathBuf,
    /// Key the serialized cart is stored under
    pub storage_key: String,
    /// Id of the element showing the item count
    pub counter_id: String,
    /// Id of the products section scrolled to
    pub products_id: String,
    /// Locale for acknowledgment messages
    pub locale: Locale,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            counter_id: DEFAULT_COUNTER_ID.to_string(),
            products_id: DEFAULT_PRODUCTS_ID.to_string(),
            locale: Locale::default(),
        }
    }
}

impl WidgetConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let storage_path = PathBuf::from(get_non_empty(
            &lookup,
            "CART_STORAGE_PATH",
            DEFAULT_STORAGE_PATH,
        )?);
        let storage_key = get_non_empty(&lookup, "CART_STORAGE_KEY", DEFAULT_STORAGE_KEY)?;
        let counter_id = get_non_empty(&lookup, "CART_COUNTER_ID", DEFAULT_COUNTER_ID)?;
        let products_id = get_non_empty(&lookup, "CART_PRODUCTS_ID", DEFAULT_PRODUCTS_ID)?;
        let locale = get_or_default("CART_LOCALE", "en")
            .parse::<Locale>()
            .map_err(|e| ConfigError::InvalidEnvVar("CART_LOCALE".to_string(), e.to_string()))?;

        Ok(Self {
            storage_path,
            storage_key,
            counter_id,
            products_id,
            locale,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable that must not be blank when set.
fn get_non_empty<F>(lookup: &F, key: &str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default.to_string()),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        )),
        Some(value) => Ok(value),
    }
}
