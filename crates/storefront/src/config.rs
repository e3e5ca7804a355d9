//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults suit local use.
//!
//! - `ASILI_DATA_DIR` - Directory for durable records such as the persisted
//!   cart (default: `data`)
//! - `ASILI_CART_MAX_PER_LINE` - Per-line quantity ceiling (default: 25)
//! - `ASILI_CART_MAX_ITEMS` - Cart-wide item ceiling (default: 100)
//! - `ASILI_CURRENCY` - ISO 4217 display currency (default: USD)

use std::path::PathBuf;

use thiserror::Error;

use asili_core::CurrencyCode;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_MAX_PER_LINE: u32 = 25;
const DEFAULT_MAX_CART_ITEMS: u32 = 100;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Ceilings enforced by the cart validation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLimits {
    /// Maximum quantity a single line may hold.
    pub max_per_line: u32,
    /// Maximum total item count across the cart.
    pub max_cart_items: u32,
}

impl Default for CartLimits {
    fn default() -> Self {
        Self {
            max_per_line: DEFAULT_MAX_PER_LINE,
            max_cart_items: DEFAULT_MAX_CART_ITEMS,
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding durable records (the persisted cart).
    pub data_dir: PathBuf,
    /// Cart ceilings.
    pub cart: CartLimits,
    /// Display currency for the store.
    pub currency: CurrencyCode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cart: CartLimits::default(),
            currency: CurrencyCode::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("ASILI_DATA_DIR", DEFAULT_DATA_DIR));
        let max_per_line = parse_ceiling("ASILI_CART_MAX_PER_LINE", DEFAULT_MAX_PER_LINE)?;
        let max_cart_items = parse_ceiling("ASILI_CART_MAX_ITEMS", DEFAULT_MAX_CART_ITEMS)?;
        let cart = validate_limits(CartLimits {
            max_per_line,
            max_cart_items,
        })?;
        let currency = match get_optional_env("ASILI_CURRENCY") {
            Some(value) => parse_currency(&value)
                .ok_or_else(|| ConfigError::InvalidEnvVar("ASILI_CURRENCY".to_owned(), value))?,
            None => CurrencyCode::default(),
        };

        Ok(Self {
            data_dir,
            cart,
            currency,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a positive integer ceiling from the environment.
fn parse_ceiling(key: &str, default: u32) -> Result<u32, ConfigError> {
    match get_optional_env(key) {
        None => Ok(default),
        Some(value) => value
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string())),
    }
}

/// Validate that the configured ceilings are usable.
fn validate_limits(limits: CartLimits) -> Result<CartLimits, ConfigError> {
    if limits.max_per_line == 0 {
        return Err(ConfigError::InvalidEnvVar(
            "ASILI_CART_MAX_PER_LINE".to_owned(),
            "must be at least 1".to_owned(),
        ));
    }
    if limits.max_cart_items < limits.max_per_line {
        return Err(ConfigError::InvalidEnvVar(
            "ASILI_CART_MAX_ITEMS".to_owned(),
            format!(
                "must be at least the per-line limit ({})",
                limits.max_per_line
            ),
        ));
    }
    Ok(limits)
}

/// Parse an ISO 4217 alphabetic code.
fn parse_currency(value: &str) -> Option<CurrencyCode> {
    match value.to_ascii_uppercase().as_str() {
        "USD" => Some(CurrencyCode::USD),
        "EUR" => Some(CurrencyCode::EUR),
        "GBP" => Some(CurrencyCode::GBP),
        "CAD" => Some(CurrencyCode::CAD),
        "AUD" => Some(CurrencyCode::AUD),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = CartLimits::default();
        assert_eq!(limits.max_per_line, 25);
        assert_eq!(limits.max_cart_items, 100);
    }

    #[test]
    fn test_validate_limits_rejects_zero_per_line() {
        let result = validate_limits(CartLimits {
            max_per_line: 0,
            max_cart_items: 10,
        });
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_validate_limits_rejects_cart_below_line() {
        let result = validate_limits(CartLimits {
            max_per_line: 10,
            max_cart_items: 5,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_limits_accepts_sane_values() {
        let limits = CartLimits {
            max_per_line: 5,
            max_cart_items: 50,
        };
        assert_eq!(validate_limits(limits).unwrap(), limits);
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("usd"), Some(CurrencyCode::USD));
        assert_eq!(parse_currency("GBP"), Some(CurrencyCode::GBP));
        assert_eq!(parse_currency("XYZ"), None);
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.currency, CurrencyCode::USD);
    }
}
