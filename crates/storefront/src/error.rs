//! Unified error handling for the storefront engine.
//!
//! Consumers that don't care which layer failed can hold a single
//! `StoreError`; the cart's own taxonomy stays available through the
//! variants.

use thiserror::Error;

use crate::cart::CartError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Top-level error type for the storefront engine.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Durable storage could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A cart mutation was refused.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::RejectReason;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound("product kente-slides".to_string());
        assert_eq!(err.to_string(), "Not found: product kente-slides");

        let err = StoreError::from(CartError::from(RejectReason::EmptyCart));
        assert_eq!(err.to_string(), "Cart error: the cart is already empty");
    }
}
