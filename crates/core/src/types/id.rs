//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.
//!
//! Asili entities are addressed by URL handles (slugs) rather than numeric
//! database IDs, so the wrappers hold a `String`. A handle is lowercase
//! alphanumeric with dashes: `"kente-royal-gold"`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a handle-backed ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// The input string is empty.
    #[error("id cannot be empty")]
    Empty,
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("id contains invalid character {0:?} (expected lowercase alphanumerics and dashes)")]
    InvalidChar(char),
}

/// Validate a handle: non-empty, lowercase alphanumerics and dashes only.
///
/// # Errors
///
/// Returns [`IdError`] if the handle is empty or contains an invalid
/// character.
pub fn validate_handle(handle: &str) -> Result<(), IdError> {
    if handle.is_empty() {
        return Err(IdError::Empty);
    }
    if let Some(c) = handle
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(IdError::InvalidChar(c));
    }
    Ok(())
}

/// Macro to define a type-safe handle-backed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `parse()`, `as_str()`
/// - `From<&str>`, `From<String>`, `AsRef<str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use asili_core::define_id;
/// define_id!(ProductId);
/// define_id!(CategoryId);
///
/// let product_id = ProductId::new("ankara-tote");
/// let category_id = CategoryId::new("bags");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = category_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a handle, without validation.
            #[must_use]
            pub fn new(handle: impl Into<String>) -> Self {
                Self(handle.into())
            }

            /// Parse a handle into an ID, validating the handle charset.
            ///
            /// # Errors
            ///
            /// Returns an error if the handle is empty or contains characters
            /// outside `[a-z0-9-]`.
            pub fn parse(handle: &str) -> ::core::result::Result<Self, $crate::types::id::IdError> {
                $crate::types::id::validate_handle(handle)?;
                Ok(Self(handle.to_owned()))
            }

            /// Get the underlying handle.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(handle: &str) -> Self {
                Self(handle.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(handle: String) -> Self {
                Self(handle)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(CategoryId);
