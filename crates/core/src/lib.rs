//! Asili Core - Shared types library.
//!
//! This crate provides common types used across all Asili components:
//! - `storefront` - Catalog and cart engine
//! - `cli` - Command-line consumer
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! side effects. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and decimal prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
