//! Asili Storefront - Catalog and cart engine.
//!
//! This crate provides the storefront functionality as a library: a static
//! in-memory product catalog and a shopping cart with durable local
//! persistence. There is no server in this engine - consumers (the CLI, or
//! any future surface) construct a [`state::Store`] and drive it directly.
//!
//! # Architecture
//!
//! - [`catalog`] - product and category data with listing queries
//! - [`cart`] - cart state machine, validation, and persistence bridge
//! - [`storage`] - durable key-value storage backing the cart
//! - [`config`] - environment-driven configuration
//!
//! The cart is an explicitly owned state container: every [`cart::CartService`]
//! instance owns its own state and storage handle, so tests and tools can
//! construct isolated carts without shared globals.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
