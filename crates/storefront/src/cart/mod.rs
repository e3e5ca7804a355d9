//! Shopping cart: state machine, validation, and persistence.
//!
//! The cart is the one stateful subsystem in the engine. It is built from
//! small, separately testable pieces:
//!
//! - [`line`] - line-item identity and the denormalized product snapshot
//! - [`state`] - the aggregate [`CartState`] and derived totals
//! - [`reducer`] - the closed [`CartAction`] sum type and the pure
//!   `(state, action) -> state` transition function
//! - [`validate`] - the gatekeeper that approves or rejects a mutation
//!   before it reaches the reducer
//! - [`persist`] - the bridge that hydrates the cart at startup and writes
//!   it back after every mutation
//! - [`service`] - the [`CartService`] facade consumers call
//!
//! Consumers never dispatch actions directly; they go through
//! [`CartService`], which runs validation, applies the reducer, and lets the
//! persistence bridge sync storage.

pub mod error;
pub mod line;
pub mod persist;
pub mod reducer;
pub mod service;
pub mod state;
pub mod validate;

pub use error::CartError;
pub use line::{CartLine, LineId};
pub use reducer::{CartAction, reduce};
pub use service::CartService;
pub use state::CartState;
pub use validate::{RejectCategory, RejectReason};
