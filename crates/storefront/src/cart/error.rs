//! Cart error taxonomy.
//!
//! The taxonomy is small and closed. Nothing here is fatal: rejections are
//! corrected by the user, a missing line means the caller should refresh its
//! view, and persistence failures are logged without interrupting the
//! in-memory mutation (see [`crate::cart::persist`]).

use thiserror::Error;

use super::line::LineId;
use super::validate::RejectReason;

/// Errors returned by the cart's consumer-facing entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The validation layer rejected the mutation.
    #[error("{0}")]
    Rejected(#[from] RejectReason),

    /// The referenced line no longer exists (stale caller view).
    #[error("cart line not found: {0}")]
    LineNotFound(LineId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CartError::LineNotFound(LineId::from("p1::M::red"));
        assert_eq!(err.to_string(), "cart line not found: p1::M::red");

        let err = CartError::from(RejectReason::ZeroQuantity);
        assert_eq!(err.to_string(), "quantity must be at least 1");
    }
}
