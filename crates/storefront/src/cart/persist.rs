//! Persistence bridge between the in-memory cart and durable storage.
//!
//! One serialized blob lives under a fixed key. The bridge is deliberately
//! lenient on the way in (an absent or unparseable record means "no prior
//! cart") and best-effort on the way out (a failed write is logged and the
//! in-memory state stays authoritative for the session).

use tracing::{debug, warn};

use crate::storage::Storage;

use super::state::CartState;

/// Storage keys used by the cart.
pub mod keys {
    /// Key for the single persisted cart record.
    pub const CART: &str = "cart";
}

/// Read the persisted cart record, if one exists and parses.
///
/// The returned state is raw: its totals are whatever was stored and must be
/// rederived through the reducer's `Load` transition before use.
pub fn read_state<S: Storage>(storage: &S) -> Option<CartState> {
    let blob = match storage.read(keys::CART) {
        Ok(Some(blob)) => blob,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "Failed to read persisted cart; starting empty");
            return None;
        }
    };

    match serde_json::from_str(&blob) {
        Ok(state) => Some(state),
        Err(e) => {
            // Corruption is treated as "no prior cart", not a fatal
            // condition.
            warn!(error = %e, "Persisted cart record is malformed; starting empty");
            None
        }
    }
}

/// Write the cart back to storage after a mutation.
///
/// A non-empty cart overwrites the record; an empty cart deletes the key
/// instead of writing an empty blob, so a stale record can never resurrect
/// deleted lines on the next load. Failures are logged and swallowed.
pub fn sync<S: Storage>(storage: &S, state: &CartState) {
    if state.is_empty() {
        if let Err(e) = storage.remove(keys::CART) {
            warn!(error = %e, "Failed to delete persisted cart record");
        }
        return;
    }

    let blob = match serde_json::to_string(state) {
        Ok(blob) => blob,
        Err(e) => {
            warn!(error = %e, "Failed to serialize cart; record not written");
            return;
        }
    };
    match storage.write(keys::CART, &blob) {
        Ok(()) => debug!(items = state.total_items, "Persisted cart record"),
        Err(e) => warn!(error = %e, "Failed to write persisted cart record"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::line::CartLine;
    use crate::cart::reducer::{CartAction, reduce};
    use crate::catalog::Product;
    use crate::storage::MemoryStorage;
    use asili_core::{CategoryId, CurrencyCode, Price, ProductId};
    use chrono::NaiveDate;

    fn sample_state() -> CartState {
        let product = Product {
            id: ProductId::new("brass-cuff"),
            name: "Hammered Brass Cuff".to_owned(),
            description: String::new(),
            price: Price::from_cents(4200, CurrencyCode::USD),
            image: String::new(),
            category: CategoryId::new("jewelry"),
            sizes: Vec::new(),
            colors: Vec::new(),
            stock: None,
            available: true,
            added_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            featured: false,
        };
        reduce(
            CartState::empty(),
            CartAction::Add {
                line: CartLine::from_product(&product, 2, "", ""),
            },
        )
    }

    #[test]
    fn test_round_trip() {
        let storage = MemoryStorage::new();
        let state = sample_state();

        sync(&storage, &state);
        let loaded = read_state(&storage).unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_absent_record_reads_as_none() {
        let storage = MemoryStorage::new();
        assert!(read_state(&storage).is_none());
    }

    #[test]
    fn test_malformed_record_reads_as_none() {
        let storage = MemoryStorage::new();
        storage.write(keys::CART, "not json {").unwrap();
        assert!(read_state(&storage).is_none());
    }

    #[test]
    fn test_empty_state_deletes_the_record() {
        let storage = MemoryStorage::new();
        sync(&storage, &sample_state());
        assert!(storage.read(keys::CART).unwrap().is_some());

        sync(&storage, &CartState::empty());
        assert!(storage.read(keys::CART).unwrap().is_none());
    }
}
