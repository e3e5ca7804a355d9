//! Application state shared across consumer surfaces.

use crate::cart::CartService;
use crate::catalog::CatalogStore;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::storage::FileStorage;

/// The assembled storefront: configuration, catalog, and the cart.
///
/// This is the composition root consumers construct once and drive. It is
/// an explicitly owned value, not a global; tests that need isolation build
/// their own [`CartService`] over an in-memory storage instead.
pub struct Store {
    config: StoreConfig,
    catalog: CatalogStore,
    cart: CartService<FileStorage>,
}

impl Store {
    /// Assemble the store from a configuration.
    ///
    /// Opens file-backed storage under the configured data directory and
    /// hydrates the cart from any prior record.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let storage = FileStorage::new(&config.data_dir)?;
        let cart = CartService::open(storage, config.cart);
        Ok(Self {
            config,
            catalog: CatalogStore::with_seed(),
            cart,
        })
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Get a reference to the cart.
    #[must_use]
    pub const fn cart(&self) -> &CartService<FileStorage> {
        &self.cart
    }

    /// Get a mutable reference to the cart.
    pub fn cart_mut(&mut self) -> &mut CartService<FileStorage> {
        &mut self.cart
    }
}
