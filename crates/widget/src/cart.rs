//! Cart store.
//!
//! Owns the in-memory cart and keeps it equal to its persisted mirror after
//! every mutation. The cart only grows: entries are appended in call order,
//! duplicates are kept, and nothing is ever removed by the widget.

use cart_widget_core::{CartEntry, encode_cart, parse_cart};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::error::Result;
use crate::storage::KeyValueStore;

/// The authoritative cart plus a handle to its persistent store.
#[derive(Debug)]
pub struct CartStore<S> {
    store: S,
    key: String,
    entries: Vec<CartEntry>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store over `store` and hydrate it from the value under `key`.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let mut cart = Self {
            store,
            key: key.into(),
            entries: Vec::new(),
        };
        cart.initialize();
        cart
    }

    /// Re-read the persisted cart into memory.
    ///
    /// Absent, unreadable and malformed data all yield an empty cart; nothing
    /// is surfaced to the caller.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn initialize(&mut self) {
        let raw = match self.store.get_item(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted cart, starting empty");
                None
            }
        };

        self.entries = match raw.as_deref().map(parse_cart) {
            Some(Ok(entries)) => entries,
            Some(Err(e)) => {
                tracing::debug!(error = %e, "Persisted cart is malformed, starting empty");
                Vec::new()
            }
            None => Vec::new(),
        };

        tracing::debug!(count = self.entries.len(), "Cart initialized");
    }

    /// Append an entry and write the full cart back to storage.
    ///
    /// Any name and any price are accepted as given. If the cart cannot be
    /// encoded or written, the entry is removed again so memory and storage
    /// stay equal, and the error is returned.
    ///
    /// # Errors
    ///
    /// Returns `WidgetError` if encoding or the storage write fails.
    #[instrument(skip(self, name), fields(key = %self.key))]
    pub fn add_item(&mut self, name: impl Into<String>, price: f64) -> Result<()> {
        self.entries.push(CartEntry::new(name, price));

        if let Err(e) = self.persist() {
            self.entries.pop();
            tracing::error!(error = %e, "Failed to persist cart, add rolled back");
            return Err(e);
        }

        tracing::debug!(count = self.entries.len(), "Item added to cart");
        Ok(())
    }

    /// Number of entries in the cart.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Entries in the order they were added.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Sum of all prices, or `None` if any price is not a finite number.
    #[must_use]
    pub fn subtotal(&self) -> Option<Decimal> {
        cart_widget_core::subtotal(&self.entries)
    }

    /// Key the cart is persisted under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// The underlying persistent store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consume the cart store and return the persistent store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<()> {
        let json = encode_cart(&self.entries)?;
        self.store.set_item(&self.key, &json)?;
        Ok(())
    }
}
