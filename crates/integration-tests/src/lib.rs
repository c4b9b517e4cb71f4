//! Integration tests for the cart widget.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cart-widget-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end add/count/persist flows over the in-memory store
//! - `file_persistence` - Cart surviving process restarts through the file store

use cart_widget::storage::KeyValueStore;
use cart_widget::ui::{HeadlessPage, RecordingNotifier, UiBinder};
use cart_widget::{CartStore, WidgetConfig};
use cart_widget_core::{CartEntry, decode_cart};

/// Binder over a headless page that has both the counter and products elements.
pub type TestBinder<S> = UiBinder<S, HeadlessPage, RecordingNotifier>;

/// Load the cart from `store` and run the page-load handler.
pub fn open_page<S: KeyValueStore>(store: S) -> TestBinder<S> {
    let config = WidgetConfig::default();
    let cart = CartStore::load(store, config.storage_key.clone());
    let page = HeadlessPage::new()
        .with_element(&config.counter_id)
        .with_element(&config.products_id);
    let mut binder = UiBinder::new(cart, page, RecordingNotifier::new(), &config);
    binder.on_page_load();
    binder
}

/// Decode whatever the binder's cart has persisted.
///
/// # Panics
///
/// Panics if the store cannot be read.
#[must_use]
pub fn persisted<S: KeyValueStore>(binder: &TestBinder<S>) -> Vec<CartEntry> {
    let cart = binder.cart();
    let raw = cart
        .store()
        .get_item(cart.storage_key())
        .unwrap_or_else(|e| panic!("store read failed: {e}"));
    decode_cart(raw.as_deref())
}

/// Text of the counter element.
#[must_use]
pub fn counter_text<S>(binder: &TestBinder<S>) -> Option<&str>
where
    S: KeyValueStore,
{
    binder.page().text(&WidgetConfig::default().counter_id)
}
