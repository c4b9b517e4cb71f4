//! Page event handlers.

use tracing::instrument;

use super::form::SubmitEvent;
use super::messages::Locale;
use super::notify::Notifier;
use super::surface::{PageSurface, ScrollBehavior};
use crate::cart::CartStore;
use crate::config::WidgetConfig;
use crate::error::Result;
use crate::storage::KeyValueStore;

/// What a form submission did with the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Contents were dropped without being read or sent anywhere.
    Discarded { fields_cleared: usize },
}

/// Binds page events to the cart store, the page surface and the notifier.
#[derive(Debug)]
pub struct UiBinder<S, P, N> {
    cart: CartStore<S>,
    page: P,
    notifier: N,
    counter_id: String,
    products_id: String,
    locale: Locale,
}

impl<S, P, N> UiBinder<S, P, N>
where
    S: KeyValueStore,
    P: PageSurface,
    N: Notifier,
{
    /// Create a binder using the element ids and locale from `config`.
    pub fn new(cart: CartStore<S>, page: P, notifier: N, config: &WidgetConfig) -> Self {
        Self {
            cart,
            page,
            notifier,
            counter_id: config.counter_id.clone(),
            products_id: config.products_id.clone(),
            locale: config.locale,
        }
    }

    /// Run once the page structure is ready: show the hydrated item count.
    pub fn on_page_load(&mut self) {
        tracing::debug!(count = self.cart.count(), "Page loaded");
        self.refresh_counter_display();
    }

    /// Show the current item count in the counter element, if it exists.
    pub fn refresh_counter_display(&mut self) {
        let count = self.cart.count().to_string();
        if !self.page.set_text(&self.counter_id, &count) {
            tracing::debug!(id = %self.counter_id, "Counter element missing, skipping refresh");
        }
    }

    /// Add an item, refresh the counter and acknowledge the add.
    ///
    /// Nothing is refreshed or acknowledged when the add fails.
    ///
    /// # Errors
    ///
    /// Returns `WidgetError` if the cart could not be persisted.
    #[instrument(skip(self))]
    pub fn add_to_cart_handler(&mut self, name: &str, price: f64) -> Result<()> {
        self.cart.add_item(name, price)?;
        self.refresh_counter_display();
        self.notifier.notify(&self.locale.added_to_cart(name));
        tracing::info!(count = self.cart.count(), "Item added to cart");
        Ok(())
    }

    /// Smooth-scroll the products section into view.
    pub fn scroll_to_products(&mut self) {
        if !self
            .page
            .scroll_into_view(&self.products_id, ScrollBehavior::Smooth)
        {
            tracing::debug!(id = %self.products_id, "Products section missing, not scrolling");
        }
    }

    /// Handle a form submission.
    ///
    /// Prevents the default submission, acknowledges it and clears the form.
    /// Field values are never read or transmitted.
    pub fn submit_form_handler(&mut self, event: &mut SubmitEvent<'_>) -> FormOutcome {
        event.prevent_default();
        self.notifier.notify(self.locale.form_submitted());
        let form = event.target();
        let fields_cleared = form.reset();
        tracing::warn!(
            form = %form.id(),
            fields_cleared,
            "Form submission acknowledged but its contents are not sent anywhere"
        );
        FormOutcome::Discarded { fields_cleared }
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    #[must_use]
    pub const fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Split the binder back into its parts.
    #[must_use]
    pub fn into_parts(self) -> (CartStore<S>, P, N) {
        (self.cart, self.page, self.notifier)
    }
}
