//! Command implementations.
//!
//! Every command opens a [`Session`]: the persisted cart is loaded and the
//! page-load handler runs, just as when a page is opened.

pub mod cart;
pub mod page;

use std::fmt::Display;
use std::io::{self, Write};

use cart_widget::storage::{FileStore, StorageError};
use cart_widget::ui::{HeadlessPage, LogNotifier, Notifier, UiBinder};
use cart_widget::{CartStore, WidgetConfig, WidgetError};
use thiserror::Error;

use crate::terminal::TerminalNotifier;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Widget(#[from] WidgetError),

    /// Storage could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Output could not be written.
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

/// Widget bound to the file store and an in-memory page.
pub type Binder = UiBinder<FileStore, HeadlessPage, Box<dyn Notifier>>;

/// A loaded widget plus the ids needed to read the page back.
pub struct Session {
    binder: Binder,
    counter_id: String,
}

impl Session {
    /// Open the storage file, hydrate the cart and run the page-load handler.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Storage` if the storage file cannot be read.
    pub fn open(config: &WidgetConfig, assume_yes: bool) -> Result<Self, CommandError> {
        let store = FileStore::open(&config.storage_path)?;
        let cart = CartStore::load(store, config.storage_key.clone());
        let page = HeadlessPage::new()
            .with_element(&config.counter_id)
            .with_element(&config.products_id);
        let notifier: Box<dyn Notifier> = if assume_yes {
            Box::new(LogNotifier)
        } else {
            Box::new(TerminalNotifier)
        };

        let mut binder = UiBinder::new(cart, page, notifier, config);
        binder.on_page_load();

        Ok(Self {
            binder,
            counter_id: config.counter_id.clone(),
        })
    }

    /// Current text of the counter element.
    #[must_use]
    pub fn counter_text(&self) -> &str {
        self.binder.page().text(&self.counter_id).unwrap_or_default()
    }
}

/// Write one line to stdout.
fn output(line: impl Display) -> Result<(), CommandError> {
    writeln!(io::stdout().lock(), "{line}")?;
    Ok(())
}
