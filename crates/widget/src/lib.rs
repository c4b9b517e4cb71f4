//! Cart Widget library.
//!
//! A minimal shopping-cart widget: an ordered list of added items mirrored
//! into a persistent key-value store, a visible item counter, a smooth scroll
//! to the products section and a stub form-submit acknowledgment.
//!
//! # Architecture
//!
//! - [`cart::CartStore`] owns the cart and a handle to a [`storage::KeyValueStore`]
//! - [`ui::UiBinder`] wires page events to the store, a [`ui::PageSurface`]
//!   and a [`ui::Notifier`]
//!
//! Storage, page and notifier are traits so the widget runs headless in tests
//! and behind the terminal front end.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod storage;
pub mod ui;

pub use cart::CartStore;
pub use config::WidgetConfig;
pub use error::{Result, WidgetError};
