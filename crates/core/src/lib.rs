//! Cart Widget Core - Shared types library.
//!
//! This crate provides the data types shared by the cart widget components:
//! - `widget` - Cart store, storage adapters and UI binding
//! - `cli` - Terminal front end driving the widget
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access, no UI. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Cart entries, their persisted encoding, and price helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
