//! Core types for the cart widget.

pub mod entry;
pub mod price;

pub use entry::{CartEntry, decode_cart, encode_cart, parse_cart};
pub use price::{format_price, subtotal};
