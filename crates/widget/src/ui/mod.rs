//! UI binding.
//!
//! The page the widget lives on is reached through two ports:
//! - [`PageSurface`] - sets element text and scrolls elements into view
//! - [`Notifier`] - presents acknowledgment messages to the user
//!
//! [`UiBinder`] wires page events to the cart store and these ports.

mod binder;
mod form;
mod messages;
mod notify;
mod surface;

pub use binder::{FormOutcome, UiBinder};
pub use form::{Form, FormField, SubmitEvent};
pub use messages::{Locale, UnknownLocale};
pub use notify::{LogNotifier, Notifier, RecordingNotifier};
pub use surface::{HeadlessPage, PageSurface, ScrollBehavior};
