//! Blocking terminal acknowledgments.

use std::io::{self, BufRead, Write};

use cart_widget::ui::Notifier;

/// Prints a message and waits until the user presses Enter.
///
/// The terminal counterpart of a modal alert: nothing else runs until the
/// message is dismissed.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, message: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = write!(stdout, "{message} [Enter] ").and_then(|()| stdout.flush()) {
            tracing::debug!(error = %e, "Failed to write acknowledgment");
            return;
        }
        drop(stdout);

        let mut line = String::new();
        if let Err(e) = io::stdin().lock().read_line(&mut line) {
            tracing::debug!(error = %e, "Failed to read acknowledgment");
        }
    }
}
