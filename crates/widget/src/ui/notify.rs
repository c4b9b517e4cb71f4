//! Notifier port.
//!
//! Acknowledgments are handed to a notifier as plain strings. Whether the
//! presentation blocks (a modal dialog, a terminal prompt) or not (a log line)
//! is up to the implementation.

/// Presents a message to the user.
pub trait Notifier {
    /// Show `message`. Blocking implementations return once it is dismissed.
    fn notify(&mut self, message: &str);
}

/// Collects messages instead of showing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Vec<String>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Emits messages as `info` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) {
        tracing::info!(ack = message, "Acknowledgment shown");
    }
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

impl<T: Notifier + ?Sized> Notifier for Box<T> {
    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let mut notifier = RecordingNotifier::new();
        notifier.notify("first");
        notifier.notify("second");
        assert_eq!(notifier.messages(), ["first", "second"]);
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_log_notifier_records_message_once() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            LogNotifier.notify("Widget added to cart!");
        });

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        let line: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(line["fields"]["message"], "Acknowledgment shown");
        assert_eq!(line["fields"]["ack"], "Widget added to cart!");
        assert_eq!(output.matches("\"message\"").count(), 1);
    }

    #[test]
    fn test_boxed_notifier_forwards() {
        let mut recorder = RecordingNotifier::new();
        {
            let mut boxed: Box<dyn Notifier + '_> = Box::new(&mut recorder);
            boxed.notify("hello");
        }
        assert_eq!(recorder.messages(), ["hello"]);
    }
}
