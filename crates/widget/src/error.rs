//! Unified error handling for the widget.
//!
//! All fallible cart operations return `Result<T, WidgetError>`.

use thiserror::Error;

use crate::storage::StorageError;

/// Widget-level error type.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Persistent storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Cart could not be serialized.
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type alias for `WidgetError`.
pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_error_display() {
        let err = WidgetError::from(StorageError::QuotaExceeded {
            key: "cart".to_string(),
            needed: 120,
            quota: 100,
        });
        assert_eq!(
            err.to_string(),
            "Storage error: Quota exceeded writing cart: needs 120 bytes, quota is 100"
        );
    }
}
