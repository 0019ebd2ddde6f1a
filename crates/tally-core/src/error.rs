//! Error types for the tally.

use thiserror::Error;

/// Top-level result type for tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Top-level error type for the tally.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("store error: {0}")]
    Store(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("import error: {0}")]
    Import(#[from] ImportError),
}

/// Errors raised while reading an import blob.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("import data is not valid JSON: {0}")]
    Malformed(String),

    #[error("import data has no 'counters' list")]
    MissingCounters,

    #[error("counter #{index} is not a valid counter entry: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_human_readable_messages() {
        let err = ImportError::MissingCounters;
        assert!(err.to_string().contains("counters"));

        let err = ImportError::InvalidEntry {
            index: 3,
            reason: "missing field `mineralName`".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("#3"));
        assert!(msg.contains("mineralName"));
    }

    #[test]
    fn import_error_converts_into_tally_error() {
        let err: TallyError = ImportError::MissingCounters.into();
        assert!(matches!(err, TallyError::Import(ImportError::MissingCounters)));
        assert!(err.to_string().starts_with("import error"));
    }
}
