//! Error types for dreamspell-content.

use std::path::PathBuf;

/// Errors raised while loading a content table.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Returned when the content file cannot be read.
    #[error("failed to read content file {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the document is not valid content JSON.
    #[error("invalid content json: {reason}")]
    Json {
        /// Parser message, including line and column.
        reason: String,
    },

    /// Returned when two seal entries share an id.
    #[error("duplicate seal id {id}")]
    DuplicateSeal {
        /// Repeated id.
        id: u8,
    },

    /// Returned when two tone entries share an id.
    #[error("duplicate tone id {id}")]
    DuplicateTone {
        /// Repeated id.
        id: u8,
    },

    /// Returned when a seal entry id is outside 1..=20.
    #[error("seal entry id {id} is outside 1..=20")]
    SealId {
        /// Offending id.
        id: u8,
    },

    /// Returned when a tone entry id is outside 1..=13.
    #[error("tone entry id {id} is outside 1..=13")]
    ToneId {
        /// Offending id.
        id: u8,
    },
}

impl From<serde_json::Error> for ContentError {
    fn from(e: serde_json::Error) -> Self {
        ContentError::Json {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            ContentError::DuplicateSeal { id: 3 }.to_string(),
            "duplicate seal id 3"
        );
        assert_eq!(
            ContentError::ToneId { id: 14 }.to_string(),
            "tone entry id 14 is outside 1..=13"
        );
        let e = ContentError::Io {
            path: PathBuf::from("/no/such.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(e.to_string(), "failed to read content file /no/such.json: gone");
    }

    #[test]
    fn from_serde_json() {
        let err = serde_json::from_str::<u8>("nope").unwrap_err();
        let e = ContentError::from(err);
        assert!(matches!(e, ContentError::Json { .. }));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + std::error::Error>() {}
        assert_send_sync::<ContentError>();
    }
}
