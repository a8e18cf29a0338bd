use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning a corpus into indexed sequences.
#[derive(Debug, Error)]
pub enum Error {
    /// The corpus file could not be opened or read.
    #[error("failed to read corpus {path:?}: {source}")]
    Read {
        /// Path of the corpus file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading from an in-memory or caller-provided reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A token line did not have the `word [pos chunk] label` shape.
    #[error("malformed token line {line}: expected 2 or at least 4 fields, found {fields}")]
    MalformedLine {
        /// 1-based line number in the corpus.
        line: usize,
        /// Number of whitespace-separated fields found.
        fields: usize,
    },

    /// A token has no id in the mapping used for indexing.
    #[error("token {token:?} at sequence {sequence}, position {position} has no id")]
    UnmappedToken {
        /// The token that could not be mapped.
        token: String,
        /// Index of the sequence holding the token.
        sequence: usize,
        /// Position of the token inside its sequence.
        position: usize,
    },

    /// An id has no token in the dictionary used for decoding.
    #[error("id {id} at sequence {sequence}, position {position} is not in the dictionary")]
    UnknownId {
        /// The id that could not be decoded.
        id: usize,
        /// Index of the sequence holding the id.
        sequence: usize,
        /// Position of the id inside its sequence.
        position: usize,
    },
}

/// Result type alias for nerloom operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = Error::MalformedLine { line: 7, fields: 3 };
        assert_eq!(
            err.to_string(),
            "malformed token line 7: expected 2 or at least 4 fields, found 3"
        );

        let err = Error::UnmappedToken {
            token: "Zurich".into(),
            sequence: 2,
            position: 5,
        };
        assert!(err.to_string().contains("Zurich"));
    }

    #[test]
    fn read_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::Read {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
