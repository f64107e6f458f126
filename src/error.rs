//! Error types for the plugin glue.
//!
//! The alignment engine itself is total and never returns an error; these
//! variants cover decoding host input and validating configuration.

use thiserror::Error;

/// Result type alias for plugin operations.
pub type Result<T> = std::result::Result<T, AlignmentError>;

#[derive(Debug, Error)]
pub enum AlignmentError {
    /// Host passed bytes that are not valid UTF-8
    #[error("Invalid UTF-8 in {field}: {source}")]
    InvalidUtf8 {
        field: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Invalid config JSON: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("Unknown alignment mode '{0}'. Use 'local' or 'global'.")]
    UnknownMode(String),

    #[error("Unknown sequence kind '{0}'. Use 'dna' or 'protein'.")]
    UnknownKind(String),

    /// One of the sequences was empty or whitespace only
    #[error("Please enter both sequences ({0} is empty)")]
    MissingSequence(&'static str),

    /// Alignment input outside ASCII; the engine scores one byte per symbol
    #[error("Unsupported symbol '{symbol}' in {field}: sequences must be ASCII")]
    NonAsciiSequence { field: &'static str, symbol: char },

    #[error("Search pattern must not be empty")]
    EmptyPattern,

    #[error("Serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Decodes a host argument as UTF-8, naming the argument on failure.
pub(crate) fn decode_utf8<'a>(field: &'static str, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|source| AlignmentError::InvalidUtf8 { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_names_field() {
        let err = decode_utf8("seq2", &[0x41, 0xff]).unwrap_err();
        assert!(matches!(err, AlignmentError::InvalidUtf8 { field: "seq2", .. }));
        assert!(err.to_string().starts_with("Invalid UTF-8 in seq2"));
    }

    #[test]
    fn test_missing_sequence_message() {
        let err = AlignmentError::MissingSequence("seq1");
        assert_eq!(err.to_string(), "Please enter both sequences (seq1 is empty)");
    }

    #[test]
    fn test_non_ascii_message() {
        let err = AlignmentError::NonAsciiSequence {
            field: "seq2",
            symbol: 'Ñ',
        };
        assert_eq!(err.to_string(), "Unsupported symbol 'Ñ' in seq2: sequences must be ASCII");
    }
}
