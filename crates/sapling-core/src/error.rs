//! Error types for Sapling core
//!
//! Distinguishes malformed input (fatal to the call) from the expected
//! outcomes of trial decryption against a key that does not own the note.

use std::fmt;

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Sapling core errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Wrong length, leftover bytes, wrong prefix or a bech32 failure
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Bytes that do not encode a valid scalar, point or field element
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// AEAD authentication failed
    #[error("Note decryption failed")]
    DecryptionFailure,

    /// The ephemeral key does not match `esk * g_d`
    #[error("Ephemeral public key mismatch")]
    EpkMismatch,

    /// The recomputed note commitment does not match `cmu`
    #[error("Note commitment mismatch")]
    CommitmentMismatch,

    /// Note plaintext lead byte is not a known version
    #[error("Unsupported note plaintext version: {0:#04x}")]
    UnsupportedVersion(u8),

    /// No group hash attempt produced a usable point
    #[error("Group hash exhausted")]
    GroupHashExhausted,

    /// Context construction failed
    #[error("Initialization error: {0}")]
    Initialization(String),
}

impl Error {
    /// True for outcomes that only mean "this note is not for this key".
    ///
    /// Scanners skip these and move on to the next candidate.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::DecryptionFailure | Error::EpkMismatch | Error::CommitmentMismatch
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::MalformedInput(_) | Error::InvalidEncoding(_) => ErrorCategory::Encoding,
            Error::DecryptionFailure | Error::EpkMismatch | Error::CommitmentMismatch => {
                ErrorCategory::Decryption
            }
            Error::UnsupportedVersion(_) => ErrorCategory::Notes,
            Error::GroupHashExhausted => ErrorCategory::Address,
            Error::Initialization(_) => ErrorCategory::Internal,
        }
    }
}

/// Error categories for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Wire-format errors
    Encoding,
    /// Trial decryption misses
    Decryption,
    /// Note plaintext errors
    Notes,
    /// Address derivation errors
    Address,
    /// Internal/system errors
    Internal,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Encoding => write!(f, "Encoding"),
            ErrorCategory::Decryption => write!(f, "Decryption"),
            ErrorCategory::Notes => write!(f, "Notes"),
            ErrorCategory::Address => write!(f, "Address"),
            ErrorCategory::Internal => write!(f, "Internal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_detection() {
        assert!(Error::DecryptionFailure.is_recoverable());
        assert!(Error::EpkMismatch.is_recoverable());
        assert!(Error::CommitmentMismatch.is_recoverable());
        assert!(!Error::UnsupportedVersion(3).is_recoverable());
        assert!(!Error::MalformedInput("test".to_string()).is_recoverable());
        assert!(!Error::GroupHashExhausted.is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            Error::InvalidEncoding("test".to_string()).category(),
            ErrorCategory::Encoding
        );
        assert_eq!(Error::EpkMismatch.category(), ErrorCategory::Decryption);
        assert_eq!(Error::UnsupportedVersion(0).category(), ErrorCategory::Notes);
        assert_eq!(Error::GroupHashExhausted.category(), ErrorCategory::Address);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::UnsupportedVersion(3).to_string(),
            "Unsupported note plaintext version: 0x03"
        );
        assert_eq!(ErrorCategory::Decryption.to_string(), "Decryption");
    }
}
