//! Interpretation of the 512-byte memo field (ZIP-302)
//!
//! Decryption hands back the raw memo bytes untouched; this module is an
//! optional view over them.

use crate::constants::MEMO_SIZE;
use crate::{Error, Result};

/// Maximum memo length in bytes
pub const MAX_MEMO_LENGTH: usize = MEMO_SIZE;

/// Decoded memo contents
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Memo {
    /// `0xF6` followed by zeros
    #[default]
    Empty,
    /// UTF-8 text, trailing zero padding removed
    Text(String),
    /// `0xFF` prefix: application-defined bytes
    Arbitrary(Vec<u8>),
    /// Reserved prefixes (`0xF5`, `0xF6` with content, `0xF7..=0xFE`)
    Future(Vec<u8>),
}

impl Memo {
    /// Decode memo from bytes
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != MAX_MEMO_LENGTH {
            return Err(Error::MalformedInput(format!(
                "Memo must be exactly {} bytes, got {}",
                MAX_MEMO_LENGTH,
                bytes.len()
            )));
        }

        match bytes[0] {
            0x00..=0xF4 => {
                let end = bytes
                    .iter()
                    .rposition(|&b| b != 0)
                    .map(|i| i + 1)
                    .unwrap_or(0);
                String::from_utf8(bytes[..end].to_vec())
                    .map(Memo::Text)
                    .map_err(|_| Error::InvalidEncoding("memo text is not UTF-8".to_string()))
            }
            0xF6 if bytes[1..].iter().all(|&b| b == 0) => Ok(Memo::Empty),
            0xFF => Ok(Memo::Arbitrary(bytes[1..].to_vec())),
            _ => Ok(Memo::Future(bytes.to_vec())),
        }
    }

    /// Check if memo is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Memo::Empty)
    }

    /// Get as string (if text memo)
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Memo::Text(text) => Some(text),
            _ => None,
        }
    }
}
