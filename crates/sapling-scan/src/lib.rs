//! Trial decryption of Sapling outputs for light clients
//!
//! Wraps `sapling-core` note decryption with the pieces a scanner needs:
//! compact (52-byte) trial decryption, ZIP-212 enforcement by block height
//! and a bounded thread pool for batches.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod compact;
pub mod error;
pub mod scanner;

pub use compact::{try_decrypt_compact_output, CompactNote, CompactOutput};
pub use error::{Error, Result};
pub use scanner::{ScanConfig, ScannedNote, Scanner};
