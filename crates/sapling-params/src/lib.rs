//! Sapling network parameters and constants
//!
//! This crate provides network-specific constants: bech32 prefixes for
//! Sapling keys and addresses, Canopy activation heights and the ZIP-212
//! enforcement windows derived from them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod consensus;
pub mod network;

pub use consensus::{Zip212Enforcement, ZIP212_GRACE_PERIOD};
pub use network::{Network, NetworkType};

/// Error types for parameter operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid network specified
    #[error("Invalid network: {0}")]
    InvalidNetwork(String),
}

/// Result type for parameter operations
pub type Result<T> = std::result::Result<T, Error>;
