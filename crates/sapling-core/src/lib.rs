//! Sapling client-side cryptography
//!
//! This crate implements the pieces of the Sapling protocol a light wallet
//! needs to receive funds: group hashing onto Jubjub, incoming viewing key
//! derivation, payment addresses, note commitments, note decryption with an
//! incoming or outgoing viewing key, and the wire formats of viewing keys
//! and output descriptions.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod address;
pub mod commitment;
pub mod constants;
pub mod context;
pub mod curve;
mod encoding;
pub mod error;
pub mod group_hash;
pub mod keys;
pub mod memo;
pub mod note;
pub mod output;
pub mod recovery;
pub mod viewing_key;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_vectors;

pub use address::{diversify_hash, Diversifier, PaymentAddress};
pub use commitment::NoteCommitmentParams;
pub use context::{DecryptionConfig, LegacyRcmPolicy, SaplingContext};
pub use error::{Error, ErrorCategory, Result};
pub use group_hash::{find_group_hash, group_hash};
pub use keys::{derive_ivk, IncomingViewingKey};
pub use memo::{Memo, MAX_MEMO_LENGTH};
pub use note::{decrypt_note, Note, NoteVersion, Rseed};
pub use output::OutputDescription;
pub use recovery::{recover_output_with_ovk, OutgoingViewingKey};
pub use viewing_key::{ExtendedFullViewingKey, ViewingKey};

pub use sapling_params::{Network, NetworkType, Zip212Enforcement};
