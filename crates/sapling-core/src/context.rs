//! Decryption context and configuration
//!
//! A [`SaplingContext`] is built once, holds the note commitment generators
//! and the decryption policy, and is shared read-only (by reference or
//! `Arc`) by everything that decrypts notes.

use crate::commitment::NoteCommitmentParams;
use crate::curve::{FieldElement, Scalar};
use crate::Result;
use jubjub::ExtendedPoint;
use serde::{Deserialize, Serialize};

/// How a version `0x01` plaintext's `rcm` field is decoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyRcmPolicy {
    /// Reject encodings of values `>= r_J`
    #[default]
    Strict,
    /// Reduce the 256-bit value modulo `r_J`
    Lenient,
}

/// Note decryption configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecryptionConfig {
    /// Legacy `rcm` decoding policy
    pub legacy_rcm: LegacyRcmPolicy,
    /// Recompute the note commitment and compare it with `cmu`
    pub verify_note_commitment: bool,
}

impl Default for DecryptionConfig {
    fn default() -> Self {
        Self {
            legacy_rcm: LegacyRcmPolicy::Strict,
            verify_note_commitment: true,
        }
    }
}

/// Immutable parameters for Sapling note decryption
#[derive(Debug, Clone)]
pub struct SaplingContext {
    config: DecryptionConfig,
    note_commitment: NoteCommitmentParams,
}

impl SaplingContext {
    /// Build a context, precomputing the note commitment generators.
    pub fn new(config: DecryptionConfig) -> Result<Self> {
        let note_commitment = NoteCommitmentParams::new()?;
        tracing::debug!(
            "Sapling context ready (legacy_rcm={:?}, verify_note_commitment={})",
            config.legacy_rcm,
            config.verify_note_commitment
        );
        Ok(Self {
            config,
            note_commitment,
        })
    }

    /// Context with [`DecryptionConfig::default`].
    pub fn with_defaults() -> Result<Self> {
        Self::new(DecryptionConfig::default())
    }

    /// Decryption configuration
    pub fn config(&self) -> &DecryptionConfig {
        &self.config
    }

    /// Note commitment generators
    pub fn note_commitment(&self) -> &NoteCommitmentParams {
        &self.note_commitment
    }

    /// `cmu` of a note with the given recipient, value and `rcm`.
    pub fn compute_cmu(
        &self,
        g_d: &ExtendedPoint,
        pk_d: &ExtendedPoint,
        value: u64,
        rcm: &Scalar,
    ) -> Result<FieldElement> {
        self.note_commitment.cmu(g_d, pk_d, value, rcm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DecryptionConfig::default();
        assert_eq!(config.legacy_rcm, LegacyRcmPolicy::Strict);
        assert!(config.verify_note_commitment);
    }

    #[test]
    fn test_config_serde() {
        let config: DecryptionConfig =
            serde_json::from_str(r#"{"legacy_rcm":"lenient"}"#).unwrap();
        assert_eq!(config.legacy_rcm, LegacyRcmPolicy::Lenient);
        assert!(config.verify_note_commitment);

        let json = serde_json::to_string(&DecryptionConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"legacy_rcm":"strict","verify_note_commitment":true}"#
        );
    }

    #[test]
    fn test_context_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SaplingContext>();

        let ctx = SaplingContext::with_defaults().unwrap();
        assert_eq!(ctx.config(), &DecryptionConfig::default());
    }
}
