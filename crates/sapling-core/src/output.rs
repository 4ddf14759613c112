//! Sapling output descriptions
//!
//! The serialized form is a fixed 948 bytes:
//! `cv(32) || cmu(32) || epk(32) || enc_ciphertext(580) || out_ciphertext(80) || zkproof(192)`.
//! Fields are kept as opaque bytes; [`OutputDescription::epk`] and
//! [`OutputDescription::cmu`] decode the two that note decryption needs.

use crate::constants::{
    ENC_CIPHERTEXT_SIZE, OUTPUT_DESCRIPTION_SIZE, OUT_CIPHERTEXT_SIZE, ZKPROOF_SIZE,
};
use crate::context::SaplingContext;
use crate::curve::{self, FieldElement};
use crate::encoding::{expect_consumed, take};
use crate::keys::IncomingViewingKey;
use crate::note::{decrypt_note, Note};
use crate::{Error, Result};
use jubjub::ExtendedPoint;
use std::fmt;

/// A shielded output as it appears on chain
#[derive(Clone, PartialEq, Eq)]
pub struct OutputDescription {
    /// Value commitment
    pub cv: [u8; 32],
    /// Note commitment `u`-coordinate
    pub cmu: [u8; 32],
    /// Ephemeral public key
    pub epk: [u8; 32],
    /// Encrypted note plaintext
    pub enc_ciphertext: [u8; ENC_CIPHERTEXT_SIZE],
    /// Encrypted `pk_d || esk` for the sender
    pub out_ciphertext: [u8; OUT_CIPHERTEXT_SIZE],
    /// Groth16 proof
    pub zkproof: [u8; ZKPROOF_SIZE],
}

impl OutputDescription {
    /// Split a serialized output description into its fields.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != OUTPUT_DESCRIPTION_SIZE {
            return Err(Error::MalformedInput(format!(
                "output description must be {} bytes, got {}",
                OUTPUT_DESCRIPTION_SIZE,
                bytes.len()
            )));
        }

        let mut offset = 0;
        let output = Self {
            cv: take(bytes, &mut offset)?,
            cmu: take(bytes, &mut offset)?,
            epk: take(bytes, &mut offset)?,
            enc_ciphertext: take(bytes, &mut offset)?,
            out_ciphertext: take(bytes, &mut offset)?,
            zkproof: take(bytes, &mut offset)?,
        };
        expect_consumed(bytes, offset)?;
        Ok(output)
    }

    /// Serialize back to 948 bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(OUTPUT_DESCRIPTION_SIZE);
        out.extend_from_slice(&self.cv);
        out.extend_from_slice(&self.cmu);
        out.extend_from_slice(&self.epk);
        out.extend_from_slice(&self.enc_ciphertext);
        out.extend_from_slice(&self.out_ciphertext);
        out.extend_from_slice(&self.zkproof);
        out
    }

    /// Decoded ephemeral public key
    pub fn epk(&self) -> Result<ExtendedPoint> {
        curve::decode_point(&self.epk)
    }

    /// Decoded note commitment
    pub fn cmu(&self) -> Result<FieldElement> {
        curve::decode_field(&self.cmu)
    }

    /// Trial-decrypt this output with an incoming viewing key.
    pub fn decrypt(&self, ctx: &SaplingContext, ivk: &IncomingViewingKey) -> Result<Note> {
        let epk = self.epk()?;
        let cmu = self.cmu()?;
        decrypt_note(ctx, ivk, &epk, &cmu, &self.enc_ciphertext)
    }
}

impl fmt::Debug for OutputDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputDescription")
            .field("cv", &hex::encode(self.cv))
            .field("cmu", &hex::encode(self.cmu))
            .field("epk", &hex::encode(self.epk))
            .finish_non_exhaustive()
    }
}
