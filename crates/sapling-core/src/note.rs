//! Sapling note decryption
//!
//! Decrypts an output's `enc_ciphertext` with an incoming viewing key and
//! parses the 564-byte note plaintext:
//!
//! ```text
//! [leadbyte:1][diversifier:11][value:8 LE][rcm or rseed:32][memo:512]
//! ```
//!
//! Lead byte `0x01` carries `rcm` directly. Lead byte `0x02` (ZIP-212)
//! carries `rseed`, from which both `rcm` and `esk` are derived, and the
//! sender's `epk` must equal `esk * g_d`.
//!
//! References node Sapling decryption logic:
//! - Sapling protocol §4.19.2 (decryption using an incoming viewing key)
//! - ZIP-212 (receiver-side checks for `rseed` plaintexts)

use crate::address::{Diversifier, PaymentAddress};
use crate::constants::{
    COMPACT_NOTE_SIZE, DIVERSIFIER_SIZE, ENC_CIPHERTEXT_SIZE, MEMO_SIZE, NOTE_PLAINTEXT_SIZE,
};
use crate::context::{LegacyRcmPolicy, SaplingContext};
use crate::curve::{self, FieldElement, Scalar};
use crate::keys::{derive_esk, derive_rcm, ka_agree, kdf_sapling, IncomingViewingKey};
use crate::memo::Memo;
use crate::{Error, Result};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Key, Nonce,
};
use jubjub::ExtendedPoint;
use sapling_params::consensus::{LEADBYTE_AFTER_ZIP212, LEADBYTE_BEFORE_ZIP212};
use std::fmt;

/// Note plaintext version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteVersion {
    /// Lead byte `0x01`
    BeforeZip212,
    /// Lead byte `0x02`
    AfterZip212,
}

impl NoteVersion {
    /// Parse a plaintext lead byte.
    pub fn from_leadbyte(leadbyte: u8) -> Result<Self> {
        match leadbyte {
            LEADBYTE_BEFORE_ZIP212 => Ok(NoteVersion::BeforeZip212),
            LEADBYTE_AFTER_ZIP212 => Ok(NoteVersion::AfterZip212),
            other => Err(Error::UnsupportedVersion(other)),
        }
    }

    /// Plaintext lead byte
    pub fn leadbyte(&self) -> u8 {
        match self {
            NoteVersion::BeforeZip212 => LEADBYTE_BEFORE_ZIP212,
            NoteVersion::AfterZip212 => LEADBYTE_AFTER_ZIP212,
        }
    }
}

/// Commitment randomness as carried by the plaintext
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Rseed {
    /// `rcm` itself
    BeforeZip212(Scalar),
    /// Seed for `rcm` and `esk`
    AfterZip212([u8; 32]),
}

impl Rseed {
    /// Decode the 32-byte plaintext field for `version`.
    pub fn from_field(
        version: NoteVersion,
        field: [u8; 32],
        policy: LegacyRcmPolicy,
    ) -> Result<Self> {
        match version {
            NoteVersion::AfterZip212 => Ok(Rseed::AfterZip212(field)),
            NoteVersion::BeforeZip212 => {
                let rcm = match policy {
                    LegacyRcmPolicy::Strict => curve::decode_scalar(&field)?,
                    LegacyRcmPolicy::Lenient => curve::reduce_scalar(&field),
                };
                Ok(Rseed::BeforeZip212(rcm))
            }
        }
    }

    /// Plaintext version this randomness belongs to
    pub fn version(&self) -> NoteVersion {
        match self {
            Rseed::BeforeZip212(_) => NoteVersion::BeforeZip212,
            Rseed::AfterZip212(_) => NoteVersion::AfterZip212,
        }
    }

    /// Note commitment randomness
    pub fn rcm(&self) -> Scalar {
        match self {
            Rseed::BeforeZip212(rcm) => *rcm,
            Rseed::AfterZip212(rseed) => derive_rcm(rseed),
        }
    }

    /// Ephemeral secret key, for `rseed` plaintexts only
    pub fn esk(&self) -> Option<Scalar> {
        match self {
            Rseed::BeforeZip212(_) => None,
            Rseed::AfterZip212(rseed) => Some(derive_esk(rseed)),
        }
    }
}

impl fmt::Debug for Rseed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rseed::BeforeZip212(_) => f.write_str("Rseed::BeforeZip212(..)"),
            Rseed::AfterZip212(_) => f.write_str("Rseed::AfterZip212(..)"),
        }
    }
}

/// A decrypted Sapling note
#[derive(Clone, PartialEq, Eq)]
pub struct Note {
    recipient: PaymentAddress,
    value: u64,
    rseed: Rseed,
    memo: [u8; MEMO_SIZE],
}

impl Note {
    pub(crate) fn from_parts(
        recipient: PaymentAddress,
        value: u64,
        rseed: Rseed,
        memo: [u8; MEMO_SIZE],
    ) -> Self {
        Self {
            recipient,
            value,
            rseed,
            memo,
        }
    }

    /// Plaintext version
    pub fn version(&self) -> NoteVersion {
        self.rseed.version()
    }

    /// Note value in zatoshis
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Recipient address
    pub fn recipient(&self) -> &PaymentAddress {
        &self.recipient
    }

    /// Commitment randomness as carried by the plaintext
    pub fn rseed(&self) -> &Rseed {
        &self.rseed
    }

    /// Note commitment randomness
    pub fn rcm(&self) -> Scalar {
        self.rseed.rcm()
    }

    /// Raw 512-byte memo
    pub fn memo(&self) -> &[u8; MEMO_SIZE] {
        &self.memo
    }

    /// ZIP-302 view of the memo
    pub fn decoded_memo(&self) -> Result<Memo> {
        Memo::decode(&self.memo)
    }

    /// `cmu` of this note.
    pub fn cmu(&self, ctx: &SaplingContext) -> Result<FieldElement> {
        ctx.compute_cmu(
            self.recipient.g_d(),
            self.recipient.pk_d(),
            self.value,
            &self.rcm(),
        )
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("version", &self.version())
            .field("value", &self.value)
            .field("recipient", &self.recipient)
            .finish_non_exhaustive()
    }
}

/// The fields shared by full and compact plaintexts
#[derive(Debug, Clone, Copy)]
pub struct PlaintextPrefix {
    /// Lead byte version
    pub version: NoteVersion,
    /// Recipient diversifier
    pub diversifier: Diversifier,
    /// Value in zatoshis
    pub value: u64,
    /// `rcm` or `rseed`, undecoded
    pub rseed_field: [u8; 32],
}

impl PlaintextPrefix {
    /// Parse the first 52 bytes of a plaintext.
    pub fn parse(plaintext: &[u8]) -> Result<Self> {
        if plaintext.len() < COMPACT_NOTE_SIZE {
            return Err(Error::MalformedInput(format!(
                "note plaintext too short: {} bytes",
                plaintext.len()
            )));
        }

        let version = NoteVersion::from_leadbyte(plaintext[0])?;

        let mut d = [0u8; DIVERSIFIER_SIZE];
        d.copy_from_slice(&plaintext[1..12]);

        let mut value_bytes = [0u8; 8];
        value_bytes.copy_from_slice(&plaintext[12..20]);

        let mut rseed_field = [0u8; 32];
        rseed_field.copy_from_slice(&plaintext[20..52]);

        Ok(Self {
            version,
            diversifier: Diversifier(d),
            value: u64::from_le_bytes(value_bytes),
            rseed_field,
        })
    }
}

/// Open `ciphertext` under `key` with the all-zero nonce.
pub(crate) fn aead_open(key: &[u8; 32], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));
    let nonce = Nonce::from_slice(&[0u8; 12]);
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| Error::DecryptionFailure)
}

/// Require `esk * g_d == epk`.
pub fn check_epk(esk: &Scalar, g_d: &ExtendedPoint, epk: &ExtendedPoint) -> Result<()> {
    if g_d * esk != *epk {
        return Err(Error::EpkMismatch);
    }
    Ok(())
}

/// Compare the recomputed note commitment with `cmu`.
pub fn check_cmu(
    ctx: &SaplingContext,
    recipient: &PaymentAddress,
    value: u64,
    rcm: &Scalar,
    cmu: &FieldElement,
) -> Result<()> {
    let computed = ctx.compute_cmu(recipient.g_d(), recipient.pk_d(), value, rcm)?;
    if computed != *cmu {
        tracing::debug!(
            "cmu mismatch: expected {}, computed {}",
            hex::encode(cmu.to_bytes()),
            hex::encode(computed.to_bytes())
        );
        return Err(Error::CommitmentMismatch);
    }
    Ok(())
}

/// Decrypt a note with an incoming viewing key.
///
/// Returns [`Error::DecryptionFailure`], [`Error::EpkMismatch`] or
/// [`Error::CommitmentMismatch`] when the output is not addressed to `ivk`;
/// see [`Error::is_recoverable`].
pub fn decrypt_note(
    ctx: &SaplingContext,
    ivk: &IncomingViewingKey,
    epk: &ExtendedPoint,
    cmu: &FieldElement,
    ciphertext: &[u8],
) -> Result<Note> {
    if ciphertext.len() != ENC_CIPHERTEXT_SIZE {
        return Err(Error::MalformedInput(format!(
            "Invalid ciphertext length: {} (expected {})",
            ciphertext.len(),
            ENC_CIPHERTEXT_SIZE
        )));
    }

    // Step 1: Key agreement and KDF
    let shared_secret = ka_agree(ivk.scalar(), epk);
    let key = kdf_sapling(&shared_secret, epk);

    // Step 2: ChaCha20Poly1305 with nonce=0
    let plaintext = aead_open(&key, ciphertext)?;
    if plaintext.len() != NOTE_PLAINTEXT_SIZE {
        return Err(Error::DecryptionFailure);
    }

    // Step 3: Version dispatch
    let prefix = PlaintextPrefix::parse(&plaintext)?;
    let rseed = Rseed::from_field(prefix.version, prefix.rseed_field, ctx.config().legacy_rcm)?;
    let recipient = PaymentAddress::new(prefix.diversifier, ivk.scalar())?;

    if let Some(esk) = rseed.esk() {
        check_epk(&esk, recipient.g_d(), epk)?;
    }

    if ctx.config().verify_note_commitment {
        check_cmu(ctx, &recipient, prefix.value, &rseed.rcm(), cmu)?;
    }

    let mut memo = [0u8; MEMO_SIZE];
    memo.copy_from_slice(&plaintext[COMPACT_NOTE_SIZE..]);

    Ok(Note::from_parts(recipient, prefix.value, rseed, memo))
}
