//! Compact Sapling trial decryption
//!
//! Light clients receive only the first 52 bytes of each `enc_ciphertext`:
//! `[leadbyte:1][diversifier:11][value:8 LE][rcm or rseed:32]`. That prefix
//! is decrypted with the raw ChaCha20 keystream (the Poly1305 tag is not
//! available), so the note commitment check is the only thing tying the
//! plaintext to the output and is always performed here.

use crate::Result;
use chacha20::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
use chacha20::ChaCha20;
use jubjub::ExtendedPoint;
use sapling_core::constants::COMPACT_NOTE_SIZE;
use sapling_core::curve::{self, FieldElement};
use sapling_core::keys::{ka_agree, kdf_sapling};
use sapling_core::note::{check_cmu, check_epk, PlaintextPrefix};
use sapling_core::{
    IncomingViewingKey, NoteVersion, OutputDescription, PaymentAddress, Rseed, SaplingContext,
};
use std::fmt;

/// An output as served to light clients
#[derive(Clone, PartialEq, Eq)]
pub struct CompactOutput {
    /// Note commitment `u`-coordinate
    pub cmu: [u8; 32],
    /// Ephemeral public key
    pub epk: [u8; 32],
    /// First 52 bytes of `enc_ciphertext`
    pub ciphertext: [u8; COMPACT_NOTE_SIZE],
}

impl CompactOutput {
    /// Build from wire fields. Ciphertexts longer than 52 bytes are truncated.
    pub fn from_parts(cmu: &[u8], epk: &[u8], ciphertext: &[u8]) -> Result<Self> {
        if cmu.len() != 32 || epk.len() != 32 || ciphertext.len() < COMPACT_NOTE_SIZE {
            return Err(sapling_core::Error::MalformedInput(format!(
                "compact output fields have lengths {}/{}/{}",
                cmu.len(),
                epk.len(),
                ciphertext.len()
            ))
            .into());
        }

        let mut output = Self {
            cmu: [0u8; 32],
            epk: [0u8; 32],
            ciphertext: [0u8; COMPACT_NOTE_SIZE],
        };
        output.cmu.copy_from_slice(cmu);
        output.epk.copy_from_slice(epk);
        output
            .ciphertext
            .copy_from_slice(&ciphertext[..COMPACT_NOTE_SIZE]);
        Ok(output)
    }
}

impl From<&OutputDescription> for CompactOutput {
    fn from(output: &OutputDescription) -> Self {
        let mut ciphertext = [0u8; COMPACT_NOTE_SIZE];
        ciphertext.copy_from_slice(&output.enc_ciphertext[..COMPACT_NOTE_SIZE]);
        Self {
            cmu: output.cmu,
            epk: output.epk,
            ciphertext,
        }
    }
}

impl fmt::Debug for CompactOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompactOutput")
            .field("cmu", &hex::encode(self.cmu))
            .field("epk", &hex::encode(self.epk))
            .finish_non_exhaustive()
    }
}

/// Note recovered from a compact output (no memo)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactNote {
    /// Recipient address
    pub recipient: PaymentAddress,
    /// Value in zatoshis
    pub value: u64,
    /// Commitment randomness
    pub rseed: Rseed,
}

impl CompactNote {
    /// Plaintext version
    pub fn version(&self) -> NoteVersion {
        self.rseed.version()
    }
}

fn decrypt_prefix(key: &[u8; 32], ciphertext: &[u8; COMPACT_NOTE_SIZE]) -> [u8; COMPACT_NOTE_SIZE] {
    // Block 0 of the keystream is the Poly1305 key; the message starts at block 1.
    let nonce = [0u8; 12];
    let mut chacha = ChaCha20::new(key.into(), (&nonce).into());
    chacha.seek(64);

    let mut plaintext = *ciphertext;
    chacha.apply_keystream(&mut plaintext);
    plaintext
}

/// Attempt to decrypt a compact output with an incoming viewing key.
///
/// Every way the prefix can fail to describe a note for `ivk` (unknown lead
/// byte, unusable diversifier, non-canonical `rcm`, `epk` or `cmu` mismatch)
/// is indistinguishable from a wrong key and is reported as a recoverable
/// error. Only undecodable `epk` / `cmu` fields are fatal.
pub fn try_decrypt_compact_output(
    ctx: &SaplingContext,
    ivk: &IncomingViewingKey,
    output: &CompactOutput,
) -> Result<CompactNote> {
    let epk: ExtendedPoint = curve::decode_point(&output.epk)?;
    let cmu: FieldElement = curve::decode_field(&output.cmu)?;

    let shared_secret = ka_agree(ivk.scalar(), &epk);
    let key = kdf_sapling(&shared_secret, &epk);
    let plaintext = decrypt_prefix(&key, &output.ciphertext);

    let note = parse_prefix(ctx, ivk, &plaintext).map_err(|e| {
        tracing::trace!("compact prefix rejected: {}", e);
        sapling_core::Error::DecryptionFailure
    })?;

    if let Some(esk) = note.rseed.esk() {
        check_epk(&esk, note.recipient.g_d(), &epk)?;
    }
    check_cmu(ctx, &note.recipient, note.value, &note.rseed.rcm(), &cmu)?;

    Ok(note)
}

fn parse_prefix(
    ctx: &SaplingContext,
    ivk: &IncomingViewingKey,
    plaintext: &[u8],
) -> std::result::Result<CompactNote, sapling_core::Error> {
    let prefix = PlaintextPrefix::parse(plaintext)?;
    let rseed = Rseed::from_field(prefix.version, prefix.rseed_field, ctx.config().legacy_rcm)?;
    let recipient = PaymentAddress::new(prefix.diversifier, ivk.scalar())?;
    Ok(CompactNote {
        recipient,
        value: prefix.value,
        rseed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use sapling_core::test_vectors::{bytes, NOTE_IVK, NOTE_PK_D, NOTE_VECTORS};
    use sapling_core::DecryptionConfig;
    use sapling_core::LegacyRcmPolicy;

    fn ivk() -> IncomingViewingKey {
        IncomingViewingKey::from_bytes(&bytes(NOTE_IVK)).unwrap()
    }

    fn compact(i: usize) -> CompactOutput {
        let tv = &NOTE_VECTORS[i];
        let ciphertext = hex::decode(tv.enc_ciphertext).unwrap();
        CompactOutput::from_parts(
            &hex::decode(tv.cmu).unwrap(),
            &hex::decode(tv.epk).unwrap(),
            &ciphertext,
        )
        .unwrap()
    }

    fn core_error(result: Result<CompactNote>) -> sapling_core::Error {
        match result {
            Err(Error::Core(e)) => e,
            other => panic!("expected a core error, got {:?}", other),
        }
    }

    #[test]
    fn test_compact_matches_full_decryption() {
        let ctx = SaplingContext::with_defaults().unwrap();
        for i in [0, 1] {
            let note = try_decrypt_compact_output(&ctx, &ivk(), &compact(i)).unwrap();
            assert_eq!(note.value, NOTE_VECTORS[i].value);
            assert_eq!(note.version().leadbyte(), NOTE_VECTORS[i].version);
            assert_eq!(hex::encode(note.recipient.pk_d_bytes()), NOTE_PK_D);
            assert_eq!(hex::encode(note.rseed.rcm().to_bytes()), NOTE_VECTORS[i].rcm);
        }
    }

    #[test]
    fn test_from_output_description() {
        let raw = hex::decode(NOTE_VECTORS[0].output).unwrap();
        let output = OutputDescription::from_bytes(&raw).unwrap();
        assert_eq!(CompactOutput::from(&output), compact(0));
    }

    #[test]
    fn test_wrong_key_is_recoverable() {
        let ctx = SaplingContext::with_defaults().unwrap();
        let other = IncomingViewingKey::derive(&[1u8; 32], &[2u8; 32]);
        let err = core_error(try_decrypt_compact_output(&ctx, &other, &compact(0)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_commitment_always_checked() {
        // Turning the check off for full outputs must not affect compact ones.
        let ctx = SaplingContext::new(DecryptionConfig {
            verify_note_commitment: false,
            ..Default::default()
        })
        .unwrap();

        let mut output = compact(1);
        output.ciphertext[12] ^= 0x01;
        let err = core_error(try_decrypt_compact_output(&ctx, &ivk(), &output));
        assert_eq!(err, sapling_core::Error::CommitmentMismatch);
    }

    #[test]
    fn test_non_canonical_rcm() {
        let strict = SaplingContext::with_defaults().unwrap();
        let err = core_error(try_decrypt_compact_output(&strict, &ivk(), &compact(2)));
        assert_eq!(err, sapling_core::Error::DecryptionFailure);

        let lenient = SaplingContext::new(DecryptionConfig {
            legacy_rcm: LegacyRcmPolicy::Lenient,
            ..Default::default()
        })
        .unwrap();
        let note = try_decrypt_compact_output(&lenient, &ivk(), &compact(2)).unwrap();
        assert_eq!(note.value, NOTE_VECTORS[2].value);
    }

    #[test]
    fn test_malformed_fields() {
        assert!(CompactOutput::from_parts(&[0u8; 31], &[0u8; 32], &[0u8; 52]).is_err());
        assert!(CompactOutput::from_parts(&[0u8; 32], &[0u8; 32], &[0u8; 51]).is_err());

        let ctx = SaplingContext::with_defaults().unwrap();
        let mut output = compact(0);
        output.cmu = [0xff; 32];
        assert!(matches!(
            core_error(try_decrypt_compact_output(&ctx, &ivk(), &output)),
            sapling_core::Error::InvalidEncoding(_)
        ));
    }
}
