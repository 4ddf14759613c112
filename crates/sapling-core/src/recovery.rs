//! Sender-side recovery of outputs with an outgoing viewing key
//!
//! `out_ciphertext` holds `pk_d || esk` encrypted under
//! `ock = PRF^ock(ovk, cv, cmu, epk)`. With those two values the sender
//! repeats the key agreement and opens `enc_ciphertext`.

use crate::address::PaymentAddress;
use crate::constants::{COMPACT_NOTE_SIZE, MEMO_SIZE, NOTE_PLAINTEXT_SIZE, OUT_PLAINTEXT_SIZE};
use crate::context::SaplingContext;
use crate::curve;
use crate::keys::{ka_agree, kdf_sapling, prf_ock};
use crate::note::{aead_open, check_cmu, check_epk, Note, PlaintextPrefix, Rseed};
use crate::output::OutputDescription;
use crate::{Error, Result};
use std::fmt;

/// Outgoing viewing key
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct OutgoingViewingKey(pub [u8; 32]);

impl fmt::Debug for OutgoingViewingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutgoingViewingKey").finish_non_exhaustive()
    }
}

/// Recover the note of an output this wallet sent.
pub fn recover_output_with_ovk(
    ctx: &SaplingContext,
    ovk: &OutgoingViewingKey,
    output: &OutputDescription,
) -> Result<Note> {
    let epk = output.epk()?;
    let cmu = output.cmu()?;

    let ock = prf_ock(&ovk.0, &output.cv, &output.cmu, &output.epk);
    let op = aead_open(&ock, &output.out_ciphertext)?;
    if op.len() != OUT_PLAINTEXT_SIZE {
        return Err(Error::DecryptionFailure);
    }

    let mut pk_d = [0u8; 32];
    pk_d.copy_from_slice(&op[..32]);
    let mut esk = [0u8; 32];
    esk.copy_from_slice(&op[32..]);
    let pk_d = curve::decode_prime_order_point(&pk_d)?;
    let esk = curve::decode_scalar(&esk)?;

    let shared_secret = ka_agree(&esk, &pk_d);
    let key = kdf_sapling(&shared_secret, &epk);
    let plaintext = aead_open(&key, &output.enc_ciphertext)?;
    if plaintext.len() != NOTE_PLAINTEXT_SIZE {
        return Err(Error::DecryptionFailure);
    }

    let prefix = PlaintextPrefix::parse(&plaintext)?;
    let rseed = Rseed::from_field(prefix.version, prefix.rseed_field, ctx.config().legacy_rcm)?;
    let recipient = PaymentAddress::from_parts(prefix.diversifier, pk_d)?;

    check_epk(&esk, recipient.g_d(), &epk)?;
    if let Some(derived) = rseed.esk() {
        if derived != esk {
            return Err(Error::EpkMismatch);
        }
    }

    if ctx.config().verify_note_commitment {
        check_cmu(ctx, &recipient, prefix.value, &rseed.rcm(), &cmu)?;
    }

    let mut memo = [0u8; MEMO_SIZE];
    memo.copy_from_slice(&plaintext[COMPACT_NOTE_SIZE..]);

    Ok(Note::from_parts(recipient, prefix.value, rseed, memo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::IncomingViewingKey;
    use crate::test_vectors::{
        bytes, pad_memo, NOTE_IVK, NOTE_OVK, NOTE_PK_D, NOTE_VECTORS, PUBLISHED_NOTE_VECTORS,
    };

    fn output(i: usize) -> OutputDescription {
        OutputDescription::from_bytes(&hex::decode(NOTE_VECTORS[i].output).unwrap()).unwrap()
    }

    #[test]
    fn test_recover_matches_recipient_view() {
        let ctx = SaplingContext::with_defaults().unwrap();
        let ovk = OutgoingViewingKey(bytes(NOTE_OVK));
        let ivk = IncomingViewingKey::from_bytes(&bytes(NOTE_IVK)).unwrap();

        for i in [0, 1] {
            let sent = recover_output_with_ovk(&ctx, &ovk, &output(i)).unwrap();
            let received = output(i).decrypt(&ctx, &ivk).unwrap();
            assert_eq!(sent, received, "vector {}", i);
            assert_eq!(hex::encode(sent.recipient().pk_d_bytes()), NOTE_PK_D);
        }
    }

    #[test]
    fn test_recover_published_vectors() {
        let ctx = SaplingContext::with_defaults().unwrap();
        for (i, tv) in PUBLISHED_NOTE_VECTORS.iter().enumerate() {
            let output = OutputDescription::from_bytes(&tv.output()).unwrap();
            let ovk = OutgoingViewingKey(bytes(tv.ovk));
            let ivk = IncomingViewingKey::from_bytes(&bytes(tv.ivk)).unwrap();

            let sent = recover_output_with_ovk(&ctx, &ovk, &output).unwrap();
            assert_eq!(sent.value(), tv.v, "vector {}", i);
            assert_eq!(hex::encode(sent.rcm().to_bytes()), tv.rcm, "vector {}", i);
            assert_eq!(sent.memo(), &pad_memo(tv.memo), "vector {}", i);
            assert_eq!(
                hex::encode(sent.recipient().diversifier().as_bytes()),
                tv.default_d
            );
            assert_eq!(hex::encode(sent.recipient().pk_d_bytes()), tv.default_pk_d);
            assert_eq!(sent, output.decrypt(&ctx, &ivk).unwrap(), "vector {}", i);
        }
    }

    #[test]
    fn test_wrong_ovk() {
        let ctx = SaplingContext::with_defaults().unwrap();
        let ovk = OutgoingViewingKey([0u8; 32]);
        assert_eq!(
            recover_output_with_ovk(&ctx, &ovk, &output(0)),
            Err(Error::DecryptionFailure)
        );
    }

    #[test]
    fn test_cv_binds_ock() {
        let ctx = SaplingContext::with_defaults().unwrap();
        let ovk = OutgoingViewingKey(bytes(NOTE_OVK));
        let mut out = output(0);
        out.cv[0] ^= 1;
        assert_eq!(
            recover_output_with_ovk(&ctx, &ovk, &out),
            Err(Error::DecryptionFailure)
        );
    }
}
