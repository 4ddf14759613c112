//! Sapling key derivation
//!
//! `CRH^ivk`, `KDF^Sapling`, `PRF^expand`, `PRF^ock` and the key agreement
//! used by note encryption.

use crate::address::{Diversifier, PaymentAddress};
use crate::constants::{
    CRH_IVK_PERSONALIZATION, KDF_SAPLING_PERSONALIZATION, PRF_EXPAND_ESK,
    PRF_EXPAND_PERSONALIZATION, PRF_EXPAND_RCM, PRF_OCK_PERSONALIZATION,
};
use crate::curve::{self, Scalar};
use crate::Result;
use blake2b_simd::Params as Blake2bParams;
use blake2s_simd::Params as Blake2sParams;
use jubjub::ExtendedPoint;
use std::fmt;

/// `CRH^ivk(ak, nk)`
///
/// The top five bits of the last byte are cleared so the output is always a
/// canonical scalar.
pub fn derive_ivk(ak: &[u8; 32], nk: &[u8; 32]) -> [u8; 32] {
    let hash = Blake2sParams::new()
        .hash_length(32)
        .personal(CRH_IVK_PERSONALIZATION)
        .to_state()
        .update(ak)
        .update(nk)
        .finalize();

    let mut ivk = *hash.as_array();
    ivk[31] &= 0x07;
    ivk
}

/// `KDF^Sapling(shared_secret, epk)`
pub fn kdf_sapling(shared_secret: &ExtendedPoint, epk: &ExtendedPoint) -> [u8; 32] {
    let hash = Blake2bParams::new()
        .hash_length(32)
        .personal(KDF_SAPLING_PERSONALIZATION)
        .to_state()
        .update(&curve::encode_point(shared_secret))
        .update(&curve::encode_point(epk))
        .finalize();

    let mut key = [0u8; 32];
    key.copy_from_slice(hash.as_bytes());
    key
}

/// `PRF^expand(seed, t)`
pub fn prf_expand(seed: &[u8; 32], t: u8) -> [u8; 64] {
    let hash = Blake2bParams::new()
        .hash_length(64)
        .personal(PRF_EXPAND_PERSONALIZATION)
        .to_state()
        .update(seed)
        .update(&[t])
        .finalize();

    let mut out = [0u8; 64];
    out.copy_from_slice(hash.as_bytes());
    out
}

/// Note commitment randomness derived from `rseed`
pub fn derive_rcm(rseed: &[u8; 32]) -> Scalar {
    curve::scalar_from_wide(&prf_expand(rseed, PRF_EXPAND_RCM))
}

/// Ephemeral secret key derived from `rseed`
pub fn derive_esk(rseed: &[u8; 32]) -> Scalar {
    curve::scalar_from_wide(&prf_expand(rseed, PRF_EXPAND_ESK))
}

/// `KA^Sapling.Agree(sk, P) = [8] (sk * P)`
pub fn ka_agree(sk: &Scalar, point: &ExtendedPoint) -> ExtendedPoint {
    (point * sk).mul_by_cofactor()
}

/// `PRF^ock(ovk, cv, cmu, epk)`
pub fn prf_ock(ovk: &[u8; 32], cv: &[u8; 32], cmu: &[u8; 32], epk: &[u8; 32]) -> [u8; 32] {
    let hash = Blake2bParams::new()
        .hash_length(32)
        .personal(PRF_OCK_PERSONALIZATION)
        .to_state()
        .update(ovk)
        .update(cv)
        .update(cmu)
        .update(epk)
        .finalize();

    let mut ock = [0u8; 32];
    ock.copy_from_slice(hash.as_bytes());
    ock
}

/// Incoming viewing key: a scalar that decrypts notes and derives addresses
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct IncomingViewingKey {
    inner: Scalar,
}

impl IncomingViewingKey {
    /// Parse a canonical 32-byte IVK.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        Ok(Self {
            inner: curve::decode_scalar(bytes)?,
        })
    }

    /// IVK for a full viewing key's `ak` and `nk`.
    pub fn derive(ak: &[u8; 32], nk: &[u8; 32]) -> Self {
        // Masked to 251 bits, so below r_J and reduction is the identity.
        Self {
            inner: curve::reduce_scalar(&derive_ivk(ak, nk)),
        }
    }

    /// Get IVK as 32-byte array
    pub fn to_bytes(&self) -> [u8; 32] {
        self.inner.to_bytes()
    }

    /// The underlying scalar
    pub fn scalar(&self) -> &Scalar {
        &self.inner
    }

    /// Payment address for diversifier `d`.
    pub fn to_payment_address(&self, d: Diversifier) -> Result<PaymentAddress> {
        PaymentAddress::new(d, &self.inner)
    }
}

impl fmt::Debug for IncomingViewingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncomingViewingKey").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_vectors::{bytes, IVK_VECTORS, NOTE_VECTORS};
    use ff::Field;

    #[test]
    fn test_derive_ivk_vectors() {
        for (i, tv) in IVK_VECTORS.iter().enumerate() {
            let ivk = derive_ivk(&bytes(tv.ak), &bytes(tv.nk));
            assert_eq!(hex::encode(ivk), tv.ivk, "vector {}", i);
        }
    }

    #[test]
    fn test_incoming_viewing_key_derive() {
        let tv = &IVK_VECTORS[0];
        let ivk = IncomingViewingKey::derive(&bytes(tv.ak), &bytes(tv.nk));
        assert_eq!(hex::encode(ivk.to_bytes()), tv.ivk);
        assert_eq!(IncomingViewingKey::from_bytes(&bytes(tv.ivk)).unwrap(), ivk);
    }

    #[test]
    fn test_ivk_rejects_non_canonical() {
        assert!(IncomingViewingKey::from_bytes(&[0xff; 32]).is_err());
    }

    #[test]
    fn test_prf_expand_derivations() {
        let tv = &NOTE_VECTORS[0];
        let rseed: [u8; 32] = bytes(tv.rseed_field);
        assert_eq!(hex::encode(derive_rcm(&rseed).to_bytes()), tv.rcm);
        assert_eq!(hex::encode(derive_esk(&rseed).to_bytes()), tv.esk);
        assert_ne!(prf_expand(&rseed, PRF_EXPAND_RCM), prf_expand(&rseed, PRF_EXPAND_ESK));
    }

    #[test]
    fn test_ka_agree_commutes() {
        let tv = &NOTE_VECTORS[0];
        let g_d = curve::decode_point(&bytes(crate::test_vectors::NOTE_G_D)).unwrap();
        let ivk = IncomingViewingKey::from_bytes(&bytes(crate::test_vectors::NOTE_IVK)).unwrap();
        let esk = curve::decode_scalar(&bytes(tv.esk)).unwrap();

        let pk_d = g_d * ivk.scalar();
        let epk = g_d * esk;
        assert_eq!(ka_agree(&esk, &pk_d), ka_agree(ivk.scalar(), &epk));
        assert_ne!(kdf_sapling(&ka_agree(&esk, &pk_d), &epk), [0u8; 32]);
    }

    #[test]
    fn test_ka_agree_zero_scalar() {
        let g_d = curve::decode_point(&bytes(crate::test_vectors::NOTE_G_D)).unwrap();
        assert!(bool::from(ka_agree(&Scalar::ZERO, &g_d).is_identity()));
    }
}
