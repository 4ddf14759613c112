//! Hash-to-curve for Jubjub
//!
//! `GroupHash^URS(D, M)` hashes `URS || M` with BLAKE2s personalized by the
//! 8-byte domain tag, decompresses the digest as a point and clears the
//! cofactor. Inputs that do not land on a non-identity prime-order point
//! yield `None`, and callers either give up or retry with a new suffix.

use crate::constants::GH_FIRST_BLOCK;
use crate::{Error, Result};
use jubjub::{AffinePoint, ExtendedPoint};

/// One group hash attempt.
pub fn group_hash(tag: &[u8; 8], input: &[u8]) -> Option<ExtendedPoint> {
    let hash = blake2s_simd::Params::new()
        .hash_length(32)
        .personal(tag)
        .to_state()
        .update(GH_FIRST_BLOCK)
        .update(input)
        .finalize();

    let point: Option<AffinePoint> = AffinePoint::from_bytes(*hash.as_array()).into();
    let point = point?.mul_by_cofactor();

    if bool::from(point.is_identity()) {
        None
    } else {
        Some(point)
    }
}

/// Search `msg || i` for `i` in `0..=255` and return the first point found.
pub fn find_group_hash(tag: &[u8; 8], msg: &[u8]) -> Result<ExtendedPoint> {
    let mut input = Vec::with_capacity(msg.len() + 1);
    input.extend_from_slice(msg);
    input.push(0);

    for i in 0..=u8::MAX {
        if let Some(last) = input.last_mut() {
            *last = i;
        }
        if let Some(point) = group_hash(tag, &input) {
            return Ok(point);
        }
    }

    tracing::warn!(
        "group hash exhausted for tag {:?} and message {}",
        String::from_utf8_lossy(tag),
        hex::encode(msg)
    );
    Err(Error::GroupHashExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{KEY_DIVERSIFICATION_PERSONALIZATION, PEDERSEN_HASH_GENERATORS_PERSONALIZATION};
    use crate::curve::encode_point;

    #[test]
    fn test_first_pedersen_generator() {
        let generator =
            find_group_hash(PEDERSEN_HASH_GENERATORS_PERSONALIZATION, &0u32.to_le_bytes())
                .unwrap();
        assert_eq!(
            hex::encode(encode_point(&generator)),
            "ca3c2432d4abbf7732464ec08b2e47f95edc7e836b16c979571b52d3a2879ea8"
        );
    }

    #[test]
    fn test_pedersen_generator_needs_retries() {
        // The first few suffixes of generator 0 miss the curve
        for i in 0..5u8 {
            let mut input = 0u32.to_le_bytes().to_vec();
            input.push(i);
            assert!(group_hash(PEDERSEN_HASH_GENERATORS_PERSONALIZATION, &input).is_none());
        }
    }

    #[test]
    fn test_group_hash_is_prime_order() {
        let point = group_hash(KEY_DIVERSIFICATION_PERSONALIZATION, &[0u8; 11]).unwrap();
        assert!(bool::from(point.is_torsion_free()));
        assert!(!bool::from(point.is_identity()));
    }

    #[test]
    fn test_group_hash_deterministic() {
        let a = group_hash(KEY_DIVERSIFICATION_PERSONALIZATION, &[4u8; 11]);
        let b = group_hash(KEY_DIVERSIFICATION_PERSONALIZATION, &[4u8; 11]);
        assert_eq!(a, b);
    }
}
