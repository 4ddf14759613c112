//! Thin adapter over the `jubjub` crate
//!
//! Converts wire bytes into curve types, mapping `CtOption` failures to
//! [`Error::InvalidEncoding`]. Everything else in the crate works with the
//! typed values returned here.

use crate::{Error, Result};
use group::GroupEncoding;
use jubjub::{AffinePoint, ExtendedPoint, Fr};
use subtle::CtOption;

/// Scalar field of Jubjub (`r_J`)
pub type Scalar = Fr;

/// Base field of Jubjub (the BLS12-381 scalar field), used for `cmu`
pub type FieldElement = bls12_381::Scalar;

fn checked<T>(value: CtOption<T>, what: &str) -> Result<T> {
    Option::from(value).ok_or_else(|| Error::InvalidEncoding(what.to_string()))
}

/// Decode a canonical little-endian scalar.
pub fn decode_scalar(bytes: &[u8; 32]) -> Result<Scalar> {
    checked(Fr::from_bytes(bytes), "scalar is not canonical")
}

/// Reduce 256 bits modulo `r_J`.
///
/// Used for the lenient handling of legacy `rcm` encodings.
pub fn reduce_scalar(bytes: &[u8; 32]) -> Scalar {
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(bytes);
    Fr::from_bytes_wide(&wide)
}

/// Reduce a 512-bit PRF output modulo `r_J`.
pub fn scalar_from_wide(bytes: &[u8; 64]) -> Scalar {
    Fr::from_bytes_wide(bytes)
}

/// Decompress a point, rejecting non-canonical encodings (ZIP-216).
pub fn decode_point(bytes: &[u8; 32]) -> Result<ExtendedPoint> {
    checked(AffinePoint::from_bytes(*bytes), "not a Jubjub point").map(ExtendedPoint::from)
}

/// Decompress a point that must lie in the prime-order subgroup.
pub fn decode_prime_order_point(bytes: &[u8; 32]) -> Result<ExtendedPoint> {
    let point = decode_point(bytes)?;
    if bool::from(point.is_identity()) || !bool::from(point.is_torsion_free()) {
        return Err(Error::InvalidEncoding(
            "point is not in the prime-order subgroup".to_string(),
        ));
    }
    Ok(point)
}

/// Compress a point.
pub fn encode_point(point: &ExtendedPoint) -> [u8; 32] {
    point.to_bytes()
}

/// Decode a canonical base field element.
pub fn decode_field(bytes: &[u8; 32]) -> Result<FieldElement> {
    checked(FieldElement::from_bytes(bytes), "field element is not canonical")
}

/// The `u`-coordinate of a point.
pub fn extract_u(point: &ExtendedPoint) -> FieldElement {
    AffinePoint::from(point).get_u()
}
