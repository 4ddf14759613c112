//! Windowed Pedersen note commitments
//!
//! `NoteCommit_rcm(g_d, pk_d, v) = PedersenHashToPoint("Zcash_PH",
//! [1; 6] || I2LEBSP_64(v) || repr(g_d) || repr(pk_d)) + [rcm] R`, and `cmu`
//! is the `u`-coordinate of the result.

use crate::constants::{
    NOTE_COMMITMENT_GENERATORS, PEDERSEN_HASH_CHUNKS_PER_GENERATOR,
    PEDERSEN_HASH_GENERATORS_PERSONALIZATION,
};
use crate::curve::{self, FieldElement, Scalar};
use crate::group_hash::find_group_hash;
use crate::{Error, Result};
use ff::Field;
use jubjub::ExtendedPoint;

const SEGMENT_BITS: usize = 3 * PEDERSEN_HASH_CHUNKS_PER_GENERATOR;

/// Precomputed generators for Sapling note commitments
#[derive(Clone, Debug)]
pub struct NoteCommitmentParams {
    generators: Vec<ExtendedPoint>,
    randomness_base: ExtendedPoint,
}

impl NoteCommitmentParams {
    /// Search for the Pedersen generators and the randomness base.
    pub fn new() -> Result<Self> {
        let generators = (0..NOTE_COMMITMENT_GENERATORS as u32)
            .map(pedersen_generator)
            .collect::<Result<Vec<_>>>()
            .map_err(|e| Error::Initialization(format!("Pedersen generators: {e}")))?;
        let randomness_base = find_group_hash(PEDERSEN_HASH_GENERATORS_PERSONALIZATION, b"r")
            .map_err(|e| Error::Initialization(format!("commitment randomness base: {e}")))?;

        Ok(Self {
            generators,
            randomness_base,
        })
    }

    /// `PedersenHashToPoint` over `bits`, which are consumed least significant first.
    pub fn pedersen_hash_to_point(&self, bits: &[bool]) -> Result<ExtendedPoint> {
        let mut result = ExtendedPoint::identity();
        for (i, segment) in bits.chunks(SEGMENT_BITS).enumerate() {
            let generator = self.generators.get(i).ok_or_else(|| {
                Error::MalformedInput(format!(
                    "Pedersen input of {} bits needs more than {} generators",
                    bits.len(),
                    self.generators.len()
                ))
            })?;
            result += generator * encode_segment(segment);
        }
        Ok(result)
    }

    /// The note commitment point.
    pub fn note_commitment(
        &self,
        g_d: &ExtendedPoint,
        pk_d: &ExtendedPoint,
        value: u64,
        rcm: &Scalar,
    ) -> Result<ExtendedPoint> {
        let mut bits = Vec::with_capacity(6 + 64 + 256 + 256);
        bits.extend([true; 6]);
        push_le_bits(&mut bits, &value.to_le_bytes());
        push_le_bits(&mut bits, &curve::encode_point(g_d));
        push_le_bits(&mut bits, &curve::encode_point(pk_d));

        Ok(self.pedersen_hash_to_point(&bits)? + self.randomness_base * rcm)
    }

    /// `cmu` for a note.
    pub fn cmu(
        &self,
        g_d: &ExtendedPoint,
        pk_d: &ExtendedPoint,
        value: u64,
        rcm: &Scalar,
    ) -> Result<FieldElement> {
        let point = self.note_commitment(g_d, pk_d, value, rcm)?;
        Ok(curve::extract_u(&point))
    }
}

/// Generator `I_{i+1}` of the Pedersen hash.
fn pedersen_generator(i: u32) -> Result<ExtendedPoint> {
    find_group_hash(PEDERSEN_HASH_GENERATORS_PERSONALIZATION, &i.to_le_bytes())
}

/// `<M_i>`: sum of `(1 - 2 s2) (1 + s0 + 2 s1) 2^(4j)` over 3-bit chunks.
fn encode_segment(segment: &[bool]) -> Scalar {
    let mut acc = Scalar::ZERO;
    let mut window = Scalar::ONE;

    for chunk in segment.chunks(3) {
        let bit = |k: usize| chunk.get(k).copied().unwrap_or(false);

        let mut term = Scalar::ONE;
        if bit(0) {
            term += Scalar::ONE;
        }
        if bit(1) {
            term += Scalar::ONE.double();
        }
        if bit(2) {
            term = -term;
        }
        acc += term * window;

        // 2^4
        window = window.double().double().double().double();
    }

    acc
}

fn push_le_bits(bits: &mut Vec<bool>, bytes: &[u8]) {
    for byte in bytes {
        for k in 0..8 {
            bits.push((byte >> k) & 1 == 1);
        }
    }
}
