//! Protocol constants: personalizations, sizes and the group hash URS

/// First 64 bytes of the BLAKE2s input during group hashing
pub const GH_FIRST_BLOCK: &[u8; 64] =
    b"096b36a5804bfacef1691e173c366a47ff5ba84a44f26ddd7e8d9f79d5b42df0";

/// BLAKE2s personalization for CRH^ivk
pub const CRH_IVK_PERSONALIZATION: &[u8; 8] = b"Zcashivk";

/// BLAKE2s personalization for DiversifyHash
pub const KEY_DIVERSIFICATION_PERSONALIZATION: &[u8; 8] = b"Zcash_gd";

/// BLAKE2s personalization for the Pedersen hash generators
pub const PEDERSEN_HASH_GENERATORS_PERSONALIZATION: &[u8; 8] = b"Zcash_PH";

/// BLAKE2b personalization for KDF^Sapling
pub const KDF_SAPLING_PERSONALIZATION: &[u8; 16] = b"Zcash_SaplingKDF";

/// BLAKE2b personalization for PRF^expand
pub const PRF_EXPAND_PERSONALIZATION: &[u8; 16] = b"Zcash_ExpandSeed";

/// BLAKE2b personalization for PRF^ock
pub const PRF_OCK_PERSONALIZATION: &[u8; 16] = b"Zcash_Derive_ock";

/// PRF^expand domain byte for `rcm`
pub const PRF_EXPAND_RCM: u8 = 0x04;

/// PRF^expand domain byte for `esk`
pub const PRF_EXPAND_ESK: u8 = 0x05;

/// Diversifier length
pub const DIVERSIFIER_SIZE: usize = 11;

/// Memo field length
pub const MEMO_SIZE: usize = 512;

/// Note plaintext: leadbyte, diversifier, value, rcm/rseed, memo
pub const NOTE_PLAINTEXT_SIZE: usize = 1 + DIVERSIFIER_SIZE + 8 + 32 + MEMO_SIZE;

/// The part of the note plaintext carried by compact outputs
pub const COMPACT_NOTE_SIZE: usize = 1 + DIVERSIFIER_SIZE + 8 + 32;

/// Poly1305 tag length
pub const AEAD_TAG_SIZE: usize = 16;

/// Encrypted note plaintext length
pub const ENC_CIPHERTEXT_SIZE: usize = NOTE_PLAINTEXT_SIZE + AEAD_TAG_SIZE;

/// Outgoing plaintext: `pk_d` then `esk`
pub const OUT_PLAINTEXT_SIZE: usize = 32 + 32;

/// Encrypted outgoing plaintext length
pub const OUT_CIPHERTEXT_SIZE: usize = OUT_PLAINTEXT_SIZE + AEAD_TAG_SIZE;

/// Groth16 proof length
pub const ZKPROOF_SIZE: usize = 192;

/// Serialized output description length
pub const OUTPUT_DESCRIPTION_SIZE: usize =
    32 + 32 + 32 + ENC_CIPHERTEXT_SIZE + OUT_CIPHERTEXT_SIZE + ZKPROOF_SIZE;

/// Raw payment address length
pub const PAYMENT_ADDRESS_SIZE: usize = DIVERSIFIER_SIZE + 32;

/// Raw full viewing key length: `ak`, `nk`, `ovk`
pub const FULL_VIEWING_KEY_SIZE: usize = 96;

/// Extended full viewing key payload length
pub const EXTENDED_FVK_SIZE: usize = 1 + 4 + 4 + 32 + FULL_VIEWING_KEY_SIZE + 32;

/// Pedersen hash segment length in bits (63 chunks of 3 bits)
pub const PEDERSEN_HASH_CHUNKS_PER_GENERATOR: usize = 63;

/// Generators needed for the 582-bit note commitment input
pub const NOTE_COMMITMENT_GENERATORS: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_sizes() {
        assert_eq!(NOTE_PLAINTEXT_SIZE, 564);
        assert_eq!(ENC_CIPHERTEXT_SIZE, 580);
        assert_eq!(OUT_CIPHERTEXT_SIZE, 80);
        assert_eq!(OUTPUT_DESCRIPTION_SIZE, 948);
        assert_eq!(EXTENDED_FVK_SIZE, 169);
        assert_eq!(COMPACT_NOTE_SIZE, 52);
    }
}
