//! Property-based tests for sapling-core
//!
//! Uses proptest to verify invariants across randomized inputs

use sapling_core::constants::{EXTENDED_FVK_SIZE, FULL_VIEWING_KEY_SIZE, OUTPUT_DESCRIPTION_SIZE};
use sapling_core::test_vectors::{bytes, NOTE_IVK, NOTE_VECTORS};
use sapling_core::{
    derive_ivk, diversify_hash, Diversifier, Error, ExtendedFullViewingKey, IncomingViewingKey,
    NetworkType, OutputDescription, PaymentAddress, SaplingContext, ViewingKey,
};
use proptest::prelude::*;
use std::sync::Once;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Property Test Strategies
// ============================================================================

fn bytes32() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(any::<u8>())
}

fn diversifier_strategy() -> impl Strategy<Value = [u8; 11]> {
    prop::array::uniform11(any::<u8>())
}

/// Lengths near, but never equal to, `size`
fn wrong_length(size: usize) -> impl Strategy<Value = usize> {
    (0..size * 2).prop_filter("must differ from the fixed size", move |len| *len != size)
}

// ============================================================================
// Key Derivation Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: ivk is deterministic and fits in 251 bits
    #[test]
    fn prop_ivk_deterministic_and_truncated(ak in bytes32(), nk in bytes32()) {
        let ivk1 = derive_ivk(&ak, &nk);
        let ivk2 = derive_ivk(&ak, &nk);
        prop_assert_eq!(ivk1, ivk2);
        prop_assert_eq!(ivk1[31] & 0xf8, 0);

        // Always a canonical scalar
        prop_assert!(IncomingViewingKey::from_bytes(&ivk1).is_ok());
    }

    /// Property: diversify hash yields a prime-order point or reports exhaustion
    #[test]
    fn prop_diversify_hash_prime_order(d in diversifier_strategy()) {
        init_tracing();
        match diversify_hash(&d) {
            Ok(g_d) => {
                prop_assert!(!bool::from(g_d.is_identity()));
                prop_assert!(bool::from(g_d.is_torsion_free()));
            }
            Err(e) => prop_assert_eq!(e, Error::GroupHashExhausted),
        }
    }
}

// ============================================================================
// Address Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: derived addresses survive the raw and Bech32 encodings
    #[test]
    fn prop_address_round_trip(ak in bytes32(), nk in bytes32(), d in diversifier_strategy()) {
        let ivk = IncomingViewingKey::derive(&ak, &nk);
        prop_assume!(ivk.to_bytes() != [0u8; 32]);

        if let Ok(address) = ivk.to_payment_address(Diversifier(d)) {
            let raw = PaymentAddress::from_bytes(&address.to_bytes()).unwrap();
            prop_assert_eq!(&raw, &address);

            let encoded = address.encode(NetworkType::Testnet).unwrap();
            let (decoded, network) = PaymentAddress::decode_any_network(&encoded).unwrap();
            prop_assert_eq!(network, NetworkType::Testnet);
            prop_assert_eq!(decoded, address);
        }
    }
}

// ============================================================================
// Viewing Key Codec Properties
// ============================================================================

proptest! {
    /// Property: any 96 bytes parse and serialize back unchanged
    #[test]
    fn prop_viewing_key_round_trip(raw in prop::collection::vec(any::<u8>(), FULL_VIEWING_KEY_SIZE)) {
        let key = ViewingKey::from_bytes(&raw).unwrap();
        prop_assert_eq!(key.to_bytes().to_vec(), raw);
    }

    /// Property: any other length is malformed
    #[test]
    fn prop_viewing_key_wrong_length(len in wrong_length(FULL_VIEWING_KEY_SIZE)) {
        let raw = vec![0u8; len];
        prop_assert!(matches!(ViewingKey::from_bytes(&raw), Err(Error::MalformedInput(_))));
    }

    /// Property: extended keys round trip through bytes and Bech32
    #[test]
    fn prop_extended_fvk_round_trip(raw in prop::collection::vec(any::<u8>(), EXTENDED_FVK_SIZE)) {
        let key = ExtendedFullViewingKey::from_bytes(&raw).unwrap();
        prop_assert_eq!(key.to_bytes(), raw);

        let encoded = key.encode(NetworkType::Mainnet).unwrap();
        prop_assert_eq!(ExtendedFullViewingKey::decode(NetworkType::Mainnet, &encoded).unwrap(), key);
    }

    #[test]
    fn prop_extended_fvk_wrong_length(len in wrong_length(EXTENDED_FVK_SIZE)) {
        let raw = vec![0u8; len];
        prop_assert!(matches!(
            ExtendedFullViewingKey::from_bytes(&raw),
            Err(Error::MalformedInput(_))
        ));
    }
}

// ============================================================================
// Output Description Properties
// ============================================================================

proptest! {
    /// Property: parsing is a bijection on 948-byte inputs
    #[test]
    fn prop_output_description_bijection(
        raw in prop::collection::vec(any::<u8>(), OUTPUT_DESCRIPTION_SIZE)
    ) {
        let output = OutputDescription::from_bytes(&raw).unwrap();
        prop_assert_eq!(output.to_bytes(), raw);
    }

    #[test]
    fn prop_output_description_wrong_length(len in wrong_length(OUTPUT_DESCRIPTION_SIZE)) {
        let raw = vec![0u8; len];
        prop_assert!(matches!(
            OutputDescription::from_bytes(&raw),
            Err(Error::MalformedInput(_))
        ));
    }
}

// ============================================================================
// Note Decryption Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: any single-byte change to the ciphertext fails authentication
    #[test]
    fn prop_ciphertext_tamper_detected(
        vector in 0usize..NOTE_VECTORS.len(),
        position in 0usize..580,
        mask in 1u8..=255
    ) {
        init_tracing();
        let ctx = SaplingContext::with_defaults().unwrap();
        let ivk = IncomingViewingKey::from_bytes(&bytes(NOTE_IVK)).unwrap();
        let raw = hex::decode(NOTE_VECTORS[vector].output).unwrap();

        let mut output = OutputDescription::from_bytes(&raw).unwrap();
        output.enc_ciphertext[position] ^= mask;
        prop_assert_eq!(output.decrypt(&ctx, &ivk), Err(Error::DecryptionFailure));
    }
}
