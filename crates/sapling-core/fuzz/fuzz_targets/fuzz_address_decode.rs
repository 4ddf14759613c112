//! Fuzz test for payment address decoding
//!
//! Ensures Bech32 and raw address parsing handle malformed input gracefully

#![no_main]

use libfuzzer_sys::fuzz_target;
use sapling_core::PaymentAddress;

fuzz_target!(|data: &[u8]| {
    let _ = PaymentAddress::from_bytes(data);

    if let Ok(s) = std::str::from_utf8(data) {
        // Should never panic, only return Err for invalid input
        if let Ok((address, network)) = PaymentAddress::decode_any_network(s) {
            let encoded = address.encode(network).unwrap();
            assert_eq!(encoded, s.to_lowercase());
        }
    }
});
