//! Fuzz test for viewing key decoding

#![no_main]

use libfuzzer_sys::fuzz_target;
use sapling_core::{ExtendedFullViewingKey, ViewingKey};

fuzz_target!(|data: &[u8]| {
    if let Ok(key) = ViewingKey::from_bytes(data) {
        assert_eq!(&key.to_bytes()[..], data);
    }

    if let Ok(key) = ExtendedFullViewingKey::from_bytes(data) {
        assert_eq!(key.to_bytes(), data);
    }

    if let Ok(s) = std::str::from_utf8(data) {
        let _ = ExtendedFullViewingKey::decode_any_network(s);
    }
});
