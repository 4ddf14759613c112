//! Fuzz test for output description parsing
//!
//! Parsing must accept exactly the 948-byte inputs and reproduce them

#![no_main]

use libfuzzer_sys::fuzz_target;
use sapling_core::constants::OUTPUT_DESCRIPTION_SIZE;
use sapling_core::OutputDescription;

fuzz_target!(|data: &[u8]| {
    match OutputDescription::from_bytes(data) {
        Ok(output) => {
            assert_eq!(output.to_bytes(), data);
            let _ = output.epk();
            let _ = output.cmu();
        }
        Err(_) => assert_ne!(data.len(), OUTPUT_DESCRIPTION_SIZE),
    }
});
