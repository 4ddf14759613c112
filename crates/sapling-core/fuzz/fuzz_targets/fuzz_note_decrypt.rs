//! Fuzz test for note decryption
//!
//! Arbitrary outputs must be rejected with an error, never a panic

#![no_main]

use libfuzzer_sys::fuzz_target;
use sapling_core::constants::OUTPUT_DESCRIPTION_SIZE;
use sapling_core::{IncomingViewingKey, OutgoingViewingKey, OutputDescription, SaplingContext};
use std::sync::OnceLock;

static CONTEXT: OnceLock<Option<SaplingContext>> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 + OUTPUT_DESCRIPTION_SIZE {
        return;
    }
    let Some(ctx) = CONTEXT.get_or_init(|| SaplingContext::with_defaults().ok()) else {
        return;
    };

    let mut ivk = [0u8; 32];
    ivk.copy_from_slice(&data[..32]);
    ivk[31] &= 0x07;
    let mut ovk = [0u8; 32];
    ovk.copy_from_slice(&data[32..64]);

    let Ok(output) = OutputDescription::from_bytes(&data[64..64 + OUTPUT_DESCRIPTION_SIZE]) else {
        return;
    };

    if let Ok(ivk) = IncomingViewingKey::from_bytes(&ivk) {
        let _ = output.decrypt(ctx, &ivk);
    }
    let _ = sapling_core::recover_output_with_ovk(ctx, &OutgoingViewingKey(ovk), &output);
});
