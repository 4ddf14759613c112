//! Integration tests for batch scanning across networks

use proptest::prelude::*;
use sapling_core::test_vectors::{bytes, NOTE_IVK, NOTE_VECTORS};
use sapling_core::{IncomingViewingKey, NoteVersion, OutputDescription, SaplingContext};
use sapling_params::{Network, NetworkType, ZIP212_GRACE_PERIOD};
use sapling_scan::{CompactOutput, ScanConfig, Scanner};
use std::sync::{Arc, Once};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn scanner(network: NetworkType) -> Scanner {
    init_tracing();
    let ctx = Arc::new(SaplingContext::with_defaults().unwrap());
    Scanner::new(ctx, network, ScanConfig { max_parallel: 2 }).unwrap()
}

fn wallet_key() -> IncomingViewingKey {
    IncomingViewingKey::from_bytes(&bytes(NOTE_IVK)).unwrap()
}

fn outputs() -> Vec<OutputDescription> {
    NOTE_VECTORS
        .iter()
        .map(|tv| OutputDescription::from_bytes(&hex::decode(tv.output).unwrap()).unwrap())
        .collect()
}

fn versions_found(scanner: &Scanner, height: u32) -> Vec<NoteVersion> {
    scanner
        .scan_outputs(height, &[wallet_key()], &outputs())
        .into_iter()
        .map(|found| found.note.version())
        .collect()
}

#[test]
fn test_enforcement_windows_per_network() {
    for network in NetworkType::ALL {
        let scanner = scanner(network);
        let canopy = Network::from_type(network).canopy_activation_height;

        if canopy > 0 {
            assert_eq!(
                versions_found(&scanner, canopy - 1),
                vec![NoteVersion::BeforeZip212],
                "{} before Canopy",
                network
            );
        }
        assert_eq!(
            versions_found(&scanner, canopy),
            vec![NoteVersion::AfterZip212, NoteVersion::BeforeZip212],
            "{} at Canopy",
            network
        );
        assert_eq!(
            versions_found(&scanner, canopy + ZIP212_GRACE_PERIOD),
            vec![NoteVersion::AfterZip212],
            "{} after grace period",
            network
        );
    }
}

#[test]
fn test_compact_and_full_scans_agree() {
    let scanner = scanner(NetworkType::Testnet);
    let height = Network::testnet().canopy_activation_height + 1;
    let full = scanner.scan_outputs(height, &[wallet_key()], &outputs());
    let compact: Vec<CompactOutput> = outputs().iter().map(CompactOutput::from).collect();
    let compact = scanner.scan_compact(height, &[wallet_key()], &compact);

    assert_eq!(full.len(), compact.len());
    for (f, c) in full.iter().zip(&compact) {
        assert_eq!(f.output_index, c.output_index);
        assert_eq!(f.note.value(), c.note.value);
        assert_eq!(f.note.recipient(), &c.note.recipient);
        assert_eq!(f.note.rseed(), &c.note.rseed);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Property: random outputs never yield notes for the wallet key
    #[test]
    fn prop_random_outputs_not_found(raw in prop::collection::vec(any::<u8>(), 948)) {
        let scanner = scanner(NetworkType::Mainnet);
        let output = OutputDescription::from_bytes(&raw).unwrap();
        let found = scanner.scan_outputs(2_000_000, &[wallet_key()], &[output.clone()]);
        prop_assert!(found.is_empty());

        let found = scanner.scan_compact(2_000_000, &[wallet_key()], &[CompactOutput::from(&output)]);
        prop_assert!(found.is_empty());
    }
}
