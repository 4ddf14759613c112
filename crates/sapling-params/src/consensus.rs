//! ZIP-212 enforcement rules for Sapling note plaintexts

use crate::network::Network;
use serde::{Deserialize, Serialize};

/// Number of blocks after Canopy activation during which both note
/// plaintext versions are accepted by light clients (ZIP-212).
pub const ZIP212_GRACE_PERIOD: u32 = 32_256;

/// Lead byte of a note plaintext that carries `rcm` directly.
pub const LEADBYTE_BEFORE_ZIP212: u8 = 0x01;

/// Lead byte of a note plaintext that carries `rseed`.
pub const LEADBYTE_AFTER_ZIP212: u8 = 0x02;

/// Which note plaintext versions a receiver accepts at a given height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zip212Enforcement {
    /// Before Canopy: only `0x01` plaintexts.
    Off,
    /// First [`ZIP212_GRACE_PERIOD`] blocks of Canopy: both versions.
    GracePeriod,
    /// After the grace period: only `0x02` plaintexts.
    On,
}

impl Zip212Enforcement {
    /// Enforcement in effect for an output mined at `height` on `network`.
    pub fn at_height(network: &Network, height: u32) -> Self {
        let canopy = network.canopy_activation_height;
        if height < canopy {
            Zip212Enforcement::Off
        } else if height < canopy.saturating_add(ZIP212_GRACE_PERIOD) {
            Zip212Enforcement::GracePeriod
        } else {
            Zip212Enforcement::On
        }
    }

    /// Whether a plaintext with this lead byte is acceptable.
    pub const fn accepts(&self, leadbyte: u8) -> bool {
        match self {
            Zip212Enforcement::Off => leadbyte == LEADBYTE_BEFORE_ZIP212,
            Zip212Enforcement::GracePeriod => {
                leadbyte == LEADBYTE_BEFORE_ZIP212 || leadbyte == LEADBYTE_AFTER_ZIP212
            }
            Zip212Enforcement::On => leadbyte == LEADBYTE_AFTER_ZIP212,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkType;

    #[test]
    fn test_mainnet_windows() {
        let net = Network::mainnet();
        assert_eq!(
            Zip212Enforcement::at_height(&net, 1_046_399),
            Zip212Enforcement::Off
        );
        assert_eq!(
            Zip212Enforcement::at_height(&net, 1_046_400),
            Zip212Enforcement::GracePeriod
        );
        assert_eq!(
            Zip212Enforcement::at_height(&net, 1_046_400 + ZIP212_GRACE_PERIOD - 1),
            Zip212Enforcement::GracePeriod
        );
        assert_eq!(
            Zip212Enforcement::at_height(&net, 1_046_400 + ZIP212_GRACE_PERIOD),
            Zip212Enforcement::On
        );
    }

    #[test]
    fn test_testnet_canopy() {
        let net = Network::from_type(NetworkType::Testnet);
        assert_eq!(
            Zip212Enforcement::at_height(&net, 1_028_499),
            Zip212Enforcement::Off
        );
        assert_eq!(
            Zip212Enforcement::at_height(&net, 1_028_500),
            Zip212Enforcement::GracePeriod
        );
    }

    #[test]
    fn test_accepts() {
        assert!(Zip212Enforcement::Off.accepts(0x01));
        assert!(!Zip212Enforcement::Off.accepts(0x02));
        assert!(Zip212Enforcement::GracePeriod.accepts(0x01));
        assert!(Zip212Enforcement::GracePeriod.accepts(0x02));
        assert!(!Zip212Enforcement::On.accepts(0x01));
        assert!(Zip212Enforcement::On.accepts(0x02));
        assert!(!Zip212Enforcement::GracePeriod.accepts(0x03));
    }

    #[test]
    fn test_height_saturates() {
        let net = Network::mainnet();
        assert_eq!(
            Zip212Enforcement::at_height(&net, u32::MAX),
            Zip212Enforcement::On
        );
    }
}
