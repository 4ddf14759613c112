//! Sapling network definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Network type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Mainnet
    Mainnet,
    /// Testnet
    Testnet,
    /// Regtest (local development)
    Regtest,
}

impl NetworkType {
    /// All known network types, mainnet first.
    pub const ALL: [NetworkType; 3] = [
        NetworkType::Mainnet,
        NetworkType::Testnet,
        NetworkType::Regtest,
    ];
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Network::from_type(*self).name)
    }
}

impl FromStr for NetworkType {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(NetworkType::Mainnet),
            "testnet" | "test" => Ok(NetworkType::Testnet),
            "regtest" => Ok(NetworkType::Regtest),
            other => Err(crate::Error::InvalidNetwork(other.to_string())),
        }
    }
}

/// Network configuration
#[derive(Debug, Clone)]
pub struct Network {
    /// Network type
    pub network_type: NetworkType,
    /// Human-readable name
    pub name: &'static str,
    /// Bech32 prefix for Sapling payment addresses
    pub payment_address_hrp: &'static str,
    /// Bech32 prefix for extended full viewing keys
    pub extended_fvk_hrp: &'static str,
    /// Sapling activation height
    pub sapling_activation_height: u32,
    /// Canopy activation height (ZIP-212 starts here)
    pub canopy_activation_height: u32,
}

impl Network {
    /// Get mainnet parameters
    pub const fn mainnet() -> Self {
        Self {
            network_type: NetworkType::Mainnet,
            name: "mainnet",
            payment_address_hrp: "zs",
            extended_fvk_hrp: "zxviews",
            sapling_activation_height: 419_200,
            canopy_activation_height: 1_046_400,
        }
    }

    /// Get testnet parameters
    pub const fn testnet() -> Self {
        Self {
            network_type: NetworkType::Testnet,
            name: "testnet",
            payment_address_hrp: "ztestsapling",
            extended_fvk_hrp: "zxviewtestsapling",
            sapling_activation_height: 280_000,
            canopy_activation_height: 1_028_500,
        }
    }

    /// Get regtest parameters
    pub const fn regtest() -> Self {
        Self {
            network_type: NetworkType::Regtest,
            name: "regtest",
            payment_address_hrp: "zregtestsapling",
            extended_fvk_hrp: "zxviewregtestsapling",
            sapling_activation_height: 1,
            canopy_activation_height: 1,
        }
    }

    /// Get network by type
    pub const fn from_type(network_type: NetworkType) -> Self {
        match network_type {
            NetworkType::Mainnet => Self::mainnet(),
            NetworkType::Testnet => Self::testnet(),
            NetworkType::Regtest => Self::regtest(),
        }
    }

    /// Find the network whose payment address prefix is `hrp`.
    pub fn from_payment_address_hrp(hrp: &str) -> Option<Self> {
        NetworkType::ALL
            .into_iter()
            .map(Self::from_type)
            .find(|net| net.payment_address_hrp == hrp)
    }

    /// Find the network whose extended full viewing key prefix is `hrp`.
    pub fn from_extended_fvk_hrp(hrp: &str) -> Option<Self> {
        NetworkType::ALL
            .into_iter()
            .map(Self::from_type)
            .find(|net| net.extended_fvk_hrp == hrp)
    }

    /// Check if Sapling is activated at given height
    pub const fn is_sapling_active(&self, height: u32) -> bool {
        height >= self.sapling_activation_height
    }

    /// Check if Canopy is activated at given height
    pub const fn is_canopy_active(&self, height: u32) -> bool {
        height >= self.canopy_activation_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_params() {
        let net = Network::mainnet();
        assert_eq!(net.network_type, NetworkType::Mainnet);
        assert_eq!(net.payment_address_hrp, "zs");
        assert_eq!(net.extended_fvk_hrp, "zxviews");
        assert!(net.is_sapling_active(419_200));
        assert!(!net.is_sapling_active(419_199));
        assert!(net.is_canopy_active(1_046_400));
        assert!(!net.is_canopy_active(1_046_399));
    }

    #[test]
    fn test_network_from_type() {
        let net = Network::from_type(NetworkType::Testnet);
        assert_eq!(net.network_type, NetworkType::Testnet);
        assert_eq!(net.extended_fvk_hrp, "zxviewtestsapling");
    }

    #[test]
    fn test_lookup_by_hrp() {
        let net = Network::from_payment_address_hrp("zregtestsapling").unwrap();
        assert_eq!(net.network_type, NetworkType::Regtest);

        let net = Network::from_extended_fvk_hrp("zxviews").unwrap();
        assert_eq!(net.network_type, NetworkType::Mainnet);

        assert!(Network::from_payment_address_hrp("zxviews").is_none());
        assert!(Network::from_extended_fvk_hrp("zs").is_none());
    }

    #[test]
    fn test_network_type_parse() {
        assert_eq!("Mainnet".parse::<NetworkType>().unwrap(), NetworkType::Mainnet);
        assert_eq!("test".parse::<NetworkType>().unwrap(), NetworkType::Testnet);
        assert!("signet".parse::<NetworkType>().is_err());
        assert_eq!(NetworkType::Regtest.to_string(), "regtest");
    }

    #[test]
    fn test_network_type_serde() {
        let json = serde_json::to_string(&NetworkType::Testnet).unwrap();
        assert_eq!(json, "\"testnet\"");
        let back: NetworkType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NetworkType::Testnet);
    }
}
