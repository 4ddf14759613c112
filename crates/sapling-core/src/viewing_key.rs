//! Sapling full viewing keys and their wire formats
//!
//! Raw layout (96 bytes): `ak || nk || ovk`.
//!
//! Extended layout (169 bytes, bech32 under `zxviews` on mainnet):
//! `depth(1) || parent_fvk_tag(4) || child_index(4, LE) || chain_code(32) || ak || nk || ovk || dk`.

use crate::address::{Diversifier, PaymentAddress};
use crate::constants::{EXTENDED_FVK_SIZE, FULL_VIEWING_KEY_SIZE};
use crate::encoding::{decode_bech32, encode_bech32, expect_consumed, take};
use crate::keys::{derive_ivk, IncomingViewingKey};
use crate::recovery::OutgoingViewingKey;
use crate::{Error, Result};
use sapling_params::{Network, NetworkType};
use std::fmt;

/// Sapling full viewing key
#[derive(Clone, PartialEq, Eq)]
pub struct ViewingKey {
    ak: [u8; 32],
    nk: [u8; 32],
    ovk: [u8; 32],
}

impl ViewingKey {
    /// Build from components
    pub fn new(ak: [u8; 32], nk: [u8; 32], ovk: [u8; 32]) -> Self {
        Self { ak, nk, ovk }
    }

    /// Parse the 96-byte raw encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != FULL_VIEWING_KEY_SIZE {
            return Err(Error::MalformedInput(format!(
                "full viewing key must be {} bytes, got {}",
                FULL_VIEWING_KEY_SIZE,
                bytes.len()
            )));
        }
        let mut offset = 0;
        Self::read(bytes, &mut offset)
    }

    fn read(bytes: &[u8], offset: &mut usize) -> Result<Self> {
        Ok(Self {
            ak: take(bytes, offset)?,
            nk: take(bytes, offset)?,
            ovk: take(bytes, offset)?,
        })
    }

    /// Raw 96-byte encoding
    pub fn to_bytes(&self) -> [u8; FULL_VIEWING_KEY_SIZE] {
        let mut out = [0u8; FULL_VIEWING_KEY_SIZE];
        out[..32].copy_from_slice(&self.ak);
        out[32..64].copy_from_slice(&self.nk);
        out[64..].copy_from_slice(&self.ovk);
        out
    }

    /// Spend validating key
    pub fn ak(&self) -> &[u8; 32] {
        &self.ak
    }

    /// Nullifier deriving key
    pub fn nk(&self) -> &[u8; 32] {
        &self.nk
    }

    /// IVK bytes, recomputed from `ak` and `nk` on every call.
    pub fn ivk(&self) -> [u8; 32] {
        derive_ivk(&self.ak, &self.nk)
    }

    /// IVK as a scalar
    pub fn incoming_viewing_key(&self) -> IncomingViewingKey {
        IncomingViewingKey::derive(&self.ak, &self.nk)
    }

    /// Copy of the outgoing viewing key
    pub fn ovk(&self) -> OutgoingViewingKey {
        OutgoingViewingKey(self.ovk)
    }
}

impl fmt::Debug for ViewingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewingKey")
            .field("ak", &hex::encode(self.ak))
            .finish_non_exhaustive()
    }
}

/// ZIP-32 extended full viewing key
#[derive(Clone, PartialEq, Eq)]
pub struct ExtendedFullViewingKey {
    /// Depth in the derivation tree
    pub depth: u8,
    /// First 4 bytes of the parent's FVK fingerprint
    pub parent_fvk_tag: [u8; 4],
    /// Child index
    pub child_index: u32,
    /// Chain code
    pub chain_code: [u8; 32],
    /// Full viewing key
    pub fvk: ViewingKey,
    /// Diversifier key
    pub dk: [u8; 32],
}

impl ExtendedFullViewingKey {
    /// Parse the 169-byte payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != EXTENDED_FVK_SIZE {
            return Err(Error::MalformedInput(format!(
                "extended full viewing key must be {} bytes, got {}",
                EXTENDED_FVK_SIZE,
                bytes.len()
            )));
        }

        let mut offset = 0;
        let [depth] = take::<1>(bytes, &mut offset)?;
        let parent_fvk_tag = take(bytes, &mut offset)?;
        let child_index = u32::from_le_bytes(take(bytes, &mut offset)?);
        let chain_code = take(bytes, &mut offset)?;
        let fvk = ViewingKey::read(bytes, &mut offset)?;
        let dk = take(bytes, &mut offset)?;
        expect_consumed(bytes, offset)?;

        Ok(Self {
            depth,
            parent_fvk_tag,
            child_index,
            chain_code,
            fvk,
            dk,
        })
    }

    /// Serialize to the 169-byte payload.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(EXTENDED_FVK_SIZE);
        data.push(self.depth);
        data.extend_from_slice(&self.parent_fvk_tag);
        data.extend_from_slice(&self.child_index.to_le_bytes());
        data.extend_from_slice(&self.chain_code);
        data.extend_from_slice(&self.fvk.to_bytes());
        data.extend_from_slice(&self.dk);
        data
    }

    /// Decode for the given network HRP.
    pub fn decode(network: NetworkType, encoded: &str) -> Result<Self> {
        let expected = Network::from_type(network).extended_fvk_hrp;
        let (hrp, data) = decode_bech32(encoded)?;
        if hrp != expected {
            return Err(Error::MalformedInput(format!(
                "Invalid HRP: expected '{}', got '{}'",
                expected, hrp
            )));
        }
        Self::from_bytes(&data)
    }

    /// Decode for any known network HRP.
    pub fn decode_any_network(encoded: &str) -> Result<(Self, NetworkType)> {
        let (hrp, data) = decode_bech32(encoded)?;
        let network = Network::from_extended_fvk_hrp(&hrp).ok_or_else(|| {
            Error::MalformedInput(format!("unknown extended viewing key prefix '{}'", hrp))
        })?;
        Ok((Self::from_bytes(&data)?, network.network_type))
    }

    /// Encode as Bech32 for the given network.
    pub fn encode(&self, network: NetworkType) -> Result<String> {
        encode_bech32(Network::from_type(network).extended_fvk_hrp, &self.to_bytes())
    }

    /// IVK bytes of the inner key
    pub fn ivk(&self) -> [u8; 32] {
        self.fvk.ivk()
    }

    /// Payment address for diversifier `d`.
    pub fn address(&self, d: Diversifier) -> Result<PaymentAddress> {
        self.fvk.incoming_viewing_key().to_payment_address(d)
    }
}

impl fmt::Debug for ExtendedFullViewingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedFullViewingKey")
            .field("depth", &self.depth)
            .field("parent_fvk_tag", &hex::encode(self.parent_fvk_tag))
            .field("child_index", &self.child_index)
            .field("fvk", &self.fvk)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_vectors::*;

    #[test]
    fn test_decode_exported_key() {
        let (key, network) = ExtendedFullViewingKey::decode_any_network(EXTENDED_FVK).unwrap();
        assert_eq!(network, NetworkType::Mainnet);
        assert_eq!(key.depth, 3);
        assert_eq!(key.parent_fvk_tag, [0x55, 0xdb, 0x36, 0xa5]);
        assert_eq!(key.child_index, 0x8000_0000);
        assert_eq!(hex::encode(key.chain_code), EXTENDED_FVK_CHAIN_CODE);
        assert_eq!(hex::encode(key.fvk.ak()), EXTENDED_FVK_AK);
        assert_eq!(hex::encode(key.fvk.nk()), EXTENDED_FVK_NK);
        assert_eq!(hex::encode(key.fvk.ovk().0), EXTENDED_FVK_OVK);
        assert_eq!(hex::encode(key.dk), EXTENDED_FVK_DK);

        let inner = [EXTENDED_FVK_AK, EXTENDED_FVK_NK, EXTENDED_FVK_OVK].concat();
        assert_eq!(hex::encode(key.fvk.to_bytes()), inner);
    }

    #[test]
    fn test_exported_key_owns_address() {
        let key = ExtendedFullViewingKey::decode(NetworkType::Mainnet, EXTENDED_FVK).unwrap();
        assert_eq!(hex::encode(key.ivk()), EXTENDED_FVK_IVK);

        let address = key
            .address(Diversifier(bytes(EXTENDED_FVK_ADDRESS_D)))
            .unwrap();
        assert_eq!(address.encode(NetworkType::Mainnet).unwrap(), EXTENDED_FVK_ADDRESS);
    }

    #[test]
    fn test_bech32_round_trip() {
        let key = ExtendedFullViewingKey::decode(NetworkType::Mainnet, EXTENDED_FVK).unwrap();
        assert_eq!(key.encode(NetworkType::Mainnet).unwrap(), EXTENDED_FVK);

        let testnet = key.encode(NetworkType::Testnet).unwrap();
        assert!(testnet.starts_with("zxviewtestsapling1"));
        let (decoded, network) = ExtendedFullViewingKey::decode_any_network(&testnet).unwrap();
        assert_eq!(network, NetworkType::Testnet);
        assert_eq!(decoded, key);
    }

    #[test]
    fn test_wrong_network_rejected() {
        assert!(matches!(
            ExtendedFullViewingKey::decode(NetworkType::Regtest, EXTENDED_FVK),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_payment_address_is_not_a_viewing_key() {
        assert!(matches!(
            ExtendedFullViewingKey::decode_any_network(EXTENDED_FVK_ADDRESS),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_wrong_payload_length() {
        let key = ExtendedFullViewingKey::decode(NetworkType::Mainnet, EXTENDED_FVK).unwrap();
        let mut data = key.to_bytes();
        data.push(0);
        let long = encode_bech32("zxviews", &data).unwrap();
        assert!(matches!(
            ExtendedFullViewingKey::decode_any_network(&long),
            Err(Error::MalformedInput(_))
        ));

        data.truncate(EXTENDED_FVK_SIZE - 1);
        assert!(matches!(
            ExtendedFullViewingKey::from_bytes(&data),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_raw_viewing_key() {
        let raw: Vec<u8> = (0u8..96).collect();
        let key = ViewingKey::from_bytes(&raw).unwrap();
        assert_eq!(key.to_bytes().to_vec(), raw);
        assert_eq!(key.ovk().0[0], 64);
        assert_eq!(key.ivk(), derive_ivk(key.ak(), key.nk()));
        assert_eq!(key.incoming_viewing_key().to_bytes(), key.ivk());

        assert!(matches!(
            ViewingKey::from_bytes(&raw[..95]),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_ivk_vectors_through_viewing_key() {
        for tv in IVK_VECTORS {
            let key = ViewingKey::new(bytes(tv.ak), bytes(tv.nk), [0u8; 32]);
            assert_eq!(hex::encode(key.ivk()), tv.ivk);
        }
    }
}
