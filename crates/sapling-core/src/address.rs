//! Diversified Sapling payment addresses
//!
//! `g_d = DiversifyHash(d)` and `pk_d = ivk * g_d`. Addresses are derived on
//! demand and never cached.

use crate::constants::{DIVERSIFIER_SIZE, KEY_DIVERSIFICATION_PERSONALIZATION, PAYMENT_ADDRESS_SIZE};
use crate::curve::{self, Scalar};
use crate::encoding::{decode_bech32, encode_bech32};
use crate::group_hash::group_hash;
use crate::{Error, Result};
use ff::Field;
use jubjub::ExtendedPoint;
use sapling_params::{Network, NetworkType};
use std::fmt;

/// An 11-byte diversifier
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Diversifier(pub [u8; DIVERSIFIER_SIZE]);

impl Diversifier {
    /// Diversified base point `g_d`.
    ///
    /// A diversifier that does not hash to a usable point is rejected with
    /// [`Error::GroupHashExhausted`]; the same `d` will always fail.
    pub fn g_d(&self) -> Result<ExtendedPoint> {
        diversify_hash(&self.0)
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8; DIVERSIFIER_SIZE] {
        &self.0
    }
}

impl From<[u8; DIVERSIFIER_SIZE]> for Diversifier {
    fn from(bytes: [u8; DIVERSIFIER_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Diversifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Diversifier").field(&hex::encode(self.0)).finish()
    }
}

/// `DiversifyHash(d)`: a single group hash of `d` under `Zcash_gd`.
pub fn diversify_hash(d: &[u8; DIVERSIFIER_SIZE]) -> Result<ExtendedPoint> {
    group_hash(KEY_DIVERSIFICATION_PERSONALIZATION, d).ok_or_else(|| {
        tracing::warn!("diversifier {} is not valid", hex::encode(d));
        Error::GroupHashExhausted
    })
}

/// Sapling payment address
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PaymentAddress {
    diversifier: Diversifier,
    g_d: ExtendedPoint,
    pk_d: ExtendedPoint,
}

impl PaymentAddress {
    /// Address for diversifier `d` under the incoming viewing key `ivk`.
    pub fn new(diversifier: Diversifier, ivk: &Scalar) -> Result<Self> {
        if bool::from(ivk.is_zero()) {
            return Err(Error::InvalidEncoding("ivk is zero".to_string()));
        }
        let g_d = diversifier.g_d()?;
        let pk_d = g_d * ivk;
        Ok(Self {
            diversifier,
            g_d,
            pk_d,
        })
    }

    /// Rebuild an address from its diversifier and transmission key.
    ///
    /// `pk_d` must be a non-identity point of the prime-order subgroup.
    pub fn from_parts(diversifier: Diversifier, pk_d: ExtendedPoint) -> Result<Self> {
        if bool::from(pk_d.is_identity()) || !bool::from(pk_d.is_torsion_free()) {
            return Err(Error::InvalidEncoding(
                "pk_d is not in the prime-order subgroup".to_string(),
            ));
        }
        let g_d = diversifier.g_d()?;
        Ok(Self {
            diversifier,
            g_d,
            pk_d,
        })
    }

    /// Parse the 43-byte raw encoding `d || repr(pk_d)`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PAYMENT_ADDRESS_SIZE {
            return Err(Error::MalformedInput(format!(
                "payment address must be {} bytes, got {}",
                PAYMENT_ADDRESS_SIZE,
                bytes.len()
            )));
        }
        let mut d = [0u8; DIVERSIFIER_SIZE];
        d.copy_from_slice(&bytes[..DIVERSIFIER_SIZE]);
        let mut pk_d = [0u8; 32];
        pk_d.copy_from_slice(&bytes[DIVERSIFIER_SIZE..]);

        let pk_d = curve::decode_point(&pk_d)?;
        Self::from_parts(Diversifier(d), pk_d)
    }

    /// Raw 43-byte encoding
    pub fn to_bytes(&self) -> [u8; PAYMENT_ADDRESS_SIZE] {
        let mut out = [0u8; PAYMENT_ADDRESS_SIZE];
        out[..DIVERSIFIER_SIZE].copy_from_slice(&self.diversifier.0);
        out[DIVERSIFIER_SIZE..].copy_from_slice(&self.pk_d_bytes());
        out
    }

    /// Encode as Bech32 address for the given network.
    pub fn encode(&self, network: NetworkType) -> Result<String> {
        encode_bech32(Network::from_type(network).payment_address_hrp, &self.to_bytes())
    }

    /// Decode a Bech32 address for the given network.
    pub fn decode(network: NetworkType, addr: &str) -> Result<Self> {
        let (address, found) = Self::decode_any_network(addr)?;
        if found != network {
            return Err(Error::MalformedInput(format!(
                "address is for {}, expected {}",
                found, network
            )));
        }
        Ok(address)
    }

    /// Decode a Bech32 address for any known network.
    pub fn decode_any_network(addr: &str) -> Result<(Self, NetworkType)> {
        let (hrp, data) = decode_bech32(addr)?;
        let network = Network::from_payment_address_hrp(&hrp).ok_or_else(|| {
            Error::MalformedInput(format!("unknown payment address prefix '{}'", hrp))
        })?;
        Ok((Self::from_bytes(&data)?, network.network_type))
    }

    /// Diversifier
    pub fn diversifier(&self) -> Diversifier {
        self.diversifier
    }

    /// Diversified base point
    pub fn g_d(&self) -> &ExtendedPoint {
        &self.g_d
    }

    /// Diversified transmission key
    pub fn pk_d(&self) -> &ExtendedPoint {
        &self.pk_d
    }

    /// Compressed `pk_d`
    pub fn pk_d_bytes(&self) -> [u8; 32] {
        curve::encode_point(&self.pk_d)
    }
}

impl fmt::Debug for PaymentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentAddress")
            .field("diversifier", &self.diversifier)
            .field("pk_d", &hex::encode(self.pk_d_bytes()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_vectors::{
        bytes, ADDRESS_VECTORS, EXTENDED_FVK_ADDRESS, EXTENDED_FVK_ADDRESS_D,
        EXTENDED_FVK_ADDRESS_PK_D, NOTE_D, NOTE_G_D,
    };

    #[test]
    fn test_pk_d_vectors() {
        for (i, tv) in ADDRESS_VECTORS.iter().enumerate() {
            let ivk = curve::decode_scalar(&bytes(tv.ivk)).unwrap();
            let address = PaymentAddress::new(Diversifier(bytes(tv.d)), &ivk).unwrap();
            assert_eq!(hex::encode(address.pk_d_bytes()), tv.pk_d, "vector {}", i);
        }
    }

    #[test]
    fn test_g_d_vector() {
        let g_d = Diversifier(bytes(NOTE_D)).g_d().unwrap();
        assert_eq!(hex::encode(curve::encode_point(&g_d)), NOTE_G_D);
    }

    #[test]
    fn test_invalid_diversifiers() {
        for i in [1u8, 2, 3, 5, 7] {
            let mut d = [0u8; 11];
            d[0] = i;
            assert_eq!(Diversifier(d).g_d(), Err(Error::GroupHashExhausted));
        }
        for i in [0u8, 4, 6] {
            let mut d = [0u8; 11];
            d[0] = i;
            assert!(Diversifier(d).g_d().is_ok());
        }
    }

    #[test]
    fn test_zero_ivk_rejected() {
        let d = Diversifier(bytes(NOTE_D));
        assert!(matches!(
            PaymentAddress::new(d, &Scalar::ZERO),
            Err(Error::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_decode_mainnet_address() {
        let (address, network) = PaymentAddress::decode_any_network(EXTENDED_FVK_ADDRESS).unwrap();
        assert_eq!(network, NetworkType::Mainnet);
        assert_eq!(hex::encode(address.diversifier().0), EXTENDED_FVK_ADDRESS_D);
        assert_eq!(hex::encode(address.pk_d_bytes()), EXTENDED_FVK_ADDRESS_PK_D);
        assert_eq!(address.encode(NetworkType::Mainnet).unwrap(), EXTENDED_FVK_ADDRESS);
    }

    #[test]
    fn test_decode_wrong_network() {
        assert!(matches!(
            PaymentAddress::decode(NetworkType::Testnet, EXTENDED_FVK_ADDRESS),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_testnet_round_trip() {
        let (address, _) = PaymentAddress::decode_any_network(EXTENDED_FVK_ADDRESS).unwrap();
        let encoded = address.encode(NetworkType::Testnet).unwrap();
        assert!(encoded.starts_with("ztestsapling1"));
        assert_eq!(PaymentAddress::decode(NetworkType::Testnet, &encoded).unwrap(), address);
    }

    #[test]
    fn test_from_bytes_rejects_bad_input() {
        assert!(matches!(
            PaymentAddress::from_bytes(&[0u8; 42]),
            Err(Error::MalformedInput(_))
        ));

        // identity pk_d
        let mut raw = [0u8; 43];
        raw[..11].copy_from_slice(&bytes::<11>(NOTE_D));
        raw[11] = 1;
        assert!(matches!(
            PaymentAddress::from_bytes(&raw),
            Err(Error::InvalidEncoding(_))
        ));
    }
}
