//! Strict bech32 helpers shared by addresses and viewing keys

use crate::{Error, Result};
use bech32::{Bech32, Hrp};

/// Decode a bech32 string, returning its prefix and 8-bit payload.
///
/// Only canonical encodings are accepted: the string must re-encode to
/// itself (modulo case). This rejects bech32m checksums and set padding bits,
/// which `bech32::decode` tolerates.
pub(crate) fn decode_bech32(encoded: &str) -> Result<(String, Vec<u8>)> {
    let (hrp, data) = bech32::decode(encoded)
        .map_err(|e| Error::MalformedInput(format!("Bech32 decoding failed: {e}")))?;

    let canonical = bech32::encode::<Bech32>(hrp, &data)
        .map_err(|e| Error::MalformedInput(format!("Bech32 encoding failed: {e}")))?;
    if canonical != encoded.to_ascii_lowercase() {
        return Err(Error::MalformedInput(
            "non-canonical bech32 encoding".to_string(),
        ));
    }

    Ok((hrp.as_str().to_string(), data))
}

/// Encode `data` under `hrp` with the bech32 checksum.
pub(crate) fn encode_bech32(hrp: &str, data: &[u8]) -> Result<String> {
    let hrp = Hrp::parse(hrp).map_err(|e| Error::MalformedInput(format!("Invalid HRP: {e}")))?;
    bech32::encode::<Bech32>(hrp, data)
        .map_err(|e| Error::MalformedInput(format!("Bech32 encoding failed: {e}")))
}

/// Copy a fixed-size field out of `bytes` at `*offset`, advancing it.
pub(crate) fn take<const N: usize>(bytes: &[u8], offset: &mut usize) -> Result<[u8; N]> {
    let end = offset
        .checked_add(N)
        .filter(|end| *end <= bytes.len())
        .ok_or_else(|| Error::MalformedInput("input too short".to_string()))?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[*offset..end]);
    *offset = end;
    Ok(out)
}

/// Fail unless `offset` consumed all of `bytes`.
pub(crate) fn expect_consumed(bytes: &[u8], offset: usize) -> Result<()> {
    if offset != bytes.len() {
        return Err(Error::MalformedInput(format!(
            "{} trailing bytes",
            bytes.len().saturating_sub(offset)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bech32::Bech32m;

    #[test]
    fn test_round_trip() {
        let encoded = encode_bech32("zs", &[7u8; 43]).unwrap();
        let (hrp, data) = decode_bech32(&encoded).unwrap();
        assert_eq!(hrp, "zs");
        assert_eq!(data, vec![7u8; 43]);
    }

    #[test]
    fn test_uppercase_accepted() {
        let encoded = encode_bech32("zs", &[1u8; 43]).unwrap();
        let (_, data) = decode_bech32(&encoded.to_ascii_uppercase()).unwrap();
        assert_eq!(data, vec![1u8; 43]);
    }

    #[test]
    fn test_bech32m_rejected() {
        let hrp = Hrp::parse("zs").unwrap();
        let encoded = bech32::encode::<Bech32m>(hrp, &[1u8; 43]).unwrap();
        assert!(matches!(
            decode_bech32(&encoded),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let mut encoded = encode_bech32("zs", &[1u8; 43]).unwrap();
        let last = encoded.pop().unwrap();
        encoded.push(if last == 'q' { 'p' } else { 'q' });
        assert!(decode_bech32(&encoded).is_err());
    }

    #[test]
    fn test_take_fields() {
        let bytes = [1u8, 2, 3, 4, 5];
        let mut offset = 0;
        let a: [u8; 2] = take(&bytes, &mut offset).unwrap();
        assert_eq!(a, [1, 2]);
        assert!(expect_consumed(&bytes, offset).is_err());
        let b: [u8; 3] = take(&bytes, &mut offset).unwrap();
        assert_eq!(b, [3, 4, 5]);
        expect_consumed(&bytes, offset).unwrap();
        assert!(take::<1>(&bytes, &mut offset).is_err());
    }
}
