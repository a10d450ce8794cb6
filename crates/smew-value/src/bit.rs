//! Arbitrary-length bit string values

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// A bit string with an explicit bit length distinct from its byte length.
///
/// Bits are packed MSB-first with the padding at the front of the first
/// byte, mirroring the engine's native layout. Padding bits are always
/// zero so derived equality is well defined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitValue {
    bytes: Vec<u8>,
    len: usize,
}

impl BitValue {
    /// Parse a literal bit sequence of '0' and '1' characters.
    pub fn from_bit_string(s: &str) -> Result<Self> {
        let len = s.len();
        let padding = len.next_multiple_of(8) - len;
        let mut bytes = vec![0u8; (len + padding) / 8];
        for (i, ch) in s.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => {
                    let pos = padding + i;
                    bytes[pos / 8] |= 0x80 >> (pos % 8);
                }
                other => return Err(Error::InvalidBitString(other)),
            }
        }
        Ok(BitValue { bytes, len })
    }

    /// Decode the engine's native payload: one leading byte holding the
    /// padding bit count, then the packed bits.
    pub fn from_padded_bytes(payload: &[u8]) -> Result<Self> {
        let (&padding, bytes) = payload.split_first().ok_or(Error::InvalidBitPayload)?;
        if padding > 7 || (bytes.is_empty() && padding != 0) {
            return Err(Error::InvalidBitPayload);
        }
        let mut bytes = bytes.to_vec();
        if let Some(first) = bytes.first_mut() {
            // Normalize padding bits to zero.
            *first &= 0xff >> padding;
        }
        let len = bytes.len() * 8 - padding as usize;
        Ok(BitValue { bytes, len })
    }

    /// Encode into the native padding-prefixed payload.
    pub fn to_padded_bytes(&self) -> Vec<u8> {
        let padding = (self.bytes.len() * 8 - self.len) as u8;
        let mut payload = Vec::with_capacity(self.bytes.len() + 1);
        payload.push(padding);
        payload.extend_from_slice(&self.bytes);
        payload
    }

    /// Number of bits in the string.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bit(&self, i: usize) -> bool {
        let pos = (self.bytes.len() * 8 - self.len) + i;
        self.bytes[pos / 8] & (0x80 >> (pos % 8)) != 0
    }
}

impl fmt::Display for BitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len {
            write!(f, "{}", if self.bit(i) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering() {
        assert_eq!(BitValue::from_bit_string("").unwrap().to_string(), "");
        assert_eq!(
            BitValue::from_bit_string("10101").unwrap().to_string(),
            "10101"
        );
        assert_eq!(
            BitValue::from_bit_string("0010001001011100010101011010111")
                .unwrap()
                .to_string(),
            "0010001001011100010101011010111"
        );
    }

    #[test]
    fn test_padded_round_trip() {
        for s in ["", "1", "10101", "0010001001011100010101011010111"] {
            let value = BitValue::from_bit_string(s).unwrap();
            let decoded = BitValue::from_padded_bytes(&value.to_padded_bytes()).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(decoded.len(), s.len());
        }
    }

    #[test]
    fn test_native_payload_layout() {
        // 31 bits over 4 bytes: one padding bit.
        let value = BitValue::from_bit_string("0010001001011100010101011010111").unwrap();
        let payload = value.to_padded_bytes();
        assert_eq!(payload[0], 1);
        assert_eq!(payload.len(), 5);
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            BitValue::from_bit_string("012"),
            Err(Error::InvalidBitString('2'))
        );
        assert_eq!(BitValue::from_padded_bytes(&[]), Err(Error::InvalidBitPayload));
        assert_eq!(BitValue::from_padded_bytes(&[9, 0xff]), Err(Error::InvalidBitPayload));
    }
}
