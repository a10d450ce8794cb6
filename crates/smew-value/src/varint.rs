//! Arbitrary-precision integer values

use serde::{Deserialize, Serialize};
use std::fmt;

/// An arbitrary-precision integer: sign plus big-endian magnitude bytes.
///
/// Zero is canonical (non-negative, empty magnitude) and magnitudes never
/// carry leading zero bytes, so derived equality is structural equality of
/// the represented number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VarIntValue {
    negative: bool,
    magnitude: Vec<u8>,
}

impl VarIntValue {
    pub fn from_i128(value: i128) -> Self {
        let magnitude = value.unsigned_abs();
        Self::from_parts(value < 0, magnitude.to_be_bytes().to_vec())
    }

    /// Build from a sign and big-endian magnitude bytes; normalizes
    /// leading zeros and the sign of zero.
    pub fn from_parts(negative: bool, magnitude: Vec<u8>) -> Self {
        let start = magnitude.iter().position(|&b| b != 0);
        match start {
            Some(start) => VarIntValue {
                negative,
                magnitude: magnitude[start..].to_vec(),
            },
            None => VarIntValue::default(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn magnitude(&self) -> &[u8] {
        &self.magnitude
    }

    pub fn to_i128(&self) -> Option<i128> {
        if self.magnitude.len() > 16 {
            return None;
        }
        let mut bytes = [0u8; 16];
        bytes[16 - self.magnitude.len()..].copy_from_slice(&self.magnitude);
        let magnitude = u128::from_be_bytes(bytes);
        if self.negative {
            if magnitude > i128::MAX as u128 + 1 {
                return None;
            }
            Some((magnitude as i128).wrapping_neg())
        } else {
            i128::try_from(magnitude).ok()
        }
    }
}

impl fmt::Display for VarIntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.negative {
            write!(f, "-")?;
        }
        // Repeated division of the magnitude by 10.
        let mut digits = Vec::new();
        let mut current = self.magnitude.clone();
        while !current.is_empty() {
            let mut quotient = Vec::with_capacity(current.len());
            let mut rem: u32 = 0;
            for &byte in &current {
                let cur = rem * 256 + byte as u32;
                quotient.push((cur / 10) as u8);
                rem = cur % 10;
            }
            digits.push(b'0' + rem as u8);
            let start = quotient.iter().position(|&b| b != 0).unwrap_or(quotient.len());
            current = quotient[start..].to_vec();
        }
        digits.reverse();
        f.write_str(&String::from_utf8_lossy(&digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i128_round_trip() {
        for value in [0i128, 1, -1, 255, -256, i128::MAX, i128::MIN] {
            let varint = VarIntValue::from_i128(value);
            assert_eq!(varint.to_i128(), Some(value));
            assert_eq!(varint.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_beyond_i128() {
        // 2^128 = 1 followed by 16 zero bytes.
        let mut magnitude = vec![1u8];
        magnitude.extend(std::iter::repeat_n(0u8, 16));
        let varint = VarIntValue::from_parts(false, magnitude);
        assert_eq!(varint.to_i128(), None);
        assert_eq!(varint.to_string(), "340282366920938463463374607431768211456");
    }

    #[test]
    fn test_zero_is_canonical() {
        assert_eq!(
            VarIntValue::from_parts(true, vec![0, 0]),
            VarIntValue::from_i128(0)
        );
        assert!(!VarIntValue::from_parts(true, vec![0]).is_negative());
    }
}
