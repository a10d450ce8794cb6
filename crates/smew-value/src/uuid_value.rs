//! UUID values and their hugeint storage transform

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A 128-bit UUID.
///
/// The engine stores UUIDs as signed 128-bit integers with the top bit
/// flipped so that signed ordering of the storage matches unsigned ordering
/// of the UUID. The flip is an involution, so both directions use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UuidValue(pub u128);

const SIGN_BIT: u128 = 1 << 127;

impl UuidValue {
    pub const MIN: UuidValue = UuidValue(u128::MIN);
    pub const MAX: UuidValue = UuidValue(u128::MAX);

    pub fn from_hugeint(storage: i128) -> Self {
        UuidValue(storage as u128 ^ SIGN_BIT)
    }

    pub fn to_hugeint(&self) -> i128 {
        (self.0 ^ SIGN_BIT) as i128
    }

    pub fn as_uuid(&self) -> Uuid {
        Uuid::from_u128(self.0)
    }
}

impl From<Uuid> for UuidValue {
    fn from(uuid: Uuid) -> Self {
        UuidValue(uuid.as_u128())
    }
}

impl fmt::Display for UuidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_uuid().hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hugeint_round_trip() {
        for value in [UuidValue::MIN, UuidValue::MAX, UuidValue(0xf0e1d2c3b4a596870123456789abcdef)] {
            assert_eq!(UuidValue::from_hugeint(value.to_hugeint()), value);
        }
    }

    #[test]
    fn test_storage_preserves_ordering() {
        // Unsigned UUID ordering must match signed storage ordering.
        assert!(UuidValue::MIN.to_hugeint() < UuidValue(1).to_hugeint());
        assert!(UuidValue(SIGN_BIT - 1).to_hugeint() < UuidValue(SIGN_BIT).to_hugeint());
        assert!(UuidValue(SIGN_BIT).to_hugeint() < UuidValue::MAX.to_hugeint());
        assert_eq!(UuidValue::MIN.to_hugeint(), i128::MIN);
        assert_eq!(UuidValue::MAX.to_hugeint(), i128::MAX);
    }

    #[test]
    fn test_rendering() {
        assert_eq!(
            UuidValue(0xf0e1d2c3b4a596870123456789abcdef).to_string(),
            "f0e1d2c3-b4a5-9687-0123-456789abcdef"
        );
    }
}
