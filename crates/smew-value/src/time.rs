//! Time-of-day values, with and without a UTC offset

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Time of day as microseconds since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeValue {
    pub micros: i64,
}

impl TimeValue {
    pub const MIN: TimeValue = TimeValue { micros: 0 };
    /// 24:00:00, inclusive upper bound.
    pub const MAX: TimeValue = TimeValue {
        micros: 86_400_000_000,
    };

    pub fn new(micros: i64) -> Self {
        TimeValue { micros }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_secs = self.micros.div_euclid(1_000_000);
        let micros = self.micros.rem_euclid(1_000_000);
        let (hours, mins, secs) = (total_secs / 3600, total_secs / 60 % 60, total_secs % 60);
        write!(f, "{hours:02}:{mins:02}:{secs:02}")?;
        if micros != 0 {
            write!(f, ".{micros:06}")?;
        }
        Ok(())
    }
}

/// Maximum UTC offset magnitude in seconds (15:59:59).
pub const MAX_TIME_TZ_OFFSET: i32 = 57_599;

const OFFSET_BITS: u32 = 24;

/// Time of day with a UTC offset, packed into 64 bits.
///
/// The packed form stores microseconds in the upper 40 bits and the offset,
/// reversed so larger offsets order earlier, in the lower 24. Packed values
/// therefore sort the same way the engine's native representation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeTzValue {
    pub micros: i64,
    /// UTC offset in seconds, positive east of Greenwich.
    pub offset: i32,
}

impl TimeTzValue {
    pub const MIN: TimeTzValue = TimeTzValue {
        micros: 0,
        offset: MAX_TIME_TZ_OFFSET,
    };
    pub const MAX: TimeTzValue = TimeTzValue {
        micros: 86_400_000_000,
        offset: -MAX_TIME_TZ_OFFSET,
    };

    pub fn new(micros: i64, offset: i32) -> Result<Self> {
        if offset.abs() > MAX_TIME_TZ_OFFSET {
            return Err(Error::InvalidTimeZoneOffset(offset));
        }
        Ok(TimeTzValue { micros, offset })
    }

    /// Native 64-bit packed representation.
    pub fn bits(&self) -> u64 {
        ((self.micros as u64) << OFFSET_BITS) | (MAX_TIME_TZ_OFFSET - self.offset) as u64
    }

    pub fn from_bits(bits: u64) -> Self {
        TimeTzValue {
            micros: (bits >> OFFSET_BITS) as i64,
            offset: MAX_TIME_TZ_OFFSET - (bits & ((1 << OFFSET_BITS) - 1)) as i32,
        }
    }
}

impl fmt::Display for TimeTzValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TimeValue::new(self.micros))?;
        let sign = if self.offset < 0 { '-' } else { '+' };
        let offset = self.offset.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", offset / 3600, offset / 60 % 60)?;
        if offset % 60 != 0 {
            write!(f, ":{:02}", offset % 60)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_rendering() {
        assert_eq!(TimeValue::MIN.to_string(), "00:00:00");
        assert_eq!(TimeValue::MAX.to_string(), "24:00:00");
        assert_eq!(TimeValue::new(45_296_789_123).to_string(), "12:34:56.789123");
    }

    #[test]
    fn test_time_tz_packing() {
        // Max value: 24:00:00 at offset -15:59:59.
        assert_eq!(TimeTzValue::MAX.bits(), 1449551462400115198);
        assert_eq!(TimeTzValue::MIN.bits(), 0);
        for value in [TimeTzValue::MIN, TimeTzValue::MAX, TimeTzValue::new(1, -1).unwrap()] {
            assert_eq!(TimeTzValue::from_bits(value.bits()), value);
        }
    }

    #[test]
    fn test_time_tz_offset_range() {
        assert!(TimeTzValue::new(0, MAX_TIME_TZ_OFFSET).is_ok());
        assert_eq!(
            TimeTzValue::new(0, MAX_TIME_TZ_OFFSET + 1),
            Err(Error::InvalidTimeZoneOffset(MAX_TIME_TZ_OFFSET + 1))
        );
    }

    #[test]
    fn test_time_tz_rendering() {
        let value = TimeTzValue::new(45_296_000_000, -25_200).unwrap();
        assert_eq!(value.to_string(), "12:34:56-07:00");
        assert_eq!(TimeTzValue::MIN.to_string(), "00:00:00+15:59:59");
    }
}
