//! Timestamp values at second through nanosecond resolution

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::date::format_civil;
use crate::time::TimeValue;

/// Declares a timestamp carrier over an i64 tick count.
///
/// Every resolution shares the same sentinel scheme: positive infinity is
/// the maximum tick value, negative infinity its negation. The finite
/// bounds are per resolution: the largest tick count the engine accepts,
/// and its negation. Second and millisecond carriers are bounded by what
/// still converts to microseconds, not by the i64 range.
macro_rules! timestamp_carrier {
    ($(#[$doc:meta])* $name:ident, $field:ident, $ticks_per_sec:expr, $max_ticks:expr) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name {
            pub $field: i64,
        }

        impl $name {
            pub const EPOCH: $name = $name { $field: 0 };
            pub const POS_INF: $name = $name { $field: i64::MAX };
            pub const NEG_INF: $name = $name { $field: -i64::MAX };
            pub const MIN: $name = $name { $field: -$max_ticks };
            pub const MAX: $name = $name { $field: $max_ticks };

            pub fn new($field: i64) -> Self {
                $name { $field }
            }

            pub fn is_finite(&self) -> bool {
                *self != Self::POS_INF && *self != Self::NEG_INF
            }

            fn write_civil(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if *self == Self::POS_INF {
                    return write!(f, "infinity");
                }
                if *self == Self::NEG_INF {
                    return write!(f, "-infinity");
                }
                let ticks_per_day: i64 = 86_400 * $ticks_per_sec;
                let days = self.$field.div_euclid(ticks_per_day);
                let in_day = self.$field.rem_euclid(ticks_per_day);
                let micros = in_day as i128 * 1_000_000 / $ticks_per_sec as i128;
                format_civil(f, days)?;
                write!(f, " {}", TimeValue::new(micros as i64))
            }
        }
    };
}

timestamp_carrier!(
    /// Microseconds since the epoch.
    TimestampValue,
    micros,
    1_000_000i64,
    i64::MAX - 1
);
timestamp_carrier!(
    /// Seconds since the epoch.
    TimestampSecondsValue,
    seconds,
    1i64,
    9_223_372_036_854i64
);
timestamp_carrier!(
    /// Milliseconds since the epoch.
    TimestampMillisecondsValue,
    millis,
    1_000i64,
    9_223_372_036_854_775i64
);
timestamp_carrier!(
    /// Nanoseconds since the epoch.
    TimestampNanosecondsValue,
    nanos,
    1_000_000_000i64,
    i64::MAX - 1
);
timestamp_carrier!(
    /// Microseconds since the epoch, interpreted in UTC.
    TimestampTzValue,
    micros,
    1_000_000i64,
    i64::MAX - 1
);

impl fmt::Display for TimestampValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_civil(f)
    }
}

impl fmt::Display for TimestampSecondsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_civil(f)
    }
}

impl fmt::Display for TimestampMillisecondsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_civil(f)
    }
}

impl fmt::Display for TimestampNanosecondsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_civil(f)
    }
}

impl fmt::Display for TimestampTzValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_civil(f)?;
        if self.is_finite() {
            write!(f, "+00")?;
        }
        Ok(())
    }
}
