//! Date values as day offsets from the epoch

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days between 0000-03-01 and 1970-01-01, used by the civil conversion.
const DAYS_TO_EPOCH: i64 = 719468;

/// A calendar date stored as days since 1970-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateValue {
    pub days: i32,
}

impl DateValue {
    pub const EPOCH: DateValue = DateValue { days: 0 };
    /// Smallest finite date.
    pub const MIN: DateValue = DateValue { days: -2147483646 };
    /// Largest finite date.
    pub const MAX: DateValue = DateValue { days: 2147483646 };
    /// Negative infinity sentinel, below every finite date.
    pub const NEG_INF: DateValue = DateValue { days: -2147483647 };
    /// Positive infinity sentinel, above every finite date.
    pub const POS_INF: DateValue = DateValue { days: 2147483647 };

    pub fn new(days: i32) -> Self {
        DateValue { days }
    }

    pub fn is_finite(&self) -> bool {
        *self != Self::NEG_INF && *self != Self::POS_INF
    }

    /// Convert from a chrono date. Covers chrono's whole range; the sentinel
    /// extremes lie outside it.
    pub fn from_naive(date: NaiveDate) -> Self {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
        DateValue {
            days: (date.num_days_from_ce() - epoch.num_days_from_ce()),
        }
    }

    /// Convert to a chrono date, if within chrono's representable range.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
        if self.days >= 0 {
            epoch.checked_add_days(chrono::Days::new(self.days as u64))
        } else {
            epoch.checked_sub_days(chrono::Days::new(self.days.unsigned_abs() as u64))
        }
    }

    /// Proleptic Gregorian (year, month, day) for this date.
    pub fn to_civil(&self) -> (i64, u32, u32) {
        civil_from_days(self.days as i64)
    }
}

/// Proleptic Gregorian (year, month, day) for a raw day count.
///
/// Years at the date extremes exceed chrono's range, so the civil
/// conversion is done directly on day counts. Year 0 and below are BC
/// years in astronomical numbering. Timestamp rendering shares this
/// conversion, so it takes i64 days rather than a `DateValue`.
pub(crate) fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + DAYS_TO_EPOCH;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = z - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

/// Write a day count as a civil date, with the BC suffix where needed.
pub(crate) fn format_civil(f: &mut fmt::Formatter<'_>, days: i64) -> fmt::Result {
    let (year, month, day) = civil_from_days(days);
    if year <= 0 {
        write!(f, "{:04}-{month:02}-{day:02} (BC)", 1 - year)
    } else {
        write!(f, "{year:04}-{month:02}-{day:02}")
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::POS_INF {
            return write!(f, "infinity");
        }
        if *self == Self::NEG_INF {
            return write!(f, "-infinity");
        }
        format_civil(f, self.days as i64)
    }
}
