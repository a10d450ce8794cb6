//! Calendar interval values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar interval of months, days, and microseconds.
///
/// The three components are independent; a month has no fixed length, so
/// they never normalize into one another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalValue {
    pub months: i32,
    pub days: i32,
    pub micros: i64,
}

impl IntervalValue {
    pub fn new(months: i32, days: i32, micros: i64) -> Self {
        IntervalValue {
            months,
            days,
            micros,
        }
    }
}

impl fmt::Display for IntervalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        let mut part = |f: &mut fmt::Formatter<'_>, n: i64, unit: &str| -> fmt::Result {
            if n != 0 {
                if wrote {
                    write!(f, " ")?;
                }
                write!(f, "{n} {unit}{}", if n.abs() == 1 { "" } else { "s" })?;
                wrote = true;
            }
            Ok(())
        };
        part(f, (self.months / 12) as i64, "year")?;
        part(f, (self.months % 12) as i64, "month")?;
        part(f, self.days as i64, "day")?;
        if self.micros != 0 || !wrote {
            if wrote {
                write!(f, " ")?;
            }
            let secs = self.micros.div_euclid(1_000_000);
            let sub = self.micros.rem_euclid(1_000_000);
            write!(f, "{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)?;
            if sub != 0 {
                write!(f, ".{sub:06}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendering() {
        assert_eq!(IntervalValue::default().to_string(), "00:00:00");
        assert_eq!(IntervalValue::new(14, 3, 0).to_string(), "1 year 2 months 3 days");
        assert_eq!(
            IntervalValue::new(0, 0, 3_723_000_004).to_string(),
            "01:02:03.000004"
        );
    }
}
