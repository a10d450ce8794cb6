//! Fixed-point decimal values

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// A fixed-point decimal: an already-scaled integer magnitude plus the
/// width and scale of its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecimalValue {
    width: u8,
    scale: u8,
    value: i128,
}

impl DecimalValue {
    /// Construct a decimal, validating width, scale, and magnitude.
    pub fn new(width: u8, scale: u8, value: i128) -> Result<Self> {
        if width == 0 || width > 38 || scale > width {
            return Err(Error::InvalidDecimal { width, scale });
        }
        if value.unsigned_abs() >= 10u128.pow(width as u32) {
            return Err(Error::DecimalOutOfRange { width, scale, value });
        }
        Ok(DecimalValue {
            width,
            scale,
            value,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// The unscaled magnitude; the represented number is `value / 10^scale`.
    pub fn value(&self) -> i128 {
        self.value
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.value);
        }
        let divisor = 10i128.pow(self.scale as u32);
        let sign = if self.value < 0 { "-" } else { "" };
        let magnitude = self.value.unsigned_abs();
        let whole = magnitude / divisor as u128;
        let frac = magnitude % divisor as u128;
        write!(f, "{sign}{whole}.{frac:0width$}", width = self.scale as usize)
    }
}
