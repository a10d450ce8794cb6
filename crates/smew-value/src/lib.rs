//! Logical type and value model for the smew client.
//!
//! This crate defines the closed type system exposed by the engine's
//! columnar interface and the typed values that mirror it. Types carry
//! identity, structural equality, and a canonical textual rendering;
//! values convert to and from the engine's minimal native representations.

mod bit;
mod date;
mod decimal;
mod error;
mod interval;
mod time;
mod timestamp;
mod types;
mod uuid_value;
mod value;
mod varint;

pub use bit::BitValue;
pub use date::DateValue;
pub use decimal::DecimalValue;
pub use error::{Error, Result};
pub use interval::IntervalValue;
pub use time::{MAX_TIME_TZ_OFFSET, TimeTzValue, TimeValue};
pub use timestamp::{
    TimestampMillisecondsValue, TimestampNanosecondsValue, TimestampSecondsValue,
    TimestampTzValue, TimestampValue,
};
pub use types::{LogicalType, TypeId};
pub use uuid_value::UuidValue;
pub use value::{ArrayValue, EnumValue, ListValue, MapValue, StructValue, UnionValue, Value};
pub use varint::VarIntValue;
