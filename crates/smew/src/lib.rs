//! Client-side columnar marshalling layer for an embedded analytical engine.
//!
//! The crate mirrors the engine's columnar interface: a closed type system
//! with typed values (re-exported from `smew-value`), vectors and data
//! chunks for bulk row transfer, and prepared statements whose execution
//! can be driven incrementally through pending queries.

pub mod chunk;
pub mod config;
pub mod connection;
pub mod engine;
pub mod error;
pub mod pending;
pub mod result;
pub mod statement;
pub mod vector;

pub use chunk::DataChunk;
pub use config::{configuration_option_descriptions, version};
pub use connection::{Connection, Database};
pub use engine::{Plan, all_types_probe};
pub use error::{Error, Result};
pub use pending::{PendingQuery, PendingState, ResultMode};
pub use result::{Column, QueryResult, ResultReturnType, StatementType};
pub use statement::PreparedStatement;
pub use vector::{STANDARD_VECTOR_SIZE, Vector};

pub use smew_value::{
    ArrayValue, BitValue, DateValue, DecimalValue, EnumValue, IntervalValue, ListValue,
    LogicalType, MapValue, StructValue, TimeTzValue, TimeValue, TimestampMillisecondsValue,
    TimestampNanosecondsValue, TimestampSecondsValue, TimestampTzValue, TimestampValue, TypeId,
    UnionValue, UuidValue, Value, VarIntValue,
};
