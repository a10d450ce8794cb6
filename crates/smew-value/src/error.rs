//! Error types for type and value construction

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid decimal type: DECIMAL({width},{scale})")]
    InvalidDecimal { width: u8, scale: u8 },

    #[error("Decimal value {value} does not fit in DECIMAL({width},{scale})")]
    DecimalOutOfRange { width: u8, scale: u8, value: i128 },

    #[error("Enum requires at least one label")]
    EmptyEnum,

    #[error("Duplicate enum label: {0}")]
    DuplicateEnumLabel(String),

    #[error("Enum index {index} out of range for enum of {cardinality} labels")]
    InvalidEnumIndex { index: u32, cardinality: usize },

    #[error("Struct requires at least one field")]
    EmptyStruct,

    #[error("Duplicate struct field: {0}")]
    DuplicateField(String),

    #[error("Union requires at least one member")]
    EmptyUnion,

    #[error("Union has {0} members; at most 256 are supported")]
    UnionTooLarge(usize),

    #[error("Duplicate union tag: {0}")]
    DuplicateTag(String),

    #[error("Unknown union tag: {0}")]
    UnknownUnionTag(String),

    #[error("Cannot create a {0} value over ANY")]
    AnyNotConcrete(&'static str),

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("Expected {expected} values, found {found}")]
    CountMismatch { expected: usize, found: usize },

    #[error("Expected a {expected} type, found {found}")]
    UnexpectedType { expected: &'static str, found: String },

    #[error("Invalid character in bit string: {0}")]
    InvalidBitString(char),

    #[error("Invalid bit payload")]
    InvalidBitPayload,

    #[error("Time zone offset {0} out of range")]
    InvalidTimeZoneOffset(i32),
}
