//! Logical types exposed by the engine's columnar interface

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Native discriminant for each type kind, matching the engine's numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum TypeId {
    Invalid = 0,
    Boolean = 1,
    TinyInt = 2,
    SmallInt = 3,
    Integer = 4,
    BigInt = 5,
    UTinyInt = 6,
    USmallInt = 7,
    UInteger = 8,
    UBigInt = 9,
    Float = 10,
    Double = 11,
    Timestamp = 12,
    Date = 13,
    Time = 14,
    Interval = 15,
    HugeInt = 16,
    Varchar = 17,
    Blob = 18,
    Decimal = 19,
    TimestampS = 20,
    TimestampMs = 21,
    TimestampNs = 22,
    Enum = 23,
    List = 24,
    Struct = 25,
    Map = 26,
    Uuid = 27,
    Union = 28,
    Bit = 29,
    TimeTz = 30,
    TimestampTz = 31,
    UHugeInt = 32,
    Array = 33,
    Any = 34,
    VarInt = 35,
    SqlNull = 36,
}

/// The closed set of logical types.
///
/// Equality is structural: two decimal types are equal when width and scale
/// match, two structs when their field lists match, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalType {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    HugeInt,
    UTinyInt,
    USmallInt,
    UInteger,
    UBigInt,
    UHugeInt,
    /// Arbitrary-precision integer.
    VarInt,
    Float,
    Double,
    Decimal {
        width: u8,
        scale: u8,
    },
    Varchar,
    Blob,
    /// Arbitrary-length bit string.
    Bit,
    Uuid,
    /// Days since the epoch.
    Date,
    /// Microseconds since midnight.
    Time,
    /// Time of day with a UTC offset, packed into 64 bits.
    TimeTz,
    /// Microseconds since the epoch.
    Timestamp,
    TimestampS,
    TimestampMs,
    TimestampNs,
    TimestampTz,
    Interval,
    /// The SQL NULL sentinel type.
    SqlNull,
    /// Placeholder type; never a concrete value carrier.
    Any,
    Enum {
        labels: Vec<String>,
    },
    List(Box<LogicalType>),
    Array {
        element: Box<LogicalType>,
        size: usize,
    },
    Struct {
        fields: Vec<(String, LogicalType)>,
    },
    Map {
        key: Box<LogicalType>,
        value: Box<LogicalType>,
    },
    Union {
        members: Vec<(String, LogicalType)>,
    },
}

impl LogicalType {
    /// Decimal type with validated width and scale.
    pub fn decimal(width: u8, scale: u8) -> Result<Self> {
        if width == 0 || width > 38 || scale > width {
            return Err(Error::InvalidDecimal { width, scale });
        }
        Ok(LogicalType::Decimal { width, scale })
    }

    /// Enum type over a non-empty, duplicate-free label list.
    pub fn enumeration<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(Error::EmptyEnum);
        }
        let mut seen = std::collections::HashSet::new();
        for label in &labels {
            if !seen.insert(label.as_str()) {
                return Err(Error::DuplicateEnumLabel(label.clone()));
            }
        }
        Ok(LogicalType::Enum { labels })
    }

    pub fn list(element: LogicalType) -> Self {
        LogicalType::List(Box::new(element))
    }

    pub fn array(element: LogicalType, size: usize) -> Self {
        LogicalType::Array {
            element: Box::new(element),
            size,
        }
    }

    /// Struct type over a non-empty field list with unique names.
    pub fn struct_type<I, S>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, LogicalType)>,
        S: Into<String>,
    {
        let fields: Vec<(String, LogicalType)> =
            fields.into_iter().map(|(n, t)| (n.into(), t)).collect();
        if fields.is_empty() {
            return Err(Error::EmptyStruct);
        }
        let mut seen = std::collections::HashSet::new();
        for (name, _) in &fields {
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateField(name.clone()));
            }
        }
        Ok(LogicalType::Struct { fields })
    }

    pub fn map(key: LogicalType, value: LogicalType) -> Self {
        LogicalType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Union type over a non-empty member list with unique tags. The member
    /// selector is stored in a single byte, so unions cap at 256 members.
    pub fn union_type<I, S>(members: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, LogicalType)>,
        S: Into<String>,
    {
        let members: Vec<(String, LogicalType)> =
            members.into_iter().map(|(n, t)| (n.into(), t)).collect();
        if members.is_empty() {
            return Err(Error::EmptyUnion);
        }
        if members.len() > 256 {
            return Err(Error::UnionTooLarge(members.len()));
        }
        let mut seen = std::collections::HashSet::new();
        for (tag, _) in &members {
            if !seen.insert(tag.as_str()) {
                return Err(Error::DuplicateTag(tag.clone()));
            }
        }
        Ok(LogicalType::Union { members })
    }

    pub fn id(&self) -> TypeId {
        match self {
            LogicalType::Boolean => TypeId::Boolean,
            LogicalType::TinyInt => TypeId::TinyInt,
            LogicalType::SmallInt => TypeId::SmallInt,
            LogicalType::Integer => TypeId::Integer,
            LogicalType::BigInt => TypeId::BigInt,
            LogicalType::HugeInt => TypeId::HugeInt,
            LogicalType::UTinyInt => TypeId::UTinyInt,
            LogicalType::USmallInt => TypeId::USmallInt,
            LogicalType::UInteger => TypeId::UInteger,
            LogicalType::UBigInt => TypeId::UBigInt,
            LogicalType::UHugeInt => TypeId::UHugeInt,
            LogicalType::VarInt => TypeId::VarInt,
            LogicalType::Float => TypeId::Float,
            LogicalType::Double => TypeId::Double,
            LogicalType::Decimal { .. } => TypeId::Decimal,
            LogicalType::Varchar => TypeId::Varchar,
            LogicalType::Blob => TypeId::Blob,
            LogicalType::Bit => TypeId::Bit,
            LogicalType::Uuid => TypeId::Uuid,
            LogicalType::Date => TypeId::Date,
            LogicalType::Time => TypeId::Time,
            LogicalType::TimeTz => TypeId::TimeTz,
            LogicalType::Timestamp => TypeId::Timestamp,
            LogicalType::TimestampS => TypeId::TimestampS,
            LogicalType::TimestampMs => TypeId::TimestampMs,
            LogicalType::TimestampNs => TypeId::TimestampNs,
            LogicalType::TimestampTz => TypeId::TimestampTz,
            LogicalType::Interval => TypeId::Interval,
            LogicalType::SqlNull => TypeId::SqlNull,
            LogicalType::Any => TypeId::Any,
            LogicalType::Enum { .. } => TypeId::Enum,
            LogicalType::List(_) => TypeId::List,
            LogicalType::Array { .. } => TypeId::Array,
            LogicalType::Struct { .. } => TypeId::Struct,
            LogicalType::Map { .. } => TypeId::Map,
            LogicalType::Union { .. } => TypeId::Union,
        }
    }

    /// Check if this type is numeric (integer, float, or decimal)
    pub fn is_numeric(&self) -> bool {
        self.is_integer()
            || matches!(
                self,
                LogicalType::Float | LogicalType::Double | LogicalType::Decimal { .. }
            )
    }

    /// Check if this type is an integer (signed or unsigned)
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            LogicalType::TinyInt
                | LogicalType::SmallInt
                | LogicalType::Integer
                | LogicalType::BigInt
                | LogicalType::HugeInt
                | LogicalType::UTinyInt
                | LogicalType::USmallInt
                | LogicalType::UInteger
                | LogicalType::UBigInt
                | LogicalType::UHugeInt
                | LogicalType::VarInt
        )
    }

    pub fn is_nested(&self) -> bool {
        matches!(
            self,
            LogicalType::List(_)
                | LogicalType::Array { .. }
                | LogicalType::Struct { .. }
                | LogicalType::Map { .. }
                | LogicalType::Union { .. }
        )
    }

    /// Internal id an enum of this cardinality stores its indices at.
    ///
    /// Up to 256 labels fit one byte, up to 65536 two, anything larger four.
    pub fn enum_internal_id(&self) -> Option<TypeId> {
        match self {
            LogicalType::Enum { labels } => Some(if labels.len() <= 1 << 8 {
                TypeId::UTinyInt
            } else if labels.len() <= 1 << 16 {
                TypeId::USmallInt
            } else {
                TypeId::UInteger
            }),
            _ => None,
        }
    }

    /// Internal id a decimal of this width stores its magnitude at.
    pub fn decimal_internal_id(&self) -> Option<TypeId> {
        match self {
            LogicalType::Decimal { width, .. } => Some(match width {
                0..=4 => TypeId::SmallInt,
                5..=9 => TypeId::Integer,
                10..=18 => TypeId::BigInt,
                _ => TypeId::HugeInt,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalType::Boolean => write!(f, "BOOLEAN"),
            LogicalType::TinyInt => write!(f, "TINYINT"),
            LogicalType::SmallInt => write!(f, "SMALLINT"),
            LogicalType::Integer => write!(f, "INTEGER"),
            LogicalType::BigInt => write!(f, "BIGINT"),
            LogicalType::HugeInt => write!(f, "HUGEINT"),
            LogicalType::UTinyInt => write!(f, "UTINYINT"),
            LogicalType::USmallInt => write!(f, "USMALLINT"),
            LogicalType::UInteger => write!(f, "UINTEGER"),
            LogicalType::UBigInt => write!(f, "UBIGINT"),
            LogicalType::UHugeInt => write!(f, "UHUGEINT"),
            LogicalType::VarInt => write!(f, "VARINT"),
            LogicalType::Float => write!(f, "FLOAT"),
            LogicalType::Double => write!(f, "DOUBLE"),
            LogicalType::Decimal { width, scale } => write!(f, "DECIMAL({width},{scale})"),
            LogicalType::Varchar => write!(f, "VARCHAR"),
            LogicalType::Blob => write!(f, "BLOB"),
            LogicalType::Bit => write!(f, "BIT"),
            LogicalType::Uuid => write!(f, "UUID"),
            LogicalType::Date => write!(f, "DATE"),
            LogicalType::Time => write!(f, "TIME"),
            LogicalType::TimeTz => write!(f, "TIME WITH TIME ZONE"),
            LogicalType::Timestamp => write!(f, "TIMESTAMP"),
            LogicalType::TimestampS => write!(f, "TIMESTAMP_S"),
            LogicalType::TimestampMs => write!(f, "TIMESTAMP_MS"),
            LogicalType::TimestampNs => write!(f, "TIMESTAMP_NS"),
            LogicalType::TimestampTz => write!(f, "TIMESTAMP WITH TIME ZONE"),
            LogicalType::Interval => write!(f, "INTERVAL"),
            LogicalType::SqlNull => write!(f, "SQLNULL"),
            LogicalType::Any => write!(f, "ANY"),
            LogicalType::Enum { labels } => {
                write!(f, "ENUM(")?;
                for (i, label) in labels.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{label}'")?;
                }
                write!(f, ")")
            }
            LogicalType::List(element) => write!(f, "{element}[]"),
            LogicalType::Array { element, size } => write!(f, "{element}[{size}]"),
            LogicalType::Struct { fields } => {
                write!(f, "STRUCT(")?;
                for (i, (name, ty)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{name}\" {ty}")?;
                }
                write!(f, ")")
            }
            LogicalType::Map { key, value } => write!(f, "MAP({key}, {value})"),
            LogicalType::Union { members } => {
                write!(f, "UNION(")?;
                for (i, (tag, ty)) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{tag}\" {ty}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(LogicalType::Boolean.to_string(), "BOOLEAN");
        assert_eq!(LogicalType::TinyInt.to_string(), "TINYINT");
        assert_eq!(LogicalType::SmallInt.to_string(), "SMALLINT");
        assert_eq!(LogicalType::Integer.to_string(), "INTEGER");
        assert_eq!(LogicalType::BigInt.to_string(), "BIGINT");
        assert_eq!(LogicalType::HugeInt.to_string(), "HUGEINT");
        assert_eq!(LogicalType::UHugeInt.to_string(), "UHUGEINT");
        assert_eq!(LogicalType::VarInt.to_string(), "VARINT");
        assert_eq!(LogicalType::TimeTz.to_string(), "TIME WITH TIME ZONE");
        assert_eq!(LogicalType::TimestampTz.to_string(), "TIMESTAMP WITH TIME ZONE");
        assert_eq!(LogicalType::TimestampS.to_string(), "TIMESTAMP_S");
        assert_eq!(LogicalType::TimestampMs.to_string(), "TIMESTAMP_MS");
        assert_eq!(LogicalType::TimestampNs.to_string(), "TIMESTAMP_NS");
        assert_eq!(LogicalType::SqlNull.to_string(), "SQLNULL");
        assert_eq!(LogicalType::Any.to_string(), "ANY");
    }

    #[test]
    fn test_parameterized_rendering() {
        assert_eq!(
            LogicalType::decimal(17, 5).unwrap().to_string(),
            "DECIMAL(17,5)"
        );
        assert_eq!(
            LogicalType::enumeration(["fly", "swim", "walk"])
                .unwrap()
                .to_string(),
            "ENUM('fly', 'swim', 'walk')"
        );
        assert_eq!(
            LogicalType::list(LogicalType::Integer).to_string(),
            "INTEGER[]"
        );
        assert_eq!(
            LogicalType::array(LogicalType::Integer, 3).to_string(),
            "INTEGER[3]"
        );
        assert_eq!(
            LogicalType::struct_type([
                ("id", LogicalType::Varchar),
                ("ts", LogicalType::Timestamp),
            ])
            .unwrap()
            .to_string(),
            "STRUCT(\"id\" VARCHAR, \"ts\" TIMESTAMP)"
        );
        assert_eq!(
            LogicalType::map(LogicalType::Integer, LogicalType::Varchar).to_string(),
            "MAP(INTEGER, VARCHAR)"
        );
        assert_eq!(
            LogicalType::union_type([
                ("str", LogicalType::Varchar),
                ("num", LogicalType::Integer),
            ])
            .unwrap()
            .to_string(),
            "UNION(\"str\" VARCHAR, \"num\" INTEGER)"
        );
    }

    #[test]
    fn test_construction_validation() {
        assert_eq!(
            LogicalType::decimal(0, 0),
            Err(Error::InvalidDecimal { width: 0, scale: 0 })
        );
        assert_eq!(
            LogicalType::decimal(39, 0),
            Err(Error::InvalidDecimal { width: 39, scale: 0 })
        );
        assert_eq!(
            LogicalType::decimal(10, 11),
            Err(Error::InvalidDecimal { width: 10, scale: 11 })
        );
        assert_eq!(
            LogicalType::enumeration(Vec::<String>::new()),
            Err(Error::EmptyEnum)
        );
        assert_eq!(
            LogicalType::enumeration(["a", "b", "a"]),
            Err(Error::DuplicateEnumLabel("a".into()))
        );
        assert_eq!(
            LogicalType::struct_type(Vec::<(String, LogicalType)>::new()),
            Err(Error::EmptyStruct)
        );
        assert_eq!(
            LogicalType::union_type([
                ("t", LogicalType::Integer),
                ("t", LogicalType::Varchar),
            ]),
            Err(Error::DuplicateTag("t".into()))
        );
    }

    #[test]
    fn test_union_member_cap() {
        let members = |n: usize| (0..n).map(|i| (format!("t{i}"), LogicalType::Integer));
        assert!(LogicalType::union_type(members(256)).is_ok());
        assert_eq!(
            LogicalType::union_type(members(257)),
            Err(Error::UnionTooLarge(257))
        );
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(
            LogicalType::decimal(9, 4).unwrap(),
            LogicalType::decimal(9, 4).unwrap()
        );
        assert_ne!(
            LogicalType::decimal(9, 4).unwrap(),
            LogicalType::decimal(9, 3).unwrap()
        );
        assert_eq!(
            LogicalType::list(LogicalType::Integer),
            LogicalType::list(LogicalType::Integer)
        );
        assert_ne!(
            LogicalType::list(LogicalType::Integer),
            LogicalType::array(LogicalType::Integer, 3)
        );
    }

    #[test]
    fn test_internal_widths() {
        let small = LogicalType::enumeration(["a", "b"]).unwrap();
        let medium = LogicalType::enumeration((0..300).map(|i| format!("enum_{i}"))).unwrap();
        let large = LogicalType::enumeration((0..70000).map(|i| format!("enum_{i}"))).unwrap();
        assert_eq!(small.enum_internal_id(), Some(TypeId::UTinyInt));
        assert_eq!(medium.enum_internal_id(), Some(TypeId::USmallInt));
        assert_eq!(large.enum_internal_id(), Some(TypeId::UInteger));

        assert_eq!(
            LogicalType::decimal(4, 1).unwrap().decimal_internal_id(),
            Some(TypeId::SmallInt)
        );
        assert_eq!(
            LogicalType::decimal(9, 4).unwrap().decimal_internal_id(),
            Some(TypeId::Integer)
        );
        assert_eq!(
            LogicalType::decimal(18, 6).unwrap().decimal_internal_id(),
            Some(TypeId::BigInt)
        );
        assert_eq!(
            LogicalType::decimal(38, 10).unwrap().decimal_internal_id(),
            Some(TypeId::HugeInt)
        );
    }
}
