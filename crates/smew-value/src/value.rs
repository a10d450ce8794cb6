//! Typed values mirroring the logical type model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bit::BitValue;
use crate::date::DateValue;
use crate::decimal::DecimalValue;
use crate::error::{Error, Result};
use crate::interval::IntervalValue;
use crate::time::{TimeTzValue, TimeValue};
use crate::timestamp::{
    TimestampMillisecondsValue, TimestampNanosecondsValue, TimestampSecondsValue,
    TimestampTzValue, TimestampValue,
};
use crate::types::LogicalType;
use crate::uuid_value::UuidValue;
use crate::varint::VarIntValue;

/// An enum value: the stored index plus its dictionary label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub index: u32,
    pub label: String,
}

/// A list value. The element type is carried so empty lists stay typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListValue {
    pub element: LogicalType,
    pub items: Vec<Value>,
}

/// A fixed-length array value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    pub element: LogicalType,
    pub items: Vec<Value>,
}

/// A struct value: ordered field name/value pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructValue {
    pub entries: Vec<(String, Value)>,
}

/// A map value with fixed key and value types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    pub key: LogicalType,
    pub value: LogicalType,
    pub entries: Vec<(Value, Value)>,
}

/// A union value: the selected tag and its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnionValue {
    pub tag: String,
    pub value: Box<Value>,
}

/// The closed set of typed values.
///
/// Values are plain immutable data: extracting one from a vector copies it
/// out, and nothing aliases back into engine buffers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Boolean(bool),
    TinyInt(i8),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    HugeInt(i128),
    UTinyInt(u8),
    USmallInt(u16),
    UInteger(u32),
    UBigInt(u64),
    UHugeInt(u128),
    VarInt(VarIntValue),
    Float(f32),
    Double(f64),
    Decimal(DecimalValue),
    Varchar(String),
    Blob(Vec<u8>),
    Bit(BitValue),
    Uuid(UuidValue),
    Date(DateValue),
    Time(TimeValue),
    TimeTz(TimeTzValue),
    Timestamp(TimestampValue),
    TimestampS(TimestampSecondsValue),
    TimestampMs(TimestampMillisecondsValue),
    TimestampNs(TimestampNanosecondsValue),
    TimestampTz(TimestampTzValue),
    Interval(IntervalValue),
    Enum(EnumValue),
    List(ListValue),
    Array(ArrayValue),
    Struct(StructValue),
    Map(MapValue),
    Union(UnionValue),
}

impl Value {
    /// A list value over a concrete element type, each item validated.
    pub fn list(element: LogicalType, items: Vec<Value>) -> Result<Value> {
        if element == LogicalType::Any {
            return Err(Error::AnyNotConcrete("LIST"));
        }
        for item in &items {
            item.check_type(&element)?;
        }
        Ok(Value::List(ListValue { element, items }))
    }

    /// A fixed-length array value; the array's length is the item count.
    pub fn array(element: LogicalType, items: Vec<Value>) -> Result<Value> {
        if element == LogicalType::Any {
            return Err(Error::AnyNotConcrete("ARRAY"));
        }
        for item in &items {
            item.check_type(&element)?;
        }
        Ok(Value::Array(ArrayValue { element, items }))
    }

    /// A struct value over a declared struct type, one value per field.
    pub fn struct_value(ty: &LogicalType, values: Vec<Value>) -> Result<Value> {
        let LogicalType::Struct { fields } = ty else {
            return Err(Error::UnexpectedType {
                expected: "STRUCT",
                found: ty.to_string(),
            });
        };
        if fields.len() != values.len() {
            return Err(Error::CountMismatch {
                expected: fields.len(),
                found: values.len(),
            });
        }
        let mut entries = Vec::with_capacity(values.len());
        for ((name, field_ty), value) in fields.iter().zip(values) {
            if *field_ty == LogicalType::Any {
                return Err(Error::AnyNotConcrete("STRUCT"));
            }
            value.check_type(field_ty)?;
            entries.push((name.clone(), value));
        }
        Ok(Value::Struct(StructValue { entries }))
    }

    /// A map value with validated key/value entries.
    pub fn map(key: LogicalType, value: LogicalType, entries: Vec<(Value, Value)>) -> Result<Value> {
        if key == LogicalType::Any || value == LogicalType::Any {
            return Err(Error::AnyNotConcrete("MAP"));
        }
        for (k, v) in &entries {
            k.check_type(&key)?;
            v.check_type(&value)?;
        }
        Ok(Value::Map(MapValue {
            key,
            value,
            entries,
        }))
    }

    /// A union value selecting one tagged alternative of a union type.
    pub fn union_value(ty: &LogicalType, tag: &str, value: Value) -> Result<Value> {
        let LogicalType::Union { members } = ty else {
            return Err(Error::UnexpectedType {
                expected: "UNION",
                found: ty.to_string(),
            });
        };
        let member = members
            .iter()
            .find(|(t, _)| t == tag)
            .ok_or_else(|| Error::UnknownUnionTag(tag.to_string()))?;
        value.check_type(&member.1)?;
        Ok(Value::Union(UnionValue {
            tag: tag.to_string(),
            value: Box::new(value),
        }))
    }

    /// An enum value by dictionary index.
    pub fn enum_value(ty: &LogicalType, index: u32) -> Result<Value> {
        let LogicalType::Enum { labels } = ty else {
            return Err(Error::UnexpectedType {
                expected: "ENUM",
                found: ty.to_string(),
            });
        };
        let label = labels
            .get(index as usize)
            .ok_or(Error::InvalidEnumIndex {
                index,
                cardinality: labels.len(),
            })?;
        Ok(Value::Enum(EnumValue {
            index,
            label: label.clone(),
        }))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is any integer type
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Value::TinyInt(_)
                | Value::SmallInt(_)
                | Value::Integer(_)
                | Value::BigInt(_)
                | Value::HugeInt(_)
                | Value::UTinyInt(_)
                | Value::USmallInt(_)
                | Value::UInteger(_)
                | Value::UBigInt(_)
                | Value::UHugeInt(_)
        )
    }

    /// Widen any fixed-width integer to i128, rejecting out-of-range u128.
    pub fn to_i128(&self) -> Result<i128> {
        match self {
            Value::TinyInt(v) => Ok(*v as i128),
            Value::SmallInt(v) => Ok(*v as i128),
            Value::Integer(v) => Ok(*v as i128),
            Value::BigInt(v) => Ok(*v as i128),
            Value::HugeInt(v) => Ok(*v),
            Value::UTinyInt(v) => Ok(*v as i128),
            Value::USmallInt(v) => Ok(*v as i128),
            Value::UInteger(v) => Ok(*v as i128),
            Value::UBigInt(v) => Ok(*v as i128),
            Value::UHugeInt(v) => (*v).try_into().map_err(|_| Error::TypeMismatch {
                expected: "HUGEINT".into(),
                found: format!("UHUGEINT {v}"),
            }),
            other => Err(Error::TypeMismatch {
                expected: "integer".into(),
                found: other.logical_type().to_string(),
            }),
        }
    }

    /// The concrete logical type of this value.
    ///
    /// Best-effort for values that do not carry their full type: a bare
    /// enum reports only its own label, a union only its selected member.
    pub fn logical_type(&self) -> LogicalType {
        match self {
            Value::Null => LogicalType::SqlNull,
            Value::Boolean(_) => LogicalType::Boolean,
            Value::TinyInt(_) => LogicalType::TinyInt,
            Value::SmallInt(_) => LogicalType::SmallInt,
            Value::Integer(_) => LogicalType::Integer,
            Value::BigInt(_) => LogicalType::BigInt,
            Value::HugeInt(_) => LogicalType::HugeInt,
            Value::UTinyInt(_) => LogicalType::UTinyInt,
            Value::USmallInt(_) => LogicalType::USmallInt,
            Value::UInteger(_) => LogicalType::UInteger,
            Value::UBigInt(_) => LogicalType::UBigInt,
            Value::UHugeInt(_) => LogicalType::UHugeInt,
            Value::VarInt(_) => LogicalType::VarInt,
            Value::Float(_) => LogicalType::Float,
            Value::Double(_) => LogicalType::Double,
            Value::Decimal(d) => LogicalType::Decimal {
                width: d.width(),
                scale: d.scale(),
            },
            Value::Varchar(_) => LogicalType::Varchar,
            Value::Blob(_) => LogicalType::Blob,
            Value::Bit(_) => LogicalType::Bit,
            Value::Uuid(_) => LogicalType::Uuid,
            Value::Date(_) => LogicalType::Date,
            Value::Time(_) => LogicalType::Time,
            Value::TimeTz(_) => LogicalType::TimeTz,
            Value::Timestamp(_) => LogicalType::Timestamp,
            Value::TimestampS(_) => LogicalType::TimestampS,
            Value::TimestampMs(_) => LogicalType::TimestampMs,
            Value::TimestampNs(_) => LogicalType::TimestampNs,
            Value::TimestampTz(_) => LogicalType::TimestampTz,
            Value::Interval(_) => LogicalType::Interval,
            Value::Enum(e) => LogicalType::Enum {
                labels: vec![e.label.clone()],
            },
            Value::List(l) => LogicalType::list(l.element.clone()),
            Value::Array(a) => LogicalType::array(a.element.clone(), a.items.len()),
            Value::Struct(s) => LogicalType::Struct {
                fields: s
                    .entries
                    .iter()
                    .map(|(name, value)| (name.clone(), value.logical_type()))
                    .collect(),
            },
            Value::Map(m) => LogicalType::map(m.key.clone(), m.value.clone()),
            Value::Union(u) => LogicalType::Union {
                members: vec![(u.tag.clone(), u.value.logical_type())],
            },
        }
    }

    /// Validate this value against a declared type. NULL matches any type;
    /// ANY matches nothing concrete.
    pub fn check_type(&self, ty: &LogicalType) -> Result<()> {
        if self.matches_type(ty) {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                expected: ty.to_string(),
                found: self.logical_type().to_string(),
            })
        }
    }

    fn matches_type(&self, ty: &LogicalType) -> bool {
        match (self, ty) {
            (Value::Null, _) => true,
            (_, LogicalType::Any) => false,
            (Value::Boolean(_), LogicalType::Boolean) => true,
            (Value::TinyInt(_), LogicalType::TinyInt) => true,
            (Value::SmallInt(_), LogicalType::SmallInt) => true,
            (Value::Integer(_), LogicalType::Integer) => true,
            (Value::BigInt(_), LogicalType::BigInt) => true,
            (Value::HugeInt(_), LogicalType::HugeInt) => true,
            (Value::UTinyInt(_), LogicalType::UTinyInt) => true,
            (Value::USmallInt(_), LogicalType::USmallInt) => true,
            (Value::UInteger(_), LogicalType::UInteger) => true,
            (Value::UBigInt(_), LogicalType::UBigInt) => true,
            (Value::UHugeInt(_), LogicalType::UHugeInt) => true,
            (Value::VarInt(_), LogicalType::VarInt) => true,
            (Value::Float(_), LogicalType::Float) => true,
            (Value::Double(_), LogicalType::Double) => true,
            (Value::Decimal(d), LogicalType::Decimal { width, scale }) => {
                d.width() == *width && d.scale() == *scale
            }
            (Value::Varchar(_), LogicalType::Varchar) => true,
            (Value::Blob(_), LogicalType::Blob) => true,
            (Value::Bit(_), LogicalType::Bit) => true,
            (Value::Uuid(_), LogicalType::Uuid) => true,
            (Value::Date(_), LogicalType::Date) => true,
            (Value::Time(_), LogicalType::Time) => true,
            (Value::TimeTz(_), LogicalType::TimeTz) => true,
            (Value::Timestamp(_), LogicalType::Timestamp) => true,
            (Value::TimestampS(_), LogicalType::TimestampS) => true,
            (Value::TimestampMs(_), LogicalType::TimestampMs) => true,
            (Value::TimestampNs(_), LogicalType::TimestampNs) => true,
            (Value::TimestampTz(_), LogicalType::TimestampTz) => true,
            (Value::Interval(_), LogicalType::Interval) => true,
            (Value::Enum(e), LogicalType::Enum { labels }) => {
                labels.get(e.index as usize) == Some(&e.label)
            }
            (Value::List(l), LogicalType::List(element)) => l.element == **element,
            (Value::Array(a), LogicalType::Array { element, size }) => {
                a.element == **element && a.items.len() == *size
            }
            (Value::Struct(s), LogicalType::Struct { fields }) => {
                s.entries.len() == fields.len()
                    && s.entries.iter().zip(fields).all(|((name, value), (fname, fty))| {
                        name == fname && value.matches_type(fty)
                    })
            }
            (Value::Map(m), LogicalType::Map { key, value }) => {
                m.key == **key && m.value == **value
            }
            (Value::Union(u), LogicalType::Union { members }) => members
                .iter()
                .any(|(tag, mty)| *tag == u.tag && u.value.matches_type(mty)),
            _ => false,
        }
    }
}

/// Render a nested element: strings and labels are quoted inside
/// containers, everything else renders as itself.
fn fmt_element(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Varchar(s) => write!(f, "'{}'", s.replace('\'', "''")),
        Value::Enum(e) => write!(f, "'{}'", e.label),
        other => write!(f, "{other}"),
    }
}

fn fmt_items(items: &[Value], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        fmt_element(item, f)?;
    }
    write!(f, "]")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::TinyInt(v) => write!(f, "{v}"),
            Value::SmallInt(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
            Value::BigInt(v) => write!(f, "{v}"),
            Value::HugeInt(v) => write!(f, "{v}"),
            Value::UTinyInt(v) => write!(f, "{v}"),
            Value::USmallInt(v) => write!(f, "{v}"),
            Value::UInteger(v) => write!(f, "{v}"),
            Value::UBigInt(v) => write!(f, "{v}"),
            Value::UHugeInt(v) => write!(f, "{v}"),
            Value::VarInt(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Decimal(v) => write!(f, "{v}"),
            Value::Varchar(v) => write!(f, "{v}"),
            Value::Blob(bytes) => {
                for &byte in bytes {
                    if (0x20..=0x7e).contains(&byte) && byte != b'\\' {
                        write!(f, "{}", byte as char)?;
                    } else {
                        write!(f, "\\x{byte:02X}")?;
                    }
                }
                Ok(())
            }
            Value::Bit(v) => write!(f, "{v}"),
            Value::Uuid(v) => write!(f, "{v}"),
            Value::Date(v) => write!(f, "{v}"),
            Value::Time(v) => write!(f, "{v}"),
            Value::TimeTz(v) => write!(f, "{v}"),
            Value::Timestamp(v) => write!(f, "{v}"),
            Value::TimestampS(v) => write!(f, "{v}"),
            Value::TimestampMs(v) => write!(f, "{v}"),
            Value::TimestampNs(v) => write!(f, "{v}"),
            Value::TimestampTz(v) => write!(f, "{v}"),
            Value::Interval(v) => write!(f, "{v}"),
            Value::Enum(e) => write!(f, "{}", e.label),
            Value::List(l) => fmt_items(&l.items, f),
            Value::Array(a) => fmt_items(&a.items, f),
            Value::Struct(s) => {
                write!(f, "{{")?;
                for (i, (name, value)) in s.entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{name}': ")?;
                    fmt_element(value, f)?;
                }
                write!(f, "}}")
            }
            Value::Map(m) => {
                write!(f, "{{")?;
                for (i, (key, value)) in m.entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    fmt_element(key, f)?;
                    write!(f, "=")?;
                    fmt_element(value, f)?;
                }
                write!(f, "}}")
            }
            Value::Union(u) => fmt_element(&u.value, f),
        }
    }
}
