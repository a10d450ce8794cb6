//! Columnar vectors: validity bitmap, typed data region, nested children

use smew_value::{
    ArrayValue, BitValue, DateValue, DecimalValue, EnumValue, IntervalValue, ListValue,
    LogicalType, MapValue, StructValue, TimeTzValue, TimeValue, TimestampMillisecondsValue,
    TimestampNanosecondsValue, TimestampSecondsValue, TimestampTzValue, TimestampValue,
    UnionValue, UuidValue, Value, VarIntValue,
};

use crate::error::{Error, Result};

/// The engine's standard chunk capacity in rows.
pub const STANDARD_VECTOR_SIZE: usize = 2048;

/// Per-row validity bitmap: bit set means the cell is present.
#[derive(Debug, Default)]
struct Validity {
    bits: Vec<u64>,
    len: usize,
}

impl Validity {
    fn push_invalid(&mut self, n: usize) {
        self.len += n;
        let words = self.len.div_ceil(64);
        self.bits.resize(words, 0);
    }

    fn set(&mut self, index: usize, valid: bool) {
        let (word, bit) = (index / 64, index % 64);
        if valid {
            self.bits[word] |= 1 << bit;
        } else {
            self.bits[word] &= !(1 << bit);
        }
    }

    fn get(&self, index: usize) -> bool {
        self.bits[index / 64] & (1 << (index % 64)) != 0
    }
}

/// Variable-width storage: a shared byte region plus a per-row
/// (offset, length) table.
#[derive(Debug, Default)]
struct VarlenData {
    bytes: Vec<u8>,
    entries: Vec<(u64, u64)>,
}

impl VarlenData {
    fn set(&mut self, row: usize, payload: &[u8]) {
        let offset = self.bytes.len() as u64;
        self.bytes.extend_from_slice(payload);
        self.entries[row] = (offset, payload.len() as u64);
    }

    fn get(&self, row: usize) -> &[u8] {
        let (offset, len) = self.entries[row];
        &self.bytes[offset as usize..(offset + len) as usize]
    }
}

/// Enum indices at the width implied by dictionary cardinality.
#[derive(Debug)]
enum EnumIndices {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl EnumIndices {
    fn for_cardinality(cardinality: usize) -> Self {
        if cardinality <= 1 << 8 {
            EnumIndices::U8(Vec::new())
        } else if cardinality <= 1 << 16 {
            EnumIndices::U16(Vec::new())
        } else {
            EnumIndices::U32(Vec::new())
        }
    }

    fn grow(&mut self, n: usize) {
        match self {
            EnumIndices::U8(v) => v.resize(v.len() + n, 0),
            EnumIndices::U16(v) => v.resize(v.len() + n, 0),
            EnumIndices::U32(v) => v.resize(v.len() + n, 0),
        }
    }

    fn set(&mut self, row: usize, index: u32) {
        match self {
            EnumIndices::U8(v) => v[row] = index as u8,
            EnumIndices::U16(v) => v[row] = index as u16,
            EnumIndices::U32(v) => v[row] = index,
        }
    }

    fn get(&self, row: usize) -> u32 {
        match self {
            EnumIndices::U8(v) => v[row] as u32,
            EnumIndices::U16(v) => v[row] as u32,
            EnumIndices::U32(v) => v[row],
        }
    }
}

#[derive(Debug)]
enum VectorData {
    Boolean(Vec<bool>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Int128(Vec<i128>),
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
    UInt128(Vec<u128>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Interval(Vec<IntervalValue>),
    Varlen(VarlenData),
    Enum(EnumIndices),
    /// SQLNULL vectors carry no data region.
    Null,
    List {
        entries: Vec<(u64, u64)>,
        child: Box<Vector>,
    },
    Array {
        child: Box<Vector>,
    },
    Struct {
        children: Vec<Vector>,
    },
    Union {
        selector: Vec<u8>,
        children: Vec<Vector>,
    },
}

/// One materialized column of up to a chunk's worth of rows.
///
/// A vector exclusively owns its children and, for enums, its dictionary
/// (carried by its type descriptor). Reading a cell copies the value out;
/// nothing aliases the underlying buffers.
#[derive(Debug)]
pub struct Vector {
    ty: LogicalType,
    validity: Validity,
    data: VectorData,
}

impl Vector {
    /// An empty vector of the given type. ANY is a placeholder type and
    /// cannot carry data.
    pub(crate) fn new(ty: LogicalType) -> Result<Self> {
        let data = Self::new_data(&ty)?;
        Ok(Vector {
            ty,
            validity: Validity::default(),
            data,
        })
    }

    /// A vector of `rows` cells, all initially null.
    pub(crate) fn with_rows(ty: LogicalType, rows: usize) -> Result<Self> {
        let mut vector = Self::new(ty)?;
        vector.grow(rows);
        Ok(vector)
    }

    fn new_data(ty: &LogicalType) -> Result<VectorData> {
        Ok(match ty {
            LogicalType::Any => return Err(Error::AnyVector),
            LogicalType::SqlNull => VectorData::Null,
            LogicalType::Boolean => VectorData::Boolean(Vec::new()),
            LogicalType::TinyInt => VectorData::Int8(Vec::new()),
            LogicalType::SmallInt => VectorData::Int16(Vec::new()),
            LogicalType::Integer | LogicalType::Date => VectorData::Int32(Vec::new()),
            LogicalType::BigInt
            | LogicalType::Time
            | LogicalType::Timestamp
            | LogicalType::TimestampS
            | LogicalType::TimestampMs
            | LogicalType::TimestampNs
            | LogicalType::TimestampTz => VectorData::Int64(Vec::new()),
            LogicalType::HugeInt | LogicalType::Uuid => VectorData::Int128(Vec::new()),
            LogicalType::UTinyInt => VectorData::UInt8(Vec::new()),
            LogicalType::USmallInt => VectorData::UInt16(Vec::new()),
            LogicalType::UInteger => VectorData::UInt32(Vec::new()),
            LogicalType::UBigInt | LogicalType::TimeTz => VectorData::UInt64(Vec::new()),
            LogicalType::UHugeInt => VectorData::UInt128(Vec::new()),
            LogicalType::Float => VectorData::Float32(Vec::new()),
            LogicalType::Double => VectorData::Float64(Vec::new()),
            LogicalType::Interval => VectorData::Interval(Vec::new()),
            LogicalType::Varchar | LogicalType::Blob | LogicalType::Bit | LogicalType::VarInt => {
                VectorData::Varlen(VarlenData::default())
            }
            LogicalType::Decimal { width, .. } => match width {
                0..=4 => VectorData::Int16(Vec::new()),
                5..=9 => VectorData::Int32(Vec::new()),
                10..=18 => VectorData::Int64(Vec::new()),
                _ => VectorData::Int128(Vec::new()),
            },
            LogicalType::Enum { labels } => {
                VectorData::Enum(EnumIndices::for_cardinality(labels.len()))
            }
            LogicalType::List(element) => VectorData::List {
                entries: Vec::new(),
                child: Box::new(Vector::new((**element).clone())?),
            },
            LogicalType::Map { key, value } => {
                let entry_ty = LogicalType::Struct {
                    fields: vec![
                        ("key".to_string(), (**key).clone()),
                        ("value".to_string(), (**value).clone()),
                    ],
                };
                VectorData::List {
                    entries: Vec::new(),
                    child: Box::new(Vector::new(entry_ty)?),
                }
            }
            LogicalType::Array { element, .. } => VectorData::Array {
                child: Box::new(Vector::new((**element).clone())?),
            },
            LogicalType::Struct { fields } => VectorData::Struct {
                children: fields
                    .iter()
                    .map(|(_, ty)| Vector::new(ty.clone()))
                    .collect::<Result<_>>()?,
            },
            LogicalType::Union { members } => VectorData::Union {
                selector: Vec::new(),
                children: members
                    .iter()
                    .map(|(_, ty)| Vector::new(ty.clone()))
                    .collect::<Result<_>>()?,
            },
        })
    }

    /// Append `n` null rows.
    pub(crate) fn grow(&mut self, n: usize) {
        self.validity.push_invalid(n);
        match &mut self.data {
            VectorData::Boolean(v) => v.resize(v.len() + n, false),
            VectorData::Int8(v) => v.resize(v.len() + n, 0),
            VectorData::Int16(v) => v.resize(v.len() + n, 0),
            VectorData::Int32(v) => v.resize(v.len() + n, 0),
            VectorData::Int64(v) => v.resize(v.len() + n, 0),
            VectorData::Int128(v) => v.resize(v.len() + n, 0),
            VectorData::UInt8(v) => v.resize(v.len() + n, 0),
            VectorData::UInt16(v) => v.resize(v.len() + n, 0),
            VectorData::UInt32(v) => v.resize(v.len() + n, 0),
            VectorData::UInt64(v) => v.resize(v.len() + n, 0),
            VectorData::UInt128(v) => v.resize(v.len() + n, 0),
            VectorData::Float32(v) => v.resize(v.len() + n, 0.0),
            VectorData::Float64(v) => v.resize(v.len() + n, 0.0),
            VectorData::Interval(v) => v.resize(v.len() + n, IntervalValue::default()),
            VectorData::Varlen(v) => v.entries.resize(v.entries.len() + n, (0, 0)),
            VectorData::Enum(v) => v.grow(n),
            VectorData::Null => {}
            VectorData::List { entries, .. } => entries.resize(entries.len() + n, (0, 0)),
            VectorData::Array { child } => {
                let size = match &self.ty {
                    LogicalType::Array { size, .. } => *size,
                    _ => 0,
                };
                child.grow(n * size);
            }
            VectorData::Struct { children } => {
                for child in children {
                    child.grow(n);
                }
            }
            VectorData::Union { selector, children } => {
                selector.resize(selector.len() + n, 0);
                for child in children {
                    child.grow(n);
                }
            }
        }
    }

    pub fn logical_type(&self) -> &LogicalType {
        &self.ty
    }

    /// Number of rows in this vector.
    pub fn len(&self) -> usize {
        self.validity.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the cell at `row` holds a value.
    pub fn is_valid(&self, row: usize) -> Result<bool> {
        self.check_row(row)?;
        Ok(self.validity.get(row))
    }

    /// The dictionary backing an enum vector.
    pub fn dictionary(&self) -> Option<&[String]> {
        match &self.ty {
            LogicalType::Enum { labels } => Some(labels),
            _ => None,
        }
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.len() {
            return Err(Error::RowOutOfBounds {
                index: row,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Read the cell at `row` as an independent value copy.
    pub fn value(&self, row: usize) -> Result<Value> {
        self.check_row(row)?;
        if !self.validity.get(row) {
            return Ok(Value::Null);
        }
        Ok(match (&self.ty, &self.data) {
            (LogicalType::Boolean, VectorData::Boolean(v)) => Value::Boolean(v[row]),
            (LogicalType::TinyInt, VectorData::Int8(v)) => Value::TinyInt(v[row]),
            (LogicalType::SmallInt, VectorData::Int16(v)) => Value::SmallInt(v[row]),
            (LogicalType::Integer, VectorData::Int32(v)) => Value::Integer(v[row]),
            (LogicalType::BigInt, VectorData::Int64(v)) => Value::BigInt(v[row]),
            (LogicalType::HugeInt, VectorData::Int128(v)) => Value::HugeInt(v[row]),
            (LogicalType::UTinyInt, VectorData::UInt8(v)) => Value::UTinyInt(v[row]),
            (LogicalType::USmallInt, VectorData::UInt16(v)) => Value::USmallInt(v[row]),
            (LogicalType::UInteger, VectorData::UInt32(v)) => Value::UInteger(v[row]),
            (LogicalType::UBigInt, VectorData::UInt64(v)) => Value::UBigInt(v[row]),
            (LogicalType::UHugeInt, VectorData::UInt128(v)) => Value::UHugeInt(v[row]),
            (LogicalType::Float, VectorData::Float32(v)) => Value::Float(v[row]),
            (LogicalType::Double, VectorData::Float64(v)) => Value::Double(v[row]),
            (LogicalType::Date, VectorData::Int32(v)) => Value::Date(DateValue::new(v[row])),
            (LogicalType::Time, VectorData::Int64(v)) => Value::Time(TimeValue::new(v[row])),
            (LogicalType::TimeTz, VectorData::UInt64(v)) => {
                Value::TimeTz(TimeTzValue::from_bits(v[row]))
            }
            (LogicalType::Timestamp, VectorData::Int64(v)) => {
                Value::Timestamp(TimestampValue::new(v[row]))
            }
            (LogicalType::TimestampS, VectorData::Int64(v)) => {
                Value::TimestampS(TimestampSecondsValue::new(v[row]))
            }
            (LogicalType::TimestampMs, VectorData::Int64(v)) => {
                Value::TimestampMs(TimestampMillisecondsValue::new(v[row]))
            }
            (LogicalType::TimestampNs, VectorData::Int64(v)) => {
                Value::TimestampNs(TimestampNanosecondsValue::new(v[row]))
            }
            (LogicalType::TimestampTz, VectorData::Int64(v)) => {
                Value::TimestampTz(TimestampTzValue::new(v[row]))
            }
            (LogicalType::Interval, VectorData::Interval(v)) => Value::Interval(v[row]),
            (LogicalType::Uuid, VectorData::Int128(v)) => {
                Value::Uuid(UuidValue::from_hugeint(v[row]))
            }
            (LogicalType::Decimal { width, scale }, data) => {
                let magnitude = match data {
                    VectorData::Int16(v) => v[row] as i128,
                    VectorData::Int32(v) => v[row] as i128,
                    VectorData::Int64(v) => v[row] as i128,
                    VectorData::Int128(v) => v[row],
                    _ => unreachable!("decimal vector data does not match its width"),
                };
                Value::Decimal(DecimalValue::new(*width, *scale, magnitude)?)
            }
            (LogicalType::Varchar, VectorData::Varlen(v)) => {
                Value::Varchar(String::from_utf8_lossy(v.get(row)).into_owned())
            }
            (LogicalType::Blob, VectorData::Varlen(v)) => Value::Blob(v.get(row).to_vec()),
            (LogicalType::Bit, VectorData::Varlen(v)) => {
                Value::Bit(BitValue::from_padded_bytes(v.get(row))?)
            }
            (LogicalType::VarInt, VectorData::Varlen(v)) => {
                let payload = v.get(row);
                let (&sign, magnitude) = payload
                    .split_first()
                    .unwrap_or((&1, &[]));
                Value::VarInt(VarIntValue::from_parts(sign == 0, magnitude.to_vec()))
            }
            (LogicalType::Enum { labels }, VectorData::Enum(indices)) => {
                let index = indices.get(row);
                let label = labels
                    .get(index as usize)
                    .ok_or(smew_value::Error::InvalidEnumIndex {
                        index,
                        cardinality: labels.len(),
                    })?
                    .clone();
                Value::Enum(EnumValue { index, label })
            }
            (LogicalType::List(element), VectorData::List { entries, child }) => {
                let (offset, len) = entries[row];
                let mut items = Vec::with_capacity(len as usize);
                for i in 0..len {
                    items.push(child.value((offset + i) as usize)?);
                }
                Value::List(ListValue {
                    element: (**element).clone(),
                    items,
                })
            }
            (LogicalType::Map { key, value }, VectorData::List { entries, child }) => {
                let (offset, len) = entries[row];
                let mut pairs = Vec::with_capacity(len as usize);
                for i in 0..len {
                    match child.value((offset + i) as usize)? {
                        Value::Struct(entry) => {
                            let mut fields = entry.entries.into_iter();
                            let k = fields.next().map(|(_, v)| v).unwrap_or(Value::Null);
                            let v = fields.next().map(|(_, v)| v).unwrap_or(Value::Null);
                            pairs.push((k, v));
                        }
                        Value::Null => pairs.push((Value::Null, Value::Null)),
                        _ => unreachable!("map child is a struct vector"),
                    }
                }
                Value::Map(MapValue {
                    key: (**key).clone(),
                    value: (**value).clone(),
                    entries: pairs,
                })
            }
            (LogicalType::Array { element, size }, VectorData::Array { child }) => {
                let base = row * size;
                let mut items = Vec::with_capacity(*size);
                for i in 0..*size {
                    items.push(child.value(base + i)?);
                }
                Value::Array(ArrayValue {
                    element: (**element).clone(),
                    items,
                })
            }
            (LogicalType::Struct { fields }, VectorData::Struct { children }) => {
                let mut entries = Vec::with_capacity(fields.len());
                for ((name, _), child) in fields.iter().zip(children) {
                    entries.push((name.clone(), child.value(row)?));
                }
                Value::Struct(StructValue { entries })
            }
            (LogicalType::Union { members }, VectorData::Union { selector, children }) => {
                let index = selector[row] as usize;
                let (tag, _) = &members[index];
                Value::Union(UnionValue {
                    tag: tag.clone(),
                    value: Box::new(children[index].value(row)?),
                })
            }
            _ => unreachable!("vector data does not match its type"),
        })
    }

    /// Write a value into the cell at `row`. Only meaningful for vectors
    /// under construction; the value is validated against the vector type.
    pub fn set_value(&mut self, row: usize, value: &Value) -> Result<()> {
        self.check_row(row)?;
        if value.is_null() {
            self.validity.set(row, false);
            return Ok(());
        }
        value.check_type(&self.ty)?;
        match (&mut self.data, value) {
            (VectorData::Boolean(v), Value::Boolean(b)) => v[row] = *b,
            (VectorData::Int8(v), Value::TinyInt(i)) => v[row] = *i,
            (VectorData::Int16(v), Value::SmallInt(i)) => v[row] = *i,
            (VectorData::Int32(v), Value::Integer(i)) => v[row] = *i,
            (VectorData::Int64(v), Value::BigInt(i)) => v[row] = *i,
            (VectorData::Int128(v), Value::HugeInt(i)) => v[row] = *i,
            (VectorData::UInt8(v), Value::UTinyInt(i)) => v[row] = *i,
            (VectorData::UInt16(v), Value::USmallInt(i)) => v[row] = *i,
            (VectorData::UInt32(v), Value::UInteger(i)) => v[row] = *i,
            (VectorData::UInt64(v), Value::UBigInt(i)) => v[row] = *i,
            (VectorData::UInt128(v), Value::UHugeInt(i)) => v[row] = *i,
            (VectorData::Float32(v), Value::Float(x)) => v[row] = *x,
            (VectorData::Float64(v), Value::Double(x)) => v[row] = *x,
            (VectorData::Int32(v), Value::Date(d)) => v[row] = d.days,
            (VectorData::Int64(v), Value::Time(t)) => v[row] = t.micros,
            (VectorData::UInt64(v), Value::TimeTz(t)) => v[row] = t.bits(),
            (VectorData::Int64(v), Value::Timestamp(t)) => v[row] = t.micros,
            (VectorData::Int64(v), Value::TimestampS(t)) => v[row] = t.seconds,
            (VectorData::Int64(v), Value::TimestampMs(t)) => v[row] = t.millis,
            (VectorData::Int64(v), Value::TimestampNs(t)) => v[row] = t.nanos,
            (VectorData::Int64(v), Value::TimestampTz(t)) => v[row] = t.micros,
            (VectorData::Interval(v), Value::Interval(i)) => v[row] = *i,
            (VectorData::Int128(v), Value::Uuid(u)) => v[row] = u.to_hugeint(),
            (VectorData::Int16(v), Value::Decimal(d)) => v[row] = d.value() as i16,
            (VectorData::Int32(v), Value::Decimal(d)) => v[row] = d.value() as i32,
            (VectorData::Int64(v), Value::Decimal(d)) => v[row] = d.value() as i64,
            (VectorData::Int128(v), Value::Decimal(d)) => v[row] = d.value(),
            (VectorData::Varlen(v), Value::Varchar(s)) => v.set(row, s.as_bytes()),
            (VectorData::Varlen(v), Value::Blob(b)) => v.set(row, b),
            (VectorData::Varlen(v), Value::Bit(b)) => v.set(row, &b.to_padded_bytes()),
            (VectorData::Varlen(v), Value::VarInt(i)) => {
                let mut payload = Vec::with_capacity(i.magnitude().len() + 1);
                payload.push(if i.is_negative() { 0 } else { 1 });
                payload.extend_from_slice(i.magnitude());
                v.set(row, &payload);
            }
            (VectorData::Enum(indices), Value::Enum(e)) => indices.set(row, e.index),
            (VectorData::List { entries, child }, Value::List(l)) => {
                let offset = child.len() as u64;
                for item in &l.items {
                    child.push_value(item)?;
                }
                entries[row] = (offset, l.items.len() as u64);
            }
            (VectorData::List { entries, child }, Value::Map(m)) => {
                let offset = child.len() as u64;
                for (k, v) in &m.entries {
                    let entry = Value::Struct(StructValue {
                        entries: vec![
                            ("key".to_string(), k.clone()),
                            ("value".to_string(), v.clone()),
                        ],
                    });
                    child.push_value(&entry)?;
                }
                entries[row] = (offset, m.entries.len() as u64);
            }
            (VectorData::Array { child }, Value::Array(a)) => {
                let size = a.items.len();
                for (i, item) in a.items.iter().enumerate() {
                    child.set_value(row * size + i, item)?;
                }
            }
            (VectorData::Struct { children }, Value::Struct(s)) => {
                for (child, (_, item)) in children.iter_mut().zip(&s.entries) {
                    child.set_value(row, item)?;
                }
            }
            (VectorData::Union { selector, children }, Value::Union(u)) => {
                let index = match &self.ty {
                    LogicalType::Union { members } => members
                        .iter()
                        .position(|(tag, _)| *tag == u.tag)
                        .ok_or_else(|| smew_value::Error::UnknownUnionTag(u.tag.clone()))?,
                    _ => unreachable!("union vector data does not match its type"),
                };
                selector[row] = index as u8;
                children[index].set_value(row, &u.value)?;
            }
            _ => unreachable!("vector data does not match its type"),
        }
        self.validity.set(row, true);
        Ok(())
    }

    /// Append one row holding `value`.
    pub(crate) fn push_value(&mut self, value: &Value) -> Result<()> {
        self.grow(1);
        self.set_value(self.len() - 1, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(ty: LogicalType, values: &[Value]) {
        let mut vector = Vector::with_rows(ty, values.len()).unwrap();
        for (i, value) in values.iter().enumerate() {
            vector.set_value(i, value).unwrap();
        }
        for (i, value) in values.iter().enumerate() {
            assert_eq!(&vector.value(i).unwrap(), value, "row {i}");
        }
    }

    #[test]
    fn test_scalar_round_trips() {
        round_trip(
            LogicalType::Boolean,
            &[Value::Boolean(false), Value::Boolean(true), Value::Null],
        );
        round_trip(
            LogicalType::TinyInt,
            &[Value::TinyInt(i8::MIN), Value::TinyInt(i8::MAX), Value::TinyInt(0)],
        );
        round_trip(
            LogicalType::HugeInt,
            &[Value::HugeInt(i128::MIN), Value::HugeInt(i128::MAX), Value::Null],
        );
        round_trip(
            LogicalType::UHugeInt,
            &[Value::UHugeInt(0), Value::UHugeInt(u128::MAX), Value::Null],
        );
        round_trip(
            LogicalType::Varchar,
            &[
                Value::Varchar("🦆🦆🦆🦆🦆🦆".into()),
                Value::Varchar("goo\0se".into()),
                Value::Varchar(String::new()),
            ],
        );
        round_trip(
            LogicalType::Date,
            &[
                Value::Date(DateValue::MIN),
                Value::Date(DateValue::MAX),
                Value::Date(DateValue::POS_INF),
            ],
        );
        round_trip(
            LogicalType::Uuid,
            &[
                Value::Uuid(UuidValue::MIN),
                Value::Uuid(UuidValue::MAX),
                Value::Uuid(UuidValue(0xf0e1d2c3b4a596870123456789abcdef)),
            ],
        );
    }

    #[test]
    fn test_null_rows_stay_null() {
        let vector = Vector::with_rows(LogicalType::Integer, 3).unwrap();
        for i in 0..3 {
            assert_eq!(vector.value(i).unwrap(), Value::Null);
            assert!(!vector.is_valid(i).unwrap());
        }
    }

    #[test]
    fn test_row_bounds() {
        let vector = Vector::with_rows(LogicalType::Integer, 2).unwrap();
        assert_eq!(
            vector.value(2),
            Err(Error::RowOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_type_mismatch_on_write() {
        let mut vector = Vector::with_rows(LogicalType::Integer, 1).unwrap();
        assert!(vector.set_value(0, &Value::Varchar("x".into())).is_err());
    }

    #[test]
    fn test_list_round_trip() {
        let empty = Value::list(LogicalType::Integer, vec![]).unwrap();
        let with_nulls = Value::list(
            LogicalType::Integer,
            vec![
                Value::Integer(42),
                Value::Integer(999),
                Value::Null,
                Value::Null,
                Value::Integer(-42),
            ],
        )
        .unwrap();
        round_trip(
            LogicalType::list(LogicalType::Integer),
            &[empty, with_nulls, Value::Null],
        );
    }

    #[test]
    fn test_nested_list_round_trip() {
        let inner = LogicalType::list(LogicalType::Integer);
        let some = Value::list(
            inner.clone(),
            vec![
                Value::list(LogicalType::Integer, vec![]).unwrap(),
                Value::list(
                    LogicalType::Integer,
                    vec![Value::Integer(42), Value::Null],
                )
                .unwrap(),
                Value::Null,
            ],
        )
        .unwrap();
        round_trip(LogicalType::list(inner), &[some, Value::Null]);
    }

    #[test]
    fn test_struct_round_trip() {
        let ty = LogicalType::struct_type([
            ("a", LogicalType::Integer),
            ("b", LogicalType::Varchar),
        ])
        .unwrap();
        let all_null = Value::struct_value(&ty, vec![Value::Null, Value::Null]).unwrap();
        let filled =
            Value::struct_value(&ty, vec![Value::Integer(42), Value::Varchar("duck".into())])
                .unwrap();
        round_trip(ty, &[all_null, filled, Value::Null]);
    }

    #[test]
    fn test_array_round_trip() {
        let first = Value::array(
            LogicalType::Integer,
            vec![Value::Null, Value::Integer(2), Value::Integer(3)],
        )
        .unwrap();
        let second = Value::array(
            LogicalType::Integer,
            vec![Value::Integer(4), Value::Integer(5), Value::Integer(6)],
        )
        .unwrap();
        round_trip(
            LogicalType::array(LogicalType::Integer, 3),
            &[first, second, Value::Null],
        );
    }

    #[test]
    fn test_map_round_trip() {
        let ty = LogicalType::map(LogicalType::Varchar, LogicalType::Varchar);
        let empty = Value::map(LogicalType::Varchar, LogicalType::Varchar, vec![]).unwrap();
        let filled = Value::map(
            LogicalType::Varchar,
            LogicalType::Varchar,
            vec![
                (Value::Varchar("key1".into()), Value::Varchar("🦆".into())),
                (Value::Varchar("key2".into()), Value::Varchar("goose".into())),
            ],
        )
        .unwrap();
        round_trip(ty, &[empty, filled, Value::Null]);
    }

    #[test]
    fn test_union_round_trip() {
        let ty = LogicalType::union_type([
            ("name", LogicalType::Varchar),
            ("age", LogicalType::SmallInt),
        ])
        .unwrap();
        let name = Value::union_value(&ty, "name", Value::Varchar("Frank".into())).unwrap();
        let age = Value::union_value(&ty, "age", Value::SmallInt(5)).unwrap();
        round_trip(ty, &[name, age, Value::Null]);
    }

    #[test]
    fn test_enum_round_trip_and_width() {
        let small = LogicalType::enumeration(["DUCK_DUCK_ENUM", "GOOSE"]).unwrap();
        let values = [
            Value::enum_value(&small, 0).unwrap(),
            Value::enum_value(&small, 1).unwrap(),
            Value::Null,
        ];
        round_trip(small, &values);

        let large = LogicalType::enumeration((0..70000).map(|i| format!("enum_{i}"))).unwrap();
        let last = Value::enum_value(&large, 69999).unwrap();
        let mut vector = Vector::with_rows(large, 1).unwrap();
        vector.set_value(0, &last).unwrap();
        assert_eq!(vector.value(0).unwrap(), last);
    }

    #[test]
    fn test_any_vector_rejected() {
        assert_eq!(
            Vector::with_rows(LogicalType::Any, 1).err(),
            Some(Error::AnyVector)
        );
    }
}
