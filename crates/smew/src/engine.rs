//! In-process execution oracle
//!
//! Queries enter as small logical plans rather than SQL text. The oracle
//! evaluates a plan against its bound parameters and serves the result as
//! a stream of standard-size chunks.

use std::collections::BTreeMap;

use smew_value::{
    BitValue, DateValue, DecimalValue, IntervalValue, LogicalType, TimeTzValue, TimeValue,
    TimestampMillisecondsValue, TimestampNanosecondsValue, TimestampSecondsValue,
    TimestampTzValue, TimestampValue, UuidValue, Value, VarIntValue,
};

use crate::chunk::DataChunk;
use crate::error::{Error, Result};
use crate::result::Column;
use crate::vector::STANDARD_VECTOR_SIZE;

/// A logical query plan.
#[derive(Debug, Clone)]
pub enum Plan {
    /// A single BIGINT column named "range" counting `start..stop`.
    Range { start: i64, stop: i64 },
    /// A literal row set with explicit column types.
    Rows {
        columns: Vec<Column>,
        rows: Vec<Vec<Value>>,
    },
    /// One row echoing the named parameters in order. Column types follow
    /// the bound values; a null bind surfaces as INTEGER.
    Params { names: Vec<String> },
}

impl Plan {
    pub fn parameter_names(&self) -> &[String] {
        match self {
            Plan::Params { names } => names,
            _ => &[],
        }
    }
}

/// Cursor over an executing plan, handing out chunks of at most
/// [`STANDARD_VECTOR_SIZE`] rows.
#[derive(Debug)]
pub(crate) struct ExecCursor {
    columns: Vec<Column>,
    source: CursorSource,
}

#[derive(Debug)]
enum CursorSource {
    Range { next: i64, stop: i64 },
    Rows { rows: Vec<Vec<Value>>, offset: usize },
}

impl ExecCursor {
    /// Bind parameters and begin execution. Every parameter the plan
    /// names must have a bound value.
    pub(crate) fn bind(plan: &Plan, binds: &BTreeMap<String, Value>) -> Result<Self> {
        match plan {
            Plan::Range { start, stop } => Ok(ExecCursor {
                columns: vec![Column::new("range", LogicalType::BigInt)],
                source: CursorSource::Range {
                    next: *start,
                    stop: (*stop).max(*start),
                },
            }),
            Plan::Rows { columns, rows } => Ok(ExecCursor {
                columns: columns.clone(),
                source: CursorSource::Rows {
                    rows: rows.clone(),
                    offset: 0,
                },
            }),
            Plan::Params { names } => {
                let mut columns = Vec::with_capacity(names.len());
                let mut row = Vec::with_capacity(names.len());
                for name in names {
                    let value = binds
                        .get(name)
                        .ok_or_else(|| Error::UnboundParameter(name.clone()))?;
                    let ty = if value.is_null() {
                        LogicalType::Integer
                    } else {
                        value.logical_type()
                    };
                    columns.push(Column::new(name, ty));
                    row.push(value.clone());
                }
                Ok(ExecCursor {
                    columns,
                    source: CursorSource::Rows {
                        rows: vec![row],
                        offset: 0,
                    },
                })
            }
        }
    }

    pub(crate) fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn types(&self) -> Vec<LogicalType> {
        self.columns.iter().map(|c| c.logical_type().clone()).collect()
    }

    /// The next chunk of rows, or `None` once the plan is exhausted.
    pub(crate) fn next_chunk(&mut self) -> Result<Option<DataChunk>> {
        let types = self.types();
        match &mut self.source {
            CursorSource::Range { next, stop } => {
                if *next >= *stop {
                    return Ok(None);
                }
                let count = (*stop - *next).min(STANDARD_VECTOR_SIZE as i64);
                let rows: Vec<Vec<Value>> = (*next..*next + count)
                    .map(|i| vec![Value::BigInt(i)])
                    .collect();
                *next += count;
                Ok(Some(DataChunk::from_rows(&types, &rows)?))
            }
            CursorSource::Rows { rows, offset } => {
                if *offset >= rows.len() {
                    return Ok(None);
                }
                let end = (*offset + STANDARD_VECTOR_SIZE).min(rows.len());
                let chunk = DataChunk::from_rows(&types, &rows[*offset..end])?;
                *offset = end;
                Ok(Some(chunk))
            }
        }
    }
}

struct ProbeBuilder {
    columns: Vec<Column>,
    rows: [Vec<Value>; 3],
}

impl ProbeBuilder {
    fn new() -> Self {
        ProbeBuilder {
            columns: Vec::new(),
            rows: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// Add a column with its extreme values; the third row is always null.
    fn column(&mut self, name: &str, ty: LogicalType, min: Value, max: Value) {
        self.columns.push(Column::new(name, ty));
        self.rows[0].push(min);
        self.rows[1].push(max);
        self.rows[2].push(Value::Null);
    }

    fn finish(self) -> Plan {
        Plan::Rows {
            columns: self.columns,
            rows: self.rows.into(),
        }
    }
}

/// A three-row plan exercising every concrete type: one row of minimum
/// values, one of maximum values, one of nulls.
pub fn all_types_probe() -> Result<Plan> {
    let mut probe = ProbeBuilder::new();

    probe.column(
        "bool",
        LogicalType::Boolean,
        Value::Boolean(false),
        Value::Boolean(true),
    );
    probe.column(
        "tinyint",
        LogicalType::TinyInt,
        Value::TinyInt(i8::MIN),
        Value::TinyInt(i8::MAX),
    );
    probe.column(
        "smallint",
        LogicalType::SmallInt,
        Value::SmallInt(i16::MIN),
        Value::SmallInt(i16::MAX),
    );
    probe.column(
        "int",
        LogicalType::Integer,
        Value::Integer(i32::MIN),
        Value::Integer(i32::MAX),
    );
    probe.column(
        "bigint",
        LogicalType::BigInt,
        Value::BigInt(i64::MIN),
        Value::BigInt(i64::MAX),
    );
    probe.column(
        "hugeint",
        LogicalType::HugeInt,
        Value::HugeInt(i128::MIN),
        Value::HugeInt(i128::MAX),
    );
    probe.column(
        "uhugeint",
        LogicalType::UHugeInt,
        Value::UHugeInt(0),
        Value::UHugeInt(u128::MAX),
    );
    probe.column(
        "utinyint",
        LogicalType::UTinyInt,
        Value::UTinyInt(0),
        Value::UTinyInt(u8::MAX),
    );
    probe.column(
        "usmallint",
        LogicalType::USmallInt,
        Value::USmallInt(0),
        Value::USmallInt(u16::MAX),
    );
    probe.column(
        "uint",
        LogicalType::UInteger,
        Value::UInteger(0),
        Value::UInteger(u32::MAX),
    );
    probe.column(
        "ubigint",
        LogicalType::UBigInt,
        Value::UBigInt(0),
        Value::UBigInt(u64::MAX),
    );
    probe.column(
        "varint",
        LogicalType::VarInt,
        Value::VarInt(VarIntValue::from_i128(i128::MIN)),
        Value::VarInt(VarIntValue::from_i128(i128::MAX)),
    );
    probe.column(
        "date",
        LogicalType::Date,
        Value::Date(DateValue::MIN),
        Value::Date(DateValue::MAX),
    );
    probe.column(
        "time",
        LogicalType::Time,
        Value::Time(TimeValue::MIN),
        Value::Time(TimeValue::MAX),
    );
    probe.column(
        "timestamp",
        LogicalType::Timestamp,
        Value::Timestamp(TimestampValue::MIN),
        Value::Timestamp(TimestampValue::MAX),
    );
    probe.column(
        "timestamp_s",
        LogicalType::TimestampS,
        Value::TimestampS(TimestampSecondsValue::MIN),
        Value::TimestampS(TimestampSecondsValue::MAX),
    );
    probe.column(
        "timestamp_ms",
        LogicalType::TimestampMs,
        Value::TimestampMs(TimestampMillisecondsValue::MIN),
        Value::TimestampMs(TimestampMillisecondsValue::MAX),
    );
    probe.column(
        "timestamp_ns",
        LogicalType::TimestampNs,
        Value::TimestampNs(TimestampNanosecondsValue::MIN),
        Value::TimestampNs(TimestampNanosecondsValue::MAX),
    );
    probe.column(
        "time_tz",
        LogicalType::TimeTz,
        Value::TimeTz(TimeTzValue::MIN),
        Value::TimeTz(TimeTzValue::MAX),
    );
    probe.column(
        "timestamp_tz",
        LogicalType::TimestampTz,
        Value::TimestampTz(TimestampTzValue::MIN),
        Value::TimestampTz(TimestampTzValue::MAX),
    );
    probe.column(
        "float",
        LogicalType::Float,
        Value::Float(f32::MIN),
        Value::Float(f32::MAX),
    );
    probe.column(
        "double",
        LogicalType::Double,
        Value::Double(f64::MIN),
        Value::Double(f64::MAX),
    );
    probe.column(
        "dec_4_1",
        LogicalType::decimal(4, 1)?,
        Value::Decimal(DecimalValue::new(4, 1, -9999)?),
        Value::Decimal(DecimalValue::new(4, 1, 9999)?),
    );
    probe.column(
        "dec_9_4",
        LogicalType::decimal(9, 4)?,
        Value::Decimal(DecimalValue::new(9, 4, -999_999_999)?),
        Value::Decimal(DecimalValue::new(9, 4, 999_999_999)?),
    );
    probe.column(
        "dec_18_6",
        LogicalType::decimal(18, 6)?,
        Value::Decimal(DecimalValue::new(18, 6, -999_999_999_999_999_999)?),
        Value::Decimal(DecimalValue::new(18, 6, 999_999_999_999_999_999)?),
    );
    let dec38_extreme = 10i128.pow(38) - 1;
    probe.column(
        "dec38_10",
        LogicalType::decimal(38, 10)?,
        Value::Decimal(DecimalValue::new(38, 10, -dec38_extreme)?),
        Value::Decimal(DecimalValue::new(38, 10, dec38_extreme)?),
    );
    probe.column(
        "uuid",
        LogicalType::Uuid,
        Value::Uuid(UuidValue::MIN),
        Value::Uuid(UuidValue::MAX),
    );
    probe.column(
        "interval",
        LogicalType::Interval,
        Value::Interval(IntervalValue::default()),
        Value::Interval(IntervalValue::new(999, 999, 999_999_999)),
    );
    probe.column(
        "varchar",
        LogicalType::Varchar,
        Value::Varchar("🦆🦆🦆🦆🦆🦆".into()),
        Value::Varchar("goo\0se".into()),
    );
    probe.column(
        "blob",
        LogicalType::Blob,
        Value::Blob(b"thisisalongblob\x00withnullbytes".to_vec()),
        Value::Blob(b"\x00\x00\x00a".to_vec()),
    );
    probe.column(
        "bit",
        LogicalType::Bit,
        Value::Bit(BitValue::from_bit_string("0010001001011100010101011010111")?),
        Value::Bit(BitValue::from_bit_string("10101")?),
    );

    let small_enum = LogicalType::enumeration(["DUCK_DUCK_ENUM", "GOOSE"])?;
    probe.column(
        "small_enum",
        small_enum.clone(),
        Value::enum_value(&small_enum, 0)?,
        Value::enum_value(&small_enum, 1)?,
    );
    let medium_enum = LogicalType::enumeration((0..300).map(|i| format!("enum_{i}")))?;
    probe.column(
        "medium_enum",
        medium_enum.clone(),
        Value::enum_value(&medium_enum, 0)?,
        Value::enum_value(&medium_enum, 299)?,
    );
    let large_enum = LogicalType::enumeration((0..70_000).map(|i| format!("enum_{i}")))?;
    probe.column(
        "large_enum",
        large_enum.clone(),
        Value::enum_value(&large_enum, 0)?,
        Value::enum_value(&large_enum, 69_999)?,
    );

    probe.column(
        "int_array",
        LogicalType::list(LogicalType::Integer),
        Value::list(LogicalType::Integer, vec![])?,
        Value::list(
            LogicalType::Integer,
            vec![
                Value::Integer(42),
                Value::Integer(999),
                Value::Null,
                Value::Null,
                Value::Integer(-42),
            ],
        )?,
    );
    probe.column(
        "varchar_array",
        LogicalType::list(LogicalType::Varchar),
        Value::list(LogicalType::Varchar, vec![])?,
        Value::list(
            LogicalType::Varchar,
            vec![
                Value::Varchar("🦆🦆🦆🦆🦆🦆".into()),
                Value::Varchar("goose".into()),
                Value::Null,
                Value::Varchar(String::new()),
            ],
        )?,
    );
    let inner_list = LogicalType::list(LogicalType::Integer);
    probe.column(
        "nested_int_array",
        LogicalType::list(inner_list.clone()),
        Value::list(inner_list.clone(), vec![])?,
        Value::list(
            inner_list.clone(),
            vec![
                Value::list(LogicalType::Integer, vec![])?,
                Value::list(
                    LogicalType::Integer,
                    vec![Value::Integer(42), Value::Integer(999), Value::Null],
                )?,
                Value::Null,
            ],
        )?,
    );

    let struct_ty = LogicalType::struct_type([
        ("a", LogicalType::Integer),
        ("b", LogicalType::Varchar),
    ])?;
    probe.column(
        "struct",
        struct_ty.clone(),
        Value::struct_value(&struct_ty, vec![Value::Null, Value::Null])?,
        Value::struct_value(
            &struct_ty,
            vec![Value::Integer(42), Value::Varchar("🦆🦆🦆🦆🦆🦆".into())],
        )?,
    );
    probe.column(
        "map",
        LogicalType::map(LogicalType::Varchar, LogicalType::Varchar),
        Value::map(LogicalType::Varchar, LogicalType::Varchar, vec![])?,
        Value::map(
            LogicalType::Varchar,
            LogicalType::Varchar,
            vec![
                (Value::Varchar("key1".into()), Value::Varchar("🦆🦆🦆🦆🦆🦆".into())),
                (Value::Varchar("key2".into()), Value::Varchar("goose".into())),
            ],
        )?,
    );

    let union_ty = LogicalType::union_type([
        ("name", LogicalType::Varchar),
        ("age", LogicalType::SmallInt),
    ])?;
    probe.column(
        "union",
        union_ty.clone(),
        Value::union_value(&union_ty, "name", Value::Varchar("Frank".into()))?,
        Value::union_value(&union_ty, "age", Value::SmallInt(5))?,
    );

    probe.column(
        "fixed_int_array",
        LogicalType::array(LogicalType::Integer, 3),
        Value::array(
            LogicalType::Integer,
            vec![Value::Null, Value::Integer(2), Value::Integer(3)],
        )?,
        Value::array(
            LogicalType::Integer,
            vec![Value::Integer(4), Value::Integer(5), Value::Integer(6)],
        )?,
    );
    probe.column(
        "fixed_varchar_array",
        LogicalType::array(LogicalType::Varchar, 3),
        Value::array(
            LogicalType::Varchar,
            vec![Value::Varchar("a".into()), Value::Null, Value::Varchar("c".into())],
        )?,
        Value::array(
            LogicalType::Varchar,
            vec![
                Value::Varchar("d".into()),
                Value::Varchar("e".into()),
                Value::Varchar("f".into()),
            ],
        )?,
    );

    Ok(probe.finish())
}
