//! Data chunks: fixed-width batches of column vectors

use smew_value::{LogicalType, Value};

use crate::error::{Error, Result};
use crate::vector::Vector;

/// A horizontal slice of a result: one vector per column, all the same
/// row count.
#[derive(Debug)]
pub struct DataChunk {
    columns: Vec<Vector>,
    rows: usize,
}

impl DataChunk {
    /// A chunk with zero rows, used as the end-of-stream sentinel.
    pub(crate) fn empty(types: &[LogicalType]) -> Result<Self> {
        Self::with_rows(types, 0)
    }

    /// A chunk of `rows` all-null rows.
    pub(crate) fn with_rows(types: &[LogicalType], rows: usize) -> Result<Self> {
        let columns = types
            .iter()
            .map(|ty| Vector::with_rows(ty.clone(), rows))
            .collect::<Result<_>>()?;
        Ok(DataChunk { columns, rows })
    }

    /// Build a chunk from row-major values. Every row must match the
    /// column count, and every value its column's type.
    pub(crate) fn from_rows(types: &[LogicalType], rows: &[Vec<Value>]) -> Result<Self> {
        let mut chunk = Self::with_rows(types, rows.len())?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != types.len() {
                return Err(Error::RowArityMismatch {
                    expected: types.len(),
                    found: row.len(),
                });
            }
            for (column, value) in chunk.columns.iter_mut().zip(row) {
                column.set_value(i, value)?;
            }
        }
        Ok(chunk)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows in this chunk.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column(&self, index: usize) -> Result<&Vector> {
        self.columns
            .get(index)
            .ok_or(Error::ColumnOutOfRange(index))
    }

    pub fn column_mut(&mut self, index: usize) -> Result<&mut Vector> {
        self.columns
            .get_mut(index)
            .ok_or(Error::ColumnOutOfRange(index))
    }

    /// Read a single cell.
    pub fn value(&self, column: usize, row: usize) -> Result<Value> {
        self.column(column)?.value(row)
    }

    /// Copy the chunk out as row-major values.
    pub fn to_rows(&self) -> Result<Vec<Vec<Value>>> {
        let mut rows = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let mut values = Vec::with_capacity(self.columns.len());
            for column in &self.columns {
                values.push(column.value(row)?);
            }
            rows.push(values);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_round_trip() {
        let types = [LogicalType::Integer, LogicalType::Varchar];
        let rows = vec![
            vec![Value::Integer(1), Value::Varchar("one".into())],
            vec![Value::Null, Value::Varchar("two".into())],
            vec![Value::Integer(3), Value::Null],
        ];
        let chunk = DataChunk::from_rows(&types, &rows).unwrap();
        assert_eq!(chunk.column_count(), 2);
        assert_eq!(chunk.row_count(), 3);
        assert_eq!(chunk.to_rows().unwrap(), rows);
    }

    #[test]
    fn test_arity_checked() {
        let types = [LogicalType::Integer, LogicalType::Varchar];
        let rows = vec![vec![Value::Integer(1)]];
        assert_eq!(
            DataChunk::from_rows(&types, &rows).err(),
            Some(Error::RowArityMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_empty_chunk() {
        let chunk = DataChunk::empty(&[LogicalType::Integer]).unwrap();
        assert_eq!(chunk.row_count(), 0);
        assert_eq!(chunk.column_count(), 1);
    }

    #[test]
    fn test_column_bounds() {
        let chunk = DataChunk::empty(&[LogicalType::Integer]).unwrap();
        assert!(chunk.column(0).is_ok());
        assert_eq!(chunk.column(1).err(), Some(Error::ColumnOutOfRange(1)));
    }
}
