//! Query results: column metadata plus a materialized or streaming body

use std::collections::VecDeque;
use std::fmt;

use smew_value::{LogicalType, TypeId};

use crate::chunk::DataChunk;
use crate::engine::ExecCursor;
use crate::error::{Error, Result};

/// Name and type of one result column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    ty: LogicalType,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: LogicalType) -> Self {
        Column {
            name: name.into(),
            ty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logical_type(&self) -> &LogicalType {
        &self.ty
    }
}

/// The kind of statement a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum StatementType {
    Invalid = 0,
    Select = 1,
    Insert = 2,
    Update = 3,
    Explain = 4,
    Delete = 5,
    Prepare = 6,
    Create = 7,
    Execute = 8,
    Alter = 9,
    Transaction = 10,
    Copy = 11,
    Analyze = 12,
    VariableSet = 13,
    CreateFunc = 14,
    Drop = 15,
    Export = 16,
    Pragma = 17,
    Vacuum = 18,
    Call = 19,
    Set = 20,
    Load = 21,
    Relation = 22,
    Extension = 23,
    LogicalPlan = 24,
    Attach = 25,
    Detach = 26,
    Multi = 27,
}

/// How a result reports its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ResultReturnType {
    Invalid = 0,
    ChangedRows = 1,
    Nothing = 2,
    QueryResult = 3,
}

impl fmt::Display for ResultReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResultReturnType::Invalid => "invalid",
            ResultReturnType::ChangedRows => "changed rows",
            ResultReturnType::Nothing => "nothing",
            ResultReturnType::QueryResult => "query result",
        })
    }
}

#[derive(Debug)]
enum ResultSource {
    /// Every chunk already produced, served front to back.
    Materialized { chunks: VecDeque<DataChunk> },
    /// Chunks pulled from the engine on demand.
    Streaming { cursor: ExecCursor },
}

/// The result of an executed query.
///
/// Exhausted results keep serving the zero-row sentinel chunk so callers
/// polling for data always see a well-typed chunk.
#[derive(Debug)]
pub struct QueryResult {
    columns: Vec<Column>,
    statement_type: StatementType,
    return_type: ResultReturnType,
    source: ResultSource,
}

impl QueryResult {
    pub(crate) fn materialized(
        columns: Vec<Column>,
        statement_type: StatementType,
        chunks: VecDeque<DataChunk>,
    ) -> Self {
        QueryResult {
            columns,
            statement_type,
            return_type: ResultReturnType::QueryResult,
            source: ResultSource::Materialized { chunks },
        }
    }

    pub(crate) fn streaming(cursor: ExecCursor, statement_type: StatementType) -> Self {
        QueryResult {
            columns: cursor.columns().to_vec(),
            statement_type,
            return_type: ResultReturnType::QueryResult,
            source: ResultSource::Streaming { cursor },
        }
    }

    pub fn statement_type(&self) -> StatementType {
        self.statement_type
    }

    pub fn return_type(&self) -> ResultReturnType {
        self.return_type
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_name(&self, index: usize) -> Result<&str> {
        Ok(self.column(index)?.name())
    }

    pub fn column_type(&self, index: usize) -> Result<&LogicalType> {
        Ok(self.column(index)?.logical_type())
    }

    pub fn column_type_id(&self, index: usize) -> Result<TypeId> {
        Ok(self.column_type(index)?.id())
    }

    fn column(&self, index: usize) -> Result<&Column> {
        self.columns
            .get(index)
            .ok_or(Error::ColumnOutOfRange(index))
    }

    fn types(&self) -> Vec<LogicalType> {
        self.columns.iter().map(|c| c.logical_type().clone()).collect()
    }

    /// The next chunk of rows. After the body runs out, every further call
    /// yields a fresh zero-row chunk with the result's column types.
    pub fn fetch_chunk(&mut self) -> Result<DataChunk> {
        let next = match &mut self.source {
            ResultSource::Materialized { chunks } => chunks.pop_front(),
            ResultSource::Streaming { cursor } => cursor.next_chunk()?,
        };
        match next {
            Some(chunk) => {
                tracing::trace!(rows = chunk.row_count(), "fetched chunk");
                Ok(chunk)
            }
            None => DataChunk::empty(&self.types()),
        }
    }

    /// Drain the remaining body into row-major values.
    pub fn fetch_all_rows(&mut self) -> Result<Vec<Vec<smew_value::Value>>> {
        let mut rows = Vec::new();
        loop {
            let chunk = self.fetch_chunk()?;
            if chunk.row_count() == 0 {
                return Ok(rows);
            }
            rows.extend(chunk.to_rows()?);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smew_value::Value;

    fn single_column_result(rows: &[Vec<Value>]) -> QueryResult {
        let types = [LogicalType::Integer];
        let chunk = DataChunk::from_rows(&types, rows).unwrap();
        QueryResult::materialized(
            vec![Column::new("n", LogicalType::Integer)],
            StatementType::Select,
            VecDeque::from([chunk]),
        )
    }

    #[test]
    fn test_column_metadata() {
        let result = single_column_result(&[]);
        assert_eq!(result.column_count(), 1);
        assert_eq!(result.column_name(0).unwrap(), "n");
        assert_eq!(result.column_type(0).unwrap(), &LogicalType::Integer);
        assert_eq!(result.column_type_id(0).unwrap(), TypeId::Integer);
        assert_eq!(result.statement_type(), StatementType::Select);
        assert_eq!(result.return_type(), ResultReturnType::QueryResult);
    }

    #[test]
    fn test_sentinel_repeats_after_exhaustion() {
        let mut result = single_column_result(&[vec![Value::Integer(7)]]);
        assert_eq!(result.fetch_chunk().unwrap().row_count(), 1);
        for _ in 0..3 {
            let sentinel = result.fetch_chunk().unwrap();
            assert_eq!(sentinel.row_count(), 0);
            assert_eq!(sentinel.column_count(), 1);
        }
    }

    #[test]
    fn test_fetch_all_rows() {
        let rows = vec![vec![Value::Integer(1)], vec![Value::Null]];
        let mut result = single_column_result(&rows);
        assert_eq!(result.fetch_all_rows().unwrap(), rows);
    }
}
