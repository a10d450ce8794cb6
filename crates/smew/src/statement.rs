//! Prepared statements and parameter binding

use std::collections::BTreeMap;

use smew_value::Value;

use crate::engine::Plan;
use crate::error::{Error, Result};
use crate::pending::{PendingQuery, ResultMode};
use crate::result::QueryResult;

/// A prepared query with named parameters.
///
/// Parameter indexes are 1-based. Binds persist across runs until
/// cleared or rebound.
#[derive(Debug)]
pub struct PreparedStatement {
    plan: Plan,
    parameters: Vec<String>,
    binds: BTreeMap<String, Value>,
}

impl PreparedStatement {
    pub(crate) fn new(plan: Plan) -> Self {
        let parameters = plan.parameter_names().to_vec();
        PreparedStatement {
            plan,
            parameters,
            binds: BTreeMap::new(),
        }
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Name of the parameter at a 1-based index.
    pub fn parameter_name(&self, index: usize) -> Result<&str> {
        self.parameters
            .get(index.wrapping_sub(1))
            .map(String::as_str)
            .ok_or(Error::ParameterOutOfRange(index))
    }

    /// Bind a value at a 1-based parameter index.
    pub fn bind_value(&mut self, index: usize, value: Value) -> Result<()> {
        let name = self.parameter_name(index)?.to_string();
        self.binds.insert(name, value);
        Ok(())
    }

    /// Bind a value by parameter name.
    pub fn bind_named(&mut self, name: &str, value: Value) -> Result<()> {
        if !self.parameters.iter().any(|p| p == name) {
            return Err(Error::UnknownParameter(name.to_string()));
        }
        self.binds.insert(name.to_string(), value);
        Ok(())
    }

    pub fn bind_boolean(&mut self, index: usize, value: bool) -> Result<()> {
        self.bind_value(index, Value::Boolean(value))
    }

    pub fn bind_integer(&mut self, index: usize, value: i32) -> Result<()> {
        self.bind_value(index, Value::Integer(value))
    }

    pub fn bind_bigint(&mut self, index: usize, value: i64) -> Result<()> {
        self.bind_value(index, Value::BigInt(value))
    }

    pub fn bind_double(&mut self, index: usize, value: f64) -> Result<()> {
        self.bind_value(index, Value::Double(value))
    }

    pub fn bind_varchar(&mut self, index: usize, value: &str) -> Result<()> {
        self.bind_value(index, Value::Varchar(value.to_string()))
    }

    pub fn bind_null(&mut self, index: usize) -> Result<()> {
        self.bind_value(index, Value::Null)
    }

    pub fn clear_bindings(&mut self) {
        self.binds.clear();
    }

    /// Execute to completion and return a materialized result.
    pub fn run(&self) -> Result<QueryResult> {
        tracing::debug!(parameters = self.parameters.len(), "running statement");
        self.pending(ResultMode::Materialized).take_result()
    }

    /// Begin streaming execution.
    pub fn start(&self) -> PendingQuery {
        tracing::debug!("starting streaming execution");
        self.pending(ResultMode::Streaming)
    }

    /// Begin incremental execution of a materialized result.
    pub fn start_materialized(&self) -> PendingQuery {
        tracing::debug!("starting materialized execution");
        self.pending(ResultMode::Materialized)
    }

    fn pending(&self, mode: ResultMode) -> PendingQuery {
        PendingQuery::new(self.plan.clone(), self.binds.clone(), mode)
    }
}
