//! Incrementally executed queries
//!
//! A pending query splits execution into explicit units of work so the
//! caller controls when engine time is spent. Each call to [`advance`]
//! performs at most one unit; [`take_result`] drives the query to
//! completion and hands over the result.
//!
//! [`advance`]: PendingQuery::advance
//! [`take_result`]: PendingQuery::take_result

use std::collections::{BTreeMap, VecDeque};

use smew_value::Value;

use crate::chunk::DataChunk;
use crate::engine::{ExecCursor, Plan};
use crate::error::{Error, Result};
use crate::result::{QueryResult, StatementType};

/// Observable execution state of a pending query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingState {
    /// More work remains before a result is available.
    ResultNotReady,
    /// The result is complete and can be taken.
    ResultReady,
    /// Execution failed; the error message is available.
    Error,
    /// No further work can be performed right now.
    NoTasksAvailable,
}

/// Whether the finished result holds its whole body or streams it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultMode {
    Materialized,
    Streaming,
}

#[derive(Debug)]
enum Stage {
    Start {
        plan: Plan,
        binds: BTreeMap<String, Value>,
    },
    Materializing {
        cursor: ExecCursor,
        chunks: VecDeque<DataChunk>,
    },
    Ready {
        result: Option<QueryResult>,
    },
    Failed {
        message: String,
    },
}

/// A query whose execution is driven explicitly by the caller.
#[derive(Debug)]
pub struct PendingQuery {
    mode: ResultMode,
    stage: Stage,
}

impl PendingQuery {
    pub(crate) fn new(plan: Plan, binds: BTreeMap<String, Value>, mode: ResultMode) -> Self {
        PendingQuery {
            mode,
            stage: Stage::Start { plan, binds },
        }
    }

    /// Current state without performing any work.
    pub fn state(&self) -> PendingState {
        match &self.stage {
            Stage::Start { .. } | Stage::Materializing { .. } => PendingState::ResultNotReady,
            Stage::Ready { .. } => PendingState::ResultReady,
            Stage::Failed { .. } => PendingState::Error,
        }
    }

    /// The failure message, once execution has failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.stage {
            Stage::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Perform at most one unit of work and report the resulting state.
    /// Advancing a finished or failed query performs nothing.
    pub fn advance(&mut self) -> PendingState {
        self.stage = match std::mem::replace(
            &mut self.stage,
            Stage::Failed {
                message: String::new(),
            },
        ) {
            Stage::Start { plan, binds } => match ExecCursor::bind(&plan, &binds) {
                Ok(cursor) => match self.mode {
                    ResultMode::Streaming => Stage::Ready {
                        result: Some(QueryResult::streaming(cursor, StatementType::Select)),
                    },
                    ResultMode::Materialized => Stage::Materializing {
                        cursor,
                        chunks: VecDeque::new(),
                    },
                },
                Err(error) => {
                    tracing::debug!(%error, "pending query failed to bind");
                    Stage::Failed {
                        message: error.to_string(),
                    }
                }
            },
            Stage::Materializing {
                mut cursor,
                mut chunks,
            } => match cursor.next_chunk() {
                Ok(Some(chunk)) => {
                    chunks.push_back(chunk);
                    Stage::Materializing { cursor, chunks }
                }
                Ok(None) => {
                    tracing::debug!(chunks = chunks.len(), "pending query complete");
                    Stage::Ready {
                        result: Some(QueryResult::materialized(
                            cursor.columns().to_vec(),
                            StatementType::Select,
                            chunks,
                        )),
                    }
                }
                Err(error) => {
                    tracing::debug!(%error, "pending query failed");
                    Stage::Failed {
                        message: error.to_string(),
                    }
                }
            },
            terminal => terminal,
        };
        self.state()
    }

    /// Drive execution to completion and take the result. The result can
    /// be taken once; taking it again is an error.
    pub fn take_result(&mut self) -> Result<QueryResult> {
        loop {
            match self.advance() {
                PendingState::ResultNotReady | PendingState::NoTasksAvailable => {}
                PendingState::ResultReady => break,
                PendingState::Error => {
                    let message = self.error_message().unwrap_or_default().to_string();
                    return Err(Error::Execution(message));
                }
            }
        }
        match &mut self.stage {
            Stage::Ready { result } => result.take().ok_or(Error::ResultAlreadyTaken),
            _ => Err(Error::ResultAlreadyTaken),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ResultReturnType;

    fn range_pending(rows: i64, mode: ResultMode) -> PendingQuery {
        PendingQuery::new(
            Plan::Range {
                start: 0,
                stop: rows,
            },
            BTreeMap::new(),
            mode,
        )
    }

    #[test]
    fn test_materialized_advances_one_chunk_at_a_time() {
        let mut pending = range_pending(5000, ResultMode::Materialized);
        assert_eq!(pending.state(), PendingState::ResultNotReady);

        // Bind, then one advance per chunk (3 chunks), then completion.
        let mut steps = 0;
        while pending.advance() == PendingState::ResultNotReady {
            steps += 1;
        }
        assert_eq!(steps, 4);
        assert_eq!(pending.state(), PendingState::ResultReady);

        let mut result = pending.take_result().unwrap();
        assert_eq!(result.fetch_all_rows().unwrap().len(), 5000);
    }

    #[test]
    fn test_streaming_ready_after_bind() {
        let mut pending = range_pending(5000, ResultMode::Streaming);
        assert_eq!(pending.advance(), PendingState::ResultReady);

        let mut result = pending.take_result().unwrap();
        assert_eq!(result.return_type(), ResultReturnType::QueryResult);
        assert_eq!(result.fetch_chunk().unwrap().row_count(), 2048);
    }

    #[test]
    fn test_terminal_advance_is_noop() {
        let mut pending = range_pending(1, ResultMode::Streaming);
        assert_eq!(pending.advance(), PendingState::ResultReady);
        assert_eq!(pending.advance(), PendingState::ResultReady);
        assert_eq!(pending.advance(), PendingState::ResultReady);
    }

    #[test]
    fn test_result_taken_once() {
        let mut pending = range_pending(1, ResultMode::Materialized);
        assert!(pending.take_result().is_ok());
        assert_eq!(pending.take_result().err(), Some(Error::ResultAlreadyTaken));
    }

    #[test]
    fn test_failed_bind_reports_error() {
        let mut pending = PendingQuery::new(
            Plan::Params {
                names: vec!["missing".into()],
            },
            BTreeMap::new(),
            ResultMode::Materialized,
        );
        assert_eq!(pending.advance(), PendingState::Error);
        assert_eq!(
            pending.error_message(),
            Some("Parameter \"missing\" has not been bound")
        );
        assert!(matches!(
            pending.take_result(),
            Err(Error::Execution(_))
        ));
    }
}
