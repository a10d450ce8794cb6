//! Database handles and connections

use std::sync::atomic::{AtomicU64, Ordering};

use crate::engine::Plan;
use crate::error::Result;
use crate::pending::PendingQuery;
use crate::result::QueryResult;
use crate::statement::PreparedStatement;

/// An in-process database instance.
#[derive(Debug, Default)]
pub struct Database {
    next_connection: AtomicU64,
}

impl Database {
    pub fn open() -> Self {
        tracing::debug!("opening database");
        Database::default()
    }

    /// Open a new connection. Connections are independent; dropping one
    /// releases everything it produced.
    pub fn connect(&self) -> Connection {
        let id = self.next_connection.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(connection_id = id, "opening connection");
        Connection { id }
    }
}

/// A single connection to a database.
#[derive(Debug)]
pub struct Connection {
    id: u64,
}

impl Connection {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Prepare a plan for later execution.
    pub fn prepare(&self, plan: Plan) -> PreparedStatement {
        tracing::debug!(connection_id = self.id, "preparing statement");
        PreparedStatement::new(plan)
    }

    /// Prepare and run a plan, materializing the whole result.
    pub fn run(&self, plan: Plan) -> Result<QueryResult> {
        self.prepare(plan).run()
    }

    /// Prepare a plan and begin streaming execution.
    pub fn start(&self, plan: Plan) -> PendingQuery {
        self.prepare(plan).start()
    }
}
