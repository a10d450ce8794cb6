//! Common test utilities for integration tests
#![allow(dead_code)]

use smew::{Connection, Database, Plan, QueryResult};

/// Test context holding a database and one open connection.
pub struct TestContext {
    pub database: Database,
    pub connection: Connection,
}

impl TestContext {
    pub fn new() -> Self {
        let database = Database::open();
        let connection = database.connect();
        TestContext {
            database,
            connection,
        }
    }

    /// Run a range plan counting `0..rows`.
    pub fn run_range(&self, rows: i64) -> QueryResult {
        self.connection
            .run(Plan::Range {
                start: 0,
                stop: rows,
            })
            .expect("range plan executes")
    }

    /// Drain a result, returning the row count of each non-sentinel chunk.
    pub fn chunk_sizes(result: &mut QueryResult) -> Vec<usize> {
        let mut sizes = Vec::new();
        loop {
            let chunk = result.fetch_chunk().expect("chunk fetch succeeds");
            if chunk.row_count() == 0 {
                return sizes;
            }
            sizes.push(chunk.row_count());
        }
    }
}

pub fn setup_test() -> TestContext {
    TestContext::new()
}
