mod models;
mod task_repository;

use crate::errors::Error;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::RunQueryDsl;
use std::sync::Arc;

pub use models::*;
pub use task_repository::*;

/// DDL applied at startup; matches the task record layout in `schema.rs`.
const CREATE_TASKS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    website_url TEXT NOT NULL,
    user_question TEXT NOT NULL,
    scraped_content TEXT,
    ai_answer TEXT,
    status TEXT NOT NULL DEFAULT 'pending',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

/// Shared handle to the SQLite connection pool.
///
/// Constructed once at startup and cloned into the API layer and the worker,
/// so tests can build their own isolated instance.
#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl Database {
    /// Opens (or creates) the database at `db_path` and ensures the tasks
    /// table exists.
    pub fn new(db_path: &str) -> Result<Self, Error> {
        let manager = ConnectionManager::<SqliteConnection>::new(db_path);
        let pool = Pool::builder().build(manager)?;

        let database = Database {
            pool: Arc::new(pool),
        };
        database.run_migrations()?;
        Ok(database)
    }

    /// Opens a private in-memory database, used by tests.
    ///
    /// The pool is capped at a single connection so that every query sees the
    /// same in-memory instance.
    pub fn in_memory() -> Result<Self, Error> {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = Pool::builder().max_size(1).build(manager)?;

        let database = Database {
            pool: Arc::new(pool),
        };
        database.run_migrations()?;
        Ok(database)
    }

    /// Checks out a pooled connection.
    pub fn get_conn(
        &self,
    ) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, Error> {
        Ok(self.pool.get()?)
    }

    fn run_migrations(&self) -> Result<(), Error> {
        let mut conn = self.get_conn()?;
        diesel::sql_query(CREATE_TASKS_TABLE).execute(&mut *conn)?;
        Ok(())
    }
}
