//! SQLite access.
//!
//! One connection is opened at startup and shared by every worker behind a
//! mutex. Handlers never touch it directly from async code: [`Database::run`]
//! hops onto actix's blocking pool first, the same way heavy work is kept off
//! the request threads elsewhere in the server.

pub mod schema;
pub mod seed;

use crate::error::{ApiError, ApiResult};
use actix_web::web;
use log::info;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Path value that selects a private in-memory database.
pub const MEMORY: &str = ":memory:";

/// How timestamps are stored in `laporan.tanggal`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Opens (creating if needed) the database at `path` and ensures the
    /// schema exists.
    pub fn open(path: &str) -> rusqlite::Result<Self> {
        let conn = if path == MEMORY {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        let db = Self::from_connection(conn)?;
        info!("Database ready at {}", path);
        Ok(db)
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> rusqlite::Result<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        schema::initialize(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` against the connection on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&mut Connection) -> ApiResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = self.clone();
        web::block(move || db.with_connection(f))
            .await
            .map_err(|e| ApiError::Storage(e.to_string()))?
    }

    /// Runs `f` against the connection on the current thread.
    pub fn with_connection<F, T>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&mut Connection) -> ApiResult<T>,
    {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| ApiError::Storage("database connection lock poisoned".to_string()))?;
        f(&mut conn)
    }
}

/// Returns whether `table` has a row whose `id_column` equals `id`.
///
/// Both names must be compile-time constants; they are spliced into the SQL.
pub fn row_exists(
    conn: &Connection,
    table: &'static str,
    id_column: &'static str,
    id: i64,
) -> rusqlite::Result<bool> {
    conn.query_row(
        &format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE {id_column} = ?1)"),
        [id],
        |row| row.get(0),
    )
}
