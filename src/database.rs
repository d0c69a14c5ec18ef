//! SQLite-backed storage for courses, users, assignments and course memberships.
//!
//! A [`Database`] is opened once at startup and handed to the router as state.
//! Entity operations live in the submodules as `impl Database` blocks.

use std::str::FromStr;
use std::time::Duration;

use sqlx::{
    ConnectOptions, SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use thiserror::Error;

use crate::model::role::Role;

mod assignment;
mod course;
mod relation;
mod user;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not create table {table}: {source}")]
    Schema {
        table: &'static str,
        source: sqlx::Error,
    },
    /// The membership row already exists
    #[error("User {user_id} is already a {role} in course {course_id}")]
    AlreadyMember {
        course_id: i64,
        user_id: i64,
        role: Role,
    },
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

const SCHEMA: [(&str, &str); 5] = [
    (
        "courses",
        "CREATE TABLE IF NOT EXISTS courses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            code TEXT NOT NULL,
            name TEXT NOT NULL
        );",
    ),
    (
        "users",
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            netid TEXT NOT NULL
        );",
    ),
    (
        "assignments",
        "CREATE TABLE IF NOT EXISTS assignments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            due_date INTEGER NOT NULL,
            course_id INTEGER NOT NULL REFERENCES courses (id)
        );",
    ),
    (
        "course_instructors",
        "CREATE TABLE IF NOT EXISTS course_instructors (
            course_id INTEGER NOT NULL REFERENCES courses (id),
            user_id INTEGER NOT NULL REFERENCES users (id),
            PRIMARY KEY (course_id, user_id)
        );",
    ),
    (
        "course_students",
        "CREATE TABLE IF NOT EXISTS course_students (
            course_id INTEGER NOT NULL REFERENCES courses (id),
            user_id INTEGER NOT NULL REFERENCES users (id),
            PRIMARY KEY (course_id, user_id)
        );",
    ),
];

#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the store at `url` and creates any missing tables.
    ///
    /// With `log_queries` set, every statement is emitted as a debug-level tracing event.
    pub async fn connect(url: &str, log_queries: bool) -> Result<Self, StoreError> {
        let in_memory = url.contains(":memory:");

        // Writers queue on the file lock for up to busy_timeout instead of failing
        let mut options = SqliteConnectOptions::from_str(url)?
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));
        if !in_memory {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }
        if !log_queries {
            options = options.disable_statement_logging();
        }

        // Readers run in parallel under WAL; writes are still serialized by SQLite
        let mut pool_options = SqlitePoolOptions::new().max_connections(10);
        if in_memory {
            // Each connection to :memory: gets its own database, so keep exactly one alive
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;
        let database = Self { pool };
        database.init_schema().await?;
        Ok(database)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        let mut transaction = self.pool.begin().await?;

        for (table, statement) in SCHEMA {
            sqlx::query(statement)
                .execute(&mut *transaction)
                .await
                .map_err(|source| StoreError::Schema { table, source })?;
        }

        transaction.commit().await?;
        tracing::debug!("Schema initialized");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
