//! Database layer persisting the session flag using `SQLite` via `SQLx`.
//!
//! The on-disk contract is one row in the `app_state` key/value table:
//! key `"isLoggedIn"`, value the literal string `"true"` while a session is
//! active, row absent otherwise. Migrations are embedded at compile time
//! via `sqlx::migrate!()` and run on every [`Database::open`].

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use tokio::runtime::{Builder, Runtime};

pub const DB_DIR: &str = "db";
pub const DB_FILE: &str = "taskdash.db";

const LOGIN_FLAG_KEY: &str = "isLoggedIn";
const LOGIN_FLAG_TRUE: &str = "true";

/// Persistence seam for the session flag.
///
/// `Database` is the production implementation; app-layer tests mock this
/// to exercise the persistence-failure paths.
#[cfg_attr(test, mockall::automock)]
pub trait SessionFlagStore {
    /// Returns whether a persisted session flag is present.
    fn load_login_flag(&self) -> Result<bool, String>;
    /// Persists the session flag.
    fn save_login_flag(&self) -> Result<(), String>;
    /// Removes the session flag.
    fn clear_login_flag(&self) -> Result<(), String>;
}

pub struct Database {
    pool: SqlitePool,
    runtime: Runtime,
}

impl Database {
    /// Opens (creating if missing) the database file and runs migrations.
    pub fn open(db_path: &Path) -> Result<Self, String> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| format!("Failed to create runtime: {err}"))?;

        let pool: SqlitePool = runtime.block_on(async {
            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|err| format!("Failed to create database directory: {err}"))?;
            }

            let options = SqliteConnectOptions::new()
                .filename(db_path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal);

            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(options)
                .await
                .map_err(|err| format!("Failed to connect to database: {err}"))?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|err| format!("Failed to run migrations: {err}"))?;

            Ok::<_, String>(pool)
        })?;

        Ok(Self { pool, runtime })
    }
}

impl SessionFlagStore for Database {
    fn load_login_flag(&self) -> Result<bool, String> {
        self.runtime.block_on(async {
            let row = sqlx::query("SELECT value FROM app_state WHERE key = ?")
                .bind(LOGIN_FLAG_KEY)
                .fetch_optional(&self.pool)
                .await
                .map_err(|err| format!("Failed to read login flag: {err}"))?;

            Ok(row.is_some_and(|row| row.get::<String, _>("value") == LOGIN_FLAG_TRUE))
        })
    }

    fn save_login_flag(&self) -> Result<(), String> {
        self.runtime.block_on(async {
            sqlx::query(
                "INSERT INTO app_state (key, value) VALUES (?, ?) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            )
            .bind(LOGIN_FLAG_KEY)
            .bind(LOGIN_FLAG_TRUE)
            .execute(&self.pool)
            .await
            .map_err(|err| format!("Failed to save login flag: {err}"))?;

            Ok(())
        })
    }

    fn clear_login_flag(&self) -> Result<(), String> {
        self.runtime.block_on(async {
            sqlx::query("DELETE FROM app_state WHERE key = ?")
                .bind(LOGIN_FLAG_KEY)
                .execute(&self.pool)
                .await
                .map_err(|err| format!("Failed to clear login flag: {err}"))?;

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn open_temp_database(dir: &tempfile::TempDir) -> Database {
        Database::open(&dir.path().join(DB_DIR).join(DB_FILE))
            .expect("failed to open database")
    }

    #[test]
    fn test_open_creates_the_database_file() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");

        // Act
        let _db = open_temp_database(&dir);

        // Assert
        assert!(dir.path().join(DB_DIR).join(DB_FILE).exists());
    }

    #[test]
    fn test_login_flag_round_trip() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let db = open_temp_database(&dir);

        // Act & Assert
        assert_eq!(db.load_login_flag(), Ok(false));

        db.save_login_flag().expect("failed to save login flag");
        assert_eq!(db.load_login_flag(), Ok(true));

        db.clear_login_flag().expect("failed to clear login flag");
        assert_eq!(db.load_login_flag(), Ok(false));
    }

    #[test]
    fn test_save_login_flag_is_idempotent() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let db = open_temp_database(&dir);

        // Act
        db.save_login_flag().expect("failed to save login flag");
        db.save_login_flag().expect("failed to save login flag again");

        // Assert
        assert_eq!(db.load_login_flag(), Ok(true));
    }

    #[test]
    fn test_clear_login_flag_without_a_saved_flag_is_a_noop() {
        // Arrange
        let dir = tempdir().expect("failed to create temp dir");
        let db = open_temp_database(&dir);

        // Act
        db.clear_login_flag().expect("failed to clear login flag");

        // Assert
        assert_eq!(db.load_login_flag(), Ok(false));
    }
}
