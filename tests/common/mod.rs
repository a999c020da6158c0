//! Shared fixtures for the integration test suite.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use melosport_storefront::db::{DbConnection, DbPool, establish_connection_pool};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// A migrated SQLite database backed by a temp file that is removed when
/// the fixture drops.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Checks out a connection for seeding rows directly.
    pub fn conn(&self) -> DbConnection {
        self.pool
            .get()
            .expect("Failed to get SQLite connection from pool.")
    }
}
