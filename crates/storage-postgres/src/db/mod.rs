//! Connection pool management and schema initialization.

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::{error, info, warn};

use budgetflow_core::errors::{DatabaseError, Error, Result};

mod config;
pub use config::DbConfig;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Builds a bounded connection pool for the configured database.
///
/// Establishes the minimum number of connections up front, so an unreachable
/// database fails here rather than on first use. Each call creates an
/// independent pool; pools are shut down with [`shutdown_pool`], never
/// implicitly.
pub fn create_pool(config: &DbConfig) -> Result<Arc<DbPool>> {
    config.validate()?;
    let manager = ConnectionManager::<PgConnection>::new(config.database_url());
    let pool = Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .connection_timeout(config.connection_timeout)
        .build(manager)
        .map_err(|e| {
            error!("failed to create database pool: {e}");
            Error::Database(DatabaseError::PoolCreationFailed(e.to_string()))
        })?;
    info!(
        "database pool ready ({}..{} connections, {:?} acquire timeout)",
        config.min_connections, config.max_connections, config.connection_timeout
    );
    Ok(Arc::new(pool))
}

/// Borrows a connection from the pool, blocking up to the acquire timeout.
///
/// The connection returns to the pool when the guard is dropped, on every
/// exit path; there is no explicit release call to forget.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get()
        .map_err(|e| Error::Database(DatabaseError::PoolExhausted(e.to_string())))
}

/// Creates the schema by running any pending embedded migrations.
///
/// Borrows one connection for the duration. Safe to call on every startup:
/// the table-creation statements are `IF NOT EXISTS` and already-applied
/// migrations are skipped.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    info!("running database migrations");
    let mut connection = get_connection(pool)?;

    let applied = connection.run_pending_migrations(MIGRATIONS).map_err(|e| {
        error!("database migration failed: {e}");
        Error::Database(DatabaseError::MigrationFailed(e.to_string()))
    })?;

    if applied.is_empty() {
        info!("no pending migrations to apply");
    } else {
        for version in &applied {
            info!("applied migration {version}");
        }
    }

    Ok(())
}

/// Releases this handle to the pool.
///
/// Pooled connections close once the last clone of the handle (repositories
/// included) goes out of scope; until then the pool stays usable through the
/// remaining clones.
pub fn shutdown_pool(pool: Arc<DbPool>) {
    let remaining = Arc::strong_count(&pool) - 1;
    if remaining > 0 {
        warn!("pool shutdown requested with {remaining} handle(s) still live");
    } else {
        info!("database pool shut down");
    }
    drop(pool);
}
