//! Database infrastructure - pool construction, migrations, and diagnostics.

pub mod diagnostics;

use std::str::FromStr;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{info, trace};

use crate::config::db::{DbKind, DbSettings};
use crate::error::AppError;
use crate::infra::schema_guard::ensure_schema_ready;

const FILE_POOL_MAX: u32 = 4;
const ACQUIRE_TIMEOUT_MS: u64 = 5_000;

/// Apply per-connection settings (foreign keys, busy timeout).
async fn apply_sqlite_config(
    conn: &mut sqlx::SqliteConnection,
    statements: &[String],
) -> Result<(), sqlx::Error> {
    for stmt in statements {
        sqlx::query(stmt).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Build the SQLite pool described by `settings`.
///
/// An in-memory database lives only as long as its connection, so that kind
/// gets exactly one connection that is never recycled.
pub async fn build_pool(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    settings.validate()?;
    let url = settings.conn_spec();

    let mut connect_opts = SqliteConnectOptions::from_str(&url)
        .map_err(|e| AppError::config(format!("invalid SQLite connection options: {e}")))?
        .create_if_missing(true);
    if settings.kind == DbKind::SqliteFile {
        connect_opts = connect_opts.journal_mode(SqliteJournalMode::Wal);
    }

    let mut pool_opts = SqlitePoolOptions::new()
        .min_connections(1)
        .acquire_timeout(Duration::from_millis(ACQUIRE_TIMEOUT_MS));
    pool_opts = match settings.kind {
        DbKind::SqliteFile => pool_opts.max_connections(FILE_POOL_MAX),
        DbKind::SqliteMemory => pool_opts
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None),
    };

    let statements = settings.session_statements();
    let pool: SqlitePool = pool_opts
        .after_connect(move |conn, _meta| {
            let statements = statements.clone();
            Box::pin(async move {
                apply_sqlite_config(conn, &statements).await?;
                trace!("db=sqlite hook=after_connect ok");
                Ok::<_, sqlx::Error>(())
            })
        })
        .connect_with(connect_opts)
        .await
        .map_err(|e| AppError::config(format!("failed to create SQLite connection pool: {e}")))?;

    // warm-up to ensure the hook ran on the initial connection
    {
        let mut conn = pool.acquire().await.map_err(|e| {
            AppError::config(format!("connection acquisition failed during warmup: {e}"))
        })?;
        sqlx::query("SELECT 1;")
            .execute(&mut *conn)
            .await
            .map_err(|e| AppError::config(format!("warmup query failed: {e}")))?;
    }

    let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
    diagnostics::log_pragma_snapshot(&db, "shared").await?;

    info!(
        "pool=create engine=sqlite kind={} path={} busy_timeout_ms={}",
        settings.kind, url, settings.busy_timeout_ms
    );
    Ok(db)
}

/// Build the pool *and* guarantee the schema is current.
pub async fn bootstrap_db(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    info!(
        "bootstrap=start db_kind={} pid={}",
        settings.kind,
        std::process::id()
    );

    let db = build_pool(settings).await?;
    migration::migrate(&db, MigrationCommand::Up).await?;
    ensure_schema_ready(&db).await?;

    info!("bootstrap=ready");
    Ok(db)
}
