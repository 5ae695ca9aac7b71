use migration::{count_applied_migrations, DatabaseConnection, Migrator, MigratorTrait};
use tracing::debug;

use crate::error::AppError;

/// Fail unless every defined migration has been applied to `db`.
pub async fn ensure_schema_ready(db: &DatabaseConnection) -> Result<(), AppError> {
    let applied = count_applied_migrations(db).await?;
    let defined = Migrator::migrations().len();

    if applied < defined {
        return Err(AppError::config(format!(
            "Database schema not ready: {applied} of {defined} migrations applied"
        )));
    }

    debug!(applied, defined, "schema ready");
    Ok(())
}
