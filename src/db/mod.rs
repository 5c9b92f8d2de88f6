pub mod inquiries;
pub mod portfolio;
pub mod seed;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};

/// Open a SeaORM connection pool for `database_url`.
pub async fn create_pool(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Apply pending schema migrations, then seed example data on an empty store.
///
/// Applied revisions are tracked in `seaql_migrations`, so only missing
/// deltas run and a failing migration aborts startup.
pub async fn init_database(db: &DatabaseConnection) -> Result<(), DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?.len();
    tracing::info!(pending, "Applying database migrations");
    Migrator::up(db, None).await?;
    tracing::info!(applied = pending, "Database schema up to date");

    seed::seed_if_empty(db).await?;
    Ok(())
}
