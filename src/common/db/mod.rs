use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use crate::settings::types::Settings;

pub async fn init_db(settings: &Settings) -> Result<DbConn, DbErr> {
    let mut options = ConnectOptions::new(&settings.database.url);
    options
        .max_connections(settings.database.max_connections)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(settings.debug);
    if settings.database.url.starts_with("sqlite::memory:") {
        // Every pooled connection would open its own empty in-memory database.
        options.max_connections(1).min_connections(1);
    }

    let db_conn = Database::connect(options).await?;
    Migrator::up(&db_conn, None).await?;
    tracing::event!(target: "backend", tracing::Level::INFO, "Database is migrated and ready.");
    Ok(db_conn)
}
