use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use crate::settings::types::Settings;

pub async fn init_db(settings: &Settings) -> DbConn {
    try_init_db(settings)
        .await
        .expect("Failed to open and migrate DB connection.")
}

/// Connects with the configured pool size and brings the schema up to date.
pub async fn try_init_db(settings: &Settings) -> Result<DbConn, DbErr> {
    let mut options = ConnectOptions::new(&settings.database.url);
    options
        .max_connections(settings.database.max_connections)
        .sqlx_logging(settings.debug);
    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}
