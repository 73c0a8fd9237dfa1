use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Connect to the database for the given profile.
///
/// The Test profile runs migrations on connect: an in-memory database
/// starts empty every time. Prod schema management goes through the
/// migration CLI instead.
pub async fn bootstrap_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile, owner)?;

    let mut opts = ConnectOptions::new(url);
    match profile {
        DbProfile::Prod => {
            opts.max_connections(10)
                .min_connections(2)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5));
        }
        DbProfile::Test => {
            // A pool of one keeps every handle on the same in-memory
            // database; a second connection would see an empty schema.
            opts.max_connections(1).min_connections(1);
        }
    }
    opts.sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .map_err(|e| AppError::db(format!("failed to connect to the database: {e}")))?;

    if profile == DbProfile::Test {
        Migrator::up(&db, None)
            .await
            .map_err(|e| AppError::db(format!("failed to migrate test database: {e}")))?;
    }

    Ok(db)
}
