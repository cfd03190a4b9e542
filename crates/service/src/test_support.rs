#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// A migrated connection, or `None` when database tests are skipped or no
/// database is reachable.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let migrated = *MIGRATED
        .get_or_init(|| async {
            let db = match models::db::connect().await {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    return false;
                }
            };
            if let Err(e) = migration::Migrator::up(&db, None).await {
                eprintln!("skip: migrate up failed: {}", e);
                return false;
            }
            true
        })
        .await;
    if !migrated {
        return Ok(None);
    }

    // Fresh connection for the current test's runtime
    let db = models::db::connect().await?;
    Ok(Some(db))
}
