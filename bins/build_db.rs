use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use tracing::{error, info};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    match build().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "build_db", event = "failed", error = %e, "database build failed");
            std::process::ExitCode::FAILURE
        }
    }
}

/// Create the tables and seed the service catalog.
async fn build() -> anyhow::Result<()> {
    let cfg = configs::AppConfig::load_or_env()?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    Migrator::up(&db, None).await?;
    let services = service::catalog::list_services(&db).await?;
    info!(service = "build_db", event = "done", services = services.len(), "schema up to date");
    models::db::shutdown(db).await
}
