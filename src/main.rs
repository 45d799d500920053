//! One-shot MongoDB bootstrap, run at first container start.
//!
//! Environment:
//! - `MONGO_DATABASE` (required): target database
//! - `MONGO_APP_PASSWORD` (required): password of the application user
//! - `MONGO_APP_USERNAME` (default `appuser`)
//! - `MONGODB_URI` (default `mongodb://localhost:27017`): administrative connection
//!
//! Exits with code 1 on any failure.

mod bootstrap;
mod config;
mod database;
mod models;
mod utils;

use dotenv::dotenv;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🚀 Starting MongoDB bootstrap...");

    let result = bootstrap::execute(
        config::BootstrapConfig::from_env,
        |config| async move {
            log::info!("📊 Connecting to MongoDB for database '{}'", config.database);
            let db = database::MongoDB::connect(&config.mongodb_uri).await?;
            log::info!("✅ MongoDB connected successfully");
            Ok::<_, utils::BootstrapError>((config, db))
        },
    )
    .await;

    match result {
        Ok(report) => {
            log::info!(
                "✅ Bootstrap of '{}' finished in {}ms (user '{}', collection '{}' {})",
                report.database,
                report.elapsed_ms,
                report.username,
                report.collection,
                if report.collection_created { "created" } else { "reused" }
            );
            if let Some(id) = report.inserted_id {
                log::info!("   sample document _id: {}", id);
            }
            log::debug!("   started at {}", report.started_at.to_rfc3339());
        }
        Err(e) => {
            log::error!("❌ Bootstrap failed [{}]: {}", e.kind(), e);
            std::process::exit(1);
        }
    }
}
