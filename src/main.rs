use std::sync::Arc;

use mercato::server::{
    config::Config,
    notify::{LogNotifier, NotificationSink},
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    let notifier: Arc<dyn NotificationSink> = Arc::new(LogNotifier);

    let _worker_queue = match startup::start_workers(&config, db, notifier).await {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!("Failed to start workers: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Squad assembly workers running");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
