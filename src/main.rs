//! Institute API - administrative backend for an educational institute.
//!
//! This binary starts the HTTP server and configures all components.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use institute_api::{
    config::Config,
    db::{create_pool, health_check},
    server::{create_router, AppState, RouterConfig},
    upload::UploadStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Configuration:");
    info!(
        "  Database: {}@{}:{}/{}",
        config.db_user, config.db_host, config.db_port, config.db_name
    );
    info!("  Upload dir: {}", config.upload_dir.display());
    info!("  Pool size: {}", config.db_max_connections);

    // Build the connection pool and verify the store is reachable before
    // accepting traffic.
    let pool = match create_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            report_database_failure(&config, &e.to_string());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = health_check(&pool).await {
        report_database_failure(&config, &e.to_string());
        return ExitCode::FAILURE;
    }

    info!("  Connected to PostgreSQL");

    // The upload directory must exist before the first submission arrives.
    let uploads = UploadStore::new(&config.upload_dir);
    if let Err(e) = uploads.ensure_dir().await {
        error!(
            "Failed to create upload directory {}: {}",
            config.upload_dir.display(),
            e
        );
        return ExitCode::FAILURE;
    }

    let state = AppState::new(pool, uploads);
    let router = create_router(state, build_router_config(&config));

    let addr = config.bind_address();

    info!("");
    info!("  Server listening on: http://{}", addr);
    info!("");
    info!("  Try these endpoints:");
    info!("    curl http://{}/health", addr);
    info!("    curl http://{}/api/courses", addr);
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Log a database connection failure with actionable hints.
fn report_database_failure(config: &Config, cause: &str) {
    error!("Failed to connect to PostgreSQL: {}", cause);
    error!("");
    error!("  Please check:");
    error!("    - The database credentials (DB_USER / DB_PASSWORD) are correct");
    error!(
        "    - PostgreSQL is reachable at {}:{}",
        config.db_host, config.db_port
    );
    error!("    - The database '{}' exists", config.db_name);
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "institute_api=debug,tower_http=debug"
    } else {
        "institute_api=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build RouterConfig from the application Config.
fn build_router_config(config: &Config) -> RouterConfig {
    let mut router_config = RouterConfig::default()
        .with_max_upload_bytes(config.max_upload_bytes)
        .with_tracing(!config.no_tracing);

    if let Some(ref origins) = config.cors_origins {
        router_config = router_config.with_cors_origins(origins.clone());
    }

    router_config
}
