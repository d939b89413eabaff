mod config;
mod logging;
mod signals;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Json, Router, routing::get};
use clap::{Parser, Subcommand};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use nodes_registry::api::rest::openapi::ApiDoc;
use nodes_registry::api::rest::routes;
use nodes_registry::domain::service::{Service, ServiceConfig};
use nodes_registry::infra::storage::migrations::Migrator;
use nodes_registry::infra::storage::sea_orm_repo::SeaOrmNodesRepository;

use config::AppConfig;

/// Pixelfarm nodes registry server
#[derive(Parser)]
#[command(name = "pixelfarm-server")]
#[command(about = "Pixelfarm nodes registry server")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !path.is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (PIXELFARM__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port);

    logging::init_logging(&config.logging.level, cli.verbose);

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_pretty_json()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    println!("Configuration is valid");
    println!("{}", config.to_pretty_json()?);
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("Pixelfarm nodes registry starting");

    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address: {}", config.server.bind_addr))?;

    let db = Database::connect(&config.database.dsn)
        .await
        .with_context(|| format!("connecting to database: {}", config.database.dsn))?;
    Migrator::up(&db, None)
        .await
        .context("running database migrations")?;

    let repo = Arc::new(SeaOrmNodesRepository::new(db));
    let service = Arc::new(Service::new(repo, ServiceConfig::default()));

    let mut router = Router::new().route("/healthz", get(healthz));
    router = routes::register_routes(router, service);
    if config.api.enable_docs {
        router = router.route("/api-docs/openapi.json", get(openapi_json));
    }
    if config.api.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }
    let router = router.layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;
    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = signals::wait_for_shutdown().await {
                tracing::error!(error = %e, "Shutdown signal handler failed");
            }
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
