//! # EcoAlbum Server
//!
//! HTTP API for a catalog of protected fauna and flora species.
//!
//! The server is built on Axum and uses PostgreSQL for persistent storage.
//! It serves the gallery carousel endpoints (featured, random, statistics),
//! the conservation-status catalog, and species listings with
//! client-controlled sparse fieldsets.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecoalbum_core::{PostgresSpeciesRepository, SpeciesRepository};
use ecoalbum_server::{
    AppState,
    infra::config::{Config, validate_database_url},
    routes,
};

#[derive(Parser, Debug)]
#[command(name = "ecoalbum-server")]
#[command(about = "Catalog API for protected fauna and flora species")]
struct Cli {
    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    validate_database_url(&config.database.url)?;

    info!("connecting to PostgreSQL");
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database.url)
        .await
        .context("failed to connect to PostgreSQL")?;

    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!("../ecoalbum-core/migrations")
            .run(&pool)
            .await
            .context("failed to run migrations")?;
    }

    let repo: Arc<dyn SpeciesRepository> = Arc::new(PostgresSpeciesRepository::new(pool));
    let state = AppState::new(repo, config.clone());
    let app = routes::create_app(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server host/port")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("listening on {addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
    }
    info!("shutdown signal received");
}
