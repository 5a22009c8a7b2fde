//! FormCraft API server

use anyhow::Context;
use clap::Parser;
use formcraft_api::{build_router, ApiConfig, ApiState};
use formcraft_core::{FormGateway, FormService, InMemoryFormGateway};
use formcraft_pg::{PgFormGateway, PgGatewayConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "formcraft-api")]
#[command(author, version, about = "FormCraft form builder API")]
struct Cli {
    /// Config file
    #[arg(short, long, env = "FORMCRAFT_CONFIG", default_value = "formcraft.toml")]
    config: PathBuf,

    /// Listen address, overrides the config file
    #[arg(short, long, env = "FORMCRAFT_BIND")]
    bind: Option<String>,

    /// PostgreSQL URL, overrides the config file
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Apply migrations before serving
    #[arg(long)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ApiConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(url) = cli.database_url {
        config
            .database
            .get_or_insert_with(|| PgGatewayConfig::new(""))
            .database_url = url;
    }
    config.migrate_on_start |= cli.migrate;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let gateway: Arc<dyn FormGateway> = match &config.database {
        Some(db) => {
            let pg = PgFormGateway::connect(db)
                .await
                .context("connecting to postgres")?;
            if config.migrate_on_start {
                pg.migrate().await.context("running migrations")?;
                tracing::info!("migrations applied");
            }
            Arc::new(pg)
        }
        None => {
            tracing::warn!("no database configured, forms are kept in memory");
            Arc::new(InMemoryFormGateway::new())
        }
    };

    let state = ApiState::new(Arc::new(FormService::new(gateway)))
        .context("registering templates")?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!("FormCraft API listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
