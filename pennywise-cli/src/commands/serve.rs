//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use pennywise_core::{MongoManager, Settings};
use pennywise_server::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides HOST/PORT)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Name reported by GET / (overrides APP_NAME)
    #[arg(long)]
    pub app_name: Option<String>,

    /// Extra allowed CORS origin (overrides FRONTEND_URL)
    #[arg(long)]
    pub frontend_url: Option<String>,
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut settings = Settings::from_env();
    if let Some(app_name) = args.app_name {
        settings.app_name = app_name;
    }
    if let Some(frontend_url) = args.frontend_url {
        settings.frontend_url = Some(frontend_url);
    }

    let mut config = ServerConfig::from_settings(&settings);
    if let Some(bind) = args.bind {
        config = config.with_bind(bind);
    }

    let database = Arc::new(MongoManager::from_env());
    let state = AppState::new(settings, database);

    run_server(state, config).await.context("Server error")?;

    Ok(())
}
