//! pennywise CLI - runs the PennyWise backend
//!
//! Subcommands:
//! - `serve`: start the HTTP server
//! - `check-db`: acquire the database once and ping it

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::{check_db, serve};

#[derive(Parser, Debug)]
#[command(
    name = "pennywise",
    author,
    version,
    about = "PennyWise personal-finance backend",
    long_about = "Serves the PennyWise health endpoints and Nessie proxy. \
                  Configuration comes from the environment, ./.env and ~/.pennywise/.env."
)]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),

    /// Check database connectivity using MONGO_SRV and DATABASE
    CheckDb,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    let loaded = pennywise_core::load_dotenv();
    for path in &loaded {
        tracing::info!("Loaded configuration from {}", path.display());
    }

    match cli.command {
        Commands::Serve(args) => serve::run_serve(args).await,
        Commands::CheckDb => check_db::run_check_db().await,
    }
}
