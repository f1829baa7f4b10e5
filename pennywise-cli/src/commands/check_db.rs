//! Database connectivity check

use anyhow::{Context, Result};
use pennywise_core::MongoManager;

/// Acquire once, ping, release
pub async fn run_check_db() -> Result<()> {
    let manager = MongoManager::from_env();

    let result = manager.ping().await;
    manager.release().await;

    let name = result.context("Database check failed")?;
    println!("Connected to MongoDB database '{}'", name);
    Ok(())
}
