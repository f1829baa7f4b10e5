//! Route handlers
//!
//! - root: app banner
//! - health: liveness and database connectivity
//! - settings: Nessie customers proxy

pub mod health;
pub mod root;
pub mod settings;
