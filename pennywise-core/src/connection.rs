//! Database connection lifecycle
//!
//! A [`ConnectionManager`] holds at most one live client per instance.
//! The first [`acquire`](ConnectionManager::acquire) opens it, later calls
//! return the cached database handle, and [`release`](ConnectionManager::release)
//! closes it. Both operations take the same lock, so concurrent first-time
//! acquires open exactly one connection and a release never interleaves with
//! an in-progress acquire.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::{DatabaseSettings, EnvSource, ProcessEnv};
use crate::error::{BoxError, DbError, Result};

/// Driver seam: how to open, address, ping and close a database client.
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    type Client: Send + 'static;
    type Database: Clone + Send + Sync + 'static;

    /// Open a client for the given connection string
    async fn connect(&self, uri: &str) -> std::result::Result<Self::Client, BoxError>;

    /// Resolve a named database within an open client
    fn database(&self, client: &Self::Client, name: &str) -> Self::Database;

    /// Name of a resolved database
    fn database_name(&self, database: &Self::Database) -> String;

    /// Issue a no-op command against the database
    async fn ping(&self, database: &Self::Database) -> std::result::Result<(), BoxError>;

    /// Close a client
    async fn close(&self, client: Self::Client) -> std::result::Result<(), BoxError>;
}

/// Observable state of a manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Connected,
}

// Client and database are set and cleared together.
struct ConnectionState<C: Connector> {
    client: C::Client,
    database: C::Database,
}

/// Owns the shared database handle
pub struct ConnectionManager<C: Connector> {
    connector: C,
    env: Arc<dyn EnvSource>,
    state: Mutex<Option<ConnectionState<C>>>,
}

impl<C: Connector> ConnectionManager<C> {
    /// Manager that reads `MONGO_SRV` / `DATABASE` from the process environment
    pub fn new(connector: C) -> Self {
        Self::with_env(connector, Arc::new(ProcessEnv))
    }

    /// Manager with an explicit configuration source
    pub fn with_env(connector: C, env: Arc<dyn EnvSource>) -> Self {
        Self {
            connector,
            env,
            state: Mutex::new(None),
        }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Return the active database handle, opening a connection if none exists.
    ///
    /// # Errors
    ///
    /// [`DbError::Configuration`] when `MONGO_SRV` or `DATABASE` is missing,
    /// [`DbError::Connection`] when the driver fails to connect. The manager
    /// stays disconnected in both cases.
    pub async fn acquire(&self) -> Result<C::Database> {
        let mut state = self.state.lock().await;

        if let Some(existing) = state.as_ref() {
            return Ok(existing.database.clone());
        }

        let settings = DatabaseSettings::from_source(self.env.as_ref())?;
        debug!(database = %settings.name, "Opening database connection");

        let client = self
            .connector
            .connect(&settings.uri)
            .await
            .map_err(DbError::connection)?;
        let database = self.connector.database(&client, &settings.name);

        *state = Some(ConnectionState {
            client,
            database: database.clone(),
        });
        info!(database = %settings.name, "Database connection opened");

        Ok(database)
    }

    /// Close the active connection, if any. Close failures are logged and ignored.
    pub async fn release(&self) {
        let mut state = self.state.lock().await;

        let Some(current) = state.take() else {
            debug!("Release requested with no open connection");
            return;
        };

        let name = self.connector.database_name(&current.database);
        match self.connector.close(current.client).await {
            Ok(()) => info!(database = %name, "Database connection closed"),
            Err(e) => warn!(database = %name, error = %e, "Error closing database connection"),
        }
    }

    /// Acquire and issue a ping. Returns the database name.
    pub async fn ping(&self) -> Result<String> {
        let database = self.acquire().await?;
        self.connector
            .ping(&database)
            .await
            .map_err(DbError::command)?;
        Ok(self.connector.database_name(&database))
    }

    pub async fn status(&self) -> ConnectionStatus {
        if self.state.lock().await.is_some() {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.status().await == ConnectionStatus::Connected
    }
}

/// Object-safe view of a manager for consumers that don't care about the driver
#[async_trait]
pub trait DatabaseLifecycle: Send + Sync {
    /// Acquire the handle and ping it, returning the database name
    async fn ping(&self) -> Result<String>;

    async fn release(&self);

    async fn status(&self) -> ConnectionStatus;
}

#[async_trait]
impl<C: Connector> DatabaseLifecycle for ConnectionManager<C> {
    async fn ping(&self) -> Result<String> {
        ConnectionManager::ping(self).await
    }

    async fn release(&self) {
        ConnectionManager::release(self).await
    }

    async fn status(&self) -> ConnectionStatus {
        ConnectionManager::status(self).await
    }
}
