//! MongoDB driver binding for the connection manager

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Client, Database};

use crate::connection::{ConnectionManager, Connector};
use crate::error::BoxError;

/// Connection manager backed by the official MongoDB driver
pub type MongoManager = ConnectionManager<MongoConnector>;

/// Opens `mongodb::Client`s.
///
/// The driver keeps its own internal pool per client; the manager treats
/// the client as a single connection.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

#[async_trait]
impl Connector for MongoConnector {
    type Client = Client;
    type Database = Database;

    async fn connect(&self, uri: &str) -> Result<Client, BoxError> {
        // Parses the URI (and resolves SRV records); server selection is lazy.
        Ok(Client::with_uri_str(uri).await?)
    }

    fn database(&self, client: &Client, name: &str) -> Database {
        client.database(name)
    }

    fn database_name(&self, database: &Database) -> String {
        database.name().to_string()
    }

    async fn ping(&self, database: &Database) -> Result<(), BoxError> {
        database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn close(&self, client: Client) -> Result<(), BoxError> {
        client.shutdown().await;
        Ok(())
    }
}

impl MongoManager {
    /// Manager reading `MONGO_SRV` / `DATABASE` from the process environment
    pub fn from_env() -> Self {
        ConnectionManager::new(MongoConnector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[tokio::test]
    async fn malformed_uri_is_a_connection_error() {
        let env: HashMap<String, String> = [
            ("MONGO_SRV".to_string(), "not-a-mongo-uri".to_string()),
            ("DATABASE".to_string(), "test".to_string()),
        ]
        .into_iter()
        .collect();
        let manager = ConnectionManager::with_env(MongoConnector, Arc::new(env));

        let err = manager.acquire().await.unwrap_err();
        assert!(matches!(err, DbError::Connection { .. }));
        assert!(err
            .to_string()
            .starts_with("unable to connect to the database: "));
        assert!(!manager.is_connected().await);
    }

    #[tokio::test]
    async fn lazy_client_resolves_named_database() {
        let env: HashMap<String, String> = [
            ("MONGO_SRV".to_string(), "mongodb://localhost:27017".to_string()),
            ("DATABASE".to_string(), "test".to_string()),
        ]
        .into_iter()
        .collect();
        let manager = ConnectionManager::with_env(MongoConnector, Arc::new(env));

        let database = manager.acquire().await.unwrap();
        assert_eq!(database.name(), "test");
        manager.release().await;
    }
}
