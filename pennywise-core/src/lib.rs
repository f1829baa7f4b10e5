//! pennywise-core: configuration and database lifecycle for the PennyWise backend
//!
//! The [`ConnectionManager`] owns the single shared database handle of the
//! process. Everything that needs the database goes through
//! [`ConnectionManager::acquire`] and [`ConnectionManager::release`].

pub mod config;
pub mod connection;
pub mod error;
pub mod mongo;

pub use config::{load_dotenv, DatabaseSettings, EnvSource, ProcessEnv, Settings};
pub use connection::{ConnectionManager, ConnectionStatus, Connector, DatabaseLifecycle};
pub use error::{BoxError, DbError, Result};
pub use mongo::{MongoConnector, MongoManager};
