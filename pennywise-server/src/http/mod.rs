//! HTTP server layer
//!
//! Axum server with:
//! - CORS restricted to the frontend origins
//! - Request tracing
//! - Graceful shutdown that releases the database connection
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{
    build_router, check_database, run_server, run_server_with_shutdown, ServerConfig, ServerError,
};
