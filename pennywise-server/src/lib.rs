//! pennywise-server: HTTP surface of the PennyWise backend
//!
//! Health checks, a database connectivity check and a proxy for the
//! Nessie banking sandbox.

pub mod http;
pub mod state;
pub mod upstream;

pub use http::{
    build_router, run_server, run_server_with_shutdown, ApiError, ServerConfig, ServerError,
};
pub use state::AppState;
pub use upstream::{NessieClient, UpstreamError};
