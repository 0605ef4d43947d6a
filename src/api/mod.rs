//! HTTP surface for symptom analysis.
//!
//! Routes: `GET /health`, `POST /analyze`, `GET /conditions`,
//! `GET /conditions/:id`. The router is composable: `api_router()`
//! returns a `Router` that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server_on, ApiServer, ServerError, ServerSession};
pub use types::ApiContext;
