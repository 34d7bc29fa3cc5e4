//! GameVerse Nexus: status API backend for the GameVerse Nexus game portal.
//!
//! Exposes `GET /` (service banner) and `GET /api/status` (liveness) as JSON.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use crate::config::AppConfig;
pub use crate::error::Error;
pub use crate::http::start_server;
pub use crate::routes::create_router;
