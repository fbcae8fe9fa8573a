//! REST API server for the Ecclesia church-management backend.
//!
//! Exposes the tenant-scoped repositories over HTTP under `/v1`. The
//! router is built separately from the listener so tests can drive it
//! with `tower::ServiceExt::oneshot` without binding a socket.

pub mod config;
pub mod error;
pub mod http;

pub use config::ServerConfig;
pub use http::build_router;
