//! Ecclesia Core — Domain models, repository contracts and error types.
//!
//! These are the core types shared across all crates. The repository
//! traits define the tenant-scoped CRUD contract; `ecclesia-store`
//! provides the in-memory implementation and `ecclesia-server` exposes
//! it over HTTP.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{EcclesiaError, EcclesiaResult};
