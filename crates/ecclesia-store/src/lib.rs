//! Ecclesia Store — In-memory repository implementations.
//!
//! This crate provides:
//! - [`MemoryStore`], an explicit store object owning one ordered
//!   collection per entity type (no global mutable state)
//! - Implementations of every `ecclesia-core` repository trait
//! - Demo seed data for a sample tenant
//!
//! The store is cheap to clone (shared `Arc`) and is constructed once
//! per process, or per test for isolation.

mod repository;
mod seed;
mod store;
mod table;

pub use store::MemoryStore;
