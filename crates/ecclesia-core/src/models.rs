//! Domain models for Ecclesia.
//!
//! Every entity is a flat record keyed by a `Uuid` and (except tenants,
//! which are global) scoped to a tenant. Relationships are id references
//! resolved at read time into `*View` types.

pub mod audit;
pub mod event;
pub mod finance;
pub mod group;
pub mod material;
pub mod media;
pub mod member;
pub mod message;
pub mod newcomer;
pub mod role;
pub mod staff;
pub mod team;
pub mod tenant;
pub mod training;
pub mod user;
pub mod volunteer;
