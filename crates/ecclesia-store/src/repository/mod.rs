//! Repository trait implementations backed by [`crate::MemoryStore`].
//!
//! One module per entity family, mirroring the model layout. Every impl
//! follows the same shape: validate input (references included), stamp
//! id and timestamps, delegate to the generic table.

mod audit;
mod event;
mod finance;
mod group;
mod material;
mod media;
mod member;
mod message;
mod newcomer;
mod projection;
mod role;
mod staff;
mod team;
mod tenant;
mod training;
mod user;
mod volunteer;
