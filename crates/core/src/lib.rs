//! `storefront-core` : domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog, cart
//! and checkout crates (no IO, no rendering).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use aggregate::{Aggregate, AggregateRoot};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use money::Money;
