//! `belajar-core` — shared building blocks for the catalog crates.
//!
//! This crate contains **pure domain** primitives (identifiers, the boundary
//! error type, entity / value-object markers). No IO, no rendering.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ActivityId, AgeCategoryId, ProductId};
pub use value_object::ValueObject;
