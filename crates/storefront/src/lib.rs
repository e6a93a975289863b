//! `belajar-storefront`
//!
//! **Responsibility:** state owned by the catalog pages.
//!
//! This crate provides:
//! - The listing page state (filters, sort, current page) and its reset policy
//! - The session favorites set
//! - The product detail overlay with its preview gallery
//! - Environment configuration
//!
//! Rendering is left to the caller; everything here is plain data.

pub mod config;
pub mod detail;
pub mod favorites;
pub mod listing;

pub use config::StorefrontConfig;
pub use detail::ProductDetail;
pub use favorites::Favorites;
pub use listing::{ListingPage, ListingView};
