//! Catalog domain module.
//!
//! This crate contains the product model, the fixed taxonomy, loading of the
//! bundled fixture and the query engine (filter -> sort -> paginate). All of it
//! is deterministic and side-effect free apart from logging.

pub mod catalog;
pub mod pagination;
pub mod product;
pub mod query;
pub mod taxonomy;

pub use catalog::{Catalog, FixtureError};
pub use pagination::{Page, PageSize, paginate, total_pages};
pub use product::Product;
pub use query::{
    FacetCounts, ProductFilter, QueryRequest, facet_counts, filter_products, run_query,
    sort_products,
};
pub use taxonomy::{Facet, SortChoice, SortOption, Taxonomy, TaxonomyEntry};
