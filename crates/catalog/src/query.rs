//! Catalog query engine: filter -> sort -> paginate.
//!
//! Every function here is pure. Inputs are borrowed and never mutated; results
//! are fresh sequences of references into the catalog. The engine keeps no
//! state between calls, so the owner of the listing page is responsible for
//! policies such as returning to page 1 when a filter changes.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use belajar_core::{ActivityId, AgeCategoryId};

use crate::pagination::{Page, PageSize, paginate};
use crate::product::Product;
use crate::taxonomy::{Facet, SortOption};

/// Filter inputs; all active predicates must hold (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Free text, matched case-insensitively against title and description.
    pub search: String,
    pub age_category: Facet<AgeCategoryId>,
    pub activity: Facet<ActivityId>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_age_category(mut self, facet: Facet<AgeCategoryId>) -> Self {
        self.age_category = facet;
        self
    }

    pub fn with_activity(mut self, facet: Facet<ActivityId>) -> Self {
        self.activity = facet;
        self
    }

    /// True when no predicate is active.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && !self.age_category.is_active() && !self.activity.is_active()
    }

    fn admits(&self, product: &Product, needle: &str) -> bool {
        self.age_category.admits(&product.age_category)
            && self.activity.admits(&product.activity)
            && product.matches_lowercased(needle)
    }
}

/// Keep the products passing `filter`, in source order.
pub fn filter_products<'a, I>(products: I, filter: &ProductFilter) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = filter.search.to_lowercase();
    products
        .into_iter()
        .filter(|product| filter.admits(product, &needle))
        .collect()
}

/// Stable sort by the key `sort` implies; `Featured` keeps the input order.
///
/// Products missing an optional key (rating, release date) go after those that
/// have one.
pub fn sort_products<'a>(products: &[&'a Product], sort: SortOption) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    match sort {
        SortOption::Featured => {}
        SortOption::PriceAsc => sorted.sort_by_key(|p| p.price),
        SortOption::PriceDesc => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOption::RatingDesc => {
            sorted.sort_by(|a, b| descending_present_first(a.rating, b.rating, f32::total_cmp))
        }
        SortOption::Newest => sorted.sort_by(|a, b| {
            descending_present_first(a.released_on, b.released_on, |x, y| x.cmp(y))
        }),
    }
    sorted
}

fn descending_present_first<T>(
    a: Option<T>,
    b: Option<T>,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&b, &a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Everything one listing render needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub filter: ProductFilter,
    pub sort: SortOption,
    /// 1-based; clamped by [`paginate`].
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            filter: ProductFilter::default(),
            sort: SortOption::default(),
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

/// Run the full pipeline over `products`.
pub fn run_query<'a>(products: &'a [Product], request: &QueryRequest) -> Page<&'a Product> {
    let filtered = filter_products(products, &request.filter);
    let sorted = sort_products(&filtered, request.sort);
    let page = paginate(&sorted, request.page, request.page_size);

    tracing::debug!(
        search = %request.filter.search,
        sort = %request.sort,
        requested_page = request.page,
        current_page = page.current_page,
        total_pages = page.total_pages,
        matched = page.total_items,
        "catalog query"
    );

    page
}

/// Result counts for the filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    /// Products matching the full filter.
    pub total: usize,
    /// Per age category, with the age-category facet ignored.
    pub age_categories: BTreeMap<AgeCategoryId, usize>,
    /// Per activity, with the activity facet ignored.
    pub activities: BTreeMap<ActivityId, usize>,
}

/// Count matches per facet value.
///
/// Each axis is counted as if it were unfiltered while the search term and
/// the other axis still apply, so a badge shows what selecting that value
/// would return.
pub fn facet_counts(products: &[Product], filter: &ProductFilter) -> FacetCounts {
    let mut counts = FacetCounts {
        total: filter_products(products, filter).len(),
        ..FacetCounts::default()
    };

    let without_age = ProductFilter {
        age_category: Facet::NoFilter,
        ..filter.clone()
    };
    for product in filter_products(products, &without_age) {
        *counts
            .age_categories
            .entry(product.age_category.clone())
            .or_default() += 1;
    }

    let without_activity = ProductFilter {
        activity: Facet::NoFilter,
        ..filter.clone()
    };
    for product in filter_products(products, &without_activity) {
        *counts.activities.entry(product.activity.clone()).or_default() += 1;
    }

    counts
}
