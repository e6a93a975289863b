//! Listing page state: the single owner of filter, sort and page selection.
//!
//! The query engine is stateless, so the rules tying those inputs together
//! live here:
//! - any change to the search term or a facet sends the page back to 1
//! - the stored page is always within `1..=total_pages`

use std::sync::Arc;

use serde::Serialize;

use belajar_catalog::{
    Catalog, Facet, FacetCounts, Page, PageSize, Product, ProductFilter, QueryRequest, SortOption,
    facet_counts, filter_products, run_query, total_pages,
};
use belajar_core::{ActivityId, AgeCategoryId};

use crate::config::StorefrontConfig;

/// What the listing should render right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "page", rename_all = "snake_case")]
pub enum ListingView<'a> {
    /// The catalog has not been handed to the page yet.
    NotLoaded,
    /// Loaded, but nothing matches; render the empty state with a reset action.
    Empty,
    Results(Page<&'a Product>),
}

#[derive(Debug, Clone)]
pub struct ListingPage {
    catalog: Option<Arc<Catalog>>,
    filter: ProductFilter,
    sort: SortOption,
    page: usize,
    page_size: PageSize,
}

impl ListingPage {
    /// A page whose catalog is still loading.
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            catalog: None,
            filter: ProductFilter::default(),
            sort: config.default_sort,
            page: 1,
            page_size: config.page_size,
        }
    }

    pub fn with_catalog(catalog: Arc<Catalog>, config: &StorefrontConfig) -> Self {
        let mut listing = Self::new(config);
        listing.load(catalog);
        listing
    }

    /// Attach (or replace) the catalog and return to the first page.
    pub fn load(&mut self, catalog: Arc<Catalog>) {
        tracing::debug!(products = catalog.len(), "listing catalog loaded");
        self.catalog = Some(catalog);
        self.page = 1;
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Returns whether the term changed (and the page was reset).
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.filter.search == term {
            return false;
        }
        self.filter.search = term;
        self.filter_changed();
        true
    }

    pub fn select_age_category(&mut self, facet: Facet<AgeCategoryId>) -> bool {
        if self.filter.age_category == facet {
            return false;
        }
        self.filter.age_category = facet;
        self.filter_changed();
        true
    }

    pub fn select_activity(&mut self, facet: Facet<ActivityId>) -> bool {
        if self.filter.activity == facet {
            return false;
        }
        self.filter.activity = facet;
        self.filter_changed();
        true
    }

    /// Change the sort order. The page is kept; sorting never changes the
    /// page count.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    /// Clear search and both facets (the empty-state reset action).
    pub fn reset_filters(&mut self) {
        if !self.filter.is_unfiltered() {
            self.filter = ProductFilter::default();
            self.filter_changed();
        }
    }

    /// Jump to `page`, clamped into `1..=total_pages`.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    /// `max(1, ceil(matches / page_size))` for the current filter.
    pub fn total_pages(&self) -> usize {
        match &self.catalog {
            Some(catalog) => {
                total_pages(filter_products(catalog.products(), &self.filter).len(), self.page_size)
            }
            None => 1,
        }
    }

    pub fn request(&self) -> QueryRequest {
        QueryRequest {
            filter: self.filter.clone(),
            sort: self.sort,
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn view(&self) -> ListingView<'_> {
        let Some(catalog) = &self.catalog else {
            return ListingView::NotLoaded;
        };
        let page = run_query(catalog.products(), &self.request());
        if page.total_items == 0 {
            ListingView::Empty
        } else {
            ListingView::Results(page)
        }
    }

    /// Badge counts for the filter controls; `None` until loaded.
    pub fn facet_counts(&self) -> Option<FacetCounts> {
        self.catalog
            .as_ref()
            .map(|catalog| facet_counts(catalog.products(), &self.filter))
    }

    fn filter_changed(&mut self) {
        self.page = 1;
        tracing::debug!(
            search = %self.filter.search,
            age_category = ?self.filter.age_category.selected(),
            activity = ?self.filter.activity.selected(),
            "listing filter changed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> ListingPage {
        let catalog = Arc::new(Catalog::bundled().unwrap());
        ListingPage::with_catalog(catalog, &StorefrontConfig::default())
    }

    fn results(view: ListingView<'_>) -> Page<&Product> {
        match view {
            ListingView::Results(page) => page,
            other => panic!("Expected results, got {other:?}"),
        }
    }

    #[test]
    fn not_loaded_is_distinct_from_empty() {
        let listing = ListingPage::new(&StorefrontConfig::default());
        assert!(!listing.is_loaded());
        assert_eq!(listing.view(), ListingView::NotLoaded);
        assert!(listing.facet_counts().is_none());
        assert_eq!(listing.total_pages(), 1);
    }

    #[test]
    fn search_change_resets_page() {
        let mut listing = loaded();
        listing.go_to_page(2);
        assert_eq!(listing.page(), 2);

        assert!(listing.set_search("alfabet"));
        assert_eq!(listing.page(), 1);
    }

    #[test]
    fn unchanged_search_keeps_page() {
        let mut listing = loaded();
        listing.go_to_page(3);
        assert!(!listing.set_search(""));
        assert_eq!(listing.page(), 3);
    }

    #[test]
    fn facet_change_resets_page() {
        let mut listing = loaded();
        listing.go_to_page(2);
        assert!(listing.select_activity(Facet::Only(ActivityId::new("sains").unwrap())));
        assert_eq!(listing.page(), 1);

        listing.go_to_page(2);
        assert!(!listing.select_activity(Facet::Only(ActivityId::new("sains").unwrap())));
        // only two sains products: a single page, so the request was clamped
        assert_eq!(listing.page(), 1);
    }

    #[test]
    fn sort_change_keeps_page() {
        let mut listing = loaded();
        listing.go_to_page(2);
        listing.set_sort(SortOption::PriceAsc);
        assert_eq!(listing.page(), 2);
        let page = results(listing.view());
        assert_eq!(page.current_page, 2);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut listing = loaded();
        listing.previous_page();
        assert_eq!(listing.page(), 1);
        listing.go_to_page(99);
        assert_eq!(listing.page(), 3);
        listing.next_page();
        assert_eq!(listing.page(), 3);
        listing.previous_page();
        assert_eq!(listing.page(), 2);
    }

    #[test]
    fn no_matches_renders_empty_then_reset_restores() {
        let mut listing = loaded();
        listing.set_search("dinosaurus");
        assert_eq!(listing.view(), ListingView::Empty);

        listing.reset_filters();
        assert!(listing.filter().is_unfiltered());
        let page = results(listing.view());
        assert_eq!(page.total_items, 14);
    }

    #[test]
    fn default_sort_comes_from_config() {
        let config = StorefrontConfig {
            default_sort: SortOption::PriceAsc,
            ..StorefrontConfig::default()
        };
        let listing = ListingPage::with_catalog(Arc::new(Catalog::bundled().unwrap()), &config);
        let page = results(listing.view());
        assert_eq!(page.items[0].price, 20_000);
    }

    #[test]
    fn view_serializes_with_state_tag() {
        let listing = ListingPage::new(&StorefrontConfig::default());
        let json = serde_json::to_value(listing.view()).unwrap();
        assert_eq!(json["state"], "not_loaded");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Action {
            GoTo(usize),
            Next,
            Previous,
            Search(&'static str),
            AgeCategory(Option<&'static str>),
            Activity(Option<&'static str>),
            Sort(SortOption),
            ResetFilters,
        }

        fn arb_action() -> impl Strategy<Value = Action> {
            prop_oneof![
                (0usize..8).prop_map(Action::GoTo),
                Just(Action::Next),
                Just(Action::Previous),
                prop::sample::select(vec!["", "alfabet", "cerita", "a", "dinosaurus"])
                    .prop_map(Action::Search),
                prop::option::of(prop::sample::select(vec!["balita", "prasekolah", "sd-awal"]))
                    .prop_map(Action::AgeCategory),
                prop::option::of(prop::sample::select(vec![
                    "alfabet",
                    "berhitung",
                    "mewarnai",
                    "sains",
                    "cerita",
                ]))
                .prop_map(Action::Activity),
                prop::sample::select(SortOption::ALL.to_vec()).prop_map(Action::Sort),
                Just(Action::ResetFilters),
            ]
        }

        /// Apply one action; returns whether the filter changed.
        fn apply(listing: &mut ListingPage, action: &Action) -> bool {
            match action {
                Action::GoTo(page) => {
                    listing.go_to_page(*page);
                    false
                }
                Action::Next => {
                    listing.next_page();
                    false
                }
                Action::Previous => {
                    listing.previous_page();
                    false
                }
                Action::Search(term) => listing.set_search(*term),
                Action::AgeCategory(raw) => listing.select_age_category(match raw {
                    Some(raw) => Facet::Only(AgeCategoryId::new(*raw).unwrap()),
                    None => Facet::NoFilter,
                }),
                Action::Activity(raw) => listing.select_activity(match raw {
                    Some(raw) => Facet::Only(ActivityId::new(*raw).unwrap()),
                    None => Facet::NoFilter,
                }),
                Action::Sort(sort) => {
                    listing.set_sort(*sort);
                    false
                }
                Action::ResetFilters => {
                    let was_filtered = !listing.filter().is_unfiltered();
                    listing.reset_filters();
                    was_filtered
                }
            }
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 300,
                ..ProptestConfig::default()
            })]

            /// Property: after any sequence of interactions the stored page is
            /// within `1..=total_pages` and is the page the view renders.
            #[test]
            fn stored_page_matches_rendered_page(
                page_size in 1usize..8,
                actions in prop::collection::vec(arb_action(), 0..40)
            ) {
                let config = StorefrontConfig {
                    page_size: PageSize::new(page_size).unwrap(),
                    ..StorefrontConfig::default()
                };
                let mut listing =
                    ListingPage::with_catalog(Arc::new(Catalog::bundled().unwrap()), &config);

                for action in &actions {
                    let filter_changed = apply(&mut listing, action);
                    if filter_changed {
                        prop_assert_eq!(listing.page(), 1);
                    }

                    let total = listing.total_pages();
                    prop_assert!(listing.page() >= 1);
                    prop_assert!(listing.page() <= total);

                    match listing.view() {
                        ListingView::Results(page) => {
                            prop_assert_eq!(page.current_page, listing.page());
                            prop_assert_eq!(page.total_pages, total);
                        }
                        ListingView::Empty => prop_assert_eq!(listing.page(), 1),
                        ListingView::NotLoaded => prop_assert!(false, "catalog is loaded"),
                    }
                }
            }
        }
    }
}
