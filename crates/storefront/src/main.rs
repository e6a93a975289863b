//! Render one listing page as JSON.
//!
//! Usage: `belajar-catalog-preview [search] [age-category] [activity] [sort] [page]`
//! Empty arguments (and `all` / `semua` for the facets) leave that input unset.

use std::sync::Arc;

use anyhow::Context;
use serde_json::json;

use belajar_catalog::{Catalog, SortOption, Taxonomy};
use belajar_storefront::{ListingPage, StorefrontConfig};

fn main() -> anyhow::Result<()> {
    belajar_observability::init();

    let config = StorefrontConfig::from_env();
    let taxonomy = Taxonomy::bundled().context("failed to load bundled taxonomy")?;
    let catalog = Arc::new(Catalog::bundled().context("failed to load bundled catalog")?);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |index: usize| args.get(index).map(String::as_str).unwrap_or("");

    let mut listing = ListingPage::with_catalog(catalog, &config);
    listing.set_search(arg(0));
    listing.select_age_category(taxonomy.parse_age_category(arg(1))?);
    listing.select_activity(taxonomy.parse_activity(arg(2))?);
    if !arg(3).is_empty() {
        listing.set_sort(arg(3).parse::<SortOption>()?);
    }
    if !arg(4).is_empty() {
        let page: usize = arg(4)
            .parse()
            .with_context(|| format!("page must be a positive number, got {:?}", arg(4)))?;
        listing.go_to_page(page);
    }

    tracing::info!(
        search = %listing.filter().search,
        sort = %listing.sort(),
        page = listing.page(),
        "rendering catalog preview"
    );

    let output = json!({
        "view": listing.view(),
        "facets": listing.facet_counts(),
        "age_category_label": listing
            .filter()
            .age_category
            .selected()
            .and_then(|id| taxonomy.age_category_label(id)),
        "activity_label": listing
            .filter()
            .activity
            .selected()
            .and_then(|id| taxonomy.activity_label(id)),
        "sort_label": taxonomy.sort_label(listing.sort()),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
