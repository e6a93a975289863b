use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use belajar_catalog::{
    Catalog, Facet, PageSize, Product, ProductFilter, QueryRequest, SortOption, facet_counts,
    run_query,
};
use belajar_core::{AgeCategoryId, ProductId};

/// Bundled fixture repeated until it holds `size` products (ids renumbered).
fn scaled_catalog(size: usize) -> Vec<Product> {
    let base = Catalog::bundled().expect("bundled catalog");
    base.products()
        .iter()
        .cycle()
        .take(size)
        .enumerate()
        .map(|(i, product)| {
            let mut product = product.clone();
            product.id = ProductId::new(i as u32 + 1);
            product
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_query");

    for size in [14usize, 1_000, 10_000] {
        let products = scaled_catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        let unfiltered = QueryRequest::default();
        group.bench_with_input(BenchmarkId::new("unfiltered", size), &products, |b, products| {
            b.iter(|| run_query(black_box(products), black_box(&unfiltered)))
        });

        let searched = QueryRequest {
            filter: ProductFilter::new()
                .with_search("alfabet")
                .with_age_category(Facet::Only(AgeCategoryId::new("prasekolah").expect("slug"))),
            sort: SortOption::PriceAsc,
            page: 2,
            page_size: PageSize::DEFAULT,
        };
        group.bench_with_input(BenchmarkId::new("search_sort", size), &products, |b, products| {
            b.iter(|| run_query(black_box(products), black_box(&searched)))
        });

        group.bench_with_input(BenchmarkId::new("facet_counts", size), &products, |b, products| {
            b.iter(|| facet_counts(black_box(products), black_box(&searched.filter)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
