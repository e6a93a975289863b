//! The static product catalog and loading of the bundled fixture.

use std::collections::HashMap;

use thiserror::Error;

use belajar_core::{ActivityId, AgeCategoryId, ProductId};

use crate::product::Product;
use crate::taxonomy::Taxonomy;

const BUNDLED_PRODUCTS: &str = include_str!("../data/products.json");

/// Fixture integrity failures. The query engine assumes none of these occur.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    #[error("product {id}: required field `{field}` is empty")]
    EmptyField { id: ProductId, field: &'static str },

    #[error("product {0}: preview list is present but empty")]
    EmptyPreviews(ProductId),

    #[error("product {id}: rating {rating} outside 0.0..=5.0")]
    RatingOutOfRange { id: ProductId, rating: f32 },

    #[error("product {id}: unknown age category `{category}`")]
    UnknownAgeCategory { id: ProductId, category: AgeCategoryId },

    #[error("product {id}: unknown activity `{activity}`")]
    UnknownActivity { id: ProductId, activity: ActivityId },
}

/// Immutable, ordered product collection with lookup by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, checking per-record integrity and id uniqueness.
    pub fn new(products: Vec<Product>) -> Result<Self, FixtureError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            validate_product(product)?;
            if index.insert(product.id, position).is_some() {
                return Err(FixtureError::DuplicateId(product.id));
            }
        }
        Ok(Self { products, index })
    }

    /// Parse and validate a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Like [`Catalog::from_json`], additionally requiring every product to
    /// reference ids known to `taxonomy`.
    pub fn from_json_with_taxonomy(json: &str, taxonomy: &Taxonomy) -> Result<Self, FixtureError> {
        let catalog = Self::from_json(json)?;
        for product in &catalog.products {
            if !taxonomy.has_age_category(&product.age_category) {
                return Err(FixtureError::UnknownAgeCategory {
                    id: product.id,
                    category: product.age_category.clone(),
                });
            }
            if !taxonomy.has_activity(&product.activity) {
                return Err(FixtureError::UnknownActivity {
                    id: product.id,
                    activity: product.activity.clone(),
                });
            }
        }
        Ok(catalog)
    }

    /// The fixture compiled into this crate, checked against the bundled taxonomy.
    pub fn bundled() -> Result<Self, FixtureError> {
        let taxonomy = Taxonomy::bundled()?;
        let catalog = Self::from_json_with_taxonomy(BUNDLED_PRODUCTS, &taxonomy)
            .inspect_err(|err| tracing::warn!("bundled catalog failed integrity checks: {err}"))?;
        tracing::info!(products = catalog.len(), "loaded bundled catalog");
        Ok(catalog)
    }

    /// All products in fixture order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn validate_product(product: &Product) -> Result<(), FixtureError> {
    let id = product.id;
    let required = [
        ("title", &product.title),
        ("description", &product.description),
        ("image", &product.image),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(FixtureError::EmptyField { id, field });
        }
    }
    if product.previews.as_ref().is_some_and(Vec::is_empty) {
        return Err(FixtureError::EmptyPreviews(id));
    }
    if let Some(rating) = product.rating {
        if !(0.0..=5.0).contains(&rating) {
            return Err(FixtureError::RatingOutOfRange { id, rating });
        }
    }
    Ok(())
}
