//! Product detail overlay and its preview gallery.

use belajar_catalog::{Catalog, Product};
use belajar_core::{DomainError, DomainResult, ProductId};

/// An open detail overlay for one product.
///
/// The gallery is the primary image followed by the previews. Stepping past
/// either end wraps around.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail<'a> {
    product: &'a Product,
    image_index: usize,
}

impl<'a> ProductDetail<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            image_index: 0,
        }
    }

    /// Open the overlay for `id`.
    pub fn open(catalog: &'a Catalog, id: ProductId) -> DomainResult<Self> {
        let product = catalog.get(id).ok_or_else(DomainError::not_found)?;
        tracing::debug!(product_id = %id, "product detail opened");
        Ok(Self::new(product))
    }

    pub fn product(&self) -> &'a Product {
        self.product
    }

    pub fn images(&self) -> Vec<&'a str> {
        self.product.gallery().collect()
    }

    pub fn image_count(&self) -> usize {
        self.product.gallery().count()
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn current_image(&self) -> &'a str {
        self.product
            .gallery()
            .nth(self.image_index)
            .unwrap_or(self.product.image.as_str())
    }

    pub fn next_image(&mut self) {
        self.image_index = (self.image_index + 1) % self.image_count();
    }

    pub fn previous_image(&mut self) {
        let count = self.image_count();
        self.image_index = (self.image_index + count - 1) % count;
    }

    /// Jump to a thumbnail, clamped to the last image.
    pub fn select_image(&mut self, index: usize) {
        self.image_index = index.min(self.image_count() - 1);
    }

    pub fn features(&self) -> &'a [String] {
        &self.product.features
    }

    pub fn skills(&self) -> &'a [String] {
        &self.product.skills
    }

    /// Price of the whole category bundle, when one is offered.
    pub fn bundle_price(&self) -> Option<u64> {
        self.product.bundle_price
    }
}
