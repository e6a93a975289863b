//! Session favorites: a plain set of product ids.

use std::collections::HashSet;

use belajar_catalog::{Catalog, Product};
use belajar_core::{Entity, ProductId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: HashSet<ProductId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove `id`; returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        let favorite = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };
        tracing::debug!(product_id = %id, favorite, "favorite toggled");
        favorite
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Snapshot of the ids in ascending order.
    pub fn ids(&self) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Favorite products in catalog order. Ids unknown to `catalog` are skipped.
    pub fn products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .products()
            .iter()
            .filter(|product| self.ids.contains(product.id()))
            .collect()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
