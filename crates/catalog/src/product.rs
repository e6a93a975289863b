//! The product record as it appears in the catalog fixture.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use belajar_core::{ActivityId, AgeCategoryId, Entity, ProductId};

/// A catalog product (read-only fixture record).
///
/// Products are never created or destroyed at runtime; the catalog hands out
/// shared references only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub age_category: AgeCategoryId,
    pub activity: ActivityId,
    /// Display label such as "4-5 tahun".
    pub age_range: String,
    pub min_age: u8,
    /// Price in whole currency units (no minor unit).
    pub price: u64,
    /// Price of the whole category bundle this product belongs to.
    #[serde(default)]
    pub bundle_price: Option<u64>,
    pub image: String,
    /// Ordered gallery previews; `Some` is never empty.
    #[serde(default)]
    pub previews: Option<Vec<String>>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Average review score, 0.0 to 5.0.
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub released_on: Option<NaiveDate>,
}

impl Product {
    /// Case-insensitive substring match on title or description.
    ///
    /// An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        self.matches_lowercased(&term.to_lowercase())
    }

    /// Same as [`Product::matches_search`] with `needle` already lower-cased,
    /// so a filter pass lower-cases the term once.
    pub(crate) fn matches_lowercased(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Primary image followed by the preview images, in display order.
    pub fn gallery(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.image.as_str())
            .chain(self.previews.iter().flatten().map(String::as_str))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;

    #[test]
    fn search_matches_title_case_insensitively() {
        let p = product(1, "Belajar ALFABET Seru", 20_000);
        assert!(p.matches_search("alfabet"));
        assert!(p.matches_search(""));
        assert!(!p.matches_search("angka"));
    }

    #[test]
    fn search_term_case_does_not_matter() {
        let p = product(1, "Kartu Alfabet Hewan", 25_000);
        assert!(p.matches_search("ALFABET"));
        assert!(p.matches_search("Kartu ALFABET"));
    }

    #[test]
    fn search_matches_description() {
        let mut p = product(1, "Kartu Aktivitas", 20_000);
        p.description = "Latihan menulis Huruf dan angka".to_string();
        assert!(p.matches_search("huruf"));
    }

    #[test]
    fn gallery_starts_with_primary_image() {
        let mut p = product(3, "Buku Mewarnai", 15_000);
        p.previews = Some(vec!["/a.png".to_string(), "/b.png".to_string()]);
        let images: Vec<&str> = p.gallery().collect();
        assert_eq!(images, vec!["/images/3.png", "/a.png", "/b.png"]);
    }

    #[test]
    fn deserializes_with_optional_fields_omitted() {
        let json = r#"{
            "id": 9,
            "title": "Puzzle Angka",
            "description": "Puzzle berhitung 1-10",
            "age_category": "balita",
            "activity": "berhitung",
            "age_range": "2-3 tahun",
            "min_age": 2,
            "price": 35000,
            "image": "/images/puzzle.png"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, ProductId::new(9));
        assert!(p.previews.is_none());
        assert!(p.features.is_empty());
        assert_eq!(p.gallery().count(), 1);
    }
}
