//! Fixed filter taxonomy and sort options (configuration data).

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use belajar_core::{ActivityId, AgeCategoryId, DomainError, DomainResult, ValueObject};

use crate::catalog::FixtureError;

const BUNDLED_TAXONOMY: &str = include_str!("../data/taxonomy.json");

/// Raw selections that mean "no filter on this axis".
const SENTINELS: [&str; 2] = ["all", "semua"];

/// One filter axis: either unrestricted or pinned to a single id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Facet<T> {
    #[default]
    NoFilter,
    Only(T),
}

impl<T: PartialEq> Facet<T> {
    /// Whether `value` passes this facet.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Facet::NoFilter => true,
            Facet::Only(selected) => selected == value,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Facet::Only(_))
    }

    pub fn selected(&self) -> Option<&T> {
        match self {
            Facet::NoFilter => None,
            Facet::Only(selected) => Some(selected),
        }
    }
}

impl<T: Clone + PartialEq + core::fmt::Debug> ValueObject for Facet<T> {}

fn is_sentinel(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || SENTINELS.iter().any(|s| raw.eq_ignore_ascii_case(s))
}

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Fixture order.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    Newest,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingDesc,
        SortOption::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::RatingDesc => "rating-desc",
            SortOption::Newest => "newest",
        }
    }
}

impl core::fmt::Display for SortOption {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| DomainError::validation(format!("unknown sort option {key:?}")))
    }
}

/// `{id, label}` pair shown in a filter control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry<T> {
    pub id: T,
    pub label: String,
}

/// `{key, label}` pair shown in the sort dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortChoice {
    pub key: SortOption,
    pub label: String,
}

/// The recognized filter categories and sort options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub age_categories: Vec<TaxonomyEntry<AgeCategoryId>>,
    pub activities: Vec<TaxonomyEntry<ActivityId>>,
    pub sort_options: Vec<SortChoice>,
}

impl Taxonomy {
    /// Taxonomy compiled into the crate alongside the product fixture.
    pub fn bundled() -> Result<Self, FixtureError> {
        Self::from_json(BUNDLED_TAXONOMY)
    }

    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn has_age_category(&self, id: &AgeCategoryId) -> bool {
        self.age_categories.iter().any(|entry| &entry.id == id)
    }

    pub fn has_activity(&self, id: &ActivityId) -> bool {
        self.activities.iter().any(|entry| &entry.id == id)
    }

    pub fn age_category_label(&self, id: &AgeCategoryId) -> Option<&str> {
        self.age_categories
            .iter()
            .find(|entry| &entry.id == id)
            .map(|entry| entry.label.as_str())
    }

    pub fn activity_label(&self, id: &ActivityId) -> Option<&str> {
        self.activities
            .iter()
            .find(|entry| &entry.id == id)
            .map(|entry| entry.label.as_str())
    }

    pub fn sort_label(&self, key: SortOption) -> Option<&str> {
        self.sort_options
            .iter()
            .find(|choice| choice.key == key)
            .map(|choice| choice.label.as_str())
    }

    /// Parse a raw age-category selection coming from the UI.
    ///
    /// Sentinels (`all`, `semua`, empty) map to [`Facet::NoFilter`].
    pub fn parse_age_category(&self, raw: &str) -> DomainResult<Facet<AgeCategoryId>> {
        if is_sentinel(raw) {
            return Ok(Facet::NoFilter);
        }
        let id: AgeCategoryId = raw.parse()?;
        if !self.has_age_category(&id) {
            return Err(DomainError::validation(format!("unknown age category {id}")));
        }
        Ok(Facet::Only(id))
    }

    /// Parse a raw activity selection coming from the UI.
    pub fn parse_activity(&self, raw: &str) -> DomainResult<Facet<ActivityId>> {
        if is_sentinel(raw) {
            return Ok(Facet::NoFilter);
        }
        let id: ActivityId = raw.parse()?;
        if !self.has_activity(&id) {
            return Err(DomainError::validation(format!("unknown activity {id}")));
        }
        Ok(Facet::Only(id))
    }
}
