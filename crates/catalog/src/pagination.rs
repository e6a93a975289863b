//! Page-number pagination over an already filtered and sorted sequence.

use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use belajar_core::{DomainError, DomainResult, ValueObject};

/// Number of products per page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Grid of two rows of three cards.
    pub const DEFAULT: PageSize = PageSize(NonZeroUsize::new(6).unwrap());

    pub fn new(size: usize) -> DomainResult<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or_else(|| DomainError::validation("page size must be greater than zero"))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ValueObject for PageSize {}

impl TryFrom<usize> for PageSize {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

/// One page of results plus the metadata the pagination control needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Length of the whole sequence that was paginated.
    pub total_items: usize,
    /// Always at least 1, even when `total_items == 0`.
    pub total_pages: usize,
    /// 1-based, clamped into `1..=total_pages`.
    pub current_page: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page numbers for the pagination control, `1..=total_pages`.
    pub fn page_numbers(&self) -> core::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }
}

/// `max(1, ceil(len / page_size))`.
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Slice out one page, clamping `page` into `1..=total_pages`.
///
/// Out-of-range requests are clamped rather than rejected; an empty input
/// yields a single empty page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: PageSize) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let current_page = page.clamp(1, total_pages);
    let start = ((current_page - 1) * page_size.get()).min(total_items);
    let end = (start + page_size.get()).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        total_items,
        total_pages,
        current_page,
    }
}
