//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two page sizes of `6` are the same page
/// size, two facets selecting the same category are the same selection. They
/// are immutable; "changing" one means building a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct PageSize(NonZeroUsize);
///
/// impl ValueObject for PageSize {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
