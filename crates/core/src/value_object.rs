//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. A
/// barcode is one: two `"7899137500117"` codes are the same code no matter
/// which product carries them.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct CountryPrefix(u16);
///
/// impl ValueObject for CountryPrefix {}
///
/// assert_eq!(CountryPrefix(789), CountryPrefix(789));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
