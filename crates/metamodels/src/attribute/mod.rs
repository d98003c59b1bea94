//! # Attribute Capabilities
//!
//! An attribute is one typed, named field of a [`MetaModel`](crate::model::MetaModel).
//! The filter engine never looks at how an attribute stores its values; it only
//! asks questions through the capability traits defined here:
//!
//! - [`Attribute`]: the base surface every filterable field implements
//!   (comparisons, pattern search, option enumeration)
//! - [`TranslatedAttribute`]: optional capability for fields holding one
//!   value per language
//!
//! Whether an attribute is translated is discovered through
//! [`Attribute::as_translated`], so a rule holding a `&dyn Attribute` can
//! switch to language-aware search without knowing the concrete type.
//!
//! ## Bundled Implementations
//!
//! | Type | Kinds | Ordering |
//! |------|-------|----------|
//! | [`SimpleAttribute`] | `Numeric` | integer order |
//! | | `Decimal` | floating point total order |
//! | | `Text` | lexicographic |
//! | | `Timestamp` | chronological |
//! | [`TranslatedTextAttribute`] | per-language text | lexicographic, active language |
//!
//! Both keep their values in memory and answer queries with ids in ascending
//! order. New field types implement the traits and plug into the rules
//! unchanged.

use crate::error::Result;
use crate::model::{FilterOption, FilterValue, ItemId};

mod pattern;
mod simple;
#[cfg(any(test, feature = "test_utils"))]
pub mod testing;
mod translated;

pub use pattern::SearchPattern;
pub use simple::{AttributeKind, SimpleAttribute};
pub use translated::TranslatedTextAttribute;

/// Query surface an attribute exposes to the filter engine.
///
/// All methods return the matching ids as produced by the implementation;
/// callers must not assume any particular order unless the implementation
/// documents one.
pub trait Attribute {
    fn name(&self) -> &str;

    /// Persistent id of the attribute, `None` for virtual attributes.
    fn id(&self) -> Option<u64> {
        None
    }

    /// Ids of items whose value is greater than `value` (or equal, when
    /// `inclusive`).
    fn filter_greater_than(&self, value: &FilterValue, inclusive: bool) -> Result<Vec<ItemId>>;

    /// Ids of items whose value is less than `value` (or equal, when
    /// `inclusive`).
    fn filter_less_than(&self, value: &FilterValue, inclusive: bool) -> Result<Vec<ItemId>>;

    /// Ids of items whose value differs from `value`.
    fn filter_not_equal(&self, value: &FilterValue) -> Result<Vec<ItemId>>;

    /// Ids of items whose value matches `pattern`.
    fn search_for(&self, pattern: &str) -> Result<Vec<ItemId>>;

    /// Distinct selectable values.
    ///
    /// `ids` restricts the result to values held by those items. With
    /// `used_only` unset, values the attribute declares but no item holds are
    /// included as well.
    fn filter_options(&self, ids: Option<&[ItemId]>, used_only: bool)
        -> Result<Vec<FilterOption>>;

    /// The translated capability, if this attribute has one.
    fn as_translated(&self) -> Option<&dyn TranslatedAttribute> {
        None
    }
}

/// Attributes holding one value per language.
pub trait TranslatedAttribute: Attribute {
    /// Ids of items matching `pattern` in any of `languages`.
    ///
    /// `None` leaves the choice of languages to the attribute.
    fn search_for_in_languages(
        &self,
        pattern: &str,
        languages: Option<&[String]>,
    ) -> Result<Vec<ItemId>>;
}
