//! # Filter Rules
//!
//! A filter rule is an immutable predicate that evaluates to the ids of the
//! matching items. Leaf rules bind one attribute and an operand and hand the
//! actual comparison to that attribute; composite rules combine the results of
//! other rules.
//!
//! ## Rule Kinds
//!
//! | Rule | Evaluates to |
//! |------|--------------|
//! | [`GreaterThan`] | `attribute.filter_greater_than(value, inclusive)` |
//! | [`LessThan`] | `attribute.filter_less_than(value, inclusive)` |
//! | [`NotEqual`] | `attribute.filter_not_equal(value)` |
//! | [`SearchAttribute`] | `search_for_in_languages` on translated attributes, `search_for` otherwise |
//! | [`StaticIdList`] | a fixed list of ids |
//! | [`ConditionAnd`] | intersection of its children |
//! | [`ConditionOr`] | union of its children |
//!
//! Leaf rules return the attribute's answer untouched: no filtering,
//! reordering or deduplication happens at this layer, and attribute faults are
//! propagated as-is.
//!
//! ## Usage
//!
//! ```ignore
//! let rule = ConditionAnd::new()
//!     .with_rule(GreaterThan::new(&temperature, 10).with_inclusive(true))
//!     .with_rule(SearchAttribute::new(&title, "foo*"));
//! let ids = rule.matching_ids()?;
//! ```

use crate::error::Result;
use crate::model::ItemId;

mod comparing;
mod condition;
mod search;
mod static_ids;

pub use comparing::{GreaterThan, LessThan, NotEqual};
pub use condition::{ConditionAnd, ConditionOr};
pub use search::SearchAttribute;
pub use static_ids::StaticIdList;

/// A predicate that can be evaluated to the ids of matching items.
///
/// Evaluating the same rule twice without the underlying data changing yields
/// the same ids. An empty list means nothing matched.
pub trait FilterRule {
    fn matching_ids(&self) -> Result<Vec<ItemId>>;
}

impl<R: FilterRule + ?Sized> FilterRule for Box<R> {
    fn matching_ids(&self) -> Result<Vec<ItemId>> {
        (**self).matching_ids()
    }
}

impl<R: FilterRule + ?Sized> FilterRule for &R {
    fn matching_ids(&self) -> Result<Vec<ItemId>> {
        (**self).matching_ids()
    }
}
