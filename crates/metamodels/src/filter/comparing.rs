//! Comparison rules delegating to the bound attribute.

use super::FilterRule;
use crate::attribute::Attribute;
use crate::error::Result;
use crate::model::{FilterValue, ItemId};
use tracing::debug;

/// Items whose value is greater than (or, if inclusive, equal to) `value`.
pub struct GreaterThan<'a> {
    attribute: &'a dyn Attribute,
    value: FilterValue,
    inclusive: bool,
}

impl<'a> GreaterThan<'a> {
    /// An exclusive comparison.
    pub fn new(attribute: &'a dyn Attribute, value: impl Into<FilterValue>) -> Self {
        Self {
            attribute,
            value: value.into(),
            inclusive: false,
        }
    }

    pub fn with_inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = inclusive;
        self
    }

    pub fn attribute(&self) -> &'a dyn Attribute {
        self.attribute
    }

    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }
}

impl FilterRule for GreaterThan<'_> {
    fn matching_ids(&self) -> Result<Vec<ItemId>> {
        debug!(
            attribute = self.attribute.name(),
            value = %self.value,
            inclusive = self.inclusive,
            "evaluating greater-than rule"
        );
        self.attribute
            .filter_greater_than(&self.value, self.inclusive)
    }
}

/// Items whose value is less than (or, if inclusive, equal to) `value`.
pub struct LessThan<'a> {
    attribute: &'a dyn Attribute,
    value: FilterValue,
    inclusive: bool,
}

impl<'a> LessThan<'a> {
    /// An exclusive comparison.
    pub fn new(attribute: &'a dyn Attribute, value: impl Into<FilterValue>) -> Self {
        Self {
            attribute,
            value: value.into(),
            inclusive: false,
        }
    }

    pub fn with_inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = inclusive;
        self
    }

    pub fn attribute(&self) -> &'a dyn Attribute {
        self.attribute
    }

    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }
}

impl FilterRule for LessThan<'_> {
    fn matching_ids(&self) -> Result<Vec<ItemId>> {
        debug!(
            attribute = self.attribute.name(),
            value = %self.value,
            inclusive = self.inclusive,
            "evaluating less-than rule"
        );
        self.attribute.filter_less_than(&self.value, self.inclusive)
    }
}

/// Items whose value differs from `value`.
pub struct NotEqual<'a> {
    attribute: &'a dyn Attribute,
    value: FilterValue,
}

impl<'a> NotEqual<'a> {
    pub fn new(attribute: &'a dyn Attribute, value: impl Into<FilterValue>) -> Self {
        Self {
            attribute,
            value: value.into(),
        }
    }

    pub fn attribute(&self) -> &'a dyn Attribute {
        self.attribute
    }

    pub fn value(&self) -> &FilterValue {
        &self.value
    }
}

impl FilterRule for NotEqual<'_> {
    fn matching_ids(&self) -> Result<Vec<ItemId>> {
        debug!(
            attribute = self.attribute.name(),
            value = %self.value,
            "evaluating not-equal rule"
        );
        self.attribute.filter_not_equal(&self.value)
    }
}
