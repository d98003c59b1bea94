//! # Data Model
//!
//! Core value types shared by attributes, filter rules and the options bridge.
//!
//! - [`ItemId`]: identifier of one record in a collection
//! - [`FilterValue`]: operand handed to an attribute's comparison methods
//! - [`FilterOption`]: one selectable `(value, label)` pair
//! - [`MetaModel`]: a named record collection owning its attributes
//! - [`Item`]: one record of a collection, resolving attributes by name

use crate::attribute::Attribute;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Identifier of one record within a collection.
pub type ItemId = u64;

/// Scalar operand of a filter rule.
///
/// Deserializes from plain JSON scalars so request parameters can be passed
/// through as-is. Strings always land in `Text`; attributes that need another
/// representation (e.g. timestamps) coerce on their side.
///
/// Serialization is not symmetric: `Timestamp` is written as an RFC 3339
/// string and therefore reads back as `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Int(v) => write!(f, "{}", v),
            FilterValue::Float(v) => write!(f, "{}", v),
            FilterValue::Text(v) => f.write_str(v),
            FilterValue::Timestamp(v) => f.write_str(&v.to_rfc3339()),
        }
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Int(value.into())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        FilterValue::Timestamp(value)
    }
}

/// A selectable value of an attribute, as offered to option widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// A non-selectable entry carrying only a message (empty value).
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// A named record collection (a user-defined content type).
///
/// Owns its attributes; filter rules only ever borrow them.
pub struct MetaModel {
    name: String,
    attributes: Vec<Box<dyn Attribute>>,
}

impl MetaModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Add an attribute. Lookups return the first attribute registered under
    /// a name.
    pub fn with_attribute(mut self, attribute: impl Attribute + 'static) -> Self {
        self.attributes.push(Box::new(attribute));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, name: &str) -> Option<&dyn Attribute> {
        self.attributes
            .iter()
            .find(|attr| attr.name() == name)
            .map(|attr| &**attr)
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|attr| attr.name())
    }
}

impl fmt::Debug for MetaModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaModel")
            .field("name", &self.name)
            .field("attributes", &self.attribute_names().collect::<Vec<_>>())
            .finish()
    }
}

/// One record of a [`MetaModel`].
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    metamodel: Rc<MetaModel>,
}

impl Item {
    pub fn new(id: ItemId, metamodel: Rc<MetaModel>) -> Self {
        Self { id, metamodel }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn metamodel(&self) -> &MetaModel {
        &self.metamodel
    }

    pub fn attribute(&self, name: &str) -> Option<&dyn Attribute> {
        self.metamodel.attribute(name)
    }
}
