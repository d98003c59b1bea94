//! Single-valued attributes kept in memory.
//!
//! A [`SimpleAttribute`] holds at most one value per item. Every value (stored
//! or used as an operand) is first coerced to the attribute's
//! [`AttributeKind`]; operands that cannot be coerced fail with
//! [`MetaModelsError::MalformedValue`].

use super::pattern::SearchPattern;
use super::Attribute;
use crate::config::MetaModelsConfig;
use crate::error::{MetaModelsError, Result};
use crate::model::{FilterOption, FilterValue, ItemId};
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Write;

/// The value domain of a [`SimpleAttribute`], which also fixes its ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Whole numbers. Accepts integral floats and numeric text.
    Numeric,
    /// Floating point numbers ordered by `f64::total_cmp`. NaN is rejected
    /// and `-0.0` is stored as `0.0`.
    Decimal,
    /// Free text, ordered lexicographically. Any scalar is accepted.
    Text,
    /// Points in time. Accepts unix seconds, RFC 3339 and `YYYY-MM-DD` text.
    Timestamp,
}

#[derive(Debug, Clone)]
pub struct SimpleAttribute {
    name: String,
    id: Option<u64>,
    kind: AttributeKind,
    values: BTreeMap<ItemId, FilterValue>,
    choices: Vec<FilterValue>,
    case_sensitive: bool,
    date_format: String,
}

impl SimpleAttribute {
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        let defaults = MetaModelsConfig::default();
        Self {
            name: name.into(),
            id: None,
            kind,
            values: BTreeMap::new(),
            choices: Vec::new(),
            case_sensitive: defaults.case_sensitive_search,
            date_format: defaults.date_format,
        }
    }

    pub fn numeric(name: impl Into<String>) -> Self {
        Self::new(name, AttributeKind::Numeric)
    }

    pub fn decimal(name: impl Into<String>) -> Self {
        Self::new(name, AttributeKind::Decimal)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, AttributeKind::Text)
    }

    pub fn timestamp(name: impl Into<String>) -> Self {
        Self::new(name, AttributeKind::Timestamp)
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Apply search case sensitivity and the label date format.
    pub fn with_config(mut self, config: &MetaModelsConfig) -> Self {
        self.case_sensitive = config.case_sensitive_search;
        self.date_format = config.date_format.clone();
        self
    }

    pub fn with_value(mut self, id: ItemId, value: impl Into<FilterValue>) -> Result<Self> {
        self.set_value(id, value)?;
        Ok(self)
    }

    pub fn with_values<V: Into<FilterValue>>(
        mut self,
        values: impl IntoIterator<Item = (ItemId, V)>,
    ) -> Result<Self> {
        for (id, value) in values {
            self.set_value(id, value)?;
        }
        Ok(self)
    }

    /// Declare the vocabulary of selectable values, whether or not any item
    /// holds them yet.
    pub fn with_choices<V: Into<FilterValue>>(
        mut self,
        choices: impl IntoIterator<Item = V>,
    ) -> Result<Self> {
        for choice in choices {
            let choice = self.coerce(&choice.into())?;
            self.choices.push(choice);
        }
        Ok(self)
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn set_value(&mut self, id: ItemId, value: impl Into<FilterValue>) -> Result<()> {
        let value = self.coerce(&value.into())?;
        self.values.insert(id, value);
        Ok(())
    }

    pub fn remove_value(&mut self, id: ItemId) -> Option<FilterValue> {
        self.values.remove(&id)
    }

    pub fn value(&self, id: ItemId) -> Option<&FilterValue> {
        self.values.get(&id)
    }

    fn coerce(&self, value: &FilterValue) -> Result<FilterValue> {
        let coerced = match (self.kind, value) {
            (AttributeKind::Numeric, FilterValue::Int(v)) => Some(FilterValue::Int(*v)),
            (AttributeKind::Numeric, FilterValue::Float(v)) => integral(*v).map(FilterValue::Int),
            (AttributeKind::Numeric, FilterValue::Text(s)) => {
                s.trim().parse::<i64>().ok().map(FilterValue::Int)
            }
            (AttributeKind::Decimal, FilterValue::Int(v)) => normalized_decimal(*v as f64),
            (AttributeKind::Decimal, FilterValue::Float(v)) => normalized_decimal(*v),
            (AttributeKind::Decimal, FilterValue::Text(s)) => {
                s.trim().parse::<f64>().ok().and_then(normalized_decimal)
            }
            (AttributeKind::Text, FilterValue::Text(s)) => Some(FilterValue::Text(s.clone())),
            (AttributeKind::Text, other) => Some(FilterValue::Text(other.to_string())),
            (AttributeKind::Timestamp, FilterValue::Timestamp(t)) => {
                Some(FilterValue::Timestamp(*t))
            }
            (AttributeKind::Timestamp, FilterValue::Int(secs)) => {
                DateTime::<Utc>::from_timestamp(*secs, 0).map(FilterValue::Timestamp)
            }
            (AttributeKind::Timestamp, FilterValue::Text(s)) => {
                parse_timestamp(s.trim()).map(FilterValue::Timestamp)
            }
            _ => None,
        };
        coerced.ok_or_else(|| MetaModelsError::malformed(&self.name, value))
    }

    fn select(
        &self,
        operand: &FilterValue,
        keep: impl Fn(Ordering) -> bool,
    ) -> Result<Vec<ItemId>> {
        let operand = self.coerce(operand)?;
        Ok(self
            .values
            .iter()
            .filter(|(_, value)| keep(compare(value, &operand)))
            .map(|(id, _)| *id)
            .collect())
    }

    fn label(&self, value: &FilterValue) -> Result<String> {
        match value {
            FilterValue::Timestamp(t) => {
                let mut label = String::new();
                write!(label, "{}", t.format(&self.date_format))
                    .map_err(|_| MetaModelsError::DateFormat(self.date_format.clone()))?;
                Ok(label)
            }
            other => Ok(other.to_string()),
        }
    }
}

impl Attribute for SimpleAttribute {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn filter_greater_than(&self, value: &FilterValue, inclusive: bool) -> Result<Vec<ItemId>> {
        self.select(value, |ord| {
            ord == Ordering::Greater || (inclusive && ord == Ordering::Equal)
        })
    }

    fn filter_less_than(&self, value: &FilterValue, inclusive: bool) -> Result<Vec<ItemId>> {
        self.select(value, |ord| {
            ord == Ordering::Less || (inclusive && ord == Ordering::Equal)
        })
    }

    fn filter_not_equal(&self, value: &FilterValue) -> Result<Vec<ItemId>> {
        self.select(value, |ord| ord != Ordering::Equal)
    }

    fn search_for(&self, pattern: &str) -> Result<Vec<ItemId>> {
        let pattern = SearchPattern::new(pattern, self.case_sensitive)?;
        let mut ids = Vec::new();
        for (id, value) in &self.values {
            if pattern.matches(&self.label(value)?) {
                ids.push(*id);
            }
        }
        Ok(ids)
    }

    fn filter_options(
        &self,
        ids: Option<&[ItemId]>,
        used_only: bool,
    ) -> Result<Vec<FilterOption>> {
        let mut values: Vec<&FilterValue> = match ids {
            Some(ids) => ids.iter().filter_map(|id| self.values.get(id)).collect(),
            None => self.values.values().collect(),
        };
        if ids.is_none() && !used_only {
            values.extend(self.choices.iter());
        }
        values.sort_by(|a, b| compare(a, b));
        values.dedup_by(|a, b| compare(a, b) == Ordering::Equal);

        values
            .into_iter()
            .map(|value| Ok(FilterOption::new(value.to_string(), self.label(value)?)))
            .collect()
    }
}

/// Order two values of the same kind.
fn compare(a: &FilterValue, b: &FilterValue) -> Ordering {
    match (a, b) {
        (FilterValue::Int(a), FilterValue::Int(b)) => a.cmp(b),
        (FilterValue::Float(a), FilterValue::Float(b)) => a.total_cmp(b),
        (FilterValue::Text(a), FilterValue::Text(b)) => a.cmp(b),
        (FilterValue::Timestamp(a), FilterValue::Timestamp(b)) => a.cmp(b),
        // Values are coerced before comparing, so kinds never mix.
        _ => a.to_string().cmp(&b.to_string()),
    }
}

fn integral(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

fn normalized_decimal(value: f64) -> Option<FilterValue> {
    // `+ 0.0` turns -0.0 into 0.0 so both compare equal under total_cmp.
    (!value.is_nan()).then_some(FilterValue::Float(value + 0.0))
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}
