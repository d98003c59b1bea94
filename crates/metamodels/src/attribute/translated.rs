//! Text attributes holding one value per language.
//!
//! Comparisons, plain searches and options operate on the active language.
//! An item without a value in the active language is represented by its
//! value in the fallback language.

use super::pattern::SearchPattern;
use super::{Attribute, TranslatedAttribute};
use crate::config::MetaModelsConfig;
use crate::error::{MetaModelsError, Result};
use crate::model::{FilterOption, FilterValue, ItemId};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct TranslatedTextAttribute {
    name: String,
    id: Option<u64>,
    languages: Vec<String>,
    active_language: String,
    fallback_language: String,
    case_sensitive: bool,
    values: BTreeMap<String, BTreeMap<ItemId, String>>,
}

impl TranslatedTextAttribute {
    pub fn new(name: impl Into<String>, config: &MetaModelsConfig) -> Self {
        Self {
            name: name.into(),
            id: None,
            languages: config.languages.clone(),
            active_language: config.active_language().to_string(),
            fallback_language: config.fallback_language.clone(),
            case_sensitive: config.case_sensitive_search,
            values: BTreeMap::new(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_value(
        mut self,
        language: &str,
        id: ItemId,
        value: impl Into<String>,
    ) -> Result<Self> {
        self.set_value(language, id, value)?;
        Ok(self)
    }

    /// Store `value` for item `id` in `language`, which must be configured.
    pub fn set_value(
        &mut self,
        language: &str,
        id: ItemId,
        value: impl Into<String>,
    ) -> Result<()> {
        if !self.languages.iter().any(|l| l == language) {
            return Err(MetaModelsError::UnknownLanguage {
                attribute: self.name.clone(),
                language: language.to_string(),
            });
        }
        self.values
            .entry(language.to_string())
            .or_default()
            .insert(id, value.into());
        Ok(())
    }

    pub fn value(&self, language: &str, id: ItemId) -> Option<&str> {
        self.values
            .get(language)
            .and_then(|values| values.get(&id))
            .map(String::as_str)
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Values as seen in the active language, with fallback applied.
    fn active_values(&self) -> BTreeMap<ItemId, &str> {
        let mut merged = BTreeMap::new();
        for language in [&self.fallback_language, &self.active_language] {
            if let Some(values) = self.values.get(language) {
                merged.extend(values.iter().map(|(id, value)| (*id, value.as_str())));
            }
        }
        merged
    }

    fn select(&self, operand: &FilterValue, keep: impl Fn(Ordering) -> bool) -> Vec<ItemId> {
        let operand = operand.to_string();
        self.active_values()
            .into_iter()
            .filter(|(_, value)| keep((*value).cmp(operand.as_str())))
            .map(|(id, _)| id)
            .collect()
    }
}

impl Attribute for TranslatedTextAttribute {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> Option<u64> {
        self.id
    }

    fn filter_greater_than(&self, value: &FilterValue, inclusive: bool) -> Result<Vec<ItemId>> {
        Ok(self.select(value, |ord| {
            ord == Ordering::Greater || (inclusive && ord == Ordering::Equal)
        }))
    }

    fn filter_less_than(&self, value: &FilterValue, inclusive: bool) -> Result<Vec<ItemId>> {
        Ok(self.select(value, |ord| {
            ord == Ordering::Less || (inclusive && ord == Ordering::Equal)
        }))
    }

    fn filter_not_equal(&self, value: &FilterValue) -> Result<Vec<ItemId>> {
        Ok(self.select(value, |ord| ord != Ordering::Equal))
    }

    fn search_for(&self, pattern: &str) -> Result<Vec<ItemId>> {
        let pattern = SearchPattern::new(pattern, self.case_sensitive)?;
        Ok(self
            .active_values()
            .into_iter()
            .filter(|(_, value)| pattern.matches(value))
            .map(|(id, _)| id)
            .collect())
    }

    fn filter_options(
        &self,
        ids: Option<&[ItemId]>,
        _used_only: bool,
    ) -> Result<Vec<FilterOption>> {
        let active = self.active_values();
        let values: BTreeSet<&str> = match ids {
            Some(ids) => ids.iter().filter_map(|id| active.get(id).copied()).collect(),
            None => active.values().copied().collect(),
        };
        Ok(values
            .into_iter()
            .map(|value| FilterOption::new(value, value))
            .collect())
    }

    fn as_translated(&self) -> Option<&dyn TranslatedAttribute> {
        Some(self)
    }
}

impl TranslatedAttribute for TranslatedTextAttribute {
    /// An empty or absent language list searches every configured language.
    /// Listed languages are searched exactly, without fallback.
    fn search_for_in_languages(
        &self,
        pattern: &str,
        languages: Option<&[String]>,
    ) -> Result<Vec<ItemId>> {
        let languages = match languages {
            Some(languages) if !languages.is_empty() => languages,
            _ => self.languages.as_slice(),
        };
        debug!(attribute = %self.name, ?languages, pattern, "searching translated values");

        let pattern = SearchPattern::new(pattern, self.case_sensitive)?;
        let mut matches = BTreeSet::new();
        for language in languages {
            let Some(values) = self.values.get(language) else {
                continue;
            };
            matches.extend(
                values
                    .iter()
                    .filter(|(_, value)| pattern.matches(value))
                    .map(|(id, _)| *id),
            );
        }
        Ok(matches.into_iter().collect())
    }
}
