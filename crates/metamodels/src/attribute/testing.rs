//! Test doubles for exercising rules and the options bridge without real
//! attribute data.

use super::{Attribute, TranslatedAttribute};
use crate::error::{MetaModelsError, Result};
use crate::model::{FilterOption, FilterValue, ItemId};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// One call received by a [`RecordingAttribute`], with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GreaterThan(FilterValue, bool),
    LessThan(FilterValue, bool),
    NotEqual(FilterValue),
    SearchFor(String),
    SearchForInLanguages(String, Option<Vec<String>>),
    FilterOptions(Option<Vec<ItemId>>, bool),
}

/// Shared handle on the calls received by a [`RecordingAttribute`].
///
/// Stays readable after the attribute has been moved into a `MetaModel`.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<Call>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }
}

/// Attribute that records every call and answers with canned results.
///
/// Uses `Cell`/`RefCell` so the `&self` trait methods can record calls.
pub struct RecordingAttribute {
    name: String,
    translated: Cell<bool>,
    ids: Vec<ItemId>,
    options: Vec<FilterOption>,
    failure: Option<String>,
    calls: CallLog,
}

impl RecordingAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            translated: Cell::new(false),
            ids: Vec::new(),
            options: Vec::new(),
            failure: None,
            calls: CallLog::default(),
        }
    }

    /// A recording attribute exposing the translated capability.
    pub fn translated(name: impl Into<String>) -> Self {
        let attr = Self::new(name);
        attr.translated.set(true);
        attr
    }

    /// Ids returned by every filter and search call.
    pub fn returning(mut self, ids: impl Into<Vec<ItemId>>) -> Self {
        self.ids = ids.into();
        self
    }

    pub fn with_options(mut self, options: Vec<FilterOption>) -> Self {
        self.options = options;
        self
    }

    /// Make every call fail with an attribute fault carrying `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Toggle the translated capability after construction.
    pub fn set_translated(&self, translated: bool) {
        self.translated.set(translated);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.calls()
    }

    pub fn log(&self) -> CallLog {
        self.calls.clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.push(call);
        match &self.failure {
            Some(message) => Err(MetaModelsError::attribute(message.clone())),
            None => Ok(()),
        }
    }

    fn answer(&self, call: Call) -> Result<Vec<ItemId>> {
        self.record(call)?;
        Ok(self.ids.clone())
    }
}

impl Attribute for RecordingAttribute {
    fn name(&self) -> &str {
        &self.name
    }

    fn filter_greater_than(&self, value: &FilterValue, inclusive: bool) -> Result<Vec<ItemId>> {
        self.answer(Call::GreaterThan(value.clone(), inclusive))
    }

    fn filter_less_than(&self, value: &FilterValue, inclusive: bool) -> Result<Vec<ItemId>> {
        self.answer(Call::LessThan(value.clone(), inclusive))
    }

    fn filter_not_equal(&self, value: &FilterValue) -> Result<Vec<ItemId>> {
        self.answer(Call::NotEqual(value.clone()))
    }

    fn search_for(&self, pattern: &str) -> Result<Vec<ItemId>> {
        self.answer(Call::SearchFor(pattern.to_string()))
    }

    fn filter_options(
        &self,
        ids: Option<&[ItemId]>,
        used_only: bool,
    ) -> Result<Vec<FilterOption>> {
        self.record(Call::FilterOptions(ids.map(<[ItemId]>::to_vec), used_only))?;
        Ok(self.options.clone())
    }

    fn as_translated(&self) -> Option<&dyn TranslatedAttribute> {
        if self.translated.get() {
            Some(self)
        } else {
            None
        }
    }
}

impl TranslatedAttribute for RecordingAttribute {
    fn search_for_in_languages(
        &self,
        pattern: &str,
        languages: Option<&[String]>,
    ) -> Result<Vec<ItemId>> {
        self.answer(Call::SearchForInLanguages(
            pattern.to_string(),
            languages.map(<[String]>::to_vec),
        ))
    }
}
