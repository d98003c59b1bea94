use super::FilterRule;
use crate::attribute::Attribute;
use crate::error::Result;
use crate::model::ItemId;
use tracing::debug;

/// Items whose value matches a search pattern.
///
/// Translated attributes are searched with
/// [`search_for_in_languages`](crate::attribute::TranslatedAttribute::search_for_in_languages),
/// receiving the language list exactly as given here (`None` stays `None`).
/// Other attributes use their plain `search_for` and the languages are
/// ignored. The capability is checked on every evaluation.
pub struct SearchAttribute<'a> {
    attribute: &'a dyn Attribute,
    pattern: String,
    languages: Option<Vec<String>>,
}

impl<'a> SearchAttribute<'a> {
    pub fn new(attribute: &'a dyn Attribute, pattern: impl Into<String>) -> Self {
        Self {
            attribute,
            pattern: pattern.into(),
            languages: None,
        }
    }

    /// Restrict a translated search to `languages`.
    pub fn with_languages<L: Into<String>>(
        mut self,
        languages: impl IntoIterator<Item = L>,
    ) -> Self {
        self.languages = Some(languages.into_iter().map(Into::into).collect());
        self
    }

    pub fn attribute(&self) -> &'a dyn Attribute {
        self.attribute
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn languages(&self) -> Option<&[String]> {
        self.languages.as_deref()
    }
}

impl FilterRule for SearchAttribute<'_> {
    fn matching_ids(&self) -> Result<Vec<ItemId>> {
        match self.attribute.as_translated() {
            Some(translated) => {
                debug!(
                    attribute = self.attribute.name(),
                    pattern = %self.pattern,
                    languages = ?self.languages,
                    "evaluating translated search rule"
                );
                translated.search_for_in_languages(&self.pattern, self.languages())
            }
            None => {
                debug!(
                    attribute = self.attribute.name(),
                    pattern = %self.pattern,
                    "evaluating search rule"
                );
                self.attribute.search_for(&self.pattern)
            }
        }
    }
}
