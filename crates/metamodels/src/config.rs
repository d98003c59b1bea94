//! # Configuration
//!
//! Settings shared by the bundled attribute implementations, loaded with
//! [`confique`] from environment variables, an optional TOML file and
//! compiled defaults (in that priority order).
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `languages` | `["en"]` | Languages translated attributes hold values for |
//! | `fallback_language` | `en` | Language used when an item has no value in the active one |
//! | `active_language` | unset | Language of the current request, falls back to `fallback_language` |
//! | `case_sensitive_search` | `false` | Whether `*`/`?` search patterns respect case |
//! | `date_format` | `%Y-%m-%d` | `chrono` format used for timestamp option labels |
//!
//! Environment overrides: `METAMODELS_FALLBACK_LANGUAGE`,
//! `METAMODELS_ACTIVE_LANGUAGE`, `METAMODELS_CASE_SENSITIVE_SEARCH`.

use crate::error::{MetaModelsError, Result};
use chrono::format::{Item, StrftimeItems};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the filter engine, stored in `metamodels.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MetaModelsConfig {
    /// Languages translated attributes are configured for.
    #[config(default = ["en"])]
    pub languages: Vec<String>,

    /// Language consulted when an item has no value in the active language.
    #[config(default = "en", env = "METAMODELS_FALLBACK_LANGUAGE")]
    pub fallback_language: String,

    /// Language of the current request.
    #[config(env = "METAMODELS_ACTIVE_LANGUAGE")]
    pub active_language: Option<String>,

    #[config(default = false, env = "METAMODELS_CASE_SENSITIVE_SEARCH")]
    pub case_sensitive_search: bool,

    #[config(default = "%Y-%m-%d")]
    pub date_format: String,
}

impl Default for MetaModelsConfig {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
            fallback_language: "en".to_string(),
            active_language: None,
            case_sensitive_search: false,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl MetaModelsConfig {
    /// Load configuration, layering the environment over `path` (if given)
    /// over the compiled defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        let config = builder.load()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings confique cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        check_date_format(&self.date_format)
    }

    /// The language comparisons and plain searches operate on.
    pub fn active_language(&self) -> &str {
        self.active_language
            .as_deref()
            .unwrap_or(&self.fallback_language)
    }
}

/// Fail with [`MetaModelsError::DateFormat`] if chrono cannot render `format`.
fn check_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(MetaModelsError::DateFormat(format.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = MetaModelsConfig::default();
        assert_eq!(config.languages, vec!["en"]);
        assert_eq!(config.fallback_language, "en");
        assert!(!config.case_sensitive_search);
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_active_language_defaults_to_fallback() {
        let config = MetaModelsConfig {
            fallback_language: "de".to_string(),
            ..Default::default()
        };
        assert_eq!(config.active_language(), "de");
    }

    #[test]
    fn test_active_language_override() {
        let config = MetaModelsConfig {
            active_language: Some("fr".to_string()),
            ..Default::default()
        };
        assert_eq!(config.active_language(), "fr");
    }

    #[test]
    fn test_validate_date_format() {
        assert!(MetaModelsConfig::default().validate().is_ok());

        let config = MetaModelsConfig {
            date_format: "%Q".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MetaModelsError::DateFormat(format)) if format == "%Q"
        ));
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "languages = [\"de\", \"en\", \"fr\"]\ndate_format = \"%d.%m.%Y\""
        )
        .unwrap();

        let config = MetaModelsConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.languages, vec!["de", "en", "fr"]);
        assert_eq!(config.date_format, "%d.%m.%Y");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "languages = 42").unwrap();

        assert!(MetaModelsConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_rejects_unknown_date_specifier() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "date_format = \"%Q\"").unwrap();

        let err = MetaModelsConfig::load(Some(file.path())).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date format '%Q'");
    }

    /// Removes the variables it was given when dropped, even if an assert fails.
    struct EnvGuard(&'static [&'static str]);

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in self.0 {
                std::env::remove_var(var);
            }
        }
    }

    // The only test in this binary touching these variables, so it runs
    // both the unset and the set case in sequence.
    #[test]
    fn test_environment_overrides_file() {
        let _guard = EnvGuard(&[
            "METAMODELS_ACTIVE_LANGUAGE",
            "METAMODELS_FALLBACK_LANGUAGE",
            "METAMODELS_CASE_SENSITIVE_SEARCH",
        ]);
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            "active_language = \"de\"\nfallback_language = \"de\"\ncase_sensitive_search = false"
        )
        .unwrap();

        let unset = MetaModelsConfig::load(None).unwrap();
        assert_eq!(unset.active_language, None);
        assert_eq!(unset.active_language(), "en");

        let from_file = MetaModelsConfig::load(Some(file.path())).unwrap();
        assert_eq!(from_file.active_language.as_deref(), Some("de"));

        std::env::set_var("METAMODELS_ACTIVE_LANGUAGE", "fr");
        std::env::set_var("METAMODELS_FALLBACK_LANGUAGE", "en");
        std::env::set_var("METAMODELS_CASE_SENSITIVE_SEARCH", "true");

        let config = MetaModelsConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.active_language.as_deref(), Some("fr"));
        assert_eq!(config.fallback_language, "en");
        assert!(config.case_sensitive_search);
    }
}
