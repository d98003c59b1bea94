use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetaModelsError {
    /// An attribute could not answer a filter or option query.
    #[error("{0}")]
    Attribute(String),

    #[error("Value '{value}' is not valid for attribute {attribute}")]
    MalformedValue { attribute: String, value: String },

    #[error("Language '{language}' is not configured for attribute {attribute}")]
    UnknownLanguage { attribute: String, language: String },

    #[error("Invalid date format '{0}'")]
    DateFormat(String),

    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),
}

impl MetaModelsError {
    pub fn attribute(message: impl Into<String>) -> Self {
        MetaModelsError::Attribute(message.into())
    }

    pub(crate) fn malformed(attribute: &str, value: impl ToString) -> Self {
        MetaModelsError::MalformedValue {
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MetaModelsError>;
