//! Common error types for the showcase

use crate::contact::ContactField;

/// Standard result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised by the preference, configuration and form layers.
///
/// None of these are shown to the end user verbatim. Theme errors are recovered
/// at the preference store, missing fields are rendered as inline hints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid theme value: {value:?}")]
    InvalidThemeValue { value: String },

    #[error("Preference storage failed: {message}")]
    Storage { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Missing required contact fields: {}", field_list(.fields))]
    MissingFields { fields: Vec<ContactField> },

    #[error("A contact submission is already in progress")]
    SubmissionInProgress,
}

impl CoreError {
    /// Create an invalid theme error
    pub fn invalid_theme(value: impl Into<String>) -> Self {
        Self::InvalidThemeValue {
            value: value.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        Self::invalid_config(err.to_string())
    }
}

fn field_list(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// User-facing text for a catalog request that ran out of time
pub const CATALOG_TIMEOUT_MESSAGE: &str = "The request took too long. Please try again later.";

/// User-facing text for every other catalog failure
pub const CATALOG_FAILED_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Failures of the catalog fetch.
///
/// These never escape the catalog fetcher as panics or uncaught errors; they
/// become the `Failed` state of the home view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u32 },

    #[error("Catalog request failed: {message}")]
    Transport { message: String },

    #[error("Catalog response could not be decoded: {message}")]
    Decode { message: String },
}

impl CatalogError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Message shown next to the retry button
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => CATALOG_TIMEOUT_MESSAGE,
            Self::Transport { .. } | Self::Decode { .. } => CATALOG_FAILED_MESSAGE,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_has_its_own_user_message() {
        let timeout = CatalogError::Timeout { timeout_ms: 3000 };
        assert!(timeout.is_timeout());
        assert_eq!(timeout.user_message(), CATALOG_TIMEOUT_MESSAGE);

        for err in [
            CatalogError::transport("connection reset"),
            CatalogError::decode("expected value at line 1"),
        ] {
            assert!(!err.is_timeout());
            assert_eq!(err.user_message(), CATALOG_FAILED_MESSAGE);
        }
    }

    #[test]
    fn missing_fields_are_listed_by_name() {
        let err = CoreError::MissingFields {
            fields: vec![ContactField::Name, ContactField::Message],
        };
        assert_eq!(
            err.to_string(),
            "Missing required contact fields: name, message"
        );
    }
}
