//! Error types for loading and querying the translation store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing a [`TranslationStore`](crate::TranslationStore).
///
/// Construction is all-or-nothing: any of these means no store was produced.
#[derive(Error, Debug)]
pub enum InitError {
    /// The source artifact could not be read.
    #[error("Failed to read translation data '{}': {source}", .path.display())]
    Io {
        /// Path of the artifact that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON, or not an array of country objects.
    #[error("Failed to parse translation data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A language listed for a country has no string field holding its translation.
    #[error("Country '{country}' lists language '{language}' but has no string translation for it")]
    MissingTranslation {
        /// Country code of the offending record
        country: String,
        /// Language identifier without a translation
        language: String,
    },
}

/// A query referenced a country or language absent from the loaded dataset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// Unknown country code.
    #[error("Unknown country code '{country}'")]
    Country {
        /// The requested country code
        country: String,
    },

    /// The country exists but does not list the language.
    #[error("Country '{country}' has no translation for language '{language}'")]
    Language {
        /// The requested country code
        country: String,
        /// The requested language identifier
        language: String,
    },
}

impl NotFoundError {
    pub(crate) fn country(country: &str) -> Self {
        Self::Country { country: country.to_string() }
    }

    pub(crate) fn language(country: &str, language: &str) -> Self {
        Self::Language { country: country.to_string(), language: language.to_string() }
    }
}
