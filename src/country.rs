//! Country records and their JSON shape.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::InitError;

/// One country of the dataset: its languages and the translated name in each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    /// Language identifiers in source order.
    languages: Vec<String>,

    /// Language identifier → translated country name.
    translations: HashMap<String, String>,
}

impl CountryRecord {
    /// Languages supported by this country, in the order the source lists them.
    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Translated name for `language`, if the country has one.
    #[must_use]
    pub fn translation(&self, language: &str) -> Option<&str> {
        self.translations.get(language).map(String::as_str)
    }
}

/// A country object as it appears in the source array.
///
/// Translation fields are named after the language identifiers, so everything
/// besides `code` and `languages` is collected into `fields`. A language named
/// `code` reads the country code itself, as it is the field of that name.
#[derive(Debug, Deserialize)]
pub(crate) struct RawCountry {
    /// Country code
    code: String,

    /// Declared languages
    languages: Vec<String>,

    /// Remaining fields, keyed by language identifier
    #[serde(flatten)]
    fields: HashMap<String, Value>,
}

impl RawCountry {
    /// Build the record by reading the field named after each declared language.
    ///
    /// # Errors
    /// Returns [`InitError::MissingTranslation`] if a declared language has no
    /// string field.
    pub(crate) fn into_record(self) -> Result<(String, CountryRecord), InitError> {
        let Self { code, languages, mut fields } = self;

        let mut translations = HashMap::with_capacity(languages.len());
        for language in &languages {
            if translations.contains_key(language) {
                tracing::warn!("Country '{}' lists language '{}' more than once", code, language);
                continue;
            }

            let name = if language == "code" {
                Some(code.clone())
            } else {
                match fields.remove(language) {
                    Some(Value::String(name)) => Some(name),
                    _ => None,
                }
            };
            let Some(name) = name else {
                return Err(InitError::MissingTranslation {
                    country: code,
                    language: language.clone(),
                });
            };
            translations.insert(language.clone(), name);
        }

        Ok((code, CountryRecord { languages, translations }))
    }
}
