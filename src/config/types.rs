use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::source::DataSource;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "dataFile")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslatorSettings {
    /// Dataset to load.
    /// If unset, the bundled `sample.json` is used.
    pub data_file: Option<String>,

    /// Language used when a lookup does not name one.
    pub default_language: String,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self { data_file: None, default_language: "en".to_string() }
    }
}

impl TranslatorSettings {
    /// # Errors
    /// - `dataFile` is set but empty
    /// - `defaultLanguage` is empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(data_file) = &self.data_file
            && data_file.trim().is_empty()
        {
            errors.push(ValidationError::new(
                "dataFile",
                "The path cannot be empty. Specify a JSON file (e.g., \"countries.json\"), or remove this field",
            ));
        }

        if self.default_language.trim().is_empty() {
            errors.push(ValidationError::new(
                "defaultLanguage",
                "The language cannot be empty. Example: \"en\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Resolve the dataset to load.
    ///
    /// Relative `dataFile` paths are resolved against `base_dir`, the directory
    /// the settings were read from.
    #[must_use]
    pub fn data_source(&self, base_dir: &Path) -> DataSource {
        self.data_file.as_ref().map_or(DataSource::Bundled, |file| {
            let path = Path::new(file);
            if path.is_absolute() {
                DataSource::file(path)
            } else {
                DataSource::file(base_dir.join(path))
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_default_settings_are_valid() {
        let settings = TranslatorSettings::default();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.default_language, "en");
        assert_eq!(settings.data_file, None);
    }

    #[rstest]
    fn test_deserialize_camel_case_with_defaults() {
        let settings: TranslatorSettings =
            serde_json::from_str(r#"{"dataFile": "countries.json"}"#).unwrap();

        assert_eq!(settings.data_file.as_deref(), Some("countries.json"));
        assert_eq!(settings.default_language, "en");
    }

    #[rstest]
    #[case::empty_data_file(r#"{"dataFile": ""}"#, "dataFile")]
    #[case::blank_data_file(r#"{"dataFile": "   "}"#, "dataFile")]
    #[case::empty_language(r#"{"defaultLanguage": ""}"#, "defaultLanguage")]
    fn test_validate_rejects(#[case] json: &str, #[case] field_path: &str) {
        let settings: TranslatorSettings = serde_json::from_str(json).unwrap();

        let errors = settings.validate().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().map(|e| e.field_path.as_str()), Some(field_path));
    }

    #[googletest::test]
    fn test_validate_collects_all_errors() {
        let settings = TranslatorSettings {
            data_file: Some(String::new()),
            default_language: String::new(),
        };

        let errors = settings.validate().unwrap_err();
        let message = ConfigError::ValidationErrors(errors).to_string();

        expect_that!(message.as_str(), contains_substring("1. dataFile"));
        expect_that!(message.as_str(), contains_substring("2. defaultLanguage"));
    }

    #[rstest]
    #[case(None, DataSource::Bundled)]
    #[case(Some("countries.json"), DataSource::File(PathBuf::from("/work/countries.json")))]
    #[case(Some("/data/countries.json"), DataSource::File(PathBuf::from("/data/countries.json")))]
    fn test_data_source(#[case] data_file: Option<&str>, #[case] expected: DataSource) {
        let settings = TranslatorSettings {
            data_file: data_file.map(ToString::to_string),
            ..TranslatorSettings::default()
        };

        assert_eq!(settings.data_source(Path::new("/work")), expected);
    }
}
