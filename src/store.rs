//! In-memory store of country name translations.

use std::collections::{
    BTreeSet,
    HashMap,
};
use std::path::PathBuf;

use crate::country::{
    CountryRecord,
    RawCountry,
};
use crate::error::{
    InitError,
    NotFoundError,
};
use crate::source::DataSource;
use crate::translator::Translator;

/// Country translations loaded once from a JSON dataset.
///
/// The store is immutable after construction, so it can be shared across
/// threads without locking.
///
/// # Examples
/// ```
/// use country_translator::{TranslationStore, Translator};
///
/// let json = r#"[{"code":"can","languages":["en","fr"],"en":"Canada","fr":"Canada"}]"#;
/// let store = TranslationStore::from_json_str(json).unwrap();
///
/// assert_eq!(store.translate("can", "fr").unwrap(), "Canada");
/// assert_eq!(store.country_languages("can").unwrap(), vec!["en", "fr"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    /// Country code → record
    countries: HashMap<String, CountryRecord>,
}

impl TranslationStore {
    /// Load the store from `source`.
    ///
    /// # Errors
    /// - The source cannot be read
    /// - The document is not a JSON array of country objects
    /// - A listed language has no string translation
    pub fn load(source: &DataSource) -> Result<Self, InitError> {
        tracing::debug!("Loading translation data from {}", source.describe());

        let content = source.read()?;
        let store = Self::parse(&content)?;

        tracing::info!(
            "Loaded {} countries from {}",
            store.countries.len(),
            source.describe()
        );
        Ok(store)
    }

    /// Load the store from a JSON file.
    ///
    /// # Errors
    /// See [`TranslationStore::load`].
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, InitError> {
        Self::load(&DataSource::file(path))
    }

    /// Load the store from JSON text.
    ///
    /// # Errors
    /// See [`TranslationStore::load`].
    pub fn from_json_str(json: &str) -> Result<Self, InitError> {
        Self::load(&DataSource::Json(json.to_string()))
    }

    /// Load the bundled `sample.json` dataset.
    ///
    /// # Errors
    /// See [`TranslationStore::load`].
    pub fn bundled() -> Result<Self, InitError> {
        Self::load(&DataSource::Bundled)
    }

    /// Build the country map from the document text.
    ///
    /// Later records replace earlier ones with the same code.
    fn parse(content: &str) -> Result<Self, InitError> {
        let raw: Vec<RawCountry> = serde_json::from_str(content)?;

        let mut countries = HashMap::with_capacity(raw.len());
        for raw_country in raw {
            let (code, record) = raw_country.into_record()?;
            if countries.insert(code.clone(), record).is_some() {
                tracing::warn!("Duplicate country code '{}', keeping the last entry", code);
            }
        }

        Ok(Self { countries })
    }

    /// Number of distinct countries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Whether the dataset has no countries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Whether `country` is a known code.
    #[must_use]
    pub fn contains_country(&self, country: &str) -> bool {
        self.countries.contains_key(country)
    }

    /// Borrow the record for `country`.
    #[must_use]
    pub fn country(&self, country: &str) -> Option<&CountryRecord> {
        self.countries.get(country)
    }

    /// Record lookup shared by the queries
    fn record(&self, country: &str) -> Result<&CountryRecord, NotFoundError> {
        self.countries.get(country).ok_or_else(|| NotFoundError::country(country))
    }
}

impl Translator for TranslationStore {
    fn country_languages(&self, country: &str) -> Result<Vec<String>, NotFoundError> {
        Ok(self.record(country)?.languages().to_vec())
    }

    fn countries(&self) -> BTreeSet<String> {
        self.countries.keys().cloned().collect()
    }

    fn translate(&self, country: &str, language: &str) -> Result<&str, NotFoundError> {
        self.record(country)?
            .translation(language)
            .ok_or_else(|| NotFoundError::language(country, language))
    }
}
