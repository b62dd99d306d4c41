//! Query interface for country name translations.

use std::collections::BTreeSet;

use crate::error::NotFoundError;

/// Read-only lookups of localized country names.
pub trait Translator {
    /// Languages the country supports, in source order.
    ///
    /// # Errors
    /// [`NotFoundError::Country`] if the code is unknown.
    fn country_languages(&self, country: &str) -> Result<Vec<String>, NotFoundError>;

    /// Every known country code.
    fn countries(&self) -> BTreeSet<String>;

    /// Name of `country` in `language`.
    ///
    /// # Errors
    /// [`NotFoundError::Country`] if the code is unknown, [`NotFoundError::Language`]
    /// if the country has no translation in that language.
    fn translate(&self, country: &str, language: &str) -> Result<&str, NotFoundError>;
}
