//! country-translator
//!
//! JSON データセットから国名の翻訳を引くライブラリ

pub mod config;
pub mod country;
pub mod error;
pub mod source;
pub mod store;
pub mod translator;

#[cfg(test)]
mod test_utils;

pub use country::CountryRecord;
pub use error::{
    InitError,
    NotFoundError,
};
pub use source::DataSource;
pub use store::TranslationStore;
pub use translator::Translator;
