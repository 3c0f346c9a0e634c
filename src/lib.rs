//! Qt Linguist `.ts` translation catalogs: parsing, validation, and lookup.
//!
//! The crate parses catalog XML into a [`catalog::TsDocument`], checks it for
//! duplicate entries and placeholder drift, and serves translations through a
//! [`store::TranslationStore`] with source-text fallback.

pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
pub mod metrics;
pub mod store;

pub use catalog::{parse_document, validate_document, write_document, TsDocument};
pub use error::CatalogError;
pub use locale::Locale;
pub use store::TranslationStore;
