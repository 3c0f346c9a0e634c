//! Locale registry: single source of truth for the locales a deployment
//! ships catalogs for.
//!
//! Uses a singleton pattern with `OnceLock` for thread-safe initialization.
//! The fallback locale (en_US) is the source language itself: looking up a
//! message there always yields the source text.

use anyhow::{bail, Result};
use std::sync::OnceLock;

/// Configuration for a known locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Full locale code as it appears in the TS `language` attribute
    pub code: &'static str,

    /// Bare ISO 639-1 language part (e.g., "ru")
    pub language: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Native name of the language
    pub native_name: &'static str,

    /// Whether this is the fallback/source locale (exactly one should be true)
    pub is_fallback: bool,

    /// Whether catalogs for this locale are accepted
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global registry, initializing it on first access.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Look up a locale by full code ("ru_RU") or bare language ("ru").
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales
            .iter()
            .find(|l| l.code == code)
            .or_else(|| self.locales.iter().find(|l| l.language == code))
    }

    /// All enabled locales.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|l| l.enabled).collect()
    }

    /// The fallback locale configuration.
    ///
    /// # Panics
    /// Panics if the registry defines zero or multiple fallback locales,
    /// which indicates a configuration error.
    pub fn fallback(&self) -> &LocaleConfig {
        let fallbacks: Vec<_> = self.locales.iter().filter(|l| l.is_fallback).collect();
        match fallbacks.len() {
            1 => fallbacks[0],
            0 => panic!("no fallback locale in registry"),
            _ => panic!("multiple fallback locales in registry"),
        }
    }

    /// Whether a code maps to an enabled locale.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code).map(|l| l.enabled).unwrap_or(false)
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en_US",
            language: "en",
            name: "English",
            native_name: "English",
            is_fallback: true,
            enabled: true,
        },
        LocaleConfig {
            code: "ru_RU",
            language: "ru",
            name: "Russian",
            native_name: "Русский",
            is_fallback: false,
            enabled: true,
        },
        LocaleConfig {
            code: "de_DE",
            language: "de",
            name: "German",
            native_name: "Deutsch",
            is_fallback: false,
            enabled: true,
        },
        LocaleConfig {
            code: "fr_FR",
            language: "fr",
            name: "French",
            native_name: "Français",
            is_fallback: false,
            enabled: true,
        },
    ]
}

/// A validated locale.
///
/// Constructed only for codes the registry knows and has enabled, so a
/// `Locale` value is always safe to use as a store key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    /// Create a Locale from a code string ("ru_RU" or bare "ru").
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(config) => bail!("locale '{}' is not enabled", config.code),
            None => bail!("unknown locale code: '{}'", code),
        }
    }

    /// The fallback (source-language) locale.
    pub fn fallback() -> Locale {
        Locale {
            code: LocaleRegistry::get().fallback().code,
        }
    }

    /// Full locale code (e.g., "ru_RU").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Registry configuration for this locale.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("locale code should always be registered")
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Whether this is the fallback locale.
    pub fn is_fallback(&self) -> bool {
        self.config().is_fallback
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}
