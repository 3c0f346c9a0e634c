use crate::locale::Locale;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for `*.ts` catalog files
    pub catalog_dir: String,

    /// Locale used when a file's `language` attribute is unknown
    pub default_locale: Locale,

    /// Treat validation warnings as failures
    pub strict: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            catalog_dir: std::env::var("TSCAT_CATALOG_DIR")
                .unwrap_or_else(|_| "translations".to_string()),

            default_locale: match std::env::var("TSCAT_DEFAULT_LOCALE") {
                Ok(code) => Locale::from_code(&code)
                    .context("TSCAT_DEFAULT_LOCALE is not a registered locale")?,
                Err(_) => Locale::fallback(),
            },

            strict: std::env::var("TSCAT_STRICT")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}
