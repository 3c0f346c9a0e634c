//! Catalog store: loaded translations and message lookup.
//!
//! Catalogs are loaded read-only at startup or on locale switch, then served
//! by `(context, source)` lookup. A missing, unfinished, or vanished
//! translation falls back to the source text, so lookups always produce
//! displayable output.

use crate::catalog::model::{Message, TsDocument};
use crate::catalog::{parse_document, placeholders};
use crate::error::CatalogError;
use crate::locale::Locale;
use crate::metrics::LookupMetrics;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Message index for one locale: `(context, source)` to entry.
#[derive(Debug, Default)]
struct CatalogIndex {
    entries: HashMap<(String, String), Message>,
}

/// Per-locale entry counts, as reported by [`TranslationStore::stats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStats {
    pub locale: Locale,
    pub entries: usize,
}

/// Read-only store of loaded catalogs, keyed by locale.
#[derive(Debug)]
pub struct TranslationStore {
    catalogs: HashMap<Locale, CatalogIndex>,
    default_locale: Locale,
}

impl TranslationStore {
    pub fn new(default_locale: Locale) -> Self {
        Self {
            catalogs: HashMap::new(),
            default_locale,
        }
    }

    /// Index a parsed document.
    ///
    /// A `language` attribute the registry does not know degrades to the
    /// store's default locale instead of failing. On duplicate
    /// `(context, source)` pairs the first entry wins; the validator reports
    /// duplicates separately.
    pub fn insert_document(&mut self, doc: TsDocument) -> Locale {
        let locale = match Locale::from_code(&doc.language) {
            Ok(locale) => locale,
            Err(_) => {
                warn!(
                    "unknown language '{}', filing catalog under default locale {}",
                    doc.language, self.default_locale
                );
                self.default_locale
            }
        };

        let index = self.catalogs.entry(locale).or_default();
        for context in doc.contexts {
            let context_name = context.name;
            for message in context.messages {
                index
                    .entries
                    .entry((context_name.clone(), message.source.clone()))
                    .or_insert(message);
            }
        }
        debug!("indexed catalog for {}: {} entries", locale, index.entries.len());

        locale
    }

    /// Load and index a single `.ts` file.
    pub async fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Locale, CatalogError> {
        let path = path.as_ref();
        let xml = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let doc = parse_document(&xml)?;
        let locale = self.insert_document(doc);
        LookupMetrics::global().record_file_loaded();
        info!("loaded catalog {} as {}", path.display(), locale);

        Ok(locale)
    }

    /// Load every `*.ts` file in a directory. Files are read concurrently;
    /// returns the number of catalogs loaded.
    pub async fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize, CatalogError> {
        let dir = dir.as_ref();
        let mut paths: Vec<PathBuf> = Vec::new();

        let mut entries = tokio::fs::read_dir(dir)
            .await
            .map_err(|source| CatalogError::Io {
                path: dir.display().to_string(),
                source,
            })?;
        while let Some(entry) = entries.next_entry().await.map_err(|source| CatalogError::Io {
            path: dir.display().to_string(),
            source,
        })? {
            let path = entry.path();
            if path.extension().map(|e| e == "ts").unwrap_or(false) {
                paths.push(path);
            }
        }
        paths.sort();

        let reads = paths.iter().map(|path| async move {
            let xml = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| CatalogError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
            Ok::<_, CatalogError>((path.clone(), xml))
        });
        let contents = futures::future::try_join_all(reads).await?;

        let mut loaded = 0;
        for (path, xml) in contents {
            let doc = parse_document(&xml)?;
            let locale = self.insert_document(doc);
            LookupMetrics::global().record_file_loaded();
            info!("loaded catalog {} as {}", path.display(), locale);
            loaded += 1;
        }

        Ok(loaded)
    }

    /// Look up the translation for `(context, source)` in `locale`.
    ///
    /// Falls back to the source text when the locale has no catalog, the
    /// message is absent, or its translation is unfinished/empty.
    pub fn tr<'a>(&'a self, locale: Locale, context: &str, source: &'a str) -> &'a str {
        let metrics = LookupMetrics::global();

        let found = self
            .catalogs
            .get(&locale)
            .and_then(|index| index.entries.get(&(context.to_string(), source.to_string())))
            .filter(|message| message.is_translated());

        match found {
            Some(message) => {
                metrics.record_hit();
                &message.translation
            }
            None => {
                metrics.record_fallback();
                source
            }
        }
    }

    /// Look up and render with positional arguments.
    pub fn tr_args(&self, locale: Locale, context: &str, source: &str, args: &[&str]) -> String {
        placeholders::render(self.tr(locale, context, source), args)
    }

    /// Locales that currently have a catalog loaded.
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.catalogs.keys().copied().collect();
        locales.sort_by_key(|l| l.code());
        locales
    }

    /// Per-locale entry counts, sorted by locale code.
    pub fn stats(&self) -> Vec<LocaleStats> {
        let mut stats: Vec<LocaleStats> = self
            .catalogs
            .iter()
            .map(|(locale, index)| LocaleStats {
                locale: *locale,
                entries: index.entries.len(),
            })
            .collect();
        stats.sort_by_key(|s| s.locale.code());
        stats
    }
}
