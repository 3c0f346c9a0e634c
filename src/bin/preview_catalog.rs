//! Preview catalog binary - inspects a `.ts` catalog without validating a whole tree
//!
//! Usage:
//!   cargo run --bin preview -- translations/app_ru.ts
//!   cargo run --bin preview -- translations/app_ru.ts --samples 10
//!
//! Optional environment variables:
//! - TSCAT_CATALOG_DIR (defaults to translations; used when no file is given,
//!   the first .ts file found there is previewed)

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::info;
use tscat::catalog::{parse_document, placeholders, validate_document};
use tscat::config::Config;

fn sample_count(args: &[String]) -> usize {
    args.iter()
        .position(|a| a == "--samples")
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
        .unwrap_or(5)
}

async fn pick_catalog(config: &Config, args: &[String]) -> Result<PathBuf> {
    if let Some(file) = args.iter().find(|a| !a.starts_with("--") && a.ends_with(".ts")) {
        return Ok(PathBuf::from(file));
    }

    let mut entries = tokio::fs::read_dir(&config.catalog_dir)
        .await
        .with_context(|| format!("failed to read catalog directory {}", config.catalog_dir))?;
    let mut candidates = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().map(|e| e == "ts").unwrap_or(false) {
            candidates.push(path);
        }
    }
    candidates.sort();
    match candidates.into_iter().next() {
        Some(path) => Ok(path),
        None => bail!("no .ts catalogs found in {}", config.catalog_dir),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tscat=info".parse().unwrap()),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let samples = sample_count(&args);

    let config = Config::from_env()?;
    let path = pick_catalog(&config, &args).await?;

    info!("Previewing catalog {}", path.display());
    let xml = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let doc = parse_document(&xml)?;
    let report = validate_document(&doc);

    let translated = doc
        .entries()
        .filter(|(_, message)| message.is_translated())
        .count();

    println!();
    println!("========== CATALOG PREVIEW ==========");
    println!("File:       {}", path.display());
    println!("Language:   {}", doc.language);
    println!("TS version: {}", doc.version);
    println!("Contexts:   {}", doc.contexts.len());
    println!(
        "Messages:   {} ({} translated, {} pending)",
        doc.message_count(),
        translated,
        doc.message_count() - translated
    );
    println!(
        "Validation: {} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );
    println!("=====================================");
    println!();

    for (context, message) in doc.entries().take(samples) {
        let args: Vec<String> = placeholders::positional(&message.source)
            .iter()
            .map(|n| format!("<arg{n}>"))
            .collect();
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        println!("[{}]", context.name);
        println!("  source:      {}", message.source);
        if message.is_translated() {
            println!(
                "  translation: {}",
                placeholders::render(&message.translation, &arg_refs)
            );
        } else {
            println!("  translation: (pending, falls back to source)");
        }
        println!();
    }

    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    for error in &report.errors {
        println!("error: {error}");
    }

    Ok(())
}
