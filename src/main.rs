use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tscat::catalog::{parse_document, validate_document};
use tscat::config::Config;

/// Validation outcome for one catalog file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    language: Option<String>,
    messages: usize,
    errors: Vec<String>,
    warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RunReport {
    files: Vec<FileReport>,
    total_errors: usize,
    total_warnings: usize,
}

async fn check_file(path: &PathBuf) -> FileReport {
    let file = path.display().to_string();

    let xml = match tokio::fs::read_to_string(path).await {
        Ok(xml) => xml,
        Err(err) => {
            return FileReport {
                file,
                language: None,
                messages: 0,
                errors: vec![format!("failed to read file: {err}")],
                warnings: Vec::new(),
            }
        }
    };

    let doc = match parse_document(&xml) {
        Ok(doc) => doc,
        Err(err) => {
            return FileReport {
                file,
                language: None,
                messages: 0,
                errors: vec![err.to_string()],
                warnings: Vec::new(),
            }
        }
    };

    let report = validate_document(&doc);
    FileReport {
        file,
        language: Some(doc.language.clone()),
        messages: doc.message_count(),
        errors: report.errors,
        warnings: report.warnings,
    }
}

async fn collect_catalog_paths(config: &Config, args: &[String]) -> Result<Vec<PathBuf>> {
    if !args.is_empty() {
        return Ok(args.iter().map(PathBuf::from).collect());
    }

    // No explicit files: validate every catalog in the configured directory
    let mut paths = Vec::new();
    let mut entries = tokio::fs::read_dir(&config.catalog_dir)
        .await
        .with_context(|| format!("failed to read catalog directory {}", config.catalog_dir))?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().map(|e| e == "ts").unwrap_or(false) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tscat=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let mut json_output = false;
    let mut file_args = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            "--strict" => {} // handled below together with TSCAT_STRICT
            _ => file_args.push(arg),
        }
    }
    let strict = config.strict || std::env::args().any(|a| a == "--strict");

    let paths = collect_catalog_paths(&config, &file_args).await?;
    if paths.is_empty() {
        bail!("no .ts catalogs found in {}", config.catalog_dir);
    }

    info!("Validating {} catalog(s)", paths.len());

    let mut run = RunReport {
        files: Vec::new(),
        total_errors: 0,
        total_warnings: 0,
    };

    for path in &paths {
        let report = check_file(path).await;
        run.total_errors += report.errors.len();
        run.total_warnings += report.warnings.len();

        if !json_output {
            for message in &report.errors {
                error!("{}: {}", report.file, message);
            }
            for message in &report.warnings {
                warn!("{}: {}", report.file, message);
            }
            if report.errors.is_empty() && report.warnings.is_empty() {
                info!(
                    "{}: ok ({}, {} messages)",
                    report.file,
                    report.language.as_deref().unwrap_or("unknown"),
                    report.messages
                );
            }
        }

        run.files.push(report);
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&run)?);
    }

    if run.total_errors > 0 {
        bail!("validation failed: {} error(s)", run.total_errors);
    }
    if strict && run.total_warnings > 0 {
        bail!(
            "validation failed in strict mode: {} warning(s)",
            run.total_warnings
        );
    }

    info!("All catalogs valid");
    Ok(())
}
