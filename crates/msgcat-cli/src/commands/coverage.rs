//! Coverage command implementation.

use std::fs::read_to_string;
use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use msgcat::{CatalogData, Translation};
use serde::Serialize;

use crate::output::table::{format_coverage_table, CatalogCoverage};
use crate::output::{printable_id, CatalogDiagnostic};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Catalog files to report on (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Exit with non-zero code if any catalog has untranslated entries.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    file: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Whether an entry carries a usable translation.
///
/// Generated catalogs ship untranslated entries as empty strings; a
/// plural entry with any empty form counts as untranslated too.
fn is_translated(translation: &Translation) -> bool {
    match translation {
        Translation::Singular(text) => !text.is_empty(),
        Translation::Plural(forms) => !forms.is_empty() && forms.iter().all(|f| !f.is_empty()),
    }
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let mut coverage_data: Vec<CatalogCoverage> = Vec::new();

    for path in &args.files {
        let content = read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette::miette!("Failed to read catalog {:?}: {}", path, e))?;

        let data: CatalogData = match serde_json::from_str(&content) {
            Ok(data) => data,
            Err(e) => {
                let diagnostic = CatalogDiagnostic::from_json_error(path, &content, &e);
                return Err(diagnostic.into());
            }
        };

        let mut ids: Vec<&String> = data.catalog.keys().collect();
        ids.sort();

        let missing: Vec<String> = ids
            .iter()
            .filter(|id| {
                data.catalog
                    .get(id.as_str())
                    .is_some_and(|t| !is_translated(t))
            })
            .map(|id| printable_id(id))
            .collect();

        coverage_data.push(CatalogCoverage {
            file: path.display().to_string(),
            total: data.catalog.len(),
            translated: data.catalog.len() - missing.len(),
            missing,
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                file: c.file.clone(),
                translated: c.translated,
                total: c.total,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(&coverage_data);
        println!("{}", table);

        for entry in &coverage_data {
            if !entry.missing.is_empty() {
                println!("\nUntranslated in {}:", entry.file);
                for id in &entry.missing {
                    println!("  - {}", id);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
