//! Implementation of the `msgcat check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use msgcat::{CatalogData, PluralRule, Translation};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::{printable_id, CatalogDiagnostic};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Catalog files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single checked catalog.
#[derive(Serialize)]
struct CheckReport {
    file: String,
    entries: usize,
    nplurals: usize,
    errors: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::new();

    for path in &args.files {
        let content = read_to_string(path)
            .map_err(|e| miette::miette!("cannot read {}: {}", path.display(), e))?;

        let data: CatalogData = match serde_json::from_str(&content) {
            Ok(data) => data,
            Err(e) => {
                let diagnostic = CatalogDiagnostic::from_json_error(path, &content, &e);
                return Err(diagnostic.into());
            }
        };

        reports.push(check_catalog(path, &data));
    }

    let failed = reports.iter().any(|r| !r.errors.is_empty());

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).expect("JSON serialization should not fail")
        );
    } else {
        for report in &reports {
            if report.errors.is_empty() {
                println!(
                    "{}: {} entries, {} plural forms {}",
                    report.file,
                    report.entries,
                    report.nplurals,
                    "ok".green()
                );
            } else {
                println!("{}:", report.file);
                for error in &report.errors {
                    println!("  {}", error.red());
                }
            }
        }
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Validate one parsed catalog: plural rule syntax and plural arity.
fn check_catalog(path: &Path, data: &CatalogData) -> CheckReport {
    let mut errors = Vec::new();

    let rule = match data.plural.as_deref() {
        Some(expression) => match PluralRule::parse(expression) {
            Ok(rule) => rule,
            Err(e) => {
                errors.push(format!("invalid plural rule: {e}"));
                PluralRule::default()
            }
        },
        None => PluralRule::default(),
    };
    let expected = rule.nplurals();

    let mut ids: Vec<&String> = data.catalog.keys().collect();
    ids.sort();
    for id in ids {
        if let Some(Translation::Plural(forms)) = data.catalog.get(id) {
            if forms.len() != expected {
                errors.push(format!(
                    "'{}': {} forms, plural rule expects {}",
                    printable_id(id),
                    forms.len(),
                    expected
                ));
            }
        }
    }

    CheckReport {
        file: path.display().to_string(),
        entries: data.catalog.len(),
        nplurals: expected,
        errors,
    }
}
