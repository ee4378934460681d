//! Implementation of the `msgcat eval` command.

use std::collections::{HashMap, VecDeque};
use std::fs::read_to_string;
use std::path::PathBuf;

use msgcat::{interpolate, interpolate_named, CatalogData, Locale, Value};
use serde::Serialize;

use crate::output::CatalogDiagnostic;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Catalog file to resolve against (.json)
    #[arg(long, required = true)]
    pub catalog: PathBuf,

    /// Message id to resolve
    #[arg(long, required = true)]
    pub id: String,

    /// Plural form of the message id (enables count-based resolution)
    #[arg(long)]
    pub plural: Option<String>,

    /// Count for plural resolution (defaults to 1)
    #[arg(long)]
    pub count: Option<u64>,

    /// Context qualifier for the lookup
    #[arg(long)]
    pub context: Option<String>,

    /// Named interpolation arguments in name=value format (repeatable)
    #[arg(short = 'a', long = "arg", value_parser = parse_key_val)]
    pub args: Vec<(String, String)>,

    /// Positional interpolation arguments, consumed in order (repeatable)
    #[arg(short = 'p', long = "pos")]
    pub positional: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid argument format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Convert a CLI string to a Value: integer if it parses, string otherwise.
fn parse_value(s: &str) -> Value {
    if let Ok(n) = s.parse::<i64>() {
        Value::from(n)
    } else {
        Value::from(s)
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let content = read_to_string(&args.catalog)
        .map_err(|e| miette::miette!("cannot read {}: {}", args.catalog.display(), e))?;

    let data: CatalogData = match serde_json::from_str(&content) {
        Ok(data) => data,
        Err(e) => {
            let diagnostic = CatalogDiagnostic::from_json_error(&args.catalog, &content, &e);
            return Err(diagnostic.into());
        }
    };

    let mut locale = Locale::new();
    locale
        .load_data(data)
        .map_err(|e| miette::miette!("failed to load {}: {}", args.catalog.display(), e))?;

    let count = args.count.unwrap_or(1);
    let resolved = match (&args.plural, &args.context) {
        (Some(plural), Some(context)) => locale.npgettext(context, &args.id, plural, count),
        (Some(plural), None) => locale.ngettext(&args.id, plural, count),
        (None, Some(context)) => locale.pgettext(context, &args.id),
        (None, None) => locale.gettext(&args.id),
    };

    let interpolated = if !args.args.is_empty() {
        let named: HashMap<String, Value> = args
            .args
            .into_iter()
            .map(|(k, v)| (k, parse_value(&v)))
            .collect();
        interpolate_named(&resolved, &named)
    } else if !args.positional.is_empty() {
        let mut queue: VecDeque<Value> =
            args.positional.iter().map(|s| parse_value(s)).collect();
        interpolate(&resolved, &mut queue)
    } else {
        Ok(resolved)
    };

    match interpolated {
        Ok(result) => {
            if args.json {
                let output = EvalResult { result };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("Interpolation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
