//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Coverage data for a single catalog file.
pub struct CatalogCoverage {
    /// Catalog file path as given on the command line.
    pub file: String,
    /// Total number of entries in the catalog.
    pub total: usize,
    /// Number of entries with a non-empty translation.
    pub translated: usize,
    /// Ids of untranslated entries.
    pub missing: Vec<String>,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(coverage: &[CatalogCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Catalog", "Coverage", "Untranslated"]);

    for entry in coverage {
        table.add_row(vec![
            entry.file.clone(),
            format!("{}/{}", entry.translated, entry.total),
            entry.missing.len().to_string(),
        ]);
    }

    table
}
