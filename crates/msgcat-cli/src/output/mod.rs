//! CLI output helpers.

pub mod diagnostic;
pub mod table;

pub use diagnostic::CatalogDiagnostic;

/// Make a catalog key printable: the context separator byte renders as a
/// visible pipe.
pub fn printable_id(id: &str) -> String {
    id.replace('\u{4}', "|")
}
