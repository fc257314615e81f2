use std::io::Write;

use crate::catalog::{Catalog, CatalogError};

/// Renders the catalog as two-space-indented JSON. Records keep their field
/// declaration order and a record without a check gets no `check` key.
pub fn render(catalog: &Catalog) -> Result<String, CatalogError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Writes the rendered text plus a trailing newline to stdout.
pub fn emit(text: &str) -> Result<(), CatalogError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", text)?;
    handle.flush()?;
    Ok(())
}
