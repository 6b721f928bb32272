//! Jupyter notebook cell extraction.
//!
//! A notebook is parsed as JSON holding an ordered `cells` list; only the
//! textual `source` of code and markdown cells contributes to the archive.
//! Cell outputs, metadata and unknown fields are ignored.

use std::fs;
use std::path::Path;
use serde::Deserialize;
use tracing::warn;

#[derive(Deserialize)]
struct RawNotebook {
    #[serde(default)]
    cells: Vec<RawCell>,
}

#[derive(Deserialize)]
struct RawCell {
    #[serde(default)]
    cell_type: String,
    #[serde(default)]
    source: CellSource,
}

/// Notebook `source` fields hold either one string or a list of fragments;
/// the fragments concatenate in order with no separator inserted.
#[derive(Deserialize)]
#[serde(untagged)]
enum CellSource {
    Joined(String),
    Fragments(Vec<String>),
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Joined(String::new())
    }
}

impl CellSource {
    fn into_text(self) -> String {
        match self {
            CellSource::Joined(text) => text,
            CellSource::Fragments(fragments) => fragments.concat(),
        }
    }
}

/// Extracts the readable content of a notebook as labeled cell blocks.
///
/// Cells keep their original order and 1-based index; empty and
/// whitespace-only cells are skipped, as are cell types other than `code`
/// and `markdown` (the index still advances). Blocks are joined with one
/// blank line. A read or parse failure is logged as a warning and yields
/// `None`; the caller treats that as "nothing to archive".
pub fn extract_cells(path: &Path) -> Option<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = ?e, path = %path.display(), "Could not read notebook");
            return None;
        }
    };
    let text = String::from_utf8_lossy(&bytes);
    let notebook: RawNotebook = match serde_json::from_str(&text) {
        Ok(notebook) => notebook,
        Err(e) => {
            warn!(error = %e, path = %path.display(), "Could not parse notebook");
            return None;
        }
    };

    let mut blocks = Vec::new();
    for (index, cell) in notebook.cells.into_iter().enumerate() {
        let source = cell.source.into_text();
        if source.trim().is_empty() {
            continue;
        }
        let label = match cell.cell_type.as_str() {
            "code" => "Code",
            "markdown" => "Markdown",
            _ => continue,
        };
        blocks.push(format!("--- {} Cell {} ---\n{}", label, index + 1, source));
    }
    Some(blocks.join("\n\n"))
}
