use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::config::ExclusionRules;

/// Extension marking a Jupyter notebook, matched case-insensitively.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// How many leading bytes are sniffed when deciding text versus binary.
const SNIFF_LEN: u64 = 1024;

/// Outcome of classifying a single file candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Excluded by name, extension, binary sniff, or unreadability.
    Excluded,
    /// A Jupyter notebook, to be parsed cell by cell.
    Notebook,
    /// Readable text, to be archived verbatim.
    PlainText,
}

/// Classifies a file by name, extension and content sniff.
///
/// Order matters: excluded exact filenames win, then the notebook extension
/// (which overrides the binary extension list), then the excluded-extensions
/// set, and finally the null-byte sniff over the first 1024 bytes. Any I/O
/// failure while sniffing resolves to `Excluded`, never a fatal error.
pub fn classify(path: &Path, rules: &ExclusionRules) -> Verdict {
    let filename = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => return Verdict::Excluded,
    };
    if rules.excludes_file(&filename) {
        return Verdict::Excluded;
    }

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    if let Some(ext) = &extension {
        if ext == NOTEBOOK_EXTENSION {
            return Verdict::Notebook;
        }
        if rules.excludes_extension(&format!(".{ext}")) {
            return Verdict::Excluded;
        }
    }

    if is_likely_text(path) {
        Verdict::PlainText
    } else {
        Verdict::Excluded
    }
}

/// Sniffs the first 1024 bytes for a null byte. A null byte marks the file
/// as binary. Known limitation: valid UTF-16 text is misclassified as
/// binary by this heuristic.
fn is_likely_text(path: &Path) -> bool {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!(error = ?e, path = %path.display(), "Cannot open file for sniffing");
            return false;
        }
    };
    let mut head = Vec::with_capacity(SNIFF_LEN as usize);
    if let Err(e) = file.take(SNIFF_LEN).read_to_end(&mut head) {
        debug!(error = ?e, path = %path.display(), "Cannot sniff file content");
        return false;
    }
    !head.contains(&0)
}
