//! Coordinating module for the walk-classify-extract-archive pipeline.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::archive::ArchiveWriter;
use crate::classify::{self, Verdict};
use crate::config::ExclusionRules;
use crate::extract;
use crate::notebook;
use crate::walk::{DirectoryWalker, FileCandidate};

/// Final tallies of one archiving run.
#[derive(Debug)]
pub struct ArchiveReport {
    pub files_processed: u64,
    pub files_skipped: u64,
    pub output_path: PathBuf,
}

/// The one fatal failure class: the output stream itself cannot be created,
/// written, or flushed. Every per-file fault is recovered locally and
/// surfaces only through the skip counter and a log line.
#[derive(Debug)]
pub enum ArchiveError {
    Output(io::Error),
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveError::Output(e) => write!(f, "could not write output archive: {e}"),
        }
    }
}

impl std::error::Error for ArchiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArchiveError::Output(e) => Some(e),
        }
    }
}

impl From<io::Error> for ArchiveError {
    fn from(e: io::Error) -> Self {
        ArchiveError::Output(e)
    }
}

/// Scans the project tree under `root`, filters out excluded directories and
/// files, and combines all readable source content into a single archive
/// named `output_filename` inside the root.
///
/// Output order matches the sorted pre-order traversal exactly, so two runs
/// over an unchanged tree produce byte-identical archives.
pub fn combine_project_files(
    root: &Path,
    output_filename: &str,
) -> Result<ArchiveReport, ArchiveError> {
    let output_path = root.join(output_filename);
    info!(root = %root.display(), output = %output_path.display(), "Combining project source files");

    let rules = ExclusionRules::with_output_filename(output_filename);
    rules.trace_loaded();

    let outfile = File::create(&output_path)?;
    let mut writer = ArchiveWriter::new(BufWriter::new(outfile));
    writer.write_header()?;

    let walker = DirectoryWalker::new(root, rules.clone());
    for walked in walker {
        for _ in &walked.pruned {
            writer.record_skipped();
        }
        for filename in &walked.files {
            if rules.excludes_file(filename) {
                debug!(file = %filename, "Skipping excluded filename");
                writer.record_skipped();
                continue;
            }
            let candidate = FileCandidate::new(root, &walked.path, filename);
            process_candidate(&candidate, &rules, &mut writer)?;
        }
    }

    writer.flush()?;
    let report = ArchiveReport {
        files_processed: writer.files_processed(),
        files_skipped: writer.files_skipped(),
        output_path,
    };
    info!(
        files_processed = report.files_processed,
        files_skipped = report.files_skipped,
        output = %report.output_path.display(),
        "Archive run complete"
    );
    Ok(report)
}

/// Classifies and extracts one candidate, handing the result to the writer.
/// Only output-stream errors propagate; read and parse faults are logged and
/// counted as skips.
fn process_candidate<W: io::Write>(
    candidate: &FileCandidate,
    rules: &ExclusionRules,
    writer: &mut ArchiveWriter<W>,
) -> Result<(), ArchiveError> {
    match classify::classify(&candidate.path, rules) {
        Verdict::Excluded => {
            debug!(path = %candidate.relative_path, "Skipping binary or excluded file");
            writer.record_skipped();
        }
        Verdict::Notebook => {
            info!(path = %candidate.relative_path, "Processing notebook");
            match notebook::extract_cells(&candidate.path) {
                Some(content) => writer.write_file(&candidate.relative_path, &content)?,
                None => writer.record_skipped(),
            }
        }
        Verdict::PlainText => {
            info!(path = %candidate.relative_path, "Processing text file");
            match extract::read_plain_text(&candidate.path) {
                Ok(content) => writer.write_file(&candidate.relative_path, &content)?,
                Err(e) => {
                    error!(error = ?e, path = %candidate.relative_path, "Could not read file");
                    writer.record_skipped();
                }
            }
        }
    }
    Ok(())
}
