use std::io::{self, Write};
use tracing::debug;

/// Fixed header written once before any file blocks.
pub const ARCHIVE_HEADER: &str = "--- Project Source Code Archive ---\n\n\
This file contains the concatenated source code of the project, \
with each file wrapped in tags indicating its relative path.\n\n";

/// Appends path-tagged content blocks to the output stream and keeps the
/// processed/skipped tallies for the run summary.
///
/// Every write error is an output-stream failure and surfaces to the caller;
/// nothing here is recoverable.
pub struct ArchiveWriter<W: Write> {
    out: W,
    files_processed: u64,
    files_skipped: u64,
}

impl<W: Write> ArchiveWriter<W> {
    pub fn new(out: W) -> Self {
        ArchiveWriter {
            out,
            files_processed: 0,
            files_skipped: 0,
        }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.out.write_all(ARCHIVE_HEADER.as_bytes())
    }

    /// Writes one file block if the content survives trimming, otherwise
    /// counts a skip. The block is the relative path in angle-bracket tags
    /// around the trimmed content, followed by a blank line.
    pub fn write_file(&mut self, relative_path: &str, content: &str) -> io::Result<()> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            debug!(path = relative_path, "No content extracted, skipping");
            self.files_skipped += 1;
            return Ok(());
        }
        writeln!(self.out, "<{relative_path}>")?;
        self.out.write_all(trimmed.as_bytes())?;
        writeln!(self.out, "\n</{relative_path}>")?;
        writeln!(self.out)?;
        self.files_processed += 1;
        Ok(())
    }

    /// Counts an entry rejected before extraction (excluded name, binary
    /// content, pruned directory, unreadable file).
    pub fn record_skipped(&mut self) {
        self.files_skipped += 1;
    }

    pub fn files_processed(&self) -> u64 {
        self.files_processed
    }

    pub fn files_skipped(&self) -> u64 {
        self.files_skipped
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
