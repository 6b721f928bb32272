use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use crate::combine::{combine_project_files, ArchiveReport};
use crate::config::DEFAULT_OUTPUT_FILENAME;

/// CLI for combine-code: flatten a project tree into one reviewable archive.
#[derive(Parser)]
#[clap(
    name = "combine-code",
    version,
    about = "Combine a project's source files into a single path-tagged text archive"
)]
pub struct Cli {
    /// Project root directory to scan; defaults to the directory above the
    /// one holding this executable
    #[clap(long)]
    pub root: Option<PathBuf>,

    /// Name of the output file, created inside the root directory
    #[clap(long, default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output: String,

    /// Log verbosity
    #[clap(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// CLI logic entrypoint, separated from main() for testability.
pub fn run(cli: Cli) -> Result<ArchiveReport> {
    let root = match cli.root {
        Some(root) => root,
        None => default_root()?,
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("cannot resolve root directory {}", root.display()))?;
    info!(root = %root.display(), "Project root identified");

    let report = combine_project_files(&root, &cli.output)?;
    Ok(report)
}

/// The tool is assumed to be installed in a directory directly under the
/// project root, so the default root is the executable's grandparent. Falls
/// back to the current working directory.
fn default_root() -> Result<PathBuf> {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(root) = exe.parent().and_then(|dir| dir.parent()) {
            return Ok(root.to_path_buf());
        }
    }
    std::env::current_dir().context("cannot determine current working directory")
}
