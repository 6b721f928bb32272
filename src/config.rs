use std::collections::HashSet;
use tracing::{debug, info};

/// Default name of the combined archive, created inside the project root.
pub const DEFAULT_OUTPUT_FILENAME: &str = "full_project_source.txt";

/// Directory names excluded wherever they appear in the tree.
const EXCLUDE_DIRS_ANYWHERE: &[&str] = &[
    ".git",
    "__pycache__",
    ".pytest_cache",
    "cache",
    "outputs",
    ".vscode",
    ".idea",
    "venv",
    ".venv",
    "env",
    "build",
    "dist",
    "renv",
    "node_modules",
    "target",
];

/// Directory names excluded only when they are direct children of the root.
/// Keeps nested directories with the same name (e.g. `src/app/data`).
const EXCLUDE_DIRS_ROOT_ONLY: &[&str] = &["data"];

/// Directory name suffixes excluded wherever they appear (e.g. `*.egg-info`).
const EXCLUDE_DIR_SUFFIXES: &[&str] = &[".egg-info"];

/// File extensions excluded as binary or non-source content.
const EXCLUDE_EXTENSIONS: &[&str] = &[
    ".pyc", ".pyo", ".so", ".dll", ".exe", ".png", ".jpg", ".jpeg", ".gif", ".ico", ".svg",
    ".parquet", ".arrow", ".feather", ".csv", ".zip", ".gz", ".tar", ".rar", ".7z", ".db",
    ".sqlite3", ".pdf", ".docx", ".xlsx", ".swp", ".swo",
];

/// Exact filenames excluded regardless of location.
const EXCLUDE_FILES: &[&str] = &[".DS_Store", "Thumbs.db", "celerybeat-schedule", ".env"];

/// Immutable exclusion configuration for one archiving run.
///
/// Built once at run start and passed explicitly to every component; no
/// component reads ambient global state. The run's own output filename is
/// injected into the excluded-filenames set so a prior archive is never
/// re-ingested.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    dirs_anywhere: HashSet<String>,
    dirs_root_only: HashSet<String>,
    dir_suffixes: Vec<String>,
    extensions: HashSet<String>,
    files: HashSet<String>,
}

impl ExclusionRules {
    /// Builds the default rule set with `output_filename` added to the
    /// excluded exact filenames.
    pub fn with_output_filename(output_filename: &str) -> Self {
        let mut files: HashSet<String> = EXCLUDE_FILES.iter().map(|s| s.to_string()).collect();
        files.insert(output_filename.to_string());
        ExclusionRules {
            dirs_anywhere: EXCLUDE_DIRS_ANYWHERE.iter().map(|s| s.to_string()).collect(),
            dirs_root_only: EXCLUDE_DIRS_ROOT_ONLY.iter().map(|s| s.to_string()).collect(),
            dir_suffixes: EXCLUDE_DIR_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            extensions: EXCLUDE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            files,
        }
    }

    /// True if a directory with this name must be pruned. `at_root` tells
    /// whether the directory is a direct child of the tree root.
    pub fn excludes_dir(&self, name: &str, at_root: bool) -> bool {
        if self.dirs_anywhere.contains(name) {
            return true;
        }
        if at_root && self.dirs_root_only.contains(name) {
            return true;
        }
        if self.dir_suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())) {
            debug!(dir = name, "Directory name matches excluded suffix");
            return true;
        }
        false
    }

    /// True if the dotted, lowercased extension is in the excluded set.
    pub fn excludes_extension(&self, dotted_extension: &str) -> bool {
        self.extensions.contains(dotted_extension)
    }

    /// True if the exact filename is excluded regardless of location.
    pub fn excludes_file(&self, filename: &str) -> bool {
        self.files.contains(filename)
    }

    pub fn trace_loaded(&self) {
        info!(
            dirs_anywhere = self.dirs_anywhere.len(),
            dirs_root_only = self.dirs_root_only.len(),
            dir_suffixes = self.dir_suffixes.len(),
            extensions = self.extensions.len(),
            files = self.files.len(),
            "Loaded exclusion rules"
        );
    }
}
