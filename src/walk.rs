//! Pre-order directory traversal with prune-before-descend exclusion.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::ExclusionRules;

/// One directory yielded by the walker: its path, the sorted filenames it
/// contains, and the sorted child directory names that were pruned by the
/// exclusion rules before any descent.
#[derive(Debug)]
pub struct WalkedDir {
    pub path: PathBuf,
    pub files: Vec<String>,
    pub pruned: Vec<String>,
}

/// A file under consideration: its absolute path plus the path relative to
/// the tree root, rendered with forward slashes regardless of platform.
#[derive(Debug, Clone)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub relative_path: String,
}

impl FileCandidate {
    pub fn new(root: &Path, directory: &Path, filename: &str) -> Self {
        let path = directory.join(filename);
        let relative_path = match path.strip_prefix(root) {
            Ok(rel) => rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/"),
            Err(_) => path.to_string_lossy().into_owned(),
        };
        FileCandidate { path, relative_path }
    }

    pub fn filename(&self) -> &str {
        self.relative_path.rsplit('/').next().unwrap_or(&self.relative_path)
    }
}

/// Splits child directory names into the kept and the pruned, per the
/// exclusion rules. Pure so the prune-then-descend contract is testable on
/// its own; both halves come back sorted.
pub fn filter_child_dirs(
    mut names: Vec<String>,
    rules: &ExclusionRules,
    at_root: bool,
) -> (Vec<String>, Vec<String>) {
    names.sort();
    let mut kept = Vec::new();
    let mut pruned = Vec::new();
    for name in names {
        if rules.excludes_dir(&name, at_root) {
            pruned.push(name);
        } else {
            kept.push(name);
        }
    }
    (kept, pruned)
}

/// Lazy, finite, non-restartable traversal of a directory tree.
///
/// Directories come out in pre-order: the root first, then each kept child
/// subtree in ascending lexicographic order. Excluded directories are pruned
/// before recursion, so no descendant of an excluded directory is ever
/// visited. An unreadable directory is logged and its subtree skipped;
/// siblings continue unaffected.
pub struct DirectoryWalker {
    root: PathBuf,
    rules: ExclusionRules,
    stack: Vec<PathBuf>,
}

impl DirectoryWalker {
    pub fn new(root: &Path, rules: ExclusionRules) -> Self {
        DirectoryWalker {
            root: root.to_path_buf(),
            rules,
            stack: vec![root.to_path_buf()],
        }
    }
}

impl Iterator for DirectoryWalker {
    type Item = WalkedDir;

    fn next(&mut self) -> Option<WalkedDir> {
        loop {
            let dir = self.stack.pop()?;
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(
                        error = ?e,
                        path = %dir.display(),
                        "Cannot read directory, skipping its subtree"
                    );
                    continue;
                }
            };

            let mut files = Vec::new();
            let mut subdirs = Vec::new();
            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!(error = ?e, path = %dir.display(), "Unreadable directory entry");
                        continue;
                    }
                };
                let name = entry.file_name().to_string_lossy().into_owned();
                let path = entry.path();
                if path.is_dir() {
                    subdirs.push(name);
                } else if path.is_file() {
                    files.push(name);
                }
            }

            let at_root = dir == self.root;
            let (kept, pruned) = filter_child_dirs(subdirs, &self.rules, at_root);
            for name in &pruned {
                debug!(path = %dir.join(name).display(), "Pruned excluded directory");
            }
            // Reverse push so the lexicographically smallest subtree pops first.
            for name in kept.iter().rev() {
                self.stack.push(dir.join(name));
            }
            files.sort();

            return Some(WalkedDir { path: dir, files, pruned });
        }
    }
}
