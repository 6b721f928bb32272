use std::fs::write;
use tempfile::tempdir;

use project_tools::notebook::extract_cells;

fn notebook_file(dir: &tempfile::TempDir, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    write(&path, json).unwrap();
    path
}

#[test]
fn test_cells_keep_original_index_and_empty_cells_are_skipped() {
    let tmp = tempdir().unwrap();
    let path = notebook_file(
        &tmp,
        "a.ipynb",
        r#"{"cells": [
            {"cell_type": "code", "source": "x=1"},
            {"cell_type": "markdown", "source": ""},
            {"cell_type": "code", "source": ["print(", "x)"]}
        ]}"#,
    );

    let content = extract_cells(&path).unwrap();
    assert_eq!(
        content,
        "--- Code Cell 1 ---\nx=1\n\n--- Code Cell 3 ---\nprint(x)"
    );
}

#[test]
fn test_source_fragments_concatenate_without_separator() {
    let tmp = tempdir().unwrap();
    let path = notebook_file(
        &tmp,
        "frag.ipynb",
        r#"{"cells": [{"cell_type": "code", "source": ["a = 1\n", "b = 2"]}]}"#,
    );

    let content = extract_cells(&path).unwrap();
    assert_eq!(content, "--- Code Cell 1 ---\na = 1\nb = 2");
}

#[test]
fn test_markdown_cells_get_their_own_label() {
    let tmp = tempdir().unwrap();
    let path = notebook_file(
        &tmp,
        "md.ipynb",
        r##"{"cells": [{"cell_type": "markdown", "source": "# Title"}]}"##,
    );

    let content = extract_cells(&path).unwrap();
    assert_eq!(content, "--- Markdown Cell 1 ---\n# Title");
}

#[test]
fn test_unknown_cell_types_are_ignored_but_still_advance_the_index() {
    let tmp = tempdir().unwrap();
    let path = notebook_file(
        &tmp,
        "raw.ipynb",
        r#"{"cells": [
            {"cell_type": "raw", "source": "ignored"},
            {"cell_type": "code", "source": "kept"}
        ]}"#,
    );

    let content = extract_cells(&path).unwrap();
    assert_eq!(content, "--- Code Cell 2 ---\nkept");
}

#[test]
fn test_unknown_top_level_fields_are_ignored() {
    let tmp = tempdir().unwrap();
    let path = notebook_file(
        &tmp,
        "meta.ipynb",
        r#"{"nbformat": 4, "metadata": {"kernel": "python3"},
            "cells": [{"cell_type": "code", "source": "pass", "outputs": [1, 2]}]}"#,
    );

    let content = extract_cells(&path).unwrap();
    assert_eq!(content, "--- Code Cell 1 ---\npass");
}

#[test]
fn test_notebook_without_cells_yields_empty_content() {
    let tmp = tempdir().unwrap();
    let path = notebook_file(&tmp, "none.ipynb", r#"{"nbformat": 4}"#);
    assert_eq!(extract_cells(&path).unwrap(), "");
}

#[test]
fn test_malformed_notebook_yields_no_content_instead_of_failing() {
    let tmp = tempdir().unwrap();
    let path = notebook_file(&tmp, "broken.ipynb", "this is not json {");
    assert!(extract_cells(&path).is_none());
}

#[test]
fn test_unreadable_notebook_yields_no_content() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("missing.ipynb");
    assert!(extract_cells(&path).is_none());
}
