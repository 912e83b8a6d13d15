//! Corpus-driven golden test harness (spec §8 "Reference oracle").
//!
//! Each subdirectory of `tests/fixtures/` holds `original.txt`,
//! `modified.txt`, and a `diagnostic.expected` file carrying the exact
//! spec §6 diagnostic rendering. The test oracle is a byte-diff: every
//! fixture's computed rendering must match its `.expected` file exactly,
//! with the trailing-empty-line-after-final-newline rule (spec §9(b))
//! applied the same way here as everywhere else in the crate.

use std::fs;
use std::path::Path;

use vscode_diff_core::{compute_diff, diagnostic, DiffOptions};

fn run_fixture(dir: &Path) {
    let original = fs::read_to_string(dir.join("original.txt")).unwrap();
    let modified = fs::read_to_string(dir.join("modified.txt")).unwrap();
    let expected = fs::read_to_string(dir.join("diagnostic.expected")).unwrap();

    let original_lines: Vec<&str> = original.split('\n').collect();
    let modified_lines: Vec<&str> = modified.split('\n').collect();

    let diff = compute_diff(&original_lines, &modified_lines, &DiffOptions::default());
    let rendered = diagnostic::render(&diff);

    assert_eq!(
        rendered,
        expected,
        "fixture {:?} did not match golden diagnostic output",
        dir.file_name().unwrap()
    );
}

#[test]
fn golden_fixtures_match_byte_for_byte() {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let mut ran = 0;
    for entry in fs::read_dir(&fixtures_dir).unwrap() {
        let entry = entry.unwrap();
        if entry.file_type().unwrap().is_dir() {
            run_fixture(&entry.path());
            ran += 1;
        }
    }
    assert!(ran > 0, "no fixtures found under {fixtures_dir:?}");
}
