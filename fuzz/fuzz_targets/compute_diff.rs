#![no_main]

use libfuzzer_sys::arbitrary;
use libfuzzer_sys::fuzz_target;
use vscode_diff_core::{compute_diff, DiffOptions};

#[derive(arbitrary::Arbitrary, Debug)]
struct Input<'a> {
    original: &'a str,
    modified: &'a str,
    ignore_trim_whitespace: bool,
    extend_to_subwords: bool,
}

/// Exercises `compute_diff` end to end and checks the universal invariants
/// from spec §8: sortedness, non-empty-information, and a bounded result
/// whenever the wall-clock budget isn't hit.
fn do_fuzz(
    Input {
        original,
        modified,
        ignore_trim_whitespace,
        extend_to_subwords,
    }: Input<'_>,
) {
    let original_lines: Vec<&str> = original.split('\n').collect();
    let modified_lines: Vec<&str> = modified.split('\n').collect();

    let options = DiffOptions {
        ignore_trim_whitespace,
        whitespace_sensitive_inner_changes: false,
        extend_to_subwords,
        max_computation_time_ms: 200,
        compute_moves: false,
    };

    let diff = compute_diff(&original_lines, &modified_lines, &options);

    for w in diff.changes.windows(2) {
        assert!(w[0].original.end_line_exclusive <= w[1].original.start_line);
        assert!(w[0].modified.end_line_exclusive <= w[1].modified.start_line);
    }
    for m in &diff.changes {
        assert!(!m.original.is_empty() || !m.modified.is_empty() || !m.inner_changes.is_empty());
    }

    if original_lines == modified_lines {
        assert!(diff.changes.is_empty());
    }
}

fuzz_target!(|input: Input<'_>| {
    do_fuzz(input);
});
