//! End-to-end scenario tests and universal-invariant property checks from
//! spec §8, run against the public `compute_diff` entry point.

use crate::{compute_diff, diagnostic, DiffOptions};

fn opts() -> DiffOptions {
    DiffOptions::default()
}

// --- Concrete end-to-end scenarios (spec §8) -------------------------------

#[test]
fn scenario_1_identity() {
    let lines = ["line 1", "line 2"];
    let diff = compute_diff(&lines, &lines, &opts());
    assert_eq!(diagnostic::render(&diff), "Number of changes: 0\nHit timeout: no\n");
}

#[test]
fn scenario_2_single_line_replacement() {
    let original = ["line 1", "line 2"];
    let modified = ["line 1", "line 3"];
    let diff = compute_diff(&original, &modified, &opts());
    let rendered = diagnostic::render(&diff);
    assert!(rendered.contains("[0] Lines 2-2 -> Lines 2-2 (1 inner change)"));
    assert!(rendered.contains("Inner: L2:C6-L2:C7 -> L2:C6-L2:C7"));
}

#[test]
fn scenario_3_pure_appended_line() {
    let original = ["a"];
    let modified = ["a", "b"];
    let diff = compute_diff(&original, &modified, &opts());
    let rendered = diagnostic::render(&diff);
    assert!(rendered.contains("[0] Lines 2-1 -> Lines 2-2 (1 inner change)"));
    assert!(rendered.contains("Inner: L2:C1-L2:C1 -> L2:C1-L2:C2"));
}

#[test]
fn scenario_4_mid_line_character_edit() {
    let original = ["const oldValue = 42;"];
    let modified = ["const newValue = 42;"];
    let diff = compute_diff(&original, &modified, &opts());
    assert_eq!(diff.changes.len(), 1);
    assert_eq!(diff.changes[0].original.start_line, 1);
    assert_eq!(diff.changes[0].original.end_line_exclusive, 2);

    // 1-3 inner changes allowed depending on merge aggressiveness; every
    // covered interval must include the three differing characters ("old"
    // vs "new", columns 7-10) and stay within 6 columns total.
    let lo = diff.changes[0]
        .inner_changes
        .iter()
        .map(|m| m.original.start.column)
        .min()
        .unwrap();
    let hi = diff.changes[0]
        .inner_changes
        .iter()
        .map(|m| m.original.end.column)
        .max()
        .unwrap();
    assert!(lo <= 7);
    assert!(hi >= 10);
    assert!(hi - lo <= 6);
}

#[test]
fn scenario_5_whitespace_indentation_change_insensitive() {
    let original = ["  foo();"];
    let modified = ["    foo();"];
    let mut options = opts();
    options.ignore_trim_whitespace = true;
    let diff = compute_diff(&original, &modified, &options);
    assert_eq!(diagnostic::render(&diff), "Number of changes: 0\nHit timeout: no\n");
}

#[test]
fn scenario_6_timeout_with_pathological_input() {
    let original: Vec<String> = (0..4000).map(|i| format!("unique original {i}")).collect();
    let modified: Vec<String> = (0..4000).map(|i| format!("unique modified {i}")).collect();
    let original_refs: Vec<&str> = original.iter().map(String::as_str).collect();
    let modified_refs: Vec<&str> = modified.iter().map(String::as_str).collect();

    let mut options = opts();
    options.max_computation_time_ms = 10;
    let diff = compute_diff(&original_refs, &modified_refs, &options);

    assert!(diff.hit_timeout);
    assert_eq!(diff.changes.len(), 1);
    assert_eq!(diff.changes[0].original.start_line, 1);
    assert_eq!(diff.changes[0].original.end_line_exclusive, 4001);
    assert_eq!(diff.changes[0].modified.start_line, 1);
    assert_eq!(diff.changes[0].modified.end_line_exclusive, 4001);
}

// --- Boundary cases (spec §8) ----------------------------------------------

#[test]
fn boundary_empty_to_empty() {
    let diff = compute_diff(&[], &[], &opts());
    assert!(diff.changes.is_empty());
    assert!(!diff.hit_timeout);
}

#[test]
fn boundary_empty_to_non_empty() {
    let modified = ["x", "y", "z"];
    let diff = compute_diff(&[], &modified, &opts());
    assert_eq!(diff.changes.len(), 1);
    assert_eq!(diff.changes[0].original.start_line, 1);
    assert_eq!(diff.changes[0].original.end_line_exclusive, 1);
    assert_eq!(diff.changes[0].modified.start_line, 1);
    assert_eq!(diff.changes[0].modified.end_line_exclusive, 4);
}

#[test]
fn boundary_pure_character_change_within_single_line() {
    let original = ["hello world"];
    let modified = ["heclo world"];
    let diff = compute_diff(&original, &modified, &opts());
    assert_eq!(diff.changes.len(), 1);
    assert_eq!(diff.changes[0].original, diff.changes[0].modified);
    assert_eq!(diff.changes[0].inner_changes.len(), 1);
    let inner = diff.changes[0].inner_changes[0];
    assert_eq!(inner.original.start.line, inner.original.end.line);
}

// --- Universal invariants (property tests) ---------------------------------

fn corpus() -> Vec<(Vec<&'static str>, Vec<&'static str>)> {
    vec![
        (vec![], vec![]),
        (vec!["a"], vec!["a"]),
        (vec!["a"], vec!["b"]),
        (vec!["a", "b", "c"], vec!["a", "x", "c"]),
        (vec!["a", "b"], vec!["a", "b", "c"]),
        (vec!["a", "b", "c"], vec!["b", "c"]),
        (vec!["  x", "  y"], vec!["x", "y"]),
        (vec!["fn f() {", "", "x();", "}"], vec!["fn f() {", "", "x();", "y();", "}"]),
        (vec!["line"], vec!["line", ""]),
    ]
}

#[test]
fn sortedness_and_non_empty_information() {
    for (original, modified) in corpus() {
        let diff = compute_diff(&original, &modified, &opts());
        for w in diff.changes.windows(2) {
            assert!(w[0].original.end_line_exclusive <= w[1].original.start_line);
            assert!(w[0].modified.end_line_exclusive <= w[1].modified.start_line);
        }
        for m in &diff.changes {
            let any_non_empty =
                !m.original.is_empty() || !m.modified.is_empty() || !m.inner_changes.is_empty();
            assert!(any_non_empty);
        }
    }
}

#[test]
fn identity_returns_no_changes_for_any_options() {
    for (original, _) in corpus() {
        for ignore_trim_whitespace in [false, true] {
            for extend_to_subwords in [false, true] {
                let options = DiffOptions {
                    ignore_trim_whitespace,
                    extend_to_subwords,
                    ..opts()
                };
                let diff = compute_diff(&original, &original, &options);
                assert!(diff.changes.is_empty(), "{original:?} vs itself under {options:?}");
                assert!(!diff.hit_timeout);
            }
        }
    }
}

#[test]
fn swap_asymmetry_swaps_original_and_modified_roles() {
    for (original, modified) in corpus() {
        let forward = compute_diff(&original, &modified, &opts());
        let backward = compute_diff(&modified, &original, &opts());
        assert_eq!(forward.changes.len(), backward.changes.len());
        for (f, b) in forward.changes.iter().zip(backward.changes.iter()) {
            assert_eq!(f.original, b.modified);
            assert_eq!(f.modified, b.original);
            assert_eq!(f.inner_changes.len(), b.inner_changes.len());
            for (fi, bi) in f.inner_changes.iter().zip(b.inner_changes.iter()) {
                assert_eq!(fi.original, bi.modified);
                assert_eq!(fi.modified, bi.original);
            }
        }
    }
}

#[test]
fn whitespace_insensitivity_without_whitespace_sensitive_request() {
    let original = ["  a", "b  ", "\tc"];
    let modified = ["a", "b", "c"];
    let mut options = opts();
    options.ignore_trim_whitespace = true;
    let diff = compute_diff(&original, &modified, &options);
    assert!(diff.changes.is_empty());
}

#[test]
fn timeout_monotonicity() {
    let original: Vec<String> = (0..200).map(|i| format!("line {i}")).collect();
    let modified: Vec<String> = (0..200).map(|i| format!("line {i} modified")).collect();
    let original_refs: Vec<&str> = original.iter().map(String::as_str).collect();
    let modified_refs: Vec<&str> = modified.iter().map(String::as_str).collect();

    let mut small_budget = opts();
    small_budget.max_computation_time_ms = 2000;
    let first = compute_diff(&original_refs, &modified_refs, &small_budget);
    assert!(!first.hit_timeout);

    let mut bigger_budget = small_budget;
    bigger_budget.max_computation_time_ms = 5000;
    let second = compute_diff(&original_refs, &modified_refs, &bigger_budget);
    assert!(!second.hit_timeout);
    assert_eq!(first.changes, second.changes);
}

#[test]
fn determinism() {
    let original = ["const oldValue = 42;", "next line", "another one"];
    let modified = ["const newValue = 42;", "next line!", "another one"];
    let a = diagnostic::render(&compute_diff(&original, &modified, &opts()));
    let b = diagnostic::render(&compute_diff(&original, &modified, &opts()));
    assert_eq!(a, b);
}
