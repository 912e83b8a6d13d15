#![no_main]

use libfuzzer_sys::fuzz_target;
use vscode_diff_core::{compute_diff, DiffOptions};

/// Tests the timeout-monotonicity invariant (spec §8): a smaller budget
/// that didn't time out should produce the same result as a larger one.
fn do_fuzz(data: &[u8]) {
    if data.len() < 2 {
        return;
    }
    let split = data[0] as usize % data.len().max(1);
    let (left, right) = data[1..].split_at(split.min(data.len() - 1));
    let original_text = String::from_utf8_lossy(left);
    let modified_text = String::from_utf8_lossy(right);
    let original: Vec<&str> = original_text.split('\n').collect();
    let modified: Vec<&str> = modified_text.split('\n').collect();

    let small = DiffOptions {
        max_computation_time_ms: 5,
        ..DiffOptions::default()
    };
    let big = DiffOptions {
        max_computation_time_ms: 500,
        ..DiffOptions::default()
    };

    let small_result = compute_diff(&original, &modified, &small);
    if !small_result.hit_timeout {
        let big_result = compute_diff(&original, &modified, &big);
        assert!(!big_result.hit_timeout);
        assert_eq!(small_result.changes, big_result.changes);
    }
}

fuzz_target!(|data: &[u8]| {
    do_fuzz(data);
});
