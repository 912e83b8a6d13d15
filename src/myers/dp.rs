//! The `O(NM)` dynamic-programming fallback used for small inputs (spec
//! §4.1 "Fallback to DP"): simpler and branch-predictable, and empirically
//! faster than the `O(ND)` search once both sequences are tiny.

use crate::range::{OffsetRange, SequenceDiff};
use crate::sequence::Sequence;
use crate::timeout::DiffTimeout;

pub fn diff<A: Sequence, B: Sequence>(a: &A, b: &B, timeout: &DiffTimeout) -> (Vec<SequenceDiff>, bool) {
    let n = a.len() as usize;
    let m = b.len() as usize;

    if timeout.is_elapsed() {
        return (
            vec![SequenceDiff::new(
                OffsetRange::new(0, n as u32),
                OffsetRange::new(0, m as u32),
            )],
            true,
        );
    }

    // dp[i][j] = edit distance between a[i..] and b[j..]. The base cases are
    // the cost of deleting or inserting the remaining tail, not zero: a tie
    // at dp[i+1][j] == dp[i][j+1] must not look "free" just because one side
    // ran off the end of its table.
    let mut dp = vec![vec![0u32; m + 1]; n + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[m] = (n - i) as u32;
    }
    for j in 0..=m {
        dp[n][j] = (m - j) as u32;
    }
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i][j] = if a.hash(i as u32) == b.hash(j as u32) {
                dp[i + 1][j + 1]
            } else {
                1 + dp[i + 1][j].min(dp[i][j + 1])
            };
        }
    }

    let mut result = Vec::new();
    let mut open: Option<SequenceDiff> = None;
    let mut i = 0usize;
    let mut j = 0usize;
    while i < n && j < m {
        if a.hash(i as u32) == b.hash(j as u32) {
            if let Some(d) = open.take() {
                result.push(d);
            }
            i += 1;
            j += 1;
        } else if dp[i + 1][j] <= dp[i][j + 1] {
            let edit = SequenceDiff::new(
                OffsetRange::new(i as u32, i as u32 + 1),
                OffsetRange::empty_at(j as u32),
            );
            open = Some(open.map_or(edit, |o| o.join(&edit)));
            i += 1;
        } else {
            let edit = SequenceDiff::new(
                OffsetRange::empty_at(i as u32),
                OffsetRange::new(j as u32, j as u32 + 1),
            );
            open = Some(open.map_or(edit, |o| o.join(&edit)));
            j += 1;
        }
    }
    if i < n {
        let edit = SequenceDiff::new(OffsetRange::new(i as u32, n as u32), OffsetRange::empty_at(j as u32));
        open = Some(open.map_or(edit, |o| o.join(&edit)));
    } else if j < m {
        let edit = SequenceDiff::new(OffsetRange::empty_at(i as u32), OffsetRange::new(j as u32, m as u32));
        open = Some(open.map_or(edit, |o| o.join(&edit)));
    }
    if let Some(d) = open {
        result.push(d);
    }

    (result, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intern::Interner;
    use crate::sequence::LineSequence;

    fn seqs<'a>(before: &'a [&'a str], after: &'a [&'a str]) -> (LineSequence<'a>, LineSequence<'a>) {
        let mut interner = Interner::new(before.len() + after.len());
        let a = LineSequence::new(before, false, &mut interner);
        let b = LineSequence::new(after, false, &mut interner);
        (a, b)
    }

    #[test]
    fn identical_sequences_produce_no_diffs() {
        let (a, b) = seqs(&["x", "y"], &["x", "y"]);
        let (diffs, timeout) = diff(&a, &b, &DiffTimeout::unlimited());
        assert!(diffs.is_empty());
        assert!(!timeout);
    }

    #[test]
    fn single_substitution() {
        let (a, b) = seqs(&["x", "y", "z"], &["x", "w", "z"]);
        let (diffs, _) = diff(&a, &b, &DiffTimeout::unlimited());
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].seq1, OffsetRange::new(1, 2));
        assert_eq!(diffs[0].seq2, OffsetRange::new(1, 2));
    }

    #[test]
    fn pure_insertion_at_start_is_not_reported_as_a_replacement() {
        let (a, b) = seqs(&["x"], &["y", "x"]);
        let (diffs, _) = diff(&a, &b, &DiffTimeout::unlimited());
        assert_eq!(diffs.len(), 1);
        assert!(diffs[0].is_pure_insertion());
        assert_eq!(diffs[0].seq1, OffsetRange::empty_at(0));
        assert_eq!(diffs[0].seq2, OffsetRange::new(0, 1));
    }
}
