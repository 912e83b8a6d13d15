//! Whitespace-only gap scanning (spec §4.2 step 5).
//!
//! Runs after line diffs are refined to character level. For every
//! unchanged line range sitting between two line diffs, if the original and
//! modified line at that position differ only in leading/trailing
//! whitespace, a synthetic line diff carrying a single character mapping
//! for the whitespace delta is emitted, so trim-insensitive rendering can
//! still flag the change.

use crate::char_diff::RangeMapping;
use crate::range::{CharRange, OffsetRange, Position, SequenceDiff};

pub struct WhitespaceGap {
    pub line_diff: SequenceDiff,
    pub mapping: RangeMapping,
}

/// `line_diffs` must be sorted and pairwise disjoint on both sides; `line`
/// is 0-based.
pub fn scan_gaps(original_lines: &[&str], modified_lines: &[&str], line_diffs: &[SequenceDiff]) -> Vec<WhitespaceGap> {
    let mut gaps = Vec::new();
    let n = original_lines.len() as u32;

    let mut boundaries = Vec::with_capacity(line_diffs.len() + 1);
    let mut prev_end1 = 0u32;
    let mut prev_end2 = 0u32;
    for d in line_diffs {
        boundaries.push((prev_end1, d.seq1.start, prev_end2, d.seq2.start));
        prev_end1 = d.seq1.end;
        prev_end2 = d.seq2.end;
    }
    boundaries.push((prev_end1, n, prev_end2, modified_lines.len() as u32));

    for (s1, e1, s2, e2) in boundaries {
        if e1 - s1 != e2 - s2 {
            continue;
        }
        for i in 0..(e1 - s1) {
            let oi = s1 + i;
            let mi = s2 + i;
            let orig = original_lines[oi as usize];
            let modi = modified_lines[mi as usize];
            if orig == modi {
                continue;
            }
            if orig.trim() != modi.trim() {
                continue;
            }
            // Differ only in leading/trailing whitespace: report the
            // smallest character span covering the delta.
            let (start_col_orig, end_col_orig) = whitespace_delta_span(orig, modi);
            let (start_col_mod, end_col_mod) = whitespace_delta_span(modi, orig);
            gaps.push(WhitespaceGap {
                line_diff: SequenceDiff::new(OffsetRange::new(oi, oi + 1), OffsetRange::new(mi, mi + 1)),
                mapping: RangeMapping {
                    original: CharRange::new(
                        Position::new(oi + 1, start_col_orig),
                        Position::new(oi + 1, end_col_orig),
                    ),
                    modified: CharRange::new(
                        Position::new(mi + 1, start_col_mod),
                        Position::new(mi + 1, end_col_mod),
                    ),
                },
            });
        }
    }
    gaps
}

/// Returns the 1-based `[start, end)` column span of `line`'s content that
/// doesn't appear, at the same trimmed position, in `other`'s whitespace.
/// Since both trim to the same body, the only differences are in the
/// leading/trailing runs; we report the whole leading run plus the whole
/// trailing run as one span when both changed, else whichever one did.
fn whitespace_delta_span(line: &str, other: &str) -> (u32, u32) {
    let leading = line.len() - line.trim_start().len();
    let other_leading = other.len() - other.trim_start().len();
    let trailing = line.len() - line.trim_end().len();
    let other_trailing = other.len() - other.trim_end().len();

    let leading_changed = leading != other_leading;
    let trailing_changed = trailing != other_trailing;

    match (leading_changed, trailing_changed) {
        (true, true) => (1, line.chars().count() as u32 + 1),
        (true, false) => (1, leading as u32 + 1),
        (false, true) => (line.trim_end().chars().count() as u32 + 1, line.chars().count() as u32 + 1),
        (false, false) => (1, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_indentation_only_change() {
        let original = ["  foo();"];
        let modified = ["    foo();"];
        let gaps = scan_gaps(&original, &modified, &[]);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].mapping.original.start, Position::new(1, 1));
    }

    #[test]
    fn identical_lines_produce_no_gap() {
        let original = ["foo();"];
        let modified = ["foo();"];
        let gaps = scan_gaps(&original, &modified, &[]);
        assert!(gaps.is_empty());
    }

    #[test]
    fn content_change_is_not_a_whitespace_gap() {
        let original = ["foo();"];
        let modified = ["bar();"];
        let gaps = scan_gaps(&original, &modified, &[]);
        assert!(gaps.is_empty());
    }
}
