//! Character-level refinement of a single line diff (spec §4.4).
//!
//! The pipeline order is load-bearing for VSCode parity: diff, optimize,
//! extend-to-word, extend-to-subword, remove-short-matches, remove-very-
//! short-matches-between-long-diffs, translate. Reordering any two of these
//! changes output on real inputs.

use crate::char_sequence::{ElementCategory, LinesSliceCharSequence};
use crate::myers;
use crate::optimize;
use crate::range::{CharRange, OffsetRange, SequenceDiff};
use crate::sequence::Sequence;
use crate::timeout::DiffTimeout;

/// Reference thresholds from spec §4.4 steps 6/7. Constants, not magic
/// numbers, per the spec's explicit instruction.
const SHORT_MATCH_MAX_LEN: u32 = 3;
const LONG_DIFF_MIN_LEN: u32 = 25;
const SHORT_GAP_BETWEEN_LONG_DIFFS_MAX_LEN: u32 = 5;
const WORD_EXTENSION_MAX_MULTIPLE: u32 = 100;

/// One character-level inner change, in 1-based `(line, column)` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeMapping {
    /// The affected character range on the original side.
    pub original: CharRange,
    /// The affected character range on the modified side.
    pub modified: CharRange,
}

pub struct CharDiffResult {
    pub mappings: Vec<RangeMapping>,
    pub hit_timeout: bool,
}

/// Refines one line-level `SequenceDiff` into character-level `RangeMapping`s.
///
/// `original_lines`/`modified_lines` are the full line arrays; `line_diff`
/// identifies the (0-based) line range on each side to slice and flatten.
pub fn refine(
    original_lines: &[&str],
    modified_lines: &[&str],
    line_diff: SequenceDiff,
    ignore_trim_whitespace: bool,
    extend_to_subwords: bool,
    timeout: &DiffTimeout,
) -> CharDiffResult {
    let orig_slice = &original_lines[line_diff.seq1.start as usize..line_diff.seq1.end as usize];
    let mod_slice = &modified_lines[line_diff.seq2.start as usize..line_diff.seq2.end as usize];

    let a = LinesSliceCharSequence::new(orig_slice, line_diff.seq1.start + 1, ignore_trim_whitespace);
    let b = LinesSliceCharSequence::new(mod_slice, line_diff.seq2.start + 1, ignore_trim_whitespace);

    if timeout.is_elapsed() {
        return fallback(&a, &b, true);
    }

    let (mut diffs, hit_timeout) = myers::diff(&a, &b, timeout);
    if hit_timeout {
        return fallback(&a, &b, true);
    }

    optimize::optimize(&mut diffs, &a, &b, 1);
    extend_to_word(&mut diffs, &a, &b);
    if extend_to_subwords {
        extend_to_subword(&mut diffs, &a, &b);
    }
    remove_short_matches(&mut diffs, &a, &b);
    remove_short_gaps_between_long_diffs(&mut diffs, &a, &b);

    let mappings = diffs
        .into_iter()
        .filter(|d| !d.is_empty())
        .map(|d| translate(&a, &b, d))
        .collect();

    CharDiffResult {
        mappings,
        hit_timeout: false,
    }
}

fn fallback(a: &LinesSliceCharSequence, b: &LinesSliceCharSequence, hit_timeout: bool) -> CharDiffResult {
    let d = SequenceDiff::new(OffsetRange::new(0, a.len()), OffsetRange::new(0, b.len()));
    CharDiffResult {
        mappings: vec![translate(a, b, d)],
        hit_timeout,
    }
}

fn translate(a: &LinesSliceCharSequence, b: &LinesSliceCharSequence, d: SequenceDiff) -> RangeMapping {
    RangeMapping {
        original: CharRange::new(a.position_at(d.seq1.start), a.position_at(d.seq1.end)),
        modified: CharRange::new(b.position_at(d.seq2.start), b.position_at(d.seq2.end)),
    }
}

/// Step 4: extend each diff outward while its boundary falls inside a word
/// run, capped so a pathological input can't blow up a 1-character diff into
/// a multi-hundred-character one.
fn extend_to_word(diffs: &mut [SequenceDiff], a: &LinesSliceCharSequence, b: &LinesSliceCharSequence) {
    extend_to_category(diffs, a, b, ElementCategory::Word);
}

/// Step 5: same idea, but subword boundaries (CamelCase / snake_case) count
/// as stopping points too. Approximated here by treating a transition in
/// letter case, or a `_`, as its own one-character "word" category so the
/// generic extension stops there.
fn extend_to_subword(diffs: &mut [SequenceDiff], a: &LinesSliceCharSequence, b: &LinesSliceCharSequence) {
    for d in diffs.iter_mut() {
        let orig_len = d.seq1.len().max(d.seq2.len()).max(1);
        let cap = orig_len.saturating_mul(WORD_EXTENSION_MAX_MULTIPLE);

        while d.seq1.start > 0
            && d.seq2.start > 0
            && is_subword_continuation(a.char_at(d.seq1.start - 1))
            && is_subword_continuation(b.char_at(d.seq2.start - 1))
            && a.char_at(d.seq1.start - 1) != b.char_at(d.seq2.start - 1)
            && d.seq1.len() < cap
        {
            d.seq1.start -= 1;
            d.seq2.start -= 1;
        }
        while d.seq1.end < a.len()
            && d.seq2.end < b.len()
            && is_subword_continuation(a.char_at(d.seq1.end))
            && is_subword_continuation(b.char_at(d.seq2.end))
            && a.char_at(d.seq1.end) != b.char_at(d.seq2.end)
            && d.seq1.len() < cap
        {
            d.seq1.end += 1;
            d.seq2.end += 1;
        }
    }
}

fn is_subword_continuation(ch: char) -> bool {
    ch.is_lowercase() || ch.is_ascii_digit()
}

/// Grows each diff into a neighboring run of `category` elements, one step
/// at a time, but only while the newly absorbed pair still disagrees: once
/// the next character matches on both sides there is nothing left to
/// highlight, so growing further would only make the highlighted region
/// coarser without describing more of the edit.
fn extend_to_category(
    diffs: &mut [SequenceDiff],
    a: &LinesSliceCharSequence,
    b: &LinesSliceCharSequence,
    category: ElementCategory,
) {
    for d in diffs.iter_mut() {
        let orig_len = d.seq1.len().max(d.seq2.len()).max(1);
        let cap = orig_len.saturating_mul(WORD_EXTENSION_MAX_MULTIPLE);

        while d.seq1.start > 0
            && d.seq2.start > 0
            && a.category_at(d.seq1.start - 1) == category
            && b.category_at(d.seq2.start - 1) == category
            && a.char_at(d.seq1.start - 1) != b.char_at(d.seq2.start - 1)
            && d.seq1.len() < cap
        {
            d.seq1.start -= 1;
            d.seq2.start -= 1;
        }
        while d.seq1.end < a.len()
            && d.seq2.end < b.len()
            && a.category_at(d.seq1.end) == category
            && b.category_at(d.seq2.end) == category
            && a.char_at(d.seq1.end) != b.char_at(d.seq2.end)
            && d.seq1.len() < cap
        {
            d.seq1.end += 1;
            d.seq2.end += 1;
        }
    }
}

/// Step 6: merge diffs separated by a short equal run (≤ 3 characters).
fn remove_short_matches(diffs: &mut Vec<SequenceDiff>, a: &LinesSliceCharSequence, b: &LinesSliceCharSequence) {
    optimize::join_adjacent(diffs, a, b, SHORT_MATCH_MAX_LEN);
}

/// Step 7: merge two diffs, each longer than 25 characters, separated by an
/// equal run of at most 5 characters.
fn remove_short_gaps_between_long_diffs(
    diffs: &mut Vec<SequenceDiff>,
    a: &LinesSliceCharSequence,
    b: &LinesSliceCharSequence,
) {
    if diffs.len() < 2 {
        return;
    }
    let mut result = Vec::with_capacity(diffs.len());
    let mut current = diffs[0];
    for &next in &diffs[1..] {
        let gap1 = OffsetRange::new(current.seq1.end, next.seq1.start);
        let gap2 = OffsetRange::new(current.seq2.end, next.seq2.start);
        let both_long = current.seq1.len().max(current.seq2.len()) > LONG_DIFF_MIN_LEN
            && next.seq1.len().max(next.seq2.len()) > LONG_DIFF_MIN_LEN;
        let gap_short = gap1.len() == gap2.len() && gap1.len() <= SHORT_GAP_BETWEEN_LONG_DIFFS_MAX_LEN;
        let content_matches = (0..gap1.len()).all(|i| a.is_strongly_equal(gap1.start + i, b, gap2.start + i));
        if both_long && gap_short && content_matches {
            current = current.join(&next);
        } else {
            result.push(current);
            current = next;
        }
    }
    result.push(current);
    *diffs = result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_line_word_edit_stays_within_six_columns() {
        let original = ["const oldValue = 42;"];
        let modified = ["const newValue = 42;"];
        let result = refine(
            &original,
            &modified,
            SequenceDiff::new(OffsetRange::new(0, 1), OffsetRange::new(0, 1)),
            false,
            false,
            &DiffTimeout::unlimited(),
        );
        assert!(!result.hit_timeout);
        assert!(!result.mappings.is_empty());
        for m in &result.mappings {
            assert!(m.original.end.column - m.original.start.column <= 6);
        }
        let lo = result.mappings.iter().map(|m| m.original.start.column).min().unwrap();
        let hi = result.mappings.iter().map(|m| m.original.end.column).max().unwrap();
        assert!(lo <= 7 && hi >= 10);
    }

    #[test]
    fn pure_append_reports_single_char_insertion_at_column_one() {
        let original = ["a"];
        let modified = ["a", "b"];
        let result = refine(
            &original,
            &modified,
            SequenceDiff::new(OffsetRange::empty_at(1), OffsetRange::new(1, 2)),
            false,
            false,
            &DiffTimeout::unlimited(),
        );
        assert_eq!(result.mappings.len(), 1);
        let m = result.mappings[0];
        assert_eq!(m.original.start, m.original.end);
        assert_eq!(m.modified.start.column, 1);
    }
}
