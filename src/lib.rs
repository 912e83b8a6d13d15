#![deny(missing_docs)]
//! This crate computes a precise, structured description of how to turn one
//! sequence of lines into another, down to character-level inner changes
//! within each changed region — the VSCode-parity diff core.
//!
//! The entry point is [`compute_diff`]. It runs a fixed five-stage
//! pipeline: build the line/character sequence adapters, run the Myers
//! `O(ND)` engine under a wall-clock budget, optimize the raw edit script
//! into human-preferred boundaries, refine each surviving line diff to
//! character level, and assemble the result.
//!
//! ```
//! # use vscode_diff_core::{compute_diff, DiffOptions};
//! let original = ["line 1", "line 2"];
//! let modified = ["line 1", "line 3"];
//! let diff = compute_diff(&original, &modified, &DiffOptions::default());
//! assert_eq!(diff.changes.len(), 1);
//! assert_eq!(diff.changes[0].original.start_line, 2);
//! assert!(!diff.hit_timeout);
//! ```
//!
//! The call is pure: no I/O, no global state, and two calls on identical
//! inputs return byte-identical output (down to the diagnostic text
//! rendering used by the golden-test harness and the `textdiff` CLI).

mod char_diff;
mod char_sequence;
pub mod diagnostic;
pub mod error;
mod intern;
mod line_diff;
mod myers;
mod optimize;
mod range;
mod sequence;
mod timeout;
mod whitespace;

#[cfg(test)]
mod tests;

pub use char_diff::RangeMapping;
pub use range::{CharRange, LineRange, Position};

/// Options accepted by [`compute_diff`] (spec §6).
///
/// Mirrors the shape of the teacher crate's `UnifiedDiffConfig`: a plain
/// struct with a `Default` impl and no external configuration source.
#[derive(Debug, Clone, Copy)]
pub struct DiffOptions {
    /// When set, lines are compared ignoring leading/trailing whitespace;
    /// see §4.2 step 1.
    pub ignore_trim_whitespace: bool,
    /// When set together with `ignore_trim_whitespace`, the whitespace-gap
    /// scan (§4.2 step 5) emits a synthetic mapping for line pairs that
    /// differ only in leading/trailing whitespace, so a whitespace-sensitive
    /// renderer can still flag the change. Ignored when
    /// `ignore_trim_whitespace` is `false`. Off by default: per §8
    /// "Whitespace insensitivity", a whitespace-only change yields zero
    /// changes unless the caller opts into this.
    pub whitespace_sensitive_inner_changes: bool,
    /// Wall-clock budget for the whole call, in milliseconds. `0` means
    /// unlimited. Negative values can't be represented by the `u32` this
    /// field uses; callers that might produce one should clamp to `0`
    /// before constructing `DiffOptions` (spec §7).
    pub max_computation_time_ms: u32,
    /// Accepted for forward compatibility with move detection (spec §1,
    /// §6); the engine does not implement move detection and ignores this
    /// field. [`LinesDiff::moves`] is always empty.
    pub compute_moves: bool,
    /// When set, character-level word extension (§4.4 step 4) is followed
    /// by a subword extension pass (§4.4 step 5): CamelCase/snake_case
    /// boundaries also stop the extension.
    pub extend_to_subwords: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            ignore_trim_whitespace: false,
            whitespace_sensitive_inner_changes: false,
            max_computation_time_ms: 5000,
            compute_moves: false,
            extend_to_subwords: false,
        }
    }
}

/// One line-range mapping plus the character-level changes inside it (spec
/// §3 `DetailedLineRangeMapping`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedLineRangeMapping {
    /// The affected line range on the original side.
    pub original: LineRange,
    /// The affected line range on the modified side.
    pub modified: LineRange,
    /// Character-level changes inside this line range, in order.
    pub inner_changes: Vec<RangeMapping>,
}

/// A moved block of text. Always absent in this engine's output; kept only
/// so that callers compiled against a future move-detection-capable version
/// of this API don't need to change (spec §1, §3, §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// The range the moved block occupied in the original file.
    pub original: LineRange,
    /// The range the moved block occupies in the modified file.
    pub modified: LineRange,
}

/// The top-level result of [`compute_diff`] (spec §3 `LinesDiff`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinesDiff {
    /// Line-range mappings, sorted and pairwise disjoint on both sides.
    pub changes: Vec<DetailedLineRangeMapping>,
    /// Always empty; move detection is out of scope for this engine (spec
    /// §1 Non-goals).
    pub moves: Vec<Move>,
    /// Whether the wall-clock budget was exhausted before an exact result
    /// could be produced. When `true`, `changes` is still a well-formed,
    /// renderable (if coarse) description of the diff.
    pub hit_timeout: bool,
}

/// Computes the diff between `original` and `modified` (spec §4.5, §6).
///
/// Guarantees (spec §4.5): `changes` is sorted and pairwise disjoint on
/// both sides; every mapping has at least one non-empty side; the result is
/// always a complete, valid `LinesDiff`, even when `hit_timeout` is `true`;
/// the call is pure — two calls on identical inputs return byte-identical
/// output.
///
/// Per spec §7, a negative timeout can't reach this function (the `u32`
/// field can't represent one); an empty `original`/`modified` slice is a
/// valid input and produces an empty or single-insertion/deletion result,
/// not an error.
pub fn compute_diff(original: &[&str], modified: &[&str], options: &DiffOptions) -> LinesDiff {
    let (changes, hit_timeout) = line_diff::compute(original, modified, options);
    debug_assert!(is_sorted_and_disjoint(&changes));
    LinesDiff {
        changes,
        moves: Vec::new(),
        hit_timeout,
    }
}

fn is_sorted_and_disjoint(changes: &[DetailedLineRangeMapping]) -> bool {
    changes.windows(2).all(|w| {
        w[0].original.end_line_exclusive <= w[1].original.start_line
            && w[0].modified.end_line_exclusive <= w[1].modified.start_line
    })
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn empty_inputs_produce_no_changes() {
        let diff = compute_diff(&[], &[], &DiffOptions::default());
        assert!(diff.changes.is_empty());
        assert!(!diff.hit_timeout);
        assert!(diff.moves.is_empty());
    }

    #[test]
    fn empty_to_non_empty_is_one_mapping_spanning_all_of_modified() {
        let modified = ["a", "b"];
        let diff = compute_diff(&[], &modified, &DiffOptions::default());
        assert_eq!(diff.changes.len(), 1);
        assert_eq!(diff.changes[0].original, LineRange::new(1, 1));
        assert_eq!(diff.changes[0].modified, LineRange::new(1, 3));
    }
}
