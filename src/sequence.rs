//! The sequence abstraction consumed by the Myers engine and the shared
//! optimization passes (spec §3, §9: "polymorphism over sequences").
//!
//! Two concrete sequences implement this trait: [`LineSequence`] here, and
//! [`LinesSliceCharSequence`](crate::char_sequence::LinesSliceCharSequence).
//! Neither the engine nor `src/optimize.rs` know about lines or characters
//! directly; they only ever call through `Sequence`.

use crate::intern::{Interner, Token};

/// A sequence of comparable elements, as seen by the diff engine.
///
/// `hash` must be *exact*: two positions (possibly in different `Sequence`
/// values of the same concrete type) are considered equal by the engine iff
/// their hashes match. Implementations achieve this either by interning
/// (see [`LineSequence`]) or, for small fixed alphabets like `char`, by using
/// the value itself as the hash.
///
/// `is_strongly_equal` is a stricter relation than hash-equality, used only
/// by the post-processing passes to avoid merging positions that should stay
/// visually distinct (spec §3, §4.3).
pub trait Sequence {
    fn len(&self) -> u32;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn hash(&self, index: u32) -> u64;

    /// Higher is a more natural place to put a diff boundary. Defaults to a
    /// constant (no preference) for sequences that don't implement one.
    fn boundary_score(&self, _index: u32) -> i32 {
        0
    }

    /// Whether position `a` of `self` and position `b` of `other` should be
    /// treated as strongly equal. `other` is always the same concrete type,
    /// typically the opposite side of the same diff.
    fn is_strongly_equal(&self, a: u32, other: &Self, b: u32) -> bool
    where
        Self: Sized;
}

/// A sequence of whole lines (spec §3 `LineSequence`).
///
/// Owns references to the original line strings plus one interned [`Token`]
/// per line, computed under the caller's `ignore_trim_whitespace` setting.
/// When trim-insensitive hashing is in effect, the original (untrimmed) line
/// is still retained so [`is_strongly_equal`](Sequence::is_strongly_equal)
/// and the whitespace-gap scan (§4.2 step 5) can recover the exact text.
pub struct LineSequence<'a> {
    lines: &'a [&'a str],
    hashes: Vec<Token>,
    ignore_trim_whitespace: bool,
}

impl<'a> LineSequence<'a> {
    /// `interner` is shared between the `original` and `modified`
    /// `LineSequence` of one `compute_diff` call, so identical line content
    /// on either side interns to the same `Token` and therefore the same hash.
    pub fn new(
        lines: &'a [&'a str],
        ignore_trim_whitespace: bool,
        interner: &mut Interner<&'a str>,
    ) -> Self {
        let hashes = lines
            .iter()
            .map(|line| {
                if ignore_trim_whitespace {
                    interner.intern(line.trim())
                } else {
                    interner.intern(line)
                }
            })
            .collect();
        LineSequence {
            lines,
            hashes,
            ignore_trim_whitespace,
        }
    }

    pub fn line(&self, index: u32) -> &'a str {
        self.lines[index as usize]
    }

    pub fn lines(&self) -> &'a [&'a str] {
        self.lines
    }
}

impl Sequence for LineSequence<'_> {
    fn len(&self) -> u32 {
        self.lines.len() as u32
    }

    fn hash(&self, index: u32) -> u64 {
        self.hashes[index as usize].0 as u64
    }

    fn boundary_score(&self, index: u32) -> i32 {
        line_boundary_score(self.lines, index)
    }

    fn is_strongly_equal(&self, a: u32, other: &Self, b: u32) -> bool {
        if self.ignore_trim_whitespace || other.ignore_trim_whitespace {
            self.lines[a as usize] == other.lines[b as usize]
        } else {
            self.hashes[a as usize] == other.hashes[b as usize]
        }
    }
}

/// Indentation level of a line, tab-expanded; `None` for a blank (or
/// whitespace-only) line. Mirrors the teacher's `IndentLevel`, generalized
/// off `Token` onto raw line text.
fn indent_level(line: &str) -> Option<u32> {
    const TAB_WIDTH: u32 = 8;
    const MAX: u32 = 200;
    let mut indent = 0u32;
    for c in line.chars() {
        match c {
            ' ' => indent += 1,
            '\t' => indent += TAB_WIDTH - indent % TAB_WIDTH,
            '\r' | '\n' | '\x0C' => (),
            _ => return Some(indent),
        }
        if indent >= MAX {
            return Some(indent);
        }
    }
    None
}

const MAX_BLANKS: usize = 20;
const START_OF_FILE_PENALTY: i32 = 1;
const END_OF_FILE_PENALTY: i32 = 21;
const TOTAL_BLANK_LINE_WEIGHT: i32 = -30;
const TRAILING_BLANK_LINES_WEIGHT: i32 = 6;
const RELATIVE_INDENT_PENALTY: i32 = -4;
const RELATIVE_INDENT_WITH_BLANK_PENALTY: i32 = 10;
const RELATIVE_OUTDENT_PENALTY: i32 = 24;
const RELATIVE_OUTDENT_WITH_BLANK_PENALTY: i32 = 17;
const RELATIVE_DEDENT_PENALTY: i32 = 23;
const RELATIVE_DEDENT_WITH_BLANK_PENALTY: i32 = 17;

/// Boundary score for placing a diff boundary just before `lines[index]`
/// (i.e. between `lines[index - 1]` and `lines[index]`).
///
/// Ported from the indentation heuristic used throughout the retrieval
/// pack's git-derived diff tooling (`xdiffi.c`'s indent heuristic, as
/// expressed by the teacher's `slider_heuristic.rs`): boundaries right
/// before/after blank runs, and boundaries that keep indentation aligned
/// with the surrounding block, score higher.
fn line_boundary_score(lines: &[&str], index: u32) -> i32 {
    let index = index as usize;
    let (leading_blanks, prev_indent) = lines[..index]
        .iter()
        .rev()
        .take(MAX_BLANKS + 1)
        .enumerate()
        .find_map(|(i, line)| indent_level(line).map(|lvl| (i, Some(lvl))))
        .unwrap_or((index.min(MAX_BLANKS), None));
    let (trailing_blanks, next_indent) = lines[index..]
        .iter()
        .take(MAX_BLANKS + 1)
        .enumerate()
        .find_map(|(i, line)| indent_level(line).map(|lvl| (i, Some(lvl))))
        .unwrap_or(((lines.len() - index).min(MAX_BLANKS), None));
    let indent = lines.get(index).and_then(|l| indent_level(l));

    let mut penalty = 0;
    if prev_indent.is_none() && leading_blanks == 0 {
        penalty += START_OF_FILE_PENALTY;
    }
    if next_indent.is_none() && trailing_blanks == 0 {
        penalty += END_OF_FILE_PENALTY;
    }
    let trailing_blank_lines = if indent.is_none() {
        trailing_blanks as i32 + 1
    } else {
        0
    };
    let total_blank_lines = trailing_blank_lines + leading_blanks as i32;
    penalty +=
        TOTAL_BLANK_LINE_WEIGHT * total_blank_lines + trailing_blank_lines * TRAILING_BLANK_LINES_WEIGHT;

    let effective_indent = indent.or(next_indent);
    if let (Some(indent), Some(prev)) = (effective_indent, prev_indent) {
        use std::cmp::Ordering::*;
        match indent.cmp(&prev) {
            Equal => {}
            Less if next_indent.map_or(false, |n| n <= indent) => {
                penalty += if total_blank_lines != 0 {
                    RELATIVE_DEDENT_WITH_BLANK_PENALTY
                } else {
                    RELATIVE_DEDENT_PENALTY
                }
            }
            Less => {
                penalty += if total_blank_lines != 0 {
                    RELATIVE_OUTDENT_WITH_BLANK_PENALTY
                } else {
                    RELATIVE_OUTDENT_PENALTY
                }
            }
            Greater => {
                penalty += if total_blank_lines != 0 {
                    RELATIVE_INDENT_WITH_BLANK_PENALTY
                } else {
                    RELATIVE_INDENT_PENALTY
                }
            }
        }
    }
    // Higher score == more natural boundary, so we negate the (lower-is-better) penalty.
    -penalty
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq<'a>(lines: &'a [&'a str]) -> LineSequence<'a> {
        let mut interner = Interner::new(lines.len());
        LineSequence::new(lines, false, &mut interner)
    }

    #[test]
    fn identical_lines_hash_equal() {
        let a = seq(&["foo\n", "bar\n"]);
        let b = seq(&["foo\n", "baz\n"]);
        assert_eq!(a.hash(0), b.hash(0));
        assert_ne!(a.hash(1), b.hash(1));
    }

    #[test]
    fn trim_insensitive_hash_ignores_indentation() {
        let mut interner = Interner::new(4);
        let a = LineSequence::new(&["  foo();\n"], true, &mut interner);
        let b = LineSequence::new(&["    foo();\n"], true, &mut interner);
        assert_eq!(a.hash(0), b.hash(0));
        assert!(!a.is_strongly_equal(0, &b, 0));
    }

    #[test]
    fn blank_line_boundary_scores_higher_than_mid_block() {
        let lines = ["fn f() {\n", "\n", "    x();\n", "}\n"];
        let at_blank = line_boundary_score(&lines, 1);
        let mid_block = line_boundary_score(&lines, 2);
        assert!(at_blank > mid_block);
    }
}
