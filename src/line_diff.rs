//! The line-level diff pipeline (spec §4.2): Myers on lines, optimize,
//! refine each surviving diff to character level, scan whitespace-only
//! gaps when the caller has opted into whitespace-sensitive inner changes,
//! and assemble the final mapping list.

use crate::char_diff::{self, RangeMapping};
use crate::intern::Interner;
use crate::myers;
use crate::optimize;
use crate::range::{LineRange, SequenceDiff};
use crate::sequence::{LineSequence, Sequence};
use crate::timeout::DiffTimeout;
use crate::whitespace;
use crate::{DetailedLineRangeMapping, DiffOptions};

/// Below this, two adjacent line diffs separated by an equal run are
/// always merged (spec §4.3 "Join adjacent", line-level threshold).
const LINE_JOIN_THRESHOLD: u32 = 3;

pub fn compute(
    original_lines: &[&str],
    modified_lines: &[&str],
    options: &DiffOptions,
) -> (Vec<DetailedLineRangeMapping>, bool) {
    let timeout = DiffTimeout::new(options.max_computation_time_ms);

    let mut interner = Interner::new(original_lines.len() + modified_lines.len());
    let a = LineSequence::new(original_lines, options.ignore_trim_whitespace, &mut interner);
    let b = LineSequence::new(modified_lines, options.ignore_trim_whitespace, &mut interner);

    let (mut line_diffs, mut hit_timeout) = myers::diff(&a, &b, &timeout);

    if hit_timeout {
        let mapping = trivial_mapping(&a, &b, original_lines, modified_lines, options, &timeout);
        return (vec![mapping], true);
    }

    optimize::optimize(&mut line_diffs, &a, &b, LINE_JOIN_THRESHOLD);

    let mut changes = Vec::with_capacity(line_diffs.len());
    for diff in &line_diffs {
        let result = char_diff::refine(
            original_lines,
            modified_lines,
            *diff,
            options.ignore_trim_whitespace,
            options.extend_to_subwords,
            &timeout,
        );
        hit_timeout |= result.hit_timeout;
        changes.push(DetailedLineRangeMapping {
            original: LineRange::from_offsets(diff.seq1),
            modified: LineRange::from_offsets(diff.seq2),
            inner_changes: result.mappings,
        });
    }

    if options.ignore_trim_whitespace && options.whitespace_sensitive_inner_changes {
        for gap in whitespace::scan_gaps(original_lines, modified_lines, &line_diffs) {
            let insert_at = changes.partition_point(|c| c.original.start_line < gap.line_diff.seq1.start + 1);
            changes.insert(
                insert_at,
                DetailedLineRangeMapping {
                    original: LineRange::from_offsets(gap.line_diff.seq1),
                    modified: LineRange::from_offsets(gap.line_diff.seq2),
                    inner_changes: vec![gap.mapping],
                },
            );
        }
    }

    (changes, hit_timeout)
}

fn trivial_mapping(
    a: &LineSequence,
    b: &LineSequence,
    original_lines: &[&str],
    modified_lines: &[&str],
    _options: &DiffOptions,
    _timeout: &DiffTimeout,
) -> DetailedLineRangeMapping {
    let whole = SequenceDiff::new(
        crate::range::OffsetRange::new(0, a.len()),
        crate::range::OffsetRange::new(0, b.len()),
    );
    DetailedLineRangeMapping {
        original: LineRange::from_offsets(whole.seq1),
        modified: LineRange::from_offsets(whole.seq2),
        inner_changes: vec![RangeMapping {
            original: crate::range::CharRange::new(
                crate::range::Position::new(1, 1),
                end_of_text_position(original_lines),
            ),
            modified: crate::range::CharRange::new(
                crate::range::Position::new(1, 1),
                end_of_text_position(modified_lines),
            ),
        }],
    }
}

fn end_of_text_position(lines: &[&str]) -> crate::range::Position {
    match lines.last() {
        Some(last) => crate::range::Position::new(lines.len() as u32, last.chars().count() as u32 + 1),
        None => crate::range::Position::new(1, 1),
    }
}
