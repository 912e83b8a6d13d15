//! The human-readable reference diagnostic format (spec §6), used by both
//! the CLI and the golden tests. Must be reproduced byte-for-byte: the test
//! oracle is a byte-diff against a reference implementation.

use std::fmt::Write;

use crate::LinesDiff;

/// Renders `diff` in the exact format described in spec §6:
///
/// ```text
/// Number of changes: N
/// Hit timeout: yes|no
/// [0] Lines a-b -> Lines c-d (k inner changes)
///   Inner: L<line>:C<col>-L<line>:C<col> -> L<line>:C<col>-L<line>:C<col>
/// ```
pub fn render(diff: &LinesDiff) -> String {
    let mut out = String::new();
    writeln!(out, "Number of changes: {}", diff.changes.len()).unwrap();
    writeln!(out, "Hit timeout: {}", if diff.hit_timeout { "yes" } else { "no" }).unwrap();

    for (i, change) in diff.changes.iter().enumerate() {
        let count = change.inner_changes.len();
        if count == 0 {
            writeln!(
                out,
                "[{i}] Lines {}-{} -> Lines {}-{} (no inner changes)",
                change.original.start_line,
                change.original.end_line_exclusive.saturating_sub(1),
                change.modified.start_line,
                change.modified.end_line_exclusive.saturating_sub(1),
            )
            .unwrap();
        } else {
            writeln!(
                out,
                "[{i}] Lines {}-{} -> Lines {}-{} ({count} inner change{})",
                change.original.start_line,
                change.original.end_line_exclusive.saturating_sub(1),
                change.modified.start_line,
                change.modified.end_line_exclusive.saturating_sub(1),
                if count == 1 { "" } else { "s" },
            )
            .unwrap();
            for inner in &change.inner_changes {
                writeln!(
                    out,
                    "  Inner: L{}:C{}-L{}:C{} -> L{}:C{}-L{}:C{}",
                    inner.original.start.line,
                    inner.original.start.column,
                    inner.original.end.line,
                    inner.original.end.column,
                    inner.modified.start.line,
                    inner.modified.start.column,
                    inner.modified.end.line,
                    inner.modified.end.column,
                )
                .unwrap();
            }
        }
    }
    out
}
