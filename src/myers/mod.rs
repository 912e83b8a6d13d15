//! The classic full-trace Myers `O(ND)` diff search (spec §4.1, §9).
//!
//! This is the textbook forward search with backtracking through saved
//! per-`d` `V`-array snapshots, not a linear-space divide-and-conquer
//! variant: the snapshots are exactly what let the backtrack recover the
//! full edit script in one pass instead of recursing on sub-problems.

mod array_v;
pub mod dp;

use crate::range::{OffsetRange, SequenceDiff};
use crate::sequence::Sequence;
use crate::timeout::DiffTimeout;
use array_v::ArrayV;

/// Below this combined length, the `O(NM)` DP fallback is both simpler and
/// faster in practice (spec §4.1 "Fallback to DP").
const DP_THRESHOLD: u32 = 500;

/// Computes the diff between `a` and `b`. Returns the list of non-equal
/// spans plus whether the computation hit `timeout` before finishing (in
/// which case the list degenerates to a single span covering everything).
pub fn diff<A: Sequence, B: Sequence>(a: &A, b: &B, timeout: &DiffTimeout) -> (Vec<SequenceDiff>, bool) {
    let n = a.len();
    let m = b.len();

    if n + m < DP_THRESHOLD {
        return dp::diff(a, b, timeout);
    }

    if timeout.is_elapsed() {
        return (
            vec![SequenceDiff::new(OffsetRange::new(0, n), OffsetRange::new(0, m))],
            true,
        );
    }

    let n = n as i64;
    let m = m as i64;
    let max_d = n + m;
    let mut v = ArrayV::new(max_d);
    let mut cur = vec![0i64; (2 * max_d + 1) as usize];
    let idx = |k: i64| (k + max_d) as usize;

    cur[idx(1)] = 0; // x at k=1 before d=0 probe, per the standard recurrence seed.

    let mut found_at = None;
    'outer: for d in 0..=max_d {
        if d > 0 && timeout.is_elapsed() {
            return (
                vec![SequenceDiff::new(OffsetRange::new(0, n as u32), OffsetRange::new(0, m as u32))],
                true,
            );
        }

        let mut k = -d;
        while k <= d {
            let mut x = if k == -d || (k != d && cur[idx(k - 1)] < cur[idx(k + 1)]) {
                cur[idx(k + 1)]
            } else {
                cur[idx(k - 1)] + 1
            };
            let mut y = x - k;
            while x < n && y < m && a.hash(x as u32) == b.hash(y as u32) {
                x += 1;
                y += 1;
            }
            cur[idx(k)] = x;
            if x >= n && y >= m {
                found_at = Some(d);
                v.push_row(&cur);
                break 'outer;
            }
            k += 2;
        }
        v.push_row(&cur);
    }

    let d_final = match found_at {
        Some(d) => d,
        // a.len()+b.len() bounds the maximum edit distance, so the loop above
        // always finds a solution by d == max_d; this is unreachable.
        None => {
            debug_assert!(false, "Myers search did not converge within max_d");
            return (
                vec![SequenceDiff::new(OffsetRange::new(0, n as u32), OffsetRange::new(0, m as u32))],
                false,
            );
        }
    };

    (backtrack(&v, d_final, n, m, max_d), false)
}

enum Step {
    Diag,
    Edit { prev_x: i64, prev_y: i64, x: i64, y: i64 },
}

fn backtrack(v: &ArrayV, d_final: i64, n: i64, m: i64, _max_d: i64) -> Vec<SequenceDiff> {
    let mut steps = Vec::new();
    let mut x = n;
    let mut y = m;

    for d in (0..=d_final).rev() {
        let k = x - y;
        let prev_k = if d == 0 {
            0
        } else if k == -d || (k != d && v.get((d - 1) as usize, k - 1) < v.get((d - 1) as usize, k + 1)) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = if d == 0 { 0 } else { v.get((d - 1) as usize, prev_k) };
        let prev_y = prev_x - prev_k;

        // The single non-diagonal move of this `d`, from (prev_x, prev_y) to
        // (mid_x, mid_y); everything from (mid_x, mid_y) to (x, y) is the
        // diagonal snake that follows it.
        let (mid_x, mid_y) = if d == 0 {
            (x, y)
        } else if k == prev_k + 1 {
            (prev_x + 1, prev_y) // horizontal: consumed one element of a
        } else {
            (prev_x, prev_y + 1) // vertical: consumed one element of b
        };

        let snake_len = x - mid_x;
        for _ in 0..snake_len {
            steps.push(Step::Diag);
        }

        if d > 0 {
            steps.push(Step::Edit {
                prev_x,
                prev_y,
                x: mid_x,
                y: mid_y,
            });
        }

        x = prev_x;
        y = prev_y;
    }

    steps.reverse();

    let mut result = Vec::new();
    let mut open: Option<SequenceDiff> = None;
    for step in steps {
        match step {
            Step::Diag => {
                if let Some(d) = open.take() {
                    result.push(d);
                }
            }
            Step::Edit { prev_x, prev_y, x, y } => {
                let edit = if x - prev_x == 1 {
                    // horizontal move: consumed one element of `a`, none of `b`
                    SequenceDiff::new(OffsetRange::new(prev_x as u32, x as u32), OffsetRange::empty_at(prev_y as u32))
                } else {
                    // vertical move: consumed one element of `b`, none of `a`
                    SequenceDiff::new(OffsetRange::empty_at(prev_x as u32), OffsetRange::new(prev_y as u32, y as u32))
                };
                open = Some(match open.take() {
                    Some(o) => o.join(&edit),
                    None => edit,
                });
            }
        }
    }
    if let Some(d) = open {
        result.push(d);
    }
    result
}
