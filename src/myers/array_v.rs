//! Storage for the per-`d` Myers frontier, one snapshot per outer iteration
//! (spec §4.1 "Resource shape", §9 "Myers `V`-array storage").
//!
//! A flat, row-major buffer is used instead of a `Vec<Vec<i64>>` of
//! snapshots: access during both the forward search and the backtrack is
//! row-sequential within one `d` and essentially random across `k`, which is
//! exactly the pattern a single contiguous allocation with row-stride
//! indexing favors. Using a `HashMap`-of-rows or similar would add a
//! non-trivial constant factor that dominates for the small inputs that make
//! up the bulk of real diffs.

/// Diagonal index `k` ranges over `-max_d..=max_d`; `offset == max_d` maps it
/// into a non-negative column index.
pub struct ArrayV {
    stride: usize,
    offset: i64,
    data: Vec<i64>,
}

impl ArrayV {
    pub fn new(max_d: i64) -> Self {
        ArrayV {
            stride: 2 * max_d as usize + 1,
            offset: max_d,
            data: Vec::new(),
        }
    }

    /// Appends a new row, copied from `row`. `row.len()` must equal `stride`.
    pub fn push_row(&mut self, row: &[i64]) {
        debug_assert_eq!(row.len(), self.stride);
        self.data.extend_from_slice(row);
    }

    pub fn get(&self, row: usize, k: i64) -> i64 {
        self.data[row * self.stride + (k + self.offset) as usize]
    }
}
