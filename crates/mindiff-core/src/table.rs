//! Reachability table `can_form[i][j][t]`.
//!
//! `can_form[i][j][t]` is `true` iff some subset of exactly `j` weights drawn
//! from the first `i` weights sums to exactly `t`. Dimensions are
//! `(n+1) × (n/2+1) × (total/2+1)`.
//!
//! ## Layout
//! One flat `Vec<bool>`, row-major in `(i, j, t)`, sized exactly once before
//! filling. The cell count is computed with checked arithmetic and compared
//! against [`SolverOptions::max_table_cells`] before allocation.
//!
//! ## Recurrence
//! For `i ≥ 1`, `j ≥ 1`, `0 ≤ t ≤ target`:
//!
//! ```text
//! can_form[i][j][t] = can_form[i-1][j][t]
//!                  || (t ≥ w[i-1] && can_form[i-1][j-1][t - w[i-1]])
//! ```
//!
//! with the base case `can_form[i][0][0] = true` for every `i`. The `t = 0`
//! column is filled for `j ≥ 1` as well, so subsets made of zero weights are
//! recorded.
//!
//! ## Complexity
//! - Time and space: `O(n · n/2 · total/2)`.

use tracing::debug;

use crate::{PartitionError, SolverOptions, WeightList};

/// Dense three-dimensional boolean table, read-only once built.
#[derive(Clone, Debug)]
pub struct ReachabilityTable {
    items: usize,
    group_size: usize,
    target: usize,
    cells: Vec<bool>,
}

impl ReachabilityTable {
    /// Build and fill the table for `weights`.
    ///
    /// # Errors
    /// [`PartitionError::TableTooLarge`] if the table would exceed
    /// `opts.max_table_cells` (or overflow the address space).
    pub fn build(weights: &WeightList, opts: &SolverOptions) -> Result<Self, PartitionError> {
        let items = weights.len();
        let group_size = weights.group_size();
        let target_u64 = weights.target();

        let cells = cell_count(items, group_size, target_u64);
        let limit = opts.max_table_cells;
        let too_large = PartitionError::TableTooLarge {
            cells: cells.unwrap_or(u64::MAX),
            limit,
        };
        let cells = match cells {
            Some(c) if c <= limit => c,
            _ => return Err(too_large),
        };
        let (Ok(target), Ok(len)) = (usize::try_from(target_u64), usize::try_from(cells)) else {
            return Err(too_large);
        };

        debug!(items, group_size, target, cells, "allocating reachability table");

        let mut table = Self {
            items,
            group_size,
            target,
            cells: vec![false; len],
        };
        table.fill(weights.as_slice());
        Ok(table)
    }

    fn fill(&mut self, weights: &[u32]) {
        for i in 0..=self.items {
            let at = self.index(i, 0, 0);
            self.cells[at] = true;
        }

        for i in 1..=self.items {
            // A weight larger than the target can never be included.
            let w = usize::try_from(weights[i - 1]).unwrap_or(usize::MAX);
            for j in 1..=self.group_size {
                for t in 0..=self.target {
                    let exclude = self.get(i - 1, j, t);
                    let include = t >= w && self.get(i - 1, j - 1, t - w);
                    let at = self.index(i, j, t);
                    self.cells[at] = exclude || include;
                }
            }
        }
    }

    #[inline]
    const fn index(&self, i: usize, j: usize, t: usize) -> usize {
        (i * (self.group_size + 1) + j) * (self.target + 1) + t
    }

    /// Read `can_form[i][j][t]`; out-of-range coordinates read as `false`.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize, t: usize) -> bool {
        if i > self.items || j > self.group_size || t > self.target {
            return false;
        }
        self.cells[self.index(i, j, t)]
    }

    /// Number of weights `n` (the `i` axis spans `0..=n`).
    #[inline]
    #[must_use]
    pub const fn items(&self) -> usize {
        self.items
    }

    /// Subset size `n/2` (the `j` axis spans `0..=n/2`).
    #[inline]
    #[must_use]
    pub const fn group_size(&self) -> usize {
        self.group_size
    }

    /// Half the total weight (the `t` axis spans `0..=target`).
    #[inline]
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never empty: `can_form[0][0][0]` always exists.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// `(n+1) * (g+1) * (target+1)`, or `None` on overflow.
fn cell_count(items: usize, group_size: usize, target: u64) -> Option<u64> {
    let n = u64::try_from(items).ok()?.checked_add(1)?;
    let g = u64::try_from(group_size).ok()?.checked_add(1)?;
    let t = target.checked_add(1)?;
    n.checked_mul(g)?.checked_mul(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(v: Vec<u32>) -> ReachabilityTable {
        let w = WeightList::new(v).unwrap();
        ReachabilityTable::build(&w, &SolverOptions::default()).unwrap()
    }

    #[test]
    fn dimensions_match_input() {
        let t = build(vec![1, 6, 2, 4]);
        assert_eq!(t.items(), 4);
        assert_eq!(t.group_size(), 2);
        assert_eq!(t.target(), 6);
        assert_eq!(t.len(), 5 * 3 * 7);
    }

    #[test]
    fn empty_subset_always_reachable() {
        let t = build(vec![9, 9, 9, 9, 9, 9]);
        for i in 0..=6 {
            assert!(t.get(i, 0, 0), "row {i} lost the empty subset");
        }
        // Nothing else in the j = 0 row.
        for s in 1..=t.target() {
            assert!(!t.get(6, 0, s));
        }
    }

    #[test]
    fn final_slice_lists_pair_sums() {
        // Pairs of [1, 6, 2, 4]: 7, 3, 5, 8, 10, 6 → those ≤ 6 are 3, 5, 6.
        let t = build(vec![1, 6, 2, 4]);
        let reachable: Vec<usize> = (0..=t.target()).filter(|&s| t.get(4, 2, s)).collect();
        assert_eq!(reachable, vec![3, 5, 6]);
    }

    #[test]
    fn zero_weights_fill_t_zero_column() {
        let t = build(vec![0, 0, 0, 0]);
        assert_eq!(t.target(), 0);
        assert!(t.get(4, 2, 0));
        assert!(t.get(2, 2, 0));
        assert!(!t.get(1, 2, 0));
    }

    #[test]
    fn out_of_range_reads_false() {
        let t = build(vec![3, 7]);
        assert!(!t.get(3, 0, 0));
        assert!(!t.get(0, 2, 0));
        assert!(!t.get(0, 0, 99));
    }

    #[test]
    fn cap_rejects_before_allocating() {
        let w = WeightList::new(vec![1_000_000, 1_000_000]).unwrap();
        let opts = SolverOptions::default().with_max_table_cells(1_000);
        let err = ReachabilityTable::build(&w, &opts).unwrap_err();
        match err {
            PartitionError::TableTooLarge { cells, limit } => {
                assert_eq!(cells, 3 * 2 * 1_000_001);
                assert_eq!(limit, 1_000);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn cell_count_overflow_is_none() {
        assert_eq!(cell_count(usize::MAX, 1, 1), None);
        assert_eq!(cell_count(2, 1, u64::MAX), None);
        assert_eq!(cell_count(4, 2, 6), Some(5 * 3 * 7));
    }
}
