//! Backward reconstruction of one optimal subset.
//!
//! No parent pointers are stored; each step re-derives which branch of the
//! recurrence explains the current cell:
//!
//! - **include** item `k` if `can_form[k][pick-1][rem - w[k]]`,
//! - otherwise **exclude** it if `can_form[k][pick][rem]`.
//!
//! Include wins whenever both hold, so the recovered subset is deterministic.
//! A cell that neither branch explains means the table is inconsistent; that
//! is reported as an error rather than retried.

use tracing::debug;

use crate::{Partition, PartitionError, ReachabilityTable, Selection, WeightList};

/// Immutable walk state `(remaining_sum, considered, to_pick)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    /// Sum still to be explained.
    pub remaining_sum: usize,
    /// Items `0..considered` are still candidates.
    pub considered: usize,
    /// Items still to be chosen.
    pub to_pick: usize,
}

impl Cursor {
    /// Starting point of the walk for `sel`.
    #[inline]
    #[must_use]
    pub const fn start(sel: &Selection) -> Self {
        Self {
            remaining_sum: sel.best,
            considered: sel.items,
            to_pick: sel.group_size,
        }
    }

    /// Cursor after taking the last considered item of weight `w`.
    /// Each field saturates at zero.
    #[inline]
    #[must_use]
    pub const fn include(self, w: usize) -> Self {
        Self {
            remaining_sum: self.remaining_sum.saturating_sub(w),
            considered: self.considered.saturating_sub(1),
            to_pick: self.to_pick.saturating_sub(1),
        }
    }

    /// Cursor after skipping the last considered item.
    #[inline]
    #[must_use]
    pub const fn exclude(self) -> Self {
        Self {
            considered: self.considered.saturating_sub(1),
            ..self
        }
    }

    /// Walk finished: nothing left to pick and nothing left to explain.
    #[inline]
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.to_pick == 0 && self.remaining_sum == 0
    }
}

/// Recover `set_a` (size `n/2`, sum `best`) and its complement.
///
/// # Errors
/// [`PartitionError::ReconstructionInconsistent`] if the walk cannot explain
/// a cell, runs out of items, or the recovered sums disagree with `sel`.
pub fn reconstruct(
    table: &ReachabilityTable,
    weights: &WeightList,
    sel: &Selection,
) -> Result<Partition, PartitionError> {
    if weights.len() != table.items() || sel.items != table.items() {
        return Err(PartitionError::inconsistent(format!(
            "table covers {} items, selection {}, weights {}",
            table.items(),
            sel.items,
            weights.len()
        )));
    }

    let w = weights.as_slice();
    let mut chosen = Vec::with_capacity(sel.group_size);
    let mut cur = Cursor::start(sel);

    while cur.to_pick > 0 {
        if cur.considered == 0 {
            return Err(PartitionError::inconsistent(format!(
                "ran out of items with {} still to pick (remaining sum {})",
                cur.to_pick, cur.remaining_sum
            )));
        }
        let k = cur.considered - 1;
        let wk = usize::try_from(w[k]).unwrap_or(usize::MAX);

        if cur.remaining_sum >= wk && table.get(k, cur.to_pick - 1, cur.remaining_sum - wk) {
            chosen.push(k);
            cur = cur.include(wk);
        } else if table.get(k, cur.to_pick, cur.remaining_sum) {
            cur = cur.exclude();
        } else {
            return Err(PartitionError::inconsistent(format!(
                "no branch explains cell ({}, {}, {})",
                cur.considered, cur.to_pick, cur.remaining_sum
            )));
        }
    }

    if !cur.is_done() {
        return Err(PartitionError::inconsistent(format!(
            "walk ended with remaining sum {}",
            cur.remaining_sum
        )));
    }

    chosen.reverse();
    let set_b: Vec<usize> = complement(&chosen, weights.len());

    let sum_a = weights.sum_of(&chosen);
    let sum_b = weights.sum_of(&set_b);
    let best = sel.best as u64;
    if sum_a != best || sum_b != weights.total() - best {
        return Err(PartitionError::inconsistent(format!(
            "subset sums to {sum_a} (expected {best}), complement to {sum_b}"
        )));
    }

    debug!(set_a = ?chosen, sum_a, sum_b, "reconstructed subset");
    Ok(Partition {
        set_a: chosen,
        set_b,
        sum_a,
        sum_b,
    })
}

/// Indices of `0..n` not in `chosen` (which must be ascending).
fn complement(chosen: &[usize], n: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(n - chosen.len());
    let mut it = chosen.iter().peekable();
    for i in 0..n {
        if it.peek() == Some(&&i) {
            it.next();
        } else {
            out.push(i);
        }
    }
    out
}
