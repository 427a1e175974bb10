//! Closest-target selection over the final table slice.

use tracing::debug;

use crate::{PartitionError, ReachabilityTable};

/// Outcome of the selector, handed unchanged to the reconstructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Largest reachable sum `≤ target` for a subset of `group_size` items.
    pub best: usize,
    /// Half the total weight.
    pub target: usize,
    /// Subset size `n/2`.
    pub group_size: usize,
    /// Number of weights `n`.
    pub items: usize,
}

impl Selection {
    /// Shortfall from a perfectly balanced half, `target - best` (0 if `best > target`).
    #[inline]
    #[must_use]
    pub const fn shortfall(&self) -> usize {
        self.target.saturating_sub(self.best)
    }
}

/// Find `best = max { t ≤ target : can_form[n][n/2][t] }`.
///
/// The scan walks down from `target` and stops at the first reachable cell,
/// so the maximum is unique and no tie-break is involved.
///
/// # Errors
/// [`PartitionError::NoFeasibleSplit`] if `n/2 == 0` or the slice is empty.
pub fn select_closest(table: &ReachabilityTable) -> Result<Selection, PartitionError> {
    let (n, g) = (table.items(), table.group_size());
    if g == 0 {
        return Err(PartitionError::NoFeasibleSplit);
    }

    let best = (0..=table.target())
        .rev()
        .find(|&t| table.get(n, g, t))
        .ok_or(PartitionError::NoFeasibleSplit)?;

    debug!(best, target = table.target(), "selected closest reachable sum");
    Ok(Selection {
        best,
        target: table.target(),
        group_size: g,
        items: n,
    })
}
