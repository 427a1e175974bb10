//! Solve façade: table → selection → reconstruction.

use tracing::{debug, debug_span};

use crate::{
    reconstruct, select_closest, Partition, PartitionError, ReachabilityTable, SolverOptions,
    WeightList,
};

/// Split `weights` into two halves of equal size with minimal difference.
///
/// The table is owned by this call and dropped before it returns.
///
/// # Errors
/// - [`PartitionError::TableTooLarge`] if the table exceeds the cell budget.
/// - [`PartitionError::NoFeasibleSplit`] / [`PartitionError::ReconstructionInconsistent`]
///   on internal invariant violations.
pub fn solve(weights: &WeightList, opts: &SolverOptions) -> Result<Partition, PartitionError> {
    let _span = debug_span!("solve", n = weights.len(), total = weights.total()).entered();

    let table = ReachabilityTable::build(weights, opts)?;
    let selection = select_closest(&table)?;
    let partition = reconstruct(&table, weights, &selection)?;

    debug!(difference = partition.difference(), "partition found");
    Ok(partition)
}
