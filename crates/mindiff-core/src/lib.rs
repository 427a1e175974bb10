//! mindiff-core — equal-size two-way partitioning with minimal weight difference.
//!
//! Given an even number of non-negative weights, split them into two groups of
//! the same cardinality whose sums differ as little as possible. The solver is
//! the classic pseudo-polynomial dynamic program, organised as three strictly
//! sequential phases over one shared table:
//!
//! 1. [`table`]: build the reachability table `can_form[i][j][t]`
//!    ("choose exactly `j` of the first `i` weights summing to `t`").
//! 2. [`select`]: pick the largest reachable sum that does not exceed half
//!    the total weight.
//! 3. [`reconstruct`]: walk the table backwards to recover one concrete
//!    subset, preferring *include* whenever both branches explain a cell.
//!
//! The crate performs no I/O in the solver itself; [`io`] holds the boundary
//! helpers (weight parsing, report rendering, JSON export) used by the CLI.
//!
//! ```rust
//! use mindiff_core::{solve, SolverOptions, WeightList};
//!
//! let weights = WeightList::new(vec![1, 6, 2, 4])?;
//! let p = solve(&weights, &SolverOptions::default())?;
//! assert_eq!(p.sum_a, 6);
//! assert_eq!(p.sum_b, 7);
//! assert_eq!(p.difference(), 1);
//! # Ok::<(), mindiff_core::PartitionError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Small, explicit allowlist to keep docs readable and APIs ergonomic.
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]

/// Solver knobs (table size cap) and environment overrides.
pub mod config;
/// Typed error enum shared by every phase and the I/O boundary.
pub mod error;
/// Deterministic synthetic weight generator (benches, CLI `generate`).
pub mod generator;
/// Weight parsing, report rendering and JSON export.
pub mod io;
/// Backward walk that recovers one optimal subset from the table.
pub mod reconstruct;
/// Closest-to-half target selection over the final table slice.
pub mod select;
/// One-call façade running all three phases.
pub mod solver;
/// Three-dimensional reachability table.
pub mod table;
/// Core data types: weights, weight lists, partitions.
pub mod types;

pub use config::SolverOptions;
pub use error::PartitionError;
pub use reconstruct::{reconstruct, Cursor};
pub use select::{select_closest, Selection};
pub use solver::solve;
pub use table::ReachabilityTable;
pub use types::{Partition, Weight, WeightList};

/// Commonly-used items for quick imports.
///
/// ```rust
/// use mindiff_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        config::SolverOptions, error::PartitionError, solver::solve, types::*,
    };
}
