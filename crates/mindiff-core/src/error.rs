//! Error types for partitioning.
//!
//! [`PartitionError`] is the single error type returned by the solver phases
//! and the I/O boundary helpers. Every variant is terminal: nothing in this
//! crate retries or recovers a partial result. Callers match on the variant
//! when they need to distinguish a bad input from an internal defect.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the solver and its boundary helpers.
#[derive(Debug, Error)]
pub enum PartitionError {
    /// The input file could not be opened or read.
    #[error("failed to open file: {}", path.display())]
    InputUnavailable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading interactive input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A numeric token was not a valid non-negative weight.
    #[error("invalid weight `{token}`: {reason}")]
    InvalidWeight {
        /// The raw token.
        token: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// No weights were supplied.
    #[error("input sequence is empty")]
    EmptyInput,

    /// The number of weights is odd, so no equal-size split exists.
    #[error("input sequence is not of an even size (got {len} weights)")]
    OddLength {
        /// Number of weights supplied.
        len: usize,
    },

    /// The reachability table would exceed the configured cell budget.
    #[error("reachability table needs {cells} cells, limit is {limit}")]
    TableTooLarge {
        /// Cells required (saturated at `u64::MAX` on overflow).
        cells: u64,
        /// Configured limit.
        limit: u64,
    },

    /// The final table slice holds no reachable sum.
    #[error("no feasible split found")]
    NoFeasibleSplit,

    /// The table and the reconstructed subset disagree.
    #[error("reconstruction inconsistent with reachability table: {detail}")]
    ReconstructionInconsistent {
        /// What was observed.
        detail: String,
    },

    /// The report re-check found a team total that does not match its members.
    #[error("error finding weights for team {team}: expected {expected}, members sum to {actual}")]
    ReportMismatch {
        /// Team number (1 or 2).
        team: u8,
        /// Sum stored in the partition.
        expected: u64,
        /// Sum recomputed from the weights.
        actual: u64,
    },
}

impl PartitionError {
    pub(crate) fn inconsistent(detail: impl Into<String>) -> Self {
        Self::ReconstructionInconsistent {
            detail: detail.into(),
        }
    }
}
