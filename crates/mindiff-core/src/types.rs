//! Canonical core types.
//!
//! [`WeightList`] is the validated input; it can only be built from an
//! even, non-empty sequence, so every solver phase may rely on that shape.
//! [`Partition`] is the solver's output and the unit of JSON export.

use serde::{Deserialize, Serialize};

use crate::PartitionError;

/// A single item weight.
pub type Weight = u32;

/// Ordered, even-length, non-empty sequence of weights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeightList(Vec<Weight>);

impl WeightList {
    /// Validate and wrap a weight sequence.
    ///
    /// # Errors
    /// [`PartitionError::EmptyInput`] for no weights,
    /// [`PartitionError::OddLength`] for an odd count.
    pub fn new(weights: Vec<Weight>) -> Result<Self, PartitionError> {
        if weights.is_empty() {
            return Err(PartitionError::EmptyInput);
        }
        if weights.len() % 2 != 0 {
            return Err(PartitionError::OddLength {
                len: weights.len(),
            });
        }
        Ok(Self(weights))
    }

    /// Number of weights `n`.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for the `len`/`is_empty` pairing.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Size of each half, `n / 2`.
    #[inline]
    #[must_use]
    pub fn group_size(&self) -> usize {
        self.0.len() / 2
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&w| u64::from(w)).sum()
    }

    /// Half the total weight, rounded down.
    #[must_use]
    pub fn target(&self) -> u64 {
        self.total() / 2
    }

    /// Weight at index `i` (0-based).
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Weight> {
        self.0.get(i).copied()
    }

    /// Borrow the underlying slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Weight] {
        &self.0
    }

    /// Sum of the weights at `indices`.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    #[must_use]
    pub fn sum_of(&self, indices: &[usize]) -> u64 {
        indices.iter().map(|&i| u64::from(self.0[i])).sum()
    }
}

impl TryFrom<Vec<Weight>> for WeightList {
    type Error = PartitionError;

    fn try_from(v: Vec<Weight>) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl AsRef<[Weight]> for WeightList {
    fn as_ref(&self) -> &[Weight] {
        &self.0
    }
}

/// Two equal-size, disjoint index sets covering `0..n`.
///
/// **Invariants**
/// - `set_a` and `set_b` are ascending, disjoint, and together cover `0..n`.
/// - `set_a.len() == set_b.len() == n / 2`.
/// - `sum_a <= sum_b` and `sum_a + sum_b` is the total weight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Indices of the lighter (or equal) half.
    pub set_a: Vec<usize>,
    /// Complement of `set_a`.
    pub set_b: Vec<usize>,
    /// Sum of `set_a`; the reachable sum closest to half the total.
    pub sum_a: u64,
    /// Sum of `set_b`.
    pub sum_b: u64,
}

impl Partition {
    /// Imbalance `sum_b - sum_a` (equivalently `total - 2 * sum_a`).
    #[inline]
    #[must_use]
    pub const fn difference(&self) -> u64 {
        self.sum_b.saturating_sub(self.sum_a)
    }

    /// Total weight of both halves.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.sum_a + self.sum_b
    }
}
