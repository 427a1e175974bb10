//! Solver options.
//!
//! The only knob is the table cell budget. The reachability table is
//! `(n+1) × (n/2+1) × (total/2+1)` booleans, so a handful of large weights can
//! demand more memory than the machine has; the cap turns that into a typed
//! error before anything is allocated.
//!
//! Recognized environment variables:
//! - `MINDIFF_MAX_TABLE_CELLS` = `<u64>`

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`SolverOptions::max_table_cells`].
pub const ENV_MAX_TABLE_CELLS: &str = "MINDIFF_MAX_TABLE_CELLS";

/// Default cell budget (1 GiB of `bool`s).
pub const DEFAULT_MAX_TABLE_CELLS: u64 = 1 << 30;

/// Knobs for a single solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Upper bound on reachability table cells.
    pub max_table_cells: u64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}

impl SolverOptions {
    /// Defaults merged with environment overrides.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Merge environment overrides into `self`. Unparseable values are ignored.
    #[must_use]
    pub fn merge_env(self) -> Self {
        self.merge_lookup(|k| std::env::var(k).ok())
    }

    /// Set the cell budget.
    #[must_use]
    pub const fn with_max_table_cells(mut self, cells: u64) -> Self {
        self.max_table_cells = cells;
        self
    }

    fn merge_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup(ENV_MAX_TABLE_CELLS) {
            if let Ok(cells) = v.trim().parse::<u64>() {
                self.max_table_cells = cells;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_applies() {
        let opts = SolverOptions::default().merge_lookup(|k| {
            (k == ENV_MAX_TABLE_CELLS).then(|| " 4096 ".to_string())
        });
        assert_eq!(opts.max_table_cells, 4096);
    }

    #[test]
    fn garbage_env_is_ignored() {
        let opts = SolverOptions::default().merge_lookup(|_| Some("lots".to_string()));
        assert_eq!(opts, SolverOptions::default());
    }

    #[test]
    fn builder_sets_cap() {
        let opts = SolverOptions::default().with_max_table_cells(10);
        assert_eq!(opts.max_table_cells, 10);
    }
}
