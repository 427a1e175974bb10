//! Boundary helpers: reading weights, rendering results, JSON export.
//!
//! Nothing here is used by the solver phases; these are the thin shells the
//! CLI wraps around [`crate::solve`].
//!
//! Input format: integers separated by ASCII whitespace (spaces, tabs,
//! newlines). Parsing stops silently at the first non-numeric token, so a
//! trailing comment or footer is ignored. A token with a numeric prefix
//! (`4abc`) keeps that prefix and ends the input there. Numeric tokens that
//! are negative or do not fit a [`Weight`] are rejected.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufRead, BufWriter};
use std::path::Path;

use serde::Serialize;

use crate::{Partition, PartitionError, Weight, WeightList};

/// Prompt printed before reading one interactive line.
pub const PROMPT: &str = "Please enter a sequence of numbers: ";

enum Token {
    Weight(Weight),
    /// Leading number of a token with trailing non-digits; parsing ends here.
    Last(Weight),
    Stop,
}

/// Read an optional sign and the leading digits of `token`.
fn classify(token: &str) -> Result<Token, PartitionError> {
    let (negative, body) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let end = body
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(body.len());
    let digits = &body[..end];
    if digits.is_empty() {
        return Ok(Token::Stop);
    }

    let w = if negative {
        if !digits.bytes().all(|b| b == b'0') {
            return Err(PartitionError::InvalidWeight {
                token: token.to_owned(),
                reason: "negative weights are not supported",
            });
        }
        0
    } else {
        digits
            .parse::<Weight>()
            .map_err(|_| PartitionError::InvalidWeight {
                token: token.to_owned(),
                reason: "does not fit in 32 bits",
            })?
    };

    if end == body.len() {
        Ok(Token::Weight(w))
    } else {
        Ok(Token::Last(w))
    }
}

/// Parse whitespace-separated weights until end of input or the first
/// non-numeric token. A token such as `4abc` contributes its leading `4`
/// and then ends the input.
///
/// # Errors
/// [`PartitionError::InvalidWeight`] for negative or overflowing tokens.
pub fn parse_weights(src: &str) -> Result<Vec<Weight>, PartitionError> {
    let mut out = Vec::new();
    for token in src.split_ascii_whitespace() {
        match classify(token)? {
            Token::Weight(w) => out.push(w),
            Token::Last(w) => {
                out.push(w);
                break;
            }
            Token::Stop => break,
        }
    }
    Ok(out)
}

/// Read weights from a file.
///
/// # Errors
/// [`PartitionError::InputUnavailable`] if the file cannot be read, or any
/// [`parse_weights`] error.
pub fn read_weights_file<P: AsRef<Path>>(path: P) -> Result<Vec<Weight>, PartitionError> {
    let path = path.as_ref();
    let src = fs::read_to_string(path).map_err(|source| PartitionError::InputUnavailable {
        path: path.to_owned(),
        source,
    })?;
    parse_weights(&src)
}

/// Read exactly one line from `rdr` and parse it.
///
/// # Errors
/// [`PartitionError::Io`] on read failure, or any [`parse_weights`] error.
pub fn read_weights_line<R: BufRead>(mut rdr: R) -> Result<Vec<Weight>, PartitionError> {
    let mut line = String::new();
    rdr.read_line(&mut line)?;
    parse_weights(&line)
}

/// Render the two teams in the console layout, re-checking each total.
///
/// Positions are 1-based. Each team's listed weights are summed again and
/// compared against the partition's stored sum.
///
/// # Errors
/// [`PartitionError::ReportMismatch`] if a stored sum disagrees with its members,
/// [`PartitionError::ReconstructionInconsistent`] if an index is out of range.
pub fn render_report(weights: &WeightList, p: &Partition) -> Result<String, PartitionError> {
    verify_report(weights, p)?;
    let mut out = String::from("Best team assignment (by weight) = \n");
    render_team(&mut out, weights, 1, &p.set_a, p.sum_a);
    render_team(&mut out, weights, 2, &p.set_b, p.sum_b);
    Ok(out)
}

/// Re-sum each team from `weights` and compare with the stored totals.
///
/// Every output path (text report and JSON) runs this before emitting.
///
/// # Errors
/// [`PartitionError::ReportMismatch`] on a disagreeing total,
/// [`PartitionError::ReconstructionInconsistent`] if an index is out of range.
pub fn verify_report(weights: &WeightList, p: &Partition) -> Result<(), PartitionError> {
    for (team, members, expected) in [(1u8, &p.set_a, p.sum_a), (2, &p.set_b, p.sum_b)] {
        let mut actual = 0u64;
        for &i in members {
            let w = weights.get(i).ok_or_else(|| {
                PartitionError::inconsistent(format!(
                    "team {team} lists index {i} of {}",
                    weights.len()
                ))
            })?;
            actual += u64::from(w);
        }
        if actual != expected {
            return Err(PartitionError::ReportMismatch {
                team,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Indices are in range once [`verify_report`] has passed.
fn render_team(out: &mut String, weights: &WeightList, team: u8, members: &[usize], total: u64) {
    let _ = writeln!(out, "Team {team}:");
    for &i in members {
        let w = weights.as_slice()[i];
        let _ = write!(out, "{}({w}) ", i + 1);
    }
    out.push('\n');
    let _ = writeln!(out, "Total weight = {total}");
}

/// JSON document describing one solve.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Input weights in original order.
    pub weights: &'a WeightList,
    /// The partition itself.
    #[serde(flatten)]
    pub partition: &'a Partition,
    /// `sum_b - sum_a`.
    pub difference: u64,
}

impl<'a> JsonReport<'a> {
    /// Bundle a solve result for serialization after [`verify_report`].
    ///
    /// # Errors
    /// Any [`verify_report`] error.
    pub fn new(weights: &'a WeightList, partition: &'a Partition) -> Result<Self, PartitionError> {
        verify_report(weights, partition)?;
        Ok(Self {
            weights,
            partition,
            difference: partition.difference(),
        })
    }

    /// Pretty JSON string.
    ///
    /// # Errors
    /// Propagates `serde_json` failures (not expected for these types).
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write a [`JsonReport`] as pretty JSON, creating parent directories.
///
/// # Errors
/// [`PartitionError::Io`] on filesystem or serialization failure.
pub fn write_report_json<P: AsRef<Path>>(path: P, report: &JsonReport<'_>) -> Result<(), PartitionError> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(w, report).map_err(std::io::Error::from)?;
    Ok(())
}
