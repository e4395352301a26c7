//! Hydrogen-bond report reader.
//!
//! # Supported format
//! - Whitespace-separated rows, one bond per row.
//! - Column 12 (0-based) is the donor residue, column 13 the acceptor and
//!   column 21 the flag field.
//! - Only intra-chain bonds flagged unique or strong are kept: the flag
//!   must end in two underscores followed by two of `U`/`S`.
//!
//! # Limitations
//! - Rows with fewer than 22 columns (headers, blank lines) are skipped.
//! - The resulting fatgraph is simplified: a single vertex holding exactly
//!   the bonded half-edges, so non-bonded residues are not recorded. This
//!   does not change the genus.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fatgraph_error::FatgraphError;
use crate::topology::fatgraph::Fatgraph;

pub const DONOR_COL: usize = 12;
pub const ACCEPTOR_COL: usize = 13;
pub const FLAGS_COL: usize = 21;

static INTRA_CHAIN_FLAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__[US][US]$").expect("flag pattern is a valid regex"));

/// Errors from reading a bond report.
#[derive(Debug, Error)]
pub enum HbondError {
    #[error("failed to read bond report: {0}")]
    Io(#[from] std::io::Error),
    /// A kept row whose donor or acceptor is not an integer.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("unknown backbone mode `{0}` (expected `alpha` or `beta`)")]
    UnknownMode(String),
    #[error(transparent)]
    Fatgraph(#[from] FatgraphError),
}

/// Backbone model used to turn residue numbers into half-edge labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackboneMode {
    /// No backbone twist along the protein.
    #[default]
    Alpha,
    /// A backbone twist at every c-alpha linkage.
    Beta,
}

impl FromStr for BackboneMode {
    type Err = HbondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alpha" => Ok(Self::Alpha),
            "beta" => Ok(Self::Beta),
            _ => Err(HbondError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for BackboneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
        })
    }
}

/// One donor/acceptor pair in residue numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    pub donor: i64,
    pub acceptor: i64,
}

/// Bonds relabelled onto the dense half-edge range `1..=half_edges`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelabeledBonds {
    pub half_edges: u64,
    pub edges: Vec<[u64; 2]>,
}

/// Reads every qualifying bond of a report, in file order.
pub fn parse_bonds<R: BufRead>(reader: R) -> Result<Vec<Bond>, HbondError> {
    let mut bonds = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let cols: Vec<&str> = line.split_whitespace().collect();
        let Some(flags) = cols.get(FLAGS_COL) else {
            continue;
        };
        if !INTRA_CHAIN_FLAG.is_match(flags) {
            continue;
        }
        bonds.push(Bond {
            donor: parse_residue(cols[DONOR_COL], idx + 1, "donor")?,
            acceptor: parse_residue(cols[ACCEPTOR_COL], idx + 1, "acceptor")?,
        });
    }
    log::debug!("parsed {} intra-chain bond(s)", bonds.len());
    Ok(bonds)
}

fn parse_residue(raw: &str, line: usize, role: &str) -> Result<i64, HbondError> {
    raw.parse::<i64>().map_err(|_| HbondError::Parse {
        line,
        message: format!("invalid {role} residue: {raw}"),
    })
}

/// Assigns dense half-edge labels to bond ends.
///
/// In [`BackboneMode::Alpha`] donors are numbered ascending from 1 and the
/// acceptors descending after them. In [`BackboneMode::Beta`] each end is
/// first moved to the upper or lower backbone strand by parity (acceptors
/// shifted by one residue); the upper strand is numbered ascending, then the
/// lower strand descending.
pub fn relabel(bonds: &[Bond], mode: BackboneMode) -> RelabeledBonds {
    let (donor_of, acceptor_of, half_edges) = match mode {
        BackboneMode::Alpha => {
            let donors = dense_labels(bonds.iter().map(|b| b.donor), false, 1);
            let first = donors.len() as u64 + 1;
            let acceptors = dense_labels(bonds.iter().map(|b| b.acceptor), true, first);
            let n = (donors.len() + acceptors.len()) as u64;
            let donor_of: Vec<u64> = bonds.iter().map(|b| donors[&b.donor]).collect();
            let acceptor_of: Vec<u64> = bonds.iter().map(|b| acceptors[&b.acceptor]).collect();
            (donor_of, acceptor_of, n)
        }
        BackboneMode::Beta => {
            let ends = || {
                bonds
                    .iter()
                    .flat_map(|b| [beta_end(b.donor, 0), beta_end(b.acceptor, 1)])
            };
            let upper = dense_labels(ends().filter(|e| e.0).map(|e| e.1), false, 1);
            let first = upper.len() as u64 + 1;
            let lower = dense_labels(ends().filter(|e| !e.0).map(|e| e.1), true, first);
            let n = (upper.len() + lower.len()) as u64;
            let label = |(is_upper, residue): (bool, i64)| {
                if is_upper { upper[&residue] } else { lower[&residue] }
            };
            let donor_of: Vec<u64> = bonds.iter().map(|b| label(beta_end(b.donor, 0))).collect();
            let acceptor_of: Vec<u64> = bonds
                .iter()
                .map(|b| label(beta_end(b.acceptor, 1)))
                .collect();
            (donor_of, acceptor_of, n)
        }
    };

    RelabeledBonds {
        half_edges,
        edges: donor_of
            .into_iter()
            .zip(acceptor_of)
            .map(|(d, a)| [d, a])
            .collect(),
    }
}

/// `(on upper strand, shifted residue)` for one bond end.
fn beta_end(residue: i64, shift: i64) -> (bool, i64) {
    (residue.rem_euclid(2) == 1, residue + shift)
}

fn dense_labels(
    values: impl Iterator<Item = i64>,
    descending: bool,
    first: u64,
) -> BTreeMap<i64, u64> {
    let distinct: BTreeSet<i64> = values.collect();
    let ordered: Box<dyn Iterator<Item = i64>> = if descending {
        Box::new(distinct.into_iter().rev())
    } else {
        Box::new(distinct.into_iter())
    };
    ordered.zip(first..).collect()
}

impl Fatgraph {
    /// Builds the simplified fatgraph of a bond report: one vertex over all
    /// relabelled bond ends, one edge per bond.
    ///
    /// A report with no qualifying bonds yields [`Fatgraph::empty`].
    ///
    /// ```rust
    /// # use fatgraph::io::hbond::BackboneMode;
    /// # use fatgraph::topology::fatgraph::Fatgraph;
    /// let filler = "x ".repeat(12);
    /// let report = format!(
    ///     "{filler}1 5 a b c d e f g A__SU\n{filler}2 4 a b c d e f g A__UU\n"
    /// );
    /// let g = Fatgraph::from_hbonds(report.as_bytes(), BackboneMode::Alpha).unwrap();
    /// assert_eq!(g.genus(), 1);
    /// ```
    pub fn from_hbonds<R: BufRead>(reader: R, mode: BackboneMode) -> Result<Self, HbondError> {
        let bonds = parse_bonds(reader)?;
        if bonds.is_empty() {
            log::warn!("bond report has no intra-chain bonds; using the empty fatgraph");
            return Ok(Self::empty());
        }
        let relabeled = relabel(&bonds, mode);
        Ok(Self::new([1..=relabeled.half_edges], relabeled.edges)?)
    }

    /// Opens `path` and reads it with [`Fatgraph::from_hbonds`].
    pub fn from_hbond_file(path: impl AsRef<Path>, mode: BackboneMode) -> Result<Self, HbondError> {
        let file = File::open(path)?;
        Self::from_hbonds(BufReader::new(file), mode)
    }
}
