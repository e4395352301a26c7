//! Sheet tracing over a strand-pairing matrix.
//!
//! The symmetrized matrix induces an undirected graph on strand indices. A
//! sheet is a maximal simple path of that graph; tracing starts only at edge
//! strands (degree ≤ 1). Bifurcations (degree > 2) and barrels (closed cycles
//! with no edge strand) are rejected.

use std::collections::BTreeSet;

use crate::fatgraph_error::{FatgraphError, StructuralError};
use crate::topology::pairing::PairingMatrix;

/// Traces every sheet of `mat`.
///
/// Each sheet is oriented so its first strand is smaller than its last, and
/// sheets are returned ordered by their first strand.
///
/// # Errors
///
/// [`StructuralError`] on a diagonal entry, a bifurcation, a barrel, a matrix
/// without any edge strand, or sheets that do not cover every strand.
pub fn trace_sheets(mat: &PairingMatrix) -> Result<Vec<Vec<usize>>, FatgraphError> {
    let n = mat.len();
    let sym = mat.symmetrized();

    let mut adj: Vec<Vec<usize>> = Vec::with_capacity(n);
    for i in 0..n {
        if sym[(i, i)] != 0 {
            return Err(StructuralError::SelfPairing(i).into());
        }
        let partners: Vec<usize> = (0..n).filter(|&j| sym[(i, j)] != 0).collect();
        if partners.len() > 2 {
            return Err(StructuralError::Bifurcation {
                strand: i,
                degree: partners.len(),
            }
            .into());
        }
        adj.push(partners);
    }

    let mut ends: BTreeSet<usize> = (0..n).filter(|&i| adj[i].len() < 2).collect();
    if ends.is_empty() {
        return Err(StructuralError::NoEdgeStrand.into());
    }

    let mut sheets = BTreeSet::new();
    while let Some(start) = ends.pop_first() {
        let mut sheet = trace_sheet_at(start, &adj)?;
        if sheet.last() < sheet.first() {
            sheet.reverse();
        }
        if let Some(last) = sheet.last() {
            ends.remove(last);
        }
        sheets.insert(sheet);
    }

    let covered: usize = sheets.iter().map(Vec::len).sum();
    if covered != n {
        return Err(StructuralError::Coverage {
            covered,
            expected: n,
        }
        .into());
    }
    log::debug!("traced {} sheet(s) over {n} strand(s)", sheets.len());
    Ok(sheets.into_iter().collect())
}

/// Walks from edge strand `start` to the next edge strand.
fn trace_sheet_at(start: usize, adj: &[Vec<usize>]) -> Result<Vec<usize>, FatgraphError> {
    let mut visited = vec![false; adj.len()];
    visited[start] = true;
    let mut sheet = vec![start];
    let Some(&first) = adj[start].first() else {
        return Ok(sheet);
    };

    let mut prev = start;
    let mut cur = first;
    loop {
        if visited[cur] {
            return Err(StructuralError::Barrel(cur).into());
        }
        visited[cur] = true;
        sheet.push(cur);
        match adj[cur].as_slice() {
            [_] => return Ok(sheet),
            &[a, b] => {
                let next = if a == prev { b } else { a };
                prev = cur;
                cur = next;
            }
            other => {
                return Err(FatgraphError::InvariantViolation(format!(
                    "strand {cur} reached with {} partner(s)",
                    other.len()
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheets_of<const N: usize>(rows: [[u8; N]; N]) -> Result<Vec<Vec<usize>>, FatgraphError> {
        trace_sheets(&PairingMatrix::from_rows(rows)?)
    }

    #[test]
    fn single_sheet_is_canonical() {
        let sheets = sheets_of([[0, 0, 0], [1, 0, 0], [0, 1, 0]]).unwrap();
        assert_eq!(sheets, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn isolated_strand_is_its_own_sheet() {
        let sheets = sheets_of([[0, 0, 1, 0], [0, 0, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0]]).unwrap();
        assert_eq!(sheets, vec![vec![0, 2, 1], vec![3]]);
    }

    #[test]
    fn bifurcation_is_rejected() {
        let err = sheets_of([[0, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap_err();
        assert_eq!(
            err,
            FatgraphError::Structural(StructuralError::Bifurcation {
                strand: 0,
                degree: 3
            })
        );
    }

    #[test]
    fn both_orientations_count_as_one_partner() {
        let sheets = sheets_of([[0, 1, 0], [1, 0, 1], [0, 0, 0]]).unwrap();
        assert_eq!(sheets, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn pure_barrel_has_no_edge_strand() {
        let err = sheets_of([[0, 1, 0], [0, 0, 1], [1, 0, 0]]).unwrap_err();
        assert_eq!(err, FatgraphError::Structural(StructuralError::NoEdgeStrand));
    }

    #[test]
    fn barrel_beside_sheet_fails_coverage() {
        // 0-1 is a sheet, 2-3-4 a closed barrel
        let err = sheets_of([
            [0, 1, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 1, 0],
            [0, 0, 0, 0, 1],
            [0, 0, 1, 0, 0],
        ])
        .unwrap_err();
        assert_eq!(
            err,
            FatgraphError::Structural(StructuralError::Coverage {
                covered: 2,
                expected: 5
            })
        );
    }

    #[test]
    fn diagonal_entry_is_rejected() {
        let err = sheets_of([[1, 0], [0, 0]]).unwrap_err();
        assert_eq!(err, FatgraphError::Structural(StructuralError::SelfPairing(0)));
    }

    #[test]
    fn empty_matrix_has_no_edge_strand() {
        let empty: Vec<Vec<u8>> = Vec::new();
        let err = trace_sheets(&PairingMatrix::from_rows(empty).unwrap()).unwrap_err();
        assert_eq!(err, FatgraphError::Structural(StructuralError::NoEdgeStrand));
    }
}
