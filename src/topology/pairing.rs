//! Strand-pairing matrices for beta-sheet topology.
//!
//! Cell `(i, j)` records that strand segments `i` and `j` bond. A cell above
//! the diagonal marks a parallel pairing of the two strands, a cell below the
//! diagonal an antiparallel one. Input of any integer or boolean type is
//! coerced to 0/1.

use nalgebra::DMatrix;

use crate::fatgraph_error::{FatgraphError, StructuralError};

/// Square 0/1 matrix over strand indices `0..n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairingMatrix {
    cells: DMatrix<u8>,
}

impl PairingMatrix {
    /// Builds a matrix from rows; every row must have one entry per row.
    ///
    /// ```rust
    /// # use fatgraph::topology::pairing::PairingMatrix;
    /// let m = PairingMatrix::from_rows([[0, 0, 0], [1, 0, 0], [0, 1, 0]]).unwrap();
    /// assert_eq!(m.len(), 3);
    /// assert!(m.is_set(1, 0));
    /// ```
    pub fn from_rows<R, C, T>(rows: R) -> Result<Self, FatgraphError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = T>,
        T: Into<i64>,
    {
        let rows: Vec<Vec<u8>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(|x| u8::from(x.into() != 0)).collect())
            .collect();
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != n) {
            return Err(StructuralError::NonSquare {
                rows: n,
                cols: bad.len(),
            }
            .into());
        }
        let flat: Vec<u8> = rows.into_iter().flatten().collect();
        Ok(Self {
            cells: DMatrix::from_row_slice(n, n, &flat),
        })
    }

    /// Wraps an existing matrix, coercing nonzero cells to 1.
    pub fn from_dmatrix(m: &DMatrix<u8>) -> Result<Self, FatgraphError> {
        if m.nrows() != m.ncols() {
            return Err(StructuralError::NonSquare {
                rows: m.nrows(),
                cols: m.ncols(),
            }
            .into());
        }
        Ok(Self {
            cells: m.map(|x| u8::from(x != 0)),
        })
    }

    /// Number of strand segments.
    pub fn len(&self) -> usize {
        self.cells.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_set(&self, i: usize, j: usize) -> bool {
        self.cells[(i, j)] != 0
    }

    /// `mat + matᵀ`; a cell is 2 when both orientations were recorded.
    pub fn symmetrized(&self) -> DMatrix<u8> {
        let transposed = self.cells.transpose();
        &self.cells + &transposed
    }

    pub fn as_dmatrix(&self) -> &DMatrix<u8> {
        &self.cells
    }
}
