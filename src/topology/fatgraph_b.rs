//! Fatgraphs with beta vertices.
//!
//! A [`FatgraphB`] extends a [`Fatgraph`] with an interior permutation that
//! pairs half-edges *inside* vertices. For beta-sheet models an interior
//! pair is one strand segment and an exterior edge is the backbone link
//! between consecutive segments; the whole structure is valid when interior
//! and exterior pairs chain into a single trail or cycle.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::algs::sheets::trace_sheets;
use crate::fatgraph_error::FatgraphError;
use crate::topology::fatgraph::{Edge, Fatgraph, edges_from_raw};
use crate::topology::half_edge::{HalfEdge, cycle_from_raw, fmt_cycles};
use crate::topology::pairing::PairingMatrix;
use crate::topology::permutation::Permutation;

/// A [`Fatgraph`] plus interior pairs.
///
/// Construction checks the vertex and edge sets like [`Fatgraph::new`] and
/// that interior pairs are disjoint; it does not check interior against
/// exterior structure. Use [`FatgraphB::is_valid`] for that.
#[derive(Clone)]
pub struct FatgraphB {
    graph: Fatgraph,
    is: Permutation,
}

impl FatgraphB {
    /// Builds a beta fatgraph from raw integer labels.
    ///
    /// ```rust
    /// # use fatgraph::topology::fatgraph_b::FatgraphB;
    /// let g = FatgraphB::new([[1, 2, 3, 4]], [[1, 2], [3, 4]], [[1, 4], [2, 3]]).unwrap();
    /// assert!(g.is_valid());
    /// ```
    pub fn new<V, VC, E, EC, I, IC>(
        vertices: V,
        edges: E,
        interiors: I,
    ) -> Result<Self, FatgraphError>
    where
        V: IntoIterator<Item = VC>,
        VC: IntoIterator<Item = u64>,
        E: IntoIterator<Item = EC>,
        EC: IntoIterator<Item = u64>,
        I: IntoIterator<Item = IC>,
        IC: IntoIterator<Item = u64>,
    {
        let vertices = vertices
            .into_iter()
            .map(cycle_from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        let graph = Fatgraph::from_half_edges(vertices, edges_from_raw(edges)?)?;
        Self::from_parts(graph, &edges_from_raw(interiors)?)
    }

    /// Shares `base`'s vertices and edges with the given interior pairs.
    /// No validity check is performed.
    pub fn from_fatgraph(base: &Fatgraph, interiors: &[Edge]) -> Result<Self, FatgraphError> {
        Self::from_parts(base.clone(), interiors)
    }

    pub(crate) fn from_parts(graph: Fatgraph, interiors: &[Edge]) -> Result<Self, FatgraphError> {
        let is = Permutation::from_cycles(interiors)?;
        Ok(Self { graph, is })
    }

    /// Reconstructs the beta fatgraph encoded by a strand-pairing matrix.
    ///
    /// Each sheet becomes one vertex. Every strand contributes an interior
    /// pair of half-edges, oriented by the running parallel/antiparallel
    /// sign along its sheet, and consecutive strands are joined by exterior
    /// edges.
    ///
    /// # Errors
    ///
    /// [`StructuralError`](crate::fatgraph_error::StructuralError) when the
    /// matrix has a bifurcation, a barrel, no edge strand, or uncovered
    /// strands.
    pub fn from_pairing_matrix(mat: &PairingMatrix) -> Result<Self, FatgraphError> {
        let sheets = trace_sheets(mat)?;
        let sheet_vertices: Vec<Vec<StrandPair>> = sheets
            .iter()
            .map(|sheet| sheet_vertex(sheet, mat))
            .collect();

        // Outer ends forward, then inner ends backwards: an anti-clockwise
        // ribbon embedding of each sheet.
        let mut label_of: BTreeMap<StrandEnd, HalfEdge> = BTreeMap::new();
        let mut vertices = Vec::with_capacity(sheet_vertices.len());
        let mut next = 1u64;
        for vertex in &sheet_vertices {
            let order = vertex
                .iter()
                .map(|p| p.0)
                .chain(vertex.iter().rev().map(|p| p.1));
            let mut cycle = Vec::with_capacity(2 * vertex.len());
            for end in order {
                let h = HalfEdge::new(next)?;
                next += 1;
                label_of.insert(end, h);
                cycle.push(h);
            }
            vertices.push(cycle);
        }

        let lookup = |end: &StrandEnd| {
            label_of.get(end).copied().ok_or_else(|| {
                FatgraphError::InvariantViolation(format!("strand end {end:?} was never labelled"))
            })
        };

        let mut interiors = Vec::new();
        for (a, b) in sheet_vertices.iter().flatten() {
            interiors.push([lookup(a)?, lookup(b)?]);
        }
        let interior_set: BTreeSet<Edge> = interiors.iter().copied().map(sorted_pair).collect();

        let ends: Vec<&StrandEnd> = label_of.keys().collect();
        let mut edges = Vec::new();
        for w in ends.windows(2) {
            let edge = sorted_pair([lookup(w[0])?, lookup(w[1])?]);
            if !interior_set.contains(&edge) {
                edges.push(edge);
            }
        }

        let graph = Fatgraph::from_half_edges(vertices, edges)?;
        Self::from_parts(graph, &interiors)
    }

    /// The underlying vertex/edge structure.
    pub fn fatgraph(&self) -> &Fatgraph {
        &self.graph
    }

    pub fn interior_permutation(&self) -> &Permutation {
        &self.is
    }

    /// Interior pairs in canonical order (smallest label first, sorted).
    pub fn interiors(&self) -> Vec<Edge> {
        self.is
            .to_cycles()
            .iter()
            .filter_map(|c| <Edge>::try_from(c.as_slice()).ok())
            .collect()
    }

    /// Whether interior pairs and exterior edges form one trail (or cycle)
    /// that uses every pair exactly once.
    ///
    /// The walk starts at the smallest free end (an unpaired half-edge), or
    /// at the smallest half-edge when there are none, and keeps following
    /// the pair containing the current half-edge until no pair is left.
    pub fn is_valid(&self) -> bool {
        let mut pool = self.interiors();
        pool.extend_from_slice(self.graph.edges());

        let start = self
            .graph
            .unpaired()
            .first()
            .copied()
            .or_else(|| self.graph.half_edges().next());
        let Some(mut cur) = start else {
            return pool.is_empty();
        };
        while let Some(pos) = pool.iter().position(|e| e.contains(&cur)) {
            let [a, b] = pool.remove(pos);
            cur = if a == cur { b } else { a };
        }
        pool.is_empty()
    }
}

/// One end of a strand segment: `end` 0 is where the strand starts, 1 where
/// it finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct StrandEnd {
    strand: usize,
    end: u8,
}

type StrandPair = (StrandEnd, StrandEnd);

fn forward(strand: usize) -> StrandPair {
    (
        StrandEnd { strand, end: 0 },
        StrandEnd { strand, end: 1 },
    )
}

/// Orients each strand of a sheet relative to the first one.
fn sheet_vertex(sheet: &[usize], mat: &PairingMatrix) -> Vec<StrandPair> {
    let mut vertex = Vec::with_capacity(sheet.len());
    let mut parallel = true;
    if let Some(&first) = sheet.first() {
        vertex.push(forward(first));
    }
    for w in sheet.windows(2) {
        let (i, j) = (w[0].min(w[1]), w[0].max(w[1]));
        if !mat.is_set(i, j) {
            parallel = !parallel;
        }
        let (a, b) = forward(w[1]);
        vertex.push(if parallel { (a, b) } else { (b, a) });
    }
    // The smallest pair always reads forward.
    if vertex.iter().min().is_some_and(|(a, b)| a > b) {
        for pair in &mut vertex {
            *pair = (pair.1, pair.0);
        }
    }
    vertex
}

fn sorted_pair([a, b]: Edge) -> Edge {
    if a <= b { [a, b] } else { [b, a] }
}

impl PartialEq for FatgraphB {
    fn eq(&self, other: &Self) -> bool {
        self.graph == other.graph && self.is == other.is
    }
}

impl Eq for FatgraphB {}

impl AsRef<Fatgraph> for FatgraphB {
    fn as_ref(&self) -> &Fatgraph {
        &self.graph
    }
}

impl fmt::Debug for FatgraphB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FatgraphB")
            .field("vertices", &self.graph.vertices())
            .field("edges", &self.graph.edges())
            .field("interiors", &self.interiors())
            .finish()
    }
}

impl fmt::Display for FatgraphB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FatgraphB(vertices=")?;
        fmt_cycles(f, self.graph.vertices())?;
        write!(f, ", edges=")?;
        fmt_cycles(f, self.graph.edges())?;
        write!(f, ", interiors=")?;
        fmt_cycles(f, &self.interiors())?;
        write!(f, ")")
    }
}
