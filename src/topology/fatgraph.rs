//! Fatgraphs as a pair of permutations over shared half-edge labels.
//!
//! A [`Fatgraph`] stores a rotation system (the vertex cycles, each listing
//! its half-edges anti-clockwise) and a pairing of half-edges into edges.
//! Everything else is derived: the boundary cycles come from composing the
//! two permutations, the genus from the Euler characteristic, and
//! connectivity from a traversal over vertices joined by edges.
//!
//! Instances are immutable once constructed; modelling a different graph
//! means building a new value.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::debug_invariants::DebugInvariants;
use crate::fatgraph_error::{FatgraphError, ValidationError};
use crate::topology::half_edge::{HalfEdge, cycle_from_raw, fmt_cycles};
use crate::topology::permutation::Permutation;

/// An edge pairs exactly two half-edges.
pub type Edge = [HalfEdge; 2];

/// A ribbon graph given by vertex and edge permutations.
///
/// ```rust
/// # use fatgraph::topology::fatgraph::Fatgraph;
/// let g = Fatgraph::new([vec![1, 2, 3], vec![4, 5, 6]], [[1, 4], [2, 5], [3, 6]]).unwrap();
/// assert_eq!(g.boundaries().len(), 1);
/// assert_eq!(g.genus(), 1);
/// ```
#[derive(Clone)]
pub struct Fatgraph {
    vertices: Vec<Vec<HalfEdge>>,
    edges: Vec<Edge>,
    vs: Permutation,
    es: Permutation,
    unpaired: BTreeSet<HalfEdge>,
    /// half-edge -> index of the vertex holding it
    owner: BTreeMap<HalfEdge, usize>,
}

impl Fatgraph {
    /// Builds a fatgraph from raw integer labels.
    ///
    /// Empty vertex or edge cycles are ignored; every other edge cycle must
    /// have exactly two labels.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] when a label is 0, a vertex half-edge repeats, an
    /// edge half-edge repeats, an edge does not have two ends, or an edge
    /// references a half-edge that no vertex holds.
    pub fn new<V, VC, E, EC>(vertices: V, edges: E) -> Result<Self, FatgraphError>
    where
        V: IntoIterator<Item = VC>,
        VC: IntoIterator<Item = u64>,
        E: IntoIterator<Item = EC>,
        EC: IntoIterator<Item = u64>,
    {
        let vertices = vertices
            .into_iter()
            .map(cycle_from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        let edges = edges_from_raw(edges)?;
        Self::from_half_edges(vertices, edges)
    }

    /// Builds a fatgraph from typed half-edges.
    pub fn from_half_edges(
        vertices: Vec<Vec<HalfEdge>>,
        edges: Vec<Edge>,
    ) -> Result<Self, FatgraphError> {
        let vertices: Vec<Vec<HalfEdge>> = vertices.into_iter().filter(|v| !v.is_empty()).collect();

        let mut owner = BTreeMap::new();
        for (idx, vertex) in vertices.iter().enumerate() {
            for &h in vertex {
                if owner.insert(h, idx).is_some() {
                    return Err(ValidationError::DuplicateVertexHalfEdge(h).into());
                }
            }
        }

        // Edge labels are checked against themselves, then against the vertices.
        let mut paired = BTreeSet::new();
        for &h in edges.iter().flatten() {
            if !paired.insert(h) {
                return Err(ValidationError::DuplicateEdgeHalfEdge(h).into());
            }
        }
        if let Some(&h) = paired.iter().find(|h| !owner.contains_key(*h)) {
            return Err(ValidationError::DanglingEdge(h).into());
        }

        let vs = Permutation::from_cycles(&vertices)?;
        let es = Permutation::from_cycles(&edges)?;
        let unpaired = owner
            .keys()
            .filter(|h| !paired.contains(*h))
            .copied()
            .collect();

        let graph = Self {
            vertices,
            edges,
            vs,
            es,
            unpaired,
            owner,
        };
        graph.debug_assert_invariants();
        Ok(graph)
    }

    /// The graph with no vertices and no edges.
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            vs: Permutation::identity(),
            es: Permutation::identity(),
            unpaired: BTreeSet::new(),
            owner: BTreeMap::new(),
        }
    }

    /// Vertex cycles as supplied, including 1-valent vertices.
    pub fn vertices(&self) -> &[Vec<HalfEdge>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Half-edges held by a vertex but paired by no edge.
    pub fn unpaired(&self) -> &BTreeSet<HalfEdge> {
        &self.unpaired
    }

    pub fn vertex_permutation(&self) -> &Permutation {
        &self.vs
    }

    pub fn edge_permutation(&self) -> &Permutation {
        &self.es
    }

    /// Every half-edge held by some vertex, ascending.
    pub fn half_edges(&self) -> impl Iterator<Item = HalfEdge> + '_ {
        self.owner.keys().copied()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Boundary cycles: cross the edge, then rotate to the next half-edge at
    /// the vertex.
    ///
    /// Composition cancels length-1 boundaries into fixed points, so every
    /// vertex half-edge missed by the traced cycles is added back as a
    /// singleton boundary.
    pub fn boundaries(&self) -> Vec<Vec<HalfEdge>> {
        let faces = self.vs.compose(&self.es);
        let mut cycles = faces.to_cycles();
        let traced: BTreeSet<HalfEdge> = cycles.iter().flatten().copied().collect();
        cycles.extend(
            self.half_edges()
                .filter(|h| !traced.contains(h))
                .map(|h| vec![h]),
        );
        cycles
    }

    /// Genus of the surface the graph embeds into.
    ///
    /// `g = (2C − V + E − B) / 2` where `C` counts connected components; for
    /// a connected graph this is the usual `(2 − V + E − B) / 2`. A graph
    /// with no vertices has genus 0.
    pub fn genus(&self) -> usize {
        if self.vertices.is_empty() {
            return 0;
        }
        let c = self.component_count() as i64;
        let v = self.vertices.len() as i64;
        let e = self.edges.len() as i64;
        let b = self.boundaries().len() as i64;
        let euler = 2 * c - v + e - b;
        debug_assert!(
            euler >= 0 && euler % 2 == 0,
            "2C - V + E - B = {euler} must be even and non-negative"
        );
        (euler / 2) as usize
    }

    /// Whether every vertex is reachable from the first one.
    ///
    /// Two vertices are adjacent when an edge pairs a half-edge of one with
    /// a half-edge of the other. The empty graph counts as connected.
    ///
    /// # Errors
    ///
    /// [`FatgraphError::InvariantViolation`] if two unvisited vertices claim
    /// the same half-edge, which construction validation rules out.
    pub fn is_connected(&self) -> Result<bool, FatgraphError> {
        let Some((first, rest)) = self.vertices.split_first() else {
            return Ok(true);
        };
        let mut remaining: Vec<&Vec<HalfEdge>> = rest.iter().collect();
        let mut frontier: Vec<&Vec<HalfEdge>> = vec![first];

        while !remaining.is_empty() {
            let mut reached = Vec::new();
            for &h in frontier.iter().copied().flatten() {
                let other = self.es.apply(h);
                if other == h {
                    continue;
                }
                let claims: Vec<usize> = remaining
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| v.contains(&other))
                    .map(|(i, _)| i)
                    .collect();
                if claims.len() > 1 {
                    return Err(FatgraphError::InvariantViolation(format!(
                        "half-edge {other} is claimed by {} vertices",
                        claims.len()
                    )));
                }
                reached.extend(claims);
            }
            if reached.is_empty() {
                return Ok(false);
            }
            reached.sort_unstable();
            reached.dedup();
            frontier = reached
                .into_iter()
                .rev()
                .map(|i| remaining.remove(i))
                .collect();
        }
        Ok(true)
    }

    /// Number of connected components, 0 for the empty graph.
    fn component_count(&self) -> usize {
        let mut seen = vec![false; self.vertices.len()];
        let mut count = 0;
        for root in 0..self.vertices.len() {
            if seen[root] {
                continue;
            }
            count += 1;
            seen[root] = true;
            let mut stack = vec![root];
            while let Some(v) = stack.pop() {
                for &h in &self.vertices[v] {
                    let Some(&w) = self.owner.get(&self.es.apply(h)) else {
                        continue;
                    };
                    if !seen[w] {
                        seen[w] = true;
                        stack.push(w);
                    }
                }
            }
        }
        count
    }
}

/// Converts raw edge cycles, dropping empty ones.
pub(crate) fn edges_from_raw<E, EC>(edges: E) -> Result<Vec<Edge>, FatgraphError>
where
    E: IntoIterator<Item = EC>,
    EC: IntoIterator<Item = u64>,
{
    let mut out = Vec::new();
    for cycle in edges {
        let cycle = cycle_from_raw(cycle)?;
        match cycle.as_slice() {
            [] => {}
            &[a, b] => out.push([a, b]),
            other => return Err(ValidationError::EdgeArity(other.len()).into()),
        }
    }
    Ok(out)
}

impl PartialEq for Fatgraph {
    fn eq(&self, other: &Self) -> bool {
        self.vs == other.vs && self.es == other.es && self.unpaired == other.unpaired
    }
}

impl Eq for Fatgraph {}

impl fmt::Debug for Fatgraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fatgraph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .field("unpaired", &self.unpaired)
            .finish()
    }
}

impl fmt::Display for Fatgraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fatgraph(vertices=")?;
        fmt_cycles(f, &self.vertices)?;
        write!(f, ", edges=")?;
        fmt_cycles(f, &self.edges)?;
        write!(f, ")")
    }
}

impl DebugInvariants for Fatgraph {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Fatgraph");
    }

    fn validate_invariants(&self) -> Result<(), FatgraphError> {
        if self.vs != Permutation::from_cycles(&self.vertices)? {
            return Err(FatgraphError::InvariantViolation(
                "vertex permutation out of sync with vertex cycles".into(),
            ));
        }
        let mut paired = BTreeSet::new();
        for &h in self.edges.iter().flatten() {
            if !self.owner.contains_key(&h) {
                return Err(FatgraphError::InvariantViolation(format!(
                    "edge half-edge {h} has no vertex"
                )));
            }
            if self.es.apply(h) == h {
                return Err(FatgraphError::InvariantViolation(format!(
                    "edge half-edge {h} is fixed by the edge permutation"
                )));
            }
            paired.insert(h);
        }
        let unpaired: BTreeSet<HalfEdge> = self
            .half_edges()
            .filter(|h| !paired.contains(h))
            .collect();
        if unpaired != self.unpaired {
            return Err(FatgraphError::InvariantViolation(
                "unpaired set out of sync with edges".into(),
            ));
        }
        Ok(())
    }
}
