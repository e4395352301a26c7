//! Exhaustive enumeration of fatgraphs with prescribed vertex valences.
//!
//! Vertices are laid out over one contiguous label range starting at 1: the
//! valences `[2, 3]` give the vertices `(1, 2)` and `(3, 4, 5)`. For every
//! choice of `marked` half-edges left free, each perfect matching of the
//! remaining half-edges becomes one [`Fatgraph`]. The search space grows like
//! a double factorial, so [`GenerationOptions::budget`] can cap it.
//!
//! [`generate_all_b`] layers interior chords on top: every vertex
//! contributes one of its parallel chord pairings, and each combination
//! that forms a single trail is kept.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::algs::matching::all_perfect_matchings;
use crate::fatgraph_error::FatgraphError;
use crate::topology::fatgraph::{Edge, Fatgraph};
use crate::topology::fatgraph_b::FatgraphB;
use crate::topology::half_edge::HalfEdge;

/// Knobs for [`generate_all_with`] and [`generate_all_b_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Number of half-edges left unpaired (marked points).
    pub marked: usize,
    /// Upper bound on candidate graphs; `None` means unbounded.
    pub budget: Option<usize>,
}

impl GenerationOptions {
    pub fn with_marked(marked: usize) -> Self {
        Self {
            marked,
            ..Self::default()
        }
    }

    pub fn budget(mut self, limit: usize) -> Self {
        self.budget = Some(limit);
        self
    }

    fn charge(&self, used: usize) -> Result<(), FatgraphError> {
        match self.budget {
            Some(limit) if used > limit => Err(FatgraphError::BudgetExceeded { limit }),
            _ => Ok(()),
        }
    }
}

/// All fatgraphs with the given valences and `marked` free half-edges,
/// connected or not.
///
/// ```rust
/// # use fatgraph::algs::generate::generate_all;
/// let graphs = generate_all(&[2, 2], 0).unwrap();
/// assert_eq!(graphs.len(), 3);
/// let split = graphs.iter().filter(|g| !g.is_connected().unwrap()).count();
/// assert_eq!(split, 1);
/// ```
pub fn generate_all(valences: &[usize], marked: usize) -> Result<Vec<Fatgraph>, FatgraphError> {
    generate_all_with(valences, &GenerationOptions::with_marked(marked))
}

pub fn generate_all_with(
    valences: &[usize],
    opts: &GenerationOptions,
) -> Result<Vec<Fatgraph>, FatgraphError> {
    let vertices = vertex_cycles(valences)?;
    let half_edges: Vec<HalfEdge> = vertices.iter().flatten().copied().collect();

    let mut graphs = Vec::new();
    for excluded in half_edges.iter().copied().combinations(opts.marked) {
        let free: Vec<HalfEdge> = half_edges
            .iter()
            .copied()
            .filter(|h| !excluded.contains(h))
            .collect();
        for matching in all_perfect_matchings(free) {
            opts.charge(graphs.len() + 1)?;
            let edges: Vec<Edge> = matching.into_iter().map(|(a, b)| [a, b]).collect();
            graphs.push(Fatgraph::from_half_edges(vertices.clone(), edges)?);
        }
    }
    log::debug!(
        "enumerated {} fatgraph(s) for valences {valences:?} with {} marked",
        graphs.len(),
        opts.marked
    );
    Ok(graphs)
}

/// All valid beta fatgraphs with the given valences and `marked` free
/// half-edges.
pub fn generate_all_b(valences: &[usize], marked: usize) -> Result<Vec<FatgraphB>, FatgraphError> {
    generate_all_b_with(valences, &GenerationOptions::with_marked(marked))
}

/// Like [`generate_all_b`]; the budget bounds the number of beta candidates
/// built before the validity filter.
pub fn generate_all_b_with(
    valences: &[usize],
    opts: &GenerationOptions,
) -> Result<Vec<FatgraphB>, FatgraphError> {
    let mut candidates = Vec::new();
    for graph in generate_all_with(valences, opts)? {
        let per_vertex: Vec<Vec<Vec<Edge>>> = graph
            .vertices()
            .iter()
            .map(|v| interior_choices(v))
            .collect();
        if per_vertex.is_empty() {
            opts.charge(candidates.len() + 1)?;
            candidates.push(FatgraphB::from_parts(graph, &[])?);
            continue;
        }
        for combo in per_vertex.into_iter().multi_cartesian_product() {
            opts.charge(candidates.len() + 1)?;
            let interiors: Vec<Edge> = combo.into_iter().flatten().collect();
            candidates.push(FatgraphB::from_parts(graph.clone(), &interiors)?);
        }
    }

    let total = candidates.len();
    let kept = keep_valid(candidates);
    log::debug!(
        "kept {} of {total} beta candidate(s) for valences {valences:?}",
        kept.len()
    );
    Ok(kept)
}

#[cfg(not(feature = "rayon"))]
fn keep_valid(candidates: Vec<FatgraphB>) -> Vec<FatgraphB> {
    candidates.into_iter().filter(check_candidate).collect()
}

#[cfg(feature = "rayon")]
fn keep_valid(candidates: Vec<FatgraphB>) -> Vec<FatgraphB> {
    use rayon::prelude::*;
    candidates.into_par_iter().filter(check_candidate).collect()
}

fn check_candidate(g: &FatgraphB) -> bool {
    let valid = g.is_valid();
    if !valid {
        log::trace!("rejected {g}: interiors and edges do not form one trail");
    }
    valid
}

/// Vertex cycles `(1..=v₀), (v₀+1..=v₀+v₁), …`.
pub fn vertex_cycles(valences: &[usize]) -> Result<Vec<Vec<HalfEdge>>, FatgraphError> {
    let mut next = 1u64;
    let mut vertices = Vec::with_capacity(valences.len());
    for &valence in valences {
        let cycle = (0..valence)
            .map(|_| {
                let h = HalfEdge::new(next);
                next += 1;
                h
            })
            .collect::<Result<Vec<_>, _>>()?;
        vertices.push(cycle);
    }
    Ok(vertices)
}

/// Parallel chord pairings of one vertex.
///
/// A vertex of valence `n` has `k = n / 2` of them; choice `j` pairs the
/// half-edge at position `j + i` with the one at position `j − 1 − i`
/// (mod `n`) for `i` in `0..k`. With odd valence one half-edge is left
/// without a chord, and a 1-valent vertex has no choice at all, so no beta
/// graph contains one.
pub fn interior_choices(vertex: &[HalfEdge]) -> Vec<Vec<Edge>> {
    let n = vertex.len();
    if n == 0 {
        return vec![Vec::new()];
    }
    let k = n / 2;
    (0..k)
        .map(|j| {
            (0..k)
                .map(|i| [vertex[(j + i) % n], vertex[(j + n - 1 - i) % n]])
                .collect()
        })
        .collect()
}
