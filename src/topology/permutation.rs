//! Sparse permutations of half-edge labels.
//!
//! Labels are not contiguous, so a permutation is stored as an ordered map
//! from each moved label to its image. Fixed points are never stored, which
//! makes structural equality the same as equality of permutations.
//! Compose(p, q) = p ∘ q (apply q, then p).

use std::collections::{BTreeMap, BTreeSet};

use crate::fatgraph_error::{FatgraphError, ValidationError};
use crate::topology::half_edge::HalfEdge;

/// A bijection on a finite set of half-edges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Permutation {
    succ: BTreeMap<HalfEdge, HalfEdge>,
}

impl Permutation {
    /// The identity permutation.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Builds a permutation from disjoint cycles. Cycles of length 0 or 1
    /// are accepted and contribute nothing.
    ///
    /// # Errors
    ///
    /// [`ValidationError::DuplicateCycleLabel`] if a label appears twice.
    pub fn from_cycles<I, C>(cycles: I) -> Result<Self, FatgraphError>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[HalfEdge]>,
    {
        let mut seen = BTreeSet::new();
        let mut succ = BTreeMap::new();
        for cycle in cycles {
            let cycle = cycle.as_ref();
            for &h in cycle {
                if !seen.insert(h) {
                    return Err(ValidationError::DuplicateCycleLabel(h).into());
                }
            }
            if cycle.len() < 2 {
                continue;
            }
            for (i, &from) in cycle.iter().enumerate() {
                succ.insert(from, cycle[(i + 1) % cycle.len()]);
            }
        }
        Ok(Self { succ })
    }

    /// Image of `h`; labels outside the support are fixed.
    #[inline]
    pub fn apply(&self, h: HalfEdge) -> HalfEdge {
        self.succ.get(&h).copied().unwrap_or(h)
    }

    /// Returns `self ∘ other`, i.e. `x ↦ self(other(x))`.
    pub fn compose(&self, other: &Self) -> Self {
        let succ = self
            .succ
            .keys()
            .chain(other.succ.keys())
            .filter_map(|&x| {
                let y = self.apply(other.apply(x));
                (y != x).then_some((x, y))
            })
            .collect();
        Self { succ }
    }

    /// Non-trivial cycles, each rotated to start at its smallest label and
    /// ordered by that label.
    pub fn to_cycles(&self) -> Vec<Vec<HalfEdge>> {
        let mut visited = BTreeSet::new();
        let mut cycles = Vec::new();
        for &start in self.succ.keys() {
            if visited.contains(&start) {
                continue;
            }
            let mut cycle = vec![start];
            visited.insert(start);
            let mut cur = self.apply(start);
            while cur != start {
                visited.insert(cur);
                cycle.push(cur);
                cur = self.apply(cur);
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// Labels moved by the permutation, ascending.
    pub fn support(&self) -> impl Iterator<Item = HalfEdge> + '_ {
        self.succ.keys().copied()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.succ.is_empty()
    }

    pub fn inverse(&self) -> Self {
        Self {
            succ: self.succ.iter().map(|(&k, &v)| (v, k)).collect(),
        }
    }
}
