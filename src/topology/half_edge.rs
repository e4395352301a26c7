//! `HalfEdge`: a strong, zero-cost label for one end of a ribbon-graph edge
//!
//! Fatgraphs are described entirely in terms of half-edges: a vertex is a
//! cyclic sequence of them and an edge pairs two of them. Labels are positive
//! integers that need not be contiguous, so `HalfEdge` wraps a `NonZeroU64`
//! and rejects 0 at construction.
//!
//! This module provides:
//! - A transparent `HalfEdge` newtype around `NonZeroU64`.
//! - A fallible constructor and an accessor.
//! - `Debug`/`Display` formatting and the usual ordering/hashing traits so
//!   half-edges can key maps and sets.

use std::{fmt, num::NonZeroU64};

use crate::fatgraph_error::{FatgraphError, ValidationError};

/// One labelled end of an edge at a vertex.
///
/// Ordering follows the raw label, which is what "smallest label" means
/// throughout the crate (cycle rotation, trail starts, relabeling).
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct HalfEdge(NonZeroU64);

impl HalfEdge {
    /// Creates a new `HalfEdge` from a raw label.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroHalfEdge`] if `raw == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use fatgraph::topology::half_edge::HalfEdge;
    /// let h = HalfEdge::new(3).unwrap();
    /// assert_eq!(h.get(), 3);
    /// assert!(HalfEdge::new(0).is_err());
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Result<Self, FatgraphError> {
        NonZeroU64::new(raw)
            .map(HalfEdge)
            .ok_or_else(|| ValidationError::ZeroHalfEdge.into())
    }

    /// Returns the raw label.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

/// Converts a cycle of raw labels into half-edges.
pub(crate) fn cycle_from_raw<C>(cycle: C) -> Result<Vec<HalfEdge>, FatgraphError>
where
    C: IntoIterator<Item = u64>,
{
    cycle.into_iter().map(HalfEdge::new).collect()
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

impl fmt::Debug for HalfEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HalfEdge").field(&self.get()).finish()
    }
}

impl fmt::Display for HalfEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Writes a list of cycles as `[(1, 2, 3), (4, 5)]`.
pub(crate) fn fmt_cycles<'a, I, C>(f: &mut fmt::Formatter<'_>, cycles: I) -> fmt::Result
where
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = &'a HalfEdge>,
{
    write!(f, "[")?;
    for (i, cycle) in cycles.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "(")?;
        for (j, h) in cycle.into_iter().enumerate() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{h}")?;
        }
        write!(f, ")")?;
    }
    write!(f, "]")
}

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    assert_eq_size!(HalfEdge, u64);
    assert_eq_align!(HalfEdge, u64);
    // Niche from NonZeroU64 keeps Option free.
    assert_eq_size!(Option<HalfEdge>, u64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_zero_is_rejected() {
        assert_eq!(
            HalfEdge::new(0),
            Err(FatgraphError::Validation(ValidationError::ZeroHalfEdge))
        );
    }

    #[test]
    fn new_and_get() {
        let h = HalfEdge::new(42).unwrap();
        assert_eq!(h.get(), 42);
        assert_eq!(HalfEdge::new(u64::MAX).unwrap().get(), u64::MAX);
    }

    #[test]
    fn debug_and_display() {
        let h = HalfEdge::new(7).unwrap();
        assert_eq!(format!("{:?}", h), "HalfEdge(7)");
        assert_eq!(format!("{}", h), "7");
    }

    #[test]
    fn ordering_follows_label() {
        let a = HalfEdge::new(1).unwrap();
        let b = HalfEdge::new(2).unwrap();
        assert!(a < b);
    }

    #[test]
    fn cycle_from_raw_stops_at_zero() {
        assert!(cycle_from_raw([1, 2, 3]).is_ok());
        assert!(cycle_from_raw([1, 0, 3]).is_err());
    }

    #[test]
    fn json_roundtrip() {
        let h = HalfEdge::new(123).unwrap();
        let s = serde_json::to_string(&h).unwrap();
        assert_eq!(s, "123");
        let h2: HalfEdge = serde_json::from_str(&s).unwrap();
        assert_eq!(h2, h);
        assert!(serde_json::from_str::<HalfEdge>("0").is_err());
    }
}
