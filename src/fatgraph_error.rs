//! FatgraphError: Unified error type for fatgraph public APIs
//!
//! Every fallible operation in the crate reports one of three families:
//! malformed input at construction time ([`ValidationError`]), unsupported
//! pairing-matrix topology ([`StructuralError`]), or a failed defensive
//! re-check during traversal ([`FatgraphError::InvariantViolation`]).
//! All of them are permanent for a given input; nothing here is retryable.

use thiserror::Error;

use crate::topology::half_edge::HalfEdge;

/// Malformed vertex, edge or interior label sets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Half-edge labels are positive; 0 is not a label.
    #[error("half-edge labels must be non-zero")]
    ZeroHalfEdge,
    /// A label occurs in two cycles handed to the same permutation.
    #[error("label {0} appears in more than one cycle")]
    DuplicateCycleLabel(HalfEdge),
    /// A half-edge occurs at two vertex positions.
    #[error("vertices are not unique: half-edge {0} repeated")]
    DuplicateVertexHalfEdge(HalfEdge),
    /// A half-edge is paired by two edges.
    #[error("edges are not unique: half-edge {0} repeated")]
    DuplicateEdgeHalfEdge(HalfEdge),
    /// An edge references a half-edge that no vertex owns.
    #[error("edge half-edge {0} does not connect to any vertex")]
    DanglingEdge(HalfEdge),
    /// Edges and interior pairs must have exactly two ends.
    #[error("edge cycle has {0} half-edges, expected 2")]
    EdgeArity(usize),
}

/// Pairing-matrix topologies that cannot be traced into sheets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("pairing matrix must be square, got {rows}x{cols}")]
    NonSquare { rows: usize, cols: usize },
    /// A strand cannot pair with itself.
    #[error("pairing matrix has a diagonal entry at strand {0}")]
    SelfPairing(usize),
    #[error("pairing matrix has bifurcation(s): strand {strand} has {degree} partners")]
    Bifurcation { strand: usize, degree: usize },
    #[error("pairing matrix has barrel(s) through strand {0}")]
    Barrel(usize),
    #[error("pairing matrix has no edge strand")]
    NoEdgeStrand,
    /// Sheets traced from edge strands leave some strands uncovered.
    #[error("pairing matrix has barrel(s): sheets cover {covered} of {expected} strands")]
    Coverage { covered: usize, expected: usize },
}

/// Unified error type for fatgraph operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FatgraphError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("structural error: {0}")]
    Structural(#[from] StructuralError),
    /// Signals a bug upstream of construction validation.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
    /// Generation stopped because the candidate budget ran out.
    #[error("generation budget of {limit} candidates exceeded")]
    BudgetExceeded { limit: usize },
}
