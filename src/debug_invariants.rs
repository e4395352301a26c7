use crate::fatgraph_error::FatgraphError;

/// Consistency checks between a graph's cycle lists and its permutations.
pub trait DebugInvariants {
    /// Panics on the first broken invariant; a no-op unless built with
    /// `debug_assertions` or the `strict-invariants` feature.
    fn debug_assert_invariants(&self);
    /// Returns the first broken invariant as
    /// [`FatgraphError::InvariantViolation`].
    fn validate_invariants(&self) -> Result<(), FatgraphError>;
}

/// Runs a fallible check and panics with `[invariants] <context>: <error>`
/// when invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
