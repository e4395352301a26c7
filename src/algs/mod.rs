//! Algorithms over fatgraphs: perfect-matching enumeration, exhaustive
//! generation, and sheet tracing for pairing matrices.

pub mod generate;
pub mod matching;
pub mod sheets;

pub use generate::{
    GenerationOptions, generate_all, generate_all_b, generate_all_b_with, generate_all_with,
};
pub use matching::{PerfectMatchings, all_perfect_matchings};
pub use sheets::trace_sheets;
