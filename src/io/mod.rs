//! Readers that turn external data into fatgraphs.
//!
//! Only the hydrogen-bond report format is supported; see [`hbond`].

pub mod hbond;

pub use hbond::{BackboneMode, Bond, HbondError, RelabeledBonds, parse_bonds, relabel};
