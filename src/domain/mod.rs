//! Content model and the pure operations over it.
//!
//! Nothing in this module performs I/O; the server layer fetches raw records
//! and hands them over as immutable snapshots.

pub mod date;
pub mod enrichment;
pub mod entry;
pub mod pagination;
pub mod taxonomy;
pub mod types;
