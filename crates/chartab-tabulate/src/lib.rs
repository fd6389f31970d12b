//! Tabulation core for chartab.
//!
//! Three pure, single-pass operations over an immutable dataset:
//!
//! - **normalize**: raw decoded rows into uniform records plus the ordered
//!   column list
//! - **frequency**: per-column distinct-value counts
//! - **pairwise**: a numeric metric summed under two grouping columns
//!
//! Nothing here holds state between calls or performs I/O; concurrent
//! callers may share one dataset without synchronization.

pub mod error;
pub mod frequency;
pub mod normalize;
pub mod pairwise;

pub use error::{Result, TabulateError};
pub use frequency::tabulate;
pub use normalize::normalize;
pub use pairwise::aggregate;
