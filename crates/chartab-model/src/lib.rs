//! Data model for the chartab tabulation engine.
//!
//! - **scalar**: the `Scalar` cell value type and its key/wire semantics
//! - **table**: raw rows, normalized records, and the `Dataset` container
//! - **views**: the derived structures fed to the charting layer

pub mod scalar;
pub mod table;
pub mod views;

pub use scalar::{MISSING_KEY, Scalar, parse_metric};
pub use table::{Dataset, RawRow, Record};
pub use views::{FrequencyTable, PairwiseAggregation, ValueCounts};
