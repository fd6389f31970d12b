//! Decoding boundary for chartab.
//!
//! Turns source tables into the ordered row sequence the tabulation core
//! consumes. Two decoders: CSV files and JSON arrays of row objects (the
//! shape a spreadsheet's first sheet decodes to). Neither coerces values;
//! cells pass through as text or the matching scalar type.

pub mod csv;
pub mod error;
pub mod json;

pub use self::csv::read_csv_rows;
pub use error::IngestError;
pub use json::{read_json_rows, rows_from_json};
