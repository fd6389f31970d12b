#![deny(unsafe_code)]

use std::collections::BTreeSet;

use tracing::debug;

use chartab_model::{Dataset, RawRow, Record};

/// Converts decoded source rows into a uniform, immutable dataset.
///
/// Column order is the insertion order of the first row; a repeated header
/// keeps its first position (and a record keeps the last value written
/// under it, so duplicates cannot survive normalization). An empty row
/// sequence is a valid boundary case yielding an empty column list, not an
/// error. Values pass through uncoerced.
pub fn normalize(rows: Vec<RawRow>) -> Dataset {
    let mut columns = Vec::new();
    if let Some(first) = rows.first() {
        let mut seen = BTreeSet::new();
        for (name, _) in &first.cells {
            if seen.insert(name.clone()) {
                columns.push(name.clone());
            }
        }
    }
    let records: Vec<Record> = rows
        .into_iter()
        .map(|row| Record {
            cells: row.cells.into_iter().collect(),
        })
        .collect();
    debug!(records = records.len(), columns = columns.len(), "normalized dataset");
    Dataset { columns, records }
}
