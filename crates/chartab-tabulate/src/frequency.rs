#![deny(unsafe_code)]

use std::collections::BTreeMap;

use tracing::debug;

use chartab_model::{Dataset, FrequencyTable, ValueCounts};

/// Counts, for every column, how many records hold each distinct value.
///
/// A record without the column counts under the missing sentinel rather
/// than being dropped, so each column's counts always sum to the record
/// total. Values collide by deep equality; a number and its text rendering
/// stay separate buckets. O(rows x columns), single pass per column.
pub fn tabulate(dataset: &Dataset) -> FrequencyTable {
    let mut counts: BTreeMap<String, ValueCounts> = BTreeMap::new();
    for column in &dataset.columns {
        let histogram = counts.entry(column.clone()).or_default();
        for record in &dataset.records {
            *histogram.entry(record.value(column).clone()).or_insert(0) += 1;
        }
    }
    debug!(
        records = dataset.len(),
        columns = dataset.columns.len(),
        "tabulated frequency table"
    );
    FrequencyTable {
        counts,
        columns: dataset.columns.clone(),
    }
}
