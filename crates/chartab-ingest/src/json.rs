#![deny(unsafe_code)]

use std::io::Read;

use serde_json::Value;
use tracing::debug;

use chartab_model::{RawRow, Scalar};

use crate::error::{IngestError, Result};

/// Reads a JSON array of row objects into ordered raw rows.
///
/// This is the decoded-spreadsheet shape: one object per row, the first
/// object's key order defining column order (object key order is
/// preserved). `null` decodes to the missing sentinel; strings, numbers
/// and booleans map to the matching scalar. Anything else (a non-array
/// document, a non-object element, a nested value) is an input-shape
/// fault, fatal to the call.
pub fn read_json_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let doc: Value = serde_json::from_reader(reader)?;
    rows_from_json(doc)
}

/// Decodes an already-parsed JSON document into raw rows.
pub fn rows_from_json(doc: Value) -> Result<Vec<RawRow>> {
    let Value::Array(items) = doc else {
        return Err(IngestError::NotATable);
    };
    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(cells) = item else {
            return Err(IngestError::NotARow { index });
        };
        let mut row = RawRow::new();
        for (name, value) in cells {
            row.push(name, scalar_from_json(value, index)?);
        }
        rows.push(row);
    }
    debug!(rows = rows.len(), "decoded json rows");
    Ok(rows)
}

fn scalar_from_json(value: Value, index: usize) -> Result<Scalar> {
    match value {
        Value::Null => Ok(Scalar::Missing),
        Value::Bool(b) => Ok(Scalar::Bool(b)),
        Value::Number(n) => match n.as_f64() {
            Some(n) => Ok(Scalar::Number(n)),
            None => Err(IngestError::NotARow { index }),
        },
        Value::String(s) => Ok(Scalar::Text(s)),
        Value::Array(_) | Value::Object(_) => Err(IngestError::NotARow { index }),
    }
}
