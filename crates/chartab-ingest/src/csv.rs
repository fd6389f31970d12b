#![deny(unsafe_code)]

use std::path::Path;

use tracing::debug;

use chartab_model::{RawRow, Scalar};

use crate::error::Result;

/// Reads a CSV file into ordered raw rows.
///
/// The first record supplies the column names (trimmed, BOM-stripped,
/// inner whitespace collapsed). Cells are trimmed; an empty cell decodes
/// to the missing sentinel, everything else passes through as text with
/// no numeric coercion. Fully-empty records are skipped. Short records
/// pad with missing cells so every row carries the full column set.
pub fn read_csv_rows(path: &Path) -> Result<Vec<RawRow>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = RawRow::new();
        for (idx, header) in headers.iter().enumerate() {
            let cell = normalize_cell(record.get(idx).unwrap_or(""));
            let value = if cell.is_empty() {
                Scalar::Missing
            } else {
                Scalar::Text(cell)
            };
            row.push(header.clone(), value);
        }
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), columns = headers.len(), "read csv rows");
    Ok(rows)
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("data.csv");
        std::fs::write(&path, contents).expect("write csv fixture");
        (dir, path)
    }

    #[test]
    fn headers_keep_source_order() {
        let (_dir, path) = write_csv("Product,Region,TotalSales\nWidget A,East,100\n");
        let rows = read_csv_rows(&path).expect("read csv");
        let names: Vec<&str> = rows[0].cells.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["Product", "Region", "TotalSales"]);
    }

    #[test]
    fn empty_cells_become_missing() {
        let (_dir, path) = write_csv("A,B\n1,\n");
        let rows = read_csv_rows(&path).expect("read csv");
        assert_eq!(rows[0].cells[0].1, Scalar::Text("1".to_string()));
        assert_eq!(rows[0].cells[1].1, Scalar::Missing);
    }

    #[test]
    fn blank_rows_are_skipped_and_short_rows_padded() {
        let (_dir, path) = write_csv("A,B\n,,\nx\n");
        let rows = read_csv_rows(&path).expect("read csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells[0].1, Scalar::Text("x".to_string()));
        assert_eq!(rows[0].cells[1].1, Scalar::Missing);
    }

    #[test]
    fn header_whitespace_and_bom_are_normalized() {
        let (_dir, path) = write_csv("\u{feff} Total  Sales ,B\n1,2\n");
        let rows = read_csv_rows(&path).expect("read csv");
        assert_eq!(rows[0].cells[0].0, "Total Sales");
    }

    #[test]
    fn numeric_looking_cells_stay_text() {
        let (_dir, path) = write_csv("A\n42\n");
        let rows = read_csv_rows(&path).expect("read csv");
        assert_eq!(rows[0].cells[0].1, Scalar::Text("42".to_string()));
    }
}
