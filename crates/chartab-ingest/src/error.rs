use thiserror::Error;

/// Input-shape faults: the source could not be decoded into an ordered
/// sequence of flat rows. Fatal to the single call; per-row value quirks
/// are never errors here (they become data for the core to group).
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document is not an array of row objects")]
    NotATable,
    #[error("row {index} is not a flat object of scalar values")]
    NotARow { index: usize },
}

pub type Result<T> = std::result::Result<T, IngestError>;
