use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabulateError {
    /// Caller passed an empty string where a grouping or metric column
    /// name was required. Boundary layers map this to a client error.
    #[error("{role} column name must not be empty")]
    EmptyColumnName { role: &'static str },
}

pub type Result<T> = std::result::Result<T, TabulateError>;
