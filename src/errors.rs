// errors.rs

use crate::domain::record::ValidationError;
use std::fmt;

/// Errors originating from routing, draft validation, or the storage layer.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Validation(ValidationError),
    /// Schema bootstrap / connection problems.
    DbError(String),
    /// The slot could not be read at all (the table itself, not its contents).
    StorageRead(String),
    /// The collection changed in memory but the write-back failed.
    StorageWrite(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Validation(err) => write!(f, "Invalid submission: {err}"),
            ServerError::DbError(msg) => write!(f, "Database Error: {msg}"),
            ServerError::StorageRead(msg) => write!(f, "Storage read failed: {msg}"),
            ServerError::StorageWrite(msg) => {
                write!(f, "Change was applied but could not be saved: {msg}")
            }
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<ValidationError> for ServerError {
    fn from(err: ValidationError) -> Self {
        ServerError::Validation(err)
    }
}
