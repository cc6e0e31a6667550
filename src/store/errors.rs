//! # Store Errors
//!
//! Backend failures classified by shape. The store never hands raw
//! `sqlx::Error` values upward; callers match on these variants instead.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A referenced row (user, topic, article) does not exist
    #[error("foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// A value was missing or rejected by a column constraint. Also covers
    /// values that do not fit the column type.
    #[error("column mismatch: {0}")]
    ColumnMismatch(String),

    /// Pool exhausted, closed, or the connection was lost
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Any other backend failure
    #[error("backend error: {0}")]
    Backend(#[source] sqlx::Error),
}

impl StoreError {
    /// Whether the failure was caused by the data the client supplied
    pub fn is_client_caused(&self) -> bool {
        matches!(
            self,
            StoreError::ForeignKeyViolation(_) | StoreError::ColumnMismatch(_)
        )
    }
}

/// Custom `From<sqlx::Error>` keyed on the driver's error kind, never on
/// message text.
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::ForeignKeyViolation => {
                    Self::ForeignKeyViolation(db_err.message().to_owned())
                }
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    Self::ColumnMismatch(db_err.message().to_owned())
                }
                _ => Self::Backend(err),
            },
            sqlx::Error::ColumnNotFound(column) => Self::ColumnMismatch(column.clone()),
            sqlx::Error::ColumnDecode { index, .. } => {
                Self::ColumnMismatch(format!("cannot decode column {}", index))
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::Unavailable(err.to_string())
            }
            _ => Self::Backend(err),
        }
    }
}
