//! Backend-neutral database errors
//!
//! Driver errors are classified here once. Handlers match on the kinds
//! below and never inspect SQLSTATE codes or driver types themselves.

use sqlx::error::ErrorKind;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("foreign key constraint violated: {constraint}")]
    ForeignKeyViolation { constraint: String },

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("database error: {0}")]
    Sqlx(sqlx::Error),
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let constraint = db_err.constraint().unwrap_or_default().to_owned();
            match db_err.kind() {
                ErrorKind::UniqueViolation => return Self::UniqueViolation { constraint },
                ErrorKind::ForeignKeyViolation => {
                    return Self::ForeignKeyViolation { constraint }
                }
                _ => {}
            }
        }
        Self::Sqlx(err)
    }
}
