//! The error type every handler returns.
//!
//! Each variant maps to one HTTP status and is rendered as
//! `{"error": "<message>"}` so clients only ever parse one shape.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::ErrorBody;
use rusqlite::ffi;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or could not be coerced to its type.
    #[error("{0}")]
    Validation(String),

    /// A referenced row does not exist.
    #[error("{0}")]
    Referential(String),

    /// A destructive call arrived without an explicit confirmation.
    #[error("confirmation required: set {{\"confirm\": true}} in JSON body")]
    ConfirmationRequired,

    /// The database is unreachable or rejected the operation.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn required(field: &str) -> Self {
        ApiError::Validation(format!("{field} is required"))
    }

    pub fn missing_reference(field: &str, id: i64) -> Self {
        ApiError::Referential(format!("{field} {id} does not exist"))
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(cause, _)
                if cause.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
            {
                ApiError::Referential(err.to_string())
            }
            _ => ApiError::Storage(err.to_string()),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::ConfirmationRequired => StatusCode::BAD_REQUEST,
            ApiError::Referential(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

/// Logs a failed request at a level matching who is at fault.
pub fn log_failure(context: &str, err: &ApiError) {
    match err {
        ApiError::Storage(_) => log::error!("{context}: {err}"),
        _ => log::warn!("{context}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(
            ApiError::required("nama_taman").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::missing_reference("id_taman", 9).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::ConfirmationRequired.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Storage("disk full".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn foreign_key_failures_become_referential() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             CREATE TABLE parent (id INTEGER PRIMARY KEY);
             CREATE TABLE child (id INTEGER PRIMARY KEY, parent_id INTEGER NOT NULL REFERENCES parent(id));",
        )
        .unwrap();
        let err = conn
            .execute("INSERT INTO child (parent_id) VALUES (1)", [])
            .unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Referential(_)));
    }

    #[test]
    fn other_sqlite_failures_become_storage() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err = conn.execute("INSERT INTO nowhere VALUES (1)", []).unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Storage(_)));
    }
}
