//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Every fallible operation in the service resolves to one of these kinds,
/// so callers can decide how to react (in particular, whether a failed
/// transfer is safe to retry) without inspecting database internals.
///
/// # Error Categories
///
/// - **InvalidArgument**: the request itself is malformed (non-positive
///   amount, identical accounts, unsupported currency). Rejected before any
///   write happens.
/// - **NotFound**: a referenced account, entry, or transfer does not exist.
///   If raised inside a transaction, the transaction is rolled back.
/// - **Conflict**: the store aborted the transaction (serialization failure,
///   deadlock report, lock-wait timeout). Nothing was persisted, so the
///   operation is safe to retry from the top.
/// - **Unavailable**: the store cannot be reached at all.
/// - **Database**: any other sqlx error, surfaced unmodified.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request violates a precondition. Returns HTTP 400 Bad Request.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Referenced row does not exist. Returns HTTP 404 Not Found.
    ///
    /// The payload names the missing resource ("account", "entry", ...).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The transaction was aborted by concurrent activity and can be
    /// retried. Returns HTTP 409 Conflict.
    #[error("transaction aborted by concurrent activity, safe to retry")]
    Conflict,

    /// The database cannot be reached. Returns HTTP 503 Service Unavailable.
    #[error("database unavailable")]
    Unavailable,

    /// Any other database failure. Returns HTTP 500 Internal Server Error
    /// with the details kept out of the response body.
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl AppError {
    /// Whether the failed operation may be re-executed from the top.
    ///
    /// True only for [`AppError::Conflict`]: the store guarantees the aborted
    /// transaction left no effect behind, so a retry cannot double-apply.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Conflict)
    }
}

/// Classify a sqlx error into a stable error kind.
///
/// This is the single place where PostgreSQL SQLSTATE codes are interpreted,
/// so repositories and services can propagate with `?` and still hand their
/// callers a meaningful kind:
///
/// - `40001` (serialization_failure), `40P01` (deadlock_detected) and
///   `55P03` (lock_not_available, raised when `lock_timeout` expires) become
///   [`AppError::Conflict`].
/// - `23503` (foreign_key_violation) means a referenced account id does not
///   exist and becomes [`AppError::NotFound`].
/// - `23514` (check_violation) means a stored invariant was about to be
///   broken and becomes [`AppError::InvalidArgument`].
/// - Pool and I/O failures become [`AppError::Unavailable`].
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => return AppError::NotFound("row"),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                return AppError::Unavailable;
            }
            sqlx::Error::Database(db) => {
                if let Some(code) = db.code() {
                    match code.as_ref() {
                        "40001" | "40P01" | "55P03" => return AppError::Conflict,
                        "23503" => return AppError::NotFound("account"),
                        "23514" => {
                            return AppError::InvalidArgument(db.message().to_string());
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
        AppError::Database(err)
    }
}

/// Convert AppError into an HTTP response.
///
/// Handlers return `Result<T, AppError>` and Axum turns errors into JSON
/// responses of the form:
///
/// ```json
/// {
///   "error": {
///     "code": "error_kind",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidArgument(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_argument", msg.clone())
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            AppError::Conflict => (StatusCode::CONFLICT, "conflict", self.to_string()),
            AppError::Unavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "unavailable", self.to_string())
            }
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
