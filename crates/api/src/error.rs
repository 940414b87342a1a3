//! HTTP error type and its JSON rendering.
//!
//! Every failure leaves the API as `{"error": <message>, "code": <CODE>}`.
//! Server-side failures are logged here and reach the client with a
//! generic message, except the two whose message is meant for operators
//! (`UNSUPPORTED_TYPE`, `MISSING_SETTINGS`).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use collections_core::error::CoreError;
use serde::Serialize;
use sqlx::error::ErrorKind;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request shape the handlers reject before touching the database.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

/// Status, machine-readable code and client-facing message of one error.
#[derive(Debug)]
struct Reply {
    status: StatusCode,
    code: &'static str,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    code: &'static str,
}

impl Reply {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            INTERNAL_MESSAGE,
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let reply = match &self {
            AppError::Core(err) => core_reply(err),
            AppError::Database(err) => database_reply(err),
            AppError::BadRequest(msg) => Reply::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                Reply::internal()
            }
        };

        let body = ErrorBody {
            error: &reply.message,
            code: reply.code,
        };
        (reply.status, Json(body)).into_response()
    }
}

fn core_reply(err: &CoreError) -> Reply {
    match err {
        CoreError::NotFound { entity, id } => Reply::new(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => {
            Reply::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
        }
        CoreError::Conflict(msg) => Reply::new(StatusCode::CONFLICT, "CONFLICT", msg),
        CoreError::UnknownRoute(route) => Reply::new(
            StatusCode::BAD_REQUEST,
            "UNKNOWN_ROUTE",
            format!("Unknown route '{route}'"),
        ),
        // A record whose kind has no route is a deployment defect, not a
        // client mistake; the type is named so it can be fixed.
        CoreError::UnsupportedType { .. } => {
            tracing::error!(error = %err, "Unsupported polymorphic type");
            Reply::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "UNSUPPORTED_TYPE",
                err.to_string(),
            )
        }
        CoreError::MissingSettings(_) => {
            tracing::error!(error = %err, "Missing settings");
            Reply::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "MISSING_SETTINGS",
                err.to_string(),
            )
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            Reply::internal()
        }
    }
}

/// Map sqlx failures onto client errors where the database rejected the
/// request's data.
///
/// Only unique constraints named `uq_*` are reported as conflicts; any
/// other unique violation is unexpected and stays a 500.
fn database_reply(err: &sqlx::Error) -> Reply {
    let db_err = match err {
        sqlx::Error::RowNotFound => {
            return Reply::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found")
        }
        sqlx::Error::Database(db_err) => db_err,
        other => {
            tracing::error!(error = %other, "Database error");
            return Reply::internal();
        }
    };

    let constraint = db_err.constraint().unwrap_or_default();
    match db_err.kind() {
        ErrorKind::UniqueViolation if constraint.starts_with("uq_") => Reply::new(
            StatusCode::CONFLICT,
            "CONFLICT",
            format!("Duplicate value violates unique constraint: {constraint}"),
        ),
        ErrorKind::ForeignKeyViolation => Reply::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "Referenced record does not exist",
        ),
        ErrorKind::CheckViolation => Reply::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            format!("Value violates check constraint: {constraint}"),
        ),
        _ => {
            tracing::error!(error = %db_err, "Database error");
            Reply::internal()
        }
    }
}
