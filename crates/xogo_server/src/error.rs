//! Transport-level errors.
//!
//! Game logic never fails; only a request that cannot be turned into a
//! game, or that names a square that does not exist, ends up here.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use tracing::warn;

/// What went wrong with a request.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ApiErrorKind {
    /// The request carried no body.
    #[display("no request body found")]
    MissingBody,

    /// The body was not a valid game state.
    #[display("malformed game state: {}", _0)]
    MalformedBody(String),

    /// The square segment was not an index in 0-8.
    #[display("no such square: {}", _0)]
    UnknownSquare(String),
}

impl ApiErrorKind {
    /// HTTP status reported for this kind.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiErrorKind::MissingBody | ApiErrorKind::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiErrorKind::UnknownSquare(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// Request error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct ApiError {
    /// Error kind.
    pub kind: ApiErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ApiError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ApiErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<ApiErrorKind> for ApiError {
    #[track_caller]
    fn from(kind: ApiErrorKind) -> Self {
        Self::new(kind)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status();
        warn!(error = %self, status = %status, "Rejecting request");
        let body = serde_json::json!({ "error": self.kind.to_string() });
        (status, Json(body)).into_response()
    }
}
