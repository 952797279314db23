use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tallyfolio_core::balances::ManualBalanceError;
use tallyfolio_core::errors::{Error as CoreError, ErrorKind};
use tallyfolio_core::tags::TagError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    result: Option<()>,
    message: String,
}

/// Unknown labels and unknown tag deletes are client errors; other
/// references to missing things are conflicts.
fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::ManualBalance(ManualBalanceError::UnknownLabels { .. })
        | CoreError::Tag(TagError::UnknownTag(_)) => StatusCode::BAD_REQUEST,
        _ => match err.kind() {
            ErrorKind::Shape | ErrorKind::FieldDecode => StatusCode::BAD_REQUEST,
            ErrorKind::ReferentialConflict | ErrorKind::UniquenessViolation => {
                StatusCode::CONFLICT
            }
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        },
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Core(e) => core_status(e),
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }
        let body = Json(ErrorBody {
            result: None,
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
