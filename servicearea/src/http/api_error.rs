use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use servicearea_core::{resolution::ResolutionError, store::StoreError};

/// failures reported to API callers as `{"error": <kind>, "message": <detail>}`.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MalformedRequest(String),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MalformedRequest(_) => "MalformedRequest",
            ApiError::Resolution(e) => e.kind(),
            ApiError::Store(e) => e.kind(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Resolution(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::InvalidGeofence { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::ZoneNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::DuplicateId(_)) => StatusCode::CONFLICT,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            log::debug!("request rejected with {status}: {self}");
        }
        let body = Json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
