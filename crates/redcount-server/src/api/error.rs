use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use redcount_core::RedcountError;

use super::MessageBody;

/// Any failure on a store-backed route. Always rendered as
/// `500 {"message": "<error text>"}`, whatever the cause.
#[derive(Debug)]
pub struct ApiError(pub RedcountError);

impl From<RedcountError> for ApiError {
    fn from(e: RedcountError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(MessageBody {
            message: self.0.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
