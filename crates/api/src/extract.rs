//! Request extractors with application-shaped rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// JSON body extractor that rejects malformed input as an [`AppError`].
///
/// Axum's stock `Json` answers bad bodies (syntax errors, missing fields,
/// unknown relationship kinds) with a plain-text 422; routing the rejection
/// through [`AppError::BadRequest`] keeps the boundary inside the
/// `{ "message": ... }` envelope with a 400. Doubles as a response type so
/// handlers keep a single `Json`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
