/**
 * Error Conversion
 *
 * Lets handlers return `BackendError` directly. Every error becomes a JSON
 * body of the form:
 *
 * ```json
 * { "message": "Refresh token is missing", "status": 401 }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = json!({
            "message": self.public_message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
