use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// Success envelope shared by every endpoint:
/// `{"success": true, "data": ..., "message": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T, message: &str) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: Some(message.to_string()),
        })
    }

    pub fn created(data: T, message: &str) -> (StatusCode, Json<Self>) {
        (StatusCode::CREATED, Self::ok(data, message))
    }
}
