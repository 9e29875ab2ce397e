use actix_web::http::StatusCode;
use serde::Serialize;

pub mod coupons;

/// Uniform envelope returned by every coupon endpoint. The embedded status
/// code mirrors the HTTP status the handler responds with.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub is_success: bool,
    pub result: Option<T>,
    pub status_code: u16,
    pub error_message: Vec<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(status: StatusCode, result: Option<T>) -> Self {
        Self {
            is_success: true,
            result,
            status_code: status.as_u16(),
            error_message: Vec::new(),
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            result: None,
            status_code: status.as_u16(),
            error_message: vec![message.into()],
        }
    }
}
