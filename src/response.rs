use axum::Json;
use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
pub const TOTAL_PAGES_HEADER: &str = "x-total-pages";

/// Uniform success envelope: `{message, data, timestamp}`.
pub struct ApiResponse<T: Serialize> {
    message: String,
    data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(json!({
            "message": self.message,
            "data": self.data,
            "timestamp": Utc::now().to_rfc3339(),
        }))
        .into_response()
    }
}

/// List envelope: `data` stays a flat array, totals travel in the
/// `X-Total-Count` / `X-Total-Pages` response headers.
pub struct PageResponse<T: Serialize> {
    message: String,
    items: Vec<T>,
    total_count: i64,
    total_pages: i64,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(
        message: impl Into<String>,
        items: Vec<T>,
        total_count: i64,
        total_pages: i64,
    ) -> Self {
        Self {
            message: message.into(),
            items,
            total_count,
            total_pages,
        }
    }
}

impl<T: Serialize> IntoResponse for PageResponse<T> {
    fn into_response(self) -> Response {
        let mut response = Json(json!({
            "message": self.message,
            "data": self.items,
            "timestamp": Utc::now().to_rfc3339(),
        }))
        .into_response();

        let headers = response.headers_mut();
        if let Ok(count) = HeaderValue::from_str(&self.total_count.to_string()) {
            headers.insert(HeaderName::from_static(TOTAL_COUNT_HEADER), count);
        }
        if let Ok(pages) = HeaderValue::from_str(&self.total_pages.to_string()) {
            headers.insert(HeaderName::from_static(TOTAL_PAGES_HEADER), pages);
        }
        response
    }
}
