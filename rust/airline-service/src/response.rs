use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// Body shape shared by every endpoint, success or failure.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
    pub error: Value,
}

pub fn ok<T: Serialize>(message: impl Into<String>, data: T) -> Response {
    with_status(StatusCode::OK, message, data)
}

pub fn created<T: Serialize>(message: impl Into<String>, data: T) -> Response {
    with_status(StatusCode::CREATED, message, data)
}

fn with_status<T: Serialize>(status: StatusCode, message: impl Into<String>, data: T) -> Response {
    let body = Envelope { success: true, message: message.into(), data, error: json!({}) };
    (status, Json(body)).into_response()
}

pub fn failure(status: StatusCode, code: &str, explanation: String) -> Response {
    let body = Envelope {
        success: false,
        message: "Something went wrong while processing the request".to_string(),
        data: json!({}),
        error: json!({ "code": code, "explanation": explanation }),
    };
    (status, Json(body)).into_response()
}
