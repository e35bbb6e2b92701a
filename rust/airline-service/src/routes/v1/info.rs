use axum::response::Response;
use serde_json::json;

use crate::response::ok;

pub async fn info() -> Response {
    ok("API is live", json!({}))
}
