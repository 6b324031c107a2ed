use axum::{Json, response::IntoResponse};
use serde_json::json;

/// 根路径存活消息
pub async fn api_root() -> impl IntoResponse {
    Json(json!({ "message": "🌱 Plant Care API is running!" }))
}
