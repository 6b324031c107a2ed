//! History Routes
//!
//! 定义聊天记录相关的 API 路由。

use crate::api::handlers::history_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建聊天记录路由器
pub fn create_history_router() -> Router<AppState> {
    Router::new().route("/history", get(get_history).delete(delete_history))
}
