use axum::{
    Json,
    extract::{Extension, State, rejection::JsonRejection},
    response::IntoResponse,
};
use tracing::{debug, warn};

use crate::{
    api::{app_state::AppState, dto::chat_dto::*},
    error::{AppError, HandlerError, ResultExt},
    security::auth::Claims,
};

const SEND_FAILED: &str = "Error processing chat";

/// 处理一条用户消息并返回助手回复
///
/// 请求体缺失、格式错误或 `message` 不是字符串时返回 400；
/// 本轮交互无法持久化时返回 500，不返回回复。
pub async fn send_message(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(request) = payload
        .map_err(|e| AppError::Validation(e.body_text()))
        .context(SEND_FAILED)?;

    let owner = claims.user_id();
    debug!(owner, "Processing chat message");

    let reply = state
        .chat_service
        .send(owner, &request.message)
        .await
        .inspect_err(|e| {
            if matches!(e, AppError::Database(_)) {
                state.observability.metrics.record_storage_error();
            }
            warn!(owner, error = %e, "Failed to process chat message");
        })
        .context(SEND_FAILED)?;

    let metrics = &state.observability.metrics;
    metrics.record_reply(reply.kind);
    if !reply.persisted {
        metrics.record_storage_error();
    }

    Ok(Json(SendMessageResponse {
        response: reply.response,
    }))
}
