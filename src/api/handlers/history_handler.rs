use axum::{
    Json,
    extract::{Extension, State},
    response::IntoResponse,
};
use tracing::{debug, warn};

use crate::{
    api::{app_state::AppState, dto::history_dto::DeleteHistoryResponse},
    error::{HandlerError, ResultExt},
    security::auth::Claims,
};

/// 获取当前用户的聊天记录，不存在时返回空记录
pub async fn get_history(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, HandlerError> {
    let owner = claims.user_id();
    debug!(owner, "Fetching chat history");

    let log = state
        .chat_service
        .fetch(owner)
        .await
        .inspect_err(|e| {
            state.observability.metrics.record_storage_error();
            warn!(owner, error = %e, "Failed to fetch chat history");
        })
        .context("Error fetching history")?;

    state.observability.metrics.record_history_fetch();
    Ok(Json(log))
}

/// 删除当前用户的聊天记录，记录不存在时同样成功
pub async fn delete_history(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, HandlerError> {
    let owner = claims.user_id();

    let removed = state
        .chat_service
        .clear(owner)
        .await
        .inspect_err(|e| {
            state.observability.metrics.record_storage_error();
            warn!(owner, error = %e, "Failed to delete chat history");
        })
        .context("Error deleting history")?;

    debug!(owner, removed, "Chat history cleared");
    state.observability.metrics.record_history_clear();
    Ok(Json(DeleteHistoryResponse::deleted()))
}
