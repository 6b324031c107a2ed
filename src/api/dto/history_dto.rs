//! 聊天记录 DTO

use serde::{Deserialize, Serialize};

/// 删除聊天记录响应
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteHistoryResponse {
    pub message: String,
}

impl DeleteHistoryResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Chat history deleted".to_string(),
        }
    }
}
