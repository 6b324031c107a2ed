//! 对话 DTO
//!
//! 定义发送消息的请求和响应数据结构。

use serde::{Deserialize, Serialize};

/// 发送消息请求
///
/// `message` 必须存在且为字符串，空串同样合法。
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// 用户输入文本
    pub message: String,
}

/// 发送消息响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageResponse {
    /// 助手回复
    pub response: String,
}
