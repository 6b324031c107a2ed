use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 消息发送方
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// 用户消息
    User,
    /// 助手回复
    Bot,
}

/// 单条聊天消息
///
/// 写入后不可变，只会被追加或随整个日志一起删除。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// 消息文本
    pub text: String,
    /// 发送方
    pub sender: Sender,
    /// 捕获时间
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// 以当前时间创建消息
    pub fn new(text: &str, sender: Sender) -> Self {
        Self {
            text: text.to_string(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// 用户的聊天日志
///
/// 每个用户仅有一份，消息按插入顺序即时间顺序排列。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatLog {
    /// 所属用户标识
    #[serde(rename = "userId")]
    pub owner: String,
    /// 消息列表（仅追加）
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// 创建空日志
    pub fn empty(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            messages: Vec::new(),
        }
    }

    /// 追加一轮交互：先用户消息，后助手回复，各自记录时间戳
    pub fn push_exchange(&mut self, user_text: &str, bot_text: &str) {
        self.messages.push(ChatMessage::new(user_text, Sender::User));
        self.messages.push(ChatMessage::new(bot_text, Sender::Bot));
    }

    /// 消息数量
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
