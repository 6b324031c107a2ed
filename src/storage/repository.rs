use async_trait::async_trait;
use surrealdb::{Surreal, engine::any::Any};

use crate::error::Result;
use crate::models::chat::ChatLog;

/// 聊天记录表名
pub const CHAT_LOG_TABLE: &str = "chat_log";

/// 聊天记录仓储 trait
///
/// 每个用户一份文档。`save` 为整文档覆盖写，不提供并发保护，
/// 同一用户的并发写以存储层的写入顺序为准。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    /// 根据用户标识获取日志
    async fn find_by_owner(&self, owner: &str) -> Result<Option<ChatLog>>;

    /// 写入（创建或覆盖）日志
    async fn save(&self, log: &ChatLog) -> Result<()>;

    /// 删除日志，返回是否存在
    async fn delete_by_owner(&self, owner: &str) -> Result<bool>;

    /// 存储连通性检查
    async fn ping(&self) -> Result<()>;
}

/// SurrealDB 聊天记录仓储实现
#[derive(Clone)]
pub struct SurrealChatHistoryRepository {
    db: Surreal<Any>,
}

impl SurrealChatHistoryRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChatHistoryRepository for SurrealChatHistoryRepository {
    async fn find_by_owner(&self, owner: &str) -> Result<Option<ChatLog>> {
        let result: Option<ChatLog> = self.db.select((CHAT_LOG_TABLE, owner)).await?;
        Ok(result)
    }

    async fn save(&self, log: &ChatLog) -> Result<()> {
        let saved: Option<ChatLog> = self
            .db
            .upsert((CHAT_LOG_TABLE, log.owner.as_str()))
            .content(log.clone())
            .await?;

        saved.map(|_| ()).ok_or_else(|| {
            crate::error::AppError::Database(format!("Failed to save chat log: {}", log.owner))
        })
    }

    async fn delete_by_owner(&self, owner: &str) -> Result<bool> {
        let result: Option<ChatLog> = self.db.delete((CHAT_LOG_TABLE, owner)).await?;
        Ok(result.is_some())
    }

    async fn ping(&self) -> Result<()> {
        self.db.health().await?;
        Ok(())
    }
}
