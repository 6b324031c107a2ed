//! 存储工厂模块
//!
//! 根据配置创建相应的聊天记录仓储。

use std::sync::Arc;
use tracing::info;

use crate::config::config::{DatabaseConfig, StorageBackend};
use crate::error::{AppError, Result};
use crate::storage::memory::InMemoryChatHistoryRepository;
use crate::storage::repository::{ChatHistoryRepository, SurrealChatHistoryRepository};
use crate::storage::surrealdb::SurrealPool;

/// 存储工厂
pub struct StorageFactory;

impl StorageFactory {
    /// 根据配置创建仓储实例
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<dyn ChatHistoryRepository>> {
        match config.backend {
            StorageBackend::Surrealdb => {
                let pool = SurrealPool::new(config)
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                info!("Using SurrealDB chat history storage at {}", config.url);
                Ok(Arc::new(SurrealChatHistoryRepository::new(pool.inner())))
            }
            StorageBackend::Memory => {
                info!("Using in-memory chat history storage");
                Ok(Arc::new(InMemoryChatHistoryRepository::new()))
            }
        }
    }
}
