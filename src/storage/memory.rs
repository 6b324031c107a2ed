//! 进程内聊天记录仓储
//!
//! 用于开发与测试，进程退出后数据丢失。

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::Result;
use crate::models::chat::ChatLog;
use crate::storage::repository::ChatHistoryRepository;

#[derive(Debug, Default)]
pub struct InMemoryChatHistoryRepository {
    logs: DashMap<String, ChatLog>,
}

impl InMemoryChatHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前保存的日志数量
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

#[async_trait]
impl ChatHistoryRepository for InMemoryChatHistoryRepository {
    async fn find_by_owner(&self, owner: &str) -> Result<Option<ChatLog>> {
        Ok(self.logs.get(owner).map(|entry| entry.value().clone()))
    }

    async fn save(&self, log: &ChatLog) -> Result<()> {
        self.logs.insert(log.owner.clone(), log.clone());
        Ok(())
    }

    async fn delete_by_owner(&self, owner: &str) -> Result<bool> {
        Ok(self.logs.remove(owner).is_some())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_find_delete() {
        let repo = InMemoryChatHistoryRepository::new();
        assert!(repo.find_by_owner("u1").await.unwrap().is_none());

        let mut log = ChatLog::empty("u1");
        log.push_exchange("hi", "hello");
        repo.save(&log).await.unwrap();

        let found = repo.find_by_owner("u1").await.unwrap().unwrap();
        assert_eq!(found, log);
        assert!(repo.find_by_owner("u2").await.unwrap().is_none());

        assert!(repo.delete_by_owner("u1").await.unwrap());
        assert!(!repo.delete_by_owner("u1").await.unwrap());
        assert!(repo.is_empty());
    }
}
