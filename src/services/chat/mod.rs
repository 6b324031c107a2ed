//! 对话服务
//!
//! 组合回复选择器与聊天记录仓储：计算回复、按序追加一轮交互、读取与清空历史。

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use crate::error::Result;
use crate::knowledge::{ReplyKind, ResponseSelector};
use crate::models::chat::ChatLog;
use crate::storage::repository::ChatHistoryRepository;

/// 发送消息的结果
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    /// 助手回复
    pub response: String,
    /// 回复来源
    pub kind: ReplyKind,
    /// 本轮是否已持久化
    pub persisted: bool,
}

/// 对话服务 trait
#[async_trait]
pub trait ChatService: Send + Sync {
    /// 处理一条用户消息：选择回复并记录本轮交互
    async fn send(&self, owner: &str, message: &str) -> Result<ChatReply>;

    /// 追加一轮交互（用户消息在前，助手回复在后）
    async fn append(&self, owner: &str, user_text: &str, bot_text: &str) -> Result<()>;

    /// 获取用户日志，不存在时返回空日志
    async fn fetch(&self, owner: &str) -> Result<ChatLog>;

    /// 删除用户日志，不存在时同样成功；返回是否删除了内容
    async fn clear(&self, owner: &str) -> Result<bool>;
}

/// 对话服务实现
pub struct ChatServiceImpl {
    selector: ResponseSelector,
    repository: Arc<dyn ChatHistoryRepository>,
    reply_on_storage_failure: bool,
}

impl ChatServiceImpl {
    /// 创建新的服务实例
    pub fn new(selector: ResponseSelector, repository: Arc<dyn ChatHistoryRepository>) -> Self {
        Self {
            selector,
            repository,
            reply_on_storage_failure: false,
        }
    }

    /// 持久化失败时是否仍返回回复
    pub fn with_reply_on_storage_failure(mut self, enabled: bool) -> Self {
        self.reply_on_storage_failure = enabled;
        self
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn send(&self, owner: &str, message: &str) -> Result<ChatReply> {
        let (response, kind) = {
            let reply = self.selector.select_reply(message);
            (reply.text.to_string(), reply.kind)
        };
        debug!(owner, kind = kind.as_str(), "Selected reply");

        let persisted = match self.append(owner, message, &response).await {
            Ok(()) => true,
            Err(e) if self.reply_on_storage_failure => {
                error!(owner, error = %e, "Failed to persist chat exchange, replying anyway");
                false
            }
            Err(e) => return Err(e),
        };

        Ok(ChatReply {
            response,
            kind,
            persisted,
        })
    }

    async fn append(&self, owner: &str, user_text: &str, bot_text: &str) -> Result<()> {
        let mut log = self
            .repository
            .find_by_owner(owner)
            .await?
            .unwrap_or_else(|| ChatLog::empty(owner));

        log.push_exchange(user_text, bot_text);
        self.repository.save(&log).await
    }

    async fn fetch(&self, owner: &str) -> Result<ChatLog> {
        Ok(self
            .repository
            .find_by_owner(owner)
            .await?
            .unwrap_or_else(|| ChatLog::empty(owner)))
    }

    async fn clear(&self, owner: &str) -> Result<bool> {
        self.repository.delete_by_owner(owner).await
    }
}

/// 创建对话服务
pub fn create_chat_service(
    selector: ResponseSelector,
    repository: Arc<dyn ChatHistoryRepository>,
    reply_on_storage_failure: bool,
) -> Box<dyn ChatService> {
    Box::new(
        ChatServiceImpl::new(selector, repository)
            .with_reply_on_storage_failure(reply_on_storage_failure),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::knowledge::{FALLBACK_RESPONSE, GREETING_RESPONSE};
    use crate::models::chat::Sender;
    use crate::storage::memory::InMemoryChatHistoryRepository;
    use crate::storage::repository::MockChatHistoryRepository;

    fn service() -> ChatServiceImpl {
        ChatServiceImpl::new(
            ResponseSelector::default(),
            Arc::new(InMemoryChatHistoryRepository::new()),
        )
    }

    fn unreachable_store() -> MockChatHistoryRepository {
        let mut repo = MockChatHistoryRepository::new();
        repo.expect_find_by_owner()
            .returning(|_| Err(AppError::Database("connection refused".to_string())));
        repo.expect_save().never();
        repo
    }

    #[tokio::test]
    async fn test_fetch_missing_returns_empty_log() {
        let log = service().fetch("nobody").await.unwrap();
        assert_eq!(log.owner, "nobody");
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_is_idempotent() {
        let svc = service();
        svc.append("u1", "water?", "finger test").await.unwrap();

        let first = svc.fetch("u1").await.unwrap();
        let second = svc.fetch("u1").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_append_grows_by_two_and_preserves_order() {
        let svc = service();
        for i in 0..5 {
            svc.append("u1", &format!("q{i}"), &format!("a{i}"))
                .await
                .unwrap();
            let log = svc.fetch("u1").await.unwrap();
            assert_eq!(log.len(), 2 * (i + 1));
        }

        let log = svc.fetch("u1").await.unwrap();
        let texts: Vec<&str> = log.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["q0", "a0", "q1", "a1", "q2", "a2", "q3", "a3", "q4", "a4"]
        );
        assert!(
            log.messages
                .iter()
                .step_by(2)
                .all(|m| m.sender == Sender::User)
        );
    }

    #[tokio::test]
    async fn test_clear_then_fetch_is_empty() {
        let svc = service();
        svc.append("u1", "hi", "bot reply").await.unwrap();
        assert!(svc.clear("u1").await.unwrap());

        assert!(svc.fetch("u1").await.unwrap().is_empty());
        // 再次清空仍然成功
        assert!(!svc.clear("u1").await.unwrap());
    }

    #[tokio::test]
    async fn test_logs_are_per_owner() {
        let svc = service();
        svc.append("alice", "hi", "hello").await.unwrap();
        assert!(svc.fetch("bob").await.unwrap().is_empty());
        assert_eq!(svc.fetch("alice").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_send_persists_exchange() {
        let svc = service();
        let reply = svc.send("u1", "hello").await.unwrap();
        assert_eq!(reply.response, GREETING_RESPONSE);
        assert_eq!(reply.kind, ReplyKind::Greeting);
        assert!(reply.persisted);

        let log = svc.fetch("u1").await.unwrap();
        assert_eq!(log.messages[0].text, "hello");
        assert_eq!(log.messages[1].text, GREETING_RESPONSE);
    }

    #[tokio::test]
    async fn test_send_blank_message_gets_fallback_and_is_recorded() {
        let svc = service();
        for message in ["", "   "] {
            let reply = svc.send("u1", message).await.unwrap();
            assert_eq!(reply.response, FALLBACK_RESPONSE);
            assert_eq!(reply.kind, ReplyKind::Fallback);
        }

        let log = svc.fetch("u1").await.unwrap();
        assert_eq!(log.len(), 4);
        assert_eq!(log.messages[0].text, "");
        assert_eq!(log.messages[2].text, "   ");
    }

    #[tokio::test]
    async fn test_send_fails_when_store_unreachable() {
        let svc = ChatServiceImpl::new(ResponseSelector::default(), Arc::new(unreachable_store()));

        let err = svc.send("u1", "asdkjasd").await.unwrap_err();
        assert!(matches!(err, AppError::Database(msg) if msg == "connection refused"));
    }

    #[tokio::test]
    async fn test_send_replies_despite_store_failure_when_enabled() {
        let svc = ChatServiceImpl::new(ResponseSelector::default(), Arc::new(unreachable_store()))
            .with_reply_on_storage_failure(true);

        let reply = svc.send("u1", "asdkjasd").await.unwrap();
        assert_eq!(reply.response, FALLBACK_RESPONSE);
        assert!(!reply.persisted);
    }

    #[tokio::test]
    async fn test_save_failure_is_storage_error() {
        let mut repo = MockChatHistoryRepository::new();
        repo.expect_find_by_owner().returning(|_| Ok(None));
        repo.expect_save()
            .times(1)
            .returning(|_| Err(AppError::Database("write failed".to_string())));

        let svc = ChatServiceImpl::new(ResponseSelector::default(), Arc::new(repo));
        let err = svc.append("u1", "hi", "hello").await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
