//! 存储层模块
//!
//! 提供聊天记录持久化服务，支持 SurrealDB 与进程内存储。

pub mod factory;
pub mod memory;
pub mod repository;
pub mod surrealdb;

pub use factory::StorageFactory;
pub use memory::InMemoryChatHistoryRepository;
pub use repository::{ChatHistoryRepository, SurrealChatHistoryRepository};
pub use surrealdb::SurrealPool;
