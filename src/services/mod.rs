//! 服务模块

pub mod chat;

pub use chat::{ChatReply, ChatService, ChatServiceImpl, create_chat_service};
