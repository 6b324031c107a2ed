//! 核心数据模型模块
//!
//! 定义 Sprout 的核心数据结构：ChatMessage, ChatLog。

pub mod chat;

pub use chat::{ChatLog, ChatMessage, Sender};
