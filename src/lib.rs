//! Sprout - 植物养护助手后端
//!
//! 基于关键词知识表回答植物养护问题，并按用户持久化聊天记录。

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod models;
pub mod observability;
pub mod security;
pub mod services;
pub mod storage;
