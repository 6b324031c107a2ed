//! 客户端模块
//!
//! 显式的客户端会话上下文与 HTTP 客户端。会话保存在调用方指定的文件中，
//! 不使用全局单例。

pub mod api;
pub mod session;

pub use api::SproutClient;
pub use session::{AuthSession, SessionStore, SessionUser};
