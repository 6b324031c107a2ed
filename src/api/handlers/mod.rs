//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod chat_handler;
pub mod history_handler;
pub mod status_handler;

pub use chat_handler::*;
pub use history_handler::*;
pub use status_handler::*;
