//! 知识库模块
//!
//! 静态关键词知识表与回复选择器。知识表在启动时构建一次，之后只读共享。

pub mod builtin;
pub mod selector;
pub mod table;

pub use builtin::{FALLBACK_RESPONSE, GREETING_RESPONSE, THANKS_RESPONSE};
pub use selector::{Reply, ReplyKind, ResponseSelector};
pub use table::{KnowledgeEntry, KnowledgeError, KnowledgeTable};
