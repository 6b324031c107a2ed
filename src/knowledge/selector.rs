//! 回复选择器
//!
//! 纯函数：输入用户文本与只读知识表，输出一条回复。
//!
//! 优先级：问候 > 致谢 > 知识表命中 > 兜底。知识表阶段扫描全部分类，
//! 命中分类的所有回复汇入候选池，再均匀随机抽取一条。
//!
//! 问候与致谢按 ASCII 词边界匹配，紧邻非 ASCII 字母（如 "hi你好"）仍视为整词。

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use std::sync::Arc;

use crate::knowledge::builtin::{FALLBACK_RESPONSE, GREETING_RESPONSE, THANKS_RESPONSE};
use crate::knowledge::table::KnowledgeTable;

static GREETING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)(hi|hello|hey|howdy|greetings)(?-u:\b)").expect("greeting pattern is valid")
});

static THANKS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)(thank|thanks|thx|appreciate)(?-u:\b)").expect("thanks pattern is valid")
});

/// 回复来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Greeting,
    Thanks,
    /// 命中知识表，附带候选池大小
    Knowledge { candidates: usize },
    Fallback,
}

impl ReplyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyKind::Greeting => "greeting",
            ReplyKind::Thanks => "thanks",
            ReplyKind::Knowledge { .. } => "knowledge",
            ReplyKind::Fallback => "fallback",
        }
    }
}

/// 选择结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply<'a> {
    pub text: &'a str,
    pub kind: ReplyKind,
}

/// 回复选择器
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    table: Arc<KnowledgeTable>,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new(KnowledgeTable::builtin())
    }
}

impl ResponseSelector {
    pub fn new(table: Arc<KnowledgeTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &KnowledgeTable {
        &self.table
    }

    /// 为用户文本选择回复，永不失败
    pub fn select_response(&self, utterance: &str) -> String {
        self.select_reply(utterance).text.to_string()
    }

    /// 同 [`select_response`](Self::select_response)，同时返回回复来源
    pub fn select_reply(&self, utterance: &str) -> Reply<'_> {
        self.select_reply_with(utterance, &mut rand::rng())
    }

    /// 使用指定随机源选择回复
    pub fn select_reply_with<R: Rng>(&self, utterance: &str, rng: &mut R) -> Reply<'_> {
        let normalized = utterance.to_lowercase();

        if GREETING_PATTERN.is_match(&normalized) {
            return Reply {
                text: GREETING_RESPONSE,
                kind: ReplyKind::Greeting,
            };
        }

        if THANKS_PATTERN.is_match(&normalized) {
            return Reply {
                text: THANKS_RESPONSE,
                kind: ReplyKind::Thanks,
            };
        }

        let candidates = self.candidates(&normalized);
        if candidates.is_empty() {
            return Reply {
                text: FALLBACK_RESPONSE,
                kind: ReplyKind::Fallback,
            };
        }

        let index = rng.random_range(0..candidates.len());
        Reply {
            text: candidates[index],
            kind: ReplyKind::Knowledge {
                candidates: candidates.len(),
            },
        }
    }

    /// 汇总所有命中分类的回复，按表顺序，不去重
    fn candidates(&self, normalized: &str) -> Vec<&str> {
        self.table
            .entries()
            .iter()
            .filter(|entry| entry.matches(normalized))
            .flat_map(|entry| entry.responses.iter().map(String::as_str))
            .collect()
    }
}
