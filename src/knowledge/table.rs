use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::knowledge::builtin::BUILTIN_ENTRIES;

/// 知识表构建错误
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("分类名不能为空")]
    EmptyCategory,

    #[error("分类重复定义: {0}")]
    DuplicateCategory(String),

    #[error("分类 {0} 没有关键词")]
    NoKeywords(String),

    #[error("分类 {category} 的关键词无效: {keyword:?}")]
    InvalidKeyword { category: String, keyword: String },

    #[error("分类 {0} 没有回复")]
    NoResponses(String),

    #[error("知识表读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("知识表解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 知识表条目
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeEntry {
    /// 分类名（表内唯一）
    pub category: String,
    /// 触发关键词（小写，非空）
    pub keywords: Vec<String>,
    /// 候选回复（至少一条）
    pub responses: Vec<String>,
}

impl KnowledgeEntry {
    pub fn new(category: &str, keywords: &[&str], responses: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            responses: responses.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// 任一关键词作为子串出现在（已小写化的）文本中
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }

    fn validate(&self) -> Result<(), KnowledgeError> {
        if self.category.trim().is_empty() {
            return Err(KnowledgeError::EmptyCategory);
        }
        if self.keywords.is_empty() {
            return Err(KnowledgeError::NoKeywords(self.category.clone()));
        }
        if let Some(bad) = self
            .keywords
            .iter()
            .find(|k| k.is_empty() || **k != k.to_lowercase())
        {
            return Err(KnowledgeError::InvalidKeyword {
                category: self.category.clone(),
                keyword: bad.clone(),
            });
        }
        if self.responses.is_empty() {
            return Err(KnowledgeError::NoResponses(self.category.clone()));
        }
        Ok(())
    }
}

/// 有序知识表
///
/// 构建后不可变。迭代顺序即定义顺序。
#[derive(Debug, Clone)]
pub struct KnowledgeTable {
    entries: Vec<KnowledgeEntry>,
}

static BUILTIN: Lazy<Arc<KnowledgeTable>> = Lazy::new(|| {
    let entries = BUILTIN_ENTRIES
        .iter()
        .map(|(category, keywords, responses)| KnowledgeEntry::new(category, keywords, responses))
        .collect();
    Arc::new(KnowledgeTable::from_entries(entries).expect("builtin knowledge table is valid"))
});

impl KnowledgeTable {
    /// 从条目构建，逐条校验并拒绝重复分类
    pub fn from_entries(entries: Vec<KnowledgeEntry>) -> Result<Self, KnowledgeError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.category.as_str()) {
                return Err(KnowledgeError::DuplicateCategory(entry.category.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// 从 JSON 文件加载（条目数组）
    pub fn from_json_file(path: &Path) -> Result<Self, KnowledgeError> {
        let content = std::fs::read_to_string(path)?;
        let entries: Vec<KnowledgeEntry> = serde_json::from_str(&content)?;
        Self::from_entries(entries)
    }

    /// 内置知识表（进程内共享）
    pub fn builtin() -> Arc<KnowledgeTable> {
        BUILTIN.clone()
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// 按分类名查找
    pub fn get(&self, category: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
