//! 错误处理模块
//!
//! 定义应用程序的错误类型和错误处理逻辑。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据库错误（存储不可达或写入失败）
    #[error("数据库错误: {0}")]
    Database(String),

    /// 认证错误
    #[error("认证失败: {0}")]
    Authentication(String),

    /// 参数验证错误
    #[error("参数验证失败: {0}")]
    Validation(String),
}

impl AppError {
    /// 底层错误信息（不含分类前缀），用于响应体的 `error` 字段
    pub fn detail(&self) -> &str {
        match self {
            AppError::Database(msg) | AppError::Authentication(msg) | AppError::Validation(msg) => {
                msg
            }
        }
    }

    /// HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        let (status, _): (u16, String) = self.into();
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// 附加描述性消息，生成处理器错误
    pub fn context(self, message: impl Into<String>) -> HandlerError {
        HandlerError {
            message: message.into(),
            source: self,
        }
    }
}

impl From<surrealdb::Error> for AppError {
    fn from(e: surrealdb::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

/// Axum response implementation for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (_, code): (u16, String) = (&self).into();
        let message = match code.as_str() {
            "UNAUTHORIZED" => "Authentication failed",
            "BAD_REQUEST" => "Invalid request",
            _ => "Internal server error",
        };
        self.context(message).into_response()
    }
}

/// 带有端点描述信息的错误
///
/// 渲染为 `{ "message": ..., "error": ... }`，`message` 为端点的通用描述，
/// `error` 为底层错误原文。
#[derive(Debug)]
pub struct HandlerError {
    /// 通用描述
    pub message: String,
    /// 底层错误
    pub source: AppError,
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.message, self.source)
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.source.status_code();
        let body = Json(ErrorResponse::new(&self.message, self.source.detail()));
        (status, body).into_response()
    }
}

/// 为 `Result` 附加端点描述
pub trait ResultExt<T> {
    fn context(self, message: &str) -> std::result::Result<T, HandlerError>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, message: &str) -> std::result::Result<T, HandlerError> {
        self.map_err(|e| e.context(message))
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 通用错误消息
    pub message: String,
    /// 底层错误信息
    pub error: String,
}

impl ErrorResponse {
    /// 创建新错误响应
    pub fn new(message: &str, error: &str) -> Self {
        Self {
            message: message.to_string(),
            error: error.to_string(),
        }
    }
}

/// HTTP 状态码映射
impl From<&AppError> for (u16, String) {
    fn from(err: &AppError) -> (u16, String) {
        match err {
            AppError::Authentication(_) => (401, "UNAUTHORIZED".to_string()),
            AppError::Validation(_) => (400, "BAD_REQUEST".to_string()),
            AppError::Database(_) => (500, "INTERNAL_ERROR".to_string()),
        }
    }
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;
