use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 存储后端类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// SurrealDB（ws/http/mem 连接地址）
    #[default]
    Surrealdb,
    /// 进程内存储，重启即丢失
    Memory,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// 存储后端
    pub backend: StorageBackend,
    /// SurrealDB 连接地址
    pub url: String,
    /// 命名空间
    pub namespace: String,
    /// 数据库名称
    pub database: String,
    /// 用户名（为空时跳过登录，适用于 mem:// 内嵌引擎）
    pub username: String,
    /// 密码
    pub password: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 允许的跨域来源，包含 "*" 时放开全部
    pub cors_origins: Vec<String>,
}

/// 安全配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SecurityConfig {
    /// JWT 签名密钥
    pub jwt_secret: String,
    /// JWT 签发者
    pub jwt_issuer: String,
    /// JWT 受众
    pub jwt_audience: String,
    /// JWT 有效期（秒）
    pub jwt_expiry_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
    /// 日志文件目录
    pub log_dir: Option<PathBuf>,
}

/// 对话配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatConfig {
    /// 自定义知识表（JSON）路径，缺省使用内置表
    pub knowledge_path: Option<PathBuf>,
    /// 持久化失败时仍返回回复
    pub reply_on_storage_failure: bool,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 数据库配置
    pub database: DatabaseConfig,
    /// 服务器配置
    pub server: ServerConfig,
    /// 安全配置
    pub security: SecurityConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 对话配置
    pub chat: ChatConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            database: DatabaseConfig {
                backend: StorageBackend::Surrealdb,
                url: "ws://localhost:8000".into(),
                namespace: "sprout".into(),
                database: "chat".into(),
                username: "root".into(),
                password: "root".into(),
            },
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 5000,
                cors_origins: vec!["*".into()],
            },
            security: SecurityConfig {
                jwt_secret: "dev-secret-change-in-production-min-32-chars".into(),
                jwt_issuer: "sprout".into(),
                jwt_audience: "sprout-api".into(),
                jwt_expiry_seconds: 7 * 24 * 3600,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
                log_dir: None,
            },
            chat: ChatConfig {
                knowledge_path: None,
                reply_on_storage_failure: false,
            },
            app_name: "sprout".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config.logging.log_dir = Some(PathBuf::from("./logs"));
        config
    }

    /// 测试用配置：内存存储，无日志文件
    pub fn testing() -> Self {
        let mut config = Self::development();
        config.environment = "test".into();
        config.database.backend = StorageBackend::Memory;
        config
    }

    /// 按环境名选择预设，未知环境使用开发配置
    pub fn for_environment(environment: &str) -> Self {
        match environment {
            "production" => Self::production(),
            "test" => Self::testing(),
            _ => {
                let mut config = Self::development();
                config.environment = environment.into();
                config
            }
        }
    }
}
