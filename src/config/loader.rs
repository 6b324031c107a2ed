use crate::config::config::{AppConfig, StorageBackend};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// 默认配置文件
pub const DEFAULT_CONFIG_FILE: &str = "sprout.toml";

/// 环境变量前缀，嵌套字段以 `__` 分隔，如 `SPROUT_SERVER__PORT`
pub const ENV_PREFIX: &str = "SPROUT_";

/// JWT 密钥最小长度
const MIN_JWT_SECRET_LEN: usize = 32;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 优先级（后者覆盖前者）：
    /// 1. `environment` 对应的预设默认值
    /// 2. ./sprout.toml
    /// 3. 环境变量
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, figment::Error> {
        Self::figment(path.as_ref()).extract()
    }

    /// 先读出 `environment`，再以对应预设为默认值重新叠加文件与环境变量
    fn figment(path: &Path) -> Figment {
        let environment = Self::layered(path, AppConfig::development())
            .extract_inner::<String>("environment")
            .unwrap_or_else(|_| "development".to_string());
        Self::layered(path, AppConfig::for_environment(&environment))
    }

    fn layered(path: &Path, defaults: AppConfig) -> Figment {
        Figment::from(Serialized::defaults(defaults))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.database.backend == StorageBackend::Surrealdb && config.database.url.is_empty() {
            return Err(ConfigValidationError::MissingDatabaseUrl);
        }

        if config.security.jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigValidationError::WeakJwtSecret(MIN_JWT_SECRET_LEN));
        }

        if let Some(path) = &config.chat.knowledge_path {
            if !path.exists() {
                return Err(ConfigValidationError::InvalidPath(path.display().to_string()));
            }
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("数据库连接 URL 未配置")]
    MissingDatabaseUrl,

    #[error("JWT 密钥过短，至少需要 {0} 个字符")]
    WeakJwtSecret(usize),

    #[error("配置路径无效: {0}")]
    InvalidPath(String),
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}
