use crate::config::config::DatabaseConfig;
use surrealdb::{
    Surreal,
    engine::any::{Any, connect},
    opt::auth::Root,
};
use tracing::debug;

/// SurrealDB 连接
///
/// `Surreal<Any>` 本身可廉价克隆并在任务间共享。
#[derive(Clone)]
pub struct SurrealPool {
    /// 数据库连接
    db: Surreal<Any>,
}

impl SurrealPool {
    /// 建立连接
    pub async fn new(config: &DatabaseConfig) -> Result<Self, surrealdb::Error> {
        let db: Surreal<Any> = connect(config.url.as_str()).await?;

        // 认证（内嵌引擎无需登录）
        if !config.username.is_empty() {
            db.signin(Root {
                username: &config.username,
                password: &config.password,
            })
            .await?;
        }

        // 选择命名空间和数据库
        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        debug!(url = %config.url, namespace = %config.namespace, "SurrealDB connected");

        Ok(Self { db })
    }

    /// 获取内部数据库实例
    pub fn inner(&self) -> Surreal<Any> {
        self.db.clone()
    }
}
