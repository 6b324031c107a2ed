//! 可观测性模块
//!
//! 提供 Prometheus 文本格式指标、结构化日志和健康检查。

use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::config::LoggingConfig;
use crate::knowledge::ReplyKind;
use crate::storage::repository::ChatHistoryRepository;

// ===== Simple Metrics =====

/// 简单应用指标
#[derive(Default)]
pub struct AppMetrics {
    pub http_requests_total: AtomicU64,
    pub http_request_duration_sum: AtomicU64,
    pub chat_greeting_total: AtomicU64,
    pub chat_thanks_total: AtomicU64,
    pub chat_knowledge_total: AtomicU64,
    pub chat_fallback_total: AtomicU64,
    pub history_fetch_total: AtomicU64,
    pub history_clear_total: AtomicU64,
    pub storage_errors_total: AtomicU64,
}

impl AppMetrics {
    /// 记录 HTTP 请求
    pub fn record_http_request(&self, duration_ms: u64) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_request_duration_sum
            .fetch_add(duration_ms, Ordering::Relaxed);
    }

    /// 记录一条已回复的聊天消息
    pub fn record_reply(&self, kind: ReplyKind) {
        let counter = match kind {
            ReplyKind::Greeting => &self.chat_greeting_total,
            ReplyKind::Thanks => &self.chat_thanks_total,
            ReplyKind::Knowledge { .. } => &self.chat_knowledge_total,
            ReplyKind::Fallback => &self.chat_fallback_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_history_fetch(&self) {
        self.history_fetch_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_history_clear(&self) {
        self.history_clear_total.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录存储错误
    pub fn record_storage_error(&self) {
        self.storage_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        let load = |c: &AtomicU64| c.load(Ordering::Relaxed);
        format!(
            r#"# HELP http_requests_total Total HTTP requests
# TYPE http_requests_total counter
http_requests_total {}
# HELP http_request_duration_seconds HTTP request duration in seconds
# TYPE http_request_duration_seconds summary
http_request_duration_seconds_sum {}
http_request_duration_seconds_count {}
# HELP chat_messages_total Chat messages answered, by reply kind
# TYPE chat_messages_total counter
chat_messages_total{{kind="greeting"}} {}
chat_messages_total{{kind="thanks"}} {}
chat_messages_total{{kind="knowledge"}} {}
chat_messages_total{{kind="fallback"}} {}
# HELP history_requests_total Chat history operations
# TYPE history_requests_total counter
history_requests_total{{op="fetch"}} {}
history_requests_total{{op="clear"}} {}
# HELP storage_errors_total Storage failures surfaced to callers
# TYPE storage_errors_total counter
storage_errors_total {}
"#,
            load(&self.http_requests_total),
            load(&self.http_request_duration_sum) as f64 / 1000.0,
            load(&self.http_requests_total),
            load(&self.chat_greeting_total),
            load(&self.chat_thanks_total),
            load(&self.chat_knowledge_total),
            load(&self.chat_fallback_total),
            load(&self.history_fetch_total),
            load(&self.history_clear_total),
            load(&self.storage_errors_total),
        )
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
    pub checks: Vec<HealthCheck>,
}

/// 单个健康检查项
#[derive(Debug, Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: String,
    pub message: Option<String>,
    pub latency_ms: Option<u64>,
}

/// 可观测性状态
pub struct ObservabilityState {
    pub metrics: AppMetrics,
    pub storage: Arc<dyn ChatHistoryRepository>,
    pub start_time: DateTime<Utc>,
    pub version: String,
}

impl ObservabilityState {
    pub fn new(version: String, storage: Arc<dyn ChatHistoryRepository>) -> Self {
        Self {
            metrics: AppMetrics::default(),
            storage,
            start_time: Utc::now(),
            version,
        }
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_seconds() as f64
    }

    /// 检查存储连通性
    pub async fn check_storage(&self) -> HealthCheck {
        let start = Instant::now();
        let result = self.storage.ping().await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(()) => HealthCheck {
                name: "storage".to_string(),
                status: "healthy".to_string(),
                message: None,
                latency_ms: Some(latency_ms),
            },
            Err(e) => HealthCheck {
                name: "storage".to_string(),
                status: "unhealthy".to_string(),
                message: Some(e.to_string()),
                latency_ms: Some(latency_ms),
            },
        }
    }
}

// ===== Health Check Handlers =====

/// 获取完整健康状态
pub async fn health_check(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    let checks = vec![state.check_storage().await];
    let all_healthy = checks.iter().all(|c| c.status == "healthy");

    let health_status = HealthStatus {
        status: if all_healthy { "healthy" } else { "unhealthy" }.to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: state.uptime_seconds(),
        checks,
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(health_status))
}

/// 简单存活检查
pub async fn liveness() -> impl IntoResponse {
    "OK"
}

/// 就绪检查（检查存储）
pub async fn readiness(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    if state.storage.ping().await.is_ok() {
        (StatusCode::OK, "Ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Not Ready")
    }
}

/// Prometheus 指标端点
pub async fn metrics(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    (StatusCode::OK, state.metrics.gather())
}

/// 版本信息端点
pub async fn version(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": state.version,
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
        .with_state(state)
}

// ===== Structured Logging =====

/// 初始化日志
///
/// `RUST_LOG` 优先于配置中的级别。配置了 `log_dir` 时额外按天滚动写入文件，
/// 返回的 guard 需持有到进程退出。
pub fn init_tracing(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let console = if config.structured {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).with_line_number(true).boxed()
    };

    let (file, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "sprout.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
    {
        eprintln!("tracing subscriber already initialized: {e}");
    }

    guard
}

// ===== Request Metrics Middleware =====

/// 记录请求指标的中间件
pub async fn metrics_middleware(
    State(state): State<Arc<ObservabilityState>>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let response = next.run(req).await;
    state
        .metrics
        .record_http_request(start.elapsed().as_millis() as u64);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::InMemoryChatHistoryRepository;
    use crate::storage::repository::MockChatHistoryRepository;
    use crate::error::AppError;

    #[test]
    fn test_metrics_gather() {
        let metrics = AppMetrics::default();
        metrics.record_http_request(100);
        metrics.record_reply(ReplyKind::Greeting);
        metrics.record_reply(ReplyKind::Knowledge { candidates: 5 });
        metrics.record_reply(ReplyKind::Knowledge { candidates: 1 });
        metrics.record_storage_error();

        let output = metrics.gather();
        assert!(output.contains("http_requests_total 1"));
        assert!(output.contains(r#"chat_messages_total{kind="greeting"} 1"#));
        assert!(output.contains(r#"chat_messages_total{kind="knowledge"} 2"#));
        assert!(output.contains(r#"chat_messages_total{kind="fallback"} 0"#));
        assert!(output.contains("storage_errors_total 1"));
    }

    #[tokio::test]
    async fn test_storage_check_healthy() {
        let state = ObservabilityState::new(
            "0.1.0".to_string(),
            Arc::new(InMemoryChatHistoryRepository::new()),
        );
        let check = state.check_storage().await;
        assert_eq!(check.status, "healthy");
        assert!(check.message.is_none());
    }

    #[tokio::test]
    async fn test_storage_check_unhealthy() {
        let mut repo = MockChatHistoryRepository::new();
        repo.expect_ping()
            .returning(|| Err(AppError::Database("unreachable".to_string())));

        let state = ObservabilityState::new("0.1.0".to_string(), Arc::new(repo));
        let check = state.check_storage().await;
        assert_eq!(check.status, "unhealthy");
        assert!(check.message.unwrap().contains("unreachable"));
    }
}
