mod config;
mod error;
mod server;

use anyhow::Context;
use config::{Config, LoggingConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置
    let config = Config::load().context("Failed to load configuration")?;

    // 初始化日志
    init_logging(&config.logging)?;
    info!("Starting Feel Wood storefront...");
    info!(
        project_id = %config.sanity.project_id,
        dataset = %config.sanity.dataset,
        "Configuration loaded successfully"
    );

    // 初始化应用状态
    let app_state = server::init_app_state(&config).context("Failed to initialize application")?;
    info!("Application state initialized");

    // 创建路由
    let app = server::create_router(app_state);

    // 启动HTTP服务器
    server::serve(&config.server, app).await?;
    Ok(())
}

/// `RUST_LOG` 优先于配置中的日志级别
fn init_logging(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level)
            .with_context(|| format!("Invalid logging.level: {}", logging.level))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))
}
