use axum::Router;
use feelwood_infra::{SanityClient, TemplateRenderer, TeraTemplateEngine};
use feelwood_service::{
    BlogService, CatalogService, DefaultBlogService, DefaultCatalogService, DefaultPromotionService,
    PresentationSettings, PromotionService,
};
use feelwood_web::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::info;

use crate::config::{Config, ServerConfig};
use crate::error::{FeelwoodError, Result};

/// 初始化应用状态
pub fn init_app_state(config: &Config) -> Result<AppState> {
    let client = Arc::new(SanityClient::new(config.sanity.client_config())?);
    info!(endpoint = %client.endpoint(), "Content client configured");

    let templates: Arc<dyn TemplateRenderer> = match &config.site.theme_dir {
        Some(theme_dir) => Arc::new(TeraTemplateEngine::from_dir(theme_dir, config.site.name.as_str())?),
        None => Arc::new(TeraTemplateEngine::embedded(config.site.name.as_str())?),
    };

    let blog_service: Arc<dyn BlogService> = Arc::new(
        DefaultBlogService::new(client.clone(), config.site.external_url()?)
    );
    let catalog_service: Arc<dyn CatalogService> = Arc::new(
        DefaultCatalogService::new(client.clone())
    );
    let promotion_service: Arc<dyn PromotionService> = Arc::new(
        DefaultPromotionService::new(client)
    );

    Ok(AppState {
        blog_service,
        catalog_service,
        promotion_service,
        templates,
        presentation: PresentationSettings::from(&config.presentation),
    })
}

/// 创建应用路由
pub fn create_router(state: AppState) -> Router {
    feelwood_web::create_router(state).layer(
        ServiceBuilder::new()
            // 外层先执行：先记录请求，再压缩响应
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new()),
    )
}

/// 启动HTTP服务器，收到Ctrl-C后停止接收新连接
pub async fn serve(config: &ServerConfig, app: Router) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| FeelwoodError::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.sanity.project_id = "abc123".to_string();
        config.sanity.dataset = "production".to_string();
        config
    }

    #[tokio::test]
    async fn test_router_serves_health() {
        let state = init_app_state(&test_config()).unwrap();
        let response = create_router(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_theme_dir_is_used() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("error.html"), "{{ status }}").unwrap();

        let mut config = test_config();
        config.site.theme_dir = Some(dir.path().to_path_buf());
        assert!(init_app_state(&config).is_ok());

        config.site.external_url = Some("not a url".to_string());
        assert!(matches!(init_app_state(&config), Err(FeelwoodError::Validation(_))));
    }

    #[test]
    fn test_invalid_project_is_a_client_error() {
        let mut config = test_config();
        config.sanity.project_id = "bad project".to_string();
        assert!(matches!(init_app_state(&config), Err(FeelwoodError::Client(_))));
    }
}
