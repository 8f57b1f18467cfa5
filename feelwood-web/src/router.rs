use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};

use crate::handlers;
use crate::AppState;

/// 创建店铺路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home_page))
        .route("/blog", get(handlers::blog_page))
        .route("/blog/:slug", get(handlers::post_page))
        .route("/products", get(handlers::products_page))
        .route("/products/:slug", get(handlers::category_page))
        .route("/contact", get(handlers::contact_page))
        .route("/live/home", get(handlers::live_home))
        .route("/health", get(health_check))
        .fallback(handlers::not_found_page)
        .with_state(state)
}

/// 健康检查端点
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
