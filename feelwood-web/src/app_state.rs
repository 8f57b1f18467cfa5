use feelwood_infra::theme::TemplateRenderer;
use feelwood_service::{BlogService, CatalogService, PresentationSettings, PromotionService};
use std::sync::Arc;

/// 应用状态
/// 包含所有需要的服务实例
#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<dyn BlogService>,
    pub catalog_service: Arc<dyn CatalogService>,
    pub promotion_service: Arc<dyn PromotionService>,
    pub templates: Arc<dyn TemplateRenderer>,
    pub presentation: PresentationSettings,
}
