use async_trait::async_trait;
use feelwood_api::{ClientError, ContentClient, QueryParams};
use feelwood_infra::theme::TeraTemplateEngine;
use feelwood_service::{
    DefaultBlogService, DefaultCatalogService, DefaultPromotionService, PresentationSettings,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::AppState;

/// 按查询字符串返回固定结果的内容客户端，未登记的查询返回错误
#[derive(Default)]
pub struct StubClient {
    responses: HashMap<&'static str, Value>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, query: &'static str, result: Value) -> Self {
        self.responses.insert(query, result);
        self
    }
}

#[async_trait]
impl ContentClient for StubClient {
    async fn fetch(&self, query: &str, _params: &QueryParams) -> Result<Value, ClientError> {
        self.responses.get(query).cloned().ok_or_else(|| ClientError::Status {
            status: 503,
            description: "unavailable".to_string(),
        })
    }
}

/// 使用内置模板和真实服务实现的应用状态
pub fn state_with(client: StubClient) -> AppState {
    let client = Arc::new(client);
    AppState {
        blog_service: Arc::new(DefaultBlogService::new(client.clone(), None)),
        catalog_service: Arc::new(DefaultCatalogService::new(client.clone())),
        promotion_service: Arc::new(DefaultPromotionService::new(client)),
        templates: Arc::new(TeraTemplateEngine::embedded("Feel Wood").unwrap()),
        presentation: PresentationSettings::default(),
    }
}
