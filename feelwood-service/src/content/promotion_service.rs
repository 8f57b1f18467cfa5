use async_trait::async_trait;
use chrono::NaiveDate;
use feelwood_api::{ContentClient, ContentClientExt, QueryParams};
use feelwood_domain::content::Promotion;
use std::sync::Arc;

use super::queries;
use super::view::PromotionView;
use crate::error::ContentError;

/// 促销服务trait
#[async_trait]
pub trait PromotionService: Send + Sync {
    /// 指定日期正在进行的促销
    async fn running_promotions(&self, today: NaiveDate) -> Result<Vec<PromotionView>, ContentError>;
}

pub struct DefaultPromotionService<C: ContentClient + ?Sized> {
    client: Arc<C>,
}

impl<C: ContentClient + ?Sized> DefaultPromotionService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ContentClient + ?Sized> PromotionService for DefaultPromotionService<C> {
    async fn running_promotions(&self, today: NaiveDate) -> Result<Vec<PromotionView>, ContentError> {
        let promotions: Vec<Promotion> = self
            .client
            .fetch_as(queries::ACTIVE_PROMOTIONS, &QueryParams::new())
            .await
            .map_err(ContentError::fetch("promotions"))?;

        Ok(promotions
            .iter()
            .filter(|promotion| promotion.is_running(today))
            .map(PromotionView::from_promotion)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testing::FakeClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_only_running_promotions() {
        let client = FakeClient::new().respond(
            queries::ACTIVE_PROMOTIONS,
            json!([
                { "_id": "now", "title": "ลดราคา", "active": true, "start": "2025-11-01", "end": "2025-11-30" },
                { "_id": "later", "title": "ปีใหม่", "active": true, "start": "2025-12-25" },
                { "_id": "off", "title": "ปิด", "active": false }
            ]),
        );
        let service = DefaultPromotionService::new(Arc::new(client));
        let today = NaiveDate::from_ymd_opt(2025, 11, 15).unwrap();

        let running = service.running_promotions(today).await.unwrap();
        let ids: Vec<&str> = running.iter().map(|promotion| promotion.id.as_str()).collect();
        assert_eq!(ids, vec!["now"]);
    }
}
