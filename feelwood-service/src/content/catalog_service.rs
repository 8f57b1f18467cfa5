use async_trait::async_trait;
use feelwood_api::{ContentClient, ContentClientExt, QueryParams};
use feelwood_domain::content::{Category, CategoryPage, ProductListing};
use std::sync::Arc;

use super::queries;
use super::view::{CategoryCard, CategoryView, NavMenu};
use crate::error::ContentError;
use crate::localize::{CATEGORY_CARD, CATEGORY_PAGE};

/// 产品目录服务trait
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// 导航栏中的分类菜单
    async fn nav_menu(&self) -> Result<NavMenu, ContentError>;

    /// 首页分类卡片
    async fn category_cards(&self) -> Result<Vec<CategoryCard>, ContentError>;

    /// 分类详情及其产品
    async fn category_page(&self, slug: &str) -> Result<CategoryView, ContentError>;

    /// 全部产品
    async fn products(&self) -> Result<Vec<ProductListing>, ContentError>;
}

pub struct DefaultCatalogService<C: ContentClient + ?Sized> {
    client: Arc<C>,
}

impl<C: ContentClient + ?Sized> DefaultCatalogService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    async fn categories(&self) -> Result<Vec<Category>, ContentError> {
        self.client
            .fetch_as(queries::CATEGORIES, &QueryParams::new())
            .await
            .map_err(ContentError::fetch("categories"))
    }
}

#[async_trait]
impl<C: ContentClient + ?Sized> CatalogService for DefaultCatalogService<C> {
    async fn nav_menu(&self) -> Result<NavMenu, ContentError> {
        Ok(NavMenu::from_categories(&self.categories().await?))
    }

    async fn category_cards(&self) -> Result<Vec<CategoryCard>, ContentError> {
        Ok(self
            .categories()
            .await?
            .iter()
            .filter_map(|category| CategoryCard::from_category(category, CATEGORY_CARD))
            .collect())
    }

    async fn category_page(&self, slug: &str) -> Result<CategoryView, ContentError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(ContentError::NotFound("Category".to_string()));
        }

        let page: Option<CategoryPage> = self
            .client
            .fetch_as(queries::CATEGORY_PAGE, &QueryParams::new().with("slug", slug))
            .await
            .map_err(ContentError::fetch("category"))?;

        page.map(|page| CategoryView::from_page(&page, CATEGORY_PAGE))
            .ok_or_else(|| ContentError::NotFound(format!("Category {}", slug)))
    }

    async fn products(&self) -> Result<Vec<ProductListing>, ContentError> {
        self.client
            .fetch_as(queries::PRODUCTS, &QueryParams::new())
            .await
            .map_err(ContentError::fetch("products"))
    }
}
