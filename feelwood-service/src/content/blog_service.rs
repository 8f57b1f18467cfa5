use async_trait::async_trait;
use feelwood_api::{ContentClient, ContentClientExt, QueryParams};
use feelwood_domain::content::Post;
use std::sync::Arc;
use url::Url;

use super::queries;
use super::view::PostView;
use crate::error::ContentError;
use crate::localize::{BLOG_POST, HOME_POST};

/// 博客服务trait
#[async_trait]
pub trait BlogService: Send + Sync {
    /// 博客页的全部文章（只包含有slug的文章）
    async fn list_posts(&self) -> Result<Vec<PostView>, ContentError>;

    /// 首页展示的最新文章
    async fn latest_posts(&self, limit: usize) -> Result<Vec<PostView>, ContentError>;

    /// 按slug查找文章详情
    async fn find_post(&self, slug: &str) -> Result<PostView, ContentError>;
}

pub struct DefaultBlogService<C: ContentClient + ?Sized> {
    client: Arc<C>,
    /// 站点对外地址，用于生成绝对分享链接
    site_url: Option<Url>,
}

impl<C: ContentClient + ?Sized> DefaultBlogService<C> {
    pub fn new(client: Arc<C>, site_url: Option<Url>) -> Self {
        Self { client, site_url }
    }
}

#[async_trait]
impl<C: ContentClient + ?Sized> BlogService for DefaultBlogService<C> {
    async fn list_posts(&self) -> Result<Vec<PostView>, ContentError> {
        let posts: Vec<Post> = self
            .client
            .fetch_as(queries::POSTS, &QueryParams::new())
            .await
            .map_err(ContentError::fetch("posts"))?;

        let views: Vec<PostView> = posts
            .iter()
            .filter_map(|post| PostView::from_post(post, BLOG_POST, self.site_url.as_ref()))
            .collect();
        tracing::debug!(fetched = posts.len(), listed = views.len(), "Blog posts loaded");
        Ok(views)
    }

    async fn latest_posts(&self, limit: usize) -> Result<Vec<PostView>, ContentError> {
        let params = QueryParams::new().with("limit", limit as u64);
        let posts: Vec<Post> = self
            .client
            .fetch_as(queries::LATEST_POSTS, &params)
            .await
            .map_err(ContentError::fetch("posts"))?;

        Ok(posts
            .iter()
            .filter_map(|post| PostView::from_post(post, HOME_POST, self.site_url.as_ref()))
            .collect())
    }

    async fn find_post(&self, slug: &str) -> Result<PostView, ContentError> {
        let params = QueryParams::new().with("slug", slug);
        let post: Option<Post> = self
            .client
            .fetch_as(queries::POST_BY_SLUG, &params)
            .await
            .map_err(ContentError::fetch("posts"))?;

        post.as_ref()
            .and_then(|post| PostView::from_post(post, BLOG_POST, self.site_url.as_ref()))
            .ok_or_else(|| ContentError::NotFound(format!("Post {}", slug)))
    }
}
