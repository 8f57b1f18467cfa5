use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use feelwood_infra::theme::{render_markup, TemplateContext, TemplateError};
use feelwood_service::content::HeroSlide;
use feelwood_service::format::bangkok_today;
use feelwood_service::presentation::{page_size_for_width, IndexUpdate, Paginator, Rotation};
use feelwood_service::{ContentError, PostView, HERO_SLIDES};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::AppState;

// 店铺页面路由
// 页面数据在请求内加载，客户端断开时请求future被drop，加载随之取消

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// 打开文章详情弹窗
    pub post: Option<String>,
}

/// 博客列表查询参数
///
/// 数值参数按字符串接收，无法解析时使用默认值而不是返回400。
#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    pub page: Option<String>,
    /// 视口宽度（像素），决定每页数量
    pub width: Option<String>,
    pub post: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactQuery {
    pub line: Option<String>,
}

#[derive(Serialize)]
struct HeroView<'a> {
    slides: &'a [HeroSlide],
    active: usize,
    interval_ms: u64,
}

#[derive(Serialize)]
struct RotationView<'a> {
    posts: Vec<&'a PostView>,
    fading: bool,
    offset: usize,
    interval_ms: u64,
}

#[derive(Debug, Serialize)]
struct PaginationView {
    page: usize,
    total_pages: usize,
    has_previous: bool,
    has_next: bool,
    previous: usize,
    next: usize,
}

impl From<&Paginator> for PaginationView {
    fn from(paginator: &Paginator) -> Self {
        Self {
            page: paginator.page(),
            total_pages: paginator.total_pages(),
            has_previous: paginator.has_previous(),
            has_next: paginator.has_next(),
            previous: paginator.page().saturating_sub(1).max(1),
            next: (paginator.page() + 1).min(paginator.total_pages()),
        }
    }
}

/// 首页：大图轮播、分类、促销和最新文章
pub async fn home_page(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<Response, StatusCode> {
    let settings = &state.presentation;
    let (context, categories, promotions, posts) = tokio::join!(
        page_context(&state),
        state.catalog_service.category_cards(),
        state.promotion_service.running_promotions(bangkok_today()),
        state.blog_service.latest_posts(settings.home_post_limit),
    );
    let mut context = context?;

    let categories = categories.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load category cards");
        Vec::new()
    });
    let promotions = promotions.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load promotions");
        Vec::new()
    });
    let posts = match posts {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load latest posts");
            context.insert("posts_error", e.user_message()).map_err(context_error)?;
            Vec::new()
        }
    };

    let open_slug = non_blank(query.post.as_deref());
    let mut rotation = Rotation::new(posts.len(), settings.rotation_window);
    // 打开的文章在轮换列表中时，从它开始展示
    if let Some(index) = open_slug.and_then(|slug| posts.iter().position(|post| post.slug == slug)) {
        if let Some(generation) = rotation.begin_transition(IndexUpdate::Jump(index)) {
            rotation.complete_transition(generation);
        }
    }

    let hero = HeroView {
        slides: &HERO_SLIDES,
        active: 0,
        interval_ms: millis(settings.hero_interval),
    };
    let rotation_view = RotationView {
        posts: rotation
            .visible_indices()
            .into_iter()
            .filter_map(|index| posts.get(index))
            .collect(),
        fading: rotation.is_fading(),
        offset: rotation.offset(),
        interval_ms: millis(settings.rotation_interval),
    };

    context.insert("hero", &hero).map_err(context_error)?;
    context.insert("categories", &categories).map_err(context_error)?;
    context.insert("promotions", &promotions).map_err(context_error)?;
    context.insert("rotation", &rotation_view).map_err(context_error)?;

    if let Some(slug) = open_slug {
        if let Some(post) = resolve_modal_post(&state, &posts, slug).await {
            insert_modal(&mut context, &post, "/")?;
        }
    }

    tracing::debug!(
        categories = categories.len(),
        promotions = promotions.len(),
        posts = posts.len(),
        "Home page loaded"
    );
    render(&state, "home.html", &context, StatusCode::OK)
}

/// 博客列表，按视口宽度分页
pub async fn blog_page(
    State(state): State<AppState>,
    Query(query): Query<BlogQuery>,
) -> Result<Response, StatusCode> {
    let settings = &state.presentation;
    let width: Option<u32> = lenient(query.width.as_deref());
    let requested_page: usize = lenient(query.page.as_deref()).unwrap_or(1);

    let (context, posts) = tokio::join!(page_context(&state), state.blog_service.list_posts());
    let mut context = context?;

    let posts = match posts {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load blog posts");
            context.insert("error_message", e.user_message()).map_err(context_error)?;
            Vec::new()
        }
    };

    let mut paginator = Paginator::new(posts.len(), page_size_for_width(width, settings));
    paginator.go_to(requested_page);
    // 翻页链接带上宽度以保持每页数量；未知宽度按宽屏，断点本身属于宽屏
    let width = width.unwrap_or(settings.narrow_breakpoint);

    context.insert("posts", paginator.slice(&posts)).map_err(context_error)?;
    context.insert("pagination", &PaginationView::from(&paginator)).map_err(context_error)?;
    context.insert("width", &width).map_err(context_error)?;

    if let Some(slug) = non_blank(query.post.as_deref()) {
        if let Some(post) = resolve_modal_post(&state, &posts, slug).await {
            let close_href = format!("/blog?page={}&width={}", paginator.page(), width);
            insert_modal(&mut context, &post, &close_href)?;
        }
    }

    render(&state, "blog.html", &context, StatusCode::OK)
}

/// 文章详情页
pub async fn post_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, StatusCode> {
    let (context, post) = tokio::join!(page_context(&state), state.blog_service.find_post(&slug));
    let post = match post {
        Ok(post) => post,
        Err(e) => return content_error_page(&state, &e).await,
    };

    let mut context = context?;
    context.insert("meta_description", &post.excerpt).map_err(context_error)?;
    context.insert("post", &post).map_err(context_error)?;
    context.insert("post_body", &render_markup(&post.content)).map_err(context_error)?;
    render(&state, "post.html", &context, StatusCode::OK)
}

/// 产品列表
pub async fn products_page(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let (context, products) = tokio::join!(page_context(&state), state.catalog_service.products());
    let mut context = context?;

    match products {
        Ok(products) => context.insert("products", &products).map_err(context_error)?,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load products");
            context.insert("error_message", e.user_message()).map_err(context_error)?;
            context.insert("products", &Vec::<()>::new()).map_err(context_error)?;
        }
    }

    render(&state, "products.html", &context, StatusCode::OK)
}

/// 分类页及其产品
pub async fn category_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, StatusCode> {
    let (context, category) = tokio::join!(page_context(&state), state.catalog_service.category_page(&slug));
    let category = match category {
        Ok(category) => category,
        Err(e) => return content_error_page(&state, &e).await,
    };

    let mut context = context?;
    context.insert("meta_description", &category.description).map_err(context_error)?;
    context.insert("category", &category).map_err(context_error)?;
    render(&state, "category.html", &context, StatusCode::OK)
}

/// 联系页，`?line=open` 时显示LINE二维码
pub async fn contact_page(
    State(state): State<AppState>,
    Query(query): Query<ContactQuery>,
) -> Result<Response, StatusCode> {
    let mut context = page_context(&state).await?;
    let line_modal_open = query.line.as_deref() == Some("open");
    context.insert("line_modal_open", &line_modal_open).map_err(context_error)?;
    render(&state, "contact.html", &context, StatusCode::OK)
}

/// 未匹配任何路由
pub async fn not_found_page(State(state): State<AppState>, uri: Uri) -> Result<Response, StatusCode> {
    content_error_page(&state, &ContentError::NotFound(uri.path().to_string())).await
}

/// 每个页面都带分类导航，导航加载失败时页面照常渲染
async fn page_context(state: &AppState) -> Result<TemplateContext, StatusCode> {
    let mut context = TemplateContext::new();
    match state.catalog_service.nav_menu().await {
        Ok(nav) => context.insert("nav", &nav).map_err(context_error)?,
        Err(e) => tracing::error!(error = %e, "Failed to load navigation menu"),
    }
    Ok(context)
}

async fn content_error_page(state: &AppState, error: &ContentError) -> Result<Response, StatusCode> {
    let status = match error {
        ContentError::NotFound(_) => {
            tracing::debug!(error = %error, "Page not found");
            StatusCode::NOT_FOUND
        }
        ContentError::Fetch { .. } => {
            tracing::error!(error = %error, "Failed to load page content");
            StatusCode::BAD_GATEWAY
        }
    };

    let mut context = page_context(state).await?;
    context.insert("status", &status.as_u16()).map_err(context_error)?;
    context.insert("message", error.user_message()).map_err(context_error)?;
    render(state, "error.html", &context, status)
}

/// 弹窗文章优先取已加载的列表，否则单独查询
async fn resolve_modal_post(state: &AppState, loaded: &[PostView], slug: &str) -> Option<PostView> {
    if let Some(post) = loaded.iter().find(|post| post.slug == slug) {
        return Some(post.clone());
    }
    match state.blog_service.find_post(slug).await {
        Ok(post) => Some(post),
        Err(e) => {
            tracing::warn!(slug, error = %e, "Post detail unavailable");
            None
        }
    }
}

fn insert_modal(context: &mut TemplateContext, post: &PostView, close_href: &str) -> Result<(), StatusCode> {
    context.insert("modal", post).map_err(context_error)?;
    context.insert("modal_body", &render_markup(&post.content)).map_err(context_error)?;
    context.insert("close_href", close_href).map_err(context_error)
}

fn render(
    state: &AppState,
    template: &str,
    context: &TemplateContext,
    status: StatusCode,
) -> Result<Response, StatusCode> {
    let html = state.templates.render(template, context).map_err(|e| {
        tracing::error!(template, error = %e, "Failed to render template");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok((status, Html(html)).into_response())
}

fn context_error(error: TemplateError) -> StatusCode {
    tracing::error!(error = %error, "Failed to build template context");
    StatusCode::INTERNAL_SERVER_ERROR
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn lenient<T: FromStr>(value: Option<&str>) -> Option<T> {
    non_blank(value).and_then(|value| value.parse().ok())
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
