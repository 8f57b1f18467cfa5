//! 页面视图模型
//!
//! 由原始文档经过字段解析后得到，直接序列化给模板使用。

use chrono::NaiveDate;
use feelwood_domain::content::{Category, CategoryPage, MarkupNode, Post, ProductSummary, Promotion};
use serde::Serialize;
use url::Url;

use crate::format::format_thai_date;
use crate::localize::{
    resolve, resolve_content, resolve_optional, resolve_tags, CategoryPlaceholders, PostPlaceholders, NAV_CATEGORY,
};
use crate::portable_text;
use crate::share::ShareLinks;

/// 首页大图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroSlide {
    pub id: &'static str,
    pub image: &'static str,
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

pub const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        id: "nature-living",
        image: "/images/hero1.jpg",
        eyebrow: "Handcrafted Woodwork",
        heading: "นำธรรมชาติเข้ามาใกล้ชีวิตประจำวัน",
        body: "เลือกวัสดุไม้แท้คุณภาพ พร้อมงานตกแต่งที่ออกแบบพิเศษสำหรับบ้านและธุรกิจของคุณ",
        cta_label: "ดูสินค้าล่าสุด",
        cta_href: "/products",
    },
    HeroSlide {
        id: "tailor-made",
        image: "/images/hero2.jpg",
        eyebrow: "Custom Made",
        heading: "ออกแบบเฟอร์นิเจอร์จากไอเดียของคุณ",
        body: "ทีมงาน Feel Wood สร้างสรรค์ผลงานใหม่จากแรงบันดาลใจของคุณ ทุกชิ้นงานมีเรื่องราว",
        cta_label: "เริ่มต้นปรึกษาทีมเรา",
        cta_href: "/contact",
    },
    HeroSlide {
        id: "sustainable",
        image: "/images/hero3.jpg",
        eyebrow: "Sustainable Materials",
        heading: "ไม้ทุกชิ้นผ่านการคัดสรรอย่างรับผิดชอบ",
        body: "รับประกันที่มาและมาตรฐานของไม้ เพื่อสร้างสรรค์พื้นที่ที่สวยและยั่งยืน",
        cta_label: "ทำความรู้จัก Feel Wood",
        cta_href: "/about",
    },
];

/// 导航菜单中的分类链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub id: String,
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavMenu {
    pub links: Vec<NavLink>,
}

impl NavMenu {
    /// 没有slug的分类不出现在菜单中
    pub fn from_categories(categories: &[Category]) -> Self {
        let links = categories
            .iter()
            .filter_map(|category| {
                let slug = category.slug()?;
                Some(NavLink {
                    id: category.id.clone(),
                    href: format!("/products/{}", slug),
                    label: resolve(category.title(), NAV_CATEGORY).to_string(),
                })
            })
            .collect();
        Self { links }
    }
}

/// 首页分类卡片
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCard {
    pub id: String,
    pub title: String,
    /// 英文标题，作为副标题显示
    pub subtitle: Option<String>,
    pub description: String,
    pub slug: String,
    pub href: String,
    pub image_url: Option<String>,
    pub initials: String,
}

impl CategoryCard {
    pub fn from_category(category: &Category, placeholders: CategoryPlaceholders) -> Option<Self> {
        let slug = category.slug()?;
        let title = resolve(category.title(), placeholders.title);
        Some(Self {
            id: category.id.clone(),
            title: title.to_string(),
            subtitle: non_empty(category.title_en.as_deref()),
            description: resolve(category.excerpt(), placeholders.description).to_string(),
            slug: slug.to_string(),
            href: format!("/products/{}", slug),
            image_url: category.image_url().map(str::to_string),
            initials: initials(title),
        })
    }
}

/// 文章视图，同时用于卡片和详情弹窗
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub slug: String,
    pub href: String,
    pub image_url: Option<String>,
    pub image_alt: String,
    pub initials: String,
    pub published_at: Option<String>,
    /// 格式化后的发布日期，无法格式化时为空
    pub published_label: String,
    pub author_name: Option<String>,
    pub categories: Vec<String>,
    /// 分类名以 ` · ` 连接
    pub category_label: Option<String>,
    pub share: Option<ShareLinks>,
    pub footer_note: Option<String>,
    /// 渲染后的正文，由主题层序列化为HTML
    #[serde(skip)]
    pub content: Vec<MarkupNode>,
}

impl PostView {
    /// 没有slug的文章返回None
    pub fn from_post(post: &Post, placeholders: PostPlaceholders, site_url: Option<&Url>) -> Option<Self> {
        let slug = post.slug()?;
        let title = resolve(post.title(), placeholders.title);
        let categories: Vec<String> = post
            .categories()
            .iter()
            .filter_map(|category| resolve_optional(category.title()))
            .map(str::to_string)
            .collect();
        let published_label = format_thai_date(post.published_at.as_deref());
        let cover = post.cover_image.as_ref();

        Some(Self {
            id: post.id.clone(),
            title: title.to_string(),
            excerpt: resolve(post.excerpt(), placeholders.excerpt).to_string(),
            slug: slug.to_string(),
            href: format!("/blog/{}", slug),
            image_url: cover.and_then(|image| image.url()).map(str::to_string),
            image_alt: cover
                .and_then(|image| image.alt())
                .unwrap_or(title)
                .to_string(),
            initials: initials(title),
            published_at: post.published_at.clone(),
            footer_note: (!published_label.is_empty()).then(|| format!("เผยแพร่เมื่อ {}", published_label)),
            published_label,
            author_name: post
                .author_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            category_label: (!categories.is_empty()).then(|| categories.join(" · ")),
            categories,
            share: ShareLinks::for_post(slug, site_url, title),
            content: portable_text::render(resolve_content(post.content())),
        })
    }
}

/// 分类详情页中的产品
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub code: Option<String>,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub spec_url: Option<String>,
    pub is_featured: bool,
}

impl From<&ProductSummary> for ProductCard {
    fn from(product: &ProductSummary) -> Self {
        Self {
            id: product.id.clone(),
            title: non_empty(product.title.as_deref()).unwrap_or_default(),
            code: non_empty(product.code.as_deref()),
            summary: non_empty(product.summary.as_deref()),
            image_url: product.hero_image().map(str::to_string),
            spec_url: non_empty(product.spec_url.as_deref()),
            is_featured: product.is_featured(),
        }
    }
}

/// 分类详情页
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub image_alt: String,
    pub products: Vec<ProductCard>,
}

impl CategoryView {
    pub fn from_page(page: &CategoryPage, placeholders: CategoryPlaceholders) -> Self {
        let title = resolve(page.title(), placeholders.title);
        Self {
            id: page.id.clone(),
            title: title.to_string(),
            description: resolve(page.excerpt(), placeholders.description).to_string(),
            tags: resolve_tags(page.tags()).to_vec(),
            image_url: page.image_url().map(str::to_string),
            image_alt: non_empty(page.image_alt.as_deref()).unwrap_or_else(|| title.to_string()),
            products: page.products().iter().map(ProductCard::from).collect(),
        }
    }
}

/// 首页促销
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromotionView {
    pub id: String,
    pub title: String,
    pub banner_url: Option<String>,
    /// 形如 `1 พ.ย. 2568 - 30 พ.ย. 2568`
    pub period: Option<String>,
    pub products: Vec<String>,
}

impl PromotionView {
    pub fn from_promotion(promotion: &Promotion) -> Self {
        let date = |value: Option<NaiveDate>| {
            value.map(|date| format_thai_date(Some(&date.format("%Y-%m-%d").to_string())))
        };
        let period = match (date(promotion.start), date(promotion.end)) {
            (Some(start), Some(end)) => Some(format!("{} - {}", start, end)),
            (Some(start), None) => Some(format!("ตั้งแต่ {}", start)),
            (None, Some(end)) => Some(format!("ถึง {}", end)),
            (None, None) => None,
        };

        Self {
            id: promotion.id.clone(),
            title: promotion.title().unwrap_or_default().to_string(),
            banner_url: promotion
                .banner
                .as_ref()
                .and_then(|banner| banner.url())
                .map(str::to_string),
            period,
            products: promotion
                .featured_products()
                .iter()
                .filter_map(|product| non_empty(product.title.as_deref()))
                .collect(),
        }
    }
}

/// 图片缺失时显示的前两个字符（大写）
fn initials(title: &str) -> String {
    title.chars().take(2).collect::<String>().to_uppercase()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
