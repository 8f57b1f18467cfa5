use serde::Deserialize;
use super::{non_blank, Localized, ProductSummary};

/// 产品分类（列表投影，用于首页和导航菜单）
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "titleTh")]
    pub title_th: Option<String>,

    #[serde(rename = "titleEn")]
    pub title_en: Option<String>,

    #[serde(rename = "excerptTh")]
    pub excerpt_th: Option<String>,

    #[serde(rename = "excerptEn")]
    pub excerpt_en: Option<String>,

    pub slug: Option<String>,

    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl Category {
    pub fn title(&self) -> Localized<'_> {
        Localized::from_fields(&self.title_th, &self.title_en)
    }

    pub fn excerpt(&self) -> Localized<'_> {
        Localized::from_fields(&self.excerpt_th, &self.excerpt_en)
    }

    pub fn slug(&self) -> Option<&str> {
        non_blank(self.slug.as_deref())
    }

    pub fn image_url(&self) -> Option<&str> {
        non_blank(self.image_url.as_deref())
    }
}

/// 分类详情页：分类本身 + 引用该分类的产品
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPage {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "titleTh")]
    pub title_th: Option<String>,

    #[serde(rename = "titleEn")]
    pub title_en: Option<String>,

    #[serde(rename = "excerptTh")]
    pub excerpt_th: Option<String>,

    #[serde(rename = "excerptEn")]
    pub excerpt_en: Option<String>,

    #[serde(rename = "tagsTh")]
    pub tags_th: Option<Vec<String>>,

    #[serde(rename = "tagsEn")]
    pub tags_en: Option<Vec<String>>,

    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,

    /// `coalesce(image.alt, titleTh, titleEn)`
    #[serde(rename = "imageAlt")]
    pub image_alt: Option<String>,

    /// 按 isFeatured desc, title asc 排序
    #[serde(default)]
    pub products: Option<Vec<ProductSummary>>,
}

impl CategoryPage {
    pub fn title(&self) -> Localized<'_> {
        Localized::from_fields(&self.title_th, &self.title_en)
    }

    pub fn excerpt(&self) -> Localized<'_> {
        Localized::from_fields(&self.excerpt_th, &self.excerpt_en)
    }

    pub fn tags(&self) -> Localized<'_, [String]> {
        Localized::from_lists(&self.tags_th, &self.tags_en)
    }

    pub fn image_url(&self) -> Option<&str> {
        non_blank(self.image_url.as_deref())
    }

    pub fn products(&self) -> &[ProductSummary] {
        self.products.as_deref().unwrap_or_default()
    }
}
