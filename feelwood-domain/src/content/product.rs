use serde::{Deserialize, Serialize};
use super::non_blank;

/// 产品列表项（/products 页面）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListing {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
}

/// 分类页中的产品摘要
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSummary {
    #[serde(rename = "_id")]
    pub id: String,

    pub title: Option<String>,

    /// 产品编码
    pub code: Option<String>,

    pub summary: Option<String>,

    #[serde(default)]
    pub images: Option<Vec<ProductImage>>,

    /// 规格PDF地址（`specPdf.asset->url`）
    #[serde(rename = "specUrl")]
    pub spec_url: Option<String>,

    #[serde(rename = "isFeatured")]
    pub is_featured: Option<bool>,
}

impl ProductSummary {
    /// 第一张有地址的图片
    pub fn hero_image(&self) -> Option<&str> {
        self.images
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find_map(|image| non_blank(image.url.as_deref()))
    }

    pub fn is_featured(&self) -> bool {
        self.is_featured.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductImage {
    #[serde(rename = "_key")]
    pub key: Option<String>,
    pub url: Option<String>,
}

/// 促销活动引用的产品
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
}
