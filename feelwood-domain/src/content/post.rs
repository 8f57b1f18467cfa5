use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use super::{non_blank, ContentBlock, ImageRef, Localized};

/// 博客文章（查询投影）
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
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

    #[serde(rename = "contentTh", default, deserialize_with = "lenient_blocks")]
    pub content_th: Option<Vec<ContentBlock>>,

    #[serde(rename = "contentEn", default, deserialize_with = "lenient_blocks")]
    pub content_en: Option<Vec<ContentBlock>>,

    /// ISO-8601 时间字符串，格式化失败时按未设置处理
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,

    /// `slug.current`，可能为null
    pub slug: Option<String>,

    /// 通过 `author->name` 解析的作者名
    #[serde(rename = "authorName")]
    pub author_name: Option<String>,

    /// 通过 `categories[]->` 解析的博客分类
    pub categories: Option<Vec<CategoryRef>>,

    #[serde(rename = "coverImage")]
    pub cover_image: Option<ImageRef>,
}

impl Post {
    pub fn title(&self) -> Localized<'_> {
        Localized::from_fields(&self.title_th, &self.title_en)
    }

    pub fn excerpt(&self) -> Localized<'_> {
        Localized::from_fields(&self.excerpt_th, &self.excerpt_en)
    }

    pub fn content(&self) -> Localized<'_, [ContentBlock]> {
        Localized::from_lists(&self.content_th, &self.content_en)
    }

    /// 非空slug；没有slug的文章不出现在列表中
    pub fn slug(&self) -> Option<&str> {
        non_blank(self.slug.as_deref())
    }

    pub fn categories(&self) -> &[CategoryRef] {
        self.categories.as_deref().unwrap_or_default()
    }
}

/// 正文不是数组时按缺失处理，单篇文章的坏数据不影响整个列表
fn lenient_blocks<'de, D>(deserializer: D) -> Result<Option<Vec<ContentBlock>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// 文章引用的分类摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "titleTh")]
    pub title_th: Option<String>,

    #[serde(rename = "titleEn")]
    pub title_en: Option<String>,
}

impl CategoryRef {
    pub fn title(&self) -> Localized<'_> {
        Localized::from_fields(&self.title_th, &self.title_en)
    }
}
