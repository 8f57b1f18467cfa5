pub mod localized;
pub mod portable_text;
pub mod markup;
pub mod post;
pub mod category;
pub mod product;
pub mod promotion;

pub use localized::Localized;
pub use portable_text::{ContentBlock, TextBlock, ListItem, ListKind, HeadingLevel, Span, MarkDef};
pub use markup::{MarkupNode, Inline};
pub use post::{Post, CategoryRef};
pub use category::{Category, CategoryPage};
pub use product::{ProductListing, ProductSummary, ProductImage, ProductRef};
pub use promotion::Promotion;

use serde::{Deserialize, Serialize};

/// 图片投影 `{url, alt}`（url来自 `asset->url`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: Option<String>,
    pub alt: Option<String>,
}

impl ImageRef {
    /// 非空的图片地址
    pub fn url(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }

    pub fn alt(&self) -> Option<&str> {
        non_blank(self.alt.as_deref())
    }
}

/// 去掉首尾空白后非空则返回
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
