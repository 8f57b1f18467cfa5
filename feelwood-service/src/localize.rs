//! 泰文/英文字段解析
//!
//! 同一逻辑字段按固定顺序取值：去空白后的泰文、去空白后的英文、占位文本。
//! 每个字段独立解析，标题取了英文不影响摘要取泰文。

use feelwood_domain::content::{ContentBlock, Localized};

/// 非空的占位文本
///
/// 只能通过 `const` 构造，空字符串会在编译期报错。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(&'static str);

impl Placeholder {
    pub const fn new(text: &'static str) -> Self {
        assert!(!text.is_empty(), "placeholder text must not be empty");
        Self(text)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// 文章卡片使用的占位文本
#[derive(Debug, Clone, Copy)]
pub struct PostPlaceholders {
    pub title: Placeholder,
    pub excerpt: Placeholder,
}

/// 分类使用的占位文本
#[derive(Debug, Clone, Copy)]
pub struct CategoryPlaceholders {
    pub title: Placeholder,
    pub description: Placeholder,
}

/// 博客页
pub const BLOG_POST: PostPlaceholders = PostPlaceholders {
    title: Placeholder::new("บทความไม่มีชื่อ"),
    excerpt: Placeholder::new("ยังไม่มีคำอธิบายสำหรับบทความนี้"),
};

/// 首页轮播文章
pub const HOME_POST: PostPlaceholders = PostPlaceholders {
    title: Placeholder::new("บทความ"),
    excerpt: Placeholder::new("ติดตามข้อมูลและแรงบันดาลใจจากทีม Feel Wood"),
};

/// 首页分类卡片
pub const CATEGORY_CARD: CategoryPlaceholders = CategoryPlaceholders {
    title: Placeholder::new("หมวดหมู่"),
    description: Placeholder::new("หมวดหมู่สินค้า Feel Wood"),
};

/// 分类详情页
pub const CATEGORY_PAGE: CategoryPlaceholders = CategoryPlaceholders {
    title: Placeholder::new("Product Category"),
    description: Placeholder::new("Discover curated selections of Feel Wood products in this category."),
};

/// 导航菜单中的分类
pub const NAV_CATEGORY: Placeholder = Placeholder::new("Unnamed category");

/// 解析字段，最后退回到占位文本，结果永远非空
pub fn resolve<'a>(field: Localized<'a>, placeholder: Placeholder) -> &'a str {
    resolve_optional(field).unwrap_or(placeholder.as_str())
}

/// 解析字段，两种语言都为空时返回None
pub fn resolve_optional(field: Localized<'_>) -> Option<&str> {
    [field.th, field.en]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// 正文：泰文至少有一个块时使用泰文，否则使用英文
pub fn resolve_content<'a>(field: Localized<'a, [ContentBlock]>) -> &'a [ContentBlock] {
    match field.th {
        Some(blocks) if !blocks.is_empty() => blocks,
        _ => field.en.unwrap_or_default(),
    }
}

/// 标签：与正文相同的规则
pub fn resolve_tags<'a>(field: Localized<'a, [String]>) -> &'a [String] {
    match field.th {
        Some(tags) if !tags.is_empty() => tags,
        _ => field.en.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feelwood_domain::content::TextBlock;

    const FALLBACK: Placeholder = Placeholder::new("fallback");

    #[test]
    fn test_thai_wins_when_present() {
        let field = Localized::new(Some("  หัวข้อ "), Some("Title"));
        assert_eq!(resolve(field, FALLBACK), "หัวข้อ");
    }

    #[test]
    fn test_blank_thai_falls_through_to_english() {
        let field = Localized::new(Some("   "), Some(" Title "));
        assert_eq!(resolve(field, FALLBACK), "Title");

        let field = Localized::new(None, Some("Title"));
        assert_eq!(resolve(field, FALLBACK), "Title");
    }

    #[test]
    fn test_placeholder_when_both_missing() {
        assert_eq!(resolve(Localized::empty(), FALLBACK), "fallback");
        assert_eq!(resolve(Localized::new(Some(""), Some(" ")), FALLBACK), "fallback");
        assert_eq!(resolve_optional(Localized::new(Some(""), None)), None);
    }

    #[test]
    fn test_fields_resolve_independently() {
        // 标题只有英文，摘要只有泰文
        let title = Localized::new(None, Some("Oak floor"));
        let excerpt = Localized::new(Some("พื้นไม้โอ๊ค"), None);
        assert_eq!(resolve(title, BLOG_POST.title), "Oak floor");
        assert_eq!(resolve(excerpt, BLOG_POST.excerpt), "พื้นไม้โอ๊ค");
        assert_eq!(resolve(Localized::empty(), BLOG_POST.excerpt), "ยังไม่มีคำอธิบายสำหรับบทความนี้");
    }

    #[test]
    fn test_content_prefers_non_empty_thai() {
        let th: Vec<ContentBlock> = vec![];
        let en = vec![ContentBlock::Paragraph(TextBlock::default())];
        assert_eq!(resolve_content(Localized::new(Some(&th[..]), Some(&en[..]))).len(), 1);

        let th = vec![ContentBlock::Unsupported];
        assert_eq!(
            resolve_content(Localized::new(Some(&th[..]), Some(&en[..]))),
            &[ContentBlock::Unsupported]
        );
        assert!(resolve_content(Localized::empty()).is_empty());
    }

    #[test]
    fn test_tags_fallback() {
        let th: Vec<String> = vec![];
        let en = vec!["oak".to_string()];
        assert_eq!(resolve_tags(Localized::new(Some(&th[..]), Some(&en[..]))), &["oak".to_string()]);
        assert!(resolve_tags(Localized::empty()).is_empty());
    }

    #[test]
    fn test_placeholder_sets_are_non_empty() {
        for placeholder in [
            BLOG_POST.title,
            BLOG_POST.excerpt,
            HOME_POST.title,
            HOME_POST.excerpt,
            CATEGORY_CARD.title,
            CATEGORY_CARD.description,
            CATEGORY_PAGE.title,
            CATEGORY_PAGE.description,
            NAV_CATEGORY,
        ] {
            assert!(!placeholder.as_str().trim().is_empty());
        }
    }
}
