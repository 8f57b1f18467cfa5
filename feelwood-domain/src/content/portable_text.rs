//! Portable Text 富文本块
//!
//! 内容库返回的富文本是一组带 `_type` 的JSON对象。这里把它们收敛成一个
//! 封闭的枚举：段落、标题、引用、列表项，其余一律视为 `Unsupported`。
//! 反序列化永远不会因为单个块格式错误而失败。

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 富文本块
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// `normal` 或任何无法识别的样式
    Paragraph(TextBlock),
    Heading(HeadingLevel, TextBlock),
    /// `blockquote`
    Quote(TextBlock),
    ListItem(ListItem),
    /// 非 `block` 类型，或缺少 `children`
    Unsupported,
}

impl ContentBlock {
    /// 块中的文本内容（`Unsupported` 没有）
    pub fn text(&self) -> Option<&TextBlock> {
        match self {
            ContentBlock::Paragraph(block)
            | ContentBlock::Heading(_, block)
            | ContentBlock::Quote(block) => Some(block),
            ContentBlock::ListItem(item) => Some(&item.block),
            ContentBlock::Unsupported => None,
        }
    }
}

/// 标题级别（只支持h2-h4）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
        }
    }
}

/// 列表类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    /// `number` 为有序列表，其余都按无序列表处理
    pub fn from_name(name: &str) -> Self {
        if name == "number" {
            ListKind::Number
        } else {
            ListKind::Bullet
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub kind: ListKind,
    /// 嵌套层级（从1开始）
    pub level: u32,
    pub block: TextBlock,
}

/// 文本块：span序列 + 块内的mark定义
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBlock {
    pub key: String,
    pub spans: Vec<Span>,
    pub mark_defs: Vec<MarkDef>,
}

impl TextBlock {
    /// 至少有一个span包含非空白字符
    pub fn has_visible_text(&self) -> bool {
        self.spans.iter().any(|span| !span.text.trim().is_empty())
    }

    pub fn mark_def(&self, key: &str) -> Option<&MarkDef> {
        self.mark_defs.iter().find(|def| def.key == key)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Span {
    pub key: String,
    pub text: String,
    /// `strong` / `em`，或者指向 `mark_defs` 的key
    pub marks: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkDef {
    pub key: String,
    pub kind: String,
    pub href: Option<String>,
}

impl MarkDef {
    /// 类型为 `link` 且 `href` 非空时返回链接地址
    pub fn link_href(&self) -> Option<&str> {
        if self.kind != "link" {
            return None;
        }
        self.href.as_deref().filter(|href| !href.is_empty())
    }
}

#[derive(Deserialize)]
struct RawBlock {
    #[serde(rename = "_key")]
    key: Option<String>,
    #[serde(rename = "_type")]
    block_type: Option<String>,
    style: Option<String>,
    #[serde(rename = "listItem")]
    list_item: Option<String>,
    level: Option<u32>,
    children: Option<Vec<RawSpan>>,
    #[serde(rename = "markDefs")]
    mark_defs: Option<Vec<RawMarkDef>>,
}

#[derive(Deserialize)]
struct RawSpan {
    #[serde(rename = "_key")]
    key: Option<String>,
    text: Option<String>,
    marks: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct RawMarkDef {
    #[serde(rename = "_key")]
    key: Option<String>,
    #[serde(rename = "_type")]
    kind: Option<String>,
    href: Option<String>,
}

impl From<RawBlock> for ContentBlock {
    fn from(raw: RawBlock) -> Self {
        if raw.block_type.as_deref() != Some("block") {
            return ContentBlock::Unsupported;
        }
        let Some(children) = raw.children else {
            return ContentBlock::Unsupported;
        };

        let block = TextBlock {
            key: raw.key.unwrap_or_default(),
            spans: children
                .into_iter()
                .map(|span| Span {
                    key: span.key.unwrap_or_default(),
                    text: span.text.unwrap_or_default(),
                    marks: span.marks.unwrap_or_default(),
                })
                .collect(),
            mark_defs: raw
                .mark_defs
                .unwrap_or_default()
                .into_iter()
                .map(|def| MarkDef {
                    key: def.key.unwrap_or_default(),
                    kind: def.kind.unwrap_or_default(),
                    href: def.href,
                })
                .collect(),
        };

        // 列表项优先于样式
        if let Some(kind) = raw.list_item.filter(|kind| !kind.is_empty()) {
            return ContentBlock::ListItem(ListItem {
                kind: ListKind::from_name(&kind),
                level: raw.level.unwrap_or(1),
                block,
            });
        }

        match raw.style.as_deref() {
            Some("h2") => ContentBlock::Heading(HeadingLevel::H2, block),
            Some("h3") => ContentBlock::Heading(HeadingLevel::H3, block),
            Some("h4") => ContentBlock::Heading(HeadingLevel::H4, block),
            Some("blockquote") => ContentBlock::Quote(block),
            _ => ContentBlock::Paragraph(block),
        }
    }
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value::<RawBlock>(value)
            .map(ContentBlock::from)
            .unwrap_or(ContentBlock::Unsupported))
    }
}
