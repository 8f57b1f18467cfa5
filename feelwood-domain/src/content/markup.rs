use super::portable_text::{HeadingLevel, ListKind};

/// 渲染后的行内节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(Box<Inline>),
    Emphasis(Box<Inline>),
    /// 在新窗口打开的超链接
    Link { href: String, content: Box<Inline> },
}

impl Inline {
    pub fn text(value: impl Into<String>) -> Self {
        Inline::Text(value.into())
    }

    /// 去掉所有修饰后的纯文本
    pub fn plain_text(&self) -> &str {
        match self {
            Inline::Text(text) => text,
            Inline::Strong(inner) | Inline::Emphasis(inner) => inner.plain_text(),
            Inline::Link { content, .. } => content.plain_text(),
        }
    }
}

/// 渲染后的块级节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Heading { level: HeadingLevel, content: Vec<Inline> },
    Paragraph(Vec<Inline>),
    Quote(Vec<Inline>),
    /// 连续同类列表项合并成的列表容器，每个元素是一项的行内内容
    List { kind: ListKind, items: Vec<Vec<Inline>> },
    /// 没有可显示内容时的占位提示
    Placeholder(String),
}

impl MarkupNode {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, MarkupNode::Placeholder(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unwraps_marks() {
        let inline = Inline::Link {
            href: "https://x".into(),
            content: Box::new(Inline::Strong(Box::new(Inline::text("ไม้จริง")))),
        };
        assert_eq!(inline.plain_text(), "ไม้จริง");
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(MarkupNode::Placeholder("ว่าง".into()).is_placeholder());
        assert!(!MarkupNode::Paragraph(vec![]).is_placeholder());
    }
}
