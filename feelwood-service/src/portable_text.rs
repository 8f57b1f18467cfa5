//! 富文本渲染
//!
//! 把 [`ContentBlock`] 序列转换成 [`MarkupNode`] 树：
//! - 连续的同类列表项合并成一个列表，遇到其他块、空块或不支持的块时结束当前列表；
//! - span上的mark从右向左折叠，`marks[0]` 在最外层；
//! - 没有任何可显示内容时输出单个占位节点。
//!
//! 格式错误的块只会被跳过，渲染本身不会失败。

use feelwood_domain::content::{ContentBlock, Inline, ListKind, MarkupNode, Span, TextBlock};

use crate::localize::Placeholder;

/// 没有正文时的提示
pub const EMPTY_CONTENT: Placeholder = Placeholder::new("ยังไม่มีเนื้อหาในบทความนี้");

/// 渲染富文本块
pub fn render(blocks: &[ContentBlock]) -> Vec<MarkupNode> {
    let mut output = Vec::new();
    let mut pending = PendingList::default();

    for block in blocks {
        let text = match block.text() {
            Some(text) if text.has_visible_text() => text,
            _ => {
                pending.flush_into(&mut output);
                continue;
            }
        };

        let content = render_inline(text);
        match block {
            ContentBlock::ListItem(item) => {
                pending.push(item.kind, content, &mut output);
            }
            ContentBlock::Heading(level, _) => {
                pending.flush_into(&mut output);
                output.push(MarkupNode::Heading { level: *level, content });
            }
            ContentBlock::Quote(_) => {
                pending.flush_into(&mut output);
                output.push(MarkupNode::Quote(content));
            }
            ContentBlock::Paragraph(_) => {
                pending.flush_into(&mut output);
                output.push(MarkupNode::Paragraph(content));
            }
            ContentBlock::Unsupported => pending.flush_into(&mut output),
        }
    }
    pending.flush_into(&mut output);

    if output.is_empty() {
        output.push(MarkupNode::Placeholder(EMPTY_CONTENT.as_str().to_string()));
    }
    output
}

/// 尚未输出的列表
#[derive(Default)]
struct PendingList {
    kind: Option<ListKind>,
    items: Vec<Vec<Inline>>,
}

impl PendingList {
    fn push(&mut self, kind: ListKind, item: Vec<Inline>, output: &mut Vec<MarkupNode>) {
        if self.kind != Some(kind) {
            self.flush_into(output);
            self.kind = Some(kind);
        }
        self.items.push(item);
    }

    fn flush_into(&mut self, output: &mut Vec<MarkupNode>) {
        let items = std::mem::take(&mut self.items);
        if let Some(kind) = self.kind.take() {
            if !items.is_empty() {
                output.push(MarkupNode::List { kind, items });
            }
        }
    }
}

fn render_inline(block: &TextBlock) -> Vec<Inline> {
    block.spans.iter().map(|span| render_span(span, block)).collect()
}

fn render_span(span: &Span, block: &TextBlock) -> Inline {
    span.marks
        .iter()
        .rev()
        .fold(Inline::text(span.text.as_str()), |inner, mark| match mark.as_str() {
            "strong" => Inline::Strong(Box::new(inner)),
            "em" => Inline::Emphasis(Box::new(inner)),
            key => match block.mark_def(key).and_then(|def| def.link_href()) {
                Some(href) => Inline::Link {
                    href: href.to_string(),
                    content: Box::new(inner),
                },
                // 无法解析的mark不做任何修饰
                None => inner,
            },
        })
}
