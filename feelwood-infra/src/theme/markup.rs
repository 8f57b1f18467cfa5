use feelwood_domain::content::{Inline, ListKind, MarkupNode};
use tera::escape_html;

/// 把富文本渲染结果序列化为HTML片段
pub fn render_markup(nodes: &[MarkupNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &MarkupNode, out: &mut String) {
    match node {
        MarkupNode::Heading { level, content } => {
            write_wrapped(level.tag(), content, out);
        }
        MarkupNode::Paragraph(content) => write_wrapped("p", content, out),
        MarkupNode::Quote(content) => write_wrapped("blockquote", content, out),
        MarkupNode::List { kind, items } => {
            let tag = match kind {
                ListKind::Number => "ol",
                ListKind::Bullet => "ul",
            };
            out.push('<');
            out.push_str(tag);
            out.push('>');
            for item in items {
                write_wrapped("li", item, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        MarkupNode::Placeholder(text) => {
            out.push_str("<p class=\"pt-empty\">");
            out.push_str(&escape_html(text));
            out.push_str("</p>");
        }
    }
}

fn write_wrapped(tag: &str, content: &[Inline], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    for inline in content {
        write_inline(inline, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_inline(inline: &Inline, out: &mut String) {
    match inline {
        Inline::Text(text) => out.push_str(&escape_html(text)),
        Inline::Strong(inner) => {
            out.push_str("<strong>");
            write_inline(inner, out);
            out.push_str("</strong>");
        }
        Inline::Emphasis(inner) => {
            out.push_str("<em>");
            write_inline(inner, out);
            out.push_str("</em>");
        }
        Inline::Link { href, content } => {
            out.push_str("<a href=\"");
            out.push_str(&escape_html(href));
            out.push_str("\" target=\"_blank\" rel=\"noreferrer\">");
            write_inline(content, out);
            out.push_str("</a>");
        }
    }
}
