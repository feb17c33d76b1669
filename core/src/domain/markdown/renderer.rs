use crate::domain::markdown::entities::{Block, Inline, ListKind, MarkdownDocument};

/// Renders the markdown subset into markup. Total: never fails, and empty
/// input renders to an empty string.
///
/// Only paragraph lines get `**bold**` substitution; heading and list-item
/// text is emitted verbatim. All text is HTML-escaped.
pub fn render(markdown: &str) -> String {
    MarkdownDocument::parse(markdown).to_html()
}

impl MarkdownDocument {
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        for block in &self.blocks {
            match block {
                Block::Heading2(text) => {
                    html.push_str("<h2>");
                    html.push_str(&escape_html(text));
                    html.push_str("</h2>");
                }
                Block::Heading3(text) => {
                    html.push_str("<h3>");
                    html.push_str(&escape_html(text));
                    html.push_str("</h3>");
                }
                Block::List { kind, items } => {
                    let tag = match kind {
                        ListKind::Bullet => "ul",
                        ListKind::Numbered => "ol",
                    };
                    html.push_str(&format!("<{tag}>"));
                    for item in items {
                        html.push_str("<li>");
                        html.push_str(&escape_html(item));
                        html.push_str("</li>");
                    }
                    html.push_str(&format!("</{tag}>"));
                }
                Block::Paragraph(inlines) => {
                    html.push_str("<p>");
                    for inline in inlines {
                        match inline {
                            Inline::Text(text) => html.push_str(&escape_html(text)),
                            Inline::Strong(text) => {
                                html.push_str("<strong>");
                                html.push_str(&escape_html(text));
                                html.push_str("</strong>");
                            }
                        }
                    }
                    html.push_str("</p>");
                }
            }
        }

        html
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
