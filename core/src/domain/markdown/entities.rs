use std::sync::LazyLock;

use regex::Regex;

static NUMBERED_ITEM_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("numbered item pattern is valid"));

static BOLD_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold span pattern is valid"));

/// Classification of a single markdown line, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading2(&'a str),
    Heading3(&'a str),
    BulletItem(&'a str),
    NumberedItem(&'a str),
    Paragraph(&'a str),
    Blank,
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix("## ") {
            return LineKind::Heading2(rest);
        }
        if let Some(rest) = line.strip_prefix("### ") {
            return LineKind::Heading3(rest);
        }
        if let Some(rest) = line.strip_prefix("* ") {
            return LineKind::BulletItem(rest);
        }
        if let Some(prefix) = NUMBERED_ITEM_PREFIX.find(line) {
            return LineKind::NumberedItem(&line[prefix.end()..]);
        }
        if line.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Paragraph(line)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Numbered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
}

impl Inline {
    /// Splits a paragraph line on `**bold**` spans (non-greedy, repeatable).
    pub fn parse_line(line: &str) -> Vec<Inline> {
        let mut inlines = Vec::new();
        let mut cursor = 0;

        for captures in BOLD_SPAN.captures_iter(line) {
            let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if whole.start() > cursor {
                inlines.push(Inline::Text(line[cursor..whole.start()].to_string()));
            }
            inlines.push(Inline::Strong(inner.as_str().to_string()));
            cursor = whole.end();
        }

        if cursor < line.len() {
            inlines.push(Inline::Text(line[cursor..].to_string()));
        }

        inlines
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading2(String),
    Heading3(String),
    List { kind: ListKind, items: Vec<String> },
    Paragraph(Vec<Inline>),
}

/// Structural view of a markdown-subset document. Lists are maximal runs of
/// contiguous items of the same kind; nothing nests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownDocument {
    pub blocks: Vec<Block>,
}

impl MarkdownDocument {
    pub fn parse(markdown: &str) -> Self {
        let mut blocks = Vec::new();
        let mut open_list: Option<(ListKind, Vec<String>)> = None;

        for line in markdown.lines() {
            let kind = LineKind::classify(line);

            let list_item = match kind {
                LineKind::BulletItem(text) => Some((ListKind::Bullet, text)),
                LineKind::NumberedItem(text) => Some((ListKind::Numbered, text)),
                _ => None,
            };

            if let Some((item_kind, text)) = list_item {
                let continues_open =
                    matches!(&open_list, Some((open_kind, _)) if *open_kind == item_kind);
                if !continues_open {
                    close_list(&mut open_list, &mut blocks);
                    open_list = Some((item_kind, Vec::new()));
                }
                if let Some((_, items)) = open_list.as_mut() {
                    items.push(text.to_string());
                }
                continue;
            }

            close_list(&mut open_list, &mut blocks);

            match kind {
                LineKind::Heading2(text) => blocks.push(Block::Heading2(text.to_string())),
                LineKind::Heading3(text) => blocks.push(Block::Heading3(text.to_string())),
                LineKind::Paragraph(text) => blocks.push(Block::Paragraph(Inline::parse_line(text))),
                LineKind::Blank | LineKind::BulletItem(_) | LineKind::NumberedItem(_) => {}
            }
        }

        close_list(&mut open_list, &mut blocks);

        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

fn close_list(open_list: &mut Option<(ListKind, Vec<String>)>, blocks: &mut Vec<Block>) {
    if let Some((kind, items)) = open_list.take() {
        blocks.push(Block::List { kind, items });
    }
}
