//! Flattens the generator's rich-content markup into plain display blocks.
//!
//! The profile fields stay opaque strings; this is only a view of them.
//! Nothing here is executed as live markup.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<(/?)([a-zA-Z][a-zA-Z0-9]*)\b[^>]*>").expect("tag regex")
});

static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[xX]?[0-9a-fA-F]+|[a-zA-Z]+);").expect("entity regex"));

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("ws regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub strong: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: false,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Vec<Span>),
    Paragraph(Vec<Span>),
    Bullet(Vec<Span>),
    TableRow(Vec<String>),
}

impl Block {
    pub fn plain_text(&self) -> String {
        match self {
            Self::Heading(spans) | Self::Paragraph(spans) | Self::Bullet(spans) => {
                spans.iter().map(|s| s.text.as_str()).collect()
            }
            Self::TableRow(cells) => cells.join(" | "),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Heading,
    Paragraph,
    Bullet,
}

#[derive(Default)]
struct Flattener {
    blocks: Vec<Block>,
    spans: Vec<Span>,
    kind: Option<BlockKind>,
    strong_depth: usize,
    row: Option<Vec<String>>,
    cell: Option<String>,
    /// Set at an inline element boundary; the next word gets a separating space.
    pending_space: bool,
}

impl Flattener {
    fn last_char(&self) -> Option<char> {
        match self.cell.as_ref() {
            Some(cell) => cell.chars().last(),
            None => self.spans.last().and_then(|s| s.text.chars().last()),
        }
    }

    fn text(&mut self, raw: &str) {
        let decoded = decode_entities(raw);
        let collapsed = WHITESPACE_RE.replace_all(&decoded, " ");
        let Some(first) = collapsed.chars().next() else {
            return;
        };

        let last = self.last_char();
        let mut text = if first == ' ' && last.is_some_and(char::is_whitespace) {
            collapsed.trim_start().to_string()
        } else {
            collapsed.into_owned()
        };
        if text.is_empty() {
            return;
        }
        if std::mem::take(&mut self.pending_space)
            && !first.is_whitespace()
            && !matches!(first, ',' | '.' | ';' | ':' | '!' | '?' | ')')
            && last.is_some_and(|c| !c.is_whitespace())
        {
            text.insert(0, ' ');
        }

        if let Some(cell) = self.cell.as_mut() {
            cell.push_str(&text);
            return;
        }

        let strong = self.strong_depth > 0;
        match self.spans.last_mut() {
            Some(last) if last.strong == strong => last.text.push_str(&text),
            _ => self.spans.push(Span { text, strong }),
        }
    }

    fn flush(&mut self) {
        self.pending_space = false;
        let mut spans = std::mem::take(&mut self.spans);
        trim_spans(&mut spans);
        if self.kind == Some(BlockKind::Bullet) {
            strip_leading_glyph(&mut spans);
        }
        if spans.is_empty() {
            return;
        }

        let block = match self.kind.unwrap_or(BlockKind::Paragraph) {
            BlockKind::Heading => Block::Heading(spans),
            BlockKind::Paragraph => Block::Paragraph(spans),
            BlockKind::Bullet => Block::Bullet(spans),
        };
        self.blocks.push(block);
    }

    fn close_cell(&mut self) {
        if let Some(cell) = self.cell.take() {
            let cell = cell.trim().to_string();
            if let Some(row) = self.row.as_mut() {
                row.push(cell);
            }
        }
    }

    fn tag(&mut self, closing: bool, name: &str) {
        match name.to_ascii_lowercase().as_str() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.flush();
                self.kind = (!closing).then_some(BlockKind::Heading);
            }
            "li" => {
                self.flush();
                self.kind = (!closing).then_some(BlockKind::Bullet);
            }
            "p" | "div" if self.kind == Some(BlockKind::Bullet) => {
                self.pending_space = true;
            }
            "p" | "div" | "section" | "ul" | "ol" | "table" | "thead" | "tbody" | "br" => {
                self.flush();
            }
            "span" if closing => {
                self.pending_space = true;
            }
            "strong" | "b" => {
                if closing {
                    self.strong_depth = self.strong_depth.saturating_sub(1);
                } else {
                    self.strong_depth += 1;
                }
            }
            "tr" => {
                self.flush();
                self.close_cell();
                if closing {
                    if let Some(row) = self.row.take().filter(|row| !row.is_empty()) {
                        self.blocks.push(Block::TableRow(row));
                    }
                } else {
                    self.row = Some(Vec::new());
                }
            }
            "td" | "th" => {
                self.close_cell();
                if !closing && self.row.is_some() {
                    self.cell = Some(String::new());
                }
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.close_cell();
        if let Some(row) = self.row.take().filter(|row| !row.is_empty()) {
            self.blocks.push(Block::TableRow(row));
        }
        self.flush();
        self.blocks
    }
}

pub fn flatten(markup: &str) -> Vec<Block> {
    let mut flattener = Flattener::default();
    let mut cursor = 0;

    for caps in TAG_RE.captures_iter(markup) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        flattener.text(&markup[cursor..whole.start()]);
        cursor = whole.end();

        if let Some(name) = caps.get(2) {
            let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
            flattener.tag(closing, name.as_str());
        }
    }
    flattener.text(&markup[cursor..]);
    flattener.finish()
}

/// Plain-text rendering for terminals.
pub fn to_plain_text(markup: &str) -> String {
    flatten(markup)
        .iter()
        .map(|block| match block {
            Block::Bullet(_) => format!("  • {}", block.plain_text()),
            _ => block.plain_text(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn trim_spans(spans: &mut Vec<Span>) {
    while spans.first().is_some_and(|s| s.text.trim().is_empty()) {
        spans.remove(0);
    }
    while spans.last().is_some_and(|s| s.text.trim().is_empty()) {
        spans.pop();
    }
    if let Some(first) = spans.first_mut() {
        first.text = first.text.trim_start().to_string();
    }
    if let Some(last) = spans.last_mut() {
        last.text = last.text.trim_end().to_string();
    }
}

/// Drops a lone decorative marker such as `✦` or `➤` opening a bullet.
fn strip_leading_glyph(spans: &mut Vec<Span>) {
    let Some(first) = spans.first_mut() else {
        return;
    };
    let mut chars = first.text.chars();
    let Some(glyph) = chars.next() else {
        return;
    };
    let rest = chars.as_str();
    if glyph.is_alphanumeric() || !(rest.is_empty() || rest.starts_with(char::is_whitespace)) {
        return;
    }
    first.text = rest.to_string();
    trim_spans(spans);
}

fn decode_entities(raw: &str) -> String {
    ENTITY_RE
        .replace_all(raw, |caps: &regex::Captures<'_>| {
            let entity = &caps[1];
            if let Some(code) = entity.strip_prefix('#') {
                let parsed = match code.strip_prefix(['x', 'X']) {
                    Some(hex) => u32::from_str_radix(hex, 16).ok(),
                    None => code.parse::<u32>().ok(),
                };
                return parsed
                    .and_then(char::from_u32)
                    .map(String::from)
                    .unwrap_or_else(|| caps[0].to_string());
            }
            match entity {
                "amp" => "&",
                "lt" => "<",
                "gt" => ">",
                "quot" => "\"",
                "apos" => "'",
                "nbsp" => " ",
                _ => return caps[0].to_string(),
            }
            .to_string()
        })
        .into_owned()
}

#[cfg(test)]
#[path = "tests/markup_tests.rs"]
mod tests;
