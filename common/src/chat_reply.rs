//! Markdown chat replies flattened into blocks of styled spans.
//!
//! Links using the `resource:` scheme (`resource:ID` or `resource://ID`) become
//! [`ReplySpan::ResourceLink`] so the UI can open the detail overlay instead of
//! navigating. Raw HTML is kept as plain text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

pub const RESOURCE_LINK_SCHEME: &str = "resource:";

/// Resource id referenced by `href`, if it uses the resource scheme.
pub fn resource_link_target(href: &str) -> Option<&str> {
    let rest = href.trim().strip_prefix(RESOURCE_LINK_SCHEME)?;
    let id = rest.strip_prefix("//").unwrap_or(rest).trim_end_matches('/');
    if id.is_empty() { None } else { Some(id) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplySpan {
    Text { text: String, style: SpanStyle },
    ResourceLink { id: String, label: String },
    ExternalLink { href: String, label: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading(u8),
    ListItem,
    CodeBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyBlock {
    pub kind: BlockKind,
    pub spans: Vec<ReplySpan>,
}

struct PendingLink {
    href: String,
    label: String,
}

#[derive(Default)]
struct ReplyBuilder {
    blocks: Vec<ReplyBlock>,
    current: Option<ReplyBlock>,
    style: SpanStyle,
    link: Option<PendingLink>,
}

impl ReplyBuilder {
    fn open(&mut self, kind: BlockKind) {
        self.flush();
        self.current = Some(ReplyBlock { kind, spans: Vec::new() });
    }

    fn flush(&mut self) {
        if let Some(block) = self.current.take() {
            if !block.spans.is_empty() {
                self.blocks.push(block);
            }
        }
    }

    fn close(&mut self, kind: BlockKind) {
        if self.current.as_ref().map(|block| block.kind == kind).unwrap_or(false) {
            self.flush();
        }
    }

    fn push_span(&mut self, span: ReplySpan) {
        let block = self.current.get_or_insert_with(|| ReplyBlock { kind: BlockKind::Paragraph, spans: Vec::new() });
        if let (Some(ReplySpan::Text { text, style }), ReplySpan::Text { text: more, style: more_style }) = (block.spans.last_mut(), &span) {
            if style == more_style {
                text.push_str(more);
                return;
            }
        }
        block.spans.push(span);
    }

    fn text(&mut self, text: &str, code: bool) {
        if let Some(link) = self.link.as_mut() {
            link.label.push_str(text);
            return;
        }
        let style = SpanStyle { code: code || self.style.code, ..self.style };
        self.push_span(ReplySpan::Text { text: text.to_string(), style });
    }

    fn finish_link(&mut self) {
        let Some(PendingLink { href, label }) = self.link.take() else { return };
        let label = if label.trim().is_empty() { href.clone() } else { label };
        let span = match resource_link_target(&href) {
            Some(id) => ReplySpan::ResourceLink { id: id.to_string(), label },
            None => ReplySpan::ExternalLink { href, label },
        };
        self.push_span(span);
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Paragraph) => {
                // paragraphs inside a list item stay part of the item
                if !matches!(self.current.as_ref().map(|b| b.kind), Some(BlockKind::ListItem)) {
                    self.open(BlockKind::Paragraph);
                }
            }
            Event::End(TagEnd::Paragraph) => self.close(BlockKind::Paragraph),
            Event::Start(Tag::Heading { level, .. }) => self.open(BlockKind::Heading(level as u8)),
            Event::End(TagEnd::Heading(level)) => self.close(BlockKind::Heading(level as u8)),
            Event::Start(Tag::Item) => self.open(BlockKind::ListItem),
            Event::End(TagEnd::Item) => self.close(BlockKind::ListItem),
            Event::Start(Tag::CodeBlock(_)) => {
                self.open(BlockKind::CodeBlock);
                self.style.code = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.style.code = false;
                self.close(BlockKind::CodeBlock);
            }
            Event::Start(Tag::Strong) => self.style.strong = true,
            Event::End(TagEnd::Strong) => self.style.strong = false,
            Event::Start(Tag::Emphasis) => self.style.emphasis = true,
            Event::End(TagEnd::Emphasis) => self.style.emphasis = false,
            Event::Start(Tag::Link { dest_url, .. }) => {
                self.link = Some(PendingLink { href: dest_url.to_string(), label: String::new() });
            }
            Event::End(TagEnd::Link) => self.finish_link(),
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => self.text(&text, false),
            Event::Code(text) => self.text(&text, true),
            Event::SoftBreak => self.text(" ", false),
            Event::HardBreak => self.text("\n", false),
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<ReplyBlock> {
        self.finish_link();
        self.flush();
        self.blocks
    }
}

pub fn parse_reply(markdown: &str) -> Vec<ReplyBlock> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let mut builder = ReplyBuilder::default();
    for event in Parser::new_ext(markdown, options) {
        builder.event(event);
    }
    builder.finish()
}

/// Every resource id the reply links to, in order of appearance.
pub fn referenced_resource_ids(blocks: &[ReplyBlock]) -> Vec<&str> {
    blocks
        .iter()
        .flat_map(|block| block.spans.iter())
        .filter_map(|span| match span {
            ReplySpan::ResourceLink { id, .. } => Some(id.as_str()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(text: &str) -> ReplySpan {
        ReplySpan::Text { text: text.to_string(), style: SpanStyle::default() }
    }

    #[test]
    fn resource_scheme_variants() {
        assert_eq!(resource_link_target("resource:42"), Some("42"));
        assert_eq!(resource_link_target("resource://abc-1/"), Some("abc-1"));
        assert_eq!(resource_link_target("resource://"), None);
        assert_eq!(resource_link_target("https://example.org"), None);
    }

    #[test]
    fn resource_links_are_intercepted() {
        let blocks = parse_reply("See [GLASS](resource://r-1) and [docs](https://who.int).");
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].spans,
            vec![
                text("See "),
                ReplySpan::ResourceLink { id: "r-1".to_string(), label: "GLASS".to_string() },
                text(" and "),
                ReplySpan::ExternalLink { href: "https://who.int".to_string(), label: "docs".to_string() },
                text("."),
            ]
        );
        assert_eq!(referenced_resource_ids(&blocks), vec!["r-1"]);
    }

    #[test]
    fn lists_and_headings_become_blocks() {
        let blocks = parse_reply("## Matches\n\n- **WHONET**\n- `GLASS`\n");
        let kinds: Vec<BlockKind> = blocks.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![BlockKind::Heading(2), BlockKind::ListItem, BlockKind::ListItem]);
        assert_eq!(
            blocks[1].spans,
            vec![ReplySpan::Text { text: "WHONET".to_string(), style: SpanStyle { strong: true, ..Default::default() } }]
        );
        assert_eq!(
            blocks[2].spans,
            vec![ReplySpan::Text { text: "GLASS".to_string(), style: SpanStyle { code: true, ..Default::default() } }]
        );
    }

    #[test]
    fn raw_html_stays_text() {
        let blocks = parse_reply("a <b>bold</b> claim");
        let joined: String = blocks[0]
            .spans
            .iter()
            .map(|span| match span {
                ReplySpan::Text { text, .. } => text.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(joined, "a <b>bold</b> claim");
    }
}
