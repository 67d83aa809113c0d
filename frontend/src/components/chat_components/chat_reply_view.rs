use dioxus::prelude::*;

use common::chat_reply::{BlockKind, ReplyBlock, ReplySpan, parse_reply};

use crate::data_definitions::ui_state_control::use_ui_state;

/// Assistant reply rendered from Markdown. `resource:` links open the detail
/// overlay instead of navigating.
#[component]
pub fn ChatReplyView(markdown: ReadSignal<String>) -> Element {
    let blocks = use_memo(move || parse_reply(&markdown.read()));

    rsx! {
        div {
            class: "x-chat-reply",
            for (i, block) in blocks.read().iter().cloned().enumerate() {
                ReplyBlockView { key: "{i}", block }
            }
        }
    }
}

#[component]
fn ReplyBlockView(block: ReadSignal<ReplyBlock>) -> Element {
    let block = block.read().clone();
    let spans = rsx! {
        for (i, span) in block.spans.iter().cloned().enumerate() {
            ReplySpanView { key: "{i}", span }
        }
    };

    match block.kind {
        BlockKind::Heading(level) => {
            let size = match level {
                1 => 20,
                2 => 18,
                _ => 16,
            };
            rsx! { div { style: "font-weight: 600; font-size: {size}px; margin: 6px 0px;", {spans} } }
        }
        BlockKind::ListItem => rsx! { div { style: "margin: 2px 0px 2px 12px;", "• " {spans} } },
        BlockKind::CodeBlock => rsx! {
            pre { style: "background: #F3F4F6; padding: 8px; border-radius: 6px; overflow-x: auto; margin: 6px 0px;", {spans} }
        },
        BlockKind::Paragraph => rsx! { p { style: "margin: 4px 0px;", {spans} } },
    }
}

#[component]
fn ReplySpanView(span: ReadSignal<ReplySpan>) -> Element {
    let open_detail = use_ui_state().open_detail;

    match span.read().clone() {
        ReplySpan::Text { text, style } => {
            let weight = if style.strong { 600 } else { 400 };
            let font_style = if style.emphasis { "italic" } else { "normal" };
            if style.code {
                rsx! { code { style: "font-weight: {weight}; font-style: {font_style};", "{text}" } }
            } else {
                rsx! { span { style: "font-weight: {weight}; font-style: {font_style}; white-space: pre-wrap;", "{text}" } }
            }
        }
        ReplySpan::ResourceLink { id, label } => {
            let id_attr = id.clone();
            rsx! {
                a {
                    class: "x-resource-link",
                    href: "#",
                    "data-resource-id": "{id_attr}",
                    onclick: move |e| {
                        e.prevent_default();
                        open_detail(id.clone());
                    },
                    "{label}"
                }
            }
        }
        ReplySpan::ExternalLink { href, label } => rsx! {
            a { href: "{href}", target: "_blank", rel: "noopener noreferrer", "{label}" }
        },
    }
}
