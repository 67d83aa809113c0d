//! Chat transcript, input and context summary.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_content_icons::MdSend;

use common::chat::{ChatMessage, ChatRole};

use crate::components::chat_components::chat_reply_view::ChatReplyView;
use crate::components::error_boundary::InlineErrorMessage;
use crate::data_definitions::ui_state_control::use_ui_state;

#[component]
pub fn ChatPanel() -> Element {
    let control = use_ui_state();
    let mut state = control.state;
    let send_chat = control.send_chat;
    let mut draft = use_signal(String::new);
    let mut local_error = use_signal(|| None::<String>);
    let messages = use_memo(move || state.read().chat.messages.clone());
    let is_pending = use_memo(move || state.read().chat.is_pending());
    let context_count = use_memo(move || state.read().chat_context.len());

    let mut submit = move || {
        if is_pending() {
            return;
        }
        let text = draft.read().clone();
        match send_chat(text) {
            Ok(()) => {
                draft.set(String::new());
                local_error.set(None);
            }
            Err(e) => local_error.set(Some(e)),
        }
    };

    rsx! {
        div {
            id: "x-chat-panel",
            style: "display:flex; flex-direction: column; gap: 12px; width: 100%; height: 100%; min-height: 0px;",

            div {
                style: "display:flex; flex-direction: row; align-items: center; gap: 10px; font-size: 13px; color: #374151;",
                if context_count() == 0 {
                    span { "No resources selected as context" }
                } else {
                    span { "{context_count} resources selected as context" }
                    button {
                        style: "font-size: 12px; border: 1px solid #D1D5DB; border-radius: 6px; background: white; cursor: pointer;",
                        onclick: move |_| state.write().chat_context.clear(),
                        "Clear context"
                    }
                }
                div { style: "flex-grow: 1;" }
                button {
                    style: "font-size: 12px; border: 1px solid #D1D5DB; border-radius: 6px; background: white; cursor: pointer;",
                    disabled: is_pending(),
                    onclick: move |_| state.write().chat.clear(),
                    "Clear conversation"
                }
            }

            div {
                id: "x-chat-transcript",
                style: "display:flex; flex-direction: column; gap: 10px; flex: 1 1 auto; overflow-y: auto; min-height: 200px;",
                for (i, message) in messages.read().iter().cloned().enumerate() {
                    ChatBubble { key: "{i}", message }
                }
                if is_pending() {
                    div { style: "color: #6B7280; font-style: italic; font-size: 14px;", "Waiting for reply..." }
                }
            }

            if let Some(error) = local_error.read().clone() {
                InlineErrorMessage { message: error }
            }

            div {
                style: "display:flex; flex-direction: row; gap: 8px; align-items: center;",
                input {
                    r#type: "text",
                    placeholder: "Ask about the catalog",
                    value: "{draft}",
                    style: "
                        flex: 1;
                        height: 36px;
                        padding: 0px 12px;
                        border-radius: 9999px;
                        border: 1px solid #D1D5DB;
                        font-size: 14px;
                    ",
                    oninput: move |e| draft.set(e.value()),
                    onkeypress: move |e| {
                        if e.key() == Key::Enter {
                            e.prevent_default();
                            submit();
                        }
                    },
                }
                button {
                    title: "Send",
                    disabled: is_pending(),
                    style: "
                        height: 36px;
                        width: 44px;
                        display:flex;
                        align-items:center;
                        justify-content:center;
                        border-radius: 9999px;
                        border: none;
                        background: #4F46E5;
                        color: white;
                        cursor: pointer;
                    ",
                    onclick: move |_| submit(),
                    Icon { icon: MdSend, style: "width: 18px; height: 18px;" }
                }
            }
        }
    }
}

#[component]
fn ChatBubble(message: ReadSignal<ChatMessage>) -> Element {
    let message = message.read().clone();
    let (align, background, border) = match message.role {
        ChatRole::User => ("flex-end", "#EEF2FF", "#C7D2FE"),
        ChatRole::Assistant => ("flex-start", "white", "#E5E7EB"),
        ChatRole::Error => ("flex-start", "#FEF2F2", "#FCA5A5"),
    };

    rsx! {
        div {
            class: "x-chat-message",
            style: "
                align-self: {align};
                max-width: 80%;
                background: {background};
                border: 1px solid {border};
                border-radius: 12px;
                padding: 8px 12px;
                font-size: 14px;
            ",
            match message.role {
                ChatRole::Assistant => rsx! { ChatReplyView { markdown: message.text.clone() } },
                _ => rsx! { span { style: "white-space: pre-wrap;", "{message.text}" } },
            }
        }
    }
}
