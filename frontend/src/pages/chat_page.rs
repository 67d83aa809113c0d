use dioxus::prelude::*;

use crate::components::chat_components::chat_panel::ChatPanel;

#[component]
pub fn ChatPage() -> Element {
    rsx! {
        Title { "Resource Catalog - Chat" }
        div {
            id: "x-chat-page",
            style: "
                display:flex;
                flex-direction: column;
                gap: 16px;
                width: 100%;
                height: 100%;
                max-width: 900px;
                padding: 28px 36px;
                box-sizing: border-box;
            ",
            div { style: "font-size: 30px; font-weight: 500; color: #0F172A;", "Ask the catalog" }
            ChatPanel {}
        }
    }
}
