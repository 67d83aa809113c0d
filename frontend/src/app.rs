use dioxus::prelude::*;

use common::ui_state::UiState;

use crate::api::catalog_api::{ai_chat, get_resource};
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::ui_state_control::UiStateControl;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut state = use_signal(UiState::default);

    // callbacks run in this scope, so their requests outlive page changes
    use_context_provider(move || UiStateControl {
        state,
        open_detail: Callback::new(move |id: String| {
            state.write().detail.open(id.clone());
            spawn(async move {
                let result = get_resource(id.clone()).await.map_err(|e| e.to_string());
                state.write().detail.resolve(&id, result);
            });
        }),
        send_chat: Callback::new(move |text: String| {
            let context_ids = state.read().chat_context_ids();
            let request = state.write().chat.begin_send(&text, &context_ids);
            let request = match request {
                Ok(request) => request,
                Err(e) => {
                    dioxus::logger::tracing::info!("chat message not sent: {e}");
                    return Err(e.to_string());
                }
            };
            spawn(async move {
                let result = ai_chat(request).await.map_err(|e| e.to_string());
                state.write().chat.finish(result);
            });
            Ok(())
        }),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
