//! Context handle to the application's [`UiState`].

use dioxus::prelude::*;

use common::ui_state::UiState;

/// Provided once by `App`; every component reaches the shared state through it.
#[derive(Clone, Copy)]
pub struct UiStateControl {
    pub state: Signal<UiState>,
    /// Opens the detail overlay and fetches the resource.
    pub open_detail: Callback<String>,
    /// Validates and posts a chat message; `Err` carries the local validation message.
    pub send_chat: Callback<String, Result<(), String>>,
}

pub fn use_ui_state() -> UiStateControl {
    use_context::<UiStateControl>()
}

/// Load status of the current catalog query.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsLoad {
    Loading,
    Ready,
    Failed(String),
}
