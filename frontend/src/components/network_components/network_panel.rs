//! Relationship network listed by group. Clicking a node shows its
//! neighbours; double-clicking a node backed by a resource opens its details.

use dioxus::prelude::*;

use common::network::{NetworkData, NetworkNode};

use crate::api::catalog_api::get_network_data;
use crate::components::error_boundary::InlineErrorMessage;
use crate::data_definitions::ui_state_control::use_ui_state;

#[component]
pub fn NetworkPanel() -> Element {
    let network = use_resource(get_network_data).suspend()?.cloned();
    let network = match network {
        Err(e) => return rsx! { InlineErrorMessage { message: format!("Could not load the network: {e}") } },
        Ok(n) => n,
    };

    rsx! { NetworkView { network } }
}

#[component]
fn NetworkView(network: ReadSignal<NetworkData>) -> Element {
    let mut focused = use_signal(|| None::<String>);
    let groups: Vec<(String, Vec<NetworkNode>)> = network
        .read()
        .by_group()
        .into_iter()
        .map(|(group, nodes)| (group.to_string(), nodes.into_iter().cloned().collect()))
        .collect();
    let neighbours: Vec<NetworkNode> = match focused.read().as_deref() {
        Some(id) => network.read().neighbours(id).into_iter().cloned().collect(),
        None => Vec::new(),
    };
    let focused_label = focused
        .read()
        .as_deref()
        .and_then(|id| network.read().node(id).map(|n| n.display_label().to_string()));
    let node_count = network.read().nodes.len();
    let edge_count = network.read().edges.len();

    rsx! {
        div {
            id: "x-network-panel",
            style: "display:flex; flex-direction: row; gap: 24px; width: 100%;",
            div {
                style: "flex: 2 1 0px; display:flex; flex-direction: column; gap: 16px;",
                div { style: "font-size: 14px; color: #374151;", "{node_count} nodes, {edge_count} connections" }
                if node_count == 0 {
                    div { style: "color: #6B7280;", "The network is empty" }
                }
                for (group, nodes) in groups {
                    div {
                        key: "{group}",
                        class: "x-network-group",
                        h3 { style: "font-size: 16px; margin: 0px 0px 6px 0px;", "{group} ({nodes.len()})" }
                        div {
                            style: "display:flex; flex-wrap: wrap; gap: 6px;",
                            for node in nodes {
                                NetworkNodeChip {
                                    key: "{node.id}",
                                    node: node.clone(),
                                    is_focused: focused.read().as_deref() == Some(node.id.as_str()),
                                    on_focus: move |id: String| focused.set(Some(id)),
                                }
                            }
                        }
                    }
                }
            }
            div {
                style: "flex: 1 1 0px; border-left: 1px solid #E5E7EB; padding-left: 16px;",
                if let Some(label) = focused_label {
                    h3 { style: "font-size: 16px; margin: 0px 0px 6px 0px;", "Connected to {label}" }
                    if neighbours.is_empty() {
                        div { style: "color: #6B7280; font-size: 14px;", "No connections" }
                    }
                    ul {
                        style: "margin: 0px; padding-left: 18px; font-size: 14px;",
                        for node in neighbours {
                            li { key: "{node.id}", "{node.display_label()}" }
                        }
                    }
                } else {
                    div { style: "color: #6B7280; font-size: 14px;", "Select a node to list its connections. Double-click a resource node to open its details." }
                }
            }
        }
    }
}

#[component]
fn NetworkNodeChip(node: ReadSignal<NetworkNode>, is_focused: bool, on_focus: Callback<String>) -> Element {
    let open_detail = use_ui_state().open_detail;
    let current = node.read().clone();
    let border = if is_focused { "#4F46E5" } else { "#D1D5DB" };
    let cursor = if current.detail_target().is_some() { "pointer" } else { "default" };

    rsx! {
        span {
            class: "x-network-node",
            style: "
                padding: 3px 10px;
                border-radius: 1000px;
                border: 2px solid {border};
                background: white;
                font-size: 13px;
                cursor: {cursor};
                user-select: none;
            ",
            onclick: move |_| on_focus(node.read().id.clone()),
            ondoubleclick: move |_| {
                if let Some(id) = node.read().detail_target() {
                    open_detail(id.to_string());
                }
            },
            "{current.display_label()}"
        }
    }
}
