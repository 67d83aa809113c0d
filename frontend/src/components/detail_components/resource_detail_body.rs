use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_content_icons::MdContentCopy;

use common::resource_detail::{DetailField, RelatedResourceLink, ResourceDetailView};

use crate::data_definitions::ui_state_control::use_ui_state;

/// Renders only the sections the view model carries.
#[component]
pub fn ResourceDetailBody(view: ReadSignal<ResourceDetailView>) -> Element {
    let view = view.read().clone();

    rsx! {
        div {
            class: "x-resource-detail",
            style: "display:flex; flex-direction: column; gap: 16px; color: #111827;",
            div {
                style: "display:flex; flex-direction: row; align-items: center; gap: 10px;",
                h2 { style: "margin: 0px; font-size: 26px; font-weight: 500;", "{view.title}" }
                if let Some(id) = view.id.clone() {
                    CopyIdButton { key: "{id}", id }
                }
            }
            if let Some(description) = view.description.clone() {
                p { style: "margin: 0px; font-size: 15px; line-height: 1.5;", "{description}" }
            }
            if !view.general_info.is_empty() {
                DetailSection { title: "General information",
                    FieldList { fields: view.general_info.clone() }
                }
            }
            if let Some(path) = view.classification_path.clone() {
                DetailSection { title: "Classification",
                    div { class: "x-classification-path", "{path}" }
                }
            }
            if !view.countries.is_empty() {
                DetailSection { title: "Countries", ChipList { values: view.countries.clone() } }
            }
            if !view.domains.is_empty() {
                DetailSection { title: "Domains", ChipList { values: view.domains.clone() } }
            }
            if !view.keywords.is_empty() {
                DetailSection { title: "Keywords", ChipList { values: view.keywords.clone() } }
            }
            if let Some(url) = view.repository_url.clone() {
                DetailSection { title: "Repository",
                    a { href: "{url}", target: "_blank", rel: "noopener noreferrer", "{url}" }
                }
            }
            if !view.related_metadata.is_empty() {
                DetailSection { title: "Related metadata",
                    FieldList { fields: view.related_metadata.clone() }
                }
            }
            if !view.related_resources.is_empty() {
                DetailSection { title: "Related resources",
                    RelatedResourceList { links: view.related_resources.clone() }
                }
            }
        }
    }
}

#[component]
fn DetailSection(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "x-detail-section",
            h4 {
                style: "margin: 0px 0px 6px 0px; font-size: 13px; text-transform: uppercase; letter-spacing: 0.04em; color: #6B7280;",
                "{title}"
            }
            {children}
        }
    }
}

#[component]
fn FieldList(fields: Vec<DetailField>) -> Element {
    rsx! {
        dl {
            style: "display: grid; grid-template-columns: max-content 1fr; gap: 4px 16px; margin: 0px; font-size: 14px;",
            for field in fields {
                dt { style: "font-weight: 600;", "{field.label}" }
                dd { style: "margin: 0px; white-space: pre-wrap;", "{field.value}" }
            }
        }
    }
}

#[component]
fn ChipList(values: Vec<String>) -> Element {
    rsx! {
        div {
            style: "display:flex; flex-wrap: wrap; gap: 6px;",
            for value in values {
                span {
                    style: "padding: 2px 10px; border-radius: 1000px; background: #F3F4F6; border: 1px solid #E5E7EB; font-size: 13px;",
                    "{value}"
                }
            }
        }
    }
}

#[component]
fn RelatedResourceList(links: Vec<RelatedResourceLink>) -> Element {
    let open_detail = use_ui_state().open_detail;
    rsx! {
        ul {
            style: "margin: 0px; padding-left: 18px; font-size: 14px;",
            for link in links {
                li {
                    match link.id.clone() {
                        Some(id) => rsx! {
                            a {
                                href: "#",
                                onclick: move |e| {
                                    e.prevent_default();
                                    open_detail(id.clone());
                                },
                                "{link.label}"
                            }
                        },
                        None => rsx! { span { "{link.label}" } },
                    }
                }
            }
        }
    }
}

#[component]
fn CopyIdButton(id: String) -> Element {
    let mut copied = use_signal(|| false);
    let label = if copied() { "Copied" } else { "Copy ID" };
    rsx! {
        button {
            title: "Copy resource id",
            style: "
                display:flex;
                align-items: center;
                gap: 4px;
                height: 28px;
                padding: 0 10px;
                font-size: 13px;
                border-radius: 8px;
                background: white;
                border: 1px solid #D1D5DB;
                cursor: pointer;
            ",
            onclick: move |_| {
                copy_to_clipboard(&id);
                copied.set(true);
            },
            Icon { icon: MdContentCopy, style: "width: 14px; height: 14px;" }
            "{label}"
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        // the returned promise is not awaited; failure only skips the copy
        let _ = window.navigator().clipboard().write_text(text);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn copy_to_clipboard(_text: &str) {}
