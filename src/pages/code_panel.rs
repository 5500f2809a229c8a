//! Code panel - live preview, escaped snippet, copy/save action
//!
//! The preview injects the projected markup directly, so what the user
//! sees and what the copy button writes are the same string by
//! construction. Copying also appends the snippet to the history log.

use dioxus::prelude::*;
use serde_json::Value;
use wasm_bindgen_futures::JsFuture;

use super::PANEL_STYLE;
use crate::config::{WidgetKind, escape_html};
use crate::history::{HistoryEntry, HistoryStore};

#[derive(Debug, Clone, Copy, PartialEq)]
enum CopyStatus {
    Idle,
    Copied,
    Failed,
}

impl CopyStatus {
    fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Copy Code",
            Self::Copied => "Copied!",
            Self::Failed => "Copy failed",
        }
    }

    fn background(&self) -> &'static str {
        match self {
            Self::Idle => "#16a34a",
            Self::Copied => "#2563eb",
            Self::Failed => "#dc2626",
        }
    }
}

pub(crate) async fn write_clipboard(text: &str) -> Result<(), wasm_bindgen::JsValue> {
    let window = web_sys::window().ok_or_else(|| wasm_bindgen::JsValue::from_str("no window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}

fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

#[component]
pub fn CodePanel(
    kind: WidgetKind,
    markup: String,
    settings: Value,
    on_preview_click: Option<EventHandler<()>>,
) -> Element {
    let mut status = use_signal(|| CopyStatus::Idle);
    let escaped = escape_html(&markup);
    let copy_label = status().label();
    let copy_bg = status().background();
    let markup_for_copy = markup.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px;",

            // Live preview
            div {
                style: "{PANEL_STYLE}",
                h3 {
                    style: "color: #9ca3af; font-size: 13px; margin: 0 0 12px 0; text-transform: uppercase; letter-spacing: 1px;",
                    "Preview"
                }
                div {
                    id: "preview-surface",
                    style: "display: flex; justify-content: center; align-items: center; min-height: 140px; background: #111827; border-radius: 8px; padding: 16px; overflow: auto;",
                    onclick: move |_| {
                        if let Some(handler) = &on_preview_click {
                            handler(());
                        }
                    },
                    div {
                        dangerous_inner_html: "{markup}"
                    }
                }
            }

            // Generated code
            div {
                style: "{PANEL_STYLE}",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                    h3 {
                        style: "color: #9ca3af; font-size: 13px; margin: 0; text-transform: uppercase; letter-spacing: 1px;",
                        "Generated Code"
                    }
                    button {
                        style: "padding: 8px 20px; background: {copy_bg}; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 14px;",
                        onclick: move |_| {
                            let text = markup_for_copy.clone();
                            let snapshot = settings.clone();
                            spawn(async move {
                                match write_clipboard(&text).await {
                                    Ok(()) => {
                                        HistoryStore::append(HistoryEntry::new(
                                            kind.tag(),
                                            text,
                                            Some(snapshot),
                                            now_ms(),
                                        ));
                                        status.set(CopyStatus::Copied);
                                        gloo_timers::future::TimeoutFuture::new(2000).await;
                                        status.set(CopyStatus::Idle);
                                    }
                                    Err(err) => {
                                        web_sys::console::error_2(
                                            &"Copy failed:".into(),
                                            &err,
                                        );
                                        status.set(CopyStatus::Failed);
                                    }
                                }
                            });
                        },
                        "{copy_label}"
                    }
                }
                pre {
                    style: "background: #111827; border-radius: 8px; padding: 14px; margin: 0; overflow-x: auto; color: #d1d5db; font-size: 13px; line-height: 1.5; white-space: pre-wrap;",
                    code {
                        dangerous_inner_html: "{escaped}"
                    }
                }
            }
        }
    }
}
