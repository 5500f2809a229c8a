//! History browser - list, preview, copy, and delete saved snippets
//!
//! Entries are fetched once per interaction and displayed newest-first;
//! every mutating action addresses an entry by id and then re-reads the
//! store, so the list never goes stale against localStorage.

use dioxus::prelude::*;

use super::store::{HistoryEntry, HistoryStore, sorted_newest_first};
use crate::Route;
use crate::config::{WidgetKind, escape_html};
use crate::pages::code_panel::write_clipboard;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Viewport category boundary, in CSS pixels
const MOBILE_BREAKPOINT: f64 = 640.0;

/// "Mar 4 at 02:05 PM" on mobile, "Mar 4, Tue at 02:05 PM" on desktop
fn compose_date(
    month: usize,
    day_of_month: u32,
    weekday: usize,
    hours: u32,
    minutes: u32,
    mobile: bool,
) -> String {
    let ampm = if hours < 12 { "AM" } else { "PM" };
    let h12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    let month = MONTHS[month % 12];
    let time = format!("{h12:02}:{minutes:02} {ampm}");
    if mobile {
        format!("{month} {day_of_month} at {time}")
    } else {
        format!("{month} {day_of_month}, {} at {time}", DAYS[weekday % 7])
    }
}

fn format_date(ms: i64, mobile: bool) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms as f64));
    compose_date(
        date.get_month() as usize,
        date.get_date(),
        date.get_day() as usize,
        date.get_hours(),
        date.get_minutes(),
        mobile,
    )
}

/// "checkbox" -> "Checkbox"; unknown legacy tags are capitalized as-is
fn kind_title(tag: &str) -> String {
    if let Some(kind) = WidgetKind::from_tag(tag) {
        return kind.title().to_string();
    }
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Escaped, truncated code for the list cards
fn short_code(code: &str) -> String {
    let escaped = escape_html(code);
    if escaped.chars().count() > 100 {
        let cut: String = escaped.chars().take(100).collect();
        format!("{cut}...")
    } else {
        escaped
    }
}

/// Per-kind preview wrapper style inside the modal
fn preview_wrapper_style(tag: &str) -> &'static str {
    match WidgetKind::from_tag(tag) {
        Some(WidgetKind::Card) => {
            "width: 100%; display: flex; justify-content: center; align-items: center; padding: 16px;"
        }
        Some(WidgetKind::Button | WidgetKind::Checkbox | WidgetKind::Toggle) => {
            "display: flex; justify-content: center; align-items: center; padding: 24px; background: #1f2937; border-radius: 8px;"
        }
        _ => "width: 100%; display: flex; justify-content: center; padding: 16px;",
    }
}

fn window_is_mobile() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w < MOBILE_BREAKPOINT)
        .unwrap_or(false)
}

#[component]
pub fn History() -> Element {
    let mut entries = use_signal(HistoryStore::list);
    let mut is_mobile = use_signal(window_is_mobile);
    let mut modal_entry = use_signal(|| Option::<HistoryEntry>::None);
    let mut copied_id = use_signal(|| Option::<String>::None);

    // Breakpoint watcher - re-render only when the category flips,
    // not on every resize pixel
    use_hook(|| {
        spawn(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(500).await;
                let now_mobile = window_is_mobile();
                if *is_mobile.peek() != now_mobile {
                    is_mobile.set(now_mobile);
                }
            }
        });
    });

    let mobile = is_mobile();
    let display = sorted_newest_first(&entries.read());
    let count = display.len();

    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; padding: 24px; font-family: system-ui, sans-serif;",

            div {
                style: "max-width: 860px; margin: 0 auto;",

                div {
                    style: "display: flex; gap: 16px; align-items: baseline; margin-bottom: 20px;",
                    Link {
                        to: Route::Home {},
                        style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                        "\u{2190} Studio"
                    }
                    h2 {
                        style: "color: #e5e7eb; margin: 0; font-size: 22px;",
                        "Generated Elements ({count})"
                    }
                    if count > 0 {
                        button {
                            style: "margin-left: auto; padding: 6px 14px; background: #dc2626; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 13px;",
                            onclick: move |_| {
                                let confirmed = web_sys::window()
                                    .and_then(|w| {
                                        w.confirm_with_message(
                                            "Are you sure you want to clear all history? This cannot be undone.",
                                        )
                                        .ok()
                                    })
                                    .unwrap_or(false);
                                if confirmed {
                                    HistoryStore::clear();
                                    entries.set(HistoryStore::list());
                                }
                            },
                            "Clear All"
                        }
                    }
                }

                if count == 0 {
                    div {
                        style: "text-align: center; padding: 64px 0;",
                        h3 {
                            style: "color: #d1d5db; font-size: 15px; margin: 0 0 8px 0;",
                            "No history yet"
                        }
                        p {
                            style: "color: #6b7280; font-size: 13px; margin: 0 0 16px 0;",
                            "Generate some elements to see them here."
                        }
                        Link {
                            to: Route::Home {},
                            style: "color: #818cf8; text-decoration: none; font-size: 14px;",
                            "Open a configurator \u{2192}"
                        }
                    }
                } else {
                    div {
                        style: "display: flex; flex-direction: column; gap: 16px;",
                        for entry in display {
                            HistoryCard {
                                entry: entry.clone(),
                                date: format_date(entry.time, mobile),
                                copied: copied_id.read().as_deref() == Some(entry.id.as_str()),
                                on_preview: move |entry: HistoryEntry| modal_entry.set(Some(entry)),
                                on_copy: move |entry: HistoryEntry| {
                                    spawn(async move {
                                        match write_clipboard(&entry.code).await {
                                            Ok(()) => {
                                                copied_id.set(Some(entry.id.clone()));
                                                gloo_timers::future::TimeoutFuture::new(2000).await;
                                                copied_id.set(None);
                                            }
                                            Err(err) => {
                                                web_sys::console::error_2(&"Copy failed:".into(), &err);
                                            }
                                        }
                                    });
                                },
                                on_delete: move |id: String| {
                                    HistoryStore::delete(&id);
                                    entries.set(HistoryStore::list());
                                },
                            }
                        }
                    }
                }
            }

            if let Some(entry) = modal_entry() {
                PreviewModal {
                    entry: entry.clone(),
                    date: format_date(entry.time, mobile),
                    on_close: move |_| modal_entry.set(None),
                }
            }
        }
    }
}

#[component]
fn HistoryCard(
    entry: HistoryEntry,
    date: String,
    copied: bool,
    on_preview: EventHandler<HistoryEntry>,
    on_copy: EventHandler<HistoryEntry>,
    on_delete: EventHandler<String>,
) -> Element {
    let title = kind_title(&entry.kind);
    let badge: String = entry.kind.chars().take(1).collect::<String>().to_uppercase();
    let code = short_code(&entry.code);
    let copy_label = if copied { "Copied!" } else { "Copy" };
    let copy_color = if copied { "#4ade80" } else { "#d1d5db" };
    let preview_entry = entry.clone();
    let copy_entry = entry.clone();
    let delete_id = entry.id.clone();

    rsx! {
        div {
            style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; overflow: hidden;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; background: #14142a;",
                div {
                    style: "display: flex; gap: 10px; align-items: center;",
                    div {
                        style: "width: 34px; height: 34px; border-radius: 50%; background: #6366f1; display: flex; align-items: center; justify-content: center; color: white; font-size: 13px; font-weight: 600;",
                        "{badge}"
                    }
                    h3 {
                        style: "color: #e5e7eb; margin: 0; font-size: 15px;",
                        "{title} Component"
                    }
                }
                span {
                    style: "color: #6b7280; font-size: 12px;",
                    "{date}"
                }
            }

            div {
                style: "padding: 12px 16px;",
                pre {
                    style: "background: #111827; border-radius: 8px; padding: 10px; margin: 0; overflow-x: auto; color: #9ca3af; font-size: 12px; white-space: pre-wrap;",
                    code { dangerous_inner_html: "{code}" }
                }
            }

            div {
                style: "display: flex; border-top: 1px solid #2a2a4a;",
                button {
                    style: "flex: 1; padding: 8px; background: none; border: none; color: #d1d5db; font-size: 13px; cursor: pointer;",
                    onclick: move |_| on_preview(preview_entry.clone()),
                    "Preview"
                }
                button {
                    style: "flex: 1; padding: 8px; background: none; border: none; color: {copy_color}; font-size: 13px; cursor: pointer;",
                    onclick: move |_| on_copy(copy_entry.clone()),
                    "{copy_label}"
                }
                button {
                    style: "flex: 1; padding: 8px; background: none; border: none; color: #f87171; font-size: 13px; cursor: pointer;",
                    onclick: move |_| on_delete(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn PreviewModal(entry: HistoryEntry, date: String, on_close: EventHandler<()>) -> Element {
    let title = kind_title(&entry.kind);
    let kind = entry.kind.clone();
    let escaped = escape_html(&entry.code);
    let wrapper_style = preview_wrapper_style(&entry.kind);

    rsx! {
        div {
            style: "position: fixed; inset: 0; z-index: 50; background: rgba(0, 0, 0, 0.7); display: flex; align-items: center; justify-content: center; padding: 16px;",
            onclick: move |_| on_close(()),

            div {
                style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; width: 100%; max-width: 720px; max-height: 90vh; overflow-y: auto;",
                onclick: move |e: Event<MouseData>| e.stop_propagation(),

                div {
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 14px 16px; border-bottom: 1px solid #2a2a4a;",
                    h3 {
                        style: "color: #e5e7eb; margin: 0; font-size: 16px;",
                        "{title} Component Preview"
                    }
                    button {
                        style: "background: none; border: none; color: #9ca3af; font-size: 18px; cursor: pointer;",
                        onclick: move |_| on_close(()),
                        "\u{2715}"
                    }
                }

                div {
                    style: "padding: 16px;",
                    div {
                        style: "color: #9ca3af; font-size: 13px; margin-bottom: 2px;",
                        "Component Type: {kind}"
                    }
                    div {
                        style: "color: #6b7280; font-size: 12px; margin-bottom: 14px;",
                        "Generated on: {date}"
                    }
                    pre {
                        style: "background: #111827; border-radius: 8px; padding: 12px; margin: 0 0 14px 0; max-height: 200px; overflow: auto; color: #9ca3af; font-size: 12px; white-space: pre-wrap;",
                        code { dangerous_inner_html: "{escaped}" }
                    }
                    div {
                        style: "background: #111827; border-radius: 8px; padding: 12px;",
                        h4 {
                            style: "color: #9ca3af; font-size: 12px; margin: 0 0 10px 0;",
                            "Preview:"
                        }
                        div {
                            style: "{wrapper_style}",
                            div { dangerous_inner_html: "{entry.code}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_formats_by_breakpoint() {
        // 2024-03-04 14:05, a Monday
        assert_eq!(compose_date(2, 4, 1, 14, 5, true), "Mar 4 at 02:05 PM");
        assert_eq!(compose_date(2, 4, 1, 14, 5, false), "Mar 4, Mon at 02:05 PM");
    }

    #[test]
    fn midnight_and_noon_are_twelve() {
        assert!(compose_date(0, 1, 0, 0, 0, true).contains("12:00 AM"));
        assert!(compose_date(0, 1, 0, 12, 0, true).contains("12:00 PM"));
    }

    #[test]
    fn kind_titles() {
        assert_eq!(kind_title("checkbox"), "Checkbox");
        assert_eq!(kind_title("navbar"), "Navbar");
        assert_eq!(kind_title(""), "");
    }

    #[test]
    fn short_code_truncates_escaped_text() {
        let long = format!("<div>{}</div>", "x".repeat(200));
        let short = short_code(&long);
        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), 103);
        assert!(!short.contains('<'));

        let tiny = short_code("<b>hi</b>");
        assert_eq!(tiny, "&lt;b&gt;hi&lt;/b&gt;");
    }
}
