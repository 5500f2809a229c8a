//! Reusable labelled form controls for the configurator pages
//!
//! Controls forward raw string values; each page parses numerics in its
//! own handler, so coercion happens in exactly one place per field.

use dioxus::prelude::*;

const LABEL_STYLE: &str = "display: block; color: #9ca3af; font-size: 13px; margin-bottom: 6px;";
const FIELD_WRAP_STYLE: &str = "margin-bottom: 14px;";
const TEXT_INPUT_STYLE: &str = "width: 100%; padding: 8px 10px; background: #0f0f1a; border: 1px solid #2a2a4a; border-radius: 6px; color: #e5e7eb; font-size: 14px; box-sizing: border-box;";
const SELECT_STYLE: &str = "width: 100%; padding: 8px 10px; background: #0f0f1a; border: 1px solid #2a2a4a; border-radius: 6px; color: #e5e7eb; font-size: 14px;";

/// Collapsible group of dependent options, hidden while its flag is off
#[component]
pub fn ControlGroup(visible: bool, children: Element) -> Element {
    if !visible {
        return rsx! {};
    }
    rsx! {
        div {
            style: "margin: 0 0 14px 12px; padding-left: 12px; border-left: 2px solid #2a2a4a;",
            {children}
        }
    }
}

#[component]
pub fn TextField(label: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div {
            style: "{FIELD_WRAP_STYLE}",
            label { style: "{LABEL_STYLE}", "{label}" }
            input {
                r#type: "text",
                value: "{value}",
                style: "{TEXT_INPUT_STYLE}",
                oninput: move |e: Event<FormData>| oninput(e.value()),
            }
        }
    }
}

/// Color picker with a hex readout beside it
#[component]
pub fn ColorField(label: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div {
            style: "{FIELD_WRAP_STYLE}",
            label { style: "{LABEL_STYLE}", "{label}" }
            div {
                style: "display: flex; gap: 10px; align-items: center;",
                input {
                    r#type: "color",
                    value: "{value}",
                    style: "width: 42px; height: 30px; padding: 0; border: 1px solid #2a2a4a; border-radius: 6px; background: #0f0f1a; cursor: pointer;",
                    oninput: move |e: Event<FormData>| oninput(e.value()),
                }
                span {
                    style: "color: #6b7280; font-size: 13px; font-family: monospace;",
                    "{value}"
                }
            }
        }
    }
}

/// Range slider with a unit readout (e.g. "20px", "1.5s")
#[component]
pub fn RangeField(
    label: String,
    min: String,
    max: String,
    #[props(default = String::from("1"))] step: String,
    value: String,
    readout: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            style: "{FIELD_WRAP_STYLE}",
            label { style: "{LABEL_STYLE}", "{label}" }
            div {
                style: "display: flex; gap: 10px; align-items: center;",
                input {
                    r#type: "range",
                    min: "{min}",
                    max: "{max}",
                    step: "{step}",
                    value: "{value}",
                    style: "flex: 1; accent-color: #3b82f6;",
                    oninput: move |e: Event<FormData>| oninput(e.value()),
                }
                span {
                    style: "color: #6b7280; font-size: 13px; font-family: monospace; min-width: 48px; text-align: right;",
                    "{readout}"
                }
            }
        }
    }
}

/// Dropdown over (value, label) pairs
#[component]
pub fn SelectField(
    label: String,
    options: Vec<(String, String)>,
    selected: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            style: "{FIELD_WRAP_STYLE}",
            label { style: "{LABEL_STYLE}", "{label}" }
            select {
                style: "{SELECT_STYLE}",
                onchange: move |e: Event<FormData>| onchange(e.value()),
                for (value, text) in options {
                    option {
                        value: "{value}",
                        selected: value == selected,
                        "{text}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn CheckField(label: String, checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        div {
            style: "{FIELD_WRAP_STYLE}",
            label {
                style: "display: flex; gap: 8px; align-items: center; color: #e5e7eb; font-size: 14px; cursor: pointer;",
                input {
                    r#type: "checkbox",
                    checked: "{checked}",
                    style: "accent-color: #3b82f6;",
                    onchange: move |e: Event<FormData>| onchange(e.checked()),
                }
                "{label}"
            }
        }
    }
}

/// Radio group laid out in a row
#[component]
pub fn RadioField(
    label: String,
    name: String,
    options: Vec<(String, String)>,
    selected: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            style: "{FIELD_WRAP_STYLE}",
            label { style: "{LABEL_STYLE}", "{label}" }
            div {
                style: "display: flex; gap: 16px;",
                for (value, text) in options {
                    label {
                        style: "display: flex; gap: 6px; align-items: center; color: #e5e7eb; font-size: 14px; cursor: pointer;",
                        input {
                            r#type: "radio",
                            name: "{name}",
                            value: "{value}",
                            checked: value == selected,
                            style: "accent-color: #3b82f6;",
                            onchange: {
                                let value = value.clone();
                                move |_| onchange(value.clone())
                            },
                        }
                        "{text}"
                    }
                }
            }
        }
    }
}
