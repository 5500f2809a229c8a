use dioxus::prelude::*;
use serde_json::Value;

use super::{CodePanel, ColorField, PageHeader, RangeField, SelectField, TextField};
use super::{PAGE_STYLE, PANEL_STYLE};
use crate::config::button::HoverEffect;
use crate::config::{ButtonSettings, WidgetKind};

#[component]
pub fn ButtonPage() -> Element {
    let mut settings = use_signal(ButtonSettings::default);

    let current = settings.read().clone();
    let markup = current.project();
    let snapshot = serde_json::to_value(&current).unwrap_or(Value::Null);

    let hover_selected = current.hover_effect.name();
    let hover_options = HoverEffect::ALL
        .iter()
        .map(|e| (e.name().to_string(), e.name().to_string()))
        .collect::<Vec<_>>();

    rsx! {
        div {
            style: "{PAGE_STYLE}",
            PageHeader {
                title: "Button",
                subtitle: "Colors, borders, hover effects",
            }

            div {
                style: "display: grid; grid-template-columns: 340px 1fr; gap: 20px; max-width: 1100px; margin: 0 auto;",

                div {
                    style: "{PANEL_STYLE}",
                    TextField {
                        label: "Button Text",
                        value: "{current.text}",
                        oninput: move |v: String| settings.write().text = v,
                    }
                    TextField {
                        label: "Title Attribute",
                        value: "{current.title}",
                        oninput: move |v: String| settings.write().title = v,
                    }
                    ColorField {
                        label: "Background Color",
                        value: "{current.color}",
                        oninput: move |v: String| settings.write().color = v,
                    }
                    ColorField {
                        label: "Text Color",
                        value: "{current.text_color}",
                        oninput: move |v: String| settings.write().text_color = v,
                    }
                    RangeField {
                        label: "Padding",
                        min: "2",
                        max: "24",
                        value: "{current.padding}",
                        readout: "{current.padding}px",
                        oninput: move |v: String| {
                            if let Ok(n) = v.parse() {
                                settings.write().padding = n;
                            }
                        },
                    }
                    RangeField {
                        label: "Border Radius",
                        min: "0",
                        max: "32",
                        value: "{current.border_radius}",
                        readout: "{current.border_radius}px",
                        oninput: move |v: String| {
                            if let Ok(n) = v.parse() {
                                settings.write().border_radius = n;
                            }
                        },
                    }
                    RangeField {
                        label: "Border Width",
                        min: "0",
                        max: "8",
                        value: "{current.border_width}",
                        readout: "{current.border_width}px",
                        oninput: move |v: String| {
                            if let Ok(n) = v.parse() {
                                settings.write().border_width = n;
                            }
                        },
                    }
                    ColorField {
                        label: "Border Color",
                        value: "{current.border_color}",
                        oninput: move |v: String| settings.write().border_color = v,
                    }
                    SelectField {
                        label: "Hover Effect",
                        options: hover_options,
                        selected: "{hover_selected}",
                        onchange: move |v: String| {
                            if let Some(effect) = HoverEffect::from_name(&v) {
                                settings.write().hover_effect = effect;
                            }
                        },
                    }
                    RangeField {
                        label: "Transition Duration",
                        min: "0",
                        max: "1000",
                        step: "50",
                        value: "{current.transition_duration}",
                        readout: "{current.transition_duration}ms",
                        oninput: move |v: String| {
                            if let Ok(n) = v.parse() {
                                settings.write().transition_duration = n;
                            }
                        },
                    }
                }

                CodePanel {
                    kind: WidgetKind::Button,
                    markup,
                    settings: snapshot,
                }
            }
        }
    }
}
