use dioxus::prelude::*;
use serde_json::Value;

use super::{
    CodePanel, ColorField, PageHeader, RadioField, RangeField, SelectField, TextField,
};
use super::{PAGE_STYLE, PANEL_STYLE};
use crate::config::{LabelPosition, ToggleSettings, WidgetKind};

#[component]
pub fn TogglePage() -> Element {
    let mut settings = use_signal(ToggleSettings::default);

    let current = settings.read().clone();
    let markup = current.project();
    let snapshot = serde_json::to_value(&current).unwrap_or(Value::Null);
    let label_position = current.label_position.name();
    let initial_state = if current.is_on { "true" } else { "false" };

    // Single reactive rule for the thumb color; the value updates in place
    // instead of appending a new style node per edit.
    let thumb_css = format!(
        "#preview-surface .peer ~ div::after {{ background-color: {}; }}",
        current.thumb_color
    );

    rsx! {
        style { "{thumb_css}" }

        div {
            style: "{PAGE_STYLE}",
            PageHeader {
                title: "Toggle",
                subtitle: "Track, thumb, and travel distance",
            }

            div {
                style: "display: grid; grid-template-columns: 340px 1fr; gap: 20px; max-width: 1100px; margin: 0 auto;",

                div {
                    style: "{PANEL_STYLE}",
                    TextField {
                        label: "Label Text",
                        value: "{current.label}",
                        oninput: move |v: String| settings.write().label = v,
                    }
                    TextField {
                        label: "Title Attribute",
                        value: "{current.title}",
                        oninput: move |v: String| settings.write().title = v,
                    }
                    ColorField {
                        label: "On Color",
                        value: "{current.on_color}",
                        oninput: move |v: String| settings.write().on_color = v,
                    }
                    ColorField {
                        label: "Off Color",
                        value: "{current.off_color}",
                        oninput: move |v: String| settings.write().off_color = v,
                    }
                    ColorField {
                        label: "Thumb Color",
                        value: "{current.thumb_color}",
                        oninput: move |v: String| settings.write().thumb_color = v,
                    }
                    ColorField {
                        label: "Label Color",
                        value: "{current.label_color}",
                        oninput: move |v: String| settings.write().label_color = v,
                    }
                    RangeField {
                        label: "Size",
                        min: "20",
                        max: "48",
                        value: "{current.size}",
                        readout: "{current.size}px",
                        oninput: move |v: String| {
                            if let Ok(n) = v.parse() {
                                settings.write().size = n;
                            }
                        },
                    }
                    SelectField {
                        label: "Corner Radius",
                        options: vec![
                            ("rounded-full".into(), "Pill".into()),
                            ("rounded-lg".into(), "Soft".into()),
                            ("rounded-md".into(), "Medium".into()),
                            ("rounded".into(), "Slight".into()),
                        ],
                        selected: "{current.radius}",
                        onchange: move |v: String| settings.write().radius = v,
                    }
                    SelectField {
                        label: "Initial State",
                        options: vec![
                            ("false".into(), "Off".into()),
                            ("true".into(), "On".into()),
                        ],
                        selected: "{initial_state}",
                        onchange: move |v: String| settings.write().is_on = v == "true",
                    }
                    RangeField {
                        label: "Transition Duration",
                        min: "0",
                        max: "1000",
                        step: "50",
                        value: "{current.duration}",
                        readout: "{current.duration}ms",
                        oninput: move |v: String| {
                            if let Ok(n) = v.parse() {
                                settings.write().duration = n;
                            }
                        },
                    }
                    RadioField {
                        label: "Label Position",
                        name: "labelPosition",
                        options: vec![
                            ("left".into(), "Left".into()),
                            ("right".into(), "Right".into()),
                        ],
                        selected: "{label_position}",
                        onchange: move |v: String| {
                            if let Some(pos) = LabelPosition::from_name(&v) {
                                settings.write().label_position = pos;
                            }
                        },
                    }
                }

                CodePanel {
                    kind: WidgetKind::Toggle,
                    markup,
                    settings: snapshot,
                    on_preview_click: move |_| {
                        let on = settings.read().is_on;
                        settings.write().is_on = !on;
                    },
                }
            }
        }
    }
}
