use dioxus::prelude::*;
use serde_json::Value;

use super::{
    CodePanel, ColorField, PageHeader, RadioField, RangeField, SelectField, TextField,
};
use super::{PAGE_STYLE, PANEL_STYLE};
use crate::config::{CheckboxSettings, LabelPosition, WidgetKind};

#[component]
pub fn CheckboxPage() -> Element {
    let mut settings = use_signal(CheckboxSettings::default);

    let current = settings.read().clone();
    let markup = current.project();
    let snapshot = serde_json::to_value(&current).unwrap_or(Value::Null);
    let label_position = current.label_position.name();
    let initial_state = if current.is_checked { "true" } else { "false" };

    rsx! {
        div {
            style: "{PAGE_STYLE}",
            PageHeader {
                title: "Checkbox",
                subtitle: "Peer-styled box with a centered check",
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
                        label: "Checked Color",
                        value: "{current.checked_color}",
                        oninput: move |v: String| settings.write().checked_color = v,
                    }
                    ColorField {
                        label: "Unchecked Color",
                        value: "{current.unchecked_color}",
                        oninput: move |v: String| settings.write().unchecked_color = v,
                    }
                    ColorField {
                        label: "Check Color",
                        value: "{current.check_color}",
                        oninput: move |v: String| settings.write().check_color = v,
                    }
                    ColorField {
                        label: "Label Color",
                        value: "{current.label_color}",
                        oninput: move |v: String| settings.write().label_color = v,
                    }
                    RangeField {
                        label: "Size",
                        min: "14",
                        max: "40",
                        value: "{current.size}",
                        readout: "{current.size}px",
                        oninput: move |v: String| {
                            if let Ok(n) = v.parse() {
                                settings.write().size = n;
                            }
                        },
                    }
                    SelectField {
                        label: "Border Radius",
                        options: vec![
                            ("rounded-none".into(), "Square".into()),
                            ("rounded".into(), "Slight".into()),
                            ("rounded-md".into(), "Medium".into()),
                            ("rounded-full".into(), "Round".into()),
                        ],
                        selected: "{current.border_radius}",
                        onchange: move |v: String| settings.write().border_radius = v,
                    }
                    SelectField {
                        label: "Border Style",
                        options: vec![
                            ("border".into(), "Thin".into()),
                            ("border-2".into(), "Medium".into()),
                            ("border-4".into(), "Thick".into()),
                        ],
                        selected: "{current.border_style}",
                        onchange: move |v: String| settings.write().border_style = v,
                    }
                    SelectField {
                        label: "Initial State",
                        options: vec![
                            ("false".into(), "Unchecked".into()),
                            ("true".into(), "Checked".into()),
                        ],
                        selected: "{initial_state}",
                        onchange: move |v: String| settings.write().is_checked = v == "true",
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
                    kind: WidgetKind::Checkbox,
                    markup,
                    settings: snapshot,
                    on_preview_click: move |_| {
                        let checked = settings.read().is_checked;
                        settings.write().is_checked = !checked;
                    },
                }
            }
        }
    }
}
