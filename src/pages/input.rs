use dioxus::prelude::*;
use serde_json::Value;

use super::{
    CheckField, CodePanel, ColorField, ControlGroup, PageHeader, SelectField, TextField,
};
use super::{PAGE_STYLE, PANEL_STYLE};
use crate::config::input::{InputSize, InputState, InputType};
use crate::config::{InputIcon, InputSettings, LabelPosition, WidgetKind};

#[component]
pub fn InputPage() -> Element {
    let mut settings = use_signal(InputSettings::default);

    let current = settings.read().clone();
    let markup = current.project();
    let snapshot = serde_json::to_value(&current).unwrap_or(Value::Null);

    let type_selected = current.input_type.name();
    let size_selected = current.input_size.name();
    let state_selected = current.input_state.name();
    let icon_selected = current.right_icon.name();
    let label_position = current.label_position.name();

    let type_options = InputType::ALL
        .iter()
        .map(|t| (t.name().to_string(), t.name().to_string()))
        .collect::<Vec<_>>();
    let size_options = InputSize::ALL
        .iter()
        .map(|s| (s.name().to_string(), s.name().to_string()))
        .collect::<Vec<_>>();
    let state_options = InputState::ALL
        .iter()
        .map(|s| (s.name().to_string(), s.name().to_string()))
        .collect::<Vec<_>>();
    let icon_options = InputIcon::ALL
        .iter()
        .map(|i| (i.name().to_string(), i.name().to_string()))
        .collect::<Vec<_>>();

    rsx! {
        div {
            style: "{PAGE_STYLE}",
            PageHeader {
                title: "Input",
                subtitle: "Label, sizing, focus colors, right icon",
            }

            div {
                style: "display: grid; grid-template-columns: 340px 1fr; gap: 20px; max-width: 1100px; margin: 0 auto;",

                div {
                    style: "{PANEL_STYLE}",
                    SelectField {
                        label: "Input Type",
                        options: type_options,
                        selected: "{type_selected}",
                        onchange: move |v: String| {
                            if let Some(t) = InputType::from_name(&v) {
                                let mut s = settings.write();
                                s.input_type = t;
                                // Password fields pair with a visibility icon
                                if t == InputType::Password
                                    && s.include_right_icon
                                    && !s.right_icon.is_eye_variant()
                                {
                                    s.right_icon = InputIcon::Eye;
                                }
                            }
                        },
                    }
                    TextField {
                        label: "Placeholder",
                        value: "{current.placeholder}",
                        oninput: move |v: String| settings.write().placeholder = v,
                    }
                    TextField {
                        label: "Value",
                        value: "{current.input_value}",
                        oninput: move |v: String| settings.write().input_value = v,
                    }

                    CheckField {
                        label: "Include Label",
                        checked: current.include_label,
                        onchange: move |v| settings.write().include_label = v,
                    }
                    ControlGroup {
                        visible: current.include_label,
                        TextField {
                            label: "Label Text",
                            value: "{current.label_text}",
                            oninput: move |v: String| settings.write().label_text = v,
                        }
                        SelectField {
                            label: "Label Position",
                            options: vec![
                                ("top".into(), "Top".into()),
                                ("left".into(), "Left".into()),
                            ],
                            selected: "{label_position}",
                            onchange: move |v: String| {
                                if let Some(pos) = LabelPosition::from_name(&v) {
                                    settings.write().label_position = pos;
                                }
                            },
                        }
                    }

                    ColorField {
                        label: "Text Color",
                        value: "{current.text_color}",
                        oninput: move |v: String| settings.write().text_color = v,
                    }
                    ColorField {
                        label: "Background Color",
                        value: "{current.bg_color}",
                        oninput: move |v: String| settings.write().bg_color = v,
                    }
                    ColorField {
                        label: "Border Color",
                        value: "{current.border_color}",
                        oninput: move |v: String| settings.write().border_color = v,
                    }
                    ColorField {
                        label: "Focus Color",
                        value: "{current.focus_color}",
                        oninput: move |v: String| settings.write().focus_color = v,
                    }
                    SelectField {
                        label: "Size",
                        options: size_options,
                        selected: "{size_selected}",
                        onchange: move |v: String| {
                            if let Some(size) = InputSize::from_name(&v) {
                                settings.write().input_size = size;
                            }
                        },
                    }
                    SelectField {
                        label: "Border Radius",
                        options: vec![
                            ("rounded-none".into(), "Square".into()),
                            ("rounded".into(), "Slight".into()),
                            ("rounded-md".into(), "Medium".into()),
                            ("rounded-lg".into(), "Large".into()),
                            ("rounded-full".into(), "Pill".into()),
                        ],
                        selected: "{current.border_radius}",
                        onchange: move |v: String| settings.write().border_radius = v,
                    }
                    SelectField {
                        label: "State",
                        options: state_options,
                        selected: "{state_selected}",
                        onchange: move |v: String| {
                            if let Some(state) = InputState::from_name(&v) {
                                settings.write().input_state = state;
                            }
                        },
                    }
                    SelectField {
                        label: "Width",
                        options: vec![
                            ("w-full".into(), "Full".into()),
                            ("w-96".into(), "Wide".into()),
                            ("w-64".into(), "Medium".into()),
                            ("w-48".into(), "Narrow".into()),
                        ],
                        selected: "{current.width}",
                        onchange: move |v: String| settings.write().width = v,
                    }

                    CheckField {
                        label: "Include Right Icon",
                        checked: current.include_right_icon,
                        onchange: move |v| {
                            let mut s = settings.write();
                            s.include_right_icon = v;
                            if v && s.input_type == InputType::Password {
                                s.right_icon = InputIcon::Eye;
                            }
                        },
                    }
                    ControlGroup {
                        visible: current.include_right_icon,
                        SelectField {
                            label: "Icon",
                            options: icon_options,
                            selected: "{icon_selected}",
                            onchange: move |v: String| {
                                if let Some(icon) = InputIcon::from_name(&v) {
                                    settings.write().right_icon = icon;
                                }
                            },
                        }
                    }
                }

                CodePanel {
                    kind: WidgetKind::Input,
                    markup,
                    settings: snapshot,
                }
            }
        }
    }
}
