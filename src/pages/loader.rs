use dioxus::prelude::*;
use serde_json::Value;

use super::{
    CheckField, CodePanel, ColorField, ControlGroup, PageHeader, RangeField, SelectField,
    TextField,
};
use super::{PAGE_STYLE, PANEL_STYLE};
use crate::config::loader::LoaderType;
use crate::config::{LabelPosition, LoaderSettings, WidgetKind, fmt_num};

#[component]
pub fn LoaderPage() -> Element {
    let mut settings = use_signal(LoaderSettings::default);

    let current = settings.read().clone();
    let markup = current.project();
    let snapshot = serde_json::to_value(&current).unwrap_or(Value::Null);

    let type_selected = current.loader_type.name();
    let label_position = current.label_position.name();
    let duration_readout = fmt_num(current.duration);
    let type_options = LoaderType::ALL
        .iter()
        .map(|t| (t.name().to_string(), t.name().to_string()))
        .collect::<Vec<_>>();

    rsx! {
        div {
            style: "{PAGE_STYLE}",
            PageHeader {
                title: "Loader",
                subtitle: "Spinner, dots, pulse, bar, ring",
            }

            div {
                style: "display: grid; grid-template-columns: 340px 1fr; gap: 20px; max-width: 1100px; margin: 0 auto;",

                div {
                    style: "{PANEL_STYLE}",
                    SelectField {
                        label: "Loader Type",
                        options: type_options,
                        selected: "{type_selected}",
                        onchange: move |v: String| {
                            if let Some(t) = LoaderType::from_name(&v) {
                                settings.write().loader_type = t;
                            }
                        },
                    }
                    ColorField {
                        label: "Primary Color",
                        value: "{current.primary_color}",
                        oninput: move |v: String| settings.write().primary_color = v,
                    }
                    ColorField {
                        label: "Secondary Color",
                        value: "{current.secondary_color}",
                        oninput: move |v: String| settings.write().secondary_color = v,
                    }
                    RangeField {
                        label: "Size",
                        min: "16",
                        max: "96",
                        value: "{current.size}",
                        readout: "{current.size}px",
                        oninput: move |v: String| {
                            if let Ok(n) = v.parse() {
                                settings.write().size = n;
                            }
                        },
                    }
                    RangeField {
                        label: "Animation Duration",
                        min: "0.2",
                        max: "4",
                        step: "0.1",
                        value: "{current.duration}",
                        readout: "{duration_readout}s",
                        oninput: move |v: String| {
                            if let Ok(n) = v.parse() {
                                settings.write().duration = n;
                            }
                        },
                    }
                    ControlGroup {
                        visible: current.loader_type.uses_thickness(),
                        RangeField {
                            label: "Thickness",
                            min: "1",
                            max: "10",
                            value: "{current.thickness}",
                            readout: "{current.thickness}px",
                            oninput: move |v: String| {
                                if let Ok(n) = v.parse() {
                                    settings.write().thickness = n;
                                }
                            },
                        }
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
                                ("bottom".into(), "Bottom".into()),
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
                }

                CodePanel {
                    kind: WidgetKind::Loader,
                    markup,
                    settings: snapshot,
                }
            }
        }
    }
}
