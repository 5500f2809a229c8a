use dioxus::prelude::*;
use serde_json::Value;

use super::{
    CheckField, CodePanel, ColorField, ControlGroup, PageHeader, RadioField, SelectField,
    TextField,
};
use super::{PAGE_STYLE, PANEL_STYLE};
use crate::config::card::ImagePosition;
use crate::config::{CardSettings, WidgetKind};

fn token_options(tokens: &[(&str, &str)]) -> Vec<(String, String)> {
    tokens
        .iter()
        .map(|(value, text)| (value.to_string(), text.to_string()))
        .collect()
}

#[component]
pub fn CardPage() -> Element {
    let mut settings = use_signal(CardSettings::default);

    let current = settings.read().clone();
    let markup = current.project();
    let snapshot = serde_json::to_value(&current).unwrap_or(Value::Null);
    let image_position = current.image_position.name();

    rsx! {
        div {
            style: "{PAGE_STYLE}",
            PageHeader {
                title: "Card",
                subtitle: "Header, image, body, footer blocks",
            }

            div {
                style: "display: grid; grid-template-columns: 340px 1fr; gap: 20px; max-width: 1100px; margin: 0 auto;",

                div {
                    style: "{PANEL_STYLE}",

                    CheckField {
                        label: "Include Header",
                        checked: current.include_header,
                        onchange: move |v| settings.write().include_header = v,
                    }
                    ControlGroup {
                        visible: current.include_header,
                        TextField {
                            label: "Header Title",
                            value: "{current.header_title}",
                            oninput: move |v: String| settings.write().header_title = v,
                        }
                    }

                    CheckField {
                        label: "Include Image",
                        checked: current.include_image,
                        onchange: move |v| settings.write().include_image = v,
                    }
                    ControlGroup {
                        visible: current.include_image,
                        SelectField {
                            label: "Image Height",
                            options: token_options(&[("h-32", "Short"), ("h-48", "Medium"), ("h-64", "Tall")]),
                            selected: "{current.image_height}",
                            onchange: move |v: String| settings.write().image_height = v,
                        }
                        RadioField {
                            label: "Image Position",
                            name: "imagePosition",
                            options: token_options(&[("top", "Top"), ("bottom", "Bottom")]),
                            selected: "{image_position}",
                            onchange: move |v: String| {
                                if let Some(pos) = ImagePosition::from_name(&v) {
                                    settings.write().image_position = pos;
                                }
                            },
                        }
                    }

                    CheckField {
                        label: "Include Body",
                        checked: current.include_body,
                        onchange: move |v| settings.write().include_body = v,
                    }
                    ControlGroup {
                        visible: current.include_body,
                        TextField {
                            label: "Body Text",
                            value: "{current.body_text}",
                            oninput: move |v: String| settings.write().body_text = v,
                        }
                    }

                    CheckField {
                        label: "Include Footer",
                        checked: current.include_footer,
                        onchange: move |v| settings.write().include_footer = v,
                    }
                    ControlGroup {
                        visible: current.include_footer,
                        TextField {
                            label: "Footer Text",
                            value: "{current.footer_text}",
                            oninput: move |v: String| settings.write().footer_text = v,
                        }
                        CheckField {
                            label: "Include Button",
                            checked: current.include_button,
                            onchange: move |v| settings.write().include_button = v,
                        }
                        ControlGroup {
                            visible: current.include_button,
                            TextField {
                                label: "Button Text",
                                value: "{current.button_text}",
                                oninput: move |v: String| settings.write().button_text = v,
                            }
                        }
                    }

                    SelectField {
                        label: "Card Width",
                        options: token_options(&[
                            ("max-w-xs", "Extra small"),
                            ("max-w-sm", "Small"),
                            ("max-w-md", "Medium"),
                            ("max-w-lg", "Large"),
                            ("max-w-xl", "Extra large"),
                        ]),
                        selected: "{current.card_width}",
                        onchange: move |v: String| settings.write().card_width = v,
                    }
                    SelectField {
                        label: "Card Height",
                        options: token_options(&[
                            ("auto", "Auto"),
                            ("h-64", "Short"),
                            ("h-80", "Medium"),
                            ("h-96", "Tall"),
                        ]),
                        selected: "{current.card_height}",
                        onchange: move |v: String| settings.write().card_height = v,
                    }
                    ColorField {
                        label: "Background Color",
                        value: "{current.bg_color}",
                        oninput: move |v: String| settings.write().bg_color = v,
                    }
                    ColorField {
                        label: "Text Color",
                        value: "{current.text_color}",
                        oninput: move |v: String| settings.write().text_color = v,
                    }
                    SelectField {
                        label: "Border Radius",
                        options: token_options(&[
                            ("rounded-none", "None"),
                            ("rounded", "Small"),
                            ("rounded-md", "Medium"),
                            ("rounded-lg", "Large"),
                            ("rounded-xl", "Extra large"),
                        ]),
                        selected: "{current.border_radius}",
                        onchange: move |v: String| settings.write().border_radius = v,
                    }
                    SelectField {
                        label: "Shadow",
                        options: token_options(&[
                            ("shadow-none", "None"),
                            ("shadow-sm", "Small"),
                            ("shadow", "Normal"),
                            ("shadow-md", "Medium"),
                            ("shadow-lg", "Large"),
                        ]),
                        selected: "{current.shadow_size}",
                        onchange: move |v: String| settings.write().shadow_size = v,
                    }
                    SelectField {
                        label: "Border Style",
                        options: token_options(&[
                            ("border", "Thin"),
                            ("border-2", "Medium"),
                            ("border-4", "Thick"),
                            ("border-none", "None"),
                        ]),
                        selected: "{current.border_style}",
                        onchange: move |v: String| settings.write().border_style = v,
                    }
                    ColorField {
                        label: "Border Color",
                        value: "{current.border_color}",
                        oninput: move |v: String| settings.write().border_color = v,
                    }
                }

                CodePanel {
                    kind: WidgetKind::Card,
                    markup,
                    settings: snapshot,
                }
            }
        }
    }
}
