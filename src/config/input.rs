//! Text input configurator core
//!
//! Optional label (above or beside), optional right icon from the closed
//! glyph set, and a disabled/readonly state that contributes both classes
//! and attributes.

use serde::Serialize;

use super::LabelPosition;
use super::icons::InputIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Password,
    Email,
    Number,
    Tel,
    Url,
}

impl InputType {
    pub const ALL: &[Self] = &[
        Self::Text,
        Self::Password,
        Self::Email,
        Self::Number,
        Self::Tel,
        Self::Url,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }
}

/// Padding/text-size tier, with a matching icon box size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    Sm,
    Md,
    Lg,
}

impl InputSize {
    pub const ALL: &[Self] = &[Self::Sm, Self::Md, Self::Lg];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    fn input_classes(&self) -> &'static str {
        match self {
            Self::Sm => "px-2 py-1 text-xs",
            Self::Md => "px-2.5 py-2 text-sm",
            Self::Lg => "px-3 py-3 text-base",
        }
    }

    fn icon_classes(&self) -> &'static str {
        match self {
            Self::Sm => "h-4 w-4",
            Self::Md => "h-5 w-5",
            Self::Lg => "h-6 w-6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputState {
    Default,
    Disabled,
    Readonly,
}

impl InputState {
    pub const ALL: &[Self] = &[Self::Default, Self::Disabled, Self::Readonly];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Disabled => "disabled",
            Self::Readonly => "readonly",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    fn classes(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Disabled => " opacity-70 cursor-not-allowed",
            Self::Readonly => " cursor-default",
        }
    }

    fn attribute(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Disabled => " disabled",
            Self::Readonly => " readonly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSettings {
    pub input_type: InputType,
    pub placeholder: String,
    pub input_value: String,
    pub include_label: bool,
    pub label_text: String,
    pub label_position: LabelPosition,
    pub text_color: String,
    pub bg_color: String,
    pub border_color: String,
    pub focus_color: String,
    pub input_size: InputSize,
    pub border_radius: String,
    pub input_state: InputState,
    pub width: String,
    pub include_right_icon: bool,
    pub right_icon: InputIcon,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            input_type: InputType::Text,
            placeholder: "Enter text here...".into(),
            input_value: String::new(),
            include_label: true,
            label_text: "Input Label".into(),
            label_position: LabelPosition::Top,
            text_color: "#FFFFFF".into(),
            bg_color: "#111827".into(),
            border_color: "#4B5563".into(),
            focus_color: "#3B82F6".into(),
            input_size: InputSize::Md,
            border_radius: "rounded-md".into(),
            input_state: InputState::Default,
            width: "w-full".into(),
            include_right_icon: false,
            right_icon: InputIcon::Check,
        }
    }
}

impl InputSettings {
    /// Password fields get an interactive visibility toggle when paired
    /// with an eye icon; any other icon stays decorative.
    fn icon_is_interactive(&self) -> bool {
        self.input_type == InputType::Password && self.right_icon.is_eye_variant()
    }

    fn input_classes(&self) -> String {
        let mut classes = format!(
            "{} border {} {}",
            self.border_radius,
            self.input_size.input_classes(),
            self.width,
        );
        if self.include_right_icon {
            classes += " pr-10";
        }
        classes += &format!(
            " border-[{}] focus:border-[{}] focus:ring-[{}]/20",
            self.border_color, self.focus_color, self.focus_color
        );
        classes += self.input_state.classes();
        classes
    }

    /// Project the settings into the pasteable snippet
    pub fn project(&self) -> String {
        let label_left = self.include_label && self.label_position == LabelPosition::Left;
        let mut html = if label_left {
            String::from("<div class=\"flex items-center gap-4\">\n")
        } else {
            String::from("<div>\n")
        };

        if self.include_label {
            match self.label_position {
                LabelPosition::Top => {
                    html += &format!(
                        "    <label for=\"input\" class=\"block mb-2 text-sm font-medium text-[{}]\">{}</label>\n",
                        self.text_color, self.label_text
                    );
                }
                LabelPosition::Left => {
                    html += &format!(
                        "    <label for=\"input\" class=\"text-sm font-medium whitespace-nowrap text-[{}]\">{}</label>\n",
                        self.text_color, self.label_text
                    );
                }
                _ => {}
            }
        }

        if self.include_right_icon {
            html += &format!("    <div class=\"relative {}\">\n", self.width);
        }

        let placeholder_attr = format!(" placeholder=\"{}\"", self.placeholder);
        let value_attr = if self.input_value.is_empty() {
            String::new()
        } else {
            format!(" value=\"{}\"", self.input_value)
        };
        let indent = if self.include_right_icon { "        " } else { "    " };
        html += &format!(
            "{indent}<input type=\"{}\" id=\"input\" class=\"{} bg-[{}] text-[{}] focus:outline-none focus:ring-2\"{placeholder_attr}{value_attr}{}>\n",
            self.input_type.name(),
            self.input_classes(),
            self.bg_color,
            self.text_color,
            self.input_state.attribute(),
        );

        if self.include_right_icon {
            let pointer_class = if self.icon_is_interactive() {
                "cursor-pointer"
            } else {
                "pointer-events-none"
            };
            html += &format!(
                "        <div class=\"absolute inset-y-0 right-0 flex items-center pr-3 {pointer_class}\">\n            \
                 <svg xmlns=\"http://www.w3.org/2000/svg\" class=\"{} text-gray-400\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\">\n                {}\n            \
                 </svg>\n        </div>\n    </div>\n",
                self.input_size.icon_classes(),
                self.right_icon.path_markup(),
            );
        }

        html += "</div>";
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_is_deterministic() {
        let settings = InputSettings::default();
        assert_eq!(settings.project(), settings.project());
    }

    #[test]
    fn default_has_top_label_and_no_icon() {
        let html = InputSettings::default().project();
        assert!(html.starts_with("<div>\n"));
        assert!(html.contains("block mb-2 text-sm font-medium"));
        assert!(!html.contains("<svg"));
        assert!(!html.contains("pr-10"));
    }

    #[test]
    fn left_label_switches_container_layout() {
        let settings = InputSettings {
            label_position: LabelPosition::Left,
            ..Default::default()
        };
        let html = settings.project();
        assert!(html.starts_with("<div class=\"flex items-center gap-4\">"));
        assert!(html.contains("whitespace-nowrap"));
    }

    #[test]
    fn icon_adds_wrapper_padding_and_glyph() {
        let settings = InputSettings {
            include_right_icon: true,
            right_icon: InputIcon::Search,
            ..Default::default()
        };
        let html = settings.project();
        assert!(html.contains("relative w-full"));
        assert!(html.contains(" pr-10"));
        assert!(html.contains("pointer-events-none"));
        assert!(html.contains(InputIcon::Search.path_markup()));
    }

    #[test]
    fn password_eye_icon_is_interactive() {
        let settings = InputSettings {
            input_type: InputType::Password,
            include_right_icon: true,
            right_icon: InputIcon::Eye,
            ..Default::default()
        };
        let html = settings.project();
        assert!(html.contains("cursor-pointer"));
        assert!(!html.contains("pointer-events-none"));
    }

    #[test]
    fn disabled_state_folds_classes_and_attribute() {
        let settings = InputSettings {
            input_state: InputState::Disabled,
            ..Default::default()
        };
        let html = settings.project();
        assert!(html.contains("opacity-70 cursor-not-allowed"));
        assert!(html.contains(" disabled>"));
        // exactly one class attribute on the input
        let input_line = html.lines().find(|l| l.contains("<input")).unwrap();
        assert_eq!(input_line.matches("class=").count(), 1);
    }

    #[test]
    fn value_attribute_only_when_set() {
        let without = InputSettings::default().project();
        assert!(!without.contains(" value="));

        let with = InputSettings {
            input_value: "hello".into(),
            ..Default::default()
        }
        .project();
        assert!(with.contains(" value=\"hello\""));
    }

    #[test]
    fn focus_ring_uses_focus_color() {
        let html = InputSettings::default().project();
        assert!(html.contains("focus:border-[#3B82F6] focus:ring-[#3B82F6]/20"));
    }
}
