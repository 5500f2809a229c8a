//! Card configurator core
//!
//! The card is the only widget with nested optional blocks. Composition
//! order is fixed: image (top) -> header -> body -> image (bottom) ->
//! footer with optional action button.

use serde::Serialize;

/// Where the image block sits relative to the text blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Top,
    Bottom,
}

impl ImagePosition {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// Width, height, radius, shadow, border-style and image-height fields hold
/// utility tokens straight from the form selects (`max-w-md`, `shadow-lg`,
/// `border-none`, ...). They pass through unchanged except for the
/// border-style check that drops the header/footer dividers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSettings {
    pub include_header: bool,
    pub include_image: bool,
    pub include_body: bool,
    pub include_footer: bool,
    pub card_width: String,
    pub card_height: String,
    pub bg_color: String,
    pub text_color: String,
    pub border_radius: String,
    pub shadow_size: String,
    pub border_style: String,
    pub border_color: String,
    pub header_title: String,
    pub image_height: String,
    pub image_position: ImagePosition,
    pub body_text: String,
    pub footer_text: String,
    pub include_button: bool,
    pub button_text: String,
}

impl Default for CardSettings {
    fn default() -> Self {
        Self {
            include_header: true,
            include_image: true,
            include_body: true,
            include_footer: false,
            card_width: "max-w-md".into(),
            card_height: "auto".into(),
            bg_color: "#1F2937".into(),
            text_color: "#FFFFFF".into(),
            border_radius: "rounded-md".into(),
            shadow_size: "shadow".into(),
            border_style: "border".into(),
            border_color: "#374151".into(),
            header_title: "Card Title".into(),
            image_height: "h-48".into(),
            image_position: ImagePosition::Top,
            body_text: "This is a sample card with customizable options. You can adjust \
                        various settings to create the perfect card for your project."
                .into(),
            footer_text: "Card Footer".into(),
            include_button: true,
            button_text: "Learn More".into(),
        }
    }
}

impl CardSettings {
    fn has_divider(&self) -> bool {
        self.border_style != "border-none"
    }

    fn divider(&self, side: &str) -> String {
        if self.has_divider() {
            format!("border-{side} border-[{}]", self.border_color)
        } else {
            String::new()
        }
    }

    fn image_block(&self) -> String {
        format!(
            "\n    <div class=\"{} bg-gray-500\"></div>",
            self.image_height
        )
    }

    /// Project the settings into the pasteable snippet
    pub fn project(&self) -> String {
        let height = if self.card_height != "auto" {
            self.card_height.as_str()
        } else {
            ""
        };

        let mut html = format!(
            "<div class=\"{} {} overflow-hidden {} {} {} border-[{}] bg-[{}]\">",
            self.card_width,
            height,
            self.border_radius,
            self.shadow_size,
            self.border_style,
            self.border_color,
            self.bg_color,
        );

        if self.include_image && self.image_position == ImagePosition::Top {
            html += &self.image_block();
        }

        if self.include_header {
            html += &format!(
                "\n    <div class=\"px-6 py-4 {}\">\n        <h3 class=\"text-lg font-medium text-[{}]\">{}</h3>\n    </div>",
                self.divider("b"),
                self.text_color,
                self.header_title,
            );
        }

        if self.include_body {
            html += &format!(
                "\n    <div class=\"px-6 py-4\">\n        <p class=\"text-[{}]\">{}</p>\n    </div>",
                self.text_color, self.body_text,
            );
        }

        if self.include_image && self.image_position == ImagePosition::Bottom {
            html += &self.image_block();
        }

        if self.include_footer {
            html += &format!(
                "\n    <div class=\"px-6 py-4 {}\">\n        <div class=\"flex items-center justify-between\">\n            <span class=\"text-sm text-[{}]\">{}</span>",
                self.divider("t"),
                self.text_color,
                self.footer_text,
            );

            if self.include_button {
                html += &format!(
                    "\n            <button class=\"px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 transition duration-200\">{}</button>",
                    self.button_text,
                );
            }

            html += "\n        </div>\n    </div>";
        }

        html += "\n</div>";
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn everything_on() -> CardSettings {
        CardSettings {
            include_header: true,
            include_image: true,
            include_body: true,
            include_footer: true,
            include_button: true,
            ..Default::default()
        }
    }

    #[test]
    fn projection_is_deterministic() {
        let settings = everything_on();
        assert_eq!(settings.project(), settings.project());
    }

    #[test]
    fn full_card_block_order() {
        let html = everything_on().project();
        let image = html.find("bg-gray-500").unwrap();
        let header = html.find("Card Title").unwrap();
        let body = html.find("sample card").unwrap();
        let footer = html.find("Card Footer").unwrap();
        let button = html.find("Learn More").unwrap();
        assert!(image < header && header < body && body < footer && footer < button);
    }

    #[test]
    fn image_moves_below_body() {
        let settings = CardSettings {
            image_position: ImagePosition::Bottom,
            ..everything_on()
        };
        let html = settings.project();
        let image = html.find("bg-gray-500").unwrap();
        let body = html.find("sample card").unwrap();
        let footer = html.find("Card Footer").unwrap();
        assert!(body < image && image < footer);
    }

    #[test]
    fn flags_gate_blocks() {
        let settings = CardSettings {
            include_header: false,
            include_image: false,
            include_footer: false,
            ..CardSettings::default()
        };
        let html = settings.project();
        assert!(!html.contains("bg-gray-500"));
        assert!(!html.contains("<h3"));
        assert!(!html.contains("<button"));
        assert!(html.contains("sample card"));
    }

    #[test]
    fn borderless_card_drops_dividers() {
        let settings = CardSettings {
            border_style: "border-none".into(),
            include_footer: true,
            ..everything_on()
        };
        let html = settings.project();
        assert!(!html.contains("border-b"));
        assert!(!html.contains("border-t"));
    }

    #[test]
    fn footer_without_button() {
        let settings = CardSettings {
            include_button: false,
            ..everything_on()
        };
        assert!(!settings.project().contains("<button"));
    }
}
