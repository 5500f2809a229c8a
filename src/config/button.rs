//! Button configurator core

use serde::Serialize;

/// Hover effect applied to the generated button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverEffect {
    None,
    Darken,
    Lighten,
    Scale,
}

impl HoverEffect {
    pub const ALL: &[Self] = &[Self::None, Self::Darken, Self::Lighten, Self::Scale];

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::Scale => "scale",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.name() == name)
    }

    /// Class tokens appended when the effect is active
    fn classes(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Darken => " hover:brightness-80",
            Self::Lighten => " hover:brightness-140",
            Self::Scale => " hover:scale-105 transform",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSettings {
    pub text: String,
    pub title: String,
    pub text_color: String,
    pub color: String,
    pub border_radius: u32,
    pub padding: u32,
    pub hover_effect: HoverEffect,
    pub transition_duration: u32,
    pub border_color: String,
    pub border_width: u32,
}

impl Default for ButtonSettings {
    fn default() -> Self {
        Self {
            text: "Button".into(),
            title: "Button Component".into(),
            text_color: "#ffffff".into(),
            color: "#2563EB".into(),
            border_radius: 0,
            padding: 8,
            hover_effect: HoverEffect::None,
            transition_duration: 300,
            border_color: "#2563EB".into(),
            border_width: 2,
        }
    }
}

impl ButtonSettings {
    /// Full utility-class list for the button element, in fixed order:
    /// padding/colors, border, radius, hover, transition.
    fn class_list(&self) -> String {
        let mut classes = format!(
            "px-{} py-{} bg-[{}] text-[{}]",
            self.padding * 2,
            self.padding,
            self.color,
            self.text_color,
        );

        if self.border_width > 0 {
            classes += &format!(
                " border-[{}px] border-[{}]",
                self.border_width, self.border_color
            );
        }

        if self.border_radius != 0 {
            classes += &format!(" rounded-[{}px]", self.border_radius);
        } else {
            classes += " rounded";
        }

        classes += self.hover_effect.classes();
        classes += &format!(" transition duration-[{}ms]", self.transition_duration);
        classes
    }

    /// Project the settings into the pasteable snippet
    pub fn project(&self) -> String {
        let title_attr = if self.title.is_empty() {
            String::new()
        } else {
            format!(" title=\"{}\"", self.title)
        };
        let text = if self.text.is_empty() { "Button" } else { &self.text };

        format!(
            "<button class=\"{}\"{}>\n    {}\n</button>",
            self.class_list(),
            title_attr,
            text,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_is_deterministic() {
        let settings = ButtonSettings::default();
        assert_eq!(settings.project(), settings.project());
    }

    #[test]
    fn borderless_flat_button() {
        let settings = ButtonSettings {
            padding: 8,
            color: "#2563EB".into(),
            border_width: 0,
            hover_effect: HoverEffect::None,
            ..Default::default()
        };
        let html = settings.project();
        assert!(html.contains("px-16 py-8 bg-[#2563EB]"));
        assert!(!html.contains("border-"));
        assert!(html.contains(" rounded "));
    }

    #[test]
    fn border_and_radius_tokens() {
        let settings = ButtonSettings {
            border_width: 3,
            border_color: "#FF0000".into(),
            border_radius: 12,
            ..Default::default()
        };
        let html = settings.project();
        assert!(html.contains("border-[3px] border-[#FF0000]"));
        assert!(html.contains("rounded-[12px]"));
    }

    #[test]
    fn hover_effects_map_to_classes() {
        let scale = ButtonSettings {
            hover_effect: HoverEffect::Scale,
            ..Default::default()
        };
        assert!(scale.project().contains("hover:scale-105 transform"));

        let darken = ButtonSettings {
            hover_effect: HoverEffect::Darken,
            ..Default::default()
        };
        assert!(darken.project().contains("hover:brightness-80"));
    }

    #[test]
    fn empty_text_falls_back() {
        let settings = ButtonSettings {
            text: String::new(),
            title: String::new(),
            ..Default::default()
        };
        let html = settings.project();
        assert!(html.contains("    Button\n"));
        assert!(!html.contains("title="));
    }
}
