//! Core configurator model - settings records, derived values, and the
//! markup projection for each widget kind.
//!
//! Every widget kind follows the same shape: a flat settings struct with
//! defaults, and a pure `project()` that turns the settings into the HTML
//! snippet shown in the code panel. The preview injects the exact same
//! string, so the two can never disagree.

pub mod button;
pub mod card;
pub mod checkbox;
pub mod escape;
pub mod geometry;
pub mod icons;
pub mod input;
pub mod loader;
pub mod toggle;

pub use button::ButtonSettings;
pub use card::CardSettings;
pub use checkbox::CheckboxSettings;
pub use escape::escape_html;
pub use geometry::{CheckMark, ToggleGeometry};
pub use icons::InputIcon;
pub use input::InputSettings;
pub use loader::LoaderSettings;
pub use toggle::ToggleSettings;

use std::fmt;

/// The closed set of configurable widget kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Button,
    Card,
    Checkbox,
    Input,
    Loader,
    Toggle,
}

impl WidgetKind {
    pub const ALL: &[Self] = &[
        Self::Button,
        Self::Card,
        Self::Checkbox,
        Self::Input,
        Self::Loader,
        Self::Toggle,
    ];

    /// Storage tag, also used in history badges
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Card => "card",
            Self::Checkbox => "checkbox",
            Self::Input => "input",
            Self::Loader => "loader",
            Self::Toggle => "toggle",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Card => "Card",
            Self::Checkbox => "Checkbox",
            Self::Input => "Input",
            Self::Loader => "Loader",
            Self::Toggle => "Toggle",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.tag() == tag)
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Placement of an optional text label around a widget. Each configurator
/// offers the subset that makes sense for its layout (checkbox/toggle:
/// left/right, input: top/left, loader: all four).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl LabelPosition {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Render a derived numeric value the way it appears in class tokens:
/// rounded to two decimals, no trailing zeros (51.8, 24, 23.8).
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tag_roundtrip() {
        for kind in WidgetKind::ALL {
            assert_eq!(WidgetKind::from_tag(kind.tag()), Some(*kind));
        }
        assert_eq!(WidgetKind::from_tag("navbar"), None);
    }

    #[test]
    fn fmt_num_trims_noise() {
        assert_eq!(fmt_num(28.0 * 1.85), "51.8");
        assert_eq!(fmt_num(24.0), "24");
        assert_eq!(fmt_num(6.25), "6.25");
        assert_eq!(fmt_num(0.30000000000000004), "0.3");
    }
}
