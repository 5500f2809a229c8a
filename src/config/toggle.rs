//! Toggle switch configurator core
//!
//! Same peer-class pattern as the checkbox, but the visual is a single
//! track div whose `after:` pseudo-element is the thumb. Track width,
//! thumb size and travel distance all derive from the base height.

use serde::Serialize;

use super::geometry::ToggleGeometry;
use super::{LabelPosition, fmt_num};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleSettings {
    pub label: String,
    pub title: String,
    pub on_color: String,
    pub off_color: String,
    pub thumb_color: String,
    pub label_color: String,
    pub size: i32,
    pub radius: String,
    pub is_on: bool,
    pub duration: u32,
    pub label_position: LabelPosition,
}

impl Default for ToggleSettings {
    fn default() -> Self {
        Self {
            label: "Toggle".into(),
            title: "Toggle switch".into(),
            on_color: "#2563EB".into(),
            off_color: "#374151".into(),
            thumb_color: "#FFFFFF".into(),
            label_color: "#FFFFFF".into(),
            size: 28,
            radius: "rounded-full".into(),
            is_on: false,
            duration: 300,
            label_position: LabelPosition::Left,
        }
    }
}

impl ToggleSettings {
    fn label_html(&self) -> String {
        let margin = match self.label_position {
            LabelPosition::Left => "mr-3",
            LabelPosition::Right => "ml-3",
            _ => return String::new(),
        };
        format!(
            "\n    <span class=\"{} text-[{}]\">{}</span>",
            margin, self.label_color, self.label
        )
    }

    /// Project the settings into the pasteable snippet
    pub fn project(&self) -> String {
        let geo = ToggleGeometry::derive(self.size);
        let label = self.label_html();
        let title_attr = if self.title.is_empty() {
            String::new()
        } else {
            format!(" title=\"{}\"", self.title)
        };
        let checked_attr = if self.is_on { " checked" } else { "" };
        let label_left = if self.label_position == LabelPosition::Left {
            label.as_str()
        } else {
            ""
        };
        let label_right = if self.label_position == LabelPosition::Right {
            label.as_str()
        } else {
            ""
        };

        format!(
            "<label class=\"inline-flex items-center cursor-pointer\"{title_attr}>{label_left}\n    \
             <div class=\"relative\">\n        \
             <input type=\"checkbox\" class=\"sr-only peer\"{checked_attr}>\n        \
             <div class=\"w-[{width}px] h-[{size}px] bg-[{off}] {radius} peer peer-checked:bg-[{on}] peer-checked:after:translate-x-[{translate}px] after:content-[''] after:absolute after:top-[2px] after:left-[2px] after:bg-[{thumb_color}] after:{radius} after:h-[{thumb}px] after:w-[{thumb}px] after:transition-all after:duration-[{dur}ms]\"></div>\n    \
             </div>{label_right}\n</label>",
            width = fmt_num(geo.width),
            size = self.size,
            off = self.off_color,
            radius = self.radius,
            on = self.on_color,
            translate = fmt_num(geo.translate),
            thumb_color = self.thumb_color,
            thumb = fmt_num(geo.thumb),
            dur = self.duration,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_is_deterministic() {
        let settings = ToggleSettings::default();
        assert_eq!(settings.project(), settings.project());
    }

    #[test]
    fn derived_track_geometry() {
        let html = ToggleSettings {
            size: 28,
            is_on: true,
            on_color: "#2563EB".into(),
            ..Default::default()
        }
        .project();
        assert!(html.contains("w-[51.8px] h-[28px]"));
        assert!(html.contains("peer-checked:bg-[#2563EB]"));
        assert!(html.contains("peer-checked:after:translate-x-[23.8px]"));
        assert!(html.contains("after:h-[24px] after:w-[24px]"));
    }

    #[test]
    fn on_state_emits_checked() {
        let on = ToggleSettings {
            is_on: true,
            ..Default::default()
        }
        .project();
        assert!(on.contains("class=\"sr-only peer\" checked>"));

        let off = ToggleSettings::default().project();
        assert!(!off.contains(" checked>"));
    }

    #[test]
    fn label_defaults_to_left() {
        let html = ToggleSettings::default().project();
        assert!(html.contains("mr-3"));
        let span = html.find("<span").unwrap();
        let input = html.find("<input").unwrap();
        assert!(span < input);
    }

    #[test]
    fn radius_token_applies_to_track_and_thumb() {
        let html = ToggleSettings {
            radius: "rounded-lg".into(),
            ..Default::default()
        }
        .project();
        assert!(html.contains(" rounded-lg peer"));
        assert!(html.contains("after:rounded-lg"));
    }
}
