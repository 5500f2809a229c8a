//! Checkbox configurator core
//!
//! The generated control is the peer-class pattern: a visually hidden
//! `<input>` followed by a styled box div and an absolutely positioned
//! check SVG that fades in when the input is checked.

use serde::Serialize;

use super::LabelPosition;
use super::geometry::CheckMark;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxSettings {
    pub label: String,
    pub title: String,
    pub checked_color: String,
    pub unchecked_color: String,
    pub check_color: String,
    pub label_color: String,
    pub size: i32,
    pub border_radius: String,
    pub is_checked: bool,
    pub duration: u32,
    pub border_style: String,
    pub label_position: LabelPosition,
}

impl Default for CheckboxSettings {
    fn default() -> Self {
        Self {
            label: "Remember me".into(),
            title: "Checkbox".into(),
            checked_color: "#2563EB".into(),
            unchecked_color: "#1F2937".into(),
            check_color: "#FFFFFF".into(),
            label_color: "#FFFFFF".into(),
            size: 20,
            border_radius: "rounded-md".into(),
            is_checked: false,
            duration: 200,
            border_style: "border".into(),
            label_position: LabelPosition::Right,
        }
    }
}

impl CheckboxSettings {
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
        let mark = CheckMark::derive(self.size);
        let label = self.label_html();
        let title_attr = if self.title.is_empty() {
            String::new()
        } else {
            format!(" title=\"{}\"", self.title)
        };
        let checked_attr = if self.is_checked { " checked" } else { "" };
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
             <div class=\"w-[{size}px] h-[{size}px] bg-[{unchecked}] {border} border-gray-600 {radius} peer peer-checked:bg-[{checked}] peer-checked:border-[{checked}] transition-all duration-[{dur}ms]\"></div>\n        \
             <svg class=\"absolute w-[{mark}px] h-[{mark}px] top-[{off}px] left-[{off}px] text-[{check}] opacity-0 peer-checked:opacity-100 transition-opacity duration-[{dur}ms]\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"3\" stroke-linecap=\"round\" stroke-linejoin=\"round\">\n            \
             <polyline points=\"20 6 9 17 4 12\"></polyline>\n        \
             </svg>\n    \
             </div>{label_right}\n</label>",
            size = self.size,
            unchecked = self.unchecked_color,
            border = self.border_style,
            radius = self.border_radius,
            checked = self.checked_color,
            dur = self.duration,
            mark = mark.size,
            off = mark.offset,
            check = self.check_color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_is_deterministic() {
        let settings = CheckboxSettings::default();
        assert_eq!(settings.project(), settings.project());
    }

    #[test]
    fn mark_geometry_at_default_size() {
        let html = CheckboxSettings::default().project();
        assert!(html.contains("w-[20px] h-[20px]"));
        assert!(html.contains("w-[12px] h-[12px]"));
        assert!(html.contains("top-[4px] left-[4px]"));
    }

    #[test]
    fn label_side_switches_margin() {
        let right = CheckboxSettings::default().project();
        assert!(right.contains("ml-3"));
        assert!(right.trim_end().ends_with("</span>\n</label>"));

        let left = CheckboxSettings {
            label_position: LabelPosition::Left,
            ..Default::default()
        }
        .project();
        assert!(left.contains("mr-3"));
        let span = left.find("<span").unwrap();
        let input = left.find("<input").unwrap();
        assert!(span < input);
    }

    #[test]
    fn checked_state_emits_attribute() {
        let html = CheckboxSettings {
            is_checked: true,
            ..Default::default()
        }
        .project();
        assert!(html.contains("class=\"sr-only peer\" checked>"));
    }

    #[test]
    fn empty_title_drops_attribute() {
        let html = CheckboxSettings {
            title: String::new(),
            ..Default::default()
        }
        .project();
        assert!(!html.contains("title="));
    }
}
