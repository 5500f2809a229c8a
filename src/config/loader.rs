//! Loader configurator core
//!
//! Five loader shapes share one settings record. The bar type ships its
//! own `@keyframes` block inside the snippet so the pasted markup animates
//! without any external stylesheet.

use serde::Serialize;

use super::{LabelPosition, fmt_num};

/// The closed set of loader shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderType {
    Spinner,
    Dots,
    Pulse,
    Bar,
    Ring,
}

impl LoaderType {
    pub const ALL: &[Self] = &[Self::Spinner, Self::Dots, Self::Pulse, Self::Bar, Self::Ring];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Spinner => "spinner",
            Self::Dots => "dots",
            Self::Pulse => "pulse",
            Self::Bar => "bar",
            Self::Ring => "ring",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Pulse is the only shape without a stroke to thicken
    pub fn uses_thickness(&self) -> bool {
        !matches!(self, Self::Pulse)
    }
}

/// Keyframes for the bar loader's travelling progress segment
pub const PROGRESS_KEYFRAMES: &str = "@keyframes progressAnimation {\n            0% { width: 5%; left: 0; }\n            50% { width: 30%; }\n            100% { width: 5%; left: calc(100% - 5%); }\n        }";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderSettings {
    pub loader_type: LoaderType,
    pub primary_color: String,
    pub secondary_color: String,
    pub size: i32,
    pub duration: f64,
    pub thickness: i32,
    pub include_label: bool,
    pub label_text: String,
    pub label_position: LabelPosition,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            loader_type: LoaderType::Spinner,
            primary_color: "#3B82F6".into(),
            secondary_color: "#E5E7EB".into(),
            size: 40,
            duration: 1.0,
            thickness: 3,
            include_label: false,
            label_text: "Loading...".into(),
            label_position: LabelPosition::Bottom,
        }
    }
}

impl LoaderSettings {
    fn container_class(&self) -> String {
        let mut class = String::from("flex items-center justify-center");
        if self.include_label {
            class += match self.label_position {
                LabelPosition::Left => " flex-row-reverse",
                LabelPosition::Right => " flex-row",
                LabelPosition::Top => " flex-col-reverse",
                LabelPosition::Bottom => " flex-col",
            };
        }
        class
    }

    fn loader_html(&self) -> String {
        let size = self.size;
        let dur = fmt_num(self.duration);
        match self.loader_type {
            LoaderType::Spinner => format!(
                "    <div class=\"w-[{size}px] h-[{size}px] border-[{t}px] border-[{sec}] border-t-transparent rounded-full animate-spin\" style=\"animation-duration: {dur}s;\"></div>\n",
                t = self.thickness,
                sec = self.secondary_color,
            ),
            LoaderType::Dots => {
                let dot_size = fmt_num(size as f64 / 4.0);
                let mut html = String::from("    <div class=\"flex space-x-1\">\n");
                for i in 0..3 {
                    html += &format!(
                        "        <div class=\"w-[{dot_size}px] h-[{dot_size}px] bg-[{pri}] rounded-full animate-bounce\" style=\"animation-duration: {dur}s; animation-delay: {delay}s;\"></div>\n",
                        pri = self.primary_color,
                        delay = fmt_num(i as f64 * 0.1),
                    );
                }
                html += "    </div>\n";
                html
            }
            LoaderType::Pulse => format!(
                "    <div class=\"w-[{size}px] h-[{size}px] bg-[{pri}] rounded-full animate-pulse\" style=\"animation-duration: {dur}s;\"></div>\n",
                pri = self.primary_color,
            ),
            LoaderType::Bar => format!(
                "    <div class=\"relative w-[{track_w}px] h-[{track_h}px] bg-[{sec}] rounded-[{t}px]\">\n        \
                 <div class=\"absolute left-0 top-0 h-full w-[30%] bg-[{pri}] rounded-[{t}px]\" style=\"animation: progressAnimation {bar_dur}s infinite ease-in-out;\"></div>\n    \
                 </div>\n    <style>\n        {keyframes}\n    </style>\n",
                track_w = fmt_num(size as f64 * 3.0),
                track_h = fmt_num(size as f64 / 4.0),
                sec = self.secondary_color,
                t = self.thickness,
                pri = self.primary_color,
                bar_dur = fmt_num(self.duration * 1.5),
                keyframes = PROGRESS_KEYFRAMES,
            ),
            LoaderType::Ring => format!(
                "    <div class=\"w-[{size}px] h-[{size}px] border-[{t}px] border-[{sec}] border-t-[{pri}] rounded-full animate-spin\" style=\"animation-duration: {dur}s;\"></div>\n",
                t = self.thickness,
                sec = self.secondary_color,
                pri = self.primary_color,
            ),
        }
    }

    fn label_html(&self) -> String {
        if !self.include_label {
            return String::new();
        }
        let margin = match self.label_position {
            LabelPosition::Right => "ml-3",
            LabelPosition::Left => "mr-3",
            LabelPosition::Bottom => "mt-3",
            LabelPosition::Top => "mb-3",
        };
        format!(
            "    <div class=\"{margin}\" style=\"color: {};\">{}</div>\n",
            self.primary_color, self.label_text
        )
    }

    /// Project the settings into the pasteable snippet
    pub fn project(&self) -> String {
        format!(
            "<div class=\"{}\">\n{}{}</div>",
            self.container_class(),
            self.loader_html(),
            self.label_html(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_is_deterministic() {
        for loader_type in LoaderType::ALL {
            let settings = LoaderSettings {
                loader_type: *loader_type,
                include_label: true,
                ..Default::default()
            };
            assert_eq!(settings.project(), settings.project());
        }
    }

    #[test]
    fn spinner_dimensions_and_duration() {
        let html = LoaderSettings::default().project();
        assert!(html.contains("w-[40px] h-[40px] border-[3px] border-[#E5E7EB] border-t-transparent"));
        assert!(html.contains("animation-duration: 1s;"));
    }

    #[test]
    fn dots_emit_three_staggered_dots() {
        let settings = LoaderSettings {
            loader_type: LoaderType::Dots,
            ..Default::default()
        };
        let html = settings.project();
        assert_eq!(html.matches("animate-bounce").count(), 3);
        assert!(html.contains("w-[10px] h-[10px]"));
        assert!(html.contains("animation-delay: 0s;"));
        assert!(html.contains("animation-delay: 0.1s;"));
        assert!(html.contains("animation-delay: 0.2s;"));
    }

    #[test]
    fn bar_carries_its_keyframes() {
        let settings = LoaderSettings {
            loader_type: LoaderType::Bar,
            duration: 1.0,
            ..Default::default()
        };
        let html = settings.project();
        assert!(html.contains("w-[120px] h-[10px]"));
        assert!(html.contains("@keyframes progressAnimation"));
        assert!(html.contains("progressAnimation 1.5s infinite ease-in-out"));
    }

    #[test]
    fn ring_splits_border_colors() {
        let settings = LoaderSettings {
            loader_type: LoaderType::Ring,
            ..Default::default()
        };
        let html = settings.project();
        assert!(html.contains("border-[#E5E7EB] border-t-[#3B82F6]"));
    }

    #[test]
    fn label_position_sets_flex_direction_and_margin() {
        let settings = LoaderSettings {
            include_label: true,
            label_position: LabelPosition::Top,
            ..Default::default()
        };
        let html = settings.project();
        assert!(html.contains("flex-col-reverse"));
        assert!(html.contains("class=\"mb-3\""));
        assert!(html.contains("Loading..."));

        let no_label = LoaderSettings::default().project();
        assert!(!no_label.contains("flex-col"));
        assert!(!no_label.contains("Loading..."));
    }

    #[test]
    fn fractional_duration_renders_cleanly() {
        let settings = LoaderSettings {
            duration: 1.5,
            ..Default::default()
        };
        assert!(settings.project().contains("animation-duration: 1.5s;"));
    }
}
