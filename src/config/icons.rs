//! Right-icon glyphs for the input configurator
//!
//! A closed set of feather-style icons. `path_markup()` is the single
//! source for the SVG inner markup; both the preview and the generated
//! snippet embed it verbatim, so the glyphs cannot diverge.

/// The closed set of input right-icon glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputIcon {
    Check,
    Eye,
    EyeOff,
    X,
    ChevronDown,
    AlertCircle,
    Search,
    Mail,
    User,
    Lock,
}

impl InputIcon {
    pub const ALL: &[Self] = &[
        Self::Check,
        Self::Eye,
        Self::EyeOff,
        Self::X,
        Self::ChevronDown,
        Self::AlertCircle,
        Self::Search,
        Self::Mail,
        Self::User,
        Self::Lock,
    ];

    /// Form/select token
    pub fn name(&self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Eye => "eye",
            Self::EyeOff => "eye-off",
            Self::X => "x",
            Self::ChevronDown => "chevron-down",
            Self::AlertCircle => "alert-circle",
            Self::Search => "search",
            Self::Mail => "mail",
            Self::User => "user",
            Self::Lock => "lock",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.name() == name)
    }

    pub fn is_eye_variant(&self) -> bool {
        matches!(self, Self::Eye | Self::EyeOff)
    }

    /// Inner markup of the 24x24 stroked SVG for this glyph
    pub fn path_markup(&self) -> &'static str {
        match self {
            Self::Check => r#"<polyline points="20 6 9 17 4 12"></polyline>"#,
            Self::Eye => r#"<path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"></path><circle cx="12" cy="12" r="3"></circle>"#,
            Self::EyeOff => r#"<path d="M9.88 9.88a3 3 0 1 0 4.24 4.24"></path><path d="M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68"></path><path d="M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61"></path><line x1="2" x2="22" y1="2" y2="22"></line>"#,
            Self::X => r#"<line x1="18" y1="6" x2="6" y2="18"></line><line x1="6" y1="6" x2="18" y2="18"></line>"#,
            Self::ChevronDown => r#"<polyline points="6 9 12 15 18 9"></polyline>"#,
            Self::AlertCircle => r#"<circle cx="12" cy="12" r="10"></circle><line x1="12" y1="8" x2="12" y2="12"></line><line x1="12" y1="16" x2="12.01" y2="16"></line>"#,
            Self::Search => r#"<circle cx="11" cy="11" r="8"></circle><line x1="21" y1="21" x2="16.65" y2="16.65"></line>"#,
            Self::Mail => r#"<rect x="2" y="4" width="20" height="16" rx="2" ry="2"></rect><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"></path>"#,
            Self::User => r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"></path><circle cx="12" cy="7" r="4"></circle>"#,
            Self::Lock => r#"<rect x="3" y="11" width="18" height="11" rx="2" ry="2"></rect><path d="M7 11V7a5 5 0 0 1 10 0v4"></path>"#,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_roundtrip() {
        for icon in InputIcon::ALL {
            assert_eq!(InputIcon::from_name(icon.name()), Some(*icon));
        }
        assert_eq!(InputIcon::from_name("star"), None);
    }

    #[test]
    fn every_icon_has_markup() {
        for icon in InputIcon::ALL {
            assert!(!icon.path_markup().is_empty());
        }
    }

    #[test]
    fn eye_variants() {
        assert!(InputIcon::Eye.is_eye_variant());
        assert!(InputIcon::EyeOff.is_eye_variant());
        assert!(!InputIcon::Check.is_eye_variant());
    }
}
