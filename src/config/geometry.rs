//! Shared geometry derivations for checkbox and toggle
//!
//! Both the checkbox check glyph and the toggle thumb are positioned with
//! pixel arithmetic derived from the base size. The projection is the only
//! consumer, but the math lives here so nothing can reimplement it with
//! slightly different rounding.

/// Check glyph sizing inside a square checkbox of side `size` px
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckMark {
    /// Glyph side in px, 60% of the box but never below 12
    pub size: i32,
    /// Offset from the box's top and left edges, centering the glyph
    pub offset: i32,
}

impl CheckMark {
    pub fn derive(box_size: i32) -> Self {
        let size = ((box_size as f64 * 0.6).floor() as i32).max(12);
        let offset = ((box_size - size) as f64 / 2.0).floor() as i32;
        Self { size, offset }
    }
}

/// Track and thumb dimensions for a toggle of height `size` px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleGeometry {
    /// Track width, 1.85x the height
    pub width: f64,
    /// Thumb diameter, inset 2px on each side
    pub thumb: f64,
    /// X distance the thumb travels when checked
    pub translate: f64,
}

impl ToggleGeometry {
    pub const ASPECT: f64 = 1.85;

    pub fn derive(size: i32) -> Self {
        let width = size as f64 * Self::ASPECT;
        let thumb = size as f64 - 4.0;
        Self {
            width,
            thumb,
            translate: width - thumb - 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fmt_num;

    #[test]
    fn check_mark_at_20px() {
        let mark = CheckMark::derive(20);
        assert_eq!(mark.size, 12);
        assert_eq!(mark.offset, 4);
    }

    #[test]
    fn check_mark_floor_applies() {
        // 30 * 0.6 = 18, centered at (30 - 18) / 2 = 6
        let mark = CheckMark::derive(30);
        assert_eq!(mark.size, 18);
        assert_eq!(mark.offset, 6);
    }

    #[test]
    fn check_mark_never_below_12() {
        let mark = CheckMark::derive(14);
        assert_eq!(mark.size, 12);
        assert_eq!(mark.offset, 1);
    }

    #[test]
    fn toggle_geometry_at_28px() {
        let geo = ToggleGeometry::derive(28);
        assert_eq!(fmt_num(geo.width), "51.8");
        assert_eq!(fmt_num(geo.thumb), "24");
        assert_eq!(fmt_num(geo.translate), "23.8");
    }

    #[test]
    fn toggle_geometry_at_20px() {
        let geo = ToggleGeometry::derive(20);
        assert_eq!(fmt_num(geo.width), "37");
        assert_eq!(fmt_num(geo.thumb), "16");
        assert_eq!(fmt_num(geo.translate), "17");
    }
}
