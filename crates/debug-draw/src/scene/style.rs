use crate::paint::Color;

/// Stroke drawn along the outline of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineStyle {
    pub width: f32,
    pub color: Color,
}

impl LineStyle {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// Builds a style from the host's packed color convention.
    #[inline]
    pub fn from_hex(width: f32, rgb: u32, alpha: f32) -> Self {
        Self::new(width, Color::from_hex(rgb, alpha))
    }
}
