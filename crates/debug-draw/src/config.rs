/// Overlay styling.
///
/// Colors are packed `0xRRGGBB`. Changes made through
/// [`crate::DebugDraw::config_mut`] apply from the next frame on.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugDrawConfig {
    /// Opacity for every stroke and fill.
    pub alpha: f32,
    /// Bounding-box stroke color.
    pub color: u32,
    /// Hit-area stroke color.
    pub input_color: u32,
    /// Stroke width for all outlines.
    pub line_width: f32,
    /// Fill and stroke color of bitmap-mask bounds.
    pub mask_color: u32,
    /// Clear the surface even when the display list is empty.
    ///
    /// Off by default: an empty scene leaves the last frame's outlines on screen.
    pub clear_when_empty: bool,
}

impl Default for DebugDrawConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            color: 0x00ddff,
            input_color: 0xffcc00,
            line_width: 2.0,
            mask_color: 0xff0022,
            clear_when_empty: false,
        }
    }
}

impl DebugDrawConfig {
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn with_input_color(mut self, color: u32) -> Self {
        self.input_color = color;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_mask_color(mut self, color: u32) -> Self {
        self.mask_color = color;
        self
    }

    pub fn with_clear_when_empty(mut self, clear: bool) -> Self {
        self.clear_when_empty = clear;
        self
    }
}
