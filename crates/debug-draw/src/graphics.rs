use crate::coords::Rect;
use crate::geom::{Circle, Ellipse, Triangle};

/// Immediate-mode vector drawing surface provided by the host.
///
/// Colors are packed `0xRRGGBB`; alpha is straight in `[0, 1]`. Stroke calls
/// use the most recent [`line_style`](Self::line_style).
pub trait Graphics {
    /// Drops everything drawn so far.
    fn clear(&mut self);

    fn line_style(&mut self, width: f32, color: u32, alpha: f32);

    fn fill_style(&mut self, color: u32, alpha: f32);

    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    #[inline]
    fn stroke_rect_shape(&mut self, rect: &Rect) {
        self.stroke_rect(rect.x(), rect.y(), rect.width(), rect.height());
    }

    fn stroke_circle_shape(&mut self, circle: &Circle);

    fn stroke_ellipse_shape(&mut self, ellipse: &Ellipse);

    fn stroke_triangle_shape(&mut self, triangle: &Triangle);
}
