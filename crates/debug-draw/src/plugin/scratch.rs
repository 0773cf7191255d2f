use crate::coords::Rect;
use crate::geom::{Circle, Ellipse, HitArea, Shape, Triangle};
use crate::graphics::Graphics;

/// Per-instance scratch storage reused by every frame.
///
/// Lists hold display-list indices and are only valid for the frame that
/// filled them.
#[derive(Debug, Default)]
pub(crate) struct Scratch {
    pub(crate) inputs: Vec<usize>,
    pub(crate) masks: Vec<usize>,
    pub(crate) shapes: ScratchShapes,
}

impl Scratch {
    /// Empties both lists (capacity kept) and zeroes the shape arena.
    pub(crate) fn reset(&mut self) {
        self.inputs.clear();
        self.masks.clear();
        self.shapes = ScratchShapes::default();
    }
}

/// One mutable shape per recognized hit-area kind.
///
/// A slot is overwritten right before it is stroked; its contents are
/// meaningless after the next hit-area of the same kind.
#[derive(Debug, Default)]
pub(crate) struct ScratchShapes {
    rect: Rect,
    circle: Circle,
    ellipse: Ellipse,
    triangle: Triangle,
}

impl ScratchShapes {
    /// Strokes `hit_area` translated by `(dx, dy)`.
    ///
    /// Returns `false` without drawing for [`HitArea::Custom`].
    pub(crate) fn stroke_hit_area<G>(&mut self, graphics: &mut G, hit_area: &HitArea, dx: f32, dy: f32) -> bool
    where
        G: Graphics + ?Sized,
    {
        match hit_area {
            HitArea::Rectangle(src) => {
                place(&mut self.rect, src, dx, dy);
                graphics.stroke_rect_shape(&self.rect);
            }
            HitArea::Circle(src) => {
                place(&mut self.circle, src, dx, dy);
                graphics.stroke_circle_shape(&self.circle);
            }
            HitArea::Ellipse(src) => {
                place(&mut self.ellipse, src, dx, dy);
                graphics.stroke_ellipse_shape(&self.ellipse);
            }
            HitArea::Triangle(src) => {
                place(&mut self.triangle, src, dx, dy);
                graphics.stroke_triangle_shape(&self.triangle);
            }
            HitArea::Custom(_) => return false,
        }
        true
    }
}

#[inline]
fn place<S: Shape>(slot: &mut S, source: &S, dx: f32, dy: f32) {
    slot.copy_from(source);
    slot.offset(dx, dy);
}
