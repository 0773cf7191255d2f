use crate::coords::Vec2;

use super::{Shape, ShapeKind};

/// Axis-aligned ellipse given by its center and full width/height.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Ellipse {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { center: Vec2::new(x, y), width, height }
    }
}

impl Shape for Ellipse {
    const KIND: ShapeKind = ShapeKind::Ellipse;

    #[inline]
    fn offset(&mut self, dx: f32, dy: f32) {
        self.center = self.center.offset(dx, dy);
    }
}
