use crate::coords::Vec2;

use super::{Shape, ShapeKind};

/// Circle given by its center and radius.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { center: Vec2::new(x, y), radius }
    }
}

impl Shape for Circle {
    const KIND: ShapeKind = ShapeKind::Circle;

    #[inline]
    fn offset(&mut self, dx: f32, dy: f32) {
        self.center = self.center.offset(dx, dy);
    }
}
