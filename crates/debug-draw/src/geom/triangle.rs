use crate::coords::Vec2;

use super::{Shape, ShapeKind};

/// Triangle given by its three vertices.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    #[inline]
    pub const fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn points(self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }
}

impl Shape for Triangle {
    const KIND: ShapeKind = ShapeKind::Triangle;

    fn offset(&mut self, dx: f32, dy: f32) {
        self.a = self.a.offset(dx, dy);
        self.b = self.b.offset(dx, dy);
        self.c = self.c.offset(dx, dy);
    }
}
