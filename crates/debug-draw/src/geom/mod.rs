//! Hit-area geometry.
//!
//! Responsibilities:
//! - the closed set of shape kinds the overlay knows how to outline
//! - in-place copy + translate helpers used by the per-frame scratch arena
//!
//! Rectangles reuse [`crate::coords::Rect`].

mod circle;
mod ellipse;
mod hit_area;
mod triangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use hit_area::{CustomHitArea, HitArea};
pub use triangle::Triangle;

use crate::coords::Rect;

/// Shape kinds with a dedicated stroke primitive on [`crate::Graphics`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Ellipse,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Triangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Triangle => "triangle",
        }
    }
}

/// Mutable geometry that can be overwritten in place and translated.
pub trait Shape: Copy {
    const KIND: ShapeKind;

    /// Overwrites `self` with the geometry of `source`.
    #[inline]
    fn copy_from(&mut self, source: &Self) {
        *self = *source;
    }

    /// Translates the shape in place.
    fn offset(&mut self, dx: f32, dy: f32);
}

impl Shape for Rect {
    const KIND: ShapeKind = ShapeKind::Rectangle;

    #[inline]
    fn offset(&mut self, dx: f32, dy: f32) {
        self.origin = self.origin.offset(dx, dy);
    }
}
