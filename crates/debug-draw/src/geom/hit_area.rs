use crate::coords::Rect;

use super::{Circle, Ellipse, ShapeKind, Triangle};

/// Pointer hit-area attached to an interactive object.
///
/// Coordinates are local to the object's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum HitArea {
    Rectangle(Rect),
    Circle(Circle),
    Ellipse(Ellipse),
    Triangle(Triangle),
    /// Host-defined kind the overlay has no outline for.
    Custom(CustomHitArea),
}

impl HitArea {
    /// Returns the shape kind, or `None` for [`HitArea::Custom`].
    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            HitArea::Rectangle(_) => Some(ShapeKind::Rectangle),
            HitArea::Circle(_) => Some(ShapeKind::Circle),
            HitArea::Ellipse(_) => Some(ShapeKind::Ellipse),
            HitArea::Triangle(_) => Some(ShapeKind::Triangle),
            HitArea::Custom(_) => None,
        }
    }

    pub fn custom(name: impl Into<String>) -> Self {
        HitArea::Custom(CustomHitArea::new(name))
    }
}

/// Opaque hit-area of a kind unknown to the overlay (polygons, pixel-perfect tests, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomHitArea {
    pub name: String,
}

impl CustomHitArea {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<Rect> for HitArea {
    fn from(r: Rect) -> Self {
        HitArea::Rectangle(r)
    }
}

impl From<Circle> for HitArea {
    fn from(c: Circle) -> Self {
        HitArea::Circle(c)
    }
}

impl From<Ellipse> for HitArea {
    fn from(e: Ellipse) -> Self {
        HitArea::Ellipse(e)
    }
}

impl From<Triangle> for HitArea {
    fn from(t: Triangle) -> Self {
        HitArea::Triangle(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_has_no_kind() {
        assert_eq!(HitArea::custom("polygon").kind(), None);
    }

    #[test]
    fn recognized_kinds() {
        assert_eq!(HitArea::from(Circle::new(0.0, 0.0, 1.0)).kind(), Some(ShapeKind::Circle));
        assert_eq!(HitArea::from(Rect::new(0.0, 0.0, 1.0, 1.0)).kind(), Some(ShapeKind::Rectangle));
    }
}
