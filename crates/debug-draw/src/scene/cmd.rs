use crate::coords::Rect;
use crate::geom::{Circle, Ellipse, ShapeKind, Triangle};

/// A single outline recorded by [`super::DrawList`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    StrokeRect(Rect),
    StrokeCircle(Circle),
    StrokeEllipse(Ellipse),
    StrokeTriangle(Triangle),
}

impl DrawCmd {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            DrawCmd::StrokeRect(_) => ShapeKind::Rectangle,
            DrawCmd::StrokeCircle(_) => ShapeKind::Circle,
            DrawCmd::StrokeEllipse(_) => ShapeKind::Ellipse,
            DrawCmd::StrokeTriangle(_) => ShapeKind::Triangle,
        }
    }
}
