use crate::coords::Rect;
use crate::geom::{Circle, Ellipse, ShapeKind, Triangle};
use crate::graphics::Graphics;
use crate::paint::Color;

use super::{DrawCmd, LineStyle};

/// A single recorded outline together with the style active when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub cmd: DrawCmd,
    /// `None` when stroked before any `line_style` call since the last clear.
    pub line: Option<LineStyle>,
    pub fill: Option<Color>,
}

/// Recorded drawing for the current frame.
///
/// Performance characteristics:
/// - every stroke is an O(1) push
/// - [`Graphics::clear`] keeps allocated capacity, so a warmed list does not
///   allocate while the number of outlines stays stable
///
/// ```ignore
/// let mut list = DrawList::new();
/// list.line_style(2.0, 0x00ddff, 0.5);
/// list.stroke_rect(10.0, 20.0, 30.0, 40.0);
/// assert_eq!(list.rects().count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    line: Option<LineStyle>,
    fill: Option<Color>,
    /// Number of `clear` calls over the list's lifetime.
    clears: u64,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns items in issue order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many times the surface has been cleared.
    #[inline]
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    #[inline]
    pub fn line(&self) -> Option<LineStyle> {
        self.line
    }

    #[inline]
    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    /// Number of recorded outlines of the given kind.
    pub fn count(&self, kind: ShapeKind) -> usize {
        self.items.iter().filter(|item| item.cmd.kind() == kind).count()
    }

    /// Iterates recorded rectangles in issue order.
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.items.iter().filter_map(|item| match &item.cmd {
            DrawCmd::StrokeRect(r) => Some(r),
            _ => None,
        })
    }

    #[inline]
    fn push(&mut self, cmd: DrawCmd) {
        self.items.push(DrawItem {
            cmd,
            line: self.line,
            fill: self.fill,
        });
    }
}

impl Graphics for DrawList {
    /// Drops recorded items and styles. Keeps allocated capacity for reuse.
    #[inline]
    fn clear(&mut self) {
        self.items.clear();
        self.line = None;
        self.fill = None;
        self.clears = self.clears.wrapping_add(1);
    }

    #[inline]
    fn line_style(&mut self, width: f32, color: u32, alpha: f32) {
        self.line = Some(LineStyle::from_hex(width, color, alpha));
    }

    #[inline]
    fn fill_style(&mut self, color: u32, alpha: f32) {
        self.fill = Some(Color::from_hex(color, alpha));
    }

    #[inline]
    fn stroke_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push(DrawCmd::StrokeRect(Rect::new(x, y, width, height)));
    }

    #[inline]
    fn stroke_circle_shape(&mut self, circle: &Circle) {
        self.push(DrawCmd::StrokeCircle(*circle));
    }

    #[inline]
    fn stroke_ellipse_shape(&mut self, ellipse: &Ellipse) {
        self.push(DrawCmd::StrokeEllipse(*ellipse));
    }

    #[inline]
    fn stroke_triangle_shape(&mut self, triangle: &Triangle) {
        self.push(DrawCmd::StrokeTriangle(*triangle));
    }
}
