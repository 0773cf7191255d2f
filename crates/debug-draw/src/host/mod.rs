//! Host scene contract.
//!
//! The overlay never owns scene objects. It reads them through [`Drawable`],
//! receives lifecycle signals as [`SceneEvent`]s and borrows a drawing
//! surface from the [`SceneHost`] while the scene runs.

mod object;
mod subscriptions;

pub use object::{ObjectMask, SceneObject};
pub use subscriptions::Subscriptions;

use crate::coords::Rect;
use crate::geom::HitArea;
use crate::graphics::Graphics;

/// Stable identity of a scene object, used for de-duplication within a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ObjectId(pub u64);

/// Lifecycle signals emitted by the host scene.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SceneEvent {
    /// Scene started (or restarted after a shutdown).
    Start,
    /// Once per frame while the scene runs.
    Render,
    /// Scene paused or stopped; it may start again.
    Shutdown,
    /// Scene is gone for good. Fires once.
    Destroy,
}

impl SceneEvent {
    pub const ALL: [SceneEvent; 4] = [
        SceneEvent::Start,
        SceneEvent::Render,
        SceneEvent::Shutdown,
        SceneEvent::Destroy,
    ];

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            SceneEvent::Start => 0,
            SceneEvent::Render => 1,
            SceneEvent::Shutdown => 2,
            SceneEvent::Destroy => 3,
        }
    }
}

/// How long a subscription lasts.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Listen {
    /// Until explicitly unsubscribed.
    Always,
    /// Removed after the first delivery.
    Once,
}

/// Mask attached to a scene object.
#[derive(Clone, Copy)]
pub enum Mask<'a> {
    /// Visibility defined by the rendered pixels of another object.
    Bitmap(&'a dyn Drawable),
    /// Any other mask technique. Not outlined.
    Geometry,
}

/// Read-only view of a host scene object.
///
/// `origin_x`/`origin_y` are normalized anchors; `None`, `0.0` or NaN anchors
/// the object at its top-left corner.
pub trait Drawable {
    fn id(&self) -> ObjectId;

    fn x(&self) -> f32;

    fn y(&self) -> f32;

    fn origin_x(&self) -> Option<f32> {
        None
    }

    fn origin_y(&self) -> Option<f32> {
        None
    }

    fn display_width(&self) -> f32;

    fn display_height(&self) -> f32;

    /// Present when the object accepts pointer input.
    fn hit_area(&self) -> Option<&HitArea> {
        None
    }

    fn mask(&self) -> Option<Mask<'_>> {
        None
    }

    /// Left edge of the displayed bounds.
    #[inline]
    fn left(&self) -> f32 {
        anchored(self.x(), self.origin_x(), self.display_width())
    }

    /// Top edge of the displayed bounds.
    #[inline]
    fn top(&self) -> f32 {
        anchored(self.y(), self.origin_y(), self.display_height())
    }

    #[inline]
    fn bounds(&self) -> Rect {
        Rect::new(self.left(), self.top(), self.display_width(), self.display_height())
    }
}

#[inline]
fn anchored(pos: f32, origin: Option<f32>, extent: f32) -> f32 {
    match origin {
        Some(o) if o != 0.0 && !o.is_nan() => pos - o * extent,
        _ => pos,
    }
}

/// Everything the overlay needs from the engine's scene.
pub trait SceneHost {
    type Object: Drawable;
    type Graphics: Graphics;

    /// Name used in log lines.
    fn name(&self) -> &str {
        "scene"
    }

    /// `false` when the runtime lacks what the overlay relies on
    /// (e.g. a stripped build). The overlay then stays inert.
    fn is_compatible(&self) -> bool {
        true
    }

    fn subscribe(&mut self, event: SceneEvent, listen: Listen);

    fn unsubscribe(&mut self, event: SceneEvent);

    /// Objects in host traversal order.
    fn display_list(&self) -> &[Self::Object];

    /// Creates a drawing surface inside the scene.
    fn add_graphics(&mut self) -> Self::Graphics;

    /// Destroys a surface previously returned by [`add_graphics`](Self::add_graphics).
    fn remove_graphics(&mut self, graphics: Self::Graphics);

    /// Moves `graphics` to the top of the scene's render order.
    fn bring_to_top(&mut self, graphics: &Self::Graphics);
}
