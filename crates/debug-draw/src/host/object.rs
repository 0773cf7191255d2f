use crate::geom::HitArea;

use super::{Drawable, Mask, ObjectId};

/// Mask owned by a [`SceneObject`].
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectMask {
    Bitmap(Box<SceneObject>),
    Geometry,
}

/// Plain-data scene object.
///
/// Hosts with their own object model implement [`Drawable`] directly; this
/// type covers in-memory scenes.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub x: f32,
    pub y: f32,
    pub origin_x: Option<f32>,
    pub origin_y: Option<f32>,
    pub display_width: f32,
    pub display_height: f32,
    pub hit_area: Option<HitArea>,
    pub mask: Option<ObjectMask>,
}

impl SceneObject {
    pub fn new(id: ObjectId, x: f32, y: f32, display_width: f32, display_height: f32) -> Self {
        Self {
            id,
            x,
            y,
            origin_x: None,
            origin_y: None,
            display_width,
            display_height,
            hit_area: None,
            mask: None,
        }
    }

    pub fn with_origin(mut self, origin_x: f32, origin_y: f32) -> Self {
        self.origin_x = Some(origin_x);
        self.origin_y = Some(origin_y);
        self
    }

    pub fn with_hit_area(mut self, hit_area: impl Into<HitArea>) -> Self {
        self.hit_area = Some(hit_area.into());
        self
    }

    pub fn with_bitmap_mask(mut self, mask: SceneObject) -> Self {
        self.mask = Some(ObjectMask::Bitmap(Box::new(mask)));
        self
    }

    pub fn with_geometry_mask(mut self) -> Self {
        self.mask = Some(ObjectMask::Geometry);
        self
    }
}

impl Drawable for SceneObject {
    #[inline]
    fn id(&self) -> ObjectId {
        self.id
    }

    #[inline]
    fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    fn origin_x(&self) -> Option<f32> {
        self.origin_x
    }

    #[inline]
    fn origin_y(&self) -> Option<f32> {
        self.origin_y
    }

    #[inline]
    fn display_width(&self) -> f32 {
        self.display_width
    }

    #[inline]
    fn display_height(&self) -> f32 {
        self.display_height
    }

    #[inline]
    fn hit_area(&self) -> Option<&HitArea> {
        self.hit_area.as_ref()
    }

    fn mask(&self) -> Option<Mask<'_>> {
        self.mask.as_ref().map(|mask| match mask {
            ObjectMask::Bitmap(obj) => Mask::Bitmap(&**obj),
            ObjectMask::Geometry => Mask::Geometry,
        })
    }
}
