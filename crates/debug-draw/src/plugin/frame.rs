use crate::config::DebugDrawConfig;
use crate::graphics::Graphics;
use crate::host::{Drawable, Mask};

use super::scratch::Scratch;

/// Counters for one drawn frame.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Bounding boxes stroked.
    pub objects: usize,
    /// Hit-areas outlined.
    pub hit_areas: usize,
    /// Hit-areas of a kind without an outline.
    pub hit_areas_skipped: usize,
    /// Bitmap-mask bounds outlined.
    pub masks: usize,
}

/// Redraws the overlay for `objects`.
///
/// Returns `None` when nothing was touched: an empty display list leaves the
/// previous frame on the surface unless `clear_when_empty` is set.
pub(crate) fn draw_frame<G, O>(
    config: &DebugDrawConfig,
    scratch: &mut Scratch,
    graphics: &mut G,
    objects: &[O],
) -> Option<FrameStats>
where
    G: Graphics + ?Sized,
    O: Drawable,
{
    if objects.is_empty() && !config.clear_when_empty {
        return None;
    }

    scratch.reset();

    graphics.clear();
    graphics.line_style(config.line_width, config.color, config.alpha);

    for (index, obj) in objects.iter().enumerate() {
        stroke_bounds(graphics, obj);

        if obj.hit_area().is_some() {
            scratch.inputs.push(index);
        }

        if obj.mask().is_some() {
            let id = obj.id();
            if !scratch.masks.iter().any(|&i| objects[i].id() == id) {
                scratch.masks.push(index);
            }
        }
    }

    let mut stats = FrameStats {
        objects: objects.len(),
        ..FrameStats::default()
    };

    if !scratch.inputs.is_empty() {
        graphics.line_style(config.line_width, config.input_color, config.alpha);

        for &index in &scratch.inputs {
            let obj = &objects[index];
            let Some(hit_area) = obj.hit_area() else { continue };

            if scratch.shapes.stroke_hit_area(graphics, hit_area, obj.left(), obj.top()) {
                stats.hit_areas += 1;
            } else {
                stats.hit_areas_skipped += 1;
            }
        }
    }

    if !scratch.masks.is_empty() {
        graphics.fill_style(config.mask_color, config.alpha);
        graphics.line_style(config.line_width, config.mask_color, config.alpha);

        for &index in &scratch.masks {
            if let Some(Mask::Bitmap(masking)) = objects[index].mask() {
                stroke_bounds(graphics, masking);
                stats.masks += 1;
            }
        }
    }

    Some(stats)
}

#[inline]
fn stroke_bounds<G, D>(graphics: &mut G, obj: &D)
where
    G: Graphics + ?Sized,
    D: Drawable + ?Sized,
{
    let b = obj.bounds();
    graphics.stroke_rect(b.x(), b.y(), b.width(), b.height());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::geom::{Circle, Ellipse, HitArea, ShapeKind, Triangle};
    use crate::host::{ObjectId, SceneObject};
    use crate::paint::Color;
    use crate::scene::{DrawCmd, DrawList, LineStyle};

    fn obj(id: u64, x: f32, y: f32, w: f32, h: f32) -> SceneObject {
        SceneObject::new(ObjectId(id), x, y, w, h)
    }

    fn draw(objects: &[SceneObject]) -> (DrawList, Option<FrameStats>) {
        let mut list = DrawList::new();
        let stats = draw_frame(&DebugDrawConfig::default(), &mut Scratch::default(), &mut list, objects);
        (list, stats)
    }

    // ── bounding boxes ────────────────────────────────────────────────────

    #[test]
    fn single_object_at_zero_origin() {
        let (list, stats) = draw(&[obj(1, 10.0, 20.0, 30.0, 40.0).with_origin(0.0, 0.0)]);

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].cmd, DrawCmd::StrokeRect(Rect::new(10.0, 20.0, 30.0, 40.0)));
        assert_eq!(stats.map(|s| s.objects), Some(1));
    }

    #[test]
    fn bounds_use_primary_style() {
        let (list, _) = draw(&[obj(1, 0.0, 0.0, 1.0, 1.0)]);

        assert_eq!(list.items()[0].line, Some(LineStyle::from_hex(2.0, 0x00ddff, 0.5)));
        assert_eq!(list.items()[0].fill, None);
        assert_eq!(list.clear_count(), 1);
    }

    #[test]
    fn every_object_in_display_order() {
        let objects = [obj(1, 1.0, 0.0, 1.0, 1.0), obj(2, 2.0, 0.0, 1.0, 1.0), obj(3, 3.0, 0.0, 1.0, 1.0)];
        let (list, _) = draw(&objects);

        let xs: Vec<f32> = list.rects().map(|r| r.x()).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    // ── hit-areas ─────────────────────────────────────────────────────────

    #[test]
    fn circle_hit_area_follows_origin() {
        let o = obj(1, 100.0, 100.0, 20.0, 20.0)
            .with_origin(0.5, 0.5)
            .with_hit_area(Circle::new(0.0, 0.0, 10.0));
        let (list, stats) = draw(&[o]);

        assert_eq!(list.items()[0].cmd, DrawCmd::StrokeRect(Rect::new(90.0, 90.0, 20.0, 20.0)));
        assert_eq!(list.items()[1].cmd, DrawCmd::StrokeCircle(Circle::new(90.0, 90.0, 10.0)));
        assert_eq!(list.items()[1].line, Some(LineStyle::from_hex(2.0, 0xffcc00, 0.5)));
        assert_eq!(stats.map(|s| s.hit_areas), Some(1));
    }

    #[test]
    fn every_recognized_kind_is_offset() {
        let tri = Triangle::new(Vec2::zero(), Vec2::new(4.0, 0.0), Vec2::new(0.0, 4.0));
        let objects = [
            obj(1, 10.0, 10.0, 8.0, 8.0).with_hit_area(Rect::new(1.0, 1.0, 6.0, 6.0)),
            obj(2, 20.0, 20.0, 8.0, 8.0).with_hit_area(Ellipse::new(4.0, 4.0, 8.0, 4.0)),
            obj(3, 30.0, 30.0, 8.0, 8.0).with_hit_area(tri),
        ];
        let (list, stats) = draw(&objects);

        let hits: Vec<&DrawCmd> = list.items()[3..].iter().map(|i| &i.cmd).collect();
        assert_eq!(hits, vec![
            &DrawCmd::StrokeRect(Rect::new(11.0, 11.0, 6.0, 6.0)),
            &DrawCmd::StrokeEllipse(Ellipse::new(24.0, 24.0, 8.0, 4.0)),
            &DrawCmd::StrokeTriangle(Triangle::new(
                Vec2::new(30.0, 30.0),
                Vec2::new(34.0, 30.0),
                Vec2::new(30.0, 34.0),
            )),
        ]);
        assert_eq!(stats.map(|s| s.hit_areas), Some(3));
    }

    #[test]
    fn custom_hit_area_is_skipped_silently() {
        let (list, stats) = draw(&[obj(1, 0.0, 0.0, 5.0, 5.0).with_hit_area(HitArea::custom("polygon"))]);

        assert_eq!(list.len(), 1);
        assert_eq!(list.count(ShapeKind::Rectangle), 1);
        assert_eq!(stats, Some(FrameStats { objects: 1, hit_areas: 0, hit_areas_skipped: 1, masks: 0 }));
    }

    #[test]
    fn no_input_style_without_interactive_objects() {
        let mut list = DrawList::new();
        draw_frame(&DebugDrawConfig::default(), &mut Scratch::default(), &mut list, &[obj(1, 0.0, 0.0, 1.0, 1.0)]);

        assert_eq!(list.line(), Some(LineStyle::from_hex(2.0, 0x00ddff, 0.5)));
    }

    #[test]
    fn input_style_applies_even_when_every_hit_area_is_skipped() {
        let objects = [
            obj(1, 0.0, 0.0, 5.0, 5.0).with_hit_area(HitArea::custom("polygon")),
            obj(2, 9.0, 9.0, 5.0, 5.0).with_hit_area(HitArea::custom("pixel")),
        ];
        let (list, stats) = draw(&objects);

        assert_eq!(list.len(), 2);
        assert_eq!(list.line(), Some(LineStyle::from_hex(2.0, 0xffcc00, 0.5)));
        assert_eq!(list.fill(), None);
        assert_eq!(stats.map(|s| s.hit_areas_skipped), Some(2));
    }

    // ── masks ─────────────────────────────────────────────────────────────

    #[test]
    fn bitmap_mask_outlines_masking_object() {
        let masking = obj(9, 50.0, 50.0, 10.0, 10.0).with_origin(0.5, 0.5);
        let (list, stats) = draw(&[obj(1, 0.0, 0.0, 100.0, 100.0).with_bitmap_mask(masking)]);

        let last = &list.items()[1];
        assert_eq!(last.cmd, DrawCmd::StrokeRect(Rect::new(45.0, 45.0, 10.0, 10.0)));
        assert_eq!(last.line, Some(LineStyle::from_hex(2.0, 0xff0022, 0.5)));
        assert_eq!(last.fill, Some(Color::from_hex(0xff0022, 0.5)));
        assert_eq!(stats.map(|s| s.masks), Some(1));
    }

    #[test]
    fn duplicate_masked_object_drawn_once() {
        let masked = obj(1, 0.0, 0.0, 10.0, 10.0).with_bitmap_mask(obj(2, 3.0, 3.0, 2.0, 2.0));
        let (list, stats) = draw(&[masked.clone(), masked]);

        // two bounding boxes, one mask outline
        assert_eq!(list.len(), 3);
        assert_eq!(stats.map(|s| s.masks), Some(1));
    }

    #[test]
    fn geometry_mask_is_not_outlined() {
        let (list, stats) = draw(&[obj(1, 0.0, 0.0, 10.0, 10.0).with_geometry_mask()]);

        assert_eq!(list.len(), 1);
        assert_eq!(stats.map(|s| s.masks), Some(0));
        // style is still switched for the mask pass
        assert_eq!(list.fill(), Some(Color::from_hex(0xff0022, 0.5)));
    }

    // ── empty display list ────────────────────────────────────────────────

    #[test]
    fn empty_list_touches_nothing() {
        let mut list = DrawList::new();
        list.stroke_rect(1.0, 1.0, 1.0, 1.0);

        let objects: [SceneObject; 0] = [];
        let stats = draw_frame(&DebugDrawConfig::default(), &mut Scratch::default(), &mut list, &objects);

        assert_eq!(stats, None);
        assert_eq!(list.clear_count(), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn empty_list_clears_when_configured() {
        let mut list = DrawList::new();
        list.stroke_rect(1.0, 1.0, 1.0, 1.0);

        let config = DebugDrawConfig::default().with_clear_when_empty(true);
        let objects: [SceneObject; 0] = [];
        let stats = draw_frame(&config, &mut Scratch::default(), &mut list, &objects);

        assert_eq!(stats, Some(FrameStats::default()));
        assert_eq!(list.clear_count(), 1);
        assert!(list.is_empty());
    }

    // ── config ────────────────────────────────────────────────────────────

    #[test]
    fn custom_style_applies_to_every_pass() {
        let config = DebugDrawConfig::default()
            .with_alpha(1.0)
            .with_line_width(1.0)
            .with_color(0x112233)
            .with_input_color(0x445566)
            .with_mask_color(0x778899);
        let objects = [obj(1, 0.0, 0.0, 4.0, 4.0)
            .with_hit_area(Rect::new(0.0, 0.0, 4.0, 4.0))
            .with_bitmap_mask(obj(2, 0.0, 0.0, 4.0, 4.0))];

        let mut list = DrawList::new();
        draw_frame(&config, &mut Scratch::default(), &mut list, &objects);

        let widths_and_colors: Vec<(f32, u32)> = list
            .items()
            .iter()
            .filter_map(|i| i.line.map(|l| (l.width, l.color.to_hex())))
            .collect();
        assert_eq!(widths_and_colors, vec![(1.0, 0x112233), (1.0, 0x445566), (1.0, 0x778899)]);
    }
}
