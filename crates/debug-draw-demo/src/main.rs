use anyhow::{Context, Result};
use log::info;

use debug_draw::coords::{Rect, Vec2};
use debug_draw::geom::{Circle, Ellipse, HitArea, ShapeKind, Triangle};
use debug_draw::host::{SceneObject, Subscriptions};
use debug_draw::logging::{init_logging, LoggingConfig};
use debug_draw::scene::DrawList;
use debug_draw::{DebugDraw, DebugDrawConfig, Listen, ObjectId, SceneEvent, SceneHost};

/// Render layers of the demo scene, back to front.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Layer {
    World,
    Overlay,
    Hud,
}

/// Minimal in-memory scene: a display list, a listener table and a layer order.
struct DemoScene {
    objects: Vec<SceneObject>,
    subscriptions: Subscriptions,
    layers: Vec<Layer>,
}

impl DemoScene {
    fn new(objects: Vec<SceneObject>) -> Self {
        Self {
            objects,
            subscriptions: Subscriptions::new(),
            layers: vec![Layer::World, Layer::Hud],
        }
    }

    fn emit(&mut self, overlay: &mut DebugDraw<DemoScene>, event: SceneEvent) {
        if self.subscriptions.deliver(event) {
            overlay.handle(self, event);
        }
    }

    /// Advances the moving objects by `dt` seconds.
    fn update(&mut self, dt: f32) {
        for obj in &mut self.objects {
            if obj.hit_area.is_some() {
                obj.x += 60.0 * dt;
            }
        }
    }
}

impl SceneHost for DemoScene {
    type Object = SceneObject;
    type Graphics = DrawList;

    fn name(&self) -> &str {
        "demo"
    }

    fn subscribe(&mut self, event: SceneEvent, listen: Listen) {
        self.subscriptions.subscribe(event, listen);
    }

    fn unsubscribe(&mut self, event: SceneEvent) {
        self.subscriptions.unsubscribe(event);
    }

    fn display_list(&self) -> &[SceneObject] {
        &self.objects
    }

    fn add_graphics(&mut self) -> DrawList {
        // New graphics land on top of the world but under the HUD.
        let at = self.layers.iter().position(|l| *l == Layer::Hud).unwrap_or(self.layers.len());
        self.layers.insert(at, Layer::Overlay);
        DrawList::new()
    }

    fn remove_graphics(&mut self, _graphics: DrawList) {
        self.layers.retain(|l| *l != Layer::Overlay);
    }

    fn bring_to_top(&mut self, _graphics: &DrawList) {
        self.layers.retain(|l| *l != Layer::Overlay);
        self.layers.push(Layer::Overlay);
    }
}

fn build_scene() -> Vec<SceneObject> {
    let mask = SceneObject::new(ObjectId(100), 400.0, 300.0, 64.0, 64.0).with_origin(0.5, 0.5);

    vec![
        SceneObject::new(ObjectId(1), 0.0, 0.0, 800.0, 600.0),
        SceneObject::new(ObjectId(2), 120.0, 80.0, 48.0, 48.0)
            .with_origin(0.5, 0.5)
            .with_hit_area(Circle::new(24.0, 24.0, 24.0)),
        SceneObject::new(ObjectId(3), 240.0, 80.0, 96.0, 32.0)
            .with_hit_area(Rect::new(0.0, 0.0, 96.0, 32.0)),
        SceneObject::new(ObjectId(4), 400.0, 80.0, 64.0, 32.0)
            .with_hit_area(Ellipse::new(32.0, 16.0, 64.0, 32.0)),
        SceneObject::new(ObjectId(5), 520.0, 80.0, 40.0, 40.0).with_hit_area(Triangle::new(
            Vec2::new(20.0, 0.0),
            Vec2::new(40.0, 40.0),
            Vec2::new(0.0, 40.0),
        )),
        SceneObject::new(ObjectId(6), 620.0, 80.0, 40.0, 40.0).with_hit_area(HitArea::custom("polygon")),
        SceneObject::new(ObjectId(7), 400.0, 300.0, 200.0, 120.0)
            .with_origin(0.5, 0.5)
            .with_bitmap_mask(mask),
    ]
}

fn log_surface(overlay: &DebugDraw<DemoScene>) {
    let Some(list) = overlay.graphic() else {
        info!("no overlay surface");
        return;
    };
    let counts: Vec<String> = ShapeKind::ALL
        .iter()
        .map(|kind| format!("{}={}", kind.name(), list.count(*kind)))
        .collect();
    info!("overlay holds {} outlines ({})", list.len(), counts.join(", "));
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut scene = DemoScene::new(build_scene());
    let mut overlay = DebugDraw::with_config(DebugDrawConfig::default().with_line_width(1.0));

    overlay.boot(&mut scene).context("failed to boot debug overlay")?;

    scene.emit(&mut overlay, SceneEvent::Start);
    for _ in 0..3 {
        scene.update(1.0 / 60.0);
        scene.emit(&mut overlay, SceneEvent::Render);
    }
    log_surface(&overlay);

    overlay.bring_to_top(&mut scene);
    info!("layer order: {:?}", scene.layers);

    // An emptied scene leaves the last outlines on screen.
    let saved = std::mem::take(&mut scene.objects);
    scene.emit(&mut overlay, SceneEvent::Render);
    log_surface(&overlay);

    scene.emit(&mut overlay, SceneEvent::Shutdown);
    scene.objects = saved;
    scene.emit(&mut overlay, SceneEvent::Start);
    scene.emit(&mut overlay, SceneEvent::Render);
    log_surface(&overlay);

    scene.emit(&mut overlay, SceneEvent::Destroy);
    info!("overlay state after destroy: {:?}", overlay.state());

    Ok(())
}
