//! In-memory host used by unit tests.

use crate::host::{Listen, SceneEvent, SceneHost, SceneObject, Subscriptions};
use crate::plugin::DebugDraw;
use crate::scene::DrawList;

pub(crate) struct FakeHost {
    pub(crate) objects: Vec<SceneObject>,
    pub(crate) subscriptions: Subscriptions,
    pub(crate) compatible: bool,
    pub(crate) graphics_added: usize,
    pub(crate) graphics_removed: usize,
    pub(crate) bring_to_top_calls: usize,
}

impl FakeHost {
    pub(crate) fn new() -> Self {
        Self {
            objects: Vec::new(),
            subscriptions: Subscriptions::new(),
            compatible: true,
            graphics_added: 0,
            graphics_removed: 0,
            bring_to_top_calls: 0,
        }
    }

    /// Delivers `event` the way a scene would: only when subscribed.
    pub(crate) fn emit(&mut self, plugin: &mut DebugDraw<FakeHost>, event: SceneEvent) {
        if self.subscriptions.deliver(event) {
            plugin.handle(self, event);
        }
    }
}

impl SceneHost for FakeHost {
    type Object = SceneObject;
    type Graphics = DrawList;

    fn name(&self) -> &str {
        "fake"
    }

    fn is_compatible(&self) -> bool {
        self.compatible
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
        self.graphics_added += 1;
        DrawList::new()
    }

    fn remove_graphics(&mut self, _graphics: DrawList) {
        self.graphics_removed += 1;
    }

    fn bring_to_top(&mut self, _graphics: &DrawList) {
        self.bring_to_top_calls += 1;
    }
}
