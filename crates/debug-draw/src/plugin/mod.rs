//! The overlay plugin.
//!
//! Lifecycle (driven entirely by host signals):
//!
//! ```text
//! boot ──► Idle ──start──► Active ──shutdown──► Idle ──start──► Active ...
//!   │                                                   destroy (any state) ──► Destroyed
//!   └─(incompatible host)──► Inert
//! ```

mod frame;
mod scratch;

pub use frame::FrameStats;

use log::{debug, trace, warn};

use crate::config::DebugDrawConfig;
use crate::error::DebugDrawError;
use crate::host::{Listen, SceneEvent, SceneHost};

use frame::draw_frame;
use scratch::Scratch;

/// Where the plugin is in its lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PluginState {
    /// Not booted yet.
    Unbooted,
    /// Boot refused by the compatibility check; every signal is ignored.
    Inert,
    /// Listening, no drawing surface.
    Idle,
    /// Holding a drawing surface; render signals redraw it.
    Active,
    /// Deregistered from the host.
    Destroyed,
}

/// Debug overlay outlining bounds, hit-areas and bitmap masks of every
/// object in a host scene.
///
/// One instance serves one scene. Scratch storage is owned per instance, so
/// scenes running their own overlay never share it.
pub struct DebugDraw<H: SceneHost> {
    config: DebugDrawConfig,
    state: PluginState,
    graphic: Option<H::Graphics>,
    scratch: Scratch,
}

impl<H: SceneHost> Default for DebugDraw<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: SceneHost> DebugDraw<H> {
    pub fn new() -> Self {
        Self::with_config(DebugDrawConfig::default())
    }

    pub fn with_config(config: DebugDrawConfig) -> Self {
        Self {
            config,
            state: PluginState::Unbooted,
            graphic: None,
            scratch: Scratch::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &DebugDrawConfig {
        &self.config
    }

    /// Style changes take effect on the next render.
    #[inline]
    pub fn config_mut(&mut self) -> &mut DebugDrawConfig {
        &mut self.config
    }

    #[inline]
    pub fn state(&self) -> PluginState {
        self.state
    }

    /// The drawing surface, while the scene is running.
    #[inline]
    pub fn graphic(&self) -> Option<&H::Graphics> {
        self.graphic.as_ref()
    }

    /// Registers for the host's lifecycle signals.
    ///
    /// An incompatible host is logged and leaves the plugin [`PluginState::Inert`];
    /// the returned error is informational and the host can carry on.
    pub fn boot(&mut self, host: &mut H) -> Result<(), DebugDrawError> {
        match self.state {
            PluginState::Destroyed => return Err(DebugDrawError::Destroyed),
            PluginState::Idle | PluginState::Active => return Ok(()),
            PluginState::Unbooted | PluginState::Inert => {}
        }

        if !host.is_compatible() {
            let err = DebugDrawError::IncompatibleHost { host: host.name().to_owned() };
            warn!("{err}");
            self.state = PluginState::Inert;
            return Err(err);
        }

        host.subscribe(SceneEvent::Start, Listen::Always);
        host.subscribe(SceneEvent::Render, Listen::Always);
        host.subscribe(SceneEvent::Shutdown, Listen::Always);
        host.subscribe(SceneEvent::Destroy, Listen::Once);

        self.state = PluginState::Idle;
        debug!("debug-draw booted on '{}'", host.name());
        Ok(())
    }

    /// Dispatches a lifecycle signal from the host.
    pub fn handle(&mut self, host: &mut H, event: SceneEvent) {
        match self.state {
            PluginState::Unbooted | PluginState::Inert | PluginState::Destroyed => {
                trace!("debug-draw ignoring {event:?} while {:?}", self.state);
                return;
            }
            PluginState::Idle | PluginState::Active => {}
        }

        match event {
            SceneEvent::Start => self.scene_start(host),
            SceneEvent::Render => {
                self.render(host);
            }
            SceneEvent::Shutdown => self.scene_shutdown(host),
            SceneEvent::Destroy => self.scene_destroy(host),
        }
    }

    /// Redraws the overlay from the host's current display list.
    ///
    /// Returns `None` when nothing was drawn: no surface is held, or the
    /// display list is empty and the previous drawing was left in place.
    pub fn render(&mut self, host: &H) -> Option<FrameStats> {
        let graphic = self.graphic.as_mut()?;
        let stats = draw_frame(&self.config, &mut self.scratch, graphic, host.display_list())?;
        trace!("debug-draw frame: {stats:?}");
        Some(stats)
    }

    /// Moves the overlay above everything else in the scene.
    ///
    /// Call after adding other overlays that must render underneath.
    pub fn bring_to_top(&mut self, host: &mut H) {
        if let Some(graphic) = self.graphic.as_ref() {
            host.bring_to_top(graphic);
        }
    }

    fn scene_start(&mut self, host: &mut H) {
        if let Some(stale) = self.graphic.take() {
            host.remove_graphics(stale);
        }
        self.graphic = Some(host.add_graphics());
        self.state = PluginState::Active;
        debug!("debug-draw attached to '{}'", host.name());
    }

    fn scene_shutdown(&mut self, host: &mut H) {
        if let Some(graphic) = self.graphic.take() {
            host.remove_graphics(graphic);
        }
        self.state = PluginState::Idle;
        debug!("debug-draw detached from '{}'", host.name());
    }

    fn scene_destroy(&mut self, host: &mut H) {
        for event in SceneEvent::ALL {
            host.unsubscribe(event);
        }
        if let Some(graphic) = self.graphic.take() {
            host.remove_graphics(graphic);
        }
        self.state = PluginState::Destroyed;
        debug!("debug-draw destroyed with '{}'", host.name());
    }
}
