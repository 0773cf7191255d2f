//! Debug overlay for scene-based game engines.
//!
//! Every frame the overlay outlines, for each object in the host's display
//! list, its bounding box, its pointer hit-area (if it is interactive) and
//! the bounds of the object masking it (for bitmap masks).
//!
//! The engine is reached only through [`SceneHost`], [`Drawable`] and
//! [`Graphics`], so any scene system can host it and tests can drive it with
//! an in-memory scene.
//!
//! ```rust,ignore
//! let mut overlay = DebugDraw::new();
//! overlay.boot(&mut scene)?;
//! // the scene then forwards its lifecycle signals:
//! overlay.handle(&mut scene, SceneEvent::Start);
//! overlay.handle(&mut scene, SceneEvent::Render);
//! ```

pub mod config;
pub mod coords;
pub mod error;
pub mod geom;
pub mod graphics;
pub mod host;
pub mod logging;
pub mod paint;
pub mod plugin;
pub mod scene;

#[cfg(test)]
mod testing;

pub use config::DebugDrawConfig;
pub use error::DebugDrawError;
pub use graphics::Graphics;
pub use host::{Drawable, Listen, Mask, ObjectId, SceneEvent, SceneHost};
pub use plugin::{DebugDraw, FrameStats, PluginState};
