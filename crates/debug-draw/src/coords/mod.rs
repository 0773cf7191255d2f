//! Coordinate types shared by hit-area geometry and the recording surface.
//!
//! Canonical space is the host scene's world space:
//! - origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
