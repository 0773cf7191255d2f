//! Recording drawing surface.
//!
//! Responsibilities:
//! - implement [`crate::Graphics`] by storing renderer-agnostic draw commands
//! - snapshot the active line/fill style onto every recorded stroke
//! - keep capacity across clears so a steady overlay does not allocate per frame

mod cmd;
mod list;
mod style;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
pub use style::LineStyle;
