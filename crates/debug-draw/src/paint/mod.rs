//! Color model used by the recording surface.
//!
//! The overlay itself speaks the host's `0xRRGGBB` + alpha convention;
//! [`Color::from_hex`] bridges the two.

pub mod color;

pub use color::Color;
