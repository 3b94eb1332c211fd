//! Coordinate types shared between the scene recorder and the dial layer.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! A positive rotation therefore turns clockwise on screen, which is the
//! direction clock hands sweep.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
