//! Gnomon engine crate.
//!
//! Owns the renderer-agnostic pieces the dial layer records into: the scene
//! draw stream, coordinate and paint types, redraw pacing, and logging.
//! Host applications replay the recorded stream with whatever renderer they
//! own; nothing in this crate touches a GPU or a window.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod time;
