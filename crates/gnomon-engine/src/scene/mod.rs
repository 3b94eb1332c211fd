//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - track the recording origin and the scoped compositing mode
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
pub use shapes::Stroke;
pub use shapes::capsule::CapsuleCmd;
pub use shapes::circle::CircleCmd;
pub use shapes::line::LineCmd;
pub use shapes::text::{FontWeight, TextCmd};
