//! Gnomon dial — an analog clock face recorded on top of `gnomon-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use gnomon_dial::{ClockDriver, ColorScheme};
//! use gnomon_engine::coords::Viewport;
//! use gnomon_engine::scene::DrawList;
//!
//! let mut driver = ClockDriver::new();
//! let mut list = DrawList::new();
//!
//! // In your host's redraw callback:
//! if driver.on_tick(&mut list, Viewport::new(width, height), ColorScheme::Dark) {
//!     for item in list.iter_in_paint_order() {
//!         // Replay item.cmd with your renderer, honoring item.blend.
//!     }
//! }
//! ```
//!
//! The host owns the surface, the redraw trigger, and teardown; this crate
//! owns everything between a wall-clock sample and a finished draw stream.

pub mod angle;
pub mod driver;
pub mod face;
pub mod geometry;
pub mod hand;
pub mod numerals;
pub mod sample;

pub use angle::{Angle, HandAngles};
pub use driver::ClockDriver;
pub use face::{ClockFace, ColorScheme};
pub use geometry::DialGeometry;
pub use hand::HandSpec;
pub use sample::TimeSample;
