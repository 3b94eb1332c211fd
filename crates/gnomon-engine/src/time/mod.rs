//! Time subsystem.
//!
//! Provides stable, testable redraw pacing without coupling to any host
//! loop. Intended usage:
//! - one `FramePacer` per drive loop
//! - call `should_render(Instant::now())` on every host tick; compose a
//!   frame only when it returns `true`

mod frame_pacer;

pub use frame_pacer::FramePacer;
