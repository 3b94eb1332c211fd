use std::time::{Duration, Instant};

use gnomon_engine::coords::Viewport;
use gnomon_engine::scene::DrawList;
use gnomon_engine::time::FramePacer;

use crate::face::{ClockFace, ColorScheme};
use crate::sample::TimeSample;

/// Drives the clock from host redraw ticks.
///
/// The host calls [`on_tick`](Self::on_tick) as often as its display loop
/// fires; the driver samples the wall clock and composes a frame at most
/// once per pacing interval. A slower host tick rate just yields a
/// choppier second hand. The loop is host-terminated: dropping the driver
/// is the only teardown.
#[derive(Debug)]
pub struct ClockDriver {
    face: ClockFace,
    pacer: FramePacer,
}

impl ClockDriver {
    pub fn new() -> Self {
        Self {
            face: ClockFace::new(),
            pacer: FramePacer::new(),
        }
    }

    /// Creates a driver with a custom pacing floor.
    pub fn with_min_interval(min_interval: Duration) -> Self {
        Self {
            face: ClockFace::new(),
            pacer: FramePacer::with_min_interval(min_interval),
        }
    }

    #[inline]
    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    /// Resets the pacing baseline, e.g. when the host resumes the view;
    /// the next tick composes unconditionally.
    pub fn reset_pacing(&mut self) {
        self.pacer.reset();
    }

    /// Handles one host tick.
    ///
    /// When the pacing gate passes, clears `list`, records a fresh frame
    /// for the current wall-clock time, and returns `true`. Otherwise
    /// leaves `list` untouched and returns `false` so the host can skip
    /// presentation.
    pub fn on_tick(&mut self, list: &mut DrawList, viewport: Viewport, scheme: ColorScheme) -> bool {
        if !self.pacer.should_render(Instant::now()) {
            return false;
        }

        let sample = TimeSample::now();
        list.clear();
        self.face.compose(list, viewport, scheme, &sample);
        true
    }
}

impl Default for ClockDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_composes_a_frame() {
        let mut driver = ClockDriver::new();
        let mut list = DrawList::new();
        assert!(driver.on_tick(&mut list, Viewport::new(200.0, 200.0), ColorScheme::Light));
        assert!(!list.is_empty());
    }

    #[test]
    fn immediate_second_tick_is_paced_out() {
        let mut driver = ClockDriver::new();
        let mut list = DrawList::new();
        assert!(driver.on_tick(&mut list, Viewport::new(200.0, 200.0), ColorScheme::Light));
        let recorded = list.len();

        // Within the 1/20 s floor; the list is left as-is.
        assert!(!driver.on_tick(&mut list, Viewport::new(200.0, 200.0), ColorScheme::Light));
        assert_eq!(list.len(), recorded);
    }

    #[test]
    fn zero_interval_composes_every_tick() {
        let mut driver = ClockDriver::with_min_interval(Duration::ZERO);
        let mut list = DrawList::new();
        assert!(driver.on_tick(&mut list, Viewport::new(200.0, 200.0), ColorScheme::Light));
        assert!(driver.on_tick(&mut list, Viewport::new(200.0, 200.0), ColorScheme::Light));
    }

    #[test]
    fn reset_admits_the_next_tick() {
        let mut driver = ClockDriver::new();
        let mut list = DrawList::new();
        assert!(driver.on_tick(&mut list, Viewport::new(200.0, 200.0), ColorScheme::Light));
        driver.reset_pacing();
        assert!(driver.on_tick(&mut list, Viewport::new(200.0, 200.0), ColorScheme::Light));
    }

    #[test]
    fn degenerate_viewport_yields_an_empty_frame() {
        let mut driver = ClockDriver::new();
        let mut list = DrawList::new();
        // The tick is still consumed; the frame is just blank.
        assert!(driver.on_tick(&mut list, Viewport::new(0.0, 0.0), ColorScheme::Light));
        assert!(list.is_empty());
    }
}
