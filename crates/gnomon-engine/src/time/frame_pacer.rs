use std::time::{Duration, Instant};

/// Minimum-interval gate between composed frames.
///
/// Hosts with continuous display-link ticking can call
/// [`should_render`](Self::should_render) far more often than a frame is
/// worth producing. The pacer admits at most one frame per minimum
/// interval; ticks inside the interval are rejected and cost nothing.
///
/// `FramePacer` is designed to be used per drive loop so that multiple
/// surfaces do not share pacing state.
#[derive(Debug, Clone)]
pub struct FramePacer {
    min_interval: Duration,
    last: Option<Instant>,
}

impl FramePacer {
    /// Default floor between frames: 1/20 s.
    pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(50);

    /// Creates a pacer with the default minimum interval.
    pub fn new() -> Self {
        Self::with_min_interval(Self::DEFAULT_MIN_INTERVAL)
    }

    /// Creates a pacer with a custom minimum interval.
    ///
    /// A zero interval admits every tick.
    pub fn with_min_interval(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    #[inline]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Resets the pacing baseline.
    ///
    /// Useful when resuming from suspension; the next tick is admitted
    /// unconditionally.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Returns whether a frame should be composed at `now`.
    ///
    /// The first tick after construction or [`reset`](Self::reset) always
    /// passes. Saturating arithmetic keeps a non-monotonic `now` (observed
    /// on some platforms around suspend) from poisoning the gate.
    pub fn should_render(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.min_interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}
