use chrono::{Local, Timelike};

/// Wall-clock sample for one frame.
///
/// Derived once per frame and immutable for its duration. `Default` is the
/// zero sample (midnight), which also serves as the fallback for
/// degenerate calendar values.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TimeSample {
    /// Hour of day, `0..=23`.
    pub hour: u32,
    /// Minute of hour, `0..=59`.
    pub minute: u32,
    /// Second of minute, `0..=59`.
    pub second: u32,
    /// Nanosecond within the second, `0..=999_999_999`.
    pub nanosecond: u32,
}

impl TimeSample {
    #[inline]
    pub const fn new(hour: u32, minute: u32, second: u32, nanosecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Samples the host's local wall clock.
    pub fn now() -> Self {
        Self::from_timelike(&Local::now())
    }

    /// Builds a sample from any chrono time value.
    ///
    /// Leap seconds surface in chrono as a nanosecond field of 1e9 or
    /// more; those clamp to the last representable nanosecond so angle
    /// math stays in range.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
            second: t.second(),
            nanosecond: t.nanosecond().min(999_999_999),
        }
    }
}
