use std::f64::consts::PI;

use crate::sample::TimeSample;

/// Rotation for one hand, in radians.
///
/// Angles come out of the hour/minute/second formulas and go straight into
/// shape rotation; they are rotation inputs, not bounded ranges, so
/// construction applies no wrapping.
///
/// The one invariant: no constructed angle is ever bit-identical to `PI`.
/// Some host rotation APIs mis-render at the exact half turn, so an exact
/// hit is nudged to [`Angle::HALF_TURN_SENTINEL`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Angle(f64);

impl Angle {
    /// Replacement for an exact half turn: indistinguishable from `PI` on
    /// screen, not bit-identical to it.
    pub const HALF_TURN_SENTINEL: f64 = 3.14158;

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Creates an angle from radians.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self(radians).dodge_half_turn()
    }

    /// Substitutes the sentinel iff the value equals `PI` bit-for-bit.
    ///
    /// Backends without the half-turn defect can treat this as a no-op,
    /// but the hook stays on the construction path.
    #[inline]
    pub fn dodge_half_turn(self) -> Self {
        if self.0 == PI {
            Self(Self::HALF_TURN_SENTINEL)
        } else {
            self
        }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Degrees folded into `[0, 360)`.
    #[inline]
    pub fn wrapped_degrees(self) -> f64 {
        self.degrees().rem_euclid(360.0)
    }
}

/// The three hand rotations derived from one [`TimeSample`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: Angle,
    pub minute: Angle,
    pub second: Angle,
}

impl HandAngles {
    /// Computes the hand rotations for `sample`.
    ///
    /// Hands are authored pointing down (+Y) from the center; the +180°
    /// term turns that authored direction to 12 at a half turn, and each
    /// unit of time sweeps clockwise from there. Minutes bleed into the
    /// hour angle and seconds into the minute angle, so hands glide
    /// between positions instead of snapping.
    pub fn from_sample(sample: &TimeSample) -> Self {
        let h = f64::from(sample.hour);
        let m = f64::from(sample.minute);
        let s = f64::from(sample.second);
        let n = f64::from(sample.nanosecond);

        Self {
            hour: Angle::from_degrees(30.0 * (h + m / 60.0) + 180.0),
            minute: Angle::from_degrees(6.0 * (m + s / 60.0) + 180.0),
            second: Angle::from_degrees(6.0 * (s + n / 1_000_000_000.0) + 180.0),
        }
    }
}
