use gnomon_engine::coords::Vec2;
use gnomon_engine::paint::Color;
use gnomon_engine::scene::{DrawList, ZIndex};

use crate::angle::Angle;

/// Drawing parameters for one hand.
///
/// Hands are authored pointing down (+Y) from the dial center and swung
/// into place by `angle`; the +180° term in the angle formulas makes the
/// authored direction read as 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct HandSpec {
    pub length: f32,
    pub width: f32,
    pub angle: Angle,
    pub color: Color,
}

impl HandSpec {
    #[inline]
    pub fn new(length: f32, width: f32, angle: Angle, color: Color) -> Self {
        Self {
            length,
            width,
            angle,
            color,
        }
    }

    /// Unit vector the hand points along.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::new(0.0, 1.0).rotated(self.angle.radians() as f32)
    }

    /// Point `distance` out from the center along the hand. Negative
    /// distances reach behind the center.
    #[inline]
    pub fn point_at(&self, distance: f32) -> Vec2 {
        self.direction() * distance
    }

    /// Records the stalk + head composite used by the hour and minute
    /// hands: a thin rectangle from the center out to `length`, plus a
    /// capsule head twice the stalk width spanning
    /// `head_offset..head_offset + length` along the same rotation. The
    /// wider head past the narrow stalk is what tapers the hand.
    pub fn record_composite(&self, list: &mut DrawList, z: ZIndex, head_offset: f32) {
        list.push_line(
            z,
            Vec2::zero(),
            self.point_at(self.length),
            self.width,
            self.color,
        );

        // Cap centers are inset by the cap radius so the capsule's overall
        // extent matches the authored span.
        let cap_radius = self.width;
        list.push_capsule(
            z,
            self.point_at(head_offset + cap_radius),
            self.point_at(head_offset + self.length - cap_radius),
            cap_radius,
            self.color,
        );
    }

    /// Records the single-capsule second hand. The extent starts `tail`
    /// behind the center (the counterweight) and runs `length` from there,
    /// so the tip reaches `length - tail` past the center.
    pub fn record_capsule(&self, list: &mut DrawList, z: ZIndex, tail: f32) {
        let cap_radius = self.width / 2.0;
        list.push_capsule(
            z,
            self.point_at(-tail + cap_radius),
            self.point_at(self.length - tail - cap_radius),
            cap_radius,
            self.color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnomon_engine::scene::DrawCmd;

    const EPS: f32 = 1e-4;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn spec(length: f32, width: f32, degrees: f64) -> HandSpec {
        HandSpec::new(length, width, Angle::from_degrees(degrees), Color::BLACK)
    }

    // ── orientation ───────────────────────────────────────────────────────

    #[test]
    fn at_270_degrees_the_hand_points_right() {
        // 3 o'clock: the authored down direction swung to +X.
        let hand = spec(40.0, 4.0, 270.0);
        assert!(close(hand.direction(), Vec2::new(1.0, 0.0)));
        assert!(close(hand.point_at(40.0), Vec2::new(40.0, 0.0)));
    }

    #[test]
    fn at_the_corrected_half_turn_the_hand_points_up() {
        // 12 o'clock via the sentinel, not exact PI.
        let hand = spec(40.0, 4.0, 180.0);
        assert!(close(hand.direction(), Vec2::new(0.0, -1.0)));
    }

    // ── recorded shapes ───────────────────────────────────────────────────

    #[test]
    fn composite_records_stalk_then_head() {
        let mut list = DrawList::new();
        let hand = spec(60.0, 4.0, 270.0);
        hand.record_composite(&mut list, ZIndex::new(0), 20.0);

        assert_eq!(list.len(), 2);
        match &list.items()[0].cmd {
            DrawCmd::Line(stalk) => {
                assert!(close(stalk.a, Vec2::zero()));
                assert!(close(stalk.b, Vec2::new(60.0, 0.0)));
                assert_eq!(stalk.width, 4.0);
            }
            other => panic!("expected stalk line, got {other:?}"),
        }
        match &list.items()[1].cmd {
            DrawCmd::Capsule(head) => {
                // Extent 20..80 along +X, cap radius = stalk width.
                assert_eq!(head.radius, 4.0);
                assert!(close(head.a, Vec2::new(24.0, 0.0)));
                assert!(close(head.b, Vec2::new(76.0, 0.0)));
            }
            other => panic!("expected head capsule, got {other:?}"),
        }
    }

    #[test]
    fn capsule_tail_reaches_behind_the_center() {
        let mut list = DrawList::new();
        let hand = spec(110.0, 4.0, 270.0);
        hand.record_capsule(&mut list, ZIndex::new(0), 10.0);

        match &list.items()[0].cmd {
            DrawCmd::Capsule(sweep) => {
                // Extent -10..100 along +X, cap radius = half the width.
                assert_eq!(sweep.radius, 2.0);
                assert!(close(sweep.a, Vec2::new(-8.0, 0.0)));
                assert!(close(sweep.b, Vec2::new(98.0, 0.0)));
            }
            other => panic!("expected capsule, got {other:?}"),
        }
    }
}
