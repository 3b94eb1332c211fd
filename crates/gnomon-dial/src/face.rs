use gnomon_engine::coords::{Vec2, Viewport};
use gnomon_engine::paint::{BlendMode, Color};
use gnomon_engine::scene::{DrawList, Stroke};
use log::trace;

use crate::angle::HandAngles;
use crate::geometry::DialGeometry;
use crate::hand::HandSpec;
use crate::numerals;
use crate::sample::TimeSample;

/// Host color scheme; selects the primary foreground color.
///
/// Only the primary color adapts to the theme. The accent stays fixed so
/// the second hand reads the same in light and dark.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Foreground for the dial, numerals, and hour/minute hands.
    #[inline]
    pub fn primary(self) -> Color {
        match self {
            ColorScheme::Light => Color::BLACK,
            ColorScheme::Dark => Color::WHITE,
        }
    }
}

/// Z-layers in paint order. The composer pushes in this same order, so
/// the constants double as the layering contract: hour above minute, the
/// second hand above the hub ring, the cutout above everything it erases.
mod layer {
    use gnomon_engine::scene::ZIndex;

    pub const OUTER_RING: ZIndex = ZIndex::new(0);
    pub const NUMERALS: ZIndex = ZIndex::new(1);
    pub const MINUTE_HAND: ZIndex = ZIndex::new(2);
    pub const HOUR_HAND: ZIndex = ZIndex::new(3);
    pub const HUB_RING: ZIndex = ZIndex::new(4);
    pub const SECOND_HAND: ZIndex = ZIndex::new(5);
    pub const CUTOUT: ZIndex = ZIndex::new(6);
    pub const HUB_OUTLINE: ZIndex = ZIndex::new(7);
}

/// Composes one clock-face frame into a draw list.
///
/// Stateless across frames: the same sample, viewport, and scheme always
/// record the same stream.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFace {
    accent: Color,
}

impl ClockFace {
    /// Fixed second-hand and hub-outline color (system orange).
    pub const DEFAULT_ACCENT: Color = Color::new(1.0, 149.0 / 255.0, 0.0, 1.0);

    pub fn new() -> Self {
        Self {
            accent: Self::DEFAULT_ACCENT,
        }
    }

    pub fn with_accent(accent: Color) -> Self {
        Self { accent }
    }

    #[inline]
    pub fn accent(&self) -> Color {
        self.accent
    }

    /// Records the face for `sample` into `list`.
    ///
    /// A degenerate viewport records nothing; the frame is simply blank
    /// and the next tick supersedes it.
    pub fn compose(
        &self,
        list: &mut DrawList,
        viewport: Viewport,
        scheme: ColorScheme,
        sample: &TimeSample,
    ) {
        if !viewport.is_valid() {
            trace!("skipping compose for degenerate viewport {viewport:?}");
            return;
        }

        let geometry = DialGeometry::from_viewport(viewport);
        let angles = HandAngles::from_sample(sample);
        let primary = scheme.primary();

        // Border ring in surface coordinates; everything after is authored
        // around the dial center.
        list.push_stroke_circle(
            layer::OUTER_RING,
            viewport.center(),
            geometry.outer_ring_radius(),
            Stroke::new(geometry.border_width, primary),
        );
        list.translate(viewport.center());

        numerals::record_numerals(list, layer::NUMERALS, &geometry, primary);

        let minute = HandSpec::new(
            geometry.minute_length,
            geometry.stalk_width,
            angles.minute,
            primary,
        );
        minute.record_composite(list, layer::MINUTE_HAND, geometry.head_offset);

        // Hour after minute, so it stacks on top where they overlap.
        let hour = HandSpec::new(
            geometry.hour_length,
            geometry.stalk_width,
            angles.hour,
            primary,
        );
        hour.record_composite(list, layer::HOUR_HAND, geometry.head_offset);

        list.push_stroke_circle(
            layer::HUB_RING,
            Vec2::zero(),
            geometry.hub_radius,
            Stroke::new(geometry.hub_stroke, primary),
        );

        // Second hand after the hub ring, so it passes over it.
        let second = HandSpec::new(
            geometry.second_length,
            geometry.second_width,
            angles.second,
            self.accent,
        );
        second.record_capsule(list, layer::SECOND_HAND, geometry.second_offset);

        // Punch the hub hole through every layer recorded so far. The
        // clear scope covers exactly this one fill; the fill color is
        // ignored under `Clear`.
        list.push_blend(BlendMode::Clear);
        list.push_fill_circle(
            layer::CUTOUT,
            Vec2::zero(),
            geometry.cutout_radius(),
            Color::WHITE,
        );
        list.pop_blend();

        // Visible hub ring around the fresh hole.
        list.push_stroke_circle(
            layer::HUB_OUTLINE,
            Vec2::zero(),
            geometry.cutout_radius(),
            Stroke::new(geometry.hub_stroke, self.accent),
        );
    }
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new()
    }
}
