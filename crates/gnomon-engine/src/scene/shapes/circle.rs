use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Circle draw payload.
///
/// `fill` and `stroke` are independent; a ring is a stroke with no fill.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, fill: Option<Color>, stroke: Option<Stroke>) -> Self {
        Self { center, radius, fill, stroke }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, fill, stroke)));
    }

    /// Records a filled circle.
    #[inline]
    pub fn push_fill_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, color: Color) {
        self.push_circle(z, center, radius, Some(color), None);
    }

    /// Records a circle outline stroked centered on `radius`.
    #[inline]
    pub fn push_stroke_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, stroke: Stroke) {
        self.push_circle(z, center, radius, None, Some(stroke));
    }
}
