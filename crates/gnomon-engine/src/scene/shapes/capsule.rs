use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Capsule (stadium) draw payload.
///
/// `a` and `b` are the centers of the two end caps; the filled shape is the
/// segment swept by a disc of `radius`. Total extent along the axis is
/// `|b - a| + 2 * radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct CapsuleCmd {
    pub a: Vec2,
    pub b: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl CapsuleCmd {
    #[inline]
    pub fn new(a: Vec2, b: Vec2, radius: f32, color: Color) -> Self {
        Self { a, b, radius, color }
    }
}

impl DrawList {
    /// Records a filled capsule.
    #[inline]
    pub fn push_capsule(&mut self, z: ZIndex, a: Vec2, b: Vec2, radius: f32, color: Color) {
        self.push(z, DrawCmd::Capsule(CapsuleCmd::new(a, b, radius, color)));
    }
}
