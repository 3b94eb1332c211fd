use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Oriented thick-line draw payload.
///
/// The shape is the rectangle of `width` swept along the segment `a`–`b`,
/// with flat ends at both endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub a: Vec2,
    pub b: Vec2,
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(a: Vec2, b: Vec2, width: f32, color: Color) -> Self {
        Self { a, b, width, color }
    }
}

impl DrawList {
    /// Records a filled oriented thick line.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, a: Vec2, b: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd::new(a, b, width, color)));
    }
}
