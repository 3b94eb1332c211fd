pub(crate) mod capsule;
pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod text;

use crate::paint::Color;

/// Stroke drawn along a shape's outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
