use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Font weight hint.
///
/// The replaying backend maps this onto whatever font stack it owns; the
/// scene only records the request.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Center of the laid-out glyph block in logical pixels.
    pub center: Vec2,
    /// Font size in logical pixels.
    pub size: f32,
    pub weight: FontWeight,
    pub color: Color,
}

impl DrawList {
    /// Records a text draw command centered at `center`.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        center: Vec2,
        size: f32,
        weight: FontWeight,
        color: Color,
    ) {
        self.push(
            z,
            DrawCmd::Text(TextCmd {
                text: text.into(),
                center,
                size,
                weight,
                color,
            }),
        );
    }
}
