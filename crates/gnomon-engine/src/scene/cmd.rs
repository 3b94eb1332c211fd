use crate::coords::Vec2;

use super::shapes::capsule::CapsuleCmd;
use super::shapes::circle::CircleCmd;
use super::shapes::line::LineCmd;
use super::shapes::text::TextCmd;

/// Renderer-agnostic draw command.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach the host replayer about the new variant
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Line(LineCmd),
    Capsule(CapsuleCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Shifts the command's coordinates by `offset`.
    ///
    /// Applied at record time so replayers never carry transform state.
    pub(crate) fn offset_by(&mut self, offset: Vec2) {
        match self {
            DrawCmd::Circle(c) => c.center = c.center + offset,
            DrawCmd::Line(l) => {
                l.a = l.a + offset;
                l.b = l.b + offset;
            }
            DrawCmd::Capsule(c) => {
                c.a = c.a + offset;
                c.b = c.b + offset;
            }
            DrawCmd::Text(t) => t.center = t.center + offset,
        }
    }
}
