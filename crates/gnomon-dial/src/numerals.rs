use gnomon_engine::coords::Vec2;
use gnomon_engine::paint::Color;
use gnomon_engine::scene::{DrawList, FontWeight, ZIndex};

use crate::geometry::DialGeometry;

/// Angular step between adjacent hour numerals.
const STEP_DEGREES: f64 = 30.0;

/// Center point of numeral `number` (1..=12).
///
/// The straight-up vector rotated by `number * 30°`, using the same
/// clockwise rotation hand placement uses, so numerals stay concentric
/// with the hands; 12 comes back to the top after a full turn.
pub fn numeral_center(number: u32, offset: f32) -> Vec2 {
    let radians = (f64::from(number) * STEP_DEGREES).to_radians() as f32;
    Vec2::new(0.0, -offset).rotated(radians)
}

/// Records the twelve bold hour numerals around the dial.
pub fn record_numerals(list: &mut DrawList, z: ZIndex, geometry: &DialGeometry, color: Color) {
    for number in 1..=12u32 {
        list.push_text(
            z,
            number.to_string(),
            numeral_center(number, geometry.numeral_offset),
            geometry.numeral_size,
            FontWeight::Bold,
            color,
        );
    }
}
