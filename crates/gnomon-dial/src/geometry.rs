use gnomon_engine::coords::Viewport;

/// Every size on the face, derived as fixed ratios of one dial radius.
///
/// Doubling the radius doubles every field; nothing here is an absolute
/// pixel constant, so the face scales to any surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialGeometry {
    /// Dial radius: half the minimum viewport dimension.
    pub radius: f32,
    /// Stroke width of the outer border ring.
    pub border_width: f32,
    /// Width of the hour/minute hand stalk rectangles.
    pub stalk_width: f32,
    pub hour_length: f32,
    pub minute_length: f32,
    pub second_length: f32,
    pub second_width: f32,
    /// Distance from center to the start of a hand's capsule head.
    pub head_offset: f32,
    /// Length of the second hand's counterweight tail behind the center.
    pub second_offset: f32,
    /// Radius of the hub ring at the center.
    pub hub_radius: f32,
    /// Stroke width of the hub ring and hub outline.
    pub hub_stroke: f32,
    pub numeral_size: f32,
    /// Distance from center to each numeral's center point.
    pub numeral_offset: f32,
}

impl DialGeometry {
    /// Derives the full geometry from a dial radius.
    pub fn from_radius(radius: f32) -> Self {
        Self {
            radius,
            border_width: radius / 25.0,
            stalk_width: radius / 30.0,
            hour_length: radius / 2.5,
            minute_length: radius / 1.5,
            second_length: radius * 1.1,
            second_width: radius / 25.0,
            head_offset: radius / 5.0,
            second_offset: radius / 6.0,
            hub_radius: radius / 12.0,
            hub_stroke: radius / 40.0,
            numeral_size: radius / 4.0,
            numeral_offset: radius * 0.75,
        }
    }

    /// Derives the geometry for a viewport: the dial fills the largest
    /// circle that fits.
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self::from_radius(viewport.width.min(viewport.height) / 2.0)
    }

    /// Radius of the stroked border circle, inset by half the stroke so
    /// the border stays inside the dial.
    #[inline]
    pub fn outer_ring_radius(&self) -> f32 {
        self.radius - self.border_width / 2.0
    }

    /// Radius of the transparent hub cutout.
    #[inline]
    pub fn cutout_radius(&self) -> f32 {
        self.hub_radius - self.hub_stroke
    }
}
