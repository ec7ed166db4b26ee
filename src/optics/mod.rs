//! Ray geometry for the optics diagrams
//!
//! Everything in here is a pure function of the lesson parameters and the fixed
//! canvas constants:
//! - No hidden state, no caching (every call is O(1))
//! - Degrees in, degrees out; radians stay internal
//! - Screen coordinates (y grows downward)

pub mod arc;
pub mod reflection;
pub mod refraction;

pub use arc::ArcPath;
pub use reflection::{ReflectionGeometry, arrow_head, reflect};
pub use refraction::{RefractionGeometry, SnellOutcome, refract, refract_from, snell};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A straight line between two canvas points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    #[cfg(test)]
    pub(crate) fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    /// Unsigned angle (degrees) between this segment and a vertical normal
    pub fn angle_from_vertical_deg(&self) -> f64 {
        let d = self.end - self.start;
        crate::rad_to_deg(d.x.abs().atan2(d.y.abs()))
    }
}

/// Two short strokes forming a chevron at a ray's terminal point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrowHead {
    pub tip: DVec2,
    pub left: DVec2,
    pub right: DVec2,
}

/// A positioned text annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub pos: DVec2,
    pub text: String,
}

/// Geometry for whichever lesson is currently mounted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DiagramGeometry {
    Reflection(ReflectionGeometry),
    Refraction(RefractionGeometry),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_angle_from_vertical() {
        let s = Segment::new(DVec2::new(0.0, 0.0), DVec2::new(0.0, 10.0));
        assert!(s.angle_from_vertical_deg().abs() < 1e-12);

        let s = Segment::new(DVec2::new(0.0, 0.0), DVec2::new(5.0, -5.0));
        assert!((s.angle_from_vertical_deg() - 45.0).abs() < 1e-9);
        assert!((s.length() - 50.0_f64.sqrt()).abs() < 1e-12);
    }
}
