//! Angle indicator arcs
//!
//! Arcs use SVG polar angles (degrees, 0° pointing up, clockwise on screen):
//! - start_angle, end_angle: angular extent
//! - sweep: SVG sweep-flag (true = positive-angle direction)
//! - large-arc flag is derived, set only when the extent exceeds 180°

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::polar_to_cartesian;

/// An SVG elliptical-arc command with equal radii
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPath {
    pub center: DVec2,
    pub radius: f64,
    /// Start angle (degrees)
    pub start_angle: f64,
    /// End angle (degrees)
    pub end_angle: f64,
    pub sweep: bool,
}

impl ArcPath {
    pub fn new(center: DVec2, radius: f64, start_angle: f64, end_angle: f64, sweep: bool) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            sweep,
        }
    }

    #[inline]
    pub fn start_point(&self) -> DVec2 {
        polar_to_cartesian(self.center, self.radius, self.start_angle)
    }

    #[inline]
    pub fn end_point(&self) -> DVec2 {
        polar_to_cartesian(self.center, self.radius, self.end_angle)
    }

    /// Large-arc flag: set iff the angular extent exceeds 180°
    pub fn large_arc(&self) -> bool {
        self.extent() > 180.0
    }

    /// Absolute angular extent in degrees
    pub fn extent(&self) -> f64 {
        (self.end_angle - self.start_angle).abs()
    }

    /// Path data: `M sx sy A r r 0 large sweep ex ey`
    pub fn to_svg_path(&self) -> String {
        let start = self.start_point();
        let end = self.end_point();
        format!(
            "M {} {} A {} {} 0 {} {} {} {}",
            start.x,
            start.y,
            self.radius,
            self.radius,
            u8::from(self.large_arc()),
            u8::from(self.sweep),
            end.x,
            end.y
        )
    }
}
