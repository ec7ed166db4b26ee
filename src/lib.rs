//! Optics Slides - interactive reflection and refraction lessons
//!
//! Core modules:
//! - `optics`: Pure ray geometry (law of reflection, Snell's law, angle arcs)
//! - `lesson`: Per-lesson parameter holders that recompute geometry on change
//! - `slides`: Slide deck navigation state machine
//! - `renderer`: SVG markup for the derived geometry
//! - `settings`: Deck configuration

pub mod error;
pub mod lesson;
pub mod optics;
pub mod renderer;
pub mod settings;
pub mod slides;

pub use error::{LessonError, LessonResult};
pub use lesson::{LessonPanel, LessonText, ReflectionParams, RefractionParams};
pub use settings::{DeckSettings, ResumePolicy};
pub use slides::{DeckState, EntryTicket, LessonId, SlideDeck};

use glam::DVec2;

/// Diagram configuration constants
pub mod consts {
    /// Reflection canvas (plane mirror)
    pub const REFLECTION_WIDTH: f64 = 600.0;
    pub const REFLECTION_HEIGHT: f64 = 500.0;
    /// Length of the incident and reflected rays
    pub const REFLECTION_RAY_LENGTH: f64 = 150.0;
    /// Horizontal inset of the mirror line from the canvas edges
    pub const MIRROR_INSET: f64 = 50.0;
    /// Half length of the dashed normal
    pub const REFLECTION_NORMAL_HALF: f64 = 150.0;
    /// Arrowhead wing length
    pub const ARROW_SIZE: f64 = 8.0;
    /// Label offsets from the point of incidence
    pub const INCIDENT_LABEL_OFFSET: (f64, f64) = (-120.0, 40.0);
    pub const REFLECTED_LABEL_OFFSET: (f64, f64) = (60.0, 40.0);

    /// Refraction canvas (two media)
    pub const REFRACTION_WIDTH: f64 = 900.0;
    pub const REFRACTION_HEIGHT: f64 = 420.0;
    pub const INCIDENT_RAY_LENGTH: f64 = 220.0;
    pub const REFRACTED_RAY_LENGTH: f64 = 220.0;
    pub const REFRACTION_NORMAL_HALF: f64 = 140.0;
    /// Refractive index of the upper medium (air)
    pub const N1_AIR: f64 = 1.0;

    /// Angle indicator arcs
    pub const INCIDENT_ARC_RADIUS: f64 = 34.0;
    pub const INCIDENT_LABEL_GAP: f64 = 16.0;
    pub const REFRACTED_ARC_RADIUS: f64 = 42.0;
    pub const REFRACTED_LABEL_GAP: f64 = 20.0;
}

/// Degrees to radians, multiplying before dividing so results match browser math bit for bit
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    (deg * std::f64::consts::PI) / 180.0
}

/// Radians to degrees (same operation order as [`deg_to_rad`])
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    (rad * 180.0) / std::f64::consts::PI
}

/// Convert an SVG polar angle to a cartesian point.
///
/// The angle is rotated by -90° so that 0° points straight up and angles grow clockwise
/// in screen space (y grows downward).
#[inline]
pub fn polar_to_cartesian(center: DVec2, radius: f64, angle_deg: f64) -> DVec2 {
    let angle = ((angle_deg - 90.0) * std::f64::consts::PI) / 180.0;
    DVec2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
