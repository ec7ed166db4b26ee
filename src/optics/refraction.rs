//! Refraction across a flat interface (Snell's law)
//!
//! The interface is horizontal through the canvas center; the upper medium is air.
//! Total internal reflection is decided purely by `|sin θ2| > 1`, with no check of
//! which medium is denser. `sin θ2 == 1` still refracts (at 90°).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::{ArcPath, Label, Segment};
use crate::consts::*;
use crate::{deg_to_rad, polar_to_cartesian, rad_to_deg};

/// Result of applying Snell's law to one incident angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnellOutcome {
    /// `(n1 / n2) * sin θ1`, unclamped
    pub sin_theta2: f64,
    pub total_internal_reflection: bool,
    /// Refracted angle in radians (0.0 placeholder under TIR)
    pub theta2: f64,
}

impl SnellOutcome {
    /// Refracted angle in degrees, `None` under total internal reflection
    pub fn refracted_angle_deg(&self) -> Option<f64> {
        if self.total_internal_reflection {
            None
        } else {
            Some(rad_to_deg(self.theta2))
        }
    }
}

/// Apply Snell's law for an incident angle in degrees
pub fn snell(n1: f64, n2: f64, incident_deg: f64) -> SnellOutcome {
    let sin_theta2 = (n1 / n2) * deg_to_rad(incident_deg).sin();
    let total_internal_reflection = sin_theta2.abs() > 1.0;
    let theta2 = if total_internal_reflection {
        0.0
    } else {
        sin_theta2.clamp(-1.0, 1.0).asin()
    };

    SnellOutcome {
        sin_theta2,
        total_internal_reflection,
        theta2,
    }
}

/// Everything needed to draw the refraction diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefractionGeometry {
    pub incident_angle_deg: f64,
    pub n1: f64,
    pub n2: f64,
    pub total_internal_reflection: bool,
    /// `None` under total internal reflection
    pub refracted_angle_deg: Option<f64>,
    /// Meeting point of the rays (canvas center)
    pub center: DVec2,
    pub incident: Segment,
    pub refracted: Option<Segment>,
    pub incident_arc: ArcPath,
    pub refracted_arc: Option<ArcPath>,
    pub incident_label: Label,
    pub refracted_label: Option<Label>,
    pub interface: Segment,
    pub normal: Segment,
}

/// Refraction from air into a medium of index `n2` (UI ranges: 0..=80°, 1.0..=2.5)
pub fn refract(incident_deg: f64, n2: f64) -> RefractionGeometry {
    refract_from(N1_AIR, n2, incident_deg)
}

/// Refraction diagram for arbitrary media indices
pub fn refract_from(n1: f64, n2: f64, incident_deg: f64) -> RefractionGeometry {
    let center = DVec2::new(REFRACTION_WIDTH / 2.0, REFRACTION_HEIGHT / 2.0);
    let outcome = snell(n1, n2, incident_deg);
    let theta1 = deg_to_rad(incident_deg);
    let theta2 = outcome.theta2;
    let theta2_deg = rad_to_deg(theta2);

    let incident_start = center - DVec2::new(theta1.sin(), theta1.cos()) * INCIDENT_RAY_LENGTH;
    let refracted_end = center + DVec2::new(theta2.sin(), theta2.cos()) * REFRACTED_RAY_LENGTH;

    let incident_arc = ArcPath::new(
        center,
        INCIDENT_ARC_RADIUS,
        360.0 - incident_deg,
        360.0,
        true,
    );
    let incident_label = Label {
        pos: polar_to_cartesian(
            center,
            INCIDENT_ARC_RADIUS + INCIDENT_LABEL_GAP,
            360.0 - incident_deg / 2.0,
        ),
        text: format!("θ₁ {incident_deg:.0}°"),
    };

    let (refracted, refracted_arc, refracted_label) = if outcome.total_internal_reflection {
        (None, None, None)
    } else {
        let arc = ArcPath::new(
            center,
            REFRACTED_ARC_RADIUS,
            180.0,
            180.0 - theta2_deg,
            false,
        );
        let label = Label {
            pos: polar_to_cartesian(
                center,
                REFRACTED_ARC_RADIUS + REFRACTED_LABEL_GAP,
                180.0 - theta2_deg / 2.0,
            ),
            text: format!("θ₂ {theta2_deg:.1}°"),
        };
        (Some(Segment::new(center, refracted_end)), Some(arc), Some(label))
    };

    RefractionGeometry {
        incident_angle_deg: incident_deg,
        n1,
        n2,
        total_internal_reflection: outcome.total_internal_reflection,
        refracted_angle_deg: outcome.refracted_angle_deg(),
        center,
        incident: Segment::new(incident_start, center),
        refracted,
        incident_arc,
        refracted_arc,
        incident_label,
        refracted_label,
        interface: Segment::new(
            DVec2::new(0.0, center.y),
            DVec2::new(REFRACTION_WIDTH, center.y),
        ),
        normal: Segment::new(
            DVec2::new(center.x, center.y - REFRACTION_NORMAL_HALF),
            DVec2::new(center.x, center.y + REFRACTION_NORMAL_HALF),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_glass_at_30_degrees() {
        let g = refract(30.0, 1.5);
        assert!(!g.total_internal_reflection);
        let theta2 = g.refracted_angle_deg.unwrap();
        assert!((theta2 - 19.47).abs() < 0.01, "theta2 = {theta2}");
        assert_eq!(g.incident_label.text, "θ₁ 30°");
        assert_eq!(g.refracted_label.as_ref().unwrap().text, "θ₂ 19.5°");
    }

    #[test]
    fn test_same_index_does_not_bend() {
        let g = refract(80.0, 1.0);
        assert!(!g.total_internal_reflection);
        assert!((g.refracted_angle_deg.unwrap() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_normal_incidence() {
        for n2 in [1.0, 1.33, 1.5, 2.5] {
            let g = refract(0.0, n2);
            assert_eq!(g.refracted_angle_deg, Some(0.0));
            // Straight down through the interface
            let r = g.refracted.unwrap();
            assert_eq!(r.end, DVec2::new(450.0, 430.0));
            assert_eq!(g.incident.start, DVec2::new(450.0, -10.0));
        }
    }

    #[test]
    fn test_total_internal_reflection() {
        // Glass to air beyond the critical angle (~41.8°)
        let out = snell(1.5, 1.0, 60.0);
        assert!(out.total_internal_reflection);
        assert_eq!(out.theta2, 0.0);
        assert_eq!(out.refracted_angle_deg(), None);

        let g = refract_from(1.5, 1.0, 60.0);
        assert!(g.total_internal_reflection);
        assert!(g.refracted.is_none());
        assert!(g.refracted_arc.is_none());
        assert!(g.refracted_label.is_none());
        // Incident ray and its label are always present
        assert_eq!(g.incident_label.text, "θ₁ 60°");
    }

    #[test]
    fn test_sin_exactly_one_refracts() {
        let out = snell(1.0, 1.0, 90.0);
        assert_eq!(out.sin_theta2, 1.0);
        assert!(!out.total_internal_reflection);
        assert!((out.refracted_angle_deg().unwrap() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_arcs() {
        let g = refract(30.0, 1.5);
        assert_eq!(g.incident_arc.start_angle, 330.0);
        assert_eq!(g.incident_arc.end_angle, 360.0);
        assert!(g.incident_arc.sweep);
        assert!(!g.incident_arc.large_arc());

        let arc = g.refracted_arc.unwrap();
        assert_eq!(arc.start_angle, 180.0);
        assert!((arc.end_angle - (180.0 - g.refracted_angle_deg.unwrap())).abs() < 1e-12);
        assert!(!arc.sweep);
        assert_eq!(arc.radius, REFRACTED_ARC_RADIUS);

        // Incident label sits above the interface, refracted label below
        assert!(g.incident_label.pos.y < g.center.y);
        assert!(g.refracted_label.unwrap().pos.y > g.center.y);
    }

    proptest! {
        #[test]
        fn prop_snell_matches_closed_form(incident in 0.0f64..=80.0, n2 in 1.0f64..=2.5) {
            let out = snell(1.0, n2, incident);
            let ratio = deg_to_rad(incident).sin() / n2;
            if ratio <= 1.0 {
                prop_assert!(!out.total_internal_reflection);
                prop_assert!((out.theta2 - ratio.asin()).abs() < 1e-9);
            } else {
                prop_assert!(out.total_internal_reflection);
            }
        }

        #[test]
        fn prop_denser_medium_bends_toward_normal(incident in 0.0f64..=80.0, n2 in 1.0f64..=2.5) {
            let g = refract(incident, n2);
            let theta2 = g.refracted_angle_deg.unwrap();
            prop_assert!(theta2 <= incident + 1e-9);
        }

        #[test]
        fn prop_no_index_mismatch_no_bending(incident in 0.0f64..=80.0) {
            let g = refract(incident, 1.0);
            prop_assert!((g.refracted_angle_deg.unwrap() - incident).abs() < 1e-9);
        }

        #[test]
        fn prop_tir_only_from_denser_medium(incident in 0.0f64..=89.0, n1 in 1.0f64..=2.5, n2 in 1.0f64..=2.5) {
            let out = snell(n1, n2, incident);
            if out.total_internal_reflection {
                prop_assert!(n1 > n2);
            }
        }
    }
}
