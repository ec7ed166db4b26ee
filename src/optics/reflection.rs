//! Plane mirror reflection
//!
//! The mirror lies horizontally through the canvas center with a vertical normal.
//! Both rays are built from the same angle, so the angle of incidence equals the
//! angle of reflection by construction.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::{ArrowHead, Label, Segment};
use crate::consts::*;
use crate::deg_to_rad;

/// Everything needed to draw the reflection diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectionGeometry {
    pub angle_deg: f64,
    /// Point of incidence (canvas center)
    pub center: DVec2,
    /// From the ray source to the point of incidence
    pub incident: Segment,
    /// From the point of incidence outward
    pub reflected: Segment,
    pub incident_arrow: ArrowHead,
    pub reflected_arrow: ArrowHead,
    pub incident_label: Label,
    pub reflected_label: Label,
    pub mirror: Segment,
    pub normal: Segment,
}

/// Chevron at `to` for a segment travelling from `from` to `to`
pub fn arrow_head(from: DVec2, to: DVec2, size: f64) -> ArrowHead {
    use std::f64::consts::PI;

    let heading = (to.y - from.y).atan2(to.x - from.x);
    ArrowHead {
        tip: to,
        left: DVec2::new(
            to.x - size * (heading - PI / 6.0).cos(),
            to.y - size * (heading - PI / 6.0).sin(),
        ),
        right: DVec2::new(
            to.x - size * (heading + PI / 6.0).cos(),
            to.y - size * (heading + PI / 6.0).sin(),
        ),
    }
}

/// Compute the reflection diagram for an angle in degrees (UI range 10..=80)
pub fn reflect(angle_deg: f64) -> ReflectionGeometry {
    let center = DVec2::new(REFLECTION_WIDTH / 2.0, REFLECTION_HEIGHT / 2.0);
    let theta = deg_to_rad(angle_deg);

    let incident_end = DVec2::new(
        center.x - REFLECTION_RAY_LENGTH * theta.cos(),
        center.y - REFLECTION_RAY_LENGTH * theta.sin(),
    );
    let reflected_end = DVec2::new(
        center.x + REFLECTION_RAY_LENGTH * theta.cos(),
        center.y - REFLECTION_RAY_LENGTH * theta.sin(),
    );

    ReflectionGeometry {
        angle_deg,
        center,
        incident: Segment::new(incident_end, center),
        reflected: Segment::new(center, reflected_end),
        incident_arrow: arrow_head(incident_end, center, ARROW_SIZE),
        reflected_arrow: arrow_head(center, reflected_end, ARROW_SIZE),
        incident_label: Label {
            pos: center + DVec2::from(INCIDENT_LABEL_OFFSET),
            text: format!("∠i: {angle_deg}°"),
        },
        reflected_label: Label {
            pos: center + DVec2::from(REFLECTED_LABEL_OFFSET),
            text: format!("∠r: {angle_deg}°"),
        },
        mirror: Segment::new(
            DVec2::new(MIRROR_INSET, center.y),
            DVec2::new(REFLECTION_WIDTH - MIRROR_INSET, center.y),
        ),
        normal: Segment::new(
            DVec2::new(center.x, center.y - REFLECTION_NORMAL_HALF),
            DVec2::new(center.x, center.y + REFLECTION_NORMAL_HALF),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reflect_at_30_degrees() {
        let g = reflect(30.0);
        assert_eq!(g.center, DVec2::new(300.0, 250.0));
        assert!((g.incident.start.x - (300.0 - 150.0 * 3.0_f64.sqrt() / 2.0)).abs() < 1e-9);
        assert!((g.incident.start.y - 175.0).abs() < 1e-9);
        assert!((g.reflected.end.x - (300.0 + 150.0 * 3.0_f64.sqrt() / 2.0)).abs() < 1e-9);
        assert!((g.reflected.end.y - 175.0).abs() < 1e-9);
        assert_eq!(g.incident_label.text, "∠i: 30°");
        assert_eq!(g.reflected_label.text, "∠r: 30°");
        assert_eq!(g.incident_label.pos, DVec2::new(180.0, 290.0));
        assert_eq!(g.reflected_label.pos, DVec2::new(360.0, 290.0));
    }

    #[test]
    fn test_static_scene() {
        let g = reflect(45.0);
        assert_eq!(g.mirror.start, DVec2::new(50.0, 250.0));
        assert_eq!(g.mirror.end, DVec2::new(550.0, 250.0));
        assert_eq!(g.normal.start, DVec2::new(300.0, 100.0));
        assert_eq!(g.normal.end, DVec2::new(300.0, 400.0));
    }

    #[test]
    fn test_arrow_head_wings() {
        // Horizontal segment pointing right: wings sit behind the tip
        let a = arrow_head(DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0), 8.0);
        assert_eq!(a.tip, DVec2::new(10.0, 0.0));
        assert!(a.left.x < 10.0 && a.right.x < 10.0);
        assert!((a.left.y + a.right.y).abs() < 1e-12);
        assert!(((a.left - a.tip).length() - 8.0).abs() < 1e-12);
        assert!(((a.right - a.tip).length() - 8.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_incidence_equals_reflection(angle in 10.0f64..=80.0) {
            let g = reflect(angle);
            let i = g.incident.angle_from_vertical_deg();
            let r = g.reflected.angle_from_vertical_deg();
            prop_assert!((i - r).abs() < 1e-9, "incidence {} != reflection {}", i, r);
            prop_assert!((g.incident.length() - REFLECTION_RAY_LENGTH).abs() < 1e-9);
            prop_assert!((g.reflected.length() - REFLECTION_RAY_LENGTH).abs() < 1e-9);
            // Mirror images about the normal
            prop_assert_eq!(g.incident.start.y, g.reflected.end.y);
            prop_assert!((g.incident.start.x + g.reflected.end.x - 2.0 * g.center.x).abs() < 1e-9);
        }

        #[test]
        fn prop_rays_stay_above_mirror(angle in 10.0f64..=80.0) {
            let g = reflect(angle);
            prop_assert!(g.incident.start.y < g.center.y);
            prop_assert!(g.reflected.end.y < g.center.y);
        }
    }
}
