//! Lesson diagrams

use glam::DVec2;

use super::svg::{Stroke, SvgDocument, TextStyle};
use crate::consts::*;
use crate::optics::{DiagramGeometry, ReflectionGeometry, RefractionGeometry};

// Reflection palette
const REFLECTION_BACKGROUND: &str = "#1f2937";
const MIRROR: Stroke = Stroke::new("#374151", 3.0);
const REFLECTION_NORMAL: Stroke = Stroke::new("#f87171", 2.0).dashed("6,6");
const INCIDENT_RAY: Stroke = Stroke::new("#3b82f6", 3.0);
const INCIDENT_WING: Stroke = Stroke::new("#3b82f6", 2.0);
const REFLECTED_RAY: Stroke = Stroke::new("#22c55e", 3.0);
const REFLECTED_WING: Stroke = Stroke::new("#22c55e", 2.0);
const POINT_OF_INCIDENCE: &str = "#facc15";
const REFLECTION_LABEL: TextStyle = TextStyle::new("#d1d5db", 14.0);

// Refraction palette
const INCIDENT_COLOR: &str = "#ffd166";
const REFRACTED_COLOR: &str = "#8be9a9";
const INTERFACE: Stroke = Stroke::new("#77ddff", 3.0).dashed("6 6").opacity(0.6);
const REFRACTION_NORMAL: Stroke = Stroke::new("#ffffff33", 1.0);
const MEDIUM_LABEL: TextStyle = TextStyle::new("#9fb8c8", 14.0);

/// Render whichever diagram the geometry describes
pub fn render(geometry: &DiagramGeometry) -> String {
    match geometry {
        DiagramGeometry::Reflection(g) => reflection_svg(g),
        DiagramGeometry::Refraction(g) => refraction_svg(g),
    }
}

/// Plane mirror diagram
pub fn reflection_svg(g: &ReflectionGeometry) -> String {
    let mut doc = SvgDocument::new(REFLECTION_WIDTH, REFLECTION_HEIGHT);
    doc.rect(
        DVec2::ZERO,
        DVec2::new(REFLECTION_WIDTH, REFLECTION_HEIGHT),
        REFLECTION_BACKGROUND,
    )
    .line(&g.mirror, MIRROR)
    .line(&g.normal, REFLECTION_NORMAL)
    .line(&g.incident, INCIDENT_RAY)
    .chevron(&g.incident_arrow, INCIDENT_WING)
    .line(&g.reflected, REFLECTED_RAY)
    .chevron(&g.reflected_arrow, REFLECTED_WING)
    .circle(g.center, 5.0, POINT_OF_INCIDENCE)
    .text(g.incident_label.pos, &g.incident_label.text, REFLECTION_LABEL)
    .text(g.reflected_label.pos, &g.reflected_label.text, REFLECTION_LABEL);
    doc.finish()
}

/// Two-media diagram; refracted ray, arc and label are omitted under total internal reflection
pub fn refraction_svg(g: &RefractionGeometry) -> String {
    let upper_medium = if g.n1 == N1_AIR {
        format!("n₁ = {:.2} (air)", g.n1)
    } else {
        format!("n₁ = {:.2}", g.n1)
    };

    let mut doc = SvgDocument::new(REFRACTION_WIDTH, REFRACTION_HEIGHT);
    doc.arrow_marker("incidentArrow", INCIDENT_COLOR)
        .arrow_marker("refractedArrow", REFRACTED_COLOR)
        .line(&g.interface, INTERFACE)
        .text(
            DVec2::new(10.0, g.center.y - 10.0),
            &upper_medium,
            MEDIUM_LABEL,
        )
        .text(
            DVec2::new(10.0, g.center.y + 24.0),
            &format!("n₂ = {:.2}", g.n2),
            MEDIUM_LABEL,
        )
        .line(
            &g.incident,
            Stroke::new(INCIDENT_COLOR, 3.0)
                .round()
                .marker_end("incidentArrow"),
        );

    if let Some(refracted) = &g.refracted {
        doc.line(
            refracted,
            Stroke::new(REFRACTED_COLOR, 3.0)
                .round()
                .marker_end("refractedArrow"),
        );
    }

    doc.line(&g.normal, REFRACTION_NORMAL)
        .arc(&g.incident_arc, Stroke::new(INCIDENT_COLOR, 2.0))
        .text(
            g.incident_label.pos,
            &g.incident_label.text,
            TextStyle::new(INCIDENT_COLOR, 12.0).centered(),
        );

    if let (Some(arc), Some(label)) = (&g.refracted_arc, &g.refracted_label) {
        doc.arc(arc, Stroke::new(REFRACTED_COLOR, 2.0)).text(
            label.pos,
            &label.text,
            TextStyle::new(REFRACTED_COLOR, 12.0).centered(),
        );
    }

    doc.circle(g.center, 3.0, "#fff");
    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{reflect, refract, refract_from};

    #[test]
    fn test_reflection_svg() {
        let svg = reflection_svg(&reflect(30.0));
        assert!(svg.contains(r#"viewBox="0 0 600 500""#));
        assert!(svg.contains("∠i: 30°"));
        assert!(svg.contains("∠r: 30°"));
        assert_eq!(svg.matches("<line ").count(), 8);
        assert_eq!(svg.matches("<g>").count(), 2);
    }

    #[test]
    fn test_refraction_svg() {
        let svg = refraction_svg(&refract(30.0, 1.5));
        assert!(svg.contains(r#"viewBox="0 0 900 420""#));
        assert!(svg.contains("n₁ = 1.00 (air)"));
        assert!(svg.contains("n₂ = 1.50"));
        assert!(svg.contains("θ₁ 30°"));
        assert!(svg.contains("θ₂ 19.5°"));
        assert!(svg.contains("url(#refractedArrow)"));
        assert_eq!(svg.matches("<path d=\"M ").count(), 2);
    }

    #[test]
    fn test_refraction_svg_under_tir() {
        let svg = refraction_svg(&refract_from(1.5, 1.0, 70.0));
        assert!(svg.contains("θ₁ 70°"));
        assert!(!svg.contains("θ₂"));
        assert!(!svg.contains("url(#refractedArrow)"));
        assert_eq!(svg.matches("<path d=\"M ").count(), 1);
    }

    #[test]
    fn test_render_dispatch() {
        let g = DiagramGeometry::Reflection(reflect(45.0));
        assert_eq!(render(&g), reflection_svg(&reflect(45.0)));
    }
}
