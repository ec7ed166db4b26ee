//! Lesson panels
//!
//! A panel is mounted when its slide becomes current and owns that lesson's slider
//! values until it is unmounted. Every accepted change is followed by a fresh,
//! synchronous geometry computation; nothing is cached.

use serde::{Deserialize, Serialize};

use crate::consts::N1_AIR;
use crate::error::{LessonError, LessonResult};
use crate::optics::{self, DiagramGeometry, ReflectionGeometry, RefractionGeometry};
use crate::renderer;
use crate::renderer::svg::escape;
use crate::slides::LessonId;

/// Bounds of one slider control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ParamRange {
    /// Accept `value` if it is finite and within `min..=max`
    pub fn check(&self, value: f64) -> LessonResult<f64> {
        if value.is_finite() && value >= self.min && value <= self.max {
            Ok(value)
        } else {
            Err(LessonError::InvalidParameter {
                field: self.field,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub const REFLECTION_ANGLE: ParamRange = ParamRange {
    field: "angle_of_incidence_deg",
    min: 10.0,
    max: 80.0,
    step: 1.0,
    default: 30.0,
};

pub const REFRACTION_ANGLE: ParamRange = ParamRange {
    field: "angle_of_incidence_deg",
    min: 0.0,
    max: 80.0,
    step: 1.0,
    default: 30.0,
};

pub const REFRACTIVE_INDEX: ParamRange = ParamRange {
    field: "refractive_index_second_medium",
    min: 1.0,
    max: 2.5,
    step: 0.01,
    default: 1.5,
};

/// Slider state of the reflection lesson
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReflectionParams {
    angle_of_incidence_deg: f64,
}

impl Default for ReflectionParams {
    fn default() -> Self {
        Self {
            angle_of_incidence_deg: REFLECTION_ANGLE.default,
        }
    }
}

impl ReflectionParams {
    pub fn new(angle_of_incidence_deg: f64) -> LessonResult<Self> {
        Ok(Self {
            angle_of_incidence_deg: REFLECTION_ANGLE.check(angle_of_incidence_deg)?,
        })
    }

    pub fn angle_of_incidence_deg(&self) -> f64 {
        self.angle_of_incidence_deg
    }

    pub fn set_angle(&mut self, deg: f64) -> LessonResult<()> {
        self.angle_of_incidence_deg = REFLECTION_ANGLE.check(deg)?;
        Ok(())
    }

    pub fn geometry(&self) -> ReflectionGeometry {
        optics::reflect(self.angle_of_incidence_deg)
    }
}

/// Slider state of the refraction lesson (upper medium is always air)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RefractionParams {
    angle_of_incidence_deg: f64,
    refractive_index_second_medium: f64,
}

impl Default for RefractionParams {
    fn default() -> Self {
        Self {
            angle_of_incidence_deg: REFRACTION_ANGLE.default,
            refractive_index_second_medium: REFRACTIVE_INDEX.default,
        }
    }
}

impl RefractionParams {
    pub fn new(angle_of_incidence_deg: f64, refractive_index_second_medium: f64) -> LessonResult<Self> {
        Ok(Self {
            angle_of_incidence_deg: REFRACTION_ANGLE.check(angle_of_incidence_deg)?,
            refractive_index_second_medium: REFRACTIVE_INDEX.check(refractive_index_second_medium)?,
        })
    }

    pub fn angle_of_incidence_deg(&self) -> f64 {
        self.angle_of_incidence_deg
    }

    pub fn refractive_index_second_medium(&self) -> f64 {
        self.refractive_index_second_medium
    }

    pub fn set_angle(&mut self, deg: f64) -> LessonResult<()> {
        self.angle_of_incidence_deg = REFRACTION_ANGLE.check(deg)?;
        Ok(())
    }

    pub fn set_refractive_index(&mut self, n2: f64) -> LessonResult<()> {
        self.refractive_index_second_medium = REFRACTIVE_INDEX.check(n2)?;
        Ok(())
    }

    pub fn geometry(&self) -> RefractionGeometry {
        optics::refract(self.angle_of_incidence_deg, self.refractive_index_second_medium)
    }
}

/// Explanatory copy shown under a lesson's diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonText {
    pub intro: &'static str,
    pub bullets: &'static [&'static str],
    /// Trailing paragraphs (notes, formula and fact cards)
    pub notes: &'static [&'static str],
}

impl LessonText {
    /// Markup for the explanation block; all copy is escaped
    pub fn to_html(&self) -> String {
        let mut html = format!("<p>{}</p>", escape(self.intro));
        if !self.bullets.is_empty() {
            html.push_str("<ul>");
            for b in self.bullets {
                html.push_str(&format!("<li>{}</li>", escape(b)));
            }
            html.push_str("</ul>");
        }
        for n in self.notes {
            html.push_str(&format!("<p>{}</p>", escape(n)));
        }
        html
    }
}

pub const REFLECTION_TEXT: LessonText = LessonText {
    intro: "This interactive diagram demonstrates the laws of reflection in a plane mirror, \
            as studied in CBSE Class 10 Physics. The light ray is incident on a mirror surface \
            and reflects back in the same medium. The two laws are:",
    bullets: &[
        "The angle of incidence equals the angle of reflection.",
        "The incident ray, the reflected ray, and the normal all lie in the same plane.",
    ],
    notes: &[
        "The reflection shown here occurs in the same medium (air) from a plane mirror. \
         The angle of incidence and angle of reflection are always equal, satisfying the first \
         law of reflection. Both rays and the normal lie in the same plane, satisfying the \
         second law of reflection.",
        "Formula: ∠i = ∠r (Angle of Incidence = Angle of Reflection)",
        "Did you know? When light reflects from a plane mirror, the image formed is virtual, \
         erect, and of the same size as the object, and it appears behind the mirror.",
    ],
};

pub const REFRACTION_TEXT: LessonText = LessonText {
    intro: "Refraction is the bending of light when it passes from one medium to another with a \
            different refractive index. The amount of bending depends on the angle of incidence \
            and the ratio of the refractive indices of the two media. According to Snell's Law, \
            n₁ sin θ₁ = n₂ sin θ₂, where:",
    bullets: &[
        "n₁ is the refractive index of the first medium (air, usually ≈ 1.0)",
        "θ₁ is the incident angle (with respect to the normal)",
        "n₂ is the refractive index of the second medium",
        "θ₂ is the refracted angle",
    ],
    notes: &[
        "If the incident angle exceeds a certain critical value while light is traveling from a \
         denser medium to a rarer medium, the ray does not refract but instead reflects entirely \
         within the medium. This phenomenon is called Total Internal Reflection.",
    ],
};

/// The mounted lesson and its parameters
#[derive(Debug, Clone, PartialEq)]
pub enum LessonPanel {
    Reflection(ReflectionParams),
    Refraction(RefractionParams),
}

impl LessonPanel {
    /// Fresh panel with default slider values
    pub fn mount(lesson: LessonId) -> Self {
        log::debug!("panel: mount {}", lesson.as_str());
        match lesson {
            LessonId::Reflection => LessonPanel::Reflection(ReflectionParams::default()),
            LessonId::Refraction => LessonPanel::Refraction(RefractionParams::default()),
        }
    }

    pub fn lesson(&self) -> LessonId {
        match self {
            LessonPanel::Reflection(_) => LessonId::Reflection,
            LessonPanel::Refraction(_) => LessonId::Refraction,
        }
    }

    pub fn title(&self) -> &'static str {
        self.lesson().title()
    }

    pub fn text(&self) -> &'static LessonText {
        match self {
            LessonPanel::Reflection(_) => &REFLECTION_TEXT,
            LessonPanel::Refraction(_) => &REFRACTION_TEXT,
        }
    }

    /// Slider bounds for the angle control of this lesson
    pub fn angle_range(&self) -> ParamRange {
        match self {
            LessonPanel::Reflection(_) => REFLECTION_ANGLE,
            LessonPanel::Refraction(_) => REFRACTION_ANGLE,
        }
    }

    /// Slider bounds for the refractive index control, if the lesson has one
    pub fn index_range(&self) -> Option<ParamRange> {
        match self {
            LessonPanel::Reflection(_) => None,
            LessonPanel::Refraction(_) => Some(REFRACTIVE_INDEX),
        }
    }

    pub fn angle_deg(&self) -> f64 {
        match self {
            LessonPanel::Reflection(p) => p.angle_of_incidence_deg(),
            LessonPanel::Refraction(p) => p.angle_of_incidence_deg(),
        }
    }

    pub fn set_angle(&mut self, deg: f64) -> LessonResult<()> {
        match self {
            LessonPanel::Reflection(p) => p.set_angle(deg),
            LessonPanel::Refraction(p) => p.set_angle(deg),
        }
    }

    /// Set n2. Returns false (and changes nothing) for lessons without a second medium.
    pub fn set_refractive_index(&mut self, n2: f64) -> LessonResult<bool> {
        match self {
            LessonPanel::Reflection(_) => {
                log::warn!("panel: reflection has no refractive index, ignoring n2={}", n2);
                Ok(false)
            }
            LessonPanel::Refraction(p) => {
                p.set_refractive_index(n2)?;
                Ok(true)
            }
        }
    }

    pub fn geometry(&self) -> DiagramGeometry {
        match self {
            LessonPanel::Reflection(p) => DiagramGeometry::Reflection(p.geometry()),
            LessonPanel::Refraction(p) => DiagramGeometry::Refraction(p.geometry()),
        }
    }

    /// SVG markup of the current diagram
    pub fn render_svg(&self) -> String {
        renderer::render(&self.geometry())
    }

    /// Short text shown next to the controls
    pub fn readout(&self) -> String {
        match self {
            LessonPanel::Reflection(p) => {
                let a = p.angle_of_incidence_deg();
                format!("∠i = ∠r = {a}°")
            }
            LessonPanel::Refraction(p) => {
                let g = p.geometry();
                match g.refracted_angle_deg {
                    Some(theta2) => format!(
                        "n₁ = {:.2}, n₂ = {:.2}. Refracted angle θ₂ = {theta2:.1}°",
                        N1_AIR,
                        p.refractive_index_second_medium()
                    ),
                    None => format!(
                        "n₁ = {:.2}, n₂ = {:.2}. Total internal reflection occurs (no refracted ray).",
                        N1_AIR,
                        p.refractive_index_second_medium()
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_defaults() {
        let p = LessonPanel::mount(LessonId::Reflection);
        assert_eq!(p.angle_deg(), 30.0);
        assert_eq!(p.lesson(), LessonId::Reflection);
        assert!(p.index_range().is_none());

        let p = LessonPanel::mount(LessonId::Refraction);
        match p {
            LessonPanel::Refraction(r) => {
                assert_eq!(r.angle_of_incidence_deg(), 30.0);
                assert_eq!(r.refractive_index_second_medium(), 1.5);
            }
            _ => panic!("expected refraction panel"),
        }
    }

    #[test]
    fn test_range_rejection() {
        assert!(ReflectionParams::new(9.0).is_err());
        assert!(ReflectionParams::new(80.0).is_ok());
        assert!(RefractionParams::new(0.0, 1.0).is_ok());
        assert!(RefractionParams::new(81.0, 1.5).is_err());

        let err = RefractionParams::new(30.0, 2.6).unwrap_err();
        assert_eq!(
            err,
            LessonError::InvalidParameter {
                field: "refractive_index_second_medium",
                value: 2.6,
                min: 1.0,
                max: 2.5,
            }
        );
        assert!(REFLECTION_ANGLE.check(f64::NAN).is_err());
    }

    #[test]
    fn test_rejected_input_keeps_previous_value() {
        let mut p = LessonPanel::mount(LessonId::Refraction);
        p.set_angle(45.0).unwrap();
        assert!(p.set_angle(95.0).is_err());
        assert_eq!(p.angle_deg(), 45.0);
        assert!(p.set_refractive_index(0.5).is_err());
        assert_eq!(p.set_refractive_index(2.0), Ok(true));
    }

    #[test]
    fn test_reflection_ignores_index() {
        let mut p = LessonPanel::mount(LessonId::Reflection);
        assert_eq!(p.set_refractive_index(1.5), Ok(false));
        assert_eq!(p, LessonPanel::mount(LessonId::Reflection));
    }

    #[test]
    fn test_geometry_follows_params() {
        let mut p = LessonPanel::mount(LessonId::Refraction);
        p.set_angle(0.0).unwrap();
        match p.geometry() {
            DiagramGeometry::Refraction(g) => assert_eq!(g.refracted_angle_deg, Some(0.0)),
            _ => panic!("expected refraction geometry"),
        }

        let mut p = LessonPanel::mount(LessonId::Reflection);
        p.set_angle(60.0).unwrap();
        match p.geometry() {
            DiagramGeometry::Reflection(g) => assert_eq!(g.angle_deg, 60.0),
            _ => panic!("expected reflection geometry"),
        }
    }

    #[test]
    fn test_readout() {
        let p = LessonPanel::mount(LessonId::Refraction);
        assert_eq!(
            p.readout(),
            "n₁ = 1.00, n₂ = 1.50. Refracted angle θ₂ = 19.5°"
        );
        let p = LessonPanel::mount(LessonId::Reflection);
        assert_eq!(p.readout(), "∠i = ∠r = 30°");
    }

    #[test]
    fn test_lesson_text() {
        let r = LessonPanel::mount(LessonId::Reflection).text();
        assert!(r.intro.contains("plane mirror"));
        assert_eq!(r.bullets.len(), 2);
        assert!(r.notes.iter().any(|n| n.starts_with("Formula: ∠i = ∠r")));
        assert!(r.notes.iter().any(|n| n.starts_with("Did you know?")));

        let t = LessonPanel::mount(LessonId::Refraction).text();
        assert!(t.intro.contains("n₁ sin θ₁ = n₂ sin θ₂"));
        assert_eq!(t.bullets.len(), 4);
        assert!(t.notes[0].contains("critical value"));
        assert!(t.notes[0].contains("Total Internal Reflection"));
    }

    #[test]
    fn test_lesson_text_html() {
        let html = REFLECTION_TEXT.to_html();
        assert!(html.starts_with("<p>This interactive diagram"));
        assert_eq!(html.matches("<li>").count(), 2);
        assert_eq!(html.matches("<p>").count(), 4);

        let html = REFRACTION_TEXT.to_html();
        assert_eq!(html.matches("<li>").count(), 4);
        // Apostrophe in "Snell's" passes through; no raw markup from the copy
        assert!(html.contains("Snell's Law"));
        assert!(!html.contains("&lt;"));
    }
}
