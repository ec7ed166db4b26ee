//! SVG rendering module
//!
//! Turns derived diagram geometry into standalone SVG markup.

pub mod diagrams;
pub mod svg;

pub use diagrams::{reflection_svg, refraction_svg, render};
pub use svg::{Stroke, SvgDocument, TextStyle};
