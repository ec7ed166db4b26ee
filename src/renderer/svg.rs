//! Minimal SVG document writer

use std::fmt::Write;

use glam::DVec2;

use crate::optics::{ArcPath, ArrowHead, Segment};

/// Stroke attributes for lines and paths
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
    pub dash: Option<&'static str>,
    pub opacity: Option<f64>,
    pub linecap_round: bool,
    /// Marker id used for `marker-end`
    pub marker_end: Option<&'static str>,
}

impl Stroke {
    pub const fn new(color: &'static str, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
            opacity: None,
            linecap_round: false,
            marker_end: None,
        }
    }

    pub const fn dashed(mut self, pattern: &'static str) -> Self {
        self.dash = Some(pattern);
        self
    }

    pub const fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub const fn round(mut self) -> Self {
        self.linecap_round = true;
        self
    }

    pub const fn marker_end(mut self, id: &'static str) -> Self {
        self.marker_end = Some(id);
        self
    }

    fn write_attrs(&self, out: &mut String) {
        let _ = write!(out, r#" stroke="{}" stroke-width="{}""#, self.color, self.width);
        if let Some(dash) = self.dash {
            let _ = write!(out, r#" stroke-dasharray="{dash}""#);
        }
        if let Some(opacity) = self.opacity {
            let _ = write!(out, r#" opacity="{opacity}""#);
        }
        if self.linecap_round {
            out.push_str(r#" stroke-linecap="round""#);
        }
        if let Some(id) = self.marker_end {
            let _ = write!(out, r#" marker-end="url(#{id})""#);
        }
    }
}

/// Text attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: &'static str,
    pub size: f64,
    pub centered: bool,
}

impl TextStyle {
    pub const fn new(color: &'static str, size: f64) -> Self {
        Self {
            color,
            size,
            centered: false,
        }
    }

    pub const fn centered(mut self) -> Self {
        self.centered = true;
        self
    }
}

/// Escape text content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// An SVG document under construction
pub struct SvgDocument {
    buf: String,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        let mut buf = String::with_capacity(4096);
        let _ = write!(
            buf,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" preserveAspectRatio="xMidYMid meet">"#
        );
        Self { buf }
    }

    /// Triangle marker usable as `marker-end`
    pub fn arrow_marker(&mut self, id: &'static str, fill: &'static str) -> &mut Self {
        let _ = write!(
            self.buf,
            r#"<defs><marker id="{id}" viewBox="0 -5 10 10" refX="9" refY="0" markerWidth="4" markerHeight="4" orient="auto" fill="{fill}"><path d="M0,-5L10,0L0,5"/></marker></defs>"#
        );
        self
    }

    pub fn rect(&mut self, origin: DVec2, size: DVec2, fill: &'static str) -> &mut Self {
        let _ = write!(
            self.buf,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{fill}"/>"#,
            origin.x, origin.y, size.x, size.y
        );
        self
    }

    pub fn line(&mut self, seg: &Segment, stroke: Stroke) -> &mut Self {
        let _ = write!(
            self.buf,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            seg.start.x, seg.start.y, seg.end.x, seg.end.y
        );
        stroke.write_attrs(&mut self.buf);
        self.buf.push_str("/>");
        self
    }

    /// Both wings of an arrowhead as separate lines
    pub fn chevron(&mut self, arrow: &ArrowHead, stroke: Stroke) -> &mut Self {
        self.buf.push_str("<g>");
        self.line(&Segment::new(arrow.tip, arrow.left), stroke);
        self.line(&Segment::new(arrow.tip, arrow.right), stroke);
        self.buf.push_str("</g>");
        self
    }

    pub fn arc(&mut self, arc: &ArcPath, stroke: Stroke) -> &mut Self {
        let _ = write!(self.buf, r#"<path d="{}" fill="none""#, arc.to_svg_path());
        stroke.write_attrs(&mut self.buf);
        self.buf.push_str("/>");
        self
    }

    pub fn circle(&mut self, center: DVec2, radius: f64, fill: &'static str) -> &mut Self {
        let _ = write!(
            self.buf,
            r#"<circle cx="{}" cy="{}" r="{radius}" fill="{fill}"/>"#,
            center.x, center.y
        );
        self
    }

    pub fn text(&mut self, pos: DVec2, text: &str, style: TextStyle) -> &mut Self {
        let _ = write!(
            self.buf,
            r#"<text x="{}" y="{}" font-size="{}" fill="{}""#,
            pos.x, pos.y, style.size, style.color
        );
        if style.centered {
            self.buf
                .push_str(r#" text-anchor="middle" alignment-baseline="middle""#);
        }
        let _ = write!(self.buf, ">{}</text>", escape(text));
        self
    }

    pub fn finish(mut self) -> String {
        self.buf.push_str("</svg>");
        self.buf
    }
}
