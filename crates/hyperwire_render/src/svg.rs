//! SVG output for projected frames
//!
//! A frame is drawn as three groups, in order: edges as `<line>`, vertices as
//! `<circle>`, and vertex labels as `<text>` placed below each vertex. Only
//! x and y are drawn; z is dropped. The viewBox is centered on the origin.
//!
//! Vertices that hit the projection singularity are left out along with every
//! edge touching them.

use std::fmt::Write as _;
use std::path::Path;

use hyperwire_math::Frame;

use crate::RenderError;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Builds SVG documents from projected frames
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Circle radius for vertices
    pub vertex_radius: f64,
    /// Vertical offset of a label below its vertex
    pub label_offset: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(600, 600)
    }
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            vertex_radius: 5.0,
            label_offset: 20.0,
        }
    }

    /// Render a frame to an SVG document
    pub fn render(&self, frame: &Frame<'_>) -> Result<String, RenderError> {
        let degenerate = frame.degenerate_vertices();
        if !degenerate.is_empty() {
            log::warn!(
                "Skipping {} vertices at the projection singularity: {:?}",
                degenerate.len(),
                degenerate
            );
        }

        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let mut out = String::with_capacity(4096);

        writeln!(
            out,
            r#"<svg xmlns="{}" class="hypercube" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            SVG_NS,
            self.width,
            self.height,
            -w / 2.0,
            -h / 2.0,
            w,
            h
        )?;
        writeln!(
            out,
            "  <desc>wx={:.6} wy={:.6} wz={:.6}</desc>",
            frame.rotations.wx, frame.rotations.wy, frame.rotations.wz
        )?;

        // Screen positions; z is not drawn
        let points: Vec<[f64; 2]> = frame.vertices.iter().map(|v| v.position().xy()).collect();
        let visible = || {
            frame
                .vertices
                .iter()
                .zip(&points)
                .filter(|(v, _)| v.is_finite())
        };

        writeln!(out, r#"  <g class="edges">"#)?;
        for edge in frame.edges {
            if degenerate.contains(&edge.a) || degenerate.contains(&edge.b) {
                continue;
            }
            let [x1, y1] = points[edge.a];
            let [x2, y2] = points[edge.b];
            writeln!(
                out,
                r#"    <line class="edge" x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}"/>"#,
                x1, y1, x2, y2
            )?;
        }
        writeln!(out, "  </g>")?;

        writeln!(out, r#"  <g class="vertices">"#)?;
        for (_, [x, y]) in visible() {
            writeln!(
                out,
                r#"    <circle class="vertex" cx="{:.3}" cy="{:.3}" r="{}"/>"#,
                x, y, self.vertex_radius
            )?;
        }
        writeln!(out, "  </g>")?;

        writeln!(out, r#"  <g class="labels">"#)?;
        for (v, [x, y]) in visible() {
            writeln!(
                out,
                r#"    <text class="vertex-label" x="{:.3}" y="{:.3}">{}</text>"#,
                x,
                y + self.label_offset,
                v.label
            )?;
        }
        writeln!(out, "  </g>")?;

        writeln!(out, "</svg>")?;
        Ok(out)
    }

    /// Render a frame and write it to `path`
    pub fn write_to<P: AsRef<Path>>(&self, frame: &Frame<'_>, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        let svg = self.render(frame)?;
        std::fs::write(path, svg)?;
        log::debug!("Wrote frame to {}", path.display());
        Ok(())
    }
}
