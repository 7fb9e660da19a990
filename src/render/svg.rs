//! SVG document output: one blurred and one sharp copy of every shape over shared defs.

use std::fmt::Write as _;

use crate::render::curve::area_path;
use crate::runtime::animator::SceneFrame;
use crate::scene::model::{BlurFilter, LinearGradient, SceneConfig};

/// Render `frame` as a standalone SVG document using the defs and geometry of `scene`.
///
/// Frame shapes are paired with scene shapes by position; extra entries on either side are
/// ignored.
pub fn render_svg(scene: &SceneConfig, frame: &SceneFrame) -> String {
    let w = scene.view_box.width;
    let h = scene.view_box.height;
    let mut svg = String::with_capacity(1024 + frame.shapes.len() * 1024);

    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" preserveAspectRatio="none">"#,
    );

    svg.push_str("<defs>");
    for shape in &scene.shapes {
        push_gradient(&mut svg, &shape.gradient);
    }
    push_blur(&mut svg, &scene.blur);
    svg.push_str("</defs>");

    let blur_id = escape_xml(&scene.blur.id);
    for (spec, points) in scene.shapes.iter().zip(&frame.shapes) {
        let d = area_path(&points.points, scene.baseline).to_svg();
        let fill = escape_xml(&spec.gradient.id);
        let _ = write!(
            svg,
            r#"<path d="{d}" fill="url(#{fill})" filter="url(#{blur_id})"/>"#
        );
        let _ = write!(svg, r#"<path d="{d}" fill="url(#{fill})"/>"#);
    }

    svg.push_str("</svg>");
    svg
}

fn push_gradient(svg: &mut String, g: &LinearGradient) {
    let _ = write!(
        svg,
        r#"<linearGradient id="{}" gradientTransform="rotate({})">"#,
        escape_xml(&g.id),
        g.rotate_deg
    );
    for stop in &g.stops {
        let _ = write!(
            svg,
            r#"<stop offset="{}%" stop-color="{}"/>"#,
            stop.offset_pct,
            escape_xml(&stop.color)
        );
    }
    svg.push_str("</linearGradient>");
}

fn push_blur(svg: &mut String, blur: &BlurFilter) {
    let _ = write!(
        svg,
        r#"<filter id="{}"><feGaussianBlur stdDeviation="{}"/></filter>"#,
        escape_xml(&blur.id),
        blur.std_deviation
    );
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
