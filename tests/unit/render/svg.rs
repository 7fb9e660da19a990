use super::*;
use crate::scene::preset::builtin_scene;

fn initial_svg() -> String {
    let scene = builtin_scene();
    render_svg(&scene, &SceneFrame::initial(&scene))
}

#[test]
fn document_declares_viewbox_and_stretches() {
    let svg = initial_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains(r#"viewBox="0 0 1000 2000""#));
    assert!(svg.contains(r#"preserveAspectRatio="none""#));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn defs_hold_both_gradients_and_the_blur() {
    let svg = initial_svg();
    assert!(svg.contains(r#"<linearGradient id="redGrad" gradientTransform="rotate(90)">"#));
    assert!(svg.contains(r#"<linearGradient id="blueGrad" gradientTransform="rotate(90)">"#));
    assert!(svg.contains(r#"<stop offset="0%" stop-color="orange"/>"#));
    assert!(svg.contains(r#"<stop offset="100%" stop-color="red"/>"#));
    assert!(svg.contains(r#"<stop offset="0%" stop-color="skyblue"/>"#));
    assert!(svg.contains(r#"<stop offset="100%" stop-color="blue"/>"#));
    assert!(svg.contains(r#"<filter id="blur"><feGaussianBlur stdDeviation="70"/></filter>"#));
}

#[test]
fn paths_are_layered_cool_then_warm_blurred_first() {
    let svg = initial_svg();
    let fills: Vec<(&str, bool)> = svg
        .split("<path ")
        .skip(1)
        .map(|p| {
            let fill = if p.contains("url(#blueGrad)") {
                "cool"
            } else if p.contains("url(#redGrad)") {
                "warm"
            } else {
                "other"
            };
            (fill, p.contains(r#"filter="url(#blur)""#))
        })
        .collect();
    assert_eq!(
        fills,
        vec![
            ("cool", true),
            ("cool", false),
            ("warm", true),
            ("warm", false)
        ]
    );
}

#[test]
fn path_data_matches_area_geometry() {
    let scene = builtin_scene();
    let frame = SceneFrame::initial(&scene);
    let svg = render_svg(&scene, &frame);
    let d = area_path(&frame.shapes[1].points, scene.baseline).to_svg();
    assert!(d.starts_with('M'));
    assert!(svg.contains(&format!(r#"<path d="{d}" fill="url(#redGrad)"/>"#)));
}

#[test]
fn ids_and_colors_are_escaped() {
    let mut scene = builtin_scene();
    scene.shapes[0].gradient.stops[0].color = "a\"b<c>&".to_string();
    let svg = render_svg(&scene, &SceneFrame::initial(&scene));
    assert!(svg.contains("stop-color=\"a&quot;b&lt;c&gt;&amp;\""));
}

#[test]
fn missing_frame_shapes_are_skipped() {
    let scene = builtin_scene();
    let mut frame = SceneFrame::initial(&scene);
    frame.shapes.truncate(1);
    let svg = render_svg(&scene, &frame);
    assert_eq!(svg.matches("<path ").count(), 2);
}
