use super::*;
use crate::render::svg::render_svg;
use crate::runtime::animator::SceneFrame;
use crate::scene::preset::builtin_scene;

#[test]
fn rejects_bad_sizes() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"></svg>"#;
    assert!(matches!(rasterize_svg(svg, 0, 1), Err(BlobError::Render(_))));
    assert!(matches!(
        rasterize_svg(svg, MAX_RASTER_DIM + 1, 1),
        Err(BlobError::Render(_))
    ));
}

#[test]
fn rejects_unparseable_svg() {
    assert!(matches!(rasterize_svg("<svg", 4, 4), Err(BlobError::Render(_))));
}

#[test]
fn scene_fills_bottom_and_leaves_top_clear() {
    let scene = builtin_scene();
    let svg = render_svg(&scene, &SceneFrame::initial(&scene));
    let frame = rasterize_svg(&svg, 50, 100).unwrap();
    assert_eq!((frame.width, frame.height), (50, 100));
    assert_eq!(frame.data.len(), 50 * 100 * 4);

    let bottom = frame.pixel(25, 99).unwrap();
    assert!(bottom[3] > 0, "bottom should be painted: {bottom:?}");
    let top = frame.pixel(25, 0).unwrap();
    assert_eq!(top[3], 0, "top should be clear: {top:?}");
    assert_eq!(frame.pixel(50, 0), None);
}

#[test]
fn solid_red_square_rasterizes_exactly() {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10" width="10" height="10"><rect width="10" height="10" fill="#ff0000"/></svg>"##;
    let frame = rasterize_svg(svg, 4, 4).unwrap();
    assert_eq!(frame.pixel(2, 2), Some([255, 0, 0, 255]));
}

#[test]
fn unpremultiply_restores_straight_color() {
    let frame = FrameRgba {
        width: 2,
        height: 1,
        data: vec![64, 0, 32, 128, 0, 0, 0, 0],
    };
    assert_eq!(frame.to_straight_rgba8(), vec![128, 0, 64, 128, 0, 0, 0, 0]);
}

#[test]
fn save_png_writes_a_decodable_file() {
    let dir = std::env::temp_dir().join(format!("blobdrift_raster_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("one.png");

    let frame = FrameRgba {
        width: 3,
        height: 2,
        data: [10u8, 20, 30, 255].repeat(6),
    };
    frame.save_png(&path).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(1, 1).0, [10, 20, 30, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}
