use kurbo::PathEl;

use super::*;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn empty_input_gives_empty_path() {
    assert!(area_path(&[], 100.0).elements().is_empty());
    assert!(catmull_rom_path(&[]).elements().is_empty());
}

#[test]
fn single_point_drops_straight_to_baseline() {
    let p = area_path(&[Point::new(10.0, 20.0)], 100.0);
    assert_eq!(
        p.elements(),
        &[
            PathEl::MoveTo(Point::new(10.0, 20.0)),
            PathEl::LineTo(Point::new(10.0, 100.0)),
            PathEl::LineTo(Point::new(10.0, 100.0)),
            PathEl::ClosePath,
        ]
    );
}

#[test]
fn two_points_form_a_straight_top_edge() {
    let pts = [Point::new(0.0, 50.0), Point::new(10.0, 60.0)];
    let p = area_path(&pts, 100.0);
    assert_eq!(
        p.elements(),
        &[
            PathEl::MoveTo(pts[0]),
            PathEl::LineTo(pts[1]),
            PathEl::LineTo(Point::new(10.0, 100.0)),
            PathEl::LineTo(Point::new(0.0, 100.0)),
            PathEl::ClosePath,
        ]
    );
}

#[test]
fn curve_passes_through_every_point_and_closes_on_baseline() {
    let pts: Vec<Point> = [1800.0, 1600.0, 1400.0, 800.0, 600.0, 1200.0]
        .iter()
        .enumerate()
        .map(|(i, &y)| Point::new(i as f64 * 200.0, y))
        .collect();
    let p = area_path(&pts, 2000.0);
    let els = p.elements();
    assert_eq!(els.len(), 1 + (pts.len() - 1) + 2 + 1);

    assert_eq!(els[0], PathEl::MoveTo(pts[0]));
    for (i, el) in els[1..pts.len()].iter().enumerate() {
        let PathEl::CurveTo(_, _, end) = *el else {
            panic!("expected a cubic segment at {i}, got {el:?}");
        };
        assert!(close(end, pts[i + 1]));
    }
    assert_eq!(els[pts.len()], PathEl::LineTo(Point::new(1000.0, 2000.0)));
    assert_eq!(els[pts.len() + 1], PathEl::LineTo(Point::new(0.0, 2000.0)));
    assert_eq!(els[pts.len() + 2], PathEl::ClosePath);
}

#[test]
fn evenly_spaced_collinear_points_put_controls_at_thirds() {
    let pts: Vec<Point> = (0..4).map(|i| Point::new(f64::from(i), 0.0)).collect();
    let p = catmull_rom_path(&pts);
    let PathEl::CurveTo(c1, c2, end) = p.elements()[2] else {
        panic!("expected cubic");
    };
    assert!(close(c1, Point::new(4.0 / 3.0, 0.0)));
    assert!(close(c2, Point::new(5.0 / 3.0, 0.0)));
    assert!(close(end, Point::new(2.0, 0.0)));

    // End segments reuse the endpoint as their missing neighbour.
    let PathEl::CurveTo(first_c1, _, _) = p.elements()[1] else {
        panic!("expected cubic");
    };
    assert!(close(first_c1, pts[0]));
    let PathEl::CurveTo(_, last_c2, _) = p.elements()[3] else {
        panic!("expected cubic");
    };
    assert!(close(last_c2, pts[3]));
}

#[test]
fn repeated_points_stay_finite() {
    let pts = [
        Point::new(0.0, 5.0),
        Point::new(0.0, 5.0),
        Point::new(1.0, 5.0),
        Point::new(1.0, 5.0),
    ];
    for el in catmull_rom_path(&pts).elements() {
        if let PathEl::CurveTo(a, b, c) = el {
            for q in [a, b, c] {
                assert!(q.x.is_finite() && q.y.is_finite());
            }
        }
    }
}
