use proptest::prelude::*;
use sandkit_core::{Bounds, GeometryConfig, Path, Point};
use sandkit_preview::{MarkerKind, OutlineStyle, PlotArea, PreviewScene, ScreenPoint, Viewport};

const EPS: f64 = 1e-9;

fn close(a: ScreenPoint, b: ScreenPoint) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

#[test]
fn test_fit_centers_square_bed_in_wide_canvas() {
    let config = GeometryConfig::new(Bounds::from_size(400.0, 400.0));
    let viewport = Viewport::fit(&config, 1010.0, 410.0);

    assert!((viewport.zoom() - 1.0).abs() < EPS);
    // Bed center lands on the canvas center.
    let center = viewport.centered_to_screen(&config, Point::origin());
    assert!(close(center, ScreenPoint::new(505.0, 205.0)));
    // Top-left corner of the bed, Y flipped.
    let corner = viewport.bed_to_screen(Point::new(0.0, 400.0));
    assert!(close(corner, ScreenPoint::new(305.0, 5.0)));
}

#[test]
fn test_screen_to_centered_inverts_centered_to_screen() {
    let config = GeometryConfig::new(Bounds::new(-50.0, 250.0, 0.0, 100.0));
    let viewport = Viewport::fit(&config, 640.0, 480.0);
    let point = Point::new(-12.5, 33.0);
    let back = viewport.screen_to_centered(&config, viewport.centered_to_screen(&config, point));
    assert!((back.x - point.x).abs() < EPS);
    assert!((back.y - point.y).abs() < EPS);
}

#[test]
fn test_scene_markers_and_polyline() {
    let config = GeometryConfig::new(Bounds::from_size(200.0, 200.0));
    let viewport = Viewport::fit(&config, 210.0, 210.0);
    let path: Path = vec![
        Point::new(-100.0, -100.0),
        Point::new(0.0, 0.0),
        Point::new(100.0, 100.0),
    ]
    .into();

    let scene = PreviewScene::build(&config, &path, &viewport, Some(1));
    assert_eq!(scene.polyline.len(), 3);
    assert_eq!(scene.outline_style, OutlineStyle::Normal);
    assert!(close(
        scene.marker(MarkerKind::Start).unwrap(),
        ScreenPoint::new(5.0, 205.0)
    ));
    assert!(close(
        scene.marker(MarkerKind::Current).unwrap(),
        ScreenPoint::new(105.0, 105.0)
    ));
    assert!(close(
        scene.marker(MarkerKind::End).unwrap(),
        ScreenPoint::new(205.0, 5.0)
    ));
    match scene.plot_area {
        PlotArea::Rect { top_left, width, height } => {
            assert!(close(top_left, ScreenPoint::new(5.0, 5.0)));
            assert!((width - 200.0).abs() < EPS && (height - 200.0).abs() < EPS);
        }
        other => panic!("unexpected plot area {:?}", other),
    }
}

#[test]
fn test_scene_flags_exceeded_points() {
    let config = GeometryConfig::new(Bounds::from_size(200.0, 200.0));
    let viewport = Viewport::fit(&config, 400.0, 400.0);
    let path: Path = vec![Point::new(0.0, 0.0), Point::new(150.0, 0.0)].into();

    let scene = PreviewScene::build(&config, &path, &viewport, Some(10));
    assert!(scene.is_exceeded());
    assert_eq!(scene.exceeded, vec![1]);
    assert!(scene.marker(MarkerKind::Current).is_none());
}

#[test]
fn test_polar_scene_uses_circle_and_radius() {
    let config = GeometryConfig::polar(Bounds::from_size(200.0, 200.0));
    let viewport = Viewport::fit(&config, 210.0, 210.0);
    // Inside the square bed but beyond the table radius.
    let path: Path = vec![Point::new(90.0, 90.0)].into();

    let scene = PreviewScene::build(&config, &path, &viewport, None);
    assert_eq!(scene.outline_style, OutlineStyle::Exceeded);
    match scene.plot_area {
        PlotArea::Circle { center, radius } => {
            assert!(close(center, ScreenPoint::new(105.0, 105.0)));
            assert!((radius - 100.0).abs() < EPS);
        }
        other => panic!("unexpected plot area {:?}", other),
    }
}

#[test]
fn test_empty_path_has_no_markers() {
    let config = GeometryConfig::default();
    let viewport = Viewport::fit(&config, 100.0, 100.0);
    let scene = PreviewScene::build(&config, &Path::new(), &viewport, Some(0));
    assert!(scene.markers.is_empty());
    assert!(!scene.is_exceeded());
}

#[test]
fn test_scene_serializes_for_renderers() {
    let config = GeometryConfig::polar(Bounds::from_size(100.0, 100.0));
    let viewport = Viewport::fit(&config, 110.0, 110.0);
    let path: Path = vec![Point::origin()].into();
    let scene = PreviewScene::build(&config, &path, &viewport, None);
    let json = serde_json::to_value(&scene).unwrap();
    assert_eq!(json["plot_area"]["shape"], "circle");
    assert_eq!(json["outline_style"], "normal");
    assert_eq!(json["markers"][0]["kind"], "start");
}

proptest! {
    #[test]
    fn prop_screen_round_trip(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        w in 50.0f64..2000.0,
        h in 50.0f64..2000.0,
    ) {
        let config = GeometryConfig::new(Bounds::from_size(w, h));
        let viewport = Viewport::fit(&config, 800.0, 600.0);
        let point = Point::new(x, y);
        let screen = viewport.centered_to_screen(&config, point);
        let back = viewport.screen_to_centered(&config, screen);
        prop_assert!((back.x - x).abs() < 1e-6);
        prop_assert!((back.y - y).abs() < 1e-6);
    }

    #[test]
    fn prop_fitted_bed_stays_on_canvas(w in 1.0f64..5000.0, h in 1.0f64..5000.0) {
        let config = GeometryConfig::new(Bounds::from_size(w, h));
        let viewport = Viewport::fit(&config, 640.0, 480.0);
        for corner in [Point::new(0.0, 0.0), Point::new(w, h)] {
            let s = viewport.bed_to_screen(corner);
            prop_assert!(s.x >= 5.0 - 1e-6 && s.x <= 635.0 + 1e-6);
            prop_assert!(s.y >= 5.0 - 1e-6 && s.y <= 475.0 + 1e-6);
        }
    }
}
