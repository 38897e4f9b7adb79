use proptest::prelude::*;
use sandkit_core::{Bounds, GeometryConfig, ParseError, Point};
use sandkit_patterns::{
    parse_coordinates, parse_gcode, CoordinateListGenerator, CoordinateListParams,
    GcodeImportGenerator, GcodeImportParams, PatternError, PatternGenerator, PatternParams,
};

fn bed() -> GeometryConfig {
    GeometryConfig::new(Bounds::from_size(200.0, 100.0))
}

#[test]
fn test_coordinate_list_round_trip() {
    let params = PatternParams::CoordinateList(CoordinateListParams {
        text: "10,20\n-5,0".to_string(),
    });
    let path = CoordinateListGenerator::new()
        .generate(&bed(), &params)
        .expect("valid list");
    assert_eq!(path.points(), &[Point::new(10.0, 20.0), Point::new(-5.0, 0.0)]);
    assert!((path.distance() - (15.0f64.hypot(20.0))).abs() < 1e-12);
}

#[test]
fn test_coordinate_list_reports_malformed_line() {
    let err = parse_coordinates("1,2\n3;4\n5,6").unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.content, "3;4");
}

#[test]
fn test_coordinate_list_rejects_bad_number() {
    let err = parse_coordinates("1,2\n\n3,abc").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(err.reason.contains("invalid y value 'abc'"));
}

#[test]
fn test_coordinate_list_rejects_extra_fields() {
    let err = parse_coordinates("1,2,3").unwrap_err();
    assert_eq!(
        err,
        ParseError::new(1, "1,2,3", "expected 'x,y', found 3 field(s)")
    );
}

#[test]
fn test_coordinate_list_rejects_nan() {
    let err = parse_coordinates("NaN,1").unwrap_err();
    assert!(err.reason.contains("finite"));
}

#[test]
fn test_coordinate_list_empty_text_is_empty_path() {
    let path = parse_coordinates("\n\n").expect("blank input");
    assert!(path.is_empty());
}

#[test]
fn test_coordinate_list_parse_error_surfaces_from_generator() {
    let params = PatternParams::CoordinateList(CoordinateListParams {
        text: "oops".to_string(),
    });
    let result = CoordinateListGenerator::new().generate(&bed(), &params);
    assert!(matches!(result, Err(PatternError::Parse(ParseError { line: 1, .. }))));
}

#[test]
fn test_gcode_import_translates_to_centered() {
    let text = "; header\nG21\nG0 X100 Y50\nG1 X0.00 Y0.00\nM2\n";
    let path = parse_gcode(&bed(), text).expect("valid gcode");
    assert_eq!(
        path.points(),
        &[Point::new(0.0, 0.0), Point::new(-100.0, -50.0)]
    );
}

#[test]
fn test_gcode_import_accepts_either_axis_order() {
    let text = "G0 X150 Y75\nG0 Y25 X50";
    let path = parse_gcode(&bed(), text).expect("valid gcode");
    assert_eq!(
        path.points(),
        &[Point::new(50.0, 25.0), Point::new(-50.0, -25.0)]
    );
}

#[test]
fn test_gcode_import_skips_non_motion_lines() {
    let text = "G90\nG0 Z5\nG2 X1 Y1 I0 J1\nG0 X10\nG10 X1 Y1\n(G0 X1 Y1)\n";
    let path = parse_gcode(&bed(), text).expect("valid gcode");
    assert!(path.is_empty());
}

#[test]
fn test_gcode_import_reports_overflowing_line() {
    let text = format!("G1 X10 Y10\nG1 X1{} Y5\nG1 X20 Y20", "0".repeat(400));
    let params = PatternParams::GcodeImport(GcodeImportParams { text });
    match GcodeImportGenerator::new().generate(&bed(), &params) {
        Err(PatternError::Parse(err)) => assert_eq!(err.line, 2),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_gcode_import_generator() {
    let params = PatternParams::GcodeImport(GcodeImportParams {
        text: "G00 X100.00 Y50.00 F3000\ng1 x110 y60".to_string(),
    });
    let path = GcodeImportGenerator::new()
        .generate(&bed(), &params)
        .expect("valid gcode");
    assert_eq!(path.len(), 2);
    assert_eq!(path.points()[1], Point::new(10.0, 10.0));
}

proptest! {
    #[test]
    fn prop_coordinate_list_reads_back_written_points(
        pairs in prop::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 0..40),
    ) {
        let text: String = pairs
            .iter()
            .map(|(x, y)| format!("{},{}\n", x, y))
            .collect();
        let path = parse_coordinates(&text).expect("finite pairs");
        let expected: Vec<Point> = pairs.iter().map(|&(x, y)| Point::new(x, y)).collect();
        prop_assert_eq!(path.points(), expected.as_slice());
    }

    #[test]
    fn prop_gcode_import_centers_bed_moves(bed_x in 0.0f64..200.0, bed_y in 0.0f64..100.0) {
        let text = format!("G1 X{:.3} Y{:.3}", bed_x, bed_y);
        let path = parse_gcode(&bed(), &text).expect("finite moves");
        prop_assert_eq!(path.len(), 1);
        let point = path.points()[0];
        prop_assert!((point.x - (bed_x - 100.0)).abs() < 1e-3);
        prop_assert!((point.y - (bed_y - 50.0)).abs() < 1e-3);
    }
}
