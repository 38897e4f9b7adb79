use chrono::NaiveDate;
use sandkit_core::{Bounds, ConfigError, GeometryConfig, Path, Point};
use sandkit_gcode::{
    ExportError, GcodeExporter, MotionCommand, PatternMetadata, FIXED_HEADER_LINES,
};
use sandkit_patterns::{
    parse_gcode, CircleParams, PatternGenerator, PatternParams, PatternRegistry, SpiralGenerator,
    SpiralParams,
};

fn bed() -> GeometryConfig {
    GeometryConfig::new(Bounds::from_size(400.0, 400.0)).with_motor_speed(500.0)
}

fn fixed_exporter() -> GcodeExporter {
    let timestamp = NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(12, 30, 0))
        .unwrap();
    GcodeExporter::new().with_timestamp(timestamp)
}

#[test]
fn test_line_count_matches_sections() {
    let registry = PatternRegistry::with_defaults();
    let params = PatternParams::Spiral(SpiralParams::default());
    let path = registry.generate("spiral", &bed(), &params).unwrap();
    let spec = registry.get("spiral").unwrap().spec();
    let metadata = PatternMetadata::from_params(&spec, &params);

    let exporter = fixed_exporter()
        .with_start_block(["G28", "G90"])
        .with_finish_block(["M2"]);
    let program = exporter.export(&bed(), &path, &metadata).unwrap();

    let header = FIXED_HEADER_LINES + 4;
    assert_eq!(program.header().len(), header);
    assert_eq!(program.line_count(), header + 2 + path.len() + 1 + 3);
    assert_eq!(program.lines().count(), program.line_count());
    assert_eq!(
        program.to_gcode_string().lines().count(),
        program.line_count()
    );
}

#[test]
fn test_header_describes_machine_and_pattern() {
    let path: Path = vec![Point::new(0.0, 0.0), Point::new(30.0, 40.0)].into();
    let metadata = PatternMetadata::new("Coordinate List").with_entry("text", "<2 lines>");
    let program = fixed_exporter().export(&bed(), &path, &metadata).unwrap();

    assert_eq!(
        program.header(),
        &[
            format!("; Generated by sandkit {}", env!("CARGO_PKG_VERSION")),
            "; Date: 2024-03-01 12:30:00".to_string(),
            "; Bed: X 0.00..400.00 Y 0.00..400.00 mm".to_string(),
            "; Format: cartesian".to_string(),
            "; Motor speed: 500.00 mm/min".to_string(),
            "; Pattern: Coordinate List".to_string(),
            "; text: <2 lines>".to_string(),
            "; Distance: 50.00 mm".to_string(),
            "; Estimated time: 0.10 min".to_string(),
        ]
    );
}

#[test]
fn test_motion_lines_are_in_bed_coordinates() {
    let path: Path = vec![
        Point::new(0.0, 0.0),
        Point::new(-200.0, -200.0),
        Point::new(-200.001, 12.3456),
    ]
    .into();
    let program = fixed_exporter()
        .with_command(MotionCommand::G1)
        .export(&bed(), &path, &PatternMetadata::new("Test"))
        .unwrap();

    assert_eq!(
        program.motion(),
        &["G1 X200.00 Y200.00", "G1 X0.00 Y0.00", "G1 X0.00 Y212.35"]
    );
}

#[test]
fn test_empty_blocks_still_separated() {
    let path: Path = vec![Point::origin()].into();
    let program = fixed_exporter()
        .export(&bed(), &path, &PatternMetadata::new("Dot"))
        .unwrap();
    let text = program.to_gcode_string();
    assert!(text.ends_with("G0 X200.00 Y200.00\n\n"));
    assert!(program.start_block().is_empty());
    assert!(program.finish_block().is_empty());
}

#[test]
fn test_out_of_bed_points_are_still_exported() {
    let path: Path = vec![Point::new(250.0, 0.0)].into();
    let program = fixed_exporter()
        .export(&bed(), &path, &PatternMetadata::new("Off"))
        .unwrap();
    assert_eq!(program.motion(), &["G0 X450.00 Y200.00"]);
}

#[test]
fn test_export_then_import_round_trip() {
    let config = GeometryConfig::new(Bounds::from_size(300.0, 200.0));
    let params = PatternParams::Spiral(SpiralParams {
        twist: 1.7,
        ..SpiralParams::default()
    });
    let path = SpiralGenerator::new().generate(&config, &params).unwrap();
    let program = fixed_exporter()
        .with_start_block(["G28"])
        .export(&config, &path, &PatternMetadata::new("Spiral"))
        .unwrap();

    let imported = parse_gcode(&config, &program.to_gcode_string()).unwrap();
    assert_eq!(imported.len(), path.len());
    for (a, b) in path.iter().zip(imported.iter()) {
        assert!((a.x - b.x).abs() <= 0.01, "{:?} vs {:?}", a, b);
        assert!((a.y - b.y).abs() <= 0.01, "{:?} vs {:?}", a, b);
    }
}

#[test]
fn test_circle_round_trip_through_registry() {
    let registry = PatternRegistry::with_defaults();
    let params = PatternParams::Circle(CircleParams {
        center_x: 20.0,
        radius: 75.0,
        ..CircleParams::default()
    });
    let path = registry.generate("circle", &bed(), &params).unwrap();
    let program = fixed_exporter()
        .export(&bed(), &path, &PatternMetadata::new("Circle"))
        .unwrap();
    let imported = parse_gcode(&bed(), &program.to_gcode_string()).unwrap();
    assert_eq!(imported.len(), 60);
    assert!((imported.points()[0].x - 95.0).abs() <= 0.01);
}

#[test]
fn test_export_rejects_zero_motor_speed() {
    let path: Path = vec![Point::new(1.0, 2.0)].into();
    let config = bed().with_motor_speed(0.0);
    let result = fixed_exporter().export(&config, &path, &PatternMetadata::new("Dot"));
    assert_eq!(
        result,
        Err(ExportError::Config(ConfigError::InvalidMotorSpeed { value: 0.0 }))
    );
}

#[test]
fn test_export_rejects_non_finite_points() {
    let path: Path = vec![Point::new(1.0, 2.0), Point::new(f64::NAN, 1.0)].into();
    let result = fixed_exporter().export(&bed(), &path, &PatternMetadata::new("Bad"));
    match result {
        Err(ExportError::NonFinitePoint { index, y, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(y, 1.0);
        }
        other => panic!("expected a non-finite point error, got {:?}", other),
    }
}
