use sandkit_core::{Bounds, ConfigError, GeometryConfig, Point};
use sandkit_patterns::{
    CircleGenerator, CircleParams, DiametersGenerator, DiametersParams, PatternError,
    PatternGenerator, PatternParams, RotationDirection, SpiralGenerator, SpiralParams,
    CIRCLE_SIDES, MAX_SPIRAL_STEPS,
};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

const EPS: f64 = 1e-9;

fn bed() -> GeometryConfig {
    GeometryConfig::new(Bounds::from_size(400.0, 400.0))
}

fn angle_delta(a: f64, b: f64) -> f64 {
    (b - a).rem_euclid(TAU)
}

#[test]
fn test_circle_with_zero_radius_repeats_center() {
    let params = CircleParams {
        center_x: 12.0,
        center_y: -7.5,
        radius: 0.0,
        ..CircleParams::default()
    };
    let path = CircleGenerator::new()
        .generate(&bed(), &PatternParams::Circle(params))
        .expect("valid circle");

    assert_eq!(path.len(), CIRCLE_SIDES);
    assert!(path.iter().all(|p| *p == Point::new(12.0, -7.5)));
    assert_eq!(path.distance(), 0.0);
}

#[test]
fn test_circle_has_sixty_uniform_steps() {
    let params = CircleParams {
        center_x: 10.0,
        center_y: 20.0,
        radius: 50.0,
        start_theta: 0.0,
        direction: RotationDirection::Ccw,
    };
    let path = CircleGenerator::new()
        .generate(&bed(), &PatternParams::Circle(params))
        .expect("valid circle");

    assert_eq!(path.len(), 60);
    let first = path.first().copied().expect("non-empty");
    assert!((first.x - 60.0).abs() < EPS);
    assert!((first.y - 20.0).abs() < EPS);

    let angles: Vec<f64> = path
        .iter()
        .map(|p| (p.y - 20.0).atan2(p.x - 10.0))
        .collect();
    for pair in angles.windows(2) {
        assert!((angle_delta(pair[0], pair[1]) - TAU / 60.0).abs() < 1e-9);
    }
}

#[test]
fn test_circle_clockwise_runs_backwards() {
    let params = CircleParams {
        radius: 10.0,
        direction: RotationDirection::Cw,
        ..CircleParams::default()
    };
    let path = CircleGenerator::new().circle(&params);
    let second = path.points()[1];
    // One step clockwise from angle 0 goes below the X axis.
    assert!(second.y < 0.0);
    assert!((second.x - 10.0 * (TAU / 60.0).cos()).abs() < EPS);
}

#[test]
fn test_circle_does_not_close_the_loop() {
    let params = CircleParams {
        radius: 10.0,
        start_theta: FRAC_PI_2,
        ..CircleParams::default()
    };
    let path = CircleGenerator::new().circle(&params);
    let first = path.first().copied().expect("non-empty");
    let last = path.last().copied().expect("non-empty");
    assert!((first.x).abs() < EPS && (first.y - 10.0).abs() < EPS);
    assert!(first.distance_to(&last) > 1.0);
}

#[test]
fn test_circle_rejects_full_turn_start() {
    let params = CircleParams {
        start_theta: TAU,
        ..CircleParams::default()
    };
    let result = CircleGenerator::new().generate(&bed(), &PatternParams::Circle(params));
    assert!(matches!(result, Err(PatternError::Parameter(_))));
}

#[test]
fn test_circle_rejects_negative_radius() {
    let params = CircleParams {
        radius: -1.0,
        ..CircleParams::default()
    };
    let result = CircleGenerator::new().generate(&bed(), &PatternParams::Circle(params));
    assert!(matches!(result, Err(PatternError::Parameter(_))));
}

#[test]
fn test_invalid_config_fails_before_generation() {
    let config = GeometryConfig::new(Bounds::new(0.0, 100.0, 50.0, 10.0));
    let result =
        CircleGenerator::new().generate(&config, &PatternParams::Circle(CircleParams::default()));
    assert_eq!(
        result,
        Err(PatternError::Config(ConfigError::InvalidBounds {
            axis: "y",
            min: 50.0,
            max: 10.0,
        }))
    );
}

#[test]
fn test_non_finite_config_fails_before_generation() {
    let config = GeometryConfig::new(Bounds::new(0.0, f64::INFINITY, 0.0, 100.0));
    let result = SpiralGenerator::new()
        .generate(&config, &PatternParams::Spiral(SpiralParams::default()));
    assert_eq!(
        result,
        Err(PatternError::Config(ConfigError::NonFinite { field: "max_x" }))
    );
}

#[test]
fn test_zero_motor_speed_fails_before_generation() {
    let config = bed().with_motor_speed(0.0);
    let result = DiametersGenerator::new()
        .generate(&config, &PatternParams::Diameters(DiametersParams::default()));
    assert_eq!(
        result,
        Err(PatternError::Config(ConfigError::InvalidMotorSpeed { value: 0.0 }))
    );
}

#[test]
fn test_generator_rejects_foreign_params() {
    let result =
        CircleGenerator::new().generate(&bed(), &PatternParams::Spiral(SpiralParams::default()));
    assert_eq!(
        result,
        Err(PatternError::ParamsMismatch {
            expected: "circle",
            found: "spiral",
        })
    );
}

#[test]
fn test_spiral_with_zero_offset_is_single_point() {
    let params = SpiralParams {
        offset: 0.0,
        ..SpiralParams::default()
    };
    let path = SpiralGenerator::new()
        .generate(&bed(), &PatternParams::Spiral(params))
        .expect("valid spiral");
    assert_eq!(path.points(), &[Point::origin()]);
}

#[test]
fn test_spiral_stays_inside_table_radius() {
    let config = bed();
    let params = SpiralParams::default();
    let path = SpiralGenerator::new()
        .generate(&config, &PatternParams::Spiral(params.clone()))
        .expect("valid spiral");

    let max_r = config.table_radius();
    assert!(path.iter().all(|p| p.radius() < max_r));
    let step = params.offset / params.sides as f64;
    let last = path.last().copied().expect("non-empty");
    assert!(last.radius() >= max_r - step - EPS);
    // 20 revolutions of 60 steps.
    assert!((1199..=1201).contains(&path.len()));
}

#[test]
fn test_spiral_stops_at_step_limit() {
    let config = bed();
    let params = SpiralParams {
        offset: 1e-6,
        sides: 720,
        twist: 1.0,
        reverse: false,
    };
    let path = SpiralGenerator::new()
        .generate(&config, &PatternParams::Spiral(params))
        .expect("valid spiral");

    assert_eq!(path.len(), MAX_SPIRAL_STEPS);
    let last = path.last().copied().expect("non-empty");
    assert!(last.radius() < config.table_radius());
}

#[test]
fn test_spiral_radius_grows_by_offset_per_revolution() {
    let params = SpiralParams {
        offset: 6.0,
        sides: 12,
        twist: 1.0,
        reverse: false,
    };
    let path = SpiralGenerator::new().spiral(&bed(), &params);
    let after_one_turn = path.points()[12];
    assert!((after_one_turn.x - 6.0).abs() < 1e-9);
    assert!(after_one_turn.y.abs() < 1e-9);
}

#[test]
fn test_spiral_distance_matches_segments() {
    let path = SpiralGenerator::new().spiral(&bed(), &SpiralParams::default());
    let summed: f64 = path
        .points()
        .windows(2)
        .map(|w| w[0].distance_to(&w[1]))
        .sum();
    assert!((path.distance() - summed).abs() < 1e-6);
}

#[test]
fn test_spiral_twist_changes_angle_not_radius() {
    let plain = SpiralGenerator::new().spiral(&bed(), &SpiralParams::default());
    let twisted = SpiralGenerator::new().spiral(
        &bed(),
        &SpiralParams {
            twist: 2.5,
            ..SpiralParams::default()
        },
    );
    assert_eq!(plain.len(), twisted.len());
    for (a, b) in plain.iter().zip(twisted.iter()) {
        assert!((a.radius() - b.radius()).abs() < 1e-9);
    }
}

#[test]
fn test_spiral_reverse_ends_at_center() {
    let params = SpiralParams {
        reverse: true,
        ..SpiralParams::default()
    };
    let path = SpiralGenerator::new().spiral(&bed(), &params);
    assert_eq!(path.last().copied(), Some(Point::origin()));
}

#[test]
fn test_diameters_four_spokes() {
    let config = bed();
    let params = DiametersParams { num_spokes: 4 };
    let path = DiametersGenerator::new()
        .generate(&config, &PatternParams::Diameters(params))
        .expect("valid diameters");

    assert_eq!(path.len(), 8);
    let expected = [
        0.0,
        0.0,
        FRAC_PI_4,
        FRAC_PI_4,
        FRAC_PI_2,
        FRAC_PI_2,
        3.0 * FRAC_PI_4,
        3.0 * FRAC_PI_4,
    ];
    for (step, (point, theta)) in path.iter().zip(expected).enumerate() {
        let sign = if step % 2 == 0 { 1.0 } else { -1.0 };
        assert!((point.radius() - 200.0).abs() < 1e-9);
        assert!((point.x - sign * 200.0 * theta.cos()).abs() < 1e-9);
        assert!((point.y - sign * 200.0 * theta.sin()).abs() < 1e-9);
    }
}

#[test]
fn test_diameters_each_pair_crosses_center() {
    let path = DiametersGenerator::new().diameters(&bed(), &DiametersParams { num_spokes: 7 });
    assert_eq!(path.len(), 14);
    for pair in path.points().chunks(2) {
        assert!((pair[0].x + pair[1].x).abs() < 1e-9);
        assert!((pair[0].y + pair[1].y).abs() < 1e-9);
    }
    // Last spoke stops short of the half turn.
    let last = path.points()[12];
    assert!(last.y.atan2(last.x) < PI);
}

#[test]
fn test_diameters_spoke_range() {
    for spokes in [1, 61] {
        let result = DiametersGenerator::new().generate(
            &bed(),
            &PatternParams::Diameters(DiametersParams { num_spokes: spokes }),
        );
        assert!(matches!(result, Err(PatternError::Parameter(_))));
    }
}

#[test]
fn test_generators_are_deterministic() {
    let config = GeometryConfig::polar(Bounds::new(-150.0, 150.0, -150.0, 150.0));
    let params = PatternParams::Spiral(SpiralParams {
        twist: -1.5,
        ..SpiralParams::default()
    });
    let a = SpiralGenerator::new().generate(&config, &params).expect("valid");
    let b = SpiralGenerator::new().generate(&config, &params).expect("valid");
    assert_eq!(a, b);
}
