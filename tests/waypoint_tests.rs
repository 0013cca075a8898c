//! Integration tests for WaypointPath

mod common;
use common::*;

use approx::assert_abs_diff_eq;
use rgb_orbit::presets::{CORNER_TOUR, FULL_SPECTRUM, TRAY_ANCHORS};
use rgb_orbit::{
    Color, ColorPath, CubeBounds, InterpolationStyle, PathError, Waypoint, WaypointPath, Wiggle,
    generate_waypoint_path,
};

/// Unevenly spaced anchors with sharp reversals on every channel.
const JAGGED: [Waypoint<'static>; 6] = [
    Waypoint::new("a", 0.0, Color::new(10.0, 240.0, 128.0)),
    Waypoint::new("b", 0.5, Color::new(245.0, 5.0, 130.0)),
    Waypoint::new("c", 3.0, Color::new(250.0, 250.0, 0.0)),
    Waypoint::new("d", 3.2, Color::new(0.0, 0.0, 255.0)),
    Waypoint::new("e", 7.0, Color::new(128.0, 128.0, 255.0)),
    Waypoint::new("f", 9.0, Color::new(10.0, 240.0, 128.0)),
];

/// Checks every sample stays within the channel range of its bracketing waypoints.
fn assert_no_overshoot(path: &WaypointPath<'_>, count: usize) {
    let waypoints = path.waypoints();
    let samples = path.samples(count).unwrap();

    for index in 0..count {
        let t = samples.param(index);
        let color = path.evaluate(t);
        let k = waypoints
            .windows(2)
            .position(|pair| t >= pair[0].anchor && t <= pair[1].anchor)
            .unwrap();

        let a = path.anchor_color(k).unwrap().channels();
        let b = path.anchor_color(k + 1).unwrap().channels();
        for (channel, value) in color.channels().into_iter().enumerate() {
            let lo = a[channel].min(b[channel]);
            let hi = a[channel].max(b[channel]);
            assert!(
                value >= lo - 1e-9 && value <= hi + 1e-9,
                "channel {channel} = {value} outside [{lo}, {hi}] at t = {t}"
            );
        }
    }
}

#[test]
fn passes_exactly_through_every_waypoint() {
    let path = WaypointPath::builder(&FULL_SPECTRUM).build().unwrap();
    for waypoint in &FULL_SPECTRUM {
        let color = path.point_at(waypoint.anchor).unwrap();
        assert!(
            colors_equal(color, waypoint.color),
            "{} missed: {color:?}",
            waypoint.label
        );
    }
}

#[test]
fn inset_pulls_waypoints_off_the_walls() {
    let path = WaypointPath::builder(&CORNER_TOUR)
        .inset(40.0)
        .build()
        .unwrap();

    for (index, waypoint) in CORNER_TOUR.iter().enumerate() {
        let expected = path.anchor_color(index).unwrap();
        assert!(colors_equal(path.point_at(waypoint.anchor).unwrap(), expected));
        for channel in expected.channels() {
            assert!((40.0 - 1e-9..=215.0 + 1e-9).contains(&channel));
        }
    }

    assert!(colors_equal(path.anchor_color(0).unwrap(), Color::gray(40.0)));
    assert!(colors_equal(path.anchor_color(8).unwrap(), Color::gray(215.0)));
}

#[test]
fn monotone_interpolation_never_overshoots() {
    for waypoints in [&FULL_SPECTRUM[..], &CORNER_TOUR[..], &JAGGED[..]] {
        let path = WaypointPath::builder(waypoints).build().unwrap();
        assert_no_overshoot(&path, 5000);

        let inset = WaypointPath::builder(waypoints).inset(25.0).build().unwrap();
        assert_no_overshoot(&inset, 5000);
    }
}

#[test]
fn monotone_curve_is_smoother_than_linear() {
    let smooth = WaypointPath::builder(&JAGGED).build().unwrap();
    let linear = WaypointPath::builder(&JAGGED)
        .style(InterpolationStyle::Linear)
        .build()
        .unwrap();

    // Both hit the anchors, but differ in between.
    assert!(colors_equal(smooth.point_at(3.0).unwrap(), linear.point_at(3.0).unwrap()));
    assert!(!colors_equal_epsilon(
        smooth.point_at(1.5).unwrap(),
        linear.point_at(1.5).unwrap(),
        0.5
    ));
}

#[test]
fn linear_style_blends_tray_anchors() {
    let path = WaypointPath::builder(&TRAY_ANCHORS)
        .style(InterpolationStyle::Linear)
        .build()
        .unwrap();

    let two_am = path.point_at(120.0).unwrap();
    assert_abs_diff_eq!(two_am.red, 191.5, epsilon = 1e-9);
    assert_abs_diff_eq!(two_am.green, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(two_am.blue, 64.0, epsilon = 1e-9);

    let noon = path.point_at(720.0).unwrap();
    assert!(colors_equal(noon, Color::new(255.0, 255.0, 0.0)));
}

#[test]
fn wiggle_is_bounded_by_its_amplitude() {
    let plain = WaypointPath::builder(&FULL_SPECTRUM)
        .inset(30.0)
        .build()
        .unwrap();
    let wiggly = WaypointPath::builder(&FULL_SPECTRUM)
        .inset(30.0)
        .wiggle(Wiggle::hourly(10.0))
        .build()
        .unwrap();

    let mut moved = false;
    for (a, b) in plain.samples(2400).unwrap().zip(wiggly.samples(2400).unwrap()) {
        for (x, y) in a.channels().into_iter().zip(b.channels()) {
            assert!((x - y).abs() <= 10.0 + 1e-9);
            moved |= (x - y).abs() > 1.0;
        }
        assert!(in_cube(b));
    }
    assert!(moved);
}

#[test]
fn wiggle_does_not_depend_on_sample_density() {
    let path = WaypointPath::builder(&FULL_SPECTRUM)
        .inset(30.0)
        .wiggle(Wiggle::hourly(10.0))
        .build()
        .unwrap();

    let coarse: Vec<Color> = path.samples(25).unwrap().collect();
    let fine: Vec<Color> = path.samples(49).unwrap().collect();
    for (index, color) in coarse.iter().enumerate() {
        assert_eq!(*color, fine[index * 2]);
    }
}

#[test]
fn heavy_wiggle_is_clamped_into_the_cube() {
    let path = WaypointPath::builder(&CORNER_TOUR)
        .wiggle(Wiggle::normalized(40.0))
        .build()
        .unwrap();

    for color in path.samples(3000).unwrap() {
        assert!(in_cube(color), "{color:?} left the cube");
    }
}

#[test]
fn custom_bounds_clamp_and_inset() {
    let bounds = CubeBounds::new(50.0, 150.0);
    let waypoints = [
        Waypoint::new("low", 0.0, Color::gray(50.0)),
        Waypoint::new("high", 1.0, Color::gray(150.0)),
    ];
    let path = WaypointPath::builder(&waypoints)
        .bounds(bounds)
        .inset(10.0)
        .wiggle(Wiggle::normalized(30.0))
        .build()
        .unwrap();

    assert!(colors_equal_epsilon(path.anchor_color(0).unwrap(), Color::gray(60.0), 1e-9));
    assert!(colors_equal_epsilon(path.anchor_color(1).unwrap(), Color::gray(140.0), 1e-9));
    for color in path.samples(500).unwrap() {
        assert!(bounds.contains(color));
    }
}

#[test]
fn generate_starts_at_first_inset_waypoint() {
    let samples = generate_waypoint_path::<2400>(&FULL_SPECTRUM, 2400, 30.0, 10.0).unwrap();
    assert_eq!(samples.len(), 2400);

    let path = WaypointPath::builder(&FULL_SPECTRUM)
        .inset(30.0)
        .build()
        .unwrap();
    // Every wiggle oscillator is zero at t = 0.
    assert!(colors_equal(samples[0], path.anchor_color(0).unwrap()));
    assert!(samples.iter().all(|&c| in_cube(c)));
}

#[test]
fn rejects_a_single_waypoint() {
    let single = [Waypoint::new("only", 0.0, Color::gray(128.0))];
    assert_eq!(
        generate_waypoint_path::<16>(&single, 10, 0.0, 0.0),
        Err(PathError::InsufficientWaypoints)
    );
    assert_eq!(
        generate_waypoint_path::<16>(&[], 10, 0.0, 0.0),
        Err(PathError::InsufficientWaypoints)
    );
}

#[test]
fn rejects_non_increasing_anchors() {
    let repeated = [
        Waypoint::new("a", 0.0, Color::gray(10.0)),
        Waypoint::new("b", 1.0, Color::gray(20.0)),
        Waypoint::new("c", 1.0, Color::gray(30.0)),
    ];
    assert_eq!(
        WaypointPath::builder(&repeated).build().err(),
        Some(PathError::InvalidWaypointOrder)
    );

    let reversed = [
        Waypoint::new("a", 2.0, Color::gray(10.0)),
        Waypoint::new("b", 1.0, Color::gray(20.0)),
    ];
    assert_eq!(
        WaypointPath::builder(&reversed).build().err(),
        Some(PathError::InvalidWaypointOrder)
    );
}

#[test]
fn rejects_bad_inset_and_wiggle() {
    for inset in [-1.0, 127.5, 200.0, f64::NAN] {
        assert_eq!(
            WaypointPath::builder(&FULL_SPECTRUM).inset(inset).build().err(),
            Some(PathError::InvalidInset),
            "inset {inset}"
        );
    }
    assert_eq!(
        WaypointPath::builder(&FULL_SPECTRUM)
            .wiggle(Wiggle::hourly(-2.0))
            .build()
            .err(),
        Some(PathError::InvalidParameter)
    );
}

#[test]
fn rejects_non_finite_waypoints() {
    let waypoints = [
        Waypoint::new("a", 0.0, Color::gray(10.0)),
        Waypoint::new("b", 1.0, Color::new(f64::NAN, 0.0, 0.0)),
    ];
    assert_eq!(
        WaypointPath::builder(&waypoints).build().err(),
        Some(PathError::InvalidParameter)
    );
}

#[test]
fn sampling_errors() {
    let path = WaypointPath::builder(&FULL_SPECTRUM).build().unwrap();
    assert!(matches!(path.samples(0), Err(PathError::InvalidSampleCount)));
    assert_eq!(path.point_at(24.5), Err(PathError::OutOfDomain));
    assert_eq!(path.point_at(-0.5), Err(PathError::OutOfDomain));
    assert_eq!(
        generate_waypoint_path::<8>(&FULL_SPECTRUM, 9, 0.0, 0.0),
        Err(PathError::CapacityExceeded)
    );
}
