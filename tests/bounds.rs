//! End-to-end bounds for representative path strings.

use glam::dvec2;
use pathbox::{BoundsError, Envelope, extract_bounds, rect_bounds, try_extract_bounds};

fn bounds(path_data: &str) -> String {
    match extract_bounds(path_data) {
        Some(env) => env.to_string(),
        None => "none".to_string(),
    }
}

#[test]
fn absolute_line() {
    insta::assert_snapshot!(bounds("M10,10 L20,20"), @"x: [10, 20], y: [10, 20]");
}

#[test]
fn relative_lines_walk_from_cursor() {
    insta::assert_snapshot!(bounds("M10,10 l5,5 l-20,0"), @"x: [-5, 15], y: [10, 15]");
}

#[test]
fn horizontal_and_vertical_square() {
    insta::assert_snapshot!(bounds("M0,0 H10 V10 H0 Z"), @"x: [0, 10], y: [0, 10]");
}

#[test]
fn cubic_control_points_widen_bounds() {
    // The rendered curve only reaches y = -7.5; the control points sit at -10
    insta::assert_snapshot!(bounds("M0,0 C5,-10 10,-10 15,0"), @"x: [0, 15], y: [-10, 0]");
}

#[test]
fn relative_cubics_anchor_each_group() {
    insta::assert_snapshot!(bounds("M0,0 c1,1 2,2 3,3 c1,1 2,2 3,3"), @"x: [0, 6], y: [0, 6]");
    // The cursor ends on the second endpoint
    insta::assert_snapshot!(bounds("M0,0 c1,1 2,2 3,3 c1,1 2,2 3,3 l0,0"), @"x: [0, 6], y: [0, 6]");
    insta::assert_snapshot!(bounds("M0,0 c1,1 2,2 3,3 c1,1 2,2 3,3 l1,1"), @"x: [0, 7], y: [0, 7]");
}

#[test]
fn move_ignores_extra_pairs() {
    insta::assert_snapshot!(bounds("M0,0 10,10"), @"x: [0, 0], y: [0, 0]");
    insta::assert_snapshot!(bounds("m5,5 10,0 0,10 l1,1"), @"x: [5, 6], y: [5, 6]");
}

#[test]
fn short_relative_curve_still_moves_cursor() {
    insta::assert_snapshot!(bounds("M0,0 c1,1 2,2 l1,1"), @"x: [0, 3], y: [0, 3]");
}

#[test]
fn overflowing_points_stay_out_of_bounds() {
    let env = extract_bounds("M1e308,0 l1e308,0").unwrap();
    assert!(env.max_x.is_finite() && env.width().is_finite());
    assert_eq!(env, Envelope::new(1e308, 1e308, 0.0, 0.0));
}

#[test]
fn packed_arc_flags() {
    insta::assert_snapshot!(bounds("M0,0 a5,5 0 1110,10"), @"x: [0, 10], y: [0, 10]");
}

#[test]
fn no_geometry() {
    assert_eq!(extract_bounds(""), None);
    assert_eq!(extract_bounds("   "), None);
    assert_eq!(extract_bounds("MZLz"), None);
    assert_eq!(extract_bounds("not a path"), None);
}

#[test]
fn malformed_data_still_yields_bounds() {
    insta::assert_snapshot!(bounds("M10,10 L!!20,##20 x"), @"x: [10, 20], y: [10, 20]");
}

#[test]
fn sign_separates_numbers() {
    insta::assert_snapshot!(bounds("M10-5L-3-7"), @"x: [-3, 10], y: [-7, -5]");
}

#[test]
fn min_never_exceeds_max() {
    let paths = [
        "M10,10 L20,20",
        "m-5-5 l-3,8 h-2 v-9 z",
        "M0,0 Q-10,-10 5,5 T-20,3",
        "M1 1 s2-2 3 3 S-4 4 5 5",
        "M 3 3 A 1 1 0 0 1 -3 -3",
    ];
    for path in paths {
        let env = extract_bounds(path).unwrap();
        assert!(env.min_x <= env.max_x, "{path}: {env}");
        assert!(env.min_y <= env.max_y, "{path}: {env}");
    }
}

#[test]
fn extraction_is_idempotent() {
    let path = "M67.647,54.635v1.005c0,.555-.45,1.005-1.005,1.005h-8.039c-.555,0-1.005-.45-1.005-1.005z";
    assert_eq!(extract_bounds(path), extract_bounds(path));
    assert!(extract_bounds(path).is_some());
}

#[test]
fn absent_path_is_an_error() {
    let err = try_extract_bounds(None).unwrap_err();
    assert_eq!(err, BoundsError::InvalidInput);
    assert_eq!(err.to_string(), "path data is absent");
}

#[test]
fn rectangle_bounds() {
    let env = rect_bounds(5.0, 5.0, 10.0, 4.0);
    assert_eq!(env, Envelope::new(5.0, 15.0, 5.0, 9.0));
    assert_eq!(env.center(), dvec2(10.0, 7.0));
}

#[test]
fn path_and_rect_combine() {
    let path = extract_bounds("M0,0 L4,4").unwrap();
    let rect = rect_bounds(2.0, -1.0, 10.0, 2.0);
    let combined = path.union(&rect);
    insta::assert_snapshot!(combined.to_string(), @"x: [0, 12], y: [-1, 4]");
    assert_eq!(combined.center(), dvec2(6.0, 1.5));
}
