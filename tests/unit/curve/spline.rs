use super::*;

fn highway_points() -> Vec<Vec3> {
    vec![
        Vec3::new(25.0, 0.0, 60.0),
        Vec3::new(15.0, 0.0, 40.0),
        Vec3::new(5.0, 0.0, 20.0),
        Vec3::new(-5.0, 0.0, 0.0),
        Vec3::new(-15.0, 0.0, -25.0),
        Vec3::new(-25.0, 0.0, -50.0),
        Vec3::new(-35.0, 0.0, -80.0),
    ]
}

#[test]
fn construction_validates_inputs() {
    assert!(Spline::new(vec![Vec3::ZERO; 3], 0.5).is_err());
    assert!(Spline::new(highway_points(), 0.0).is_err());
    assert!(Spline::new(highway_points(), f32::NAN).is_err());
    assert!(Spline::new(vec![Vec3::splat(1.0); 4], 0.5).is_err());
    assert!(Spline::new(highway_points(), 0.5).is_ok());
}

#[test]
fn identical_inputs_give_bit_identical_samples() {
    let a = Spline::new(highway_points(), 0.5).unwrap();
    let b = Spline::new(highway_points(), 0.5).unwrap();
    for i in 0..=100 {
        let t = i as f32 / 100.0;
        assert_eq!(a.point_at(t), b.point_at(t));
        assert_eq!(a.tangent_at(t), b.tangent_at(t));
    }
    assert_eq!(a.length(), b.length());
}

#[test]
fn endpoints_hit_first_and_last_control_points() {
    let spline = Spline::new(highway_points(), 0.5).unwrap();
    assert!(spline.point_at(0.0).distance(Vec3::new(25.0, 0.0, 60.0)) < 1e-5);
    assert!(spline.point_at(1.0).distance(Vec3::new(-35.0, 0.0, -80.0)) < 1e-5);
}

#[test]
fn parameter_is_clamped() {
    let spline = Spline::new(highway_points(), 0.5).unwrap();
    assert_eq!(spline.point_at(-0.5), spline.point_at(0.0));
    assert_eq!(spline.point_at(1.5), spline.point_at(1.0));
}

#[test]
fn tangents_are_unit_length_and_follow_travel() {
    let spline = Spline::new(highway_points(), 0.5).unwrap();
    for i in 0..=50 {
        let t = i as f32 / 50.0;
        let tangent = spline.tangent_at(t);
        assert!((tangent.length() - 1.0).abs() < 1e-4);
    }
    // The path heads toward -Z overall.
    assert!(spline.tangent_at(0.5).z < 0.0);
}

#[test]
fn length_approximates_chord_sum() {
    let spline = Spline::new(highway_points(), 0.5).unwrap();
    let straight: f32 = highway_points()
        .windows(2)
        .map(|w| w[0].distance(w[1]))
        .sum();
    assert!(spline.length() >= straight * 0.99);
    assert!(spline.length() < straight * 1.5);
}

#[test]
fn binormal_is_horizontal_and_perpendicular() {
    let spline = Spline::new(highway_points(), 0.5).unwrap();
    for i in 0..=20 {
        let t = i as f32 / 20.0;
        let tangent = spline.tangent_at(t);
        let side = binormal(tangent);
        assert_eq!(side.y, 0.0);
        assert!(side.dot(tangent).abs() < 1e-4);
        assert!((side.length() - 1.0).abs() < 1e-4);
    }
}
