use super::*;

#[test]
fn hex_parses_known_colors() {
    let coral = Color::from_hex("#d35843").unwrap();
    assert!((coral.r - 211.0 / 255.0).abs() < 1e-6);
    assert!((coral.g - 88.0 / 255.0).abs() < 1e-6);
    assert!((coral.b - 67.0 / 255.0).abs() < 1e-6);

    assert!(Color::from_hex("fff5e6").is_ok());
    assert!(Color::from_hex("#xyzxyz").is_err());
    assert!(Color::from_hex("#fff").is_err());
}

#[test]
fn lerp_endpoints_are_exact() {
    let a = Color::new(0.6, 0.2, 0.9);
    let b = Color::new(0.18, 0.7, 0.05);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 2.0), b);
    assert_eq!(a.lerp(b, -1.0), a);
}

#[test]
fn color_deserializes_from_hex_and_array() {
    let hex: Color = serde_json::from_str("\"#ff0000\"").unwrap();
    assert!((hex.r - 1.0).abs() < 1e-6);
    let arr: Color = serde_json::from_str("[0.1, 0.2, 0.3]").unwrap();
    assert_eq!(arr, Color::new(0.1, 0.2, 0.3));
}

#[test]
fn viewport_rejects_zero() {
    assert!(Viewport::new(0, 10).is_err());
    assert!(Viewport::new(10, 0).is_err());
    let vp = Viewport::new(1280, 720).unwrap();
    assert!((vp.aspect() - 1280.0 / 720.0).abs() < 1e-6);
}
