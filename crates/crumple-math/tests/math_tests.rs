//! Integration tests for crumple-math.

use crumple_math::{Bounds2, EasingCurve, Vec2};

// ─── Easing Tests ─────────────────────────────────────────────

#[test]
fn easing_endpoints_are_exact() {
    for curve in [EasingCurve::Linear, EasingCurve::QuadOut, EasingCurve::CubicOut] {
        assert_eq!(curve.apply(0.0), 0.0, "{} at 0", curve.name());
        assert_eq!(curve.apply(1.0), 1.0, "{} at 1", curve.name());
    }
}

#[test]
fn easing_clamps_out_of_range() {
    assert_eq!(EasingCurve::QuadOut.apply(-0.5), 0.0);
    assert_eq!(EasingCurve::CubicOut.apply(3.0), 1.0);
}

#[test]
fn quad_out_midpoint() {
    // t(2 - t) at 0.5 = 0.75
    assert!((EasingCurve::QuadOut.apply(0.5) - 0.75).abs() < 1e-6);
}

#[test]
fn cubic_out_midpoint() {
    // 1 - 0.5³ = 0.875
    assert!((EasingCurve::CubicOut.apply(0.5) - 0.875).abs() < 1e-6);
}

#[test]
fn ease_out_curves_lead_linear() {
    for i in 1..10 {
        let t = i as f32 / 10.0;
        assert!(EasingCurve::QuadOut.apply(t) > t);
        assert!(EasingCurve::CubicOut.apply(t) >= EasingCurve::QuadOut.apply(t));
    }
}

#[test]
fn easing_serializes_snake_case() {
    let json = serde_json::to_string(&EasingCurve::QuadOut).unwrap();
    assert_eq!(json, "\"quad_out\"");
    let recovered: EasingCurve = serde_json::from_str("\"cubic_out\"").unwrap();
    assert_eq!(recovered, EasingCurve::CubicOut);
}

// ─── Bounds Tests ─────────────────────────────────────────────

#[test]
fn bounds_from_xy() {
    let b = Bounds2::from_xy(&[-1.0, 3.0, 0.5], &[2.0, -4.0, 0.0]).unwrap();
    assert_eq!(b.min, Vec2::new(-1.0, -4.0));
    assert_eq!(b.max, Vec2::new(3.0, 2.0));
    assert_eq!(b.center(), Vec2::new(1.0, -1.0));
    assert_eq!(b.size(), Vec2::new(4.0, 6.0));
}

#[test]
fn bounds_empty_input() {
    assert!(Bounds2::from_xy(&[], &[]).is_none());
}
