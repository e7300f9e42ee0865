use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::CubicBezier(0.25, 0.1, 0.25, 1.0),
];

#[test]
fn endpoints_are_fixed() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0));
        assert_eq!(ease.apply(7.0), ease.apply(1.0));
    }
}

#[test]
fn linear_bezier_matches_identity() {
    let ease = Ease::CubicBezier(0.0, 0.0, 1.0, 1.0);
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        assert!((ease.apply(t) - t).abs() < 1e-5, "t={t}");
    }
}

#[test]
fn ease_out_curves_lead_linear() {
    assert!(Ease::OutCubic.apply(0.3) > 0.3);
    assert!(Ease::CubicBezier(0.0, 0.0, 0.58, 1.0).apply(0.3) > 0.3);
    assert!(Ease::InQuad.apply(0.3) < 0.3);
}

#[test]
fn css_named_curves_match_reference_values() {
    // CSS `ease` and `ease-in`.
    let ease = Ease::CubicBezier(0.25, 0.1, 0.25, 1.0);
    assert!((ease.apply(0.5) - 0.8024).abs() < 1e-4, "{}", ease.apply(0.5));
    let ease_in = Ease::CubicBezier(0.42, 0.0, 1.0, 1.0);
    assert!((ease_in.apply(0.25) - 0.0935).abs() < 1e-4, "{}", ease_in.apply(0.25));
}

#[test]
fn bezier_is_monotonic_and_finite_with_overshoot() {
    let ease = Ease::CubicBezier(0.68, -0.55, 0.27, 1.55);
    let ease_out = Ease::CubicBezier(0.0, 0.0, 0.58, 1.0);
    let mut prev = 0.0;
    for i in 1..=100 {
        let t = f64::from(i) / 100.0;
        let v = ease_out.apply(t);
        assert!(v >= prev - 1e-9, "t={t}");
        prev = v;
        assert!(ease.apply(t).is_finite());
    }
}
