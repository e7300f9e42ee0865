use super::*;
use crate::animation::ease::Ease;

fn linear(duration: f64) -> Transition {
    Transition::new(duration).with_ease(Ease::Linear)
}

#[test]
fn starts_settled_hidden() {
    let c = AnimationController::new(Variants::fade_up(40.0), linear(1.0));
    assert_eq!(c.state(), VariantName::Hidden);
    assert_eq!(c.sample(0.0), Variants::fade_up(40.0).hidden);
    assert!(!c.is_animating(0.0));
}

#[test]
fn reveal_runs_over_duration() {
    let mut c = AnimationController::new(Variants::fade_up(40.0), linear(1.0));
    assert!(c.set(VariantName::Visible, 10.0));
    assert!(!c.set(VariantName::Visible, 10.2));

    let mid = c.sample(10.5);
    assert_eq!(mid.opacity, 0.5);
    assert_eq!(mid.y, 20.0);
    assert!(c.is_animating(10.5));

    assert_eq!(c.sample(11.0), Style::default());
    assert!(!c.is_animating(11.0));
}

#[test]
fn flip_mid_transition_continues_from_current_style() {
    let mut c = AnimationController::new(Variants::fade_up(40.0), linear(1.0));
    c.set(VariantName::Visible, 0.0);
    c.set(VariantName::Hidden, 0.25);
    // No jump at the moment of the flip.
    assert_eq!(c.sample(0.25).opacity, 0.25);
    assert_eq!(c.sample(0.75).opacity, 0.125);
    assert_eq!(c.sample(1.25).opacity, 0.0);
}

#[test]
fn stagger_delay_postpones_start() {
    let mut c =
        AnimationController::new(Variants::fade_up(40.0), linear(1.0).with_delay(0.1)).with_delay(0.2);
    assert!((c.delay() - 0.3).abs() < 1e-12);
    c.set(VariantName::Visible, 0.0);
    assert_eq!(c.sample(0.3).opacity, 0.0);
    assert!((c.sample(0.8).opacity - 0.5).abs() < 1e-12);
}

#[test]
fn hover_blends_patch_over_base() {
    let patch = StylePatch {
        scale: Some(1.1),
        ..StylePatch::default()
    };
    let mut h = HoverController::new(patch, linear(0.2));
    let base = Style {
        rotate: 5.0,
        ..Style::default()
    };
    assert_eq!(h.apply(base, 0.0), base);

    assert!(h.set_hovered(true, 1.0));
    assert!(h.is_hovered());
    let mid = h.apply(base, 1.1);
    assert!((mid.scale - 1.05).abs() < 1e-12);
    assert_eq!(mid.rotate, 5.0);
    assert!((h.apply(base, 2.0).scale - 1.1).abs() < 1e-12);

    h.set_hovered(false, 2.0);
    assert_eq!(h.apply(base, 3.0), base);
}

#[test]
fn variant_names_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&VariantName::Visible).unwrap(),
        r#""visible""#
    );
    assert_eq!(VariantName::default(), VariantName::Hidden);
}
