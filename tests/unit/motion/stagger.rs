use super::*;

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
    }
}

#[test]
fn delay_is_parent_delay_plus_index_times_increment() {
    let s = Stagger::new(0.2, 0.15);
    for i in 0..50usize {
        assert_eq!(s.delay_for(i, 50), 0.2 + i as f64 * 0.15);
    }
}

#[test]
fn reverse_counts_from_the_end() {
    let s = Stagger::new(0.5, 1.0).reversed();
    assert_eq!(s.schedule(3), vec![2.5, 1.5, 0.5]);
    assert_eq!(s.delay_for(0, 0), 0.5);
}

#[test]
fn zero_increment_starts_all_together() {
    assert_eq!(Stagger::new(0.3, 0.0).schedule(4), vec![0.3; 4]);
    assert!(Stagger::default().schedule(0).is_empty());
}

#[test]
fn background_orb_series() {
    assert_eq!(linear_series(3.0, 0.5, 5), vec![3.0, 3.5, 4.0, 4.5, 5.0]);
    assert_close(&linear_series(0.0, 0.3, 5), &[0.0, 0.3, 0.6, 0.9, 1.2]);
}

#[test]
fn validate_rejects_negative_or_non_finite() {
    assert!(Stagger::new(-0.1, 0.1).validate().is_err());
    assert!(Stagger::new(0.0, f64::INFINITY).validate().is_err());
    assert!(Stagger::new(0.0, 0.1).validate().is_ok());
}

#[test]
fn deserializes_with_defaults() {
    let s: Stagger = serde_json::from_str(r#"{"stagger_children":0.1}"#).unwrap();
    assert_eq!(s, Stagger::new(0.0, 0.1));
    let s: Stagger = serde_json::from_str(r#"{"direction":"reverse"}"#).unwrap();
    assert_eq!(s.direction, StaggerDirection::Reverse);
}
