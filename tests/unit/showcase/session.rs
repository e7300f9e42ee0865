use super::*;

// Default layout in a 1000x800 viewport:
//   hero 0..800, features 800..1760 (grid 944..1408), progress 1760..2560,
//   gallery 2560..3760, closing 3760..4560.
fn session() -> ShowcaseSession {
    ShowcaseSession::mount(ShowcaseConfig::default(), 1000.0, 800.0).unwrap()
}

fn style(frame: &ShowcaseFrame, id: &str) -> Style {
    frame
        .elements
        .iter()
        .find(|e| e.id == id)
        .unwrap_or_else(|| panic!("missing element {id}"))
        .style
}

#[test]
fn mounts_at_top_with_everything_hidden() {
    let s = session();
    let f = s.frame();
    assert_eq!(f.page_progress, 0.0);
    assert!(!f.features_visible);
    assert_eq!(style(&f, "features.card.0").opacity, 0.0);
    assert_eq!(style(&f, "hero.title"), Style::default());
    assert_eq!(f.elements.len(), 20);
    assert_eq!(f.sections.len(), 5);
    assert_eq!(f.sections[1].progress, None);
}

#[test]
fn hero_parallax_follows_scroll() {
    let mut s = session();
    s.handle(HostEvent::Scroll { y: 400.0 }).unwrap();
    let f = s.frame();
    let title = style(&f, "hero.title");
    assert_eq!(title.scale, 1.2);
    assert_eq!(title.y, 150.0);
    assert_eq!(f.sections[0].progress, Some(0.5));

    // Orbs move with depth-scaled parallax; deeper orbs move further.
    let first = style(&f, "hero.orb.0").y;
    let last = style(&f, "hero.orb.4").y;
    assert!(first > 0.0 && last > first);
}

#[test]
fn feature_cards_reveal_in_stagger_order() {
    let mut s = session();
    s.handle(HostEvent::Scroll { y: 600.0 }).unwrap();
    assert!(s.features_visible().get());

    s.handle(HostEvent::Tick { time: 0.5 }).unwrap();
    let f = s.frame();
    let o: Vec<f64> = (0..6)
        .map(|i| style(&f, &format!("features.card.{i}")).opacity)
        .collect();
    assert!(o[0] > o[1] && o[1] > o[2], "{o:?}");
    assert_eq!(o[3], 0.0);
    assert!(!s.is_settled());

    s.handle(HostEvent::Tick { time: 5.0 }).unwrap();
    let f = s.frame();
    for i in 0..6 {
        assert_eq!(style(&f, &format!("features.card.{i}")), Style::default());
    }
    assert!(s.is_settled());
}

#[test]
fn fire_once_keeps_features_revealed() {
    let mut s = session();
    s.handle_all([
        HostEvent::Scroll { y: 600.0 },
        HostEvent::Tick { time: 5.0 },
        HostEvent::Scroll { y: 0.0 },
        HostEvent::Tick { time: 10.0 },
    ])
    .unwrap();
    let f = s.frame();
    assert!(f.features_visible);
    assert_eq!(style(&f, "features.card.5").opacity, 1.0);
}

#[test]
fn features_hide_again_without_once() {
    let mut cfg = ShowcaseConfig::default();
    cfg.features.in_view.once = false;
    let mut s = ShowcaseSession::mount(cfg, 1000.0, 800.0).unwrap();
    s.handle_all([
        HostEvent::Scroll { y: 600.0 },
        HostEvent::Tick { time: 5.0 },
        HostEvent::Scroll { y: 0.0 },
        HostEvent::Tick { time: 10.0 },
    ])
    .unwrap();
    let f = s.frame();
    assert!(!f.features_visible);
    assert_eq!(style(&f, "features.card.0").opacity, 0.0);
}

#[test]
fn progress_bars_track_page_and_section() {
    let mut s = session();
    // Page scrolls over 0..3760.
    s.handle(HostEvent::Scroll { y: 1880.0 }).unwrap();
    let f = s.frame();
    assert_eq!(style(&f, "progress.page_bar").scale_x, 0.5);
    // Progress section window runs 960..2560.
    assert_eq!(style(&f, "progress.section_bar").scale_x, 0.575);
    assert_eq!(s.page_progress().get(), 0.5);
}

#[test]
fn gallery_rotation_alternates_per_card() {
    let s = session();
    let f = s.frame();
    assert_eq!(style(&f, "gallery.card.0").rotate, -10.0);
    assert_eq!(style(&f, "gallery.card.1").rotate, 10.0);
}

#[test]
fn hover_lifts_gallery_card() {
    let mut s = session();
    s.handle_all([
        HostEvent::Tick { time: 1.0 },
        HostEvent::Hover {
            card: 2,
            hovered: true,
        },
        HostEvent::Tick { time: 2.0 },
    ])
    .unwrap();
    let f = s.frame();
    let card = style(&f, "gallery.card.2");
    assert!((card.scale - 1.05).abs() < 1e-12);
    assert!((card.y + 8.0).abs() < 1e-12);
    assert_eq!(style(&f, "gallery.card.1").scale, 1.0);
}

#[test]
fn hover_on_unknown_card_is_an_error() {
    let mut s = session();
    let err = s
        .handle(HostEvent::Hover {
            card: 99,
            hovered: true,
        })
        .unwrap_err();
    assert!(matches!(err, ScrollfxError::Evaluation(_)));
}

#[test]
fn closing_reveal_completes_at_page_end() {
    let mut s = session();
    s.handle(HostEvent::Scroll { y: 3760.0 }).unwrap();
    let f = s.frame();
    let panel = style(&f, "closing.panel");
    assert_eq!(panel.scale, 1.0);
    assert_eq!(panel.opacity, 1.0);
    assert_eq!(f.page_progress, 1.0);
}

#[test]
fn resize_relayouts_and_keeps_scroll() {
    let mut s = session();
    s.handle(HostEvent::Scroll { y: 300.0 }).unwrap();
    s.handle(HostEvent::Resize {
        width: 500.0,
        height: 400.0,
    })
    .unwrap();
    assert_eq!(s.viewport().scroll_y, 300.0);
    assert!((s.layout().content_height - 5.7 * 400.0).abs() < 1e-9);
    // Hero is now 400 tall, so scroll 300 is 75% through it.
    assert_eq!(s.section_progress(SectionKind::Hero).unwrap().get(), 0.75);
    assert!(s.handle(HostEvent::Resize { width: 0.0, height: 400.0 }).is_err());
}

#[test]
fn clock_never_runs_backwards() {
    let mut s = session();
    s.handle(HostEvent::Tick { time: 3.0 }).unwrap();
    s.handle(HostEvent::Tick { time: 1.0 }).unwrap();
    assert_eq!(s.time(), 3.0);
    assert!(s.handle(HostEvent::Tick { time: f64::NAN }).is_err());
    assert!(s.handle(HostEvent::Scroll { y: f64::INFINITY }).is_err());
}

#[test]
fn signals_notify_subscribers() {
    let mut s = session();
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = std::rc::Rc::clone(&seen);
    s.features_visible()
        .subscribe(move |v| sink.borrow_mut().push(*v));
    s.handle(HostEvent::Scroll { y: 200.0 }).unwrap();
    s.handle(HostEvent::Scroll { y: 600.0 }).unwrap();
    s.handle(HostEvent::Scroll { y: 700.0 }).unwrap();
    assert_eq!(*seen.borrow(), vec![true]);
}

#[test]
fn host_events_use_tagged_json() {
    let e: HostEvent = serde_json::from_str(r#"{"type":"scroll","y":120.0}"#).unwrap();
    assert_eq!(e, HostEvent::Scroll { y: 120.0 });
    let e: HostEvent =
        serde_json::from_str(r#"{"type":"hover","card":1,"hovered":false}"#).unwrap();
    assert_eq!(
        e,
        HostEvent::Hover {
            card: 1,
            hovered: false
        }
    );
}

#[test]
fn showcase_render_is_deterministic() {
    let showcase = Showcase::new();
    let a = showcase.render(Size::new(1000.0, 800.0), 900.0, 2.0).unwrap();
    let b = showcase.render(Size::new(1000.0, 800.0), 900.0, 2.0).unwrap();
    assert_eq!(a, b);
    assert!(a.features_visible);
    assert_eq!(a.time, 2.0);
}

#[test]
fn orb_timings_follow_series() {
    let s = session();
    let durations: Vec<f64> = s.orbs.iter().map(|o| o.float_y.transition().duration).collect();
    let delays: Vec<f64> = s.orbs.iter().map(|o| o.float_y.transition().delay).collect();
    assert_eq!(durations, vec![3.0, 3.5, 4.0, 4.5, 5.0]);
    for (i, d) in delays.iter().enumerate() {
        assert!((d - i as f64 * 0.3).abs() < 1e-12);
    }
}
