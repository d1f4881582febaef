// Host-side tests for the effect host: gating, the full lifecycle and
// teardown.

use portfolio_core::ambient::{CLASS_GLYPH_COLUMN, CLASS_GLYPH_LAYER, CLASS_PARTICLE, CLASS_PARTICLE_LAYER};
use portfolio_core::cursor::{CLASS_CURSOR, CLASS_FOLLOWER};
use portfolio_core::reveal::{CLASS_PENDING, CLASS_REVEALED};
use portfolio_core::{
    detect, EffectState, EffectsHost, ElementId, FixedProbe, Page, RevealTarget, SkillBar,
    VisualOp, Watcher,
};
use smallvec::smallvec;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn page() -> Page {
    Page {
        reveal: vec![RevealTarget {
            id: ElementId(1),
            children: smallvec![ElementId(2), ElementId(3)],
        }],
        counters: vec![
            (ElementId(4), "150".to_string()),
            (ElementId(11), "N/A".to_string()),
        ],
        skills: vec![SkillBar {
            item: ElementId(5),
            bar: ElementId(6),
            level: "80".to_string(),
        }],
        glitch_text: vec![ElementId(7)],
        glitch_pool: vec![ElementId(8)],
        parallax: vec![ElementId(9)],
        title: Some((ElementId(10), "Ada".to_string())),
        scroll_y: 0.0,
    }
}

fn spawn_classes(ops: &[VisualOp]) -> Vec<&'static str> {
    ops.iter()
        .filter_map(|op| match op {
            VisualOp::Spawn { class, .. } => Some(*class),
            _ => None,
        })
        .collect()
}

#[test]
fn empty_page_starts_with_nothing_to_observe() {
    let mut host = EffectsHost::new(detect(&FixedProbe::default()), 4);
    let mut out = Vec::new();
    let observed = host.start(&Page::default(), ms(0), &mut out);
    assert!(observed.reveal.is_empty());
    assert!(observed.counters.is_empty());
    assert!(observed.progress.is_empty());
    let target = RevealTarget {
        id: ElementId(0),
        children: smallvec![],
    };
    assert!(target.clone().children.is_empty());
}

#[test]
fn reduced_motion_never_spawns_ambient_layers() {
    let caps = detect(&FixedProbe {
        reduced_motion: true,
        ..FixedProbe::default()
    });
    let mut host = EffectsHost::new(caps, 99);
    assert!(host.particles().is_none());
    assert!(host.glyphs().is_none());

    let mut out = Vec::new();
    host.start(&page(), ms(0), &mut out);
    for t in (0..=120_000).step_by(250) {
        host.advance(ms(t), &mut out);
    }
    let classes = spawn_classes(&out);
    for forbidden in [CLASS_PARTICLE_LAYER, CLASS_PARTICLE, CLASS_GLYPH_LAYER, CLASS_GLYPH_COLUMN] {
        assert!(!classes.contains(&forbidden), "{forbidden} was spawned");
    }
}

#[test]
fn mobile_host_has_no_cursor_or_parallax() {
    let caps = detect(&FixedProbe {
        viewport_width: 390.0,
        ..FixedProbe::default()
    });
    let mut host = EffectsHost::new(caps, 1);
    assert!(host.cursor().is_none());
    assert!(host.particles().is_some());
    let mut out = Vec::new();
    host.start(&page(), ms(0), &mut out);
    out.clear();
    host.pointer_move(10.0, 10.0, ms(50), &mut out);
    host.interactive_hover(true, &mut out);
    assert!(out.is_empty());
}

#[test]
fn start_registers_the_page_once() {
    let mut host = EffectsHost::new(detect(&FixedProbe::default()), 7);
    let mut out = Vec::new();
    let observed = host.start(&page(), ms(0), &mut out);
    assert_eq!(observed.reveal, vec![ElementId(1)]);
    assert_eq!(observed.counters, vec![ElementId(4)]);
    assert_eq!(observed.progress, vec![ElementId(5)]);

    assert!(out.contains(&VisualOp::add_class(ElementId(1), CLASS_PENDING)));
    assert!(out.contains(&VisualOp::set_style(ElementId(6), "width", "0%".to_string())));
    let classes = spawn_classes(&out);
    for expected in [CLASS_PARTICLE_LAYER, CLASS_GLYPH_LAYER, CLASS_CURSOR, CLASS_FOLLOWER] {
        assert!(classes.contains(&expected), "{expected} missing");
    }
    assert!(host.pending_timers() > 0);

    out.clear();
    let again = host.start(&page(), ms(10), &mut out);
    assert!(again.reveal.is_empty());
    assert!(out.is_empty());
}

#[test]
fn intersections_drive_reveal_counters_and_progress() {
    let mut host = EffectsHost::new(detect(&FixedProbe::default()), 3);
    let mut out = Vec::new();
    host.start(&page(), ms(0), &mut out);
    out.clear();

    host.intersection(Watcher::Reveal, ElementId(1), true, ms(0), &mut out);
    host.intersection(Watcher::Counter, ElementId(4), true, ms(0), &mut out);
    host.intersection(Watcher::Progress, ElementId(5), true, ms(0), &mut out);
    assert!(out.contains(&VisualOp::add_class(ElementId(1), CLASS_REVEALED)));
    assert!(out.contains(&VisualOp::Unobserve {
        id: ElementId(4),
        watcher: Watcher::Counter
    }));
    assert!(out.contains(&VisualOp::Unobserve {
        id: ElementId(5),
        watcher: Watcher::Progress
    }));

    for t in (16..=3_000).step_by(16) {
        host.advance(ms(t), &mut out);
    }
    assert!(out.contains(&VisualOp::add_class(ElementId(3), CLASS_REVEALED)));
    assert_eq!(host.reveal().state(ElementId(1)), Some(EffectState::Done));
    assert_eq!(host.counters().value(ElementId(4)), Some(150));
    assert_eq!(host.counters().state(ElementId(4)), Some(EffectState::Done));
    assert_eq!(host.progress().width(ElementId(5)), Some(80.0));
    assert!(out.contains(&VisualOp::set_text(ElementId(10), "Ada".to_string())));
    assert!(host.typewriter().is_some_and(|t| t.is_done()));
}

#[test]
fn scroll_moves_parallax_elements() {
    let mut host = EffectsHost::new(detect(&FixedProbe::default()), 5);
    let mut out = Vec::new();
    host.start(&page(), ms(0), &mut out);
    out.clear();
    host.scroll(200.0, ms(20), &mut out);
    assert!(out.contains(&VisualOp::set_style(
        ElementId(9),
        "transform",
        "translateY(-20px)".to_string()
    )));
}

#[test]
fn teardown_cancels_everything_and_goes_inert() {
    let mut host = EffectsHost::new(detect(&FixedProbe::default()), 8);
    let mut out = Vec::new();
    host.start(&page(), ms(0), &mut out);
    host.card_hover(ElementId(8), 300.0, 200.0, ms(5), &mut out);
    host.advance(ms(500), &mut out);
    out.clear();

    host.teardown(&mut out);
    assert!(host.is_torn_down());
    assert_eq!(host.pending_timers(), 0);
    let despawns = out
        .iter()
        .filter(|op| matches!(op, VisualOp::Despawn { .. }))
        .count();
    // particle layer, glyph layer, two cursors and the live ripple
    assert_eq!(despawns, 5);

    out.clear();
    host.advance(ms(60_000), &mut out);
    host.intersection(Watcher::Reveal, ElementId(1), true, ms(60_000), &mut out);
    host.pointer_move(1.0, 2.0, ms(60_000), &mut out);
    host.scroll(900.0, ms(60_000), &mut out);
    host.nav_hover(ElementId(12), "Home", ms(60_000), &mut out);
    host.button_click(ElementId(13), 1.0, 1.0, ms(60_000), &mut out);
    host.teardown(&mut out);
    assert!(out.is_empty());
}

#[test]
fn a_fresh_host_restarts_the_same_page() {
    let caps = detect(&FixedProbe::default());
    let mut out = Vec::new();
    let mut first = EffectsHost::new(caps, 1);
    first.start(&page(), ms(0), &mut out);
    first.teardown(&mut out);

    out.clear();
    let mut second = EffectsHost::new(caps, 2);
    let observed = second.start(&page(), ms(30_000), &mut out);
    assert_eq!(observed.reveal, vec![ElementId(1)]);
    assert!(second.pending_timers() > 0);
    assert_eq!(second.capabilities(), caps);
}
