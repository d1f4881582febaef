// Host-side tests for glitch sessions, text corruption and ripples.

use portfolio_core::constants::GLITCH_CORRUPT_CHARSET;
use portfolio_core::engine::Effect;
use portfolio_core::glitch::{
    corrupt_text, GlitchEngine, GlitchKind, GlitchParams, GlitchPhase, CLASS_CLICK_RIPPLE,
    CLASS_HOVER_RIPPLE, CLASS_TEXT_GLITCH,
};
use portfolio_core::visual::{ElementId, Node, VisualOp};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn always() -> GlitchParams {
    GlitchParams {
        text_probability: 1.0,
        pool_probability: 1.0,
        corrupt_probability: 1.0,
        ..GlitchParams::default()
    }
}

fn never() -> GlitchParams {
    GlitchParams {
        text_probability: 0.0,
        pool_probability: 0.0,
        ..GlitchParams::default()
    }
}

fn has_class(ops: &[VisualOp], id: ElementId, class: &str, added: bool) -> bool {
    ops.iter().any(|op| match op {
        VisualOp::AddClass { node, class: c } if added => *node == Node::Element(id) && *c == class,
        VisualOp::RemoveClass { node, class: c } if !added => {
            *node == Node::Element(id) && *c == class
        }
        _ => false,
    })
}

#[test]
fn trigger_is_suppressed_while_active_and_reverts() {
    let mut glitch = GlitchEngine::new(never(), 1);
    let id = ElementId(4);
    let mut out = Vec::new();
    assert!(glitch.trigger(id, GlitchKind::Shake, ms(0), &mut out));
    assert_eq!(glitch.phase(id), GlitchPhase::Active(GlitchKind::Shake));
    assert!(!glitch.trigger(id, GlitchKind::Flicker, ms(100), &mut out));
    assert!(!has_class(&out, id, "glitch-flicker", true));

    out.clear();
    glitch.advance(ms(499), &mut out);
    assert!(out.is_empty());
    glitch.advance(ms(500), &mut out);
    assert!(has_class(&out, id, "glitch-shake", false));
    assert_eq!(glitch.phase(id), GlitchPhase::Quiescent);
    assert!(glitch.trigger(id, GlitchKind::Distort, ms(600), &mut out));
}

#[test]
fn text_check_fires_every_3s_and_lasts_300ms() {
    let mut glitch = GlitchEngine::new(always(), 2);
    let id = ElementId(1);
    glitch.register_text(id, ms(0));
    let mut out = Vec::new();
    glitch.advance(ms(2_999), &mut out);
    assert!(out.is_empty());
    glitch.advance(ms(3_000), &mut out);
    assert!(has_class(&out, id, CLASS_TEXT_GLITCH, true));
    out.clear();
    glitch.advance(ms(3_300), &mut out);
    assert!(has_class(&out, id, CLASS_TEXT_GLITCH, false));
}

#[test]
fn zero_probability_never_glitches() {
    let mut glitch = GlitchEngine::new(never(), 3);
    glitch.register_text(ElementId(1), ms(0));
    glitch.register_pool(ElementId(2), ms(0));
    let mut out = Vec::new();
    glitch.advance(ms(60_000), &mut out);
    assert!(out.is_empty());
    assert_eq!(glitch.pending_timers(), 2, "one text check plus one pool check");
}

#[test]
fn pool_check_applies_one_distortion_for_500ms() {
    let mut glitch = GlitchEngine::new(always(), 4);
    let pool = [ElementId(10), ElementId(11), ElementId(12)];
    for id in pool {
        glitch.register_pool(id, ms(0));
    }
    let mut out = Vec::new();
    glitch.advance(ms(5_000), &mut out);
    let added: Vec<_> = out
        .iter()
        .filter_map(|op| match op {
            VisualOp::AddClass { node, class } => Some((*node, *class)),
            _ => None,
        })
        .collect();
    assert_eq!(added.len(), 1);
    let (node, class) = added[0];
    assert!(pool.iter().any(|id| Node::Element(*id) == node));
    assert!(["glitch-shake", "glitch-flicker", "glitch-distort"].contains(&class));
    out.clear();
    glitch.advance(ms(5_500), &mut out);
    assert!(out
        .iter()
        .any(|op| matches!(op, VisualOp::RemoveClass { node: n, class: c } if *n == node && *c == class)));
}

#[test]
fn large_scroll_jump_glitches_text_once_per_throttle_window() {
    let mut glitch = GlitchEngine::new(never(), 5);
    let id = ElementId(1);
    glitch.register_text(id, ms(0));
    glitch.set_scroll_baseline(0.0);
    let mut out = Vec::new();
    glitch.on_scroll(10.0, ms(0), &mut out);
    assert!(out.is_empty(), "small delta");
    glitch.on_scroll(400.0, ms(50), &mut out);
    assert!(out.is_empty(), "inside the 100ms throttle window");
    glitch.on_scroll(200.0, ms(200), &mut out);
    assert!(has_class(&out, id, CLASS_TEXT_GLITCH, true));
}

#[test]
fn nav_hover_scrambles_then_restores_original_text() {
    let mut glitch = GlitchEngine::new(always(), 6);
    let id = ElementId(7);
    let mut out = Vec::new();
    assert!(glitch.on_nav_hover(id, "About", ms(0), &mut out));
    let VisualOp::SetText { text, .. } = out[0].clone() else {
        panic!("expected text op, got {:?}", out[0]);
    };
    assert_eq!(text.chars().count(), 5);
    assert!(text.chars().all(|c| GLITCH_CORRUPT_CHARSET.contains(c)));
    assert!(glitch.is_corrupted(id));

    // hovering again while scrambled must not capture the scrambled text
    assert!(!glitch.on_nav_hover(id, &text, ms(50), &mut out));

    out.clear();
    glitch.advance(ms(100), &mut out);
    assert_eq!(out, vec![VisualOp::set_text(id, "About".to_string())]);
    assert!(!glitch.is_corrupted(id));
}

#[test]
fn corrupt_text_with_zero_probability_is_identity() {
    let mut rng = StdRng::seed_from_u64(9);
    assert_eq!(corrupt_text("Services", 0.0, GLITCH_CORRUPT_CHARSET, &mut rng), "Services");
}

#[test]
fn click_ripple_is_placed_at_offset_and_removed_after_400ms() {
    let mut glitch = GlitchEngine::new(never(), 7);
    let button = ElementId(3);
    let mut out = Vec::new();
    glitch.on_button_click(button, 12.5, 8.0, ms(0), &mut out);
    let VisualOp::Spawn {
        id,
        parent,
        class,
        styles,
        ..
    } = &out[0]
    else {
        panic!("expected spawn");
    };
    assert_eq!(*parent, Some(Node::Element(button)));
    assert_eq!(*class, CLASS_CLICK_RIPPLE);
    assert_eq!(
        styles,
        &vec![("left", "12.5px".to_string()), ("top", "8px".to_string())]
    );
    let ripple = *id;
    assert_eq!(glitch.live_ripples(), 1);
    out.clear();
    glitch.advance(ms(400), &mut out);
    assert_eq!(out, vec![VisualOp::Despawn { id: ripple }]);
    assert_eq!(glitch.live_ripples(), 0);
}

#[test]
fn card_hover_ripple_is_centred_and_sized_to_larger_side() {
    let mut glitch = GlitchEngine::new(never(), 8);
    let mut out = Vec::new();
    glitch.on_card_hover(ElementId(2), 300.0, 200.0, ms(0), &mut out);
    let VisualOp::Spawn { class, styles, .. } = &out[0] else {
        panic!("expected spawn");
    };
    assert_eq!(*class, CLASS_HOVER_RIPPLE);
    assert_eq!(
        styles,
        &vec![
            ("width", "300px".to_string()),
            ("height", "300px".to_string()),
            ("left", "0px".to_string()),
            ("top", "-50px".to_string()),
        ]
    );
    out.clear();
    glitch.advance(ms(599), &mut out);
    assert!(out.is_empty());
    glitch.advance(ms(600), &mut out);
    assert_eq!(out.len(), 1);
}

#[test]
fn teardown_restores_everything_and_goes_inert() {
    let mut glitch = GlitchEngine::new(always(), 9);
    let (text, link) = (ElementId(1), ElementId(2));
    glitch.register_text(text, ms(0));
    let mut out = Vec::new();
    glitch.trigger(text, GlitchKind::Text, ms(0), &mut out);
    glitch.on_nav_hover(link, "Home", ms(0), &mut out);
    glitch.on_button_click(ElementId(3), 1.0, 1.0, ms(0), &mut out);

    out.clear();
    glitch.teardown(&mut out);
    assert!(has_class(&out, text, CLASS_TEXT_GLITCH, false));
    assert!(out.contains(&VisualOp::set_text(link, "Home".to_string())));
    assert!(out.iter().any(|op| matches!(op, VisualOp::Despawn { .. })));
    assert_eq!(glitch.pending_timers(), 0);
    assert_eq!(glitch.live_ripples(), 0);

    out.clear();
    assert!(!glitch.trigger(text, GlitchKind::Shake, ms(10), &mut out));
    glitch.on_button_click(ElementId(3), 1.0, 1.0, ms(10), &mut out);
    glitch.advance(ms(60_000), &mut out);
    assert!(out.is_empty());
}
