// Host-side tests for stat counters and skill bars.

use portfolio_core::counter::{format_counter, parse_counter_text, CounterAnimator, CounterParams};
use portfolio_core::engine::{Effect, EffectState};
use portfolio_core::progress::{parse_level, ProgressAnimator, ProgressParams};
use portfolio_core::visual::{ElementId, Node, VisualOp, Watcher};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn texts(ops: &[VisualOp]) -> Vec<String> {
    ops.iter()
        .filter_map(|op| match op {
            VisualOp::SetText { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn widths(ops: &[VisualOp]) -> Vec<String> {
    ops.iter()
        .filter_map(|op| match op {
            VisualOp::SetStyle {
                property: "width",
                value,
                ..
            } => Some(value.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn parse_counter_text_strips_non_digits_and_keeps_plus() {
    let parsed = parse_counter_text("150+").expect("digits");
    assert_eq!(parsed.target, 150);
    assert!(parsed.plus_suffix);
    assert_eq!(parse_counter_text("1,500").map(|c| c.target), Some(1500));
    assert!(parse_counter_text("∞").is_none());
    assert_eq!(format_counter(5, true), "5+");
    assert_eq!(format_counter(85, false), "85");
}

#[test]
fn counter_ends_exactly_on_target_with_suffix() {
    for (text, expected) in [("150", "150"), ("5+", "5+"), ("85", "85"), ("7", "7"), ("0", "0")] {
        let mut counters = CounterAnimator::new(CounterParams::default());
        let id = ElementId(1);
        assert!(counters.register(id, text));
        let mut out = Vec::new();
        counters.on_intersection(id, true, ms(0), &mut out);
        counters.advance(ms(10_000), &mut out);
        let shown = texts(&out);
        assert_eq!(shown.last().map(String::as_str), Some(expected), "{text}");
        let target = parse_counter_text(text).expect("digits").target;
        for t in &shown {
            let value: u64 = t.trim_end_matches('+').parse().expect("number");
            assert!(value <= target, "overshoot {value} > {target}");
        }
        assert_eq!(counters.state(id), Some(EffectState::Done));
        assert_eq!(counters.pending_timers(), 0);
    }
}

#[test]
fn counter_takes_100_ticks_of_20ms() {
    let mut counters = CounterAnimator::new(CounterParams::default());
    let id = ElementId(3);
    counters.register(id, "150");
    let mut out = Vec::new();
    counters.on_intersection(id, true, ms(0), &mut out);
    assert!(out.contains(&VisualOp::Unobserve {
        id,
        watcher: Watcher::Counter
    }));
    out.clear();
    counters.advance(ms(1_000), &mut out);
    assert_eq!(texts(&out).len(), 50);
    assert_eq!(counters.value(id), Some(75));
    counters.advance(ms(2_000), &mut out);
    assert_eq!(texts(&out).len(), 100);
    assert_eq!(counters.value(id), Some(150));
}

#[test]
fn counter_without_digits_is_not_registered() {
    let mut counters = CounterAnimator::new(CounterParams::default());
    assert!(!counters.register(ElementId(1), "n/a"));
    assert!(counters.state(ElementId(1)).is_none());
}

#[test]
fn second_intersection_does_not_restart_counter() {
    let mut counters = CounterAnimator::new(CounterParams::default());
    let id = ElementId(1);
    counters.register(id, "100");
    let mut out = Vec::new();
    counters.on_intersection(id, true, ms(0), &mut out);
    counters.advance(ms(400), &mut out);
    counters.on_intersection(id, true, ms(400), &mut out);
    assert_eq!(counters.pending_timers(), 1);
    assert_eq!(counters.value(id), Some(20));
}

#[test]
fn parse_level_accepts_percent_and_clamps() {
    assert_eq!(parse_level("90"), Some(90));
    assert_eq!(parse_level(" 75% "), Some(75));
    assert_eq!(parse_level("140"), Some(100));
    assert_eq!(parse_level("high"), None);
}

#[test]
fn progress_reaches_level_within_50_ticks_after_delay() {
    let mut bars = ProgressAnimator::new(ProgressParams::default());
    let (item, bar) = (ElementId(1), ElementId(2));
    let mut out = Vec::new();
    assert!(bars.register(item, bar, "90", &mut out));
    assert_eq!(
        out,
        vec![VisualOp::SetStyle {
            node: Node::Element(bar),
            property: "width",
            value: "0%".to_string()
        }]
    );
    out.clear();
    bars.on_intersection(item, true, ms(0), &mut out);
    assert!(out.contains(&VisualOp::Unobserve {
        id: item,
        watcher: Watcher::Progress
    }));
    out.clear();
    bars.advance(ms(299), &mut out);
    assert!(widths(&out).is_empty(), "nothing before the 300ms start delay");

    bars.advance(ms(300 + 30 * 50), &mut out);
    let w = widths(&out);
    assert_eq!(w.last().map(String::as_str), Some("90%"));
    assert!(bars.ticks(item).expect("registered") <= 50);
    assert_eq!(bars.width(item), Some(90.0));
    assert_eq!(bars.state(item), Some(EffectState::Done));
    assert_eq!(bars.pending_timers(), 0);
}

#[test]
fn progress_with_invalid_level_is_skipped() {
    let mut bars = ProgressAnimator::new(ProgressParams::default());
    let mut out = Vec::new();
    assert!(!bars.register(ElementId(1), ElementId(2), "", &mut out));
    assert!(out.is_empty());
}
