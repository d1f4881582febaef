//! Count-up animation for stat numbers.
//!
//! Each counter runs a fixed number of steps regardless of its target, so a
//! larger number simply climbs faster.

use crate::constants::{COUNTER_STEPS, COUNTER_TICK};
use crate::engine::{Effect, EffectState};
use crate::timers::{TimerId, TimerRegistry};
use crate::visual::{ElementId, VisualOp, Watcher};
use fnv::FnvHashMap;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct CounterParams {
    pub steps: u32,
    pub tick: Duration,
}

impl Default for CounterParams {
    fn default() -> Self {
        Self {
            steps: COUNTER_STEPS,
            tick: COUNTER_TICK,
        }
    }
}

/// Parsed form of a displayed stat like `150+`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterText {
    pub target: u64,
    pub plus_suffix: bool,
}

/// Digits are concatenated (`"1,500"` is 1500); text without digits
/// yields `None`.
pub fn parse_counter_text(text: &str) -> Option<CounterText> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let target = digits.parse::<u64>().ok()?;
    Some(CounterText {
        target,
        plus_suffix: text.contains('+'),
    })
}

pub fn format_counter(value: u64, plus_suffix: bool) -> String {
    if plus_suffix {
        format!("{value}+")
    } else {
        value.to_string()
    }
}

#[derive(Clone, Debug)]
struct Counter {
    text: CounterText,
    ticks: u32,
    current: f64,
    state: EffectState,
    timer: Option<TimerId>,
}

pub struct CounterAnimator {
    params: CounterParams,
    counters: FnvHashMap<ElementId, Counter>,
    timers: TimerRegistry<ElementId>,
    torn_down: bool,
}

impl CounterAnimator {
    pub fn new(params: CounterParams) -> Self {
        Self {
            params,
            counters: FnvHashMap::default(),
            timers: TimerRegistry::new(),
            torn_down: false,
        }
    }

    /// Returns false when `text` has no number to count to.
    pub fn register(&mut self, id: ElementId, text: &str) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(parsed) = parse_counter_text(text) else {
            log::debug!("[effects] counter {:?} has no digits: {:?}", id, text);
            return false;
        };
        self.counters.entry(id).or_insert(Counter {
            text: parsed,
            ticks: 0,
            current: 0.0,
            state: EffectState::Pending,
            timer: None,
        });
        true
    }

    pub fn state(&self, id: ElementId) -> Option<EffectState> {
        self.counters.get(&id).map(|c| c.state)
    }

    /// Current displayed value (before the suffix).
    pub fn value(&self, id: ElementId) -> Option<u64> {
        self.counters.get(&id).map(|c| c.current.floor() as u64)
    }

    /// First visible intersection starts the count and detaches the watcher.
    pub fn on_intersection(
        &mut self,
        id: ElementId,
        intersecting: bool,
        now: Duration,
        out: &mut Vec<VisualOp>,
    ) {
        if self.torn_down || !intersecting {
            return;
        }
        let Some(counter) = self.counters.get_mut(&id) else {
            return;
        };
        if !counter.state.advance_to(EffectState::Active) {
            return;
        }
        out.push(VisualOp::Unobserve {
            id,
            watcher: Watcher::Counter,
        });
        let tick = self.params.tick;
        counter.timer = Some(self.timers.schedule_every(now + tick, tick, id));
    }

    fn step(&mut self, id: ElementId, out: &mut Vec<VisualOp>) {
        let steps = self.params.steps.max(1);
        let Some(counter) = self.counters.get_mut(&id) else {
            return;
        };
        let target = counter.text.target as f64;
        counter.ticks += 1;
        counter.current = target * counter.ticks as f64 / steps as f64;
        if counter.current >= target || counter.ticks >= steps {
            counter.current = target;
            counter.state.advance_to(EffectState::Done);
            if let Some(timer) = counter.timer.take() {
                self.timers.cancel(timer);
            }
        }
        out.push(VisualOp::set_text(
            id,
            format_counter(counter.current.floor() as u64, counter.text.plus_suffix),
        ));
    }
}

impl Effect for CounterAnimator {
    fn advance(&mut self, now: Duration, out: &mut Vec<VisualOp>) {
        while let Some(fired) = self.timers.pop_due(now) {
            self.step(fired.kind, out);
        }
    }

    fn teardown(&mut self, _out: &mut Vec<VisualOp>) {
        self.timers.cancel_all();
        for counter in self.counters.values_mut() {
            counter.timer = None;
        }
        self.torn_down = true;
    }

    fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
