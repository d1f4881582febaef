//! Width-fill animation for skill bars.

use crate::constants::{PROGRESS_MAX_LEVEL, PROGRESS_START_DELAY, PROGRESS_STEPS, PROGRESS_TICK};
use crate::engine::{Effect, EffectState};
use crate::timers::{TimerId, TimerRegistry};
use crate::visual::{percent, ElementId, VisualOp, Watcher};
use fnv::FnvHashMap;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ProgressParams {
    pub steps: u32,
    pub tick: Duration,
    /// Wait after visibility so the fill runs after the item's reveal.
    pub start_delay: Duration,
}

impl Default for ProgressParams {
    fn default() -> Self {
        Self {
            steps: PROGRESS_STEPS,
            tick: PROGRESS_TICK,
            start_delay: PROGRESS_START_DELAY,
        }
    }
}

/// Parse a `data-level` attribute; values above 100 are clamped.
pub fn parse_level(raw: &str) -> Option<u32> {
    let level = raw.trim().trim_end_matches('%').trim().parse::<u32>().ok()?;
    Some(level.min(PROGRESS_MAX_LEVEL))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProgressTimer {
    Start(ElementId),
    Tick(ElementId),
}

#[derive(Clone, Debug)]
struct Bar {
    bar: ElementId,
    level: u32,
    width: f64,
    ticks: u32,
    state: EffectState,
    timer: Option<TimerId>,
}

/// Fills bars once their skill item becomes visible. Keyed by the observed
/// item; the width is written to the nested bar element.
pub struct ProgressAnimator {
    params: ProgressParams,
    bars: FnvHashMap<ElementId, Bar>,
    timers: TimerRegistry<ProgressTimer>,
    torn_down: bool,
}

impl ProgressAnimator {
    pub fn new(params: ProgressParams) -> Self {
        Self {
            params,
            bars: FnvHashMap::default(),
            timers: TimerRegistry::new(),
            torn_down: false,
        }
    }

    /// Track `item` whose fill element is `bar`. The bar is reset to 0%.
    /// Returns false for an unparseable level.
    pub fn register(
        &mut self,
        item: ElementId,
        bar: ElementId,
        level: &str,
        out: &mut Vec<VisualOp>,
    ) -> bool {
        if self.torn_down {
            return false;
        }
        let Some(level) = parse_level(level) else {
            log::debug!("[effects] skill {:?} has invalid level {:?}", item, level);
            return false;
        };
        if self.bars.contains_key(&item) {
            return true;
        }
        self.bars.insert(
            item,
            Bar {
                bar,
                level,
                width: 0.0,
                ticks: 0,
                state: EffectState::Pending,
                timer: None,
            },
        );
        out.push(VisualOp::set_style(bar, "width", percent(0.0)));
        true
    }

    pub fn state(&self, item: ElementId) -> Option<EffectState> {
        self.bars.get(&item).map(|b| b.state)
    }

    pub fn width(&self, item: ElementId) -> Option<f64> {
        self.bars.get(&item).map(|b| b.width)
    }

    pub fn ticks(&self, item: ElementId) -> Option<u32> {
        self.bars.get(&item).map(|b| b.ticks)
    }

    pub fn on_intersection(
        &mut self,
        item: ElementId,
        intersecting: bool,
        now: Duration,
        out: &mut Vec<VisualOp>,
    ) {
        if self.torn_down || !intersecting {
            return;
        }
        let Some(bar) = self.bars.get_mut(&item) else {
            return;
        };
        if !bar.state.advance_to(EffectState::Active) {
            return;
        }
        out.push(VisualOp::Unobserve {
            id: item,
            watcher: Watcher::Progress,
        });
        bar.timer = Some(
            self.timers
                .schedule_once(now + self.params.start_delay, ProgressTimer::Start(item)),
        );
    }

    fn step(&mut self, item: ElementId, out: &mut Vec<VisualOp>) {
        let steps = self.params.steps.max(1);
        let Some(bar) = self.bars.get_mut(&item) else {
            return;
        };
        let target = bar.level as f64;
        bar.ticks += 1;
        bar.width = target * bar.ticks as f64 / steps as f64;
        if bar.width >= target || bar.ticks >= steps {
            bar.width = target;
            bar.state.advance_to(EffectState::Done);
            if let Some(timer) = bar.timer.take() {
                self.timers.cancel(timer);
            }
        }
        out.push(VisualOp::set_style(bar.bar, "width", percent(bar.width)));
    }
}

impl Effect for ProgressAnimator {
    fn advance(&mut self, now: Duration, out: &mut Vec<VisualOp>) {
        while let Some(fired) = self.timers.pop_due(now) {
            match fired.kind {
                ProgressTimer::Start(item) => {
                    let tick = self.params.tick;
                    let timer = self
                        .timers
                        .schedule_every(fired.due + tick, tick, ProgressTimer::Tick(item));
                    if let Some(bar) = self.bars.get_mut(&item) {
                        bar.timer = Some(timer);
                    }
                }
                ProgressTimer::Tick(item) => self.step(item, out),
            }
        }
    }

    fn teardown(&mut self, _out: &mut Vec<VisualOp>) {
        self.timers.cancel_all();
        for bar in self.bars.values_mut() {
            bar.timer = None;
        }
        self.torn_down = true;
    }

    fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
