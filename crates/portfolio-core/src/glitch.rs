//! Short, self-reverting glitch effects.
//!
//! Every element has at most one glitch session at a time: a trigger that
//! lands while the element is already glitching (or while its text is
//! corrupted) is dropped instead of stacking classes or capturing the
//! corrupted text as the "original".

use crate::constants::*;
use crate::engine::Effect;
use crate::timers::{Throttle, TimerRegistry};
use crate::visual::{px, ElementId, Node, SpawnId, SpawnIds, VisualOp};
use fnv::FnvHashMap;
use rand::prelude::*;
use std::time::Duration;

pub const CLASS_TEXT_GLITCH: &str = "glitch-active";
pub const CLASS_CLICK_RIPPLE: &str = "click-glitch";
pub const CLASS_HOVER_RIPPLE: &str = "glitch-ripple";

/// Distortion styles for the random pool glitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlitchKind {
    Text,
    Shake,
    Flicker,
    Distort,
}

impl GlitchKind {
    pub const DISTORTIONS: [GlitchKind; 3] =
        [GlitchKind::Shake, GlitchKind::Flicker, GlitchKind::Distort];

    pub fn class(self) -> &'static str {
        match self {
            GlitchKind::Text => CLASS_TEXT_GLITCH,
            GlitchKind::Shake => "glitch-shake",
            GlitchKind::Flicker => "glitch-flicker",
            GlitchKind::Distort => "glitch-distort",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GlitchPhase {
    #[default]
    Quiescent,
    Active(GlitchKind),
}

#[derive(Clone, Debug)]
pub struct GlitchParams {
    pub text_interval: Duration,
    pub text_probability: f64,
    pub text_duration: Duration,
    pub pool_interval: Duration,
    pub pool_probability: f64,
    pub distort_duration: Duration,
    pub scroll_throttle: Duration,
    pub scroll_delta_px: f64,
    pub corrupt_probability: f64,
    pub corrupt_duration: Duration,
    pub corrupt_charset: &'static str,
    pub click_ripple_duration: Duration,
    pub hover_ripple_duration: Duration,
}

impl Default for GlitchParams {
    fn default() -> Self {
        Self {
            text_interval: GLITCH_TEXT_INTERVAL,
            text_probability: GLITCH_TEXT_PROBABILITY,
            text_duration: GLITCH_TEXT_DURATION,
            pool_interval: GLITCH_POOL_INTERVAL,
            pool_probability: GLITCH_POOL_PROBABILITY,
            distort_duration: GLITCH_DISTORT_DURATION,
            scroll_throttle: GLITCH_SCROLL_THROTTLE,
            scroll_delta_px: GLITCH_SCROLL_DELTA_PX,
            corrupt_probability: GLITCH_CORRUPT_PROBABILITY,
            corrupt_duration: GLITCH_CORRUPT_DURATION,
            corrupt_charset: GLITCH_CORRUPT_CHARSET,
            click_ripple_duration: GLITCH_CLICK_RIPPLE_DURATION,
            hover_ripple_duration: GLITCH_HOVER_RIPPLE_DURATION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GlitchTimer {
    TextCheck(ElementId),
    PoolCheck,
    Revert(ElementId),
    RestoreText(ElementId),
    RemoveRipple(SpawnId),
}

/// Replace each character with a random one from `charset` with
/// probability `p`.
pub fn corrupt_text<R: Rng>(text: &str, p: f64, charset: &str, rng: &mut R) -> String {
    let glyphs: Vec<char> = charset.chars().collect();
    text.chars()
        .map(|c| {
            if rng.gen_bool(p.clamp(0.0, 1.0)) {
                glyphs.choose(rng).copied().unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

pub struct GlitchEngine {
    params: GlitchParams,
    rng: StdRng,
    ids: SpawnIds,
    timers: TimerRegistry<GlitchTimer>,
    phases: FnvHashMap<ElementId, GlitchPhase>,
    text_elements: Vec<ElementId>,
    pool: Vec<ElementId>,
    corrupted: FnvHashMap<ElementId, String>,
    ripples: Vec<SpawnId>,
    scroll_throttle: Throttle,
    last_scroll_y: Option<f64>,
    pool_armed: bool,
    torn_down: bool,
}

impl GlitchEngine {
    pub fn new(params: GlitchParams, seed: u64) -> Self {
        let scroll_throttle = Throttle::new(params.scroll_throttle);
        Self {
            params,
            rng: StdRng::seed_from_u64(seed),
            ids: SpawnIds::new(4),
            timers: TimerRegistry::new(),
            phases: FnvHashMap::default(),
            text_elements: Vec::new(),
            pool: Vec::new(),
            corrupted: FnvHashMap::default(),
            ripples: Vec::new(),
            scroll_throttle,
            last_scroll_y: None,
            pool_armed: false,
            torn_down: false,
        }
    }

    /// Register a glitch-text element and arm its periodic check.
    pub fn register_text(&mut self, id: ElementId, now: Duration) {
        if self.torn_down || self.text_elements.contains(&id) {
            return;
        }
        self.text_elements.push(id);
        let interval = self.params.text_interval;
        self.timers
            .schedule_every(now + interval, interval, GlitchTimer::TextCheck(id));
    }

    /// Add an element to the random-distortion pool. The pool check is armed
    /// by the first registration.
    pub fn register_pool(&mut self, id: ElementId, now: Duration) {
        if self.torn_down || self.pool.contains(&id) {
            return;
        }
        self.pool.push(id);
        if !self.pool_armed {
            let interval = self.params.pool_interval;
            self.timers
                .schedule_every(now + interval, interval, GlitchTimer::PoolCheck);
            self.pool_armed = true;
        }
    }

    pub fn phase(&self, id: ElementId) -> GlitchPhase {
        self.phases.get(&id).copied().unwrap_or_default()
    }

    pub fn is_corrupted(&self, id: ElementId) -> bool {
        self.corrupted.contains_key(&id)
    }

    pub fn live_ripples(&self) -> usize {
        self.ripples.len()
    }

    /// Start a class glitch on `id` unless one is already running.
    /// Returns whether a session started.
    pub fn trigger(
        &mut self,
        id: ElementId,
        kind: GlitchKind,
        now: Duration,
        out: &mut Vec<VisualOp>,
    ) -> bool {
        if self.torn_down {
            return false;
        }
        let phase = self.phases.entry(id).or_default();
        if *phase != GlitchPhase::Quiescent {
            return false;
        }
        *phase = GlitchPhase::Active(kind);
        out.push(VisualOp::add_class(id, kind.class()));
        let duration = match kind {
            GlitchKind::Text => self.params.text_duration,
            _ => self.params.distort_duration,
        };
        self.timers
            .schedule_once(now + duration, GlitchTimer::Revert(id));
        true
    }

    /// Scroll position the first sample is compared against.
    pub fn set_scroll_baseline(&mut self, scroll_y: f64) {
        self.last_scroll_y = Some(scroll_y);
    }

    /// Throttled scroll sample; a large jump glitches a random text element.
    pub fn on_scroll(&mut self, scroll_y: f64, now: Duration, out: &mut Vec<VisualOp>) {
        if self.torn_down || !self.scroll_throttle.ready(now) {
            return;
        }
        let last = self.last_scroll_y.replace(scroll_y).unwrap_or(scroll_y);
        if (scroll_y - last).abs() > self.params.scroll_delta_px {
            if let Some(&id) = self.text_elements.choose(&mut self.rng) {
                self.trigger(id, GlitchKind::Text, now, out);
            }
        }
    }

    /// Scramble a nav link's text briefly. `text` is what the link shows now.
    pub fn on_nav_hover(
        &mut self,
        id: ElementId,
        text: &str,
        now: Duration,
        out: &mut Vec<VisualOp>,
    ) -> bool {
        if self.torn_down || self.corrupted.contains_key(&id) {
            return false;
        }
        let scrambled = corrupt_text(
            text,
            self.params.corrupt_probability,
            self.params.corrupt_charset,
            &mut self.rng,
        );
        self.corrupted.insert(id, text.to_string());
        out.push(VisualOp::set_text(id, scrambled));
        self.timers.schedule_once(
            now + self.params.corrupt_duration,
            GlitchTimer::RestoreText(id),
        );
        true
    }

    /// Ripple at (`x`, `y`), relative to the clicked button's box.
    pub fn on_button_click(
        &mut self,
        id: ElementId,
        x: f64,
        y: f64,
        now: Duration,
        out: &mut Vec<VisualOp>,
    ) {
        let styles = vec![("left", px(x)), ("top", px(y))];
        let ttl = self.params.click_ripple_duration;
        self.spawn_ripple(id, CLASS_CLICK_RIPPLE, styles, ttl, now, out);
    }

    /// Centred ripple covering a card of the given size.
    pub fn on_card_hover(
        &mut self,
        id: ElementId,
        width: f64,
        height: f64,
        now: Duration,
        out: &mut Vec<VisualOp>,
    ) {
        let size = width.max(height);
        let styles = vec![
            ("width", px(size)),
            ("height", px(size)),
            ("left", px(width / 2.0 - size / 2.0)),
            ("top", px(height / 2.0 - size / 2.0)),
        ];
        let ttl = self.params.hover_ripple_duration;
        self.spawn_ripple(id, CLASS_HOVER_RIPPLE, styles, ttl, now, out);
    }

    fn spawn_ripple(
        &mut self,
        parent: ElementId,
        class: &'static str,
        styles: Vec<(&'static str, String)>,
        ttl: Duration,
        now: Duration,
        out: &mut Vec<VisualOp>,
    ) {
        if self.torn_down {
            return;
        }
        let id = self.ids.next_id();
        out.push(VisualOp::Spawn {
            id,
            parent: Some(Node::Element(parent)),
            class,
            styles,
            html: None,
        });
        self.ripples.push(id);
        self.timers
            .schedule_once(now + ttl, GlitchTimer::RemoveRipple(id));
    }

    fn check_pool(&mut self, now: Duration, out: &mut Vec<VisualOp>) {
        if self.pool.is_empty() || !self.rng.gen_bool(self.params.pool_probability.clamp(0.0, 1.0))
        {
            return;
        }
        let Some(&id) = self.pool.choose(&mut self.rng) else {
            return;
        };
        let Some(&kind) = GlitchKind::DISTORTIONS.choose(&mut self.rng) else {
            return;
        };
        self.trigger(id, kind, now, out);
    }
}

impl Effect for GlitchEngine {
    fn advance(&mut self, now: Duration, out: &mut Vec<VisualOp>) {
        while let Some(fired) = self.timers.pop_due(now) {
            match fired.kind {
                GlitchTimer::TextCheck(id) => {
                    let p = self.params.text_probability.clamp(0.0, 1.0);
                    if self.rng.gen_bool(p) {
                        self.trigger(id, GlitchKind::Text, fired.due, out);
                    }
                }
                GlitchTimer::PoolCheck => self.check_pool(fired.due, out),
                GlitchTimer::Revert(id) => {
                    let previous = self.phases.insert(id, GlitchPhase::Quiescent);
                    if let Some(GlitchPhase::Active(kind)) = previous {
                        out.push(VisualOp::remove_class(id, kind.class()));
                    }
                }
                GlitchTimer::RestoreText(id) => {
                    if let Some(original) = self.corrupted.remove(&id) {
                        out.push(VisualOp::set_text(id, original));
                    }
                }
                GlitchTimer::RemoveRipple(id) => {
                    self.ripples.retain(|r| *r != id);
                    out.push(VisualOp::Despawn { id });
                }
            }
        }
    }

    fn teardown(&mut self, out: &mut Vec<VisualOp>) {
        self.timers.cancel_all();
        // leave every element in its resting state
        for (id, phase) in self.phases.drain() {
            if let GlitchPhase::Active(kind) = phase {
                out.push(VisualOp::remove_class(id, kind.class()));
            }
        }
        for (id, original) in self.corrupted.drain() {
            out.push(VisualOp::set_text(id, original));
        }
        for id in self.ripples.drain(..) {
            out.push(VisualOp::Despawn { id });
        }
        self.torn_down = true;
    }

    fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
