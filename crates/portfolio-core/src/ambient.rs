//! Decorative background effects: drifting particles and the glyph rain.

use crate::constants::*;
use crate::engine::Effect;
use crate::timers::TimerRegistry;
use crate::visual::{percent, seconds, Node, SpawnId, SpawnIds, VisualOp};
use fnv::FnvHashMap;
use rand::prelude::*;
use std::ops::Range;
use std::time::Duration;

pub const CLASS_PARTICLE_LAYER: &str = "particle-system";
pub const CLASS_PARTICLE: &str = "particle";
pub const CLASS_GLYPH_LAYER: &str = "matrix-bg";
pub const CLASS_GLYPH_COLUMN: &str = "matrix-column";

/// Randomised appearance of one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Left offset as a percentage of the viewport width.
    pub horizontal_position: f64,
    /// CSS animation duration.
    pub lifetime_seconds: f64,
    pub delay_seconds: f64,
}

#[derive(Clone, Debug)]
pub struct ParticleParams {
    pub interval: Duration,
    /// Hard TTL; the node is removed even if its animation stalled.
    pub lifetime: Duration,
    pub batch_size: usize,
    pub duration_sec: Range<f64>,
    pub delay_sec: Range<f64>,
}

impl ParticleParams {
    pub fn for_device(is_mobile: bool) -> Self {
        Self {
            batch_size: if is_mobile {
                PARTICLE_BATCH_MOBILE
            } else {
                PARTICLE_BATCH_DESKTOP
            },
            ..Self::default()
        }
    }

    /// Upper bound on simultaneously live particles.
    pub fn population_bound(&self) -> usize {
        let interval = self.interval.as_secs_f64().max(f64::EPSILON);
        let overlapping = (self.lifetime.as_secs_f64() / interval).ceil() as usize;
        self.batch_size * overlapping.max(1)
    }
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            interval: PARTICLE_INTERVAL,
            lifetime: PARTICLE_LIFETIME,
            batch_size: PARTICLE_BATCH_DESKTOP,
            duration_sec: PARTICLE_DURATION_SEC.0..PARTICLE_DURATION_SEC.1,
            delay_sec: PARTICLE_DELAY_SEC.0..PARTICLE_DELAY_SEC.1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ParticleTimer {
    Spawn,
    Expire(SpawnId),
}

/// Spawns a batch of particles on a fixed cadence into an overlay layer.
pub struct ParticleGenerator {
    params: ParticleParams,
    rng: StdRng,
    ids: SpawnIds,
    layer: Option<SpawnId>,
    live: FnvHashMap<SpawnId, Particle>,
    timers: TimerRegistry<ParticleTimer>,
    spawned_total: usize,
    torn_down: bool,
}

impl ParticleGenerator {
    pub fn new(params: ParticleParams, seed: u64) -> Self {
        Self {
            params,
            rng: StdRng::seed_from_u64(seed),
            ids: SpawnIds::new(1),
            layer: None,
            live: FnvHashMap::default(),
            timers: TimerRegistry::new(),
            spawned_total: 0,
            torn_down: false,
        }
    }

    /// Create the layer, emit the first batch and arm the spawn interval.
    pub fn start(&mut self, now: Duration, out: &mut Vec<VisualOp>) {
        if self.torn_down || self.layer.is_some() {
            return;
        }
        let layer = self.ids.next_id();
        out.push(VisualOp::Spawn {
            id: layer,
            parent: None,
            class: CLASS_PARTICLE_LAYER,
            styles: Vec::new(),
            html: None,
        });
        self.layer = Some(layer);
        self.spawn_batch(now, out);
        self.timers
            .schedule_every(now + self.params.interval, self.params.interval, ParticleTimer::Spawn);
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn spawned_total(&self) -> usize {
        self.spawned_total
    }

    pub fn live_particles(&self) -> impl Iterator<Item = &Particle> {
        self.live.values()
    }

    fn spawn_batch(&mut self, now: Duration, out: &mut Vec<VisualOp>) {
        let Some(layer) = self.layer else {
            return;
        };
        for _ in 0..self.params.batch_size {
            let particle = Particle {
                horizontal_position: self.rng.gen_range(0.0..100.0),
                lifetime_seconds: self.rng.gen_range(self.params.duration_sec.clone()),
                delay_seconds: self.rng.gen_range(self.params.delay_sec.clone()),
            };
            let id = self.ids.next_id();
            out.push(VisualOp::Spawn {
                id,
                parent: Some(Node::Spawned(layer)),
                class: CLASS_PARTICLE,
                styles: vec![
                    ("left", percent(particle.horizontal_position)),
                    ("animation-duration", seconds(particle.lifetime_seconds)),
                    ("animation-delay", seconds(particle.delay_seconds)),
                ],
                html: None,
            });
            self.live.insert(id, particle);
            self.spawned_total += 1;
            self.timers
                .schedule_once(now + self.params.lifetime, ParticleTimer::Expire(id));
        }
    }
}

impl Effect for ParticleGenerator {
    fn advance(&mut self, now: Duration, out: &mut Vec<VisualOp>) {
        while let Some(fired) = self.timers.pop_due(now) {
            match fired.kind {
                ParticleTimer::Spawn => self.spawn_batch(fired.due, out),
                ParticleTimer::Expire(id) => {
                    if self.live.remove(&id).is_some() {
                        out.push(VisualOp::Despawn { id });
                    }
                }
            }
        }
    }

    fn teardown(&mut self, out: &mut Vec<VisualOp>) {
        self.timers.cancel_all();
        self.live.clear();
        if let Some(layer) = self.layer.take() {
            // removing the layer removes every particle inside it
            out.push(VisualOp::Despawn { id: layer });
        }
        self.torn_down = true;
    }

    fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

#[derive(Clone, Debug)]
pub struct GlyphRainParams {
    pub columns: usize,
    pub rows: usize,
    pub duration_sec: Range<f64>,
    pub delay_sec: Range<f64>,
    pub charset: &'static str,
}

impl Default for GlyphRainParams {
    fn default() -> Self {
        Self {
            columns: GLYPH_COLUMN_COUNT,
            rows: GLYPH_COLUMN_ROWS,
            duration_sec: GLYPH_DURATION_SEC.0..GLYPH_DURATION_SEC.1,
            delay_sec: GLYPH_DELAY_SEC.0..GLYPH_DELAY_SEC.1,
            charset: GLYPH_CHARSET,
        }
    }
}

/// Static falling-glyph background, built once at start.
pub struct GlyphRain {
    params: GlyphRainParams,
    rng: StdRng,
    ids: SpawnIds,
    layer: Option<SpawnId>,
    columns: Vec<SpawnId>,
    torn_down: bool,
}

impl GlyphRain {
    pub fn new(params: GlyphRainParams, seed: u64) -> Self {
        Self {
            params,
            rng: StdRng::seed_from_u64(seed),
            ids: SpawnIds::new(2),
            layer: None,
            columns: Vec::new(),
            torn_down: false,
        }
    }

    pub fn start(&mut self, out: &mut Vec<VisualOp>) {
        if self.torn_down || self.layer.is_some() {
            return;
        }
        let layer = self.ids.next_id();
        out.push(VisualOp::Spawn {
            id: layer,
            parent: None,
            class: CLASS_GLYPH_LAYER,
            styles: Vec::new(),
            html: None,
        });
        self.layer = Some(layer);

        let glyphs: Vec<char> = self.params.charset.chars().collect();
        for _ in 0..self.params.columns {
            let left = self.rng.gen_range(0.0..100.0);
            let duration = self.rng.gen_range(self.params.duration_sec.clone());
            let delay = self.rng.gen_range(self.params.delay_sec.clone());
            let html = self.column_html(&glyphs);
            let id = self.ids.next_id();
            out.push(VisualOp::Spawn {
                id,
                parent: Some(Node::Spawned(layer)),
                class: CLASS_GLYPH_COLUMN,
                styles: vec![
                    ("left", percent(left)),
                    ("animation-duration", seconds(duration)),
                    ("animation-delay", seconds(delay)),
                ],
                html: Some(html),
            });
            self.columns.push(id);
        }
        log::debug!("[effects] glyph rain with {} columns", self.columns.len());
    }

    fn column_html(&mut self, glyphs: &[char]) -> String {
        let mut html = String::new();
        for _ in 0..self.params.rows {
            if let Some(c) = glyphs.choose(&mut self.rng) {
                html.push(*c);
            }
            html.push_str("<br>");
        }
        html
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl Effect for GlyphRain {
    fn advance(&mut self, _now: Duration, _out: &mut Vec<VisualOp>) {}

    fn teardown(&mut self, out: &mut Vec<VisualOp>) {
        self.columns.clear();
        if let Some(layer) = self.layer.take() {
            out.push(VisualOp::Despawn { id: layer });
        }
        self.torn_down = true;
    }

    fn pending_timers(&self) -> usize {
        0
    }
}
