//! One owner for every effect engine on the page.
//!
//! The web layer scans the document into a [`Page`], hands it to
//! [`EffectsHost::start`], forwards browser events to the entry points and
//! calls [`EffectsHost::advance`] once per animation frame. Every returned
//! [`VisualOp`] is applied to the DOM in order.

use crate::ambient::{GlyphRain, GlyphRainParams, ParticleGenerator, ParticleParams};
use crate::capability::Capabilities;
use crate::counter::{CounterAnimator, CounterParams};
use crate::cursor::{CursorParams, CursorTrail};
use crate::engine::Effect;
use crate::glitch::{GlitchEngine, GlitchParams};
use crate::parallax::{Parallax, ParallaxParams};
use crate::progress::{ProgressAnimator, ProgressParams};
use crate::reveal::{RevealEngine, RevealParams};
use crate::typewriter::Typewriter;
use crate::visual::{ElementId, VisualOp, Watcher};
use smallvec::SmallVec;
use std::time::Duration;

/// A section that reveals itself, with the descendants it staggers in.
#[derive(Clone, Debug)]
pub struct RevealTarget {
    pub id: ElementId,
    pub children: SmallVec<[ElementId; 8]>,
}

#[derive(Clone, Debug)]
pub struct SkillBar {
    pub item: ElementId,
    pub bar: ElementId,
    /// Raw `data-level` attribute.
    pub level: String,
}

/// Elements found on the page at start-up.
#[derive(Clone, Debug, Default)]
pub struct Page {
    pub reveal: Vec<RevealTarget>,
    /// Stat numbers with their current text.
    pub counters: Vec<(ElementId, String)>,
    pub skills: Vec<SkillBar>,
    pub glitch_text: Vec<ElementId>,
    pub glitch_pool: Vec<ElementId>,
    pub parallax: Vec<ElementId>,
    /// Hero title and the name to type into it.
    pub title: Option<(ElementId, String)>,
    pub scroll_y: f64,
}

/// Which elements the caller should hand to each visibility watcher.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Observed {
    pub reveal: Vec<ElementId>,
    pub counters: Vec<ElementId>,
    pub progress: Vec<ElementId>,
}

fn derive_seed(seed: u64, index: u64) -> u64 {
    seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

pub struct EffectsHost {
    capabilities: Capabilities,
    reveal: RevealEngine,
    counters: CounterAnimator,
    progress: ProgressAnimator,
    glitch: GlitchEngine,
    typewriter: Option<Typewriter>,
    particles: Option<ParticleGenerator>,
    glyphs: Option<GlyphRain>,
    cursor: Option<CursorTrail>,
    parallax: Option<Parallax>,
    started: bool,
    torn_down: bool,
}

impl EffectsHost {
    /// Build the engines the capabilities allow. Engines that are gated off
    /// are never constructed, so they can never append anything.
    pub fn new(capabilities: Capabilities, seed: u64) -> Self {
        let particles = capabilities.particles_enabled().then(|| {
            ParticleGenerator::new(
                ParticleParams::for_device(capabilities.is_mobile),
                derive_seed(seed, 1),
            )
        });
        let glyphs = capabilities
            .glyph_columns_enabled()
            .then(|| GlyphRain::new(GlyphRainParams::default(), derive_seed(seed, 2)));
        let cursor = capabilities
            .cursor_trail_enabled()
            .then(|| CursorTrail::new(CursorParams::default()));
        let parallax = capabilities
            .parallax_enabled()
            .then(|| Parallax::new(ParallaxParams::default()));
        Self {
            capabilities,
            reveal: RevealEngine::new(RevealParams::default()),
            counters: CounterAnimator::new(CounterParams::default()),
            progress: ProgressAnimator::new(ProgressParams::default()),
            glitch: GlitchEngine::new(GlitchParams::default(), derive_seed(seed, 3)),
            typewriter: None,
            particles,
            glyphs,
            cursor,
            parallax,
            started: false,
            torn_down: false,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Register the page, spawn ambient layers and arm periodic timers.
    /// Calling it twice does nothing the second time.
    pub fn start(&mut self, page: &Page, now: Duration, out: &mut Vec<VisualOp>) -> Observed {
        let mut observed = Observed::default();
        if self.torn_down || self.started {
            return observed;
        }
        self.started = true;

        for target in &page.reveal {
            self.reveal
                .register(target.id, target.children.iter().copied(), out);
            observed.reveal.push(target.id);
        }
        for (id, text) in &page.counters {
            if self.counters.register(*id, text) {
                observed.counters.push(*id);
            }
        }
        for skill in &page.skills {
            if self.progress.register(skill.item, skill.bar, &skill.level, out) {
                observed.progress.push(skill.item);
            }
        }
        for id in &page.glitch_text {
            self.glitch.register_text(*id, now);
        }
        for id in &page.glitch_pool {
            self.glitch.register_pool(*id, now);
        }
        self.glitch.set_scroll_baseline(page.scroll_y);

        if let Some((id, text)) = &page.title {
            let mut typewriter = Typewriter::new(*id, text);
            typewriter.start(now, out);
            self.typewriter = Some(typewriter);
        }
        if let Some(particles) = self.particles.as_mut() {
            particles.start(now, out);
        }
        if let Some(glyphs) = self.glyphs.as_mut() {
            glyphs.start(out);
        }
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.start(out);
        }
        if let Some(parallax) = self.parallax.as_mut() {
            for id in &page.parallax {
                parallax.register(*id);
            }
        }

        log::info!(
            "[effects] started: {} reveal, {} counters, {} skill bars, {} glitch text",
            observed.reveal.len(),
            observed.counters.len(),
            observed.progress.len(),
            page.glitch_text.len()
        );
        observed
    }

    fn effects_mut(&mut self) -> SmallVec<[&mut dyn Effect; 9]> {
        let mut effects: SmallVec<[&mut dyn Effect; 9]> = SmallVec::new();
        effects.push(&mut self.reveal);
        effects.push(&mut self.counters);
        effects.push(&mut self.progress);
        effects.push(&mut self.glitch);
        if let Some(e) = self.typewriter.as_mut() {
            effects.push(e);
        }
        if let Some(e) = self.particles.as_mut() {
            effects.push(e);
        }
        if let Some(e) = self.glyphs.as_mut() {
            effects.push(e);
        }
        if let Some(e) = self.cursor.as_mut() {
            effects.push(e);
        }
        if let Some(e) = self.parallax.as_mut() {
            effects.push(e);
        }
        effects
    }

    /// Fire everything due by `now` and run one cursor frame.
    pub fn advance(&mut self, now: Duration, out: &mut Vec<VisualOp>) {
        if self.torn_down {
            return;
        }
        for effect in self.effects_mut() {
            effect.advance(now, out);
        }
    }

    pub fn intersection(
        &mut self,
        watcher: Watcher,
        id: ElementId,
        intersecting: bool,
        now: Duration,
        out: &mut Vec<VisualOp>,
    ) {
        if self.torn_down {
            return;
        }
        match watcher {
            Watcher::Reveal => self.reveal.on_intersection(id, intersecting, now, out),
            Watcher::Counter => self.counters.on_intersection(id, intersecting, now, out),
            Watcher::Progress => self.progress.on_intersection(id, intersecting, now, out),
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, now: Duration, out: &mut Vec<VisualOp>) {
        if self.torn_down {
            return;
        }
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.on_pointer_move(x, y, now, out);
        }
    }

    pub fn scroll(&mut self, scroll_y: f64, now: Duration, out: &mut Vec<VisualOp>) {
        if self.torn_down {
            return;
        }
        if let Some(parallax) = self.parallax.as_mut() {
            parallax.on_scroll(scroll_y, now, out);
        }
        self.glitch.on_scroll(scroll_y, now, out);
    }

    pub fn interactive_hover(&mut self, entered: bool, out: &mut Vec<VisualOp>) {
        if self.torn_down {
            return;
        }
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.on_interactive_hover(entered, out);
        }
    }

    pub fn nav_hover(&mut self, id: ElementId, text: &str, now: Duration, out: &mut Vec<VisualOp>) {
        if self.torn_down {
            return;
        }
        self.glitch.on_nav_hover(id, text, now, out);
    }

    pub fn card_hover(
        &mut self,
        id: ElementId,
        width: f64,
        height: f64,
        now: Duration,
        out: &mut Vec<VisualOp>,
    ) {
        if self.torn_down {
            return;
        }
        self.glitch.on_card_hover(id, width, height, now, out);
    }

    pub fn button_click(
        &mut self,
        id: ElementId,
        x: f64,
        y: f64,
        now: Duration,
        out: &mut Vec<VisualOp>,
    ) {
        if self.torn_down {
            return;
        }
        self.glitch.on_button_click(id, x, y, now, out);
    }

    /// Cancel every timer, restore glitched elements and despawn every
    /// spawned node. The host is inert afterwards.
    pub fn teardown(&mut self, out: &mut Vec<VisualOp>) {
        if self.torn_down {
            return;
        }
        for effect in self.effects_mut() {
            effect.teardown(out);
        }
        self.torn_down = true;
        log::info!("[effects] torn down");
    }

    pub fn pending_timers(&self) -> usize {
        let optional = [
            self.typewriter.as_ref().map(|e| e.pending_timers()),
            self.particles.as_ref().map(|e| e.pending_timers()),
            self.glyphs.as_ref().map(|e| e.pending_timers()),
            self.cursor.as_ref().map(|e| e.pending_timers()),
            self.parallax.as_ref().map(|e| e.pending_timers()),
        ];
        self.reveal.pending_timers()
            + self.counters.pending_timers()
            + self.progress.pending_timers()
            + self.glitch.pending_timers()
            + optional.into_iter().flatten().sum::<usize>()
    }

    pub fn reveal(&self) -> &RevealEngine {
        &self.reveal
    }

    pub fn counters(&self) -> &CounterAnimator {
        &self.counters
    }

    pub fn progress(&self) -> &ProgressAnimator {
        &self.progress
    }

    pub fn glitch(&self) -> &GlitchEngine {
        &self.glitch
    }

    pub fn typewriter(&self) -> Option<&Typewriter> {
        self.typewriter.as_ref()
    }

    pub fn particles(&self) -> Option<&ParticleGenerator> {
        self.particles.as_ref()
    }

    pub fn glyphs(&self) -> Option<&GlyphRain> {
        self.glyphs.as_ref()
    }

    pub fn cursor(&self) -> Option<&CursorTrail> {
        self.cursor.as_ref()
    }
}
