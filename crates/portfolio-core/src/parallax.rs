use crate::constants::{PARALLAX_RATE, PARALLAX_SPEED_STEP, PARALLAX_THROTTLE};
use crate::engine::Effect;
use crate::timers::Throttle;
use crate::visual::{px, ElementId, VisualOp};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ParallaxParams {
    pub throttle: Duration,
    pub rate: f64,
    pub speed_step: f64,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            throttle: PARALLAX_THROTTLE,
            rate: PARALLAX_RATE,
            speed_step: PARALLAX_SPEED_STEP,
        }
    }
}

/// Vertical offset in px for the element at `index` when scrolled to `scroll_y`.
pub fn parallax_offset(params: &ParallaxParams, scroll_y: f64, index: usize) -> f64 {
    let speed = (index + 1) as f64 * params.speed_step;
    scroll_y * params.rate * speed
}

/// Translates floating decorations against the scroll direction, deeper
/// elements moving faster.
pub struct Parallax {
    params: ParallaxParams,
    throttle: Throttle,
    elements: Vec<ElementId>,
    torn_down: bool,
}

impl Parallax {
    pub fn new(params: ParallaxParams) -> Self {
        let throttle = Throttle::new(params.throttle);
        Self {
            params,
            throttle,
            elements: Vec::new(),
            torn_down: false,
        }
    }

    pub fn register(&mut self, id: ElementId) {
        if !self.torn_down && !self.elements.contains(&id) {
            self.elements.push(id);
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64, now: Duration, out: &mut Vec<VisualOp>) {
        if self.torn_down || !self.throttle.ready(now) {
            return;
        }
        for (index, id) in self.elements.iter().enumerate() {
            let offset = parallax_offset(&self.params, scroll_y, index);
            out.push(VisualOp::set_style(
                *id,
                "transform",
                format!("translateY({})", px(offset)),
            ));
        }
    }
}

impl Effect for Parallax {
    fn advance(&mut self, _now: Duration, _out: &mut Vec<VisualOp>) {}

    fn teardown(&mut self, out: &mut Vec<VisualOp>) {
        for id in self.elements.drain(..) {
            out.push(VisualOp::set_style(id, "transform", String::new()));
        }
        self.torn_down = true;
    }

    fn pending_timers(&self) -> usize {
        0
    }
}
