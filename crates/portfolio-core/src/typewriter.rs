use crate::constants::{TYPEWRITER_CHAR_INTERVAL, TYPEWRITER_START_DELAY};
use crate::engine::Effect;
use crate::timers::{TimerId, TimerRegistry};
use crate::visual::{ElementId, Node, VisualOp};
use std::time::Duration;

/// Types `text` into an element one character per tick after a start delay.
pub struct Typewriter {
    target: ElementId,
    chars: Vec<char>,
    typed: usize,
    start_delay: Duration,
    interval: Duration,
    timers: TimerRegistry<()>,
    timer: Option<TimerId>,
    torn_down: bool,
}

impl Typewriter {
    pub fn new(target: ElementId, text: &str) -> Self {
        Self {
            target,
            chars: text.chars().collect(),
            typed: 0,
            start_delay: TYPEWRITER_START_DELAY,
            interval: TYPEWRITER_CHAR_INTERVAL,
            timers: TimerRegistry::new(),
            timer: None,
            torn_down: false,
        }
    }

    /// Clear the element, publish the full text for the CSS glitch layers
    /// and schedule typing.
    pub fn start(&mut self, now: Duration, out: &mut Vec<VisualOp>) {
        if self.torn_down || self.timer.is_some() || self.chars.is_empty() {
            return;
        }
        let full: String = self.chars.iter().collect();
        out.push(VisualOp::set_text(self.target, String::new()));
        out.push(VisualOp::SetAttribute {
            node: Node::Element(self.target),
            name: "data-text",
            value: full,
        });
        self.timer = Some(
            self.timers
                .schedule_every(now + self.start_delay, self.interval, ()),
        );
    }

    pub fn typed(&self) -> &[char] {
        &self.chars[..self.typed]
    }

    pub fn is_done(&self) -> bool {
        self.typed == self.chars.len()
    }
}

impl Effect for Typewriter {
    fn advance(&mut self, now: Duration, out: &mut Vec<VisualOp>) {
        while self.timers.pop_due(now).is_some() {
            if self.typed < self.chars.len() {
                self.typed += 1;
                let text: String = self.chars[..self.typed].iter().collect();
                out.push(VisualOp::set_text(self.target, text));
            }
            if self.typed == self.chars.len() {
                if let Some(timer) = self.timer.take() {
                    self.timers.cancel(timer);
                }
                break;
            }
        }
    }

    fn teardown(&mut self, out: &mut Vec<VisualOp>) {
        self.timers.cancel_all();
        if self.timer.take().is_some() && !self.is_done() {
            // finish instantly rather than leaving a half-typed title
            let full: String = self.chars.iter().collect();
            out.push(VisualOp::set_text(self.target, full));
            self.typed = self.chars.len();
        }
        self.torn_down = true;
    }

    fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
