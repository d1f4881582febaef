use crate::constants::{CURSOR_SETTLE_PX, CURSOR_SMOOTHING, CURSOR_THROTTLE};
use crate::engine::Effect;
use crate::timers::Throttle;
use crate::visual::{px, SpawnId, SpawnIds, VisualOp};
use glam::Vec2;
use std::time::Duration;

pub const CLASS_CURSOR: &str = "custom-cursor";
pub const CLASS_FOLLOWER: &str = "cursor-follower";
pub const CLASS_HOVER: &str = "cursor-hover";

#[derive(Clone, Debug)]
pub struct CursorParams {
    pub smoothing: f32,
    pub settle_px: f32,
    pub throttle: Duration,
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            smoothing: CURSOR_SMOOTHING,
            settle_px: CURSOR_SETTLE_PX,
            throttle: CURSOR_THROTTLE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub target: Vec2,
    pub follower: Vec2,
    pub is_moving: bool,
}

impl CursorState {
    /// One smoothing step. Returns whether the follower moved.
    pub fn step(&mut self, smoothing: f32, settle_px: f32) -> bool {
        if !self.is_moving {
            return false;
        }
        self.follower += (self.target - self.follower) * smoothing;
        let d = (self.target - self.follower).abs();
        if d.x < settle_px && d.y < settle_px {
            self.is_moving = false;
        }
        true
    }

    pub fn distance(&self) -> f32 {
        self.target.distance(self.follower)
    }
}

/// Lead cursor bound to the pointer plus a follower eased toward it.
pub struct CursorTrail {
    params: CursorParams,
    state: CursorState,
    throttle: Throttle,
    lead: SpawnId,
    follower: SpawnId,
    spawned: bool,
    hovering: bool,
    torn_down: bool,
}

impl CursorTrail {
    pub fn new(params: CursorParams) -> Self {
        let mut ids = SpawnIds::new(3);
        let throttle = Throttle::new(params.throttle);
        Self {
            params,
            state: CursorState::default(),
            throttle,
            lead: ids.next_id(),
            follower: ids.next_id(),
            spawned: false,
            hovering: false,
            torn_down: false,
        }
    }

    pub fn start(&mut self, out: &mut Vec<VisualOp>) {
        if self.torn_down || self.spawned {
            return;
        }
        for (id, class) in [(self.lead, CLASS_CURSOR), (self.follower, CLASS_FOLLOWER)] {
            out.push(VisualOp::Spawn {
                id,
                parent: None,
                class,
                styles: Vec::new(),
                html: None,
            });
        }
        self.spawned = true;
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Throttled pointer update. Returns false when the sample was dropped.
    pub fn on_pointer_move(
        &mut self,
        x: f32,
        y: f32,
        now: Duration,
        out: &mut Vec<VisualOp>,
    ) -> bool {
        if self.torn_down || !self.throttle.ready(now) {
            return false;
        }
        self.state.target = Vec2::new(x, y);
        self.state.is_moving = true;
        out.push(VisualOp::set_style(self.lead, "left", px(x as f64)));
        out.push(VisualOp::set_style(self.lead, "top", px(y as f64)));
        true
    }

    /// Pointer entered (`true`) or left an interactive element.
    pub fn on_interactive_hover(&mut self, entered: bool, out: &mut Vec<VisualOp>) {
        if self.torn_down || entered == self.hovering {
            return;
        }
        self.hovering = entered;
        for id in [self.lead, self.follower] {
            out.push(if entered {
                VisualOp::add_class(id, CLASS_HOVER)
            } else {
                VisualOp::remove_class(id, CLASS_HOVER)
            });
        }
    }

    /// Per-frame follower update; writes only while the follower is moving.
    pub fn frame(&mut self, out: &mut Vec<VisualOp>) {
        if self.torn_down {
            return;
        }
        if self.state.step(self.params.smoothing, self.params.settle_px) {
            let f = self.state.follower;
            out.push(VisualOp::set_style(self.follower, "left", px(f.x as f64)));
            out.push(VisualOp::set_style(self.follower, "top", px(f.y as f64)));
        }
    }
}

impl Effect for CursorTrail {
    fn advance(&mut self, _now: Duration, out: &mut Vec<VisualOp>) {
        self.frame(out);
    }

    fn teardown(&mut self, out: &mut Vec<VisualOp>) {
        if self.spawned {
            out.push(VisualOp::Despawn { id: self.lead });
            out.push(VisualOp::Despawn { id: self.follower });
            self.spawned = false;
        }
        self.state.is_moving = false;
        self.torn_down = true;
    }

    fn pending_timers(&self) -> usize {
        0
    }
}
