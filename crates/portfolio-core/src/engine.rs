use crate::visual::VisualOp;
use std::time::Duration;

/// Lifecycle of an element managed by an effect. Transitions only move
/// forward: `Pending -> Active -> Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum EffectState {
    #[default]
    Pending,
    Active,
    Done,
}

impl EffectState {
    /// Move to `next` if that is forward; returns whether the state changed.
    pub fn advance_to(&mut self, next: EffectState) -> bool {
        if next > *self {
            *self = next;
            true
        } else {
            false
        }
    }
}

/// Common surface of every timer-driven effect engine.
pub trait Effect {
    /// Fire every timer due at or before `now`.
    fn advance(&mut self, now: Duration, out: &mut Vec<VisualOp>);

    /// Cancel all timers and remove anything the engine spawned. The engine
    /// ignores further input afterwards.
    fn teardown(&mut self, out: &mut Vec<VisualOp>);

    fn pending_timers(&self) -> usize;
}
