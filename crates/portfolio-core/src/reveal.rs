use crate::constants::REVEAL_STAGGER;
use crate::engine::{Effect, EffectState};
use crate::timers::TimerRegistry;
use crate::visual::{ElementId, VisualOp};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::time::Duration;

pub const CLASS_PENDING: &str = "animate-on-scroll";
pub const CLASS_REVEALED: &str = "animated";

#[derive(Clone, Debug)]
pub struct RevealParams {
    /// Delay between consecutive descendants of one revealed element.
    pub stagger: Duration,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            stagger: REVEAL_STAGGER,
        }
    }
}

#[derive(Clone, Debug)]
struct Revealable {
    state: EffectState,
    children: SmallVec<[ElementId; 8]>,
    remaining: usize,
}

#[derive(Clone, Copy, Debug)]
struct ChildReveal {
    parent: ElementId,
    child: ElementId,
}

/// Reveals registered elements on their first intersection and staggers
/// their qualifying descendants.
///
/// Elements stay observed; repeated intersections are ignored once the
/// element left `Pending`, so the staggered reveal runs once.
pub struct RevealEngine {
    params: RevealParams,
    elements: FnvHashMap<ElementId, Revealable>,
    timers: TimerRegistry<ChildReveal>,
    torn_down: bool,
}

impl RevealEngine {
    pub fn new(params: RevealParams) -> Self {
        Self {
            params,
            elements: FnvHashMap::default(),
            timers: TimerRegistry::new(),
            torn_down: false,
        }
    }

    /// Track `id` and mark it as waiting for reveal.
    pub fn register(
        &mut self,
        id: ElementId,
        children: impl IntoIterator<Item = ElementId>,
        out: &mut Vec<VisualOp>,
    ) {
        if self.torn_down || self.elements.contains_key(&id) {
            return;
        }
        let children: SmallVec<[ElementId; 8]> = children.into_iter().collect();
        let remaining = children.len();
        self.elements.insert(
            id,
            Revealable {
                state: EffectState::Pending,
                children,
                remaining,
            },
        );
        out.push(VisualOp::add_class(id, CLASS_PENDING));
    }

    pub fn state(&self, id: ElementId) -> Option<EffectState> {
        self.elements.get(&id).map(|e| e.state)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Visibility callback. Only entering the viewport matters.
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
        let Some(entry) = self.elements.get_mut(&id) else {
            return;
        };
        if !entry.state.advance_to(EffectState::Active) {
            return;
        }
        out.push(VisualOp::add_class(id, CLASS_REVEALED));
        if entry.children.is_empty() {
            entry.state.advance_to(EffectState::Done);
            return;
        }
        for (index, child) in entry.children.iter().enumerate() {
            let at = now + self.params.stagger * index as u32;
            self.timers.schedule_once(
                at,
                ChildReveal {
                    parent: id,
                    child: *child,
                },
            );
        }
    }
}

impl Effect for RevealEngine {
    fn advance(&mut self, now: Duration, out: &mut Vec<VisualOp>) {
        while let Some(fired) = self.timers.pop_due(now) {
            let ChildReveal { parent, child } = fired.kind;
            out.push(VisualOp::add_class(child, CLASS_REVEALED));
            if let Some(entry) = self.elements.get_mut(&parent) {
                entry.remaining = entry.remaining.saturating_sub(1);
                if entry.remaining == 0 {
                    entry.state.advance_to(EffectState::Done);
                }
            }
        }
    }

    fn teardown(&mut self, _out: &mut Vec<VisualOp>) {
        self.timers.cancel_all();
        self.torn_down = true;
    }

    fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
