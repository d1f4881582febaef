//! Shared, page-lifetime owner of the effects host and its DOM bindings.

use crate::observers::Watchers;
use crate::visuals::DomRegistry;
use instant::Instant;
use portfolio_core::visual::VisualOp;
use portfolio_core::EffectsHost;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

pub type SharedRuntime = Rc<RefCell<Runtime>>;

pub struct Runtime {
    pub document: web::Document,
    /// Typed into the hero title on every start.
    pub profile_name: String,
    pub host: EffectsHost,
    pub registry: DomRegistry,
    pub watchers: Option<Watchers>,
    started_at: Instant,
    generation: u64,
    ops: Vec<VisualOp>,
}

impl Runtime {
    pub fn new(document: web::Document, profile_name: String, host: EffectsHost) -> Self {
        Self {
            document,
            profile_name,
            host,
            registry: DomRegistry::new(),
            watchers: None,
            started_at: Instant::now(),
            generation: 0,
            ops: Vec::with_capacity(64),
        }
    }

    /// Time since the runtime was created; the host's virtual clock.
    pub fn now(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Run `f` against the host and apply whatever it emits.
    pub fn drive<R>(&mut self, f: impl FnOnce(&mut EffectsHost, Duration, &mut Vec<VisualOp>) -> R) -> R {
        let now = self.now();
        let mut ops = std::mem::take(&mut self.ops);
        let result = f(&mut self.host, now, &mut ops);
        self.registry
            .apply(&self.document, &mut ops, self.watchers.as_ref());
        self.ops = ops;
        result
    }

    /// Swap in a fresh host after a shutdown. Page elements keep their ids.
    pub fn replace_host(&mut self, host: EffectsHost) {
        self.host = host;
        self.started_at = Instant::now();
        self.generation += 1;
    }

    /// Bumped by every host swap so a stale frame loop can tell it is stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        !self.host.is_torn_down()
    }

    /// Tear the host down and stop watching the page.
    pub fn shutdown(&mut self) {
        self.drive(|host, _, out| host.teardown(out));
        if let Some(watchers) = self.watchers.take() {
            watchers.disconnect();
        }
        log::info!(
            "[effects] shut down, {} timers pending, {} spawned nodes left",
            self.host.pending_timers(),
            self.registry.spawned_count()
        );
    }
}
