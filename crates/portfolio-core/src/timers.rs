//! Virtual-time timer registry.
//!
//! Every engine owns one registry and never touches browser timers directly.
//! The web frontend advances the host with the elapsed page time and each
//! engine drains its due timers, so tearing down an engine is just
//! `cancel_all` on its registry.

use std::time::Duration;

/// Handle returned when a timer is scheduled; used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A timer that became due during `pop_due`.
#[derive(Clone, Debug, PartialEq)]
pub struct Fired<K> {
    pub id: TimerId,
    /// Scheduled time of this occurrence (not the time it was drained).
    pub due: Duration,
    pub kind: K,
}

#[derive(Clone, Debug)]
struct Entry<K> {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
    kind: K,
}

/// One-shot and periodic timers keyed by an engine-defined payload `K`.
#[derive(Clone, Debug)]
pub struct TimerRegistry<K> {
    next_id: u64,
    entries: Vec<Entry<K>>,
}

impl<K> Default for TimerRegistry<K> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<K: Clone> TimerRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire once at `at`.
    pub fn schedule_once(&mut self, at: Duration, kind: K) -> TimerId {
        self.insert(at, None, kind)
    }

    /// Fire at `first` and then every `period` until cancelled.
    ///
    /// A zero period would never let `pop_due` make progress, so it is
    /// bumped to one millisecond.
    pub fn schedule_every(&mut self, first: Duration, period: Duration, kind: K) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.insert(first, Some(period), kind)
    }

    fn insert(&mut self, due: Duration, period: Option<Duration>, kind: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due,
            period,
            kind,
        });
        id
    }

    /// Returns false when the timer already fired (one-shot) or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before != self.entries.len()
    }

    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Earliest pending due time, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Remove and return the earliest timer due at or before `now`.
    ///
    /// Ties resolve in scheduling order. Periodic timers are re-armed at
    /// `due + period`, so draining in a loop replays every missed occurrence.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired<K>> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(i, _)| i)?;

        let entry = &mut self.entries[idx];
        let fired = Fired {
            id: entry.id,
            due: entry.due,
            kind: entry.kind.clone(),
        };
        match entry.period {
            Some(period) => entry.due += period,
            None => {
                self.entries.swap_remove(idx);
            }
        }
        Some(fired)
    }
}

/// Leading-edge rate limiter: the first call passes, later calls are
/// dropped until `window` has elapsed since the last accepted one.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    window: Duration,
    last: Option<Duration>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    pub fn ready(&mut self, now: Duration) -> bool {
        let open = match self.last {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.window,
        };
        if open {
            self.last = Some(now);
        }
        open
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}
