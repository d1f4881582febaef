//! Runtime capability detection and effect gating.

use crate::constants::{BENCHMARK_BUDGET, MOBILE_MAX_WIDTH_PX};
use rand::Rng;
use std::time::Duration;

/// Coarse classification of how much animation work the device can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PerformanceTier {
    #[default]
    Standard,
    Low,
}

impl PerformanceTier {
    /// Classify a benchmark run against the budget.
    pub fn from_elapsed(elapsed: Duration, budget: Duration) -> Self {
        if elapsed > budget {
            PerformanceTier::Low
        } else {
            PerformanceTier::Standard
        }
    }
}

/// Source of the raw environment facts. The browser implementation reads
/// media queries and times a benchmark; tests return fixed answers.
pub trait CapabilityProbe {
    fn prefers_reduced_motion(&self) -> bool;
    fn viewport_width(&self) -> f64;
    fn performance_tier(&self) -> PerformanceTier;
    /// False on touch-first devices, which get no cursor trail.
    fn pointer_capable(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub reduced_motion: bool,
    pub is_mobile: bool,
    pub is_low_performance: bool,
    pub pointer_capable: bool,
}

impl Capabilities {
    pub fn particles_enabled(&self) -> bool {
        !self.reduced_motion && !self.is_low_performance
    }

    pub fn glyph_columns_enabled(&self) -> bool {
        !self.reduced_motion && !self.is_low_performance && !self.is_mobile
    }

    pub fn cursor_trail_enabled(&self) -> bool {
        self.pointer_capable && !self.is_low_performance && !self.is_mobile
    }

    pub fn parallax_enabled(&self) -> bool {
        !self.is_low_performance && !self.is_mobile
    }
}

/// Sample the probe once. Width is not re-evaluated on resize.
pub fn detect(probe: &impl CapabilityProbe) -> Capabilities {
    let caps = Capabilities {
        reduced_motion: probe.prefers_reduced_motion(),
        is_mobile: probe.viewport_width() <= MOBILE_MAX_WIDTH_PX,
        is_low_performance: probe.performance_tier() == PerformanceTier::Low,
        pointer_capable: probe.pointer_capable(),
    };
    log::info!(
        "[effects] capabilities reduced_motion={} mobile={} low_perf={} pointer={}",
        caps.reduced_motion,
        caps.is_mobile,
        caps.is_low_performance,
        caps.pointer_capable
    );
    caps
}

/// The benchmark workload: `draws` uniform samples folded into a sum so the
/// loop cannot be optimised away. Callers time it with their own clock.
pub fn benchmark_workload<R: Rng>(rng: &mut R, draws: u32) -> f64 {
    let mut acc = 0.0f64;
    for _ in 0..draws {
        acc += rng.gen::<f64>();
    }
    std::hint::black_box(acc)
}

/// Run the workload between two clock readings and classify the result.
pub fn measure_tier<R: Rng>(
    rng: &mut R,
    draws: u32,
    mut clock: impl FnMut() -> Duration,
) -> PerformanceTier {
    let start = clock();
    benchmark_workload(rng, draws);
    let elapsed = clock().saturating_sub(start);
    PerformanceTier::from_elapsed(elapsed, BENCHMARK_BUDGET)
}

/// Probe with fixed answers, for tests and server-side previews.
#[derive(Clone, Copy, Debug)]
pub struct FixedProbe {
    pub reduced_motion: bool,
    pub viewport_width: f64,
    pub tier: PerformanceTier,
    pub pointer: bool,
}

impl Default for FixedProbe {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            viewport_width: 1280.0,
            tier: PerformanceTier::Standard,
            pointer: true,
        }
    }
}

impl CapabilityProbe for FixedProbe {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
    fn performance_tier(&self) -> PerformanceTier {
        self.tier
    }
    fn pointer_capable(&self) -> bool {
        self.pointer
    }
}
