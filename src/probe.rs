use crate::constants::{MQ_REDUCED_MOTION, VIEWPORT_WIDTH_FALLBACK_PX};
use instant::Instant;
use portfolio_core::capability::{measure_tier, CapabilityProbe, PerformanceTier};
use portfolio_core::constants::BENCHMARK_DRAWS;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Reads the environment from the live window. The benchmark runs once,
/// when the probe is built.
pub struct BrowserProbe {
    window: web::Window,
    tier: PerformanceTier,
}

impl BrowserProbe {
    pub fn new(window: web::Window) -> Self {
        let mut rng = StdRng::from_entropy();
        let origin = Instant::now();
        let tier = measure_tier(&mut rng, BENCHMARK_DRAWS, move || origin.elapsed());
        Self { window, tier }
    }
}

impl CapabilityProbe for BrowserProbe {
    fn prefers_reduced_motion(&self) -> bool {
        self.window
            .match_media(MQ_REDUCED_MOTION)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(VIEWPORT_WIDTH_FALLBACK_PX)
    }

    fn performance_tier(&self) -> PerformanceTier {
        self.tier
    }

    fn pointer_capable(&self) -> bool {
        !js_sys::Reflect::has(&self.window, &JsValue::from_str("ontouchstart")).unwrap_or(false)
    }
}
