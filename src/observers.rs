//! Viewport watchers feeding intersection changes to the host.

use crate::runtime::SharedRuntime;
use js_sys::Array;
use portfolio_core::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use portfolio_core::visual::Watcher;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type Callback = Closure<dyn FnMut(Array, JsValue)>;

/// The observers own their callbacks; dropping the watchers frees both.
pub struct Watchers {
    reveal: web::IntersectionObserver,
    counter: web::IntersectionObserver,
    progress: web::IntersectionObserver,
    _callbacks: [Callback; 3],
}

impl Watchers {
    pub fn new(runtime: &SharedRuntime) -> anyhow::Result<Self> {
        let reveal_init = web::IntersectionObserverInit::new();
        reveal_init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        reveal_init.set_root_margin(REVEAL_ROOT_MARGIN);
        let (reveal, on_reveal) = build(runtime, Watcher::Reveal, Some(&reveal_init))?;
        let (counter, on_counter) = build(runtime, Watcher::Counter, None)?;
        let (progress, on_progress) = build(runtime, Watcher::Progress, None)?;
        Ok(Self {
            reveal,
            counter,
            progress,
            _callbacks: [on_reveal, on_counter, on_progress],
        })
    }

    fn get(&self, watcher: Watcher) -> &web::IntersectionObserver {
        match watcher {
            Watcher::Reveal => &self.reveal,
            Watcher::Counter => &self.counter,
            Watcher::Progress => &self.progress,
        }
    }

    pub fn observe(&self, watcher: Watcher, el: &web::Element) {
        self.get(watcher).observe(el);
    }

    pub fn unobserve(&self, watcher: Watcher, el: &web::Element) {
        self.get(watcher).unobserve(el);
    }

    /// Stop all observation. Callbacks are released when `self` drops.
    pub fn disconnect(self) {
        self.reveal.disconnect();
        self.counter.disconnect();
        self.progress.disconnect();
    }
}

fn build(
    runtime: &SharedRuntime,
    watcher: Watcher,
    init: Option<&web::IntersectionObserverInit>,
) -> anyhow::Result<(web::IntersectionObserver, Callback)> {
    let runtime = runtime.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, _: JsValue| {
        let Ok(mut rt) = runtime.try_borrow_mut() else {
            return;
        };
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            let Some(id) = rt.registry.lookup(&entry.target()) else {
                continue;
            };
            let intersecting = entry.is_intersecting();
            rt.drive(|host, now, out| host.intersection(watcher, id, intersecting, now, out));
        }
    }) as Box<dyn FnMut(Array, JsValue)>);
    let observer = match init {
        Some(init) => {
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)
        }
        None => web::IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    }
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok((observer, callback))
}
