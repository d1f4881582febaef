#![cfg(target_arch = "wasm32")]
//! Browser entry point: loads content, wires the page and runs the effects
//! host on a `requestAnimationFrame` loop.

use portfolio_core::constants::LOADING_SCREEN_HIDE_AFTER;
use portfolio_core::{detect, EffectsHost, Watcher};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod api;
mod constants;
mod contact;
mod content;
mod dom;
mod events;
mod frame;
mod nav;
mod observers;
mod overlay;
mod page;
mod probe;
mod runtime;
mod theme;
mod visuals;

use observers::Watchers;
use runtime::{Runtime, SharedRuntime};

thread_local! {
    static RUNTIME: RefCell<Option<SharedRuntime>> = const { RefCell::new(None) };
}

fn build_host(window: &web::Window) -> EffectsHost {
    let capabilities = detect(&probe::BrowserProbe::new(window.clone()));
    EffectsHost::new(capabilities, rand::random())
}

/// Scan the page, start the host, attach watchers and begin the frame loop.
fn boot_effects(runtime: &SharedRuntime) -> anyhow::Result<()> {
    let watchers = Watchers::new(runtime)?;
    {
        let mut guard = runtime.borrow_mut();
        let rt = &mut *guard;
        let page = page::scan(&rt.document, &mut rt.registry, &rt.profile_name);
        let observed = rt.drive(|host, now, out| host.start(&page, now, out));
        for (watcher, ids) in [
            (Watcher::Reveal, &observed.reveal),
            (Watcher::Counter, &observed.counters),
            (Watcher::Progress, &observed.progress),
        ] {
            for id in ids {
                if let Some(el) = rt.registry.element(*id) {
                    watchers.observe(watcher, el);
                }
            }
        }
        rt.watchers = Some(watchers);
    }
    frame::start_loop(runtime.clone());
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                overlay::hide_loading(&document);
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    overlay::show_loading(&document);
    let site = api::load_content().await;

    theme::init(&document);
    let nav = nav::init(&document);
    content::populate(&document, &site);
    page::decorate(&document);
    contact::init(&document);

    let runtime: SharedRuntime = Rc::new(RefCell::new(Runtime::new(
        document.clone(),
        site.profile.name.clone(),
        build_host(&window),
    )));
    boot_effects(&runtime)?;
    events::wire_pointer_handlers(&document, &runtime);
    events::wire_scroll(&window, &runtime, nav);
    RUNTIME.with(|r| *r.borrow_mut() = Some(runtime));

    let doc = document.clone();
    let hide_ms = i32::try_from(LOADING_SCREEN_HIDE_AFTER.as_millis()).unwrap_or(i32::MAX);
    dom::set_timeout(hide_ms, move || overlay::hide_loading(&doc));
    Ok(())
}

/// Cancel every effect timer and remove every generated node.
#[wasm_bindgen]
pub fn stop_effects() {
    RUNTIME.with(|r| {
        if let Some(runtime) = r.borrow().as_ref() {
            runtime.borrow_mut().shutdown();
        }
    });
}

/// Re-run effect start-up after [`stop_effects`], e.g. after a client-side
/// page swap. Does nothing while effects are running.
#[wasm_bindgen]
pub fn restart_effects() {
    let Some(runtime) = RUNTIME.with(|r| r.borrow().clone()) else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    {
        let mut rt = runtime.borrow_mut();
        if rt.is_running() {
            return;
        }
        rt.replace_host(build_host(&window));
    }
    if let Err(e) = boot_effects(&runtime) {
        log::error!("[effects] restart failed: {:?}", e);
    }
}
