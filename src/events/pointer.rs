use crate::constants::{SEL_GLITCH_BUTTONS, SEL_INTERACTIVE, SEL_NAV_LINKS, SEL_SERVICE_CARDS};
use crate::dom;
use crate::runtime::SharedRuntime;
use portfolio_core::{EffectsHost, ElementId, VisualOp};
use std::time::Duration;
use web_sys as web;

/// Run `f` against the host if the runtime is free and still running.
fn with_host(
    runtime: &SharedRuntime,
    f: impl FnOnce(&mut EffectsHost, Duration, &mut Vec<VisualOp>),
) {
    let Ok(mut rt) = runtime.try_borrow_mut() else {
        return;
    };
    if rt.is_running() {
        rt.drive(f);
    }
}

fn register(runtime: &SharedRuntime, el: &web::Element) -> Option<ElementId> {
    runtime
        .try_borrow_mut()
        .ok()
        .map(|mut rt| rt.registry.id_of(el))
}

fn wire_pointermove(document: &web::Document, runtime: &SharedRuntime) {
    let runtime = runtime.clone();
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        with_host(&runtime, |host, now, out| host.pointer_move(x, y, now, out));
    });
}

fn wire_interactive_hover(document: &web::Document, runtime: &SharedRuntime) {
    for el in dom::query_document(document, SEL_INTERACTIVE) {
        for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
            let runtime = runtime.clone();
            dom::add_listener(&el, event, move |_: web::Event| {
                with_host(&runtime, |host, _, out| host.interactive_hover(entered, out));
            });
        }
    }
}

fn wire_card_hover(document: &web::Document, runtime: &SharedRuntime) {
    for card in dom::query_document(document, SEL_SERVICE_CARDS) {
        let Some(id) = register(runtime, &card) else {
            continue;
        };
        let runtime = runtime.clone();
        let target = card.clone();
        dom::add_listener(&card, "mouseenter", move |_: web::Event| {
            let rect = target.get_bounding_client_rect();
            let (w, h) = (rect.width(), rect.height());
            with_host(&runtime, |host, now, out| host.card_hover(id, w, h, now, out));
        });
    }
}

fn wire_nav_hover(document: &web::Document, runtime: &SharedRuntime) {
    for link in dom::query_document(document, SEL_NAV_LINKS) {
        let Some(id) = register(runtime, &link) else {
            continue;
        };
        let runtime = runtime.clone();
        let target = link.clone();
        dom::add_listener(&link, "mouseenter", move |_: web::Event| {
            let text = target.text_content().unwrap_or_default();
            with_host(&runtime, |host, now, out| host.nav_hover(id, &text, now, out));
        });
    }
}

fn wire_button_clicks(document: &web::Document, runtime: &SharedRuntime) {
    for button in dom::query_document(document, SEL_GLITCH_BUTTONS) {
        let Some(id) = register(runtime, &button) else {
            continue;
        };
        let runtime = runtime.clone();
        let target = button.clone();
        dom::add_listener(&button, "click", move |ev: web::MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let x = ev.client_x() as f64 - rect.left();
            let y = ev.client_y() as f64 - rect.top();
            with_host(&runtime, |host, now, out| host.button_click(id, x, y, now, out));
        });
    }
}

pub fn wire_pointer_handlers(document: &web::Document, runtime: &SharedRuntime) {
    wire_pointermove(document, runtime);
    wire_interactive_hover(document, runtime);
    wire_card_hover(document, runtime);
    wire_nav_hover(document, runtime);
    wire_button_clicks(document, runtime);
}
