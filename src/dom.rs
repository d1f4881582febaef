use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn storage_get(key: &str) -> Option<String> {
    storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn storage_set(key: &str, value: &str) {
    if let Some(s) = storage() {
        if s.set_item(key, value).is_err() {
            log::warn!("[dom] could not persist {key}");
        }
    }
}

/// Every element matching `selector` below `root`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_document(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .document_element()
        .map(|root| query_all(&root, selector))
        .unwrap_or_default()
}

pub fn set_text_by_id(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_html_by_id(document: &web::Document, element_id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_inner_html(html);
    }
}

/// Attach a listener that lives for the rest of the page.
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", move |_: web::Event| handler());
    }
}

/// One-shot page timer. Returns the handle for `clear_timeout`.
pub fn set_timeout(delay_ms: i32, handler: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let closure = Closure::once(handler);
    let handle = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        )
        .ok();
    closure.forget();
    handle
}

pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Play the button pulse animation once.
pub fn pulse(el: &web::Element, animation: &str, duration_ms: i32) {
    let Some(el) = el.dyn_ref::<web::HtmlElement>() else {
        return;
    };
    _ = el.style().set_property("animation", animation);
    let el = el.clone();
    set_timeout(duration_ms, move || {
        _ = el.style().set_property("animation", "");
    });
}
