use crate::constants::{
    BUTTON_PULSE_ANIMATION, BUTTON_PULSE_MS, ID_THEME_TOGGLE, SEL_THEME_ICON, STORAGE_THEME,
};
use crate::dom;
use portfolio_core::Theme;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

fn apply(document: &web::Document, theme: Theme) {
    if let Some(body) = document.body() {
        body.set_class_name(theme.body_class());
    }
    let icon = document
        .get_element_by_id(ID_THEME_TOGGLE)
        .and_then(|t| t.query_selector(SEL_THEME_ICON).ok().flatten());
    if let Some(icon) = icon {
        icon.set_text_content(Some(theme.toggle_icon()));
    }
}

/// Apply the stored theme and wire the toggle button.
pub fn init(document: &web::Document) {
    let current = Rc::new(Cell::new(Theme::from_stored(
        dom::storage_get(STORAGE_THEME).as_deref(),
    )));
    apply(document, current.get());

    let doc = document.clone();
    dom::add_click_listener(document, ID_THEME_TOGGLE, move || {
        let next = current.get().toggled();
        current.set(next);
        apply(&doc, next);
        dom::storage_set(STORAGE_THEME, next.as_str());
        if let Some(toggle) = doc.get_element_by_id(ID_THEME_TOGGLE) {
            dom::pulse(&toggle, BUTTON_PULSE_ANIMATION, BUTTON_PULSE_MS);
        }
        log::info!("[theme] switched to {}", next.as_str());
    });
}
