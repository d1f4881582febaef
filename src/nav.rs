use crate::constants::*;
use crate::dom;
use portfolio_core::nav::{link_targets, MobileMenu, NavState, Section};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn set_class(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

fn set_menu(document: &web::Document, open: bool) {
    for id in [ID_NAV_MENU, ID_NAV_TOGGLE] {
        if let Some(el) = document.get_element_by_id(id) {
            set_class(&el, CLASS_ACTIVE, open);
        }
    }
}

/// Applies the nav state for the current scroll position, touching only
/// what changed.
pub struct NavUpdater {
    document: web::Document,
    last: RefCell<Option<NavState>>,
}

impl NavUpdater {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            last: RefCell::new(None),
        }
    }

    pub fn update(&self, scroll_y: f64) {
        let section_els: Vec<(String, f64)> = dom::query_document(&self.document, SEL_SECTIONS)
            .into_iter()
            .filter_map(|el| {
                let top = el.dyn_ref::<web::HtmlElement>()?.offset_top() as f64;
                Some((el.id(), top))
            })
            .collect();
        let sections: Vec<Section<'_>> = section_els
            .iter()
            .map(|(id, top)| Section { id, top: *top })
            .collect();
        let state = NavState::at(&sections, scroll_y);

        let mut last = self.last.borrow_mut();
        let prev = last.as_ref();
        if prev.map(|p| p.scrolled) != Some(state.scrolled) {
            if let Some(navbar) = self.document.get_element_by_id(ID_NAVBAR) {
                set_class(&navbar, CLASS_SCROLLED, state.scrolled);
            }
        }
        if prev.map(|p| p.floating_contact) != Some(state.floating_contact) {
            for btn in dom::query_document(&self.document, &format!(".{CLASS_FLOATING_CONTACT}")) {
                set_class(&btn, CLASS_SHOW, state.floating_contact);
            }
        }
        if prev.map(|p| &p.active) != Some(&state.active) {
            let active = state.active.as_deref().unwrap_or_default();
            for link in dom::query_document(&self.document, SEL_NAV_LINKS) {
                let on = !active.is_empty()
                    && link
                        .get_attribute("href")
                        .is_some_and(|href| link_targets(&href, active));
                set_class(&link, CLASS_ACTIVE, on);
            }
        }
        *last = Some(state);
    }
}

fn wire_smooth_anchors(document: &web::Document) {
    for anchor in dom::query_document(document, r##"a[href^="#"]"##) {
        let doc = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::add_listener(&anchor, "click", move |ev: web::Event| {
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            ev.prevent_default();
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
}

/// Wire the mobile menu and in-page anchors. Returns the scroll updater.
pub fn init(document: &web::Document) -> Rc<NavUpdater> {
    let menu = Rc::new(Cell::new(MobileMenu::default()));

    let doc = document.clone();
    let toggle_menu = menu.clone();
    dom::add_click_listener(document, ID_NAV_TOGGLE, move || {
        let mut m = toggle_menu.get();
        let open = m.toggle();
        toggle_menu.set(m);
        set_menu(&doc, open);
    });

    for link in dom::query_document(document, SEL_NAV_LINKS) {
        let doc = document.clone();
        let menu = menu.clone();
        dom::add_listener(&link, "click", move |_: web::Event| {
            let mut m = menu.get();
            m.close();
            menu.set(m);
            set_menu(&doc, false);
        });
    }
    wire_smooth_anchors(document);

    let updater = Rc::new(NavUpdater::new(document.clone()));
    updater.update(dom::scroll_y());
    updater
}
