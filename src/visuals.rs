//! Applies engine [`VisualOp`]s to the live document.

use crate::constants::FX_ID_ATTR;
use crate::observers::Watchers;
use fnv::FnvHashMap;
use portfolio_core::visual::{ElementId, Node, SpawnId, VisualOp};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Two-way mapping between page elements and engine ids. Page elements are
/// tagged with `data-fx-id` so the same node always gets the same id.
#[derive(Default)]
pub struct DomRegistry {
    elements: FnvHashMap<ElementId, web::Element>,
    spawned: FnvHashMap<SpawnId, web::Element>,
    next: u32,
}

impl DomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for `el`, assigning one on first sight.
    pub fn id_of(&mut self, el: &web::Element) -> ElementId {
        if let Some(id) = self.lookup(el) {
            return id;
        }
        let id = ElementId(self.next);
        self.next += 1;
        _ = el.set_attribute(FX_ID_ATTR, &id.0.to_string());
        self.elements.insert(id, el.clone());
        id
    }

    /// Id for an element that was registered earlier.
    pub fn lookup(&self, el: &web::Element) -> Option<ElementId> {
        let id = el.get_attribute(FX_ID_ATTR)?.parse().ok().map(ElementId)?;
        self.elements.contains_key(&id).then_some(id)
    }

    pub fn element(&self, id: ElementId) -> Option<&web::Element> {
        self.elements.get(&id)
    }

    pub fn spawned_count(&self) -> usize {
        self.spawned.len()
    }

    fn resolve(&self, node: &Node) -> Option<&web::Element> {
        match node {
            Node::Element(id) => self.elements.get(id),
            Node::Spawned(id) => self.spawned.get(id),
        }
    }

    /// Drain `ops` into the document. Ops for unknown nodes are skipped.
    pub fn apply(
        &mut self,
        document: &web::Document,
        ops: &mut Vec<VisualOp>,
        watchers: Option<&Watchers>,
    ) {
        for op in ops.drain(..) {
            match op {
                VisualOp::AddClass { node, class } => {
                    if let Some(el) = self.resolve(&node) {
                        _ = el.class_list().add_1(class);
                    }
                }
                VisualOp::RemoveClass { node, class } => {
                    if let Some(el) = self.resolve(&node) {
                        _ = el.class_list().remove_1(class);
                    }
                }
                VisualOp::SetText { node, text } => {
                    if let Some(el) = self.resolve(&node) {
                        el.set_text_content(Some(&text));
                    }
                }
                VisualOp::SetStyle {
                    node,
                    property,
                    value,
                } => {
                    if let Some(el) = self.resolve(&node) {
                        set_style(el, property, &value);
                    }
                }
                VisualOp::SetAttribute { node, name, value } => {
                    if let Some(el) = self.resolve(&node) {
                        _ = el.set_attribute(name, &value);
                    }
                }
                VisualOp::Spawn {
                    id,
                    parent,
                    class,
                    styles,
                    html,
                } => self.spawn(document, id, parent, class, &styles, html.as_deref()),
                VisualOp::Despawn { id } => {
                    if let Some(el) = self.spawned.remove(&id) {
                        el.remove();
                    }
                }
                VisualOp::Unobserve { id, watcher } => {
                    if let (Some(watchers), Some(el)) = (watchers, self.elements.get(&id)) {
                        watchers.unobserve(watcher, el);
                    }
                }
            }
        }
    }

    fn spawn(
        &mut self,
        document: &web::Document,
        id: SpawnId,
        parent: Option<Node>,
        class: &str,
        styles: &[(&'static str, String)],
        html: Option<&str>,
    ) {
        let Ok(el) = document.create_element("div") else {
            return;
        };
        el.set_class_name(class);
        for (property, value) in styles {
            set_style(&el, property, value);
        }
        if let Some(html) = html {
            el.set_inner_html(html);
        }
        let parent: Option<web::Element> = match parent {
            Some(node) => self.resolve(&node).cloned(),
            None => document.body().map(web::Element::from),
        };
        match parent {
            Some(parent) => {
                _ = parent.append_child(&el);
                self.spawned.insert(id, el);
            }
            None => log::debug!("[effects] no parent for spawn {:?}", id),
        }
    }
}

fn set_style(el: &web::Element, property: &str, value: &str) {
    let Some(el) = el.dyn_ref::<web::HtmlElement>() else {
        return;
    };
    let style = el.style();
    if value.is_empty() {
        _ = style.remove_property(property);
    } else {
        _ = style.set_property(property, value);
    }
}
