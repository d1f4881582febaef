//! DOM mutations expressed as data.
//!
//! Engines never hold DOM nodes. They address registered elements by
//! `ElementId`, nodes they created themselves by `SpawnId`, and push
//! `VisualOp`s that the web frontend applies in order.

/// Handle for a page element registered by the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Handle for a node an engine asked the frontend to create.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpawnId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    Element(ElementId),
    Spawned(SpawnId),
}

impl From<ElementId> for Node {
    fn from(id: ElementId) -> Self {
        Node::Element(id)
    }
}

impl From<SpawnId> for Node {
    fn from(id: SpawnId) -> Self {
        Node::Spawned(id)
    }
}

/// Which visibility observer an element should be detached from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Watcher {
    Reveal,
    Counter,
    Progress,
}

#[derive(Clone, Debug, PartialEq)]
pub enum VisualOp {
    AddClass {
        node: Node,
        class: &'static str,
    },
    RemoveClass {
        node: Node,
        class: &'static str,
    },
    SetText {
        node: Node,
        text: String,
    },
    SetStyle {
        node: Node,
        property: &'static str,
        value: String,
    },
    SetAttribute {
        node: Node,
        name: &'static str,
        value: String,
    },
    /// Create a `div` with `class`; `parent == None` means the document body.
    Spawn {
        id: SpawnId,
        parent: Option<Node>,
        class: &'static str,
        styles: Vec<(&'static str, String)>,
        html: Option<String>,
    },
    Despawn {
        id: SpawnId,
    },
    Unobserve {
        id: ElementId,
        watcher: Watcher,
    },
}

impl VisualOp {
    pub fn add_class(node: impl Into<Node>, class: &'static str) -> Self {
        VisualOp::AddClass {
            node: node.into(),
            class,
        }
    }

    pub fn remove_class(node: impl Into<Node>, class: &'static str) -> Self {
        VisualOp::RemoveClass {
            node: node.into(),
            class,
        }
    }

    pub fn set_style(node: impl Into<Node>, property: &'static str, value: String) -> Self {
        VisualOp::SetStyle {
            node: node.into(),
            property,
            value,
        }
    }

    pub fn set_text(node: impl Into<Node>, text: String) -> Self {
        VisualOp::SetText {
            node: node.into(),
            text,
        }
    }

    /// The node this op mutates, if it targets an existing one.
    pub fn target(&self) -> Option<Node> {
        match self {
            VisualOp::AddClass { node, .. }
            | VisualOp::RemoveClass { node, .. }
            | VisualOp::SetText { node, .. }
            | VisualOp::SetStyle { node, .. }
            | VisualOp::SetAttribute { node, .. } => Some(*node),
            VisualOp::Despawn { id } => Some(Node::Spawned(*id)),
            VisualOp::Unobserve { id, .. } => Some(Node::Element(*id)),
            VisualOp::Spawn { .. } => None,
        }
    }
}

/// Allocates `SpawnId`s for one engine.
///
/// Ids carry the engine's namespace in the upper bits so ids from different
/// engines never collide on the frontend.
#[derive(Clone, Debug)]
pub struct SpawnIds {
    namespace: u64,
    next: u64,
}

impl SpawnIds {
    pub fn new(namespace: u8) -> Self {
        Self {
            namespace: (namespace as u64) << 56,
            next: 0,
        }
    }

    pub fn next_id(&mut self) -> SpawnId {
        let id = SpawnId(self.namespace | self.next);
        self.next += 1;
        id
    }
}

/// Format a CSS length with trailing zeros dropped (`12.5px`, `40px`).
pub fn px(value: f64) -> String {
    format!("{}px", round_css(value))
}

pub fn percent(value: f64) -> String {
    format!("{}%", round_css(value))
}

pub fn seconds(value: f64) -> String {
    format!("{}s", round_css(value))
}

fn round_css(value: f64) -> f64 {
    // three decimals is plenty for layout and keeps the strings short
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
