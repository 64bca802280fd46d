//! Arena-backed document tree.
//!
//! Nodes live in generational slots. Removing element children frees their
//! subtrees, and [`Document::collect_garbage`] frees anything no longer
//! reachable from the root. A [`NodeId`] whose node was freed stays stale:
//! every lookup through it answers as if the node did not exist, even after
//! its slot is reused.

use std::collections::HashSet;
use std::fmt;

use slotmap::{SlotMap, new_key_type};

use super::events::{Event, EventKind, Listener, same_listener};
use super::selector::Selector;

new_key_type! {
    /// Handle to one node owned by a [`Document`].
    pub struct NodeId;
}

#[derive(Debug, Clone, Default)]
pub(super) struct ElementData {
    pub(super) tag: String,
    pub(super) attributes: Vec<(String, String)>,
    pub(super) classes: Vec<String>,
    pub(super) disabled: bool,
    pub(super) value: Option<String>,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

pub(super) enum NodeData {
    Element(ElementData),
    Text(String),
    Fragment,
}

pub(super) struct Node {
    pub(super) data: NodeData,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
    listeners: Vec<(EventKind, Listener)>,
}

impl Node {
    const fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            children: Vec::new(),
            listeners: Vec::new(),
        }
    }

    const fn element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            NodeData::Text(_) | NodeData::Fragment => None,
        }
    }

    const fn element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(element) => Some(element),
            NodeData::Text(_) | NodeData::Fragment => None,
        }
    }
}

/// In-memory document: an `html` root holding a `body`.
pub struct Document {
    nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    body: NodeId,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("root", &self.root)
            .field("body", &self.body)
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only `html` and `body`.
    #[must_use]
    pub fn new() -> Self {
        let mut document = Self {
            nodes: SlotMap::with_key(),
            root: NodeId::default(),
            body: NodeId::default(),
        };
        let root = document.create_element("html");
        let body = document.create_element("body");
        document.root = root;
        document.body = body;
        document.append_child(root, body);
        document
    }

    /// Create the directory host page: a `select#selectMenu` and an empty
    /// `main` region inside `body`.
    #[must_use]
    pub fn page_skeleton() -> Self {
        let mut document = Self::new();
        let body = document.body;
        let header = document.create_element("header");
        let select = document.create_element("select");
        document.set_attribute(select, "id", "selectMenu");
        document.append_child(header, select);
        document.append_child(body, header);
        let main = document.create_element("main");
        document.append_child(body, main);
        document
    }

    /// The `html` root element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// The `body` element.
    #[must_use]
    pub const fn body(&self) -> NodeId {
        self.body
    }

    /// Number of live nodes, attached or not.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Return whether `id` still refers to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    fn insert(&mut self, data: NodeData) -> NodeId {
        self.nodes.insert(Node::new(data))
    }

    pub(super) fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Free `id` and its descendants. The root and body are never freed.
    fn release(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if next == self.root || next == self.body {
                continue;
            }
            if let Some(node) = self.nodes.remove(next) {
                pending.extend(node.children);
            }
        }
    }

    /// Free every node that is not reachable from the root.
    ///
    /// Returns how many nodes were freed. Detached nodes a caller still means
    /// to append must be attached before this runs.
    pub fn collect_garbage(&mut self) -> usize {
        let mut reachable: HashSet<NodeId> = self.descendants(self.root).into_iter().collect();
        reachable.insert(self.root);
        let before = self.nodes.len();
        self.nodes.retain(|id, _| reachable.contains(&id));
        before - self.nodes.len()
    }

    fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.node(id).and_then(Node::element)
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.node_mut(id).and_then(Node::element_mut)
    }

    /// Create a detached element with the given tag.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.insert(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a detached text node.
    pub fn create_text_node(&mut self, text: impl Into<String>) -> NodeId {
        self.insert(NodeData::Text(text.into()))
    }

    /// Create an empty document fragment.
    pub fn create_document_fragment(&mut self) -> NodeId {
        self.insert(NodeData::Fragment)
    }

    /// Return whether `id` is an element node.
    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    /// Return whether `id` is a document fragment.
    #[must_use]
    pub fn is_fragment(&self, id: NodeId) -> bool {
        self.node(id)
            .is_some_and(|node| matches!(node.data, NodeData::Fragment))
    }

    /// Lower-case tag name of an element.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|element| element.tag.as_str())
    }

    /// Parent of a node, if attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// Child nodes in order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Element children in order, skipping text nodes.
    #[must_use]
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.is_element(*child))
            .collect()
    }

    /// Return whether `id` is reachable from the document root.
    #[must_use]
    pub fn is_connected(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == self.root {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self.parent(candidate);
        }
        false
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.parent(child) else {
            return;
        };
        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.children.retain(|candidate| *candidate != child);
        }
        if let Some(child_node) = self.node_mut(child) {
            child_node.parent = None;
        }
    }

    /// Append `child` to `parent`, moving it out of its current parent.
    ///
    /// Appending a fragment moves the fragment's children in order and leaves
    /// the fragment empty. Appending a node into itself or one of its
    /// descendants, or into a text node, is ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> NodeId {
        let parent_accepts_children = self
            .node(parent)
            .is_some_and(|node| !matches!(node.data, NodeData::Text(_)));
        if !parent_accepts_children
            || self.node(child).is_none()
            || self.is_inclusive_ancestor(child, parent)
        {
            return child;
        }

        if self.is_fragment(child) {
            let moved = self.children(child).to_vec();
            for grandchild in moved {
                self.append_child(parent, grandchild);
            }
            return child;
        }

        self.detach(child);
        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.children.push(child);
        }
        if let Some(child_node) = self.node_mut(child) {
            child_node.parent = Some(parent);
        }
        child
    }

    /// Remove `child` from `parent`; `None` when it is not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Option<NodeId> {
        if self.parent(child) != Some(parent) {
            return None;
        }
        self.detach(child);
        Some(child)
    }

    /// Remove every element child of `parent`, last first. Text children stay.
    ///
    /// The removed subtrees are freed, so their ids go stale.
    pub fn remove_element_children(&mut self, parent: NodeId) {
        while let Some(last) = self.element_children(parent).last().copied() {
            self.detach(last);
            self.release(last);
        }
    }

    /// Replace the children of `id` with a single text node.
    ///
    /// Empty text leaves the node without children. A lone text child is
    /// rewritten in place; any other children are freed.
    pub fn set_text_content(&mut self, id: NodeId, text: impl Into<String>) {
        let text = text.into();
        if let Some(NodeData::Text(existing)) = self.node_mut(id).map(|node| &mut node.data) {
            *existing = text;
            return;
        }
        if let [only] = self.children(id) {
            let only = *only;
            if !text.is_empty() {
                if let Some(NodeData::Text(existing)) =
                    self.node_mut(only).map(|node| &mut node.data)
                {
                    *existing = text;
                    return;
                }
            }
        }
        for child in self.children(id).to_vec() {
            self.detach(child);
            self.release(child);
        }
        if !text.is_empty() {
            let text_node = self.create_text_node(text);
            self.append_child(id, text_node);
        }
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        if let NodeData::Text(text) = &node.data {
            out.push_str(text);
        }
        for child in &node.children {
            self.collect_text(*child, out);
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        if name == "class" {
            self.set_class_name(id, &value);
            return;
        }
        let Some(element) = self.element_mut(id) else {
            return;
        };
        if let Some(slot) = element
            .attributes
            .iter_mut()
            .find(|(key, _)| key == name)
        {
            slot.1 = value;
        } else {
            element.attributes.push((name.to_owned(), value));
        }
    }

    /// Read an attribute value.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|element| element.attribute(name))
    }

    /// Set `data-{key}`.
    pub fn set_data(&mut self, id: NodeId, key: &str, value: impl Into<String>) {
        self.set_attribute(id, &format!("data-{key}"), value);
    }

    /// Read `data-{key}`.
    #[must_use]
    pub fn data(&self, id: NodeId, key: &str) -> Option<&str> {
        self.attribute(id, &format!("data-{key}"))
    }

    /// Replace the class list with the whitespace-separated `class_name`.
    pub fn set_class_name(&mut self, id: NodeId, class_name: &str) {
        if let Some(element) = self.element_mut(id) {
            element.classes.clear();
            for class in class_name.split_whitespace() {
                if !element.classes.iter().any(|existing| existing == class) {
                    element.classes.push(class.to_owned());
                }
            }
        }
    }

    /// Space-joined class list.
    #[must_use]
    pub fn class_name(&self, id: NodeId) -> String {
        self.element(id)
            .map(|element| element.classes.join(" "))
            .unwrap_or_default()
    }

    /// Add a class if it is not already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(element) = self.element_mut(id) {
            if !element.classes.iter().any(|existing| existing == class) {
                element.classes.push(class.to_owned());
            }
        }
    }

    /// Return whether the element carries `class`.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id)
            .is_some_and(|element| element.classes.iter().any(|existing| existing == class))
    }

    /// Toggle `class`; returns whether it is present afterwards.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        let Some(element) = self.element_mut(id) else {
            return false;
        };
        if let Some(position) = element.classes.iter().position(|existing| existing == class) {
            element.classes.remove(position);
            false
        } else {
            element.classes.push(class.to_owned());
            true
        }
    }

    /// Enable or disable a form control.
    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) {
        if let Some(element) = self.element_mut(id) {
            element.disabled = disabled;
        }
    }

    /// Return whether a form control is disabled.
    #[must_use]
    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.element(id).is_some_and(|element| element.disabled)
    }

    /// Set the current value of a form control.
    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) {
        if let Some(element) = self.element_mut(id) {
            element.value = Some(value.into());
        }
    }

    /// Current value of a form control.
    ///
    /// Without an explicit value a `select` reports its first option's
    /// `value`; other elements report their `value` attribute.
    #[must_use]
    pub fn value(&self, id: NodeId) -> String {
        let Some(element) = self.element(id) else {
            return String::new();
        };
        if let Some(value) = &element.value {
            return value.clone();
        }
        if element.tag == "select" {
            return self
                .query_selector_within(id, &Selector::tag("option"))
                .and_then(|option| self.attribute(option, "value"))
                .unwrap_or_default()
                .to_owned();
        }
        element.attribute("value").unwrap_or_default().to_owned()
    }

    /// Register `listener` for `kind` events on `id`.
    ///
    /// The same reference may be registered only once per event kind.
    pub fn add_event_listener(&mut self, id: NodeId, kind: EventKind, listener: Listener) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let duplicate = node
            .listeners
            .iter()
            .any(|(existing_kind, existing)| *existing_kind == kind && same_listener(existing, &listener));
        if !duplicate {
            node.listeners.push((kind, listener));
        }
    }

    /// Remove exactly `listener` for `kind` events on `id`.
    ///
    /// Returns whether a registration was removed.
    pub fn remove_event_listener(&mut self, id: NodeId, kind: EventKind, listener: &Listener) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        let before = node.listeners.len();
        node.listeners
            .retain(|(existing_kind, existing)| !(*existing_kind == kind && same_listener(existing, listener)));
        node.listeners.len() != before
    }

    /// Number of listeners registered for `kind` on `id`.
    #[must_use]
    pub fn listener_count(&self, id: NodeId, kind: EventKind) -> usize {
        self.node(id).map_or(0, |node| {
            node.listeners
                .iter()
                .filter(|(existing_kind, _)| *existing_kind == kind)
                .count()
        })
    }

    /// Dispatch a `kind` event on `id` and return how many listeners ran.
    ///
    /// Listeners registered at dispatch time run in registration order.
    /// Disabled controls emit no events.
    pub fn dispatch(&mut self, id: NodeId, kind: EventKind) -> usize {
        if self.is_disabled(id) {
            return 0;
        }
        let listeners: Vec<Listener> = self.node(id).map_or_else(Vec::new, |node| {
            node.listeners
                .iter()
                .filter(|(existing_kind, _)| *existing_kind == kind)
                .map(|(_, listener)| Listener::clone(listener))
                .collect()
        });
        let event = Event::new(kind, id);
        for listener in &listeners {
            listener(self, &event);
        }
        listeners.len()
    }

    /// First connected element matching `selector`, in document order.
    #[must_use]
    pub fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
        self.query_selector_within(self.root, selector)
    }

    /// First descendant of `scope` matching `selector`, in document order.
    #[must_use]
    pub fn query_selector_within(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|candidate| self.matches(*candidate, selector))
    }

    /// All connected elements matching `selector`, in document order.
    #[must_use]
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.query_selector_all_within(self.root, selector)
    }

    /// All descendants of `scope` matching `selector`, in document order.
    #[must_use]
    pub fn query_selector_all_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|candidate| self.matches(*candidate, selector))
            .collect()
    }

    fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        self.element(id).is_some_and(|element| {
            selector.matches(&element.tag, |name| element.attribute(name))
        })
    }

    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
