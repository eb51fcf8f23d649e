use crate::style;
use anyhow::{Error, bail};
use indextree::{Arena, NodeId};
use selectors::{ElementAdapter, SelectorList, matches_selector_list};
use smallvec::SmallVec;

/// Document readiness, mirroring the host's `readyState` signal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ReadyState {
    /// The initial structure is still being built.
    #[default]
    Loading,
    /// The initial structure is available.
    Interactive,
    /// All resources have finished loading.
    Complete,
}

#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    #[default]
    Document,
    Element {
        tag: String,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct DomNode {
    pub kind: NodeKind,
    pub attrs: SmallVec<(String, String), 4>,
    /// Height of the element's content when no override is applied,
    /// in whole pixels. Supplied by the host; this crate does no layout.
    natural_height: u32,
}

impl DomNode {
    fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }
}

/// A document tree of elements and text, held in an arena.
#[derive(Debug)]
pub struct Document {
    arena: Arena<DomNode>,
    root: NodeId,
    ready_state: ReadyState,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        Self {
            root: arena.new_node(DomNode::default()),
            arena,
            ready_state: ReadyState::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub const fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn set_ready_state(&mut self, state: ReadyState) {
        self.ready_state = state;
    }

    /// Append a new element under `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId, Error> {
        self.ensure_live(parent)?;
        let child = self.arena.new_node(DomNode {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
            },
            ..DomNode::default()
        });
        parent.checked_append(child, &mut self.arena)?;
        Ok(child)
    }

    /// Append a new text node under `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId, Error> {
        self.ensure_live(parent)?;
        let child = self.arena.new_node(DomNode {
            kind: NodeKind::Text {
                text: text.to_owned(),
            },
            ..DomNode::default()
        });
        parent.checked_append(child, &mut self.arena)?;
        Ok(child)
    }

    /// Remove a node and its subtree from the document.
    pub fn remove(&mut self, node: NodeId) -> Result<(), Error> {
        self.ensure_live(node)?;
        if node == self.root {
            bail!("cannot remove the document root");
        }
        node.remove_subtree(&mut self.arena);
        Ok(())
    }

    /// Set (or replace) an attribute on an element.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), Error> {
        let name = name.to_ascii_lowercase();
        let dom_node = self.element_mut(node)?;
        if let Some(existing) = dom_node
            .attrs
            .iter_mut()
            .find(|(attr_name, _)| *attr_name == name)
        {
            existing.1 = value.to_owned();
        } else {
            dom_node.attrs.push((name, value.to_owned()));
        }
        Ok(())
    }

    /// Read an attribute from an element, if present.
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.live_node(node)?
            .attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.live_node(node)?.kind {
            NodeKind::Element { tag } => Some(tag.as_str()),
            NodeKind::Document | NodeKind::Text { .. } => None,
        }
    }

    /// Record the element's natural content height in whole pixels.
    pub fn set_natural_height(&mut self, node: NodeId, px: u32) -> Result<(), Error> {
        self.element_mut(node)?.natural_height = px;
        Ok(())
    }

    /// Natural content height; 0 for unknown or non-element nodes.
    pub fn natural_height(&self, node: NodeId) -> u32 {
        self.live_node(node).map_or(0, |dom_node| dom_node.natural_height)
    }

    /// The explicit pixel height from the element's inline style, if one is
    /// applied (`height: auto` and absent heights both yield None).
    pub fn height_override(&self, node: NodeId) -> Option<u32> {
        let value = self.style_property(node, "height")?;
        style::parse_px_length(&value)
    }

    /// Rendered height: the inline-style override when applied, otherwise
    /// the natural content height. Fails on an invalid or removed handle.
    pub fn measured_height(&self, node: NodeId) -> Result<u32, Error> {
        if self.live_node(node).is_none() {
            bail!("measured_height on a detached or invalid node");
        }
        Ok(self
            .height_override(node)
            .unwrap_or_else(|| self.natural_height(node)))
    }

    /// Read one property out of the element's `style` attribute.
    pub fn style_property(&self, node: NodeId, property: &str) -> Option<String> {
        let declarations = style::parse_style_attribute(self.attr(node, "style")?);
        style::get_property(&declarations, property).map(str::to_owned)
    }

    /// Upsert one property in the element's `style` attribute.
    pub fn set_style_property(
        &mut self,
        node: NodeId,
        property: &str,
        value: &str,
    ) -> Result<(), Error> {
        let mut declarations =
            style::parse_style_attribute(self.attr(node, "style").unwrap_or(""));
        style::set_property(&mut declarations, property, value);
        let serialized = style::serialize_declarations(&declarations);
        self.set_attr(node, "style", &serialized)
    }

    /// Apply an explicit pixel height override (`el.style.height = "{px}px"`).
    pub fn set_height_px(&mut self, node: NodeId, px: u32) -> Result<(), Error> {
        let value = format!("{px}px");
        self.set_style_property(node, "height", &value)
    }

    /// Reset the element to its natural height (`el.style.height = "auto"`).
    pub fn set_height_auto(&mut self, node: NodeId) -> Result<(), Error> {
        self.set_style_property(node, "height", "auto")
    }

    /// All elements in document order (depth-first, excluding the document
    /// node itself).
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.root.descendants(&self.arena).filter(|&id| {
            self.arena
                .get(id)
                .is_some_and(|node| node.get().is_element())
        })
    }

    /// Elements matching a selector list, in document order.
    pub fn select(&self, selector: &SelectorList) -> Vec<NodeId> {
        self.elements()
            .filter(|&element| matches_selector_list(self, element, selector))
            .collect()
    }

    fn live_node(&self, node: NodeId) -> Option<&DomNode> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .map(indextree::Node::get)
    }

    fn ensure_live(&self, node: NodeId) -> Result<(), Error> {
        if self
            .arena
            .get(node)
            .is_none_or(indextree::Node::is_removed)
        {
            bail!("node is not part of this document");
        }
        Ok(())
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut DomNode, Error> {
        let Some(entry) = self.arena.get_mut(node) else {
            bail!("node is not part of this document");
        };
        if entry.is_removed() {
            bail!("node was removed from this document");
        }
        let dom_node = entry.get_mut();
        if !dom_node.is_element() {
            bail!("operation only applies to element nodes");
        }
        Ok(dom_node)
    }
}

impl ElementAdapter for Document {
    type Handle = NodeId;

    fn tag_name(&self, element: NodeId) -> &str {
        Self::tag_name(self, element).unwrap_or("")
    }

    fn element_id(&self, element: NodeId) -> Option<&str> {
        self.attr(element, "id")
    }

    fn has_class(&self, element: NodeId, class: &str) -> bool {
        self.attr(element, "class")
            .is_some_and(|value| value.split_ascii_whitespace().any(|token| token == class))
    }

    fn attr(&self, element: NodeId, name: &str) -> Option<&str> {
        Self::attr(self, element, name)
    }
}
