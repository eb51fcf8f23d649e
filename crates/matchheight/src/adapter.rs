//! [`DomAdapter`] implementation for the in-tree [`dom::Document`].

use crate::equalize::DomAdapter;
use anyhow::Error;
use dom::{Document, NodeId, ReadyState};
use selectors::SelectorList;

impl DomAdapter for Document {
    type Handle = NodeId;

    fn is_loading(&self) -> bool {
        self.ready_state() == ReadyState::Loading
    }

    fn select(&self, selector: &SelectorList) -> Vec<NodeId> {
        Self::select(self, selector)
    }

    fn group_key(&self, element: NodeId, attr: &str) -> Option<String> {
        self.attr(element, attr).map(str::to_owned)
    }

    fn reset_height(&mut self, element: NodeId) -> Result<(), Error> {
        self.set_height_auto(element)
    }

    fn measure_height(&self, element: NodeId) -> Result<u32, Error> {
        self.measured_height(element)
    }

    fn apply_height(&mut self, element: NodeId, px: u32) -> Result<(), Error> {
        self.set_height_px(element, px)
    }
}
