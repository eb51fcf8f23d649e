//! Host-built document tree the equalizer operates on.
//!
//! The tree is an `indextree` arena of [`DomNode`]s. Elements carry
//! attributes, a host-supplied natural content height, and an optional
//! height override stored as the `height` property of their `style`
//! attribute (the same place a browser's `el.style.height` write lands).

pub mod style;
mod tree;

pub use indextree::NodeId;
pub use tree::{Document, DomNode, NodeKind, ReadyState};
