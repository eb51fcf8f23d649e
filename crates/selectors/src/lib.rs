//! Flat selector matching for candidate-element queries.
//!
//! This crate implements the minimal selector surface needed to pick
//! equalization candidates out of a document tree:
//! - Type, class, id, and attribute selectors (`[attr]` and `[attr=value]`)
//! - Compound selectors (sequences of simple selectors, no combinators)
//! - Comma-separated selector lists
//!
//! Matching is abstracted over [`ElementAdapter`] so any tree representation
//! can be queried.

mod matcher;
mod parser;

pub use matcher::{matches_compound, matches_selector_list};
pub use parser::{parse_compound_selector, parse_selector_list};

/// An adapter that abstracts element access for selector matching.
/// Implement this for your DOM layer.
pub trait ElementAdapter {
    type Handle: Copy + Eq;

    /// Tag name in ASCII lowercase (per HTML parsing conventions).
    fn tag_name(&self, element: Self::Handle) -> &str;

    /// Returns Some(id) if the element has an id attribute, else None.
    fn element_id(&self, element: Self::Handle) -> Option<&str>;

    /// True if the element has the given class token.
    fn has_class(&self, element: Self::Handle, class: &str) -> bool;

    /// Returns the attribute value if present.
    fn attr(&self, element: Self::Handle, name: &str) -> Option<&str>;
}

/// Simple selectors (subset).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimpleSelector {
    /// Universal selector `*`. Parsed but a no-op match.
    Universal,
    /// Type selector, e.g. `div`.
    Type(String),
    /// Class selector, e.g. `.card`.
    Class(String),
    /// ID selector, e.g. `#main`.
    IdSelector(String),
    /// Attribute presence selector `[attr]`.
    AttrPresent(String),
    /// Attribute equality selector `[attr=value]`. Value compared
    /// case-sensitively.
    AttrEquals { name: String, value: String },
}

/// A compound selector is a sequence of simple selectors (no combinators).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CompoundSelector {
    pub simples: Vec<SimpleSelector>,
}

impl CompoundSelector {
    /// Name of the first attribute-based simple selector, if any.
    ///
    /// Used by callers that derive a grouping attribute from the query,
    /// e.g. `[data-mh]` implies the `data-mh` attribute.
    pub fn first_attribute_name(&self) -> Option<&str> {
        self.simples.iter().find_map(|simple| match simple {
            SimpleSelector::AttrPresent(name)
            | SimpleSelector::AttrEquals { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }
}

/// A selector list separated by commas.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SelectorList {
    pub selectors: Vec<CompoundSelector>,
}

impl SelectorList {
    /// True if the list contains no selectors (nothing can ever match).
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Name of the first attribute-based simple selector across the list.
    pub fn first_attribute_name(&self) -> Option<&str> {
        self.selectors
            .iter()
            .find_map(CompoundSelector::first_attribute_name)
    }
}
