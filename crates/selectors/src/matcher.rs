//! Selector matching against elements through an [`ElementAdapter`].

use crate::{CompoundSelector, ElementAdapter, SelectorList, SimpleSelector};

/// Match a selector list against an element. An element matches the list if
/// it matches any compound in it.
pub fn matches_selector_list<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    list: &SelectorList,
) -> bool {
    list.selectors
        .iter()
        .any(|compound| matches_compound(adapter, element, compound))
}

/// Match a compound selector against a single element. Every simple selector
/// in the compound must hold.
pub fn matches_compound<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    compound: &CompoundSelector,
) -> bool {
    compound.simples.iter().all(|simple| match simple {
        SimpleSelector::Universal => true,
        SimpleSelector::Type(type_name) => {
            type_name.is_empty() || adapter.tag_name(element) == type_name.as_str()
        }
        SimpleSelector::Class(class_name) => adapter.has_class(element, class_name.as_str()),
        SimpleSelector::IdSelector(id_value) => adapter
            .element_id(element)
            .is_some_and(|value| value == id_value.as_str()),
        SimpleSelector::AttrPresent(name) => adapter.attr(element, name.as_str()).is_some(),
        SimpleSelector::AttrEquals { name, value } => adapter
            .attr(element, name.as_str())
            .is_some_and(|attr_value| attr_value == value.as_str()),
    })
}
