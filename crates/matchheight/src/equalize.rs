//! The equalization pass: group by key, measure natural heights, apply the
//! group maximum.

use anyhow::Error;
use selectors::SelectorList;
use std::collections::HashMap;

/// An adapter that abstracts document access for the equalizer.
/// Implement this for your DOM layer.
pub trait DomAdapter {
    type Handle: Copy + Eq;

    /// True while the document's initial structure is still being built.
    fn is_loading(&self) -> bool;

    /// Elements matching the selector, in document order.
    fn select(&self, selector: &SelectorList) -> Vec<Self::Handle>;

    /// The element's group key: the value of the grouping attribute.
    fn group_key(&self, element: Self::Handle, attr: &str) -> Option<String>;

    /// Clear any height override so the element renders at natural height.
    fn reset_height(&mut self, element: Self::Handle) -> Result<(), Error>;

    /// The element's current rendered height in whole pixels.
    fn measure_height(&self, element: Self::Handle) -> Result<u32, Error>;

    /// Apply an explicit pixel height override.
    fn apply_height(&mut self, element: Self::Handle, px: u32) -> Result<(), Error>;
}

/// Equalize the heights of grouped elements.
///
/// Matches `selector` against the document, partitions the matches by the
/// value of `group_attr`, and per group: resets every member to natural
/// height and measures it, then writes the group maximum back to every
/// member. The two sub-passes never interleave within a group, so every
/// measurement sees untouched natural heights.
///
/// Matching nothing is a valid outcome: one informational notice is logged
/// and no heights are written. Read/write failures on invalid handles are
/// host faults and propagate.
pub fn equalize<A: DomAdapter>(
    adapter: &mut A,
    selector: &SelectorList,
    group_attr: &str,
) -> Result<(), Error> {
    let elements = adapter.select(selector);
    if elements.is_empty() {
        log::info!(
            target: "matchheight",
            "selector matched no elements; nothing to equalize"
        );
        return Ok(());
    }

    // Group elements by key, preserving document order within each bucket.
    let mut groups: HashMap<String, Vec<A::Handle>> = HashMap::new();
    for element in elements {
        let Some(key) = adapter.group_key(element, group_attr) else {
            continue;
        };
        groups.entry(key).or_default().push(element);
    }

    for (key, members) in &groups {
        // Reset pass: every member back to natural height, tracking the max.
        let mut max_height = 0u32;
        for &element in members {
            adapter.reset_height(element)?;
            let height = adapter.measure_height(element)?;
            max_height = max_height.max(height);
        }

        // Apply pass: only after the whole group has been measured.
        for &element in members {
            adapter.apply_height(element, max_height)?;
        }

        log::debug!(
            target: "matchheight",
            "group '{key}': {count} elements set to {max_height}px",
            count = members.len(),
        );
    }

    Ok(())
}
