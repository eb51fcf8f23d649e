//! Equalizes the rendered height of grouped elements.
//!
//! Elements carrying a shared attribute value (the group key, default
//! `data-mh`) are partitioned by key; each group is reset to natural height,
//! measured, and assigned the group's maximum as an explicit pixel height.
//! A debounced trigger re-applies the pass on host resize events.
//!
//! The host drives everything from its single event thread: it reports
//! [`HostEvent`]s to [`MatchHeight::handle_event`] and pumps
//! [`MatchHeight::poll`] so the trailing debounce edge can fire. Forcing a
//! pass after injecting content is done with
//! [`MatchHeight::match_height_by_data_attr`]; no mutation observation is
//! performed.

mod adapter;
mod config;
mod debounce;
mod equalize;
mod state;

pub use config::MatchHeightConfig;
pub use debounce::Debounced;
pub use equalize::{DomAdapter, equalize};
pub use state::{HostEvent, MatchHeight};
