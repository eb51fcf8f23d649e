//! Lifecycle wiring: eager or deferred first pass, debounced resize passes,
//! and the forced re-equalization entry point.

use crate::config::MatchHeightConfig;
use crate::debounce::Debounced;
use crate::equalize::{DomAdapter, equalize};
use anyhow::Error;
use selectors::{SelectorList, parse_selector_list};
use std::time::Instant;

/// Discrete host signals delivered on the single event thread.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// The document's initial structure is available.
    DocumentReady,
    /// The viewport was resized.
    Resize,
}

/// Owns the parsed selector, the configuration, and the resize debounce.
///
/// No ambient state: everything is bound at construction and passed
/// explicitly, and the host drives events and time through
/// [`MatchHeight::handle_event`] / [`MatchHeight::poll`].
#[derive(Debug)]
pub struct MatchHeight {
    selector: SelectorList,
    group_attr: String,
    config: MatchHeightConfig,
    resize_debounce: Debounced<()>,
    initialized: bool,
    waiting_for_ready: bool,
}

impl MatchHeight {
    /// Selector used when none (or an unparseable one) is supplied.
    pub const DEFAULT_SELECTOR: &'static str = "[data-mh]";

    /// Attribute whose value is the group key when the selector does not
    /// name one.
    pub const DEFAULT_GROUP_ATTR: &'static str = "data-mh";

    /// Create a matcher bound to `selector`. With `auto_init` set (the
    /// default) this runs the init sequence immediately.
    pub fn new<A: DomAdapter>(
        selector: &str,
        config: MatchHeightConfig,
        adapter: &mut A,
    ) -> Result<Self, Error> {
        let mut parsed = parse_selector_list(selector);
        if parsed.is_empty() {
            log::warn!(
                target: "matchheight",
                "selector {selector:?} parsed to nothing; falling back to {:?}",
                Self::DEFAULT_SELECTOR,
            );
            parsed = parse_selector_list(Self::DEFAULT_SELECTOR);
        }
        let group_attr = parsed
            .first_attribute_name()
            .unwrap_or(Self::DEFAULT_GROUP_ATTR)
            .to_owned();

        let mut matcher = Self {
            selector: parsed,
            group_attr,
            resize_debounce: Debounced::new(config.debounce_delay()),
            config,
            initialized: false,
            waiting_for_ready: false,
        };
        if matcher.config.auto_init {
            matcher.init(adapter)?;
        }
        Ok(matcher)
    }

    /// Create a matcher with the default selector and configuration.
    pub fn with_defaults<A: DomAdapter>(adapter: &mut A) -> Result<Self, Error> {
        Self::new(Self::DEFAULT_SELECTOR, MatchHeightConfig::default(), adapter)
    }

    /// Run the init sequence: equalize now if the document's structure is
    /// already available, otherwise defer until [`HostEvent::DocumentReady`].
    /// Safe to call more than once; only the first call does anything.
    pub fn init<A: DomAdapter>(&mut self, adapter: &mut A) -> Result<(), Error> {
        if self.initialized {
            return Ok(());
        }
        self.initialized = true;
        if adapter.is_loading() {
            self.waiting_for_ready = true;
        } else {
            self.match_height_by_data_attr(adapter)?;
        }
        Ok(())
    }

    /// Deliver a host event observed at `now`.
    pub fn handle_event<A: DomAdapter>(
        &mut self,
        adapter: &mut A,
        event: HostEvent,
        now: Instant,
    ) -> Result<(), Error> {
        match event {
            HostEvent::DocumentReady => {
                if self.waiting_for_ready {
                    self.waiting_for_ready = false;
                    self.match_height_by_data_attr(adapter)?;
                }
            }
            HostEvent::Resize => {
                if self.initialized
                    && self.config.on_resize
                    && self.resize_debounce.call((), now).is_some()
                {
                    self.match_height_by_data_attr(adapter)?;
                }
            }
        }
        Ok(())
    }

    /// Pump the resize debounce at `now`. Returns whether a pass ran.
    pub fn poll<A: DomAdapter>(&mut self, adapter: &mut A, now: Instant) -> Result<bool, Error> {
        if self.resize_debounce.poll(now).is_some() {
            self.match_height_by_data_attr(adapter)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Force an immediate equalization pass with the configured selector.
    ///
    /// The intended extension point after dynamically injecting content;
    /// nothing in this crate watches the tree for mutations.
    pub fn match_height_by_data_attr<A: DomAdapter>(&self, adapter: &mut A) -> Result<(), Error> {
        equalize(adapter, &self.selector, &self.group_attr)
    }

    /// The attribute whose value is used as the group key.
    pub fn group_attr(&self) -> &str {
        &self.group_attr
    }

    /// True once [`MatchHeight::init`] has run.
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The instant the pending resize pass becomes due, if one is armed.
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.resize_debounce.deadline()
    }
}
