use dom::{Document, NodeId, ReadyState};
use matchheight::{HostEvent, MatchHeight, MatchHeightConfig};
use std::time::{Duration, Instant};

fn document(ready: ReadyState) -> (Document, NodeId) {
    let mut doc = Document::new();
    doc.set_ready_state(ready);
    let body = doc.append_element(doc.root(), "body").unwrap();
    (doc, body)
}

fn grouped(doc: &mut Document, parent: NodeId, key: &str, natural: u32) -> NodeId {
    let element = doc.append_element(parent, "div").unwrap();
    doc.set_attr(element, "data-mh", key).unwrap();
    doc.set_natural_height(element, natural).unwrap();
    element
}

fn millis(base: Instant, offset: u64) -> Instant {
    base + Duration::from_millis(offset)
}

#[test]
fn auto_init_equalizes_an_interactive_document() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (mut doc, body) = document(ReadyState::Interactive);
    let short = grouped(&mut doc, body, "card", 40);
    grouped(&mut doc, body, "card", 120);

    let matcher = MatchHeight::with_defaults(&mut doc).unwrap();
    assert!(matcher.is_initialized());
    assert_eq!(doc.measured_height(short).unwrap(), 120);
}

#[test]
fn init_defers_until_document_ready_while_loading() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (mut doc, body) = document(ReadyState::Loading);
    let short = grouped(&mut doc, body, "card", 40);
    grouped(&mut doc, body, "card", 120);

    let mut matcher = MatchHeight::with_defaults(&mut doc).unwrap();
    // still loading: no pass has run yet
    assert_eq!(doc.height_override(short), None);

    doc.set_ready_state(ReadyState::Interactive);
    matcher
        .handle_event(&mut doc, HostEvent::DocumentReady, Instant::now())
        .unwrap();
    assert_eq!(doc.measured_height(short).unwrap(), 120);

    // the deferred pass runs exactly once
    doc.set_natural_height(short, 300).unwrap();
    matcher
        .handle_event(&mut doc, HostEvent::DocumentReady, Instant::now())
        .unwrap();
    assert_eq!(doc.height_override(short), Some(120));
}

#[test]
fn init_is_idempotent() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (mut doc, body) = document(ReadyState::Interactive);
    let short = grouped(&mut doc, body, "card", 40);
    grouped(&mut doc, body, "card", 120);

    let mut matcher = MatchHeight::with_defaults(&mut doc).unwrap();
    doc.set_natural_height(short, 500).unwrap();
    matcher.init(&mut doc).unwrap();
    // the second init did not re-run the pass
    assert_eq!(doc.height_override(short), Some(120));
}

#[test]
fn resize_equalizes_after_the_quiet_period() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (mut doc, body) = document(ReadyState::Interactive);
    let short = grouped(&mut doc, body, "card", 40);
    let tall = grouped(&mut doc, body, "card", 120);

    let mut matcher = MatchHeight::with_defaults(&mut doc).unwrap();
    assert_eq!(doc.measured_height(short).unwrap(), 120);

    // content reflows on resize: the tall card shrinks
    doc.set_natural_height(tall, 60).unwrap();
    let base = Instant::now();
    matcher
        .handle_event(&mut doc, HostEvent::Resize, millis(base, 0))
        .unwrap();
    matcher
        .handle_event(&mut doc, HostEvent::Resize, millis(base, 50))
        .unwrap();

    // quiet period (100ms) measured from the last resize
    assert!(!matcher.poll(&mut doc, millis(base, 149)).unwrap());
    assert_eq!(doc.height_override(short), Some(120));

    assert!(matcher.poll(&mut doc, millis(base, 150)).unwrap());
    assert_eq!(doc.measured_height(short).unwrap(), 60);
    assert_eq!(doc.measured_height(tall).unwrap(), 60);

    // fired once; the timer is disarmed
    assert!(!matcher.poll(&mut doc, millis(base, 500)).unwrap());
}

#[test]
fn resize_is_ignored_when_disabled() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (mut doc, body) = document(ReadyState::Interactive);
    let short = grouped(&mut doc, body, "card", 40);
    let tall = grouped(&mut doc, body, "card", 120);

    let config = MatchHeightConfig {
        on_resize: false,
        ..MatchHeightConfig::default()
    };
    let mut matcher = MatchHeight::new("[data-mh]", config, &mut doc).unwrap();

    doc.set_natural_height(tall, 60).unwrap();
    let base = Instant::now();
    matcher
        .handle_event(&mut doc, HostEvent::Resize, base)
        .unwrap();
    assert!(!matcher.poll(&mut doc, millis(base, 1_000)).unwrap());
    assert_eq!(doc.height_override(short), Some(120));
}

#[test]
fn resize_before_init_is_ignored() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (mut doc, body) = document(ReadyState::Interactive);
    grouped(&mut doc, body, "card", 40);

    let config = MatchHeightConfig {
        auto_init: false,
        ..MatchHeightConfig::default()
    };
    let mut matcher = MatchHeight::new("[data-mh]", config, &mut doc).unwrap();
    assert!(!matcher.is_initialized());

    let base = Instant::now();
    matcher
        .handle_event(&mut doc, HostEvent::Resize, base)
        .unwrap();
    assert_eq!(matcher.next_deadline(), None);
}

#[test]
fn forced_pass_picks_up_injected_content() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (mut doc, body) = document(ReadyState::Interactive);
    let original = grouped(&mut doc, body, "card", 40);

    let matcher = MatchHeight::with_defaults(&mut doc).unwrap();
    assert_eq!(doc.height_override(original), Some(40));

    let injected = grouped(&mut doc, body, "card", 150);
    matcher.match_height_by_data_attr(&mut doc).unwrap();
    assert_eq!(doc.measured_height(original).unwrap(), 150);
    assert_eq!(doc.measured_height(injected).unwrap(), 150);
}

#[test]
fn group_attribute_follows_the_selector() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (mut doc, body) = document(ReadyState::Interactive);
    let first = doc.append_element(body, "div").unwrap();
    doc.set_attr(first, "data-group", "row").unwrap();
    doc.set_natural_height(first, 10).unwrap();
    let second = doc.append_element(body, "div").unwrap();
    doc.set_attr(second, "data-group", "row").unwrap();
    doc.set_natural_height(second, 70).unwrap();

    let matcher =
        MatchHeight::new("[data-group]", MatchHeightConfig::default(), &mut doc).unwrap();
    assert_eq!(matcher.group_attr(), "data-group");
    assert_eq!(doc.measured_height(first).unwrap(), 70);
}

#[test]
fn unparseable_selector_falls_back_to_default() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (mut doc, body) = document(ReadyState::Interactive);
    let short = grouped(&mut doc, body, "card", 40);
    grouped(&mut doc, body, "card", 120);

    let matcher = MatchHeight::new("   ", MatchHeightConfig::default(), &mut doc).unwrap();
    assert_eq!(matcher.group_attr(), MatchHeight::DEFAULT_GROUP_ATTR);
    assert_eq!(doc.measured_height(short).unwrap(), 120);
}
