use std::time::{Duration, Instant};

use super::*;

fn mounted_widget() -> (Autocomplete<String>, RequestLog, SharedInput) {
    let (widget, log) = make_widget(WidgetConfig::default());
    let input = SharedInput::default();
    let mut widget = widget.with_input_probe(input.clone());
    widget.mount();
    (widget, log, input)
}

#[test]
fn test_direct_write_is_picked_up() {
    let (mut widget, log, input) = mounted_widget();
    assert!(widget.is_mounted());
    assert!(log.borrow().is_empty());

    input.set("gh");
    widget.poll_tick();

    assert_eq!(widget.state().query(), "gh");
    assert_eq!(*log.borrow(), strings(&["gh"]));
    assert_eq!(widget.state().options(), strings(&["Ghana"]));
}

#[test]
fn test_unchanged_input_does_nothing() {
    let (mut widget, log, input) = mounted_widget();
    widget.query_changed("fr");
    input.set("fr");
    let before = widget.state().clone();

    let result = widget.poll_tick();
    assert!(result.actions.is_empty());
    assert_eq!(widget.state(), &before);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_unmount_stops_polling() {
    let (mut widget, log, input) = mounted_widget();
    widget.unmount();
    assert!(!widget.is_mounted());

    input.set("gh");
    widget.poll_tick();
    assert_eq!(widget.state().query(), "");
    assert!(log.borrow().is_empty());
}

#[test]
fn test_no_probe_is_a_noop() {
    let (mut widget, log) = make_widget(WidgetConfig::default());
    widget.mount();
    widget.poll_tick();
    assert!(log.borrow().is_empty());
}

#[test]
fn test_poll_at_respects_interval() {
    let (mut widget, log, input) = mounted_widget();
    assert_eq!(widget.poll_interval(), Duration::from_millis(100));
    let start = Instant::now();

    input.set("g");
    widget.poll_at(start);
    assert_eq!(widget.state().query(), "g");

    input.set("gh");
    widget.poll_at(start + Duration::from_millis(50));
    assert_eq!(widget.state().query(), "g");

    widget.poll_at(start + Duration::from_millis(100));
    assert_eq!(widget.state().query(), "gh");
    assert_eq!(*log.borrow(), strings(&["g", "gh"]));
}

#[test]
fn test_poll_interval_from_config() {
    let config = WidgetConfig {
        poll_interval: Duration::from_millis(250),
        ..WidgetConfig::default()
    };
    let (widget, _) = make_widget(config);
    assert_eq!(widget.poll_interval(), Duration::from_millis(250));
    assert!(!widget.is_mounted());
}
