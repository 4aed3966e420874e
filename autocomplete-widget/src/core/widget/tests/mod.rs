//! Tests for the autocomplete widget

use std::cell::RefCell;
use std::rc::Rc;

use autocomplete_engine::{DeferredHandle, DeferredSource, ListSource, Reply};

use super::*;
use crate::core::keycode::{KeyCode, KeyEvent};
use crate::core::platform::PlatformTraits;

mod query;
mod watcher;

const COUNTRIES: [&str; 6] = [
    "France",
    "French Guiana",
    "French Polynesia",
    "Germany",
    "Ghana",
    "Greece",
];

type RequestLog = Rc<RefCell<Vec<String>>>;

/// Widget over `entries` whose source records every query it receives.
fn make_widget_over(entries: &[&str], config: WidgetConfig) -> (Autocomplete<String>, RequestLog) {
    let list = ListSource::new(entries.iter().copied());
    let log: RequestLog = Rc::default();
    let requests = Rc::clone(&log);
    let source = move |query: &str, reply: Reply<String>| {
        requests.borrow_mut().push(query.to_string());
        reply.send(list.filter(query));
    };
    (Autocomplete::text(config, source), log)
}

fn make_widget(config: WidgetConfig) -> (Autocomplete<String>, RequestLog) {
    make_widget_over(&COUNTRIES, config)
}

fn make_deferred_widget(config: WidgetConfig) -> (Autocomplete<String>, DeferredHandle<String>) {
    let (source, handle) = DeferredSource::new();
    (Autocomplete::text(config, source), handle)
}

fn show_all_config() -> WidgetConfig {
    WidgetConfig {
        show_all_values: true,
        ..WidgetConfig::default()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::on_input(code)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn confirmed(result: &WidgetResult<String>) -> Vec<String> {
    result.confirmed().cloned().collect()
}

/// Widget with options `["Alpha", "Beta"]` open after typing "a".
fn open_alpha_beta(config: WidgetConfig) -> (Autocomplete<String>, RequestLog) {
    let (mut widget, log) = make_widget_over(&["Alpha", "Beta"], config);
    widget.input_focus();
    widget.query_changed("a");
    assert_eq!(widget.state().options(), strings(&["Alpha", "Beta"]));
    assert!(widget.state().menu_open());
    (widget, log)
}
