use super::*;

#[test]
fn test_query_updates_before_results() {
    let (mut widget, handle) = make_deferred_widget(WidgetConfig::default());
    widget.query_changed("fr");
    assert_eq!(widget.state().query(), "fr");
    assert!(widget.state().options().is_empty());
    assert_eq!(handle.pending_queries(), vec!["fr"]);
}

#[test]
fn test_results_open_menu() {
    let (mut widget, log) = make_widget(WidgetConfig::default());
    widget.query_changed("fr");

    assert_eq!(*log.borrow(), vec!["fr"]);
    let state = widget.state();
    assert_eq!(
        state.options(),
        strings(&["France", "French Guiana", "French Polynesia"])
    );
    assert!(state.menu_open());
    assert!(!state.show_no_results());
    assert_eq!(state.selected(), Some(Target::Input));
}

#[test]
fn test_min_length_scenario() {
    let config = WidgetConfig {
        min_length: 3,
        ..WidgetConfig::default()
    };
    let (mut widget, log) = make_widget(config);

    widget.query_changed("a");
    assert!(log.borrow().is_empty());
    widget.query_changed("ab");
    assert!(log.borrow().is_empty());
    widget.query_changed("abc");
    assert_eq!(*log.borrow(), vec!["abc"]);
}

#[test]
fn test_short_query_closes_menu() {
    let config = WidgetConfig {
        min_length: 2,
        ..WidgetConfig::default()
    };
    let (mut widget, _) = make_widget(config);
    widget.query_changed("fr");
    assert!(widget.state().menu_open());

    widget.query_changed("f");
    assert!(!widget.state().menu_open());
    assert!(widget.state().options().is_empty());
}

#[test]
fn test_empty_query_closes_menu() {
    let (mut widget, log) = make_widget(WidgetConfig::default());
    widget.query_changed("gh");
    widget.query_changed("");
    assert_eq!(log.borrow().len(), 1);
    assert!(!widget.state().menu_open());
    assert!(widget.state().options().is_empty());
}

#[test]
fn test_same_query_twice_searches_once() {
    let (mut widget, log) = make_widget(WidgetConfig::default());
    widget.query_changed("fr");
    widget.query_changed("fr");
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_equal_length_query_does_not_search() {
    // Only a change of length triggers a lookup
    let (mut widget, log) = make_widget(WidgetConfig::default());
    widget.query_changed("fr");
    widget.query_changed("gh");
    assert_eq!(*log.borrow(), vec!["fr"]);
    assert_eq!(widget.state().query(), "gh");
    assert_eq!(widget.state().options().len(), 3);
}

#[test]
fn test_length_counts_characters() {
    let (mut widget, log) = make_widget(WidgetConfig::default());
    widget.query_changed("é");
    widget.query_changed("e");
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_show_all_values_always_searches() {
    let (mut widget, log) = make_widget(show_all_config());
    widget.query_changed("fr");
    widget.query_changed("fr");
    widget.query_changed("");
    assert_eq!(*log.borrow(), vec!["fr", "fr", ""]);
    assert_eq!(widget.state().options().len(), COUNTRIES.len());
}

#[test]
fn test_no_results() {
    let (mut widget, _) = make_widget(WidgetConfig::default());
    widget.query_changed("zz");
    let state = widget.state();
    assert!(state.options().is_empty());
    assert!(!state.menu_open());
    assert!(state.show_no_results());
    assert!(state.menu_visible());
}

#[test]
fn test_short_query_keeps_no_results_flag() {
    let (mut widget, _) = make_widget(WidgetConfig::default());
    widget.query_changed("zz");
    widget.query_changed("");
    assert!(widget.state().show_no_results());
    assert!(widget.state().is_consistent());
}

#[test]
fn test_autoselect_selects_first() {
    let config = WidgetConfig {
        autoselect: true,
        ..WidgetConfig::default()
    };
    let (mut widget, _) = make_widget(config);
    widget.query_changed("gh");
    assert_eq!(widget.state().selected(), Some(Target::Option(0)));
    assert_eq!(widget.state().selected_option().map(String::as_str), Some("Ghana"));
}

#[test]
fn test_autoselect_disabled_on_touch() {
    let config = WidgetConfig {
        autoselect: true,
        platform: PlatformTraits::touch(),
        ..WidgetConfig::default()
    };
    let (mut widget, _) = make_widget(config);
    widget.query_changed("gh");
    assert_eq!(widget.state().selected(), Some(Target::Input));
}

#[test]
fn test_input_click_reopens_in_show_all_mode() {
    let (mut widget, log) = make_widget(show_all_config());
    widget.input_click();
    assert_eq!(*log.borrow(), vec![""]);
    assert!(widget.state().menu_open());
}

#[test]
fn test_input_click_without_show_all_is_noop() {
    let (mut widget, log) = make_widget(WidgetConfig::default());
    widget.query_changed("fr");
    widget.input_click();
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_initial_value_seeds_option() {
    let config = WidgetConfig {
        default_value: "France".to_string(),
        ..WidgetConfig::default()
    };
    let (widget, log) = make_widget(config);
    assert_eq!(widget.state().query(), "France");
    assert_eq!(widget.state().options(), strings(&["France"]));
    assert!(!widget.state().menu_open());
    assert_eq!(widget.confirmed_query(), "France");
    assert!(log.borrow().is_empty());
}

#[test]
fn test_dispatch_query_changed_event() {
    let (mut widget, log) = make_widget(WidgetConfig::default());
    widget.handle_event(&WidgetEvent::QueryChanged {
        value: "gr".to_string(),
    });
    assert_eq!(*log.borrow(), vec!["gr"]);
    assert_eq!(widget.state().options(), strings(&["Greece"]));
}
