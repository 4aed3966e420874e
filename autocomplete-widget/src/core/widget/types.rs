//! Type definitions for the autocomplete widget

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::super::keycode::KeyEvent;
use super::super::platform::PlatformTraits;
use super::super::state::Target;

/// Side effect the host must carry out after an event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum WidgetAction<T> {
    /// The user committed this option (the `onConfirm` callback)
    Confirm(T),
    /// Move real keyboard focus to this element before the next event
    FocusElement(Target),
    /// Select the whole text of the query input
    SelectInputText,
}

/// Result of handling one event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetResult<T> {
    /// Whether the host must cancel the event's platform default action
    pub consumed: bool,
    /// Actions to perform, in order
    pub actions: Vec<WidgetAction<T>>,
}

impl<T> Default for WidgetResult<T> {
    fn default() -> Self {
        Self::not_consumed()
    }
}

impl<T> WidgetResult<T> {
    pub fn not_consumed() -> Self {
        Self {
            consumed: false,
            actions: Vec::new(),
        }
    }

    /// Options confirmed while handling the event
    pub fn confirmed(&self) -> impl Iterator<Item = &T> {
        self.actions.iter().filter_map(|a| match a {
            WidgetAction::Confirm(option) => Some(option),
            _ => None,
        })
    }
}

/// Inbound event, as delivered by the host's event loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WidgetEvent {
    /// Input text changed through the normal change notification
    QueryChanged { value: String },
    KeyDown(KeyEvent),
    InputClick,
    InputFocus,
    /// The input lost focus; `related` is the widget element gaining focus,
    /// `None` when focus goes anywhere else
    InputBlur {
        #[serde(default)]
        related: Option<Target>,
    },
    OptionFocus { index: usize },
    OptionBlur {
        index: usize,
        #[serde(default)]
        related: Option<Target>,
    },
    OptionClick { index: usize },
    OptionTouchEnd { index: usize },
    OptionMouseDown { index: usize },
    OptionMouseEnter { index: usize },
    OptionMouseOut { index: usize },
    /// Recurring watcher tick
    PollTick,
}

/// What a source request was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::core) enum RequestKind {
    /// Query text changed
    Query,
    /// Show-all-values menu opened by ArrowDown (focuses the first option)
    /// or Space (leaves focus alone)
    ShowAll { focus_first: bool },
}

/// Element whose blur closed the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::core) enum BlurOrigin {
    Input,
    Option(usize),
}

/// Immutable per-instance configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Minimum query length (in characters) before the source is consulted
    pub min_length: usize,
    /// Initial query text
    pub default_value: String,
    /// Pre-select the first result as soon as results arrive
    pub autoselect: bool,
    /// ArrowDown/Space/click request the full list regardless of `min_length`
    pub show_all_values: bool,
    /// Commit the selected option when focus leaves the widget
    pub confirm_on_blur: bool,
    /// Ignore results that answer anything but the latest request
    pub discard_stale_results: bool,
    /// Interval of the external mutation watcher
    pub poll_interval: Duration,
    /// Platform capabilities
    pub platform: PlatformTraits,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            min_length: 0,
            default_value: String::new(),
            autoselect: false,
            show_all_values: false,
            confirm_on_blur: true,
            discard_stale_results: false,
            poll_interval: Duration::from_millis(100),
            platform: PlatformTraits::default(),
        }
    }
}

impl WidgetConfig {
    /// Autoselect as actually applied: always off on touch-primary platforms.
    pub fn effective_autoselect(&self) -> bool {
        self.autoselect && !self.platform.is_touch_primary
    }
}
