//! Autocomplete widget - the interaction state machine
//!
//! This module contains the `Autocomplete` controller that reconciles query
//! changes, asynchronous option lookups, keyboard navigation, pointer
//! interaction and focus transitions into one consistent [`WidgetState`].

mod blur;
mod keyboard;
mod pointer;
mod query;
mod search;
mod types;
mod watcher;

pub use types::*;
pub use blur::BlurKind;
pub use watcher::{InputProbe, SharedInput};

use search::SearchAdapter;
use watcher::MutationWatcher;

#[cfg(test)]
mod tests;

use autocomplete_engine::OptionSource;
use tracing::trace;

use super::state::{Target, WidgetState};
use super::templates::Templates;

/// The autocomplete controller
pub struct Autocomplete<T> {
    /// Current widget state
    state: WidgetState<T>,
    /// Immutable instance configuration
    config: WidgetConfig,
    /// Option formatting hooks
    templates: Templates<T>,
    /// Option source adapter
    search: SearchAdapter<T>,
    /// External mutation watcher
    watcher: MutationWatcher,
    /// Query text as of the last commit (initially the default value)
    confirmed_query: String,
}

impl<T: Clone> Autocomplete<T> {
    /// Create a widget. The option list starts empty; see
    /// [`Self::with_initial_option`] to seed it.
    pub fn new(
        config: WidgetConfig,
        source: impl OptionSource<T> + 'static,
        templates: Templates<T>,
    ) -> Self {
        let search = SearchAdapter::new(Box::new(source), config.discard_stale_results);
        let watcher = MutationWatcher::new(config.poll_interval);
        Self {
            state: WidgetState::new(config.default_value.clone(), None),
            confirmed_query: config.default_value.clone(),
            config,
            templates,
            search,
            watcher,
        }
    }

    /// Seed the option list with the option matching the default value.
    /// Ignored when the default value is empty.
    pub fn with_initial_option(mut self, option: T) -> Self {
        if !self.config.default_value.is_empty() {
            self.state.options = vec![option];
        }
        self
    }

    /// Get the current state
    pub fn state(&self) -> &WidgetState<T> {
        &self.state
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn templates(&self) -> &Templates<T> {
        &self.templates
    }

    /// Query text as of the last commit
    pub fn confirmed_query(&self) -> &str {
        &self.confirmed_query
    }

    /// Number of source requests issued and not yet answered
    pub fn pending_requests(&self) -> usize {
        self.search.in_flight()
    }

    /// Dispatch an inbound event to its handler.
    pub fn handle_event(&mut self, event: &WidgetEvent) -> WidgetResult<T> {
        trace!("event {:?}", event);
        match event {
            WidgetEvent::QueryChanged { value } => self.query_changed(value),
            WidgetEvent::KeyDown(key) => self.key_down(key),
            WidgetEvent::InputClick => self.input_click(),
            WidgetEvent::InputFocus => self.input_focus(),
            WidgetEvent::InputBlur { related } => self.input_blur(*related),
            WidgetEvent::OptionFocus { index } => self.option_focus(*index),
            WidgetEvent::OptionBlur { index, related } => self.option_blur(*index, *related),
            WidgetEvent::OptionClick { index } => self.option_click(*index),
            WidgetEvent::OptionTouchEnd { index } => self.option_touch_end(*index),
            WidgetEvent::OptionMouseDown { index } => self.option_mouse_down(*index),
            WidgetEvent::OptionMouseEnter { index } => self.option_mouse_enter(*index),
            WidgetEvent::OptionMouseOut { index } => self.option_mouse_out(*index),
            WidgetEvent::PollTick => self.poll_tick(),
        }
    }

    /// Apply lookups that completed since the last event.
    ///
    /// Hosts with asynchronous sources call this after a reply is sent;
    /// every other handler also does it before processing its event.
    pub fn flush_results(&mut self) -> WidgetResult<T> {
        self.transition(|_, _| {})
    }

    /// Run one state transition: apply completed lookups, run `step`, apply
    /// lookups answered synchronously, then clamp indices and emit focus
    /// side effects.
    fn transition(&mut self, step: impl FnOnce(&mut Self, &mut WidgetResult<T>)) -> WidgetResult<T> {
        let focused_before = self.state.focused;
        let mut result = WidgetResult::not_consumed();

        self.apply_completed();
        step(self, &mut result);
        self.apply_completed();
        self.state.clamp_indices();
        self.sync_focus(focused_before, &mut result);

        debug_assert!(
            self.state.is_consistent(),
            "inconsistent widget state after transition"
        );
        result
    }

    /// Request focus moves the host must perform after `focused` changed.
    fn sync_focus(&self, before: Option<Target>, result: &mut WidgetResult<T>) {
        let now = self.state.focused;
        if now == before {
            return;
        }
        if let Some(target) = now {
            result.actions.push(WidgetAction::FocusElement(target));
        }
        if now == Some(Target::Input) && before.is_none() {
            result.actions.push(WidgetAction::SelectInputText);
        }
    }

    /// Move keyboard focus and selection to `target`, clearing hover.
    fn focus_target(&mut self, target: Target) {
        self.state.focused = Some(target);
        self.state.selected = Some(target);
        self.state.hovered = None;
    }
}

impl Autocomplete<String> {
    /// Plain-text widget: options are strings and the default value, when
    /// non-empty, is the initial option.
    pub fn text(config: WidgetConfig, source: impl OptionSource<String> + 'static) -> Self {
        let initial = config.default_value.clone();
        Self::new(config, source, Templates::plain()).with_initial_option(initial)
    }
}
