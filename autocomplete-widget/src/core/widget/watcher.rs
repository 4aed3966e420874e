//! External mutation watcher
//!
//! Assistive input software (dictation, speech control) may write straight
//! into the input without raising a change notification. While the widget
//! is mounted, a recurring check compares the element's real content with
//! the query and routes any difference through the query controller.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::debug;

use super::*;

/// Read access to the raw content of the input element, supplied by the
/// rendering layer. Only the watcher reads it.
pub trait InputProbe {
    fn current_value(&self) -> String;
}

/// Input content shared between a host and the watcher
#[derive(Debug, Clone, Default)]
pub struct SharedInput(Rc<RefCell<String>>);

impl SharedInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(value.into())))
    }

    pub fn set(&self, value: impl Into<String>) {
        *self.0.borrow_mut() = value.into();
    }

    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }
}

impl InputProbe for SharedInput {
    fn current_value(&self) -> String {
        self.get()
    }
}

/// Recurring check owned by one widget instance.
///
/// Started at mount and cancelled at unmount; the host's timer (or event
/// loop) drives the ticks.
pub(super) struct MutationWatcher {
    interval: Duration,
    active: bool,
    last_check: Option<Instant>,
    probe: Option<Box<dyn InputProbe>>,
}

impl MutationWatcher {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            active: false,
            last_check: None,
            probe: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn start(&mut self) {
        self.active = true;
        self.last_check = None;
    }

    fn cancel(&mut self) {
        self.active = false;
        self.last_check = None;
    }

    /// Whether a tick at `now` is due. Always true for the first tick.
    fn is_due(&self, now: Instant) -> bool {
        self.active
            && self
                .last_check
                .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    /// Raw input content, if it differs from `query`.
    fn changed_value(&self, query: &str) -> Option<String> {
        if !self.active {
            return None;
        }
        let value = self.probe.as_ref()?.current_value();
        (value != query).then_some(value)
    }
}

impl<T: Clone> Autocomplete<T> {
    /// Attach the probe the watcher reads the input element through.
    pub fn with_input_probe(mut self, probe: impl InputProbe + 'static) -> Self {
        self.watcher.probe = Some(Box::new(probe));
        self
    }

    /// Activate the widget: start the watcher and run a first check.
    pub fn mount(&mut self) -> WidgetResult<T> {
        debug!("mount: watcher every {:?}", self.watcher.interval());
        self.watcher.start();
        self.poll_tick()
    }

    /// Deactivate the widget; the watcher is cancelled unconditionally.
    pub fn unmount(&mut self) {
        debug!("unmount: watcher cancelled");
        self.watcher.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        self.watcher.is_active()
    }

    /// Interval at which the host should call [`Self::poll_tick`]
    pub fn poll_interval(&self) -> Duration {
        self.watcher.interval()
    }

    /// One watcher tick: compare the input element with the query and
    /// feed a difference through the query controller.
    pub fn poll_tick(&mut self) -> WidgetResult<T> {
        self.transition(|this, _| {
            if let Some(value) = this.watcher.changed_value(&this.state.query) {
                debug!("input changed outside change events: {:?}", value);
                this.apply_query(&value);
            }
        })
    }

    /// Tick only if the interval has elapsed since the last tick; for hosts
    /// that pump the widget from their own loop.
    pub fn poll_at(&mut self, now: Instant) -> WidgetResult<T> {
        if !self.watcher.is_due(now) {
            return WidgetResult::not_consumed();
        }
        self.watcher.last_check = Some(now);
        self.poll_tick()
    }
}
