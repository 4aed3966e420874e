//! Widget state
//!
//! The single mutable aggregate owned by an [`Autocomplete`](super::widget::Autocomplete)
//! instance. It is only ever mutated through the widget's event handlers.

use serde::{Deserialize, Serialize};

/// Addressable part of the widget: the query input or one option row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// The text input; as a selection it means "no option, the query is authoritative"
    Input,
    /// Option row at this index
    Option(usize),
}

impl Target {
    /// Option index, if this target is an option row
    pub fn option_index(&self) -> Option<usize> {
        match *self {
            Target::Input => None,
            Target::Option(i) => Some(i),
        }
    }

    /// One step towards the top: option 0 moves to the input, the input stays put.
    pub fn previous(&self) -> Option<Target> {
        match *self {
            Target::Input => None,
            Target::Option(0) => Some(Target::Input),
            Target::Option(i) => Some(Target::Option(i - 1)),
        }
    }

    /// One step towards the bottom of a list of `len` options.
    pub fn next(&self, len: usize) -> Option<Target> {
        let next = match *self {
            Target::Input => 0,
            Target::Option(i) => i + 1,
        };
        (next < len).then_some(Target::Option(next))
    }
}

/// Snapshot of everything the rendering layer and status generator consume
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetState<T> {
    pub(crate) query: String,
    pub(crate) options: Vec<T>,
    pub(crate) focused: Option<Target>,
    pub(crate) hovered: Option<usize>,
    pub(crate) selected: Option<Target>,
    pub(crate) menu_open: bool,
    pub(crate) show_no_results: bool,
}

impl<T> WidgetState<T> {
    /// Fresh state at mount: the initial value is the query and, when
    /// present, the only option.
    pub(crate) fn new(query: String, initial_option: Option<T>) -> Self {
        Self {
            query,
            options: initial_option.into_iter().collect(),
            focused: None,
            hovered: None,
            selected: None,
            menu_open: false,
            show_no_results: false,
        }
    }

    /// Current text of the query input
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Latest retrieved options, in source order
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Element holding keyboard focus, `None` when focus is outside the widget
    pub fn focused(&self) -> Option<Target> {
        self.focused
    }

    /// Option row under the pointer
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Current selection used for commit and hint
    pub fn selected(&self) -> Option<Target> {
        self.selected
    }

    /// The selected option, if the selection is an option row
    pub fn selected_option(&self) -> Option<&T> {
        self.selected
            .and_then(|t| t.option_index())
            .and_then(|i| self.options.get(i))
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn show_no_results(&self) -> bool {
        self.show_no_results
    }

    /// Whether the menu (options or the no-results row) should be shown
    pub fn menu_visible(&self) -> bool {
        self.menu_open || self.show_no_results
    }

    /// Whether any element of the widget holds focus
    pub fn has_focus(&self) -> bool {
        self.focused.is_some()
    }

    /// Check every state invariant.
    ///
    /// - indices in `focused`, `hovered` and `selected` are in range
    /// - an open menu has options or shows the no-results row
    /// - the no-results row implies an empty option list
    pub fn is_consistent(&self) -> bool {
        let len = self.options.len();
        let in_range = |t: Option<Target>| match t {
            Some(Target::Option(i)) => i < len,
            _ => true,
        };
        in_range(self.focused)
            && in_range(self.selected)
            && self.hovered.is_none_or(|i| i < len)
            && (!self.menu_open || len > 0 || self.show_no_results)
            && (!self.show_no_results || len == 0)
    }

    /// Pull any index that fell off the end of `options` back into range.
    pub(crate) fn clamp_indices(&mut self) {
        let len = self.options.len();
        let clamp = |t: &mut Option<Target>| {
            if let Some(Target::Option(i)) = *t
                && i >= len
            {
                *t = Some(Target::Input);
            }
        };
        clamp(&mut self.focused);
        clamp(&mut self.selected);
        if self.hovered.is_some_and(|i| i >= len) {
            self.hovered = None;
        }
        if self.options.is_empty() && !self.show_no_results {
            self.menu_open = false;
        }
    }
}
