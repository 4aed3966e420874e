//! Read-only projection of widget state for the rendering layer
//!
//! Nothing here mutates the widget; a renderer turns a [`WidgetView`] into
//! its own visual tree.

use autocomplete_engine::strip_prefix_ignore_case;

use super::state::Target;
use super::widget::Autocomplete;

/// One option row as the renderer should draw it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub index: usize,
    /// Suggestion text
    pub text: String,
    /// Draw with keyboard-focus styling
    pub focused: bool,
    /// Row currently holds keyboard focus (`aria-selected`)
    pub aria_selected: bool,
    pub hovered: bool,
    /// Odd row, for zebra striping
    pub odd: bool,
}

/// Everything a renderer needs to draw the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub query: String,
    /// Ghost text completing the query with the selected option
    pub hint: Option<String>,
    /// Any widget element holds focus
    pub component_focused: bool,
    /// `aria-expanded`
    pub expanded: bool,
    /// Menu (option rows or the no-results row) is shown
    pub menu_visible: bool,
    pub show_no_results: bool,
    /// Option row referenced by `aria-activedescendant`
    pub active_descendant: Option<usize>,
    pub rows: Vec<OptionRow>,
}

impl<T: Clone> Autocomplete<T> {
    /// Project the current state into a view.
    pub fn view(&self) -> WidgetView {
        let state = self.state();
        let platform = self.config().platform;
        let hover_active = platform.supports_hover_styling && state.hovered().is_some();

        let rows = state
            .options()
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let row = Some(Target::Option(index));
                let show_focused = if state.focused() == Some(Target::Input) {
                    state.selected() == row
                } else {
                    state.focused() == row
                };
                OptionRow {
                    index,
                    text: self.templates().suggestion(option),
                    focused: show_focused && !hover_active,
                    aria_selected: state.focused() == row,
                    hovered: state.hovered() == Some(index),
                    odd: index % 2 == 1,
                }
            })
            .collect();

        let hint = if platform.supports_pointer_events {
            self.hint()
        } else {
            None
        };

        WidgetView {
            query: state.query().to_string(),
            hint,
            component_focused: state.has_focus(),
            expanded: state.menu_open(),
            menu_visible: state.menu_visible(),
            show_no_results: state.show_no_results(),
            active_descendant: state.focused().and_then(|t| t.option_index()),
            rows,
        }
    }

    /// Hint text: the query followed by the rest of the selected option's
    /// input value, when autoselect is on and that value starts with the
    /// query (ignoring case).
    pub fn hint(&self) -> Option<String> {
        if !self.config().effective_autoselect() {
            return None;
        }
        let state = self.state();
        let value = self.templates().input_value(state.selected_option()?);
        if value.is_empty() {
            return None;
        }
        let rest = strip_prefix_ignore_case(&value, state.query())?;
        Some(format!("{}{}", state.query(), rest))
    }
}
