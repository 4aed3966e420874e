//! Query controller: query text changes and application of lookup results

use tracing::debug;

use super::search::Completed;
use super::*;

impl<T: Clone> Autocomplete<T> {
    /// Handle a change of the input text.
    pub fn query_changed(&mut self, value: &str) -> WidgetResult<T> {
        self.transition(|this, _| this.apply_query(value))
    }

    /// Clicking the input re-runs the query controller with the current
    /// text, so show-all-values mode reopens the menu.
    pub fn input_click(&mut self) -> WidgetResult<T> {
        let query = self.state.query.clone();
        self.query_changed(&query)
    }

    /// Store the new query and decide whether to consult the source.
    ///
    /// Only a change in *length* counts as a change: two different queries
    /// of equal length do not trigger a second lookup.
    pub(super) fn apply_query(&mut self, value: &str) {
        let previous_len = self.state.query.chars().count();
        let len = value.chars().count();
        self.state.query = value.to_string();

        let query_empty = len == 0;
        let query_changed = previous_len != len;
        let long_enough = len >= self.config.min_length;

        let search = self.config.show_all_values || (!query_empty && query_changed && long_enough);
        if search {
            self.search.request(value, RequestKind::Query);
        } else if query_empty || !long_enough {
            // show_no_results keeps its value
            self.state.menu_open = false;
            self.state.options.clear();
        }
    }

    /// Apply every lookup that has completed, in arrival order.
    pub(super) fn apply_completed(&mut self) {
        for completed in self.search.take_completed() {
            self.apply_results(completed);
        }
    }

    fn apply_results(&mut self, completed: Completed<T>) {
        let Completed { id, kind, options } = completed;
        let available = !options.is_empty();
        debug!("applying result {} ({:?}): {} options", id, kind, options.len());

        self.state.options = options;
        self.state.show_no_results = !available;
        match kind {
            RequestKind::Query => {
                self.state.menu_open = available;
                self.state.selected = Some(if self.config.effective_autoselect() && available {
                    Target::Option(0)
                } else {
                    Target::Input
                });
            }
            RequestKind::ShowAll { focus_first: true } => {
                self.state.menu_open = available;
                if available {
                    self.focus_target(Target::Option(0));
                } else {
                    self.state.selected = Some(Target::Input);
                }
            }
            RequestKind::ShowAll { focus_first: false } => {
                self.state.menu_open = available;
            }
        }
        self.state.clamp_indices();
    }
}
