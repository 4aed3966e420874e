//! Pointer interaction on option rows, and commit

use tracing::debug;

use super::*;

impl<T: Clone> Autocomplete<T> {
    /// Click on option `index` commits it
    pub fn option_click(&mut self, index: usize) -> WidgetResult<T> {
        self.transition(|this, result| {
            result.consumed = true;
            this.commit(index, result);
        })
    }

    /// Touch end behaves exactly like a click
    pub fn option_touch_end(&mut self, index: usize) -> WidgetResult<T> {
        self.option_click(index)
    }

    /// Pointer-down on an option is always consumed: some browsers blur the
    /// input before delivering the click, which would close the menu under
    /// the pointer.
    pub fn option_mouse_down(&mut self, _index: usize) -> WidgetResult<T> {
        self.transition(|_, result| result.consumed = true)
    }

    pub fn option_mouse_enter(&mut self, index: usize) -> WidgetResult<T> {
        self.transition(|this, _| {
            if index < this.state.options.len() {
                this.state.hovered = Some(index);
            }
        })
    }

    pub fn option_mouse_out(&mut self, _index: usize) -> WidgetResult<T> {
        self.transition(|this, _| this.state.hovered = None)
    }

    /// Commit option `index`: write its input value into the query, confirm
    /// it, and close the menu with focus on the input.
    ///
    /// Indices outside the option list are ignored.
    pub(super) fn commit(&mut self, index: usize, result: &mut WidgetResult<T>) {
        let Some(option) = self.state.options.get(index).cloned() else {
            debug!("commit of missing option {} ignored", index);
            return;
        };
        let query = self.templates.input_value(&option);
        debug!("commit option {} as {:?}", index, query);
        result.actions.push(WidgetAction::Confirm(option));

        self.confirmed_query = query.clone();
        self.state.query = query;
        self.state.focused = Some(Target::Input);
        self.state.selected = Some(Target::Input);
        self.state.hovered = None;
        self.state.menu_open = false;
        self.state.options.clear();
        self.state.show_no_results = false;
    }
}
