//! Keyboard navigation (arrows, Space, Enter, Escape, printable keys)

use tracing::debug;

use super::super::keycode::{KeyEvent, KeyKind};
use super::*;

impl<T: Clone> Autocomplete<T> {
    /// Process a keydown anywhere in the widget
    pub fn key_down(&mut self, key: &KeyEvent) -> WidgetResult<T> {
        self.transition(|this, result| match key.code.kind() {
            KeyKind::Up => this.handle_up_arrow(result),
            KeyKind::Down => this.handle_down_arrow(result),
            KeyKind::Space => this.handle_space(result),
            KeyKind::Enter => this.handle_enter(result),
            KeyKind::Escape => this.handle_escape(),
            KeyKind::Printable => this.handle_printable_key(key, result),
            KeyKind::Other => {}
        })
    }

    fn handle_up_arrow(&mut self, result: &mut WidgetResult<T>) {
        result.consumed = true;
        if !self.state.menu_open {
            return;
        }
        if let Some(target) = self.state.selected.and_then(|s| s.previous()) {
            self.focus_target(target);
        }
    }

    fn handle_down_arrow(&mut self, result: &mut WidgetResult<T>) {
        result.consumed = true;
        if self.config.show_all_values && !self.state.menu_open {
            self.search
                .request("", RequestKind::ShowAll { focus_first: true });
        } else if self.state.menu_open {
            let from = self.state.selected.unwrap_or(Target::Input);
            if let Some(target) = from.next(self.state.options.len()) {
                self.focus_target(target);
            }
        }
    }

    fn handle_space(&mut self, result: &mut WidgetResult<T>) {
        if let Some(Target::Option(index)) = self.state.focused {
            result.consumed = true;
            self.commit(index, result);
        } else if self.config.show_all_values && !self.state.menu_open {
            result.consumed = true;
            self.search
                .request("", RequestKind::ShowAll { focus_first: false });
        }
    }

    fn handle_enter(&mut self, result: &mut WidgetResult<T>) {
        if !self.state.menu_open {
            return;
        }
        result.consumed = true;
        if let Some(Target::Option(index)) = self.state.selected {
            self.commit(index, result);
        }
    }

    /// Escape closes the widget without confirming; the query keeps its text.
    fn handle_escape(&mut self) {
        debug!("escape: closing without confirm");
        self.state.focused = None;
        self.state.selected = None;
        self.state.hovered = None;
        self.state.menu_open = false;
        self.state.options.clear();
        self.state.show_no_results = false;
    }

    /// Typing while an option row has focus sends focus back to the input.
    fn handle_printable_key(&mut self, key: &KeyEvent, result: &mut WidgetResult<T>) {
        if !key.is_on_input() {
            result
                .actions
                .push(WidgetAction::FocusElement(Target::Input));
        }
    }
}
