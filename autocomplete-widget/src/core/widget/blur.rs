//! Focus events and the blur reconciler
//!
//! A blur either moves focus within the widget (input <-> option rows),
//! which changes nothing, or leaves the widget, which closes it and applies
//! commit-on-blur.

use tracing::debug;

use super::*;

/// Classification of a blur event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurKind {
    /// Focus moves to the input or an option row of this widget
    Internal,
    /// Focus leaves the widget (or the document)
    External,
}

impl BlurKind {
    /// Classify a blur by the element about to receive focus.
    ///
    /// `related` is `None` when the next focus target is not part of this
    /// widget, including when focus leaves the document entirely.
    pub fn classify(related: Option<Target>) -> Self {
        match related {
            Some(Target::Input) | Some(Target::Option(_)) => BlurKind::Internal,
            None => BlurKind::External,
        }
    }
}

impl<T: Clone> Autocomplete<T> {
    pub fn input_focus(&mut self) -> WidgetResult<T> {
        self.transition(|this, _| this.state.focused = Some(Target::Input))
    }

    pub fn option_focus(&mut self, index: usize) -> WidgetResult<T> {
        self.transition(|this, _| {
            if index < this.state.options.len() {
                this.focus_target(Target::Option(index));
            }
        })
    }

    pub fn input_blur(&mut self, related: Option<Target>) -> WidgetResult<T> {
        self.transition(|this, result| this.reconcile_blur(BlurOrigin::Input, related, result))
    }

    pub fn option_blur(&mut self, index: usize, related: Option<Target>) -> WidgetResult<T> {
        self.transition(|this, result| {
            this.reconcile_blur(BlurOrigin::Option(index), related, result)
        })
    }

    fn reconcile_blur(
        &mut self,
        origin: BlurOrigin,
        related: Option<Target>,
        result: &mut WidgetResult<T>,
    ) {
        let kind = BlurKind::classify(related);
        debug!("blur from {:?} towards {:?}: {:?}", origin, related, kind);
        if kind == BlurKind::External {
            self.component_blur(origin, result);
        }
    }

    /// Focus left the widget.
    ///
    /// With `confirm_on_blur`, the selected option (if any) is confirmed and
    /// its input value becomes the query; otherwise the query reverts to the
    /// last confirmed value. On touch-primary platforms an open menu stays
    /// open with its options, and a blur from the input keeps the typed text.
    fn component_blur(&mut self, origin: BlurOrigin, result: &mut WidgetResult<T>) {
        let touch = self.config.platform.is_touch_primary;
        let keep_menu_open = self.state.menu_open && touch;

        let query = if self.config.confirm_on_blur {
            match self.state.selected_option().cloned() {
                Some(option) => {
                    let value = self.templates.input_value(&option);
                    result.actions.push(WidgetAction::Confirm(option));
                    let query = if touch && origin == BlurOrigin::Input {
                        self.state.query.clone()
                    } else {
                        value
                    };
                    self.confirmed_query = query.clone();
                    query
                }
                None => self.state.query.clone(),
            }
        } else {
            self.confirmed_query.clone()
        };

        debug!("component blur: query {:?}, menu kept open: {}", query, keep_menu_open);
        self.state.query = query;
        self.state.focused = None;
        self.state.selected = None;
        self.state.hovered = None;
        self.state.show_no_results = false;
        if keep_menu_open {
            self.state.menu_open = true;
        } else {
            self.state.menu_open = false;
            self.state.options.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(BlurKind::classify(Some(Target::Input)), BlurKind::Internal);
        assert_eq!(BlurKind::classify(Some(Target::Option(3))), BlurKind::Internal);
        assert_eq!(BlurKind::classify(None), BlurKind::External);
    }
}
