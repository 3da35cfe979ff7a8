//! Value and input transitions.

use crate::action::{Action, InputAction};
use crate::error::Result;
use crate::value::{Change, SelectState, SelectValue, Transition};

use super::Select;
use super::state::input_change;

impl<T: Clone> Select<T> {
    // -------------------------------------------------------------------------
    // Value transitions
    // -------------------------------------------------------------------------

    /// Select `option`.
    ///
    /// Single mode replaces the value; multi mode appends. Disabled options
    /// and options already selected in multi mode are ignored.
    pub fn select_option(&mut self, state: &SelectState<T>, option: T) -> Result<Transition<T>> {
        if self.config.is_disabled {
            log::trace!("select-option ignored: select is disabled");
            return Ok(Transition::none());
        }
        if self.is_option_disabled(&option, &state.value) {
            log::trace!("select-option ignored: option is disabled");
            return Ok(Transition::none());
        }

        let value = if self.is_multi() {
            if self.is_option_selected(&option, &state.value)? {
                log::trace!("select-option ignored: option already selected");
                return Ok(Transition::none());
            }
            let mut items = state.value.as_slice().to_vec();
            items.push(option.clone());
            SelectValue::Multi(items)
        } else {
            SelectValue::Single(option.clone())
        };

        let meta = self.meta(Action::SelectOption).with_option(option);
        let input = self.input_reset_after_select();
        Ok(self.emit(Transition {
            change: Some(Change { value, meta }),
            input,
        }))
    }

    /// Remove `option` from a multi selection.
    pub fn deselect_option(&mut self, state: &SelectState<T>, option: T) -> Result<Transition<T>> {
        if self.config.is_disabled || !self.is_multi() {
            log::trace!("deselect-option ignored: not an enabled multi select");
            return Ok(Transition::none());
        }
        let mut items = state.value.as_slice().to_vec();
        let Some(index) = self.accessors.position(&items, &option)? else {
            log::trace!("deselect-option ignored: option not selected");
            return Ok(Transition::none());
        };
        let removed = items.remove(index);

        let meta = self.meta(Action::DeselectOption).with_option(removed);
        Ok(self.emit(Transition {
            change: Some(Change {
                value: SelectValue::Multi(items),
                meta,
            }),
            input: None,
        }))
    }

    /// Select `option` if it is not selected, deselect it otherwise.
    ///
    /// This is what clicking an option in the menu does.
    pub fn toggle_option(&mut self, state: &SelectState<T>, option: T) -> Result<Transition<T>> {
        if self.is_multi() && self.is_option_selected(&option, &state.value)? {
            self.deselect_option(state, option)
        } else {
            self.select_option(state, option)
        }
    }

    /// Remove a specific selected option, e.g. from a pill's close button.
    ///
    /// In single mode removing the selected option clears the value.
    pub fn remove_value(&mut self, state: &SelectState<T>, option: T) -> Result<Transition<T>> {
        if self.config.is_disabled {
            return Ok(Transition::none());
        }
        let mut items = state.value.as_slice().to_vec();
        let Some(index) = self.accessors.position(&items, &option)? else {
            log::trace!("remove-value ignored: option not selected");
            return Ok(Transition::none());
        };
        let removed = items.remove(index);

        let value = if self.is_multi() {
            SelectValue::Multi(items)
        } else {
            SelectValue::Empty
        };
        let meta = self.meta(Action::RemoveValue).with_removed_value(removed);
        Ok(self.emit(Transition {
            change: Some(Change { value, meta }),
            input: None,
        }))
    }

    /// Remove the last option of a multi selection.
    pub fn pop_value(&mut self, state: &SelectState<T>) -> Result<Transition<T>> {
        if self.config.is_disabled || !self.is_multi() {
            return Ok(Transition::none());
        }
        let mut items = state.value.as_slice().to_vec();
        let Some(removed) = items.pop() else {
            log::trace!("pop-value ignored: nothing selected");
            return Ok(Transition::none());
        };

        let meta = self.meta(Action::PopValue).with_removed_value(removed);
        Ok(self.emit(Transition {
            change: Some(Change {
                value: SelectValue::Multi(items),
                meta,
            }),
            input: None,
        }))
    }

    /// Replace the value wholesale, without checking it against the options.
    pub fn set_value(&mut self, value: SelectValue<T>) -> Result<Transition<T>> {
        let meta = self.meta(Action::SetValue);
        Ok(self.emit(Transition {
            change: Some(Change { value, meta }),
            input: None,
        }))
    }

    /// Empty the value and the input text.
    pub fn clear(&mut self, _state: &SelectState<T>) -> Result<Transition<T>> {
        if self.config.is_disabled {
            return Ok(Transition::none());
        }
        let value = SelectValue::empty(self.is_multi());
        let meta = self.meta(Action::Clear);
        Ok(self.emit(Transition {
            change: Some(Change { value, meta }),
            input: Some(input_change("", InputAction::SetValue)),
        }))
    }

    /// Create an option from the input text and select it.
    ///
    /// Does nothing unless a creatable is attached and the input is eligible.
    /// The built option is then subject to the same checks as select-option.
    /// With an `on_create_option` handler installed the handler receives the
    /// input text and the value is left to the caller.
    pub fn create_option(&mut self, state: &SelectState<T>) -> Result<Transition<T>> {
        if self.config.is_disabled || !self.can_create(state)? {
            log::trace!("create-option ignored: {:?} not eligible", state.input);
            return Ok(Transition::none());
        }
        let input = self.input_reset_after_select();

        if let Some(handler) = self.on_create_option.as_mut() {
            log::debug!("Delegating creation of {:?}", state.input);
            handler(&state.input);
            return Ok(self.emit(Transition { change: None, input }));
        }

        let Some(creatable) = &self.creatable else {
            return Ok(Transition::none());
        };
        let option = creatable.new_option(&state.input);
        if self.is_option_disabled(&option, &state.value) {
            log::trace!("create-option ignored: created option is disabled");
            return Ok(Transition::none());
        }
        if self.is_multi() && self.is_option_selected(&option, &state.value)? {
            log::trace!("create-option ignored: created option already selected");
            return Ok(Transition::none());
        }
        let value = if self.is_multi() {
            let mut items = state.value.as_slice().to_vec();
            items.push(option.clone());
            SelectValue::Multi(items)
        } else {
            SelectValue::Single(option.clone())
        };

        let meta = self.meta(Action::CreateOption).with_option(option);
        Ok(self.emit(Transition {
            change: Some(Change { value, meta }),
            input,
        }))
    }

    // -------------------------------------------------------------------------
    // Input transitions
    // -------------------------------------------------------------------------

    /// The user typed; `text` is the raw new input.
    pub fn input_change(&mut self, text: &str) -> Transition<T> {
        if self.config.is_disabled {
            return Transition::none();
        }
        self.emit(Transition {
            change: None,
            input: Some(input_change(text, InputAction::InputChange)),
        })
    }

    /// Overwrite the input text programmatically.
    pub fn set_input_value(&mut self, text: &str) -> Transition<T> {
        self.emit(Transition {
            change: None,
            input: Some(input_change(text, InputAction::SetValue)),
        })
    }

    /// Focus left the input. The text is kept.
    pub fn input_blur(&mut self, state: &SelectState<T>) -> Transition<T> {
        self.emit(Transition {
            change: None,
            input: Some(input_change(&state.input, InputAction::InputBlur)),
        })
    }

    /// The menu closed. Resets the text when configured to.
    pub fn menu_close(&mut self, state: &SelectState<T>) -> Transition<T> {
        let text = if self.config.clear_input_on_menu_close {
            ""
        } else {
            state.input.as_str()
        };
        self.emit(Transition {
            change: None,
            input: Some(input_change(text, InputAction::MenuClose)),
        })
    }
}
