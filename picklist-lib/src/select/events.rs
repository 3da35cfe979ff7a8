//! Event dispatch and keyboard shortcuts.

use serde::Deserialize;

use crate::error::Result;
use crate::value::{SelectState, SelectValue, Transition};

use super::Select;

/// Every action a serial event source can feed into a [`Select`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum SelectEvent<T> {
    SelectOption { option: T },
    DeselectOption { option: T },
    ToggleOption { option: T },
    RemoveValue { option: T },
    PopValue,
    SetValue { value: SelectValue<T> },
    Clear,
    CreateOption,
    InputChange { text: String },
    SetInputValue { text: String },
    InputBlur,
    MenuClose,
    Backspace,
    Escape { menu_open: bool },
}

impl<T: Clone> Select<T> {
    /// Apply one event to `state`.
    pub fn dispatch(
        &mut self,
        state: &SelectState<T>,
        event: SelectEvent<T>,
    ) -> Result<Transition<T>> {
        match event {
            SelectEvent::SelectOption { option } => self.select_option(state, option),
            SelectEvent::DeselectOption { option } => self.deselect_option(state, option),
            SelectEvent::ToggleOption { option } => self.toggle_option(state, option),
            SelectEvent::RemoveValue { option } => self.remove_value(state, option),
            SelectEvent::PopValue => self.pop_value(state),
            SelectEvent::SetValue { value } => self.set_value(value),
            SelectEvent::Clear => self.clear(state),
            SelectEvent::CreateOption => self.create_option(state),
            SelectEvent::InputChange { text } => Ok(self.input_change(&text)),
            SelectEvent::SetInputValue { text } => Ok(self.set_input_value(&text)),
            SelectEvent::InputBlur => Ok(self.input_blur(state)),
            SelectEvent::MenuClose => Ok(self.menu_close(state)),
            SelectEvent::Backspace => self.backspace(state),
            SelectEvent::Escape { menu_open } => self.escape(state, menu_open),
        }
    }

    /// Backspace pressed.
    ///
    /// Only acts on an empty input: multi mode pops the last value, a
    /// clearable single select clears a non-empty value.
    pub fn backspace(&mut self, state: &SelectState<T>) -> Result<Transition<T>> {
        if !state.input.is_empty() || !self.config.backspace_removes_value {
            return Ok(Transition::none());
        }
        if self.is_multi() {
            self.pop_value(state)
        } else if self.config.is_clearable && !state.value.is_empty() {
            self.clear(state)
        } else {
            Ok(Transition::none())
        }
    }

    /// Escape pressed.
    ///
    /// Closes an open menu; on a closed menu clears the value when the select
    /// is clearable and escape is configured to clear.
    pub fn escape(&mut self, state: &SelectState<T>, menu_open: bool) -> Result<Transition<T>> {
        if menu_open {
            return Ok(self.menu_close(state));
        }
        if self.config.is_clearable && self.config.escape_clears_value && !state.value.is_empty() {
            return self.clear(state);
        }
        Ok(Transition::none())
    }
}
