//! Tags describing why the value or the input text changed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Transition that produced a new selected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    SelectOption,
    DeselectOption,
    RemoveValue,
    PopValue,
    SetValue,
    Clear,
    CreateOption,
}

impl Action {
    /// Wire name of the action, e.g. `select-option`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelectOption => "select-option",
            Self::DeselectOption => "deselect-option",
            Self::RemoveValue => "remove-value",
            Self::PopValue => "pop-value",
            Self::SetValue => "set-value",
            Self::Clear => "clear",
            Self::CreateOption => "create-option",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata passed to `on_change` alongside the new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionMeta<T> {
    /// What happened.
    pub action: Action,
    /// The option that was selected, deselected or created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<T>,
    /// The option that was removed or popped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_value: Option<T>,
    /// Name of the widget, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl<T> ActionMeta<T> {
    /// Metadata carrying only the action tag.
    pub fn new(action: Action) -> Self {
        Self {
            action,
            option: None,
            removed_value: None,
            name: None,
        }
    }

    /// Attach the affected option.
    pub fn with_option(mut self, option: T) -> Self {
        self.option = Some(option);
        self
    }

    /// Attach the removed option.
    pub fn with_removed_value(mut self, removed: T) -> Self {
        self.removed_value = Some(removed);
        self
    }

    /// Attach the widget name.
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }
}

/// Transition that produced a new input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputAction {
    SetValue,
    InputChange,
    InputBlur,
    MenuClose,
}

impl InputAction {
    /// Wire name of the action, e.g. `input-change`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SetValue => "set-value",
            Self::InputChange => "input-change",
            Self::InputBlur => "input-blur",
            Self::MenuClose => "menu-close",
        }
    }
}

impl fmt::Display for InputAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata passed to `on_input_change` alongside the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputActionMeta {
    /// What changed the text.
    pub action: InputAction,
}

impl InputActionMeta {
    /// Metadata for the given action.
    pub fn new(action: InputAction) -> Self {
        Self { action }
    }
}
