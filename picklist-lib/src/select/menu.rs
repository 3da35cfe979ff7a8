//! Building the visible menu.

use serde::Serialize;

use crate::creatable::CreateOptionPosition;
use crate::error::Result;
use crate::option::flatten_options;
use crate::value::SelectState;

use super::Select;

/// One row of the menu as the rendering layer should show it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuOption<T> {
    /// The option itself.
    pub data: T,
    /// Extracted label.
    pub label: String,
    /// Extracted value.
    pub value: String,
    /// Label of the group the option belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Shown but not selectable.
    pub is_disabled: bool,
    /// Part of the current value.
    pub is_selected: bool,
    /// The entry that creates a new option from the input text.
    pub is_new: bool,
}

impl<T: Clone> Select<T> {
    /// Options to show for the current state, in display order.
    ///
    /// Options failing the filter are dropped, as are selected options when
    /// selected options are hidden. The create entry is added first or last
    /// when creation is possible.
    pub fn menu_options(&self, state: &SelectState<T>) -> Result<Vec<MenuOption<T>>> {
        let hide_selected = self.config.hides_selected();
        let mut menu = Vec::new();

        for (group, option) in flatten_options(&self.options) {
            let candidate = self.accessors.candidate(option)?;
            if let Some(filter) = &self.filter
                && !filter.matches(&candidate, &state.input)
            {
                continue;
            }
            let is_selected = self.is_option_selected(option, &state.value)?;
            if is_selected && hide_selected {
                continue;
            }
            menu.push(MenuOption {
                data: option.clone(),
                label: candidate.label,
                value: candidate.value,
                group: group.map(str::to_string),
                is_disabled: self.is_option_disabled(option, &state.value),
                is_selected,
                is_new: false,
            });
        }

        if self.can_create(state)?
            && let Some(creatable) = &self.creatable
        {
            let data = creatable.new_option(&state.input);
            let entry = MenuOption {
                value: self.accessors.value(&data)?,
                label: creatable.create_label(&state.input),
                data,
                group: None,
                is_disabled: false,
                is_selected: false,
                is_new: true,
            };
            match self.config.create.create_option_position {
                CreateOptionPosition::First => menu.insert(0, entry),
                CreateOptionPosition::Last => menu.push(entry),
            }
        }

        log::trace!("Menu for {:?} has {} option(s)", state.input, menu.len());
        Ok(menu)
    }

    /// Whether the current input could be turned into a new option.
    pub fn can_create(&self, state: &SelectState<T>) -> Result<bool> {
        let Some(creatable) = &self.creatable else {
            return Ok(false);
        };
        let options = self.all_options();
        Ok(creatable.is_eligible(
            &self.accessors,
            &self.config.create,
            &state.input,
            &state.value,
            &options,
            self.is_loading,
        )?)
    }
}
