//! Widget configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::creatable::CreatableOptions;
use crate::error::ConfigError;
use crate::filter::FilterOptions;

/// Per-widget configuration, fixed for the life of one widget instance.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "is_multi": true, "filter": { "match_from": "start" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Widget name, echoed in every [`ActionMeta`](crate::action::ActionMeta).
    pub name: Option<String>,

    /// Hold a list of options instead of a single one.
    pub is_multi: bool,

    /// Ignore user-driven transitions. Programmatic `set_value` still applies.
    pub is_disabled: bool,

    /// Allow the value to be cleared from the keyboard.
    pub is_clearable: bool,

    /// Hide selected options from the menu. Defaults to `is_multi`.
    pub hide_selected_options: Option<bool>,

    /// Reset the input text after selecting in multi mode.
    /// Single mode always resets.
    pub clear_input_on_select: bool,

    /// Reset the input text when the menu closes.
    pub clear_input_on_menu_close: bool,

    /// Backspace on an empty input removes the last value.
    pub backspace_removes_value: bool,

    /// Escape on a closed menu clears the value (requires `is_clearable`).
    pub escape_clears_value: bool,

    /// Option filter flags.
    pub filter: FilterOptions,

    /// Creatable behaviour, used when a creatable is attached.
    pub create: CreatableOptions,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            name: None,
            is_multi: false,
            is_disabled: false,
            is_clearable: false,
            hide_selected_options: None,
            clear_input_on_select: true,
            clear_input_on_menu_close: true,
            backspace_removes_value: true,
            escape_clears_value: false,
            filter: FilterOptions::default(),
            create: CreatableOptions::default(),
        }
    }
}

impl SelectConfig {
    /// Single-select config with defaults.
    pub fn single() -> Self {
        Self::default()
    }

    /// Multi-select config with defaults.
    pub fn multi() -> Self {
        Self {
            is_multi: true,
            ..Default::default()
        }
    }

    /// Parse a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_json_str(&text)?;
        log::debug!("Loaded select config from {}", path.display());
        Ok(config)
    }

    /// Whether selected options are left out of the menu.
    pub fn hides_selected(&self) -> bool {
        self.hide_selected_options.unwrap_or(self.is_multi)
    }

    /// Set the widget name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Disable user interaction.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    /// Allow keyboard clearing.
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.is_clearable = clearable;
        self
    }

    /// Override whether selected options are hidden from the menu.
    pub fn hide_selected(mut self, hide: bool) -> Self {
        self.hide_selected_options = Some(hide);
        self
    }

    /// Set whether multi-mode selection resets the input text.
    pub fn clear_input_on_select(mut self, clear: bool) -> Self {
        self.clear_input_on_select = clear;
        self
    }

    /// Set whether closing the menu resets the input text.
    pub fn clear_input_on_menu_close(mut self, clear: bool) -> Self {
        self.clear_input_on_menu_close = clear;
        self
    }

    /// Set whether backspace removes values.
    pub fn backspace_removes_value(mut self, removes: bool) -> Self {
        self.backspace_removes_value = removes;
        self
    }

    /// Set whether escape clears the value.
    pub fn escape_clears_value(mut self, clears: bool) -> Self {
        self.escape_clears_value = clears;
        self
    }

    /// Set the filter flags.
    pub fn filter(mut self, filter: FilterOptions) -> Self {
        self.filter = filter;
        self
    }

    /// Set the creatable options.
    pub fn create(mut self, create: CreatableOptions) -> Self {
        self.create = create;
        self
    }
}
