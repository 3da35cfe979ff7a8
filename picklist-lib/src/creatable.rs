//! Creating new options from the input text.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InvalidOptionError;
use crate::option::{Accessors, Record};
use crate::value::SelectValue;

/// Where the "create" entry appears in the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateOptionPosition {
    First,
    #[default]
    Last,
}

/// The serializable part of the creatable behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatableOptions {
    /// Offer creation while options are still loading.
    pub allow_create_while_loading: bool,
    /// Position of the create entry in the menu.
    pub create_option_position: CreateOptionPosition,
}

impl Default for CreatableOptions {
    fn default() -> Self {
        Self {
            allow_create_while_loading: true,
            create_option_position: CreateOptionPosition::Last,
        }
    }
}

/// Builds option data from `(input, create_label)`.
pub type NewOptionData<T> = Arc<dyn Fn(&str, &str) -> T + Send + Sync>;

/// Formats the label of the create entry.
pub type CreateLabel = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Extra validation of `(input, current_value, options)`.
pub type NewOptionValidator<T> = Arc<dyn Fn(&str, &SelectValue<T>, &[T]) -> bool + Send + Sync>;

/// Callbacks that turn input text into a new option.
pub struct Creatable<T> {
    get_new_option_data: NewOptionData<T>,
    format_create_label: CreateLabel,
    is_valid_new_option: Option<NewOptionValidator<T>>,
}

impl<T> Creatable<T> {
    /// Create with the given option constructor and the default label format.
    pub fn new<F>(get_new_option_data: F) -> Self
    where
        F: Fn(&str, &str) -> T + Send + Sync + 'static,
    {
        Self {
            get_new_option_data: Arc::new(get_new_option_data),
            format_create_label: Arc::new(default_create_label),
            is_valid_new_option: None,
        }
    }

    /// Use a custom create label.
    pub fn format_create_label<F>(mut self, format: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.format_create_label = Arc::new(format);
        self
    }

    /// Add a validation predicate on top of the built-in checks.
    pub fn is_valid_new_option<F>(mut self, validate: F) -> Self
    where
        F: Fn(&str, &SelectValue<T>, &[T]) -> bool + Send + Sync + 'static,
    {
        self.is_valid_new_option = Some(Arc::new(validate));
        self
    }

    /// Label of the create entry for `input`.
    pub fn create_label(&self, input: &str) -> String {
        (self.format_create_label)(input)
    }

    /// Build the option that creating `input` would select.
    pub fn new_option(&self, input: &str) -> T {
        let label = self.create_label(input);
        (self.get_new_option_data)(input, &label)
    }

    /// Whether `input` may be turned into a new option right now.
    ///
    /// Rejects creation while loading (unless allowed), blank input, input
    /// equal (ignoring case) to the value or label of an existing or selected
    /// option, and anything the custom validator refuses.
    pub fn is_eligible(
        &self,
        accessors: &Accessors<T>,
        settings: &CreatableOptions,
        input: &str,
        value: &SelectValue<T>,
        options: &[T],
        is_loading: bool,
    ) -> Result<bool, InvalidOptionError> {
        if is_loading && !settings.allow_create_while_loading {
            return Ok(false);
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        let needle = trimmed.to_lowercase();
        for option in value.as_slice().iter().chain(options) {
            if matches_existing(accessors, &needle, option)? {
                return Ok(false);
            }
        }
        Ok(self
            .is_valid_new_option
            .as_ref()
            .is_none_or(|validate| validate(input, value, options)))
    }
}

impl Creatable<Record> {
    /// Creatable producing `{ label, value, __isNew__: true }` records.
    pub fn records() -> Self {
        Self::new(|input, label| {
            let mut rec = Record::new();
            rec.insert("label".to_string(), Value::String(label.to_string()));
            rec.insert("value".to_string(), Value::String(input.to_string()));
            rec.insert("__isNew__".to_string(), Value::Bool(true));
            rec
        })
    }
}

impl<T> Clone for Creatable<T> {
    fn clone(&self) -> Self {
        Self {
            get_new_option_data: Arc::clone(&self.get_new_option_data),
            format_create_label: Arc::clone(&self.format_create_label),
            is_valid_new_option: self.is_valid_new_option.clone(),
        }
    }
}

impl<T> fmt::Debug for Creatable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Creatable")
            .field("is_valid_new_option", &self.is_valid_new_option.is_some())
            .finish_non_exhaustive()
    }
}

fn default_create_label(input: &str) -> String {
    format!("Create \"{input}\"")
}

fn matches_existing<T>(
    accessors: &Accessors<T>,
    needle: &str,
    option: &T,
) -> Result<bool, InvalidOptionError> {
    Ok(accessors.value(option)?.to_lowercase() == needle
        || accessors.label(option)?.to_lowercase() == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{record, record_field};

    fn eligible(
        creatable: &Creatable<Record>,
        input: &str,
        value: &SelectValue<Record>,
        options: &[Record],
    ) -> bool {
        creatable
            .is_eligible(
                &Accessors::record(),
                &CreatableOptions::default(),
                input,
                value,
                options,
                false,
            )
            .unwrap()
    }

    #[test]
    fn test_default_label() {
        let creatable = Creatable::records();
        assert_eq!(creatable.create_label("kiwi"), "Create \"kiwi\"");
    }

    #[test]
    fn test_records_new_option() {
        let option = Creatable::records().new_option("kiwi");
        assert_eq!(record_field(&option, "value").unwrap(), "kiwi");
        assert_eq!(record_field(&option, "label").unwrap(), "Create \"kiwi\"");
        assert_eq!(option.get("__isNew__"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_blank_input_not_eligible() {
        let creatable = Creatable::records();
        assert!(!eligible(&creatable, "", &SelectValue::Empty, &[]));
        assert!(!eligible(&creatable, "   ", &SelectValue::Empty, &[]));
    }

    #[test]
    fn test_duplicates_not_eligible() {
        let creatable = Creatable::records();
        let options = vec![record("Apple", "apple")];
        assert!(!eligible(&creatable, "APPLE", &SelectValue::Empty, &options));
        let selected = SelectValue::Multi(vec![record("Kiwi", "kiwi")]);
        assert!(!eligible(&creatable, "kiwi", &selected, &options));
        assert!(eligible(&creatable, "mango", &selected, &options));
    }

    #[test]
    fn test_custom_validator() {
        let creatable = Creatable::records().is_valid_new_option(|input, _, _| input.len() > 3);
        assert!(!eligible(&creatable, "fig", &SelectValue::Empty, &[]));
        assert!(eligible(&creatable, "mango", &SelectValue::Empty, &[]));
    }

    #[test]
    fn test_loading_blocks_when_disallowed() {
        let creatable = Creatable::records();
        let settings = CreatableOptions {
            allow_create_while_loading: false,
            ..Default::default()
        };
        let accessors = Accessors::record();
        let blocked = creatable
            .is_eligible(&accessors, &settings, "mango", &SelectValue::Empty, &[], true)
            .unwrap();
        assert!(!blocked);
        let allowed = creatable
            .is_eligible(
                &accessors,
                &CreatableOptions::default(),
                "mango",
                &SelectValue::Empty,
                &[],
                true,
            )
            .unwrap();
        assert!(allowed);
    }
}
