//! Select construction and shared helpers.

use std::fmt;
use std::sync::Arc;

use crate::action::{Action, ActionMeta, InputAction, InputActionMeta};
use crate::config::SelectConfig;
use crate::creatable::Creatable;
use crate::error::InvalidOptionError;
use crate::filter::{Filter, FilterConfig, create_filter};
use crate::option::{Accessors, OptionEntry, flatten_options};
use crate::value::{Change, InputChange, SelectValue, Transition};

/// Called with the new value whenever a transition changes it.
pub type ChangeHandler<T> = Box<dyn FnMut(&SelectValue<T>, &ActionMeta<T>) + Send>;

/// Called with the new input text whenever a transition changes it.
pub type InputChangeHandler = Box<dyn FnMut(&str, &InputActionMeta) + Send>;

/// Called instead of `on_change` when an option is created.
pub type CreateHandler = Box<dyn FnMut(&str) + Send>;

/// Decides a per-option flag given the option and the selected options.
pub type OptionPredicate<T> = Arc<dyn Fn(&T, &[T]) -> bool + Send + Sync>;

/// A searchable select over options of type `T`.
///
/// # Example
///
/// ```ignore
/// let mut select = Select::new(SelectConfig::multi(), Accessors::record())
///     .with_options(vec![record("A", "a"), record("B", "b")])
///     .on_change(|value, meta| println!("{:?} via {}", value, meta.action));
///
/// let mut state = SelectState::new(true);
/// let transition = select.select_option(&state, record("A", "a"))?;
/// state.apply(&transition);
/// ```
pub struct Select<T> {
    pub(super) config: SelectConfig,
    pub(super) accessors: Accessors<T>,
    pub(super) filter: Option<Filter<T>>,
    pub(super) options: Vec<OptionEntry<T>>,
    pub(super) is_option_disabled: Option<OptionPredicate<T>>,
    pub(super) is_option_selected: Option<OptionPredicate<T>>,
    pub(super) creatable: Option<Creatable<T>>,
    pub(super) is_loading: bool,
    on_change: Option<ChangeHandler<T>>,
    on_input_change: Option<InputChangeHandler>,
    pub(super) on_create_option: Option<CreateHandler>,
}

impl<T> Select<T> {
    /// Create a select with no options.
    ///
    /// The filter is built from `config.filter`.
    pub fn new(config: SelectConfig, accessors: Accessors<T>) -> Self {
        let filter = create_filter(FilterConfig::from(config.filter));
        Self {
            config,
            accessors,
            filter: Some(filter),
            options: Vec::new(),
            is_option_disabled: None,
            is_option_selected: None,
            creatable: None,
            is_loading: false,
            on_change: None,
            on_input_change: None,
            on_create_option: None,
        }
    }

    /// Replace the options with a flat list.
    pub fn with_options(mut self, options: Vec<T>) -> Self {
        self.options = options.into_iter().map(OptionEntry::Option).collect();
        self
    }

    /// Replace the options with a list that may contain groups.
    pub fn with_entries(mut self, entries: Vec<OptionEntry<T>>) -> Self {
        self.options = entries;
        self
    }

    /// Replace the filter. `None` shows every option regardless of input.
    pub fn with_filter(mut self, filter: Option<Filter<T>>) -> Self {
        self.filter = filter;
        self
    }

    /// Override how disabled options are detected.
    pub fn option_disabled<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T, &[T]) -> bool + Send + Sync + 'static,
    {
        self.is_option_disabled = Some(Arc::new(predicate));
        self
    }

    /// Override how selected options are detected.
    pub fn option_selected<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T, &[T]) -> bool + Send + Sync + 'static,
    {
        self.is_option_selected = Some(Arc::new(predicate));
        self
    }

    /// Allow creating options from the input text.
    pub fn with_creatable(mut self, creatable: Creatable<T>) -> Self {
        self.creatable = Some(creatable);
        self
    }

    /// Install the value change handler.
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&SelectValue<T>, &ActionMeta<T>) + Send + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Install the input text change handler.
    pub fn on_input_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&str, &InputActionMeta) + Send + 'static,
    {
        self.on_input_change = Some(Box::new(handler));
        self
    }

    /// Take over option creation. `on_change` is not called for creations.
    pub fn on_create_option<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.on_create_option = Some(Box::new(handler));
        self
    }

    /// Replace the options.
    pub fn set_options(&mut self, entries: Vec<OptionEntry<T>>) {
        self.options = entries;
    }

    /// Mark options as loading or loaded.
    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    /// Whether options are currently loading.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The widget configuration.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// The label/value extractors.
    pub fn accessors(&self) -> &Accessors<T> {
        &self.accessors
    }

    /// The configured options, groups included.
    pub fn entries(&self) -> &[OptionEntry<T>] {
        &self.options
    }

    /// Whether `option` counts as selected in `value`.
    pub fn is_option_selected(
        &self,
        option: &T,
        value: &SelectValue<T>,
    ) -> Result<bool, InvalidOptionError> {
        match &self.is_option_selected {
            Some(predicate) => Ok(predicate(option, value.as_slice())),
            None => value.contains(&self.accessors, option),
        }
    }

    /// Whether `option` is disabled given the current `value`.
    pub fn is_option_disabled(&self, option: &T, value: &SelectValue<T>) -> bool {
        self.is_option_disabled
            .as_ref()
            .is_some_and(|predicate| predicate(option, value.as_slice()))
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    pub(super) fn is_multi(&self) -> bool {
        self.config.is_multi
    }

    pub(super) fn meta(&self, action: Action) -> ActionMeta<T> {
        ActionMeta::new(action).with_name(self.config.name.clone())
    }

    /// Input reset that accompanies selecting or creating an option.
    pub(super) fn input_reset_after_select(&self) -> Option<InputChange> {
        if !self.is_multi() || self.config.clear_input_on_select {
            Some(input_change("", InputAction::SetValue))
        } else {
            None
        }
    }

    /// Fire the handlers for a transition and hand it back.
    pub(super) fn emit(&mut self, transition: Transition<T>) -> Transition<T> {
        if let Some(input) = &transition.input {
            log::debug!("Select input -> {:?} ({})", input.text, input.meta.action);
            if let Some(handler) = self.on_input_change.as_mut() {
                handler(&input.text, &input.meta);
            }
        }
        if let Some(Change { value, meta }) = &transition.change {
            log::debug!("Select value now has {} option(s) ({})", value.len(), meta.action);
            if let Some(handler) = self.on_change.as_mut() {
                handler(value, meta);
            }
        }
        transition
    }
}

impl<T: Clone> Select<T> {
    /// Every option, groups flattened.
    pub fn all_options(&self) -> Vec<T> {
        flatten_options(&self.options)
            .map(|(_, option)| option.clone())
            .collect()
    }
}

impl<T> fmt::Debug for Select<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("config", &self.config)
            .field("options", &self.options.len())
            .field("creatable", &self.creatable.is_some())
            .field("is_loading", &self.is_loading)
            .finish_non_exhaustive()
    }
}

pub(super) fn input_change(text: &str, action: InputAction) -> InputChange {
    InputChange {
        text: text.to_string(),
        meta: InputActionMeta::new(action),
    }
}
