//! The selected value and the consumer-owned selection state.

use serde::{Deserialize, Serialize};

use crate::action::{ActionMeta, InputActionMeta};
use crate::error::InvalidOptionError;
use crate::option::Accessors;

/// The current selection.
///
/// The empty selection is [`SelectValue::Empty`] in single mode and an empty
/// [`SelectValue::Multi`] in multi mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectValue<T> {
    /// Nothing selected.
    #[default]
    Empty,
    /// Ordered selection in multi mode.
    Multi(Vec<T>),
    /// One selected option in single mode.
    Single(T),
}

impl<T> SelectValue<T> {
    /// The empty value for the given mode.
    pub fn empty(is_multi: bool) -> Self {
        if is_multi {
            Self::Multi(Vec::new())
        } else {
            Self::Empty
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Single(_) => false,
            Self::Multi(items) => items.is_empty(),
        }
    }

    /// Number of selected options.
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single(_) => 1,
            Self::Multi(items) => items.len(),
        }
    }

    /// The selected options as a slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Empty => &[],
            Self::Single(item) => std::slice::from_ref(item),
            Self::Multi(items) => items,
        }
    }

    /// Consume into an ordered list of options.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(item) => vec![item],
            Self::Multi(items) => items,
        }
    }

    /// Whether an option with the same extracted value is selected.
    pub fn contains(
        &self,
        accessors: &Accessors<T>,
        option: &T,
    ) -> Result<bool, InvalidOptionError> {
        Ok(accessors.position(self.as_slice(), option)?.is_some())
    }
}

impl<T> From<Vec<T>> for SelectValue<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Multi(items)
    }
}

/// A new selected value and the action that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Change<T> {
    /// The value after the transition.
    pub value: SelectValue<T>,
    /// Why the value changed.
    pub meta: ActionMeta<T>,
}

/// A new input text and the action that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputChange {
    /// The input text after the transition.
    pub text: String,
    /// Why the text changed.
    pub meta: InputActionMeta,
}

/// Everything one call into the state machine produced.
///
/// Both parts are absent when a precondition did not hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition<T> {
    /// Value change, if any.
    pub change: Option<Change<T>>,
    /// Input text change, if any.
    pub input: Option<InputChange>,
}

impl<T> Transition<T> {
    /// A transition that changed nothing.
    pub fn none() -> Self {
        Self {
            change: None,
            input: None,
        }
    }

    /// Whether neither the value nor the input changed.
    pub fn is_noop(&self) -> bool {
        self.change.is_none() && self.input.is_none()
    }

    /// The new value, if the transition changed it.
    pub fn value(&self) -> Option<&SelectValue<T>> {
        self.change.as_ref().map(|change| &change.value)
    }

    /// The new input text, if the transition changed it.
    pub fn text(&self) -> Option<&str> {
        self.input.as_ref().map(|input| input.text.as_str())
    }
}

impl<T> Default for Transition<T> {
    fn default() -> Self {
        Self::none()
    }
}

/// The controlled state of one widget: the selection and the input text.
///
/// The state machine never holds on to this; consumers pass it into every
/// call and fold the returned [`Transition`] back in with [`SelectState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectState<T> {
    /// Current selection.
    pub value: SelectValue<T>,
    /// Current input text.
    pub input: String,
}

impl<T> SelectState<T> {
    /// Empty state for the given mode.
    pub fn new(is_multi: bool) -> Self {
        Self {
            value: SelectValue::empty(is_multi),
            input: String::new(),
        }
    }

    /// State with an initial value.
    pub fn with_value(value: SelectValue<T>) -> Self {
        Self {
            value,
            input: String::new(),
        }
    }
}

impl<T: Clone> SelectState<T> {
    /// Fold a transition into this state.
    pub fn apply(&mut self, transition: &Transition<T>) {
        if let Some(change) = &transition.change {
            self.value = change.value.clone();
        }
        if let Some(input) = &transition.input {
            self.input = input.text.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_per_mode() {
        assert_eq!(SelectValue::<String>::empty(false), SelectValue::Empty);
        assert_eq!(SelectValue::<String>::empty(true), SelectValue::Multi(vec![]));
        assert!(SelectValue::<String>::empty(true).is_empty());
    }

    #[test]
    fn test_as_slice() {
        let single = SelectValue::Single("a".to_string());
        assert_eq!(single.as_slice(), ["a".to_string()]);
        assert_eq!(single.len(), 1);
        let multi = SelectValue::Multi(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(multi.len(), 2);
        assert!(SelectValue::<String>::Empty.as_slice().is_empty());
    }

    #[test]
    fn test_serde_shapes() {
        let value: SelectValue<String> = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(value, SelectValue::Empty);
        let value: SelectValue<String> = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(value, SelectValue::Multi(vec!["a".into(), "b".into()]));
        let value: SelectValue<String> = serde_json::from_value(json!("a")).unwrap();
        assert_eq!(value, SelectValue::Single("a".into()));
        assert_eq!(serde_json::to_value(SelectValue::<String>::Empty).unwrap(), json!(null));
    }

    #[test]
    fn test_noop_transition() {
        let transition = Transition::<String>::none();
        assert!(transition.is_noop());
        assert!(transition.value().is_none());
        assert!(transition.text().is_none());
    }
}
