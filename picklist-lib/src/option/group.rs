//! Option groups.

use serde::{Deserialize, Serialize};

/// A named collection of options, only meaningful for menu presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group<T> {
    /// Heading shown above the group.
    pub label: String,
    /// Options inside the group.
    pub options: Vec<T>,
}

impl<T> Group<T> {
    /// Create a new group.
    pub fn new(label: impl Into<String>, options: Vec<T>) -> Self {
        Self {
            label: label.into(),
            options,
        }
    }
}

/// An entry of an options list: either a plain option or a group.
///
/// Deserialization tries the group shape first, so a JSON object with both
/// `label` and `options` keys is read as a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionEntry<T> {
    /// A group of options.
    Group(Group<T>),
    /// A single option.
    Option(T),
}

impl<T> From<T> for OptionEntry<T> {
    fn from(option: T) -> Self {
        Self::Option(option)
    }
}

/// Iterate every option in `entries`, descending into groups.
///
/// Yields each option with the label of the group it came from.
pub fn flatten_options<T>(entries: &[OptionEntry<T>]) -> impl Iterator<Item = (Option<&str>, &T)> {
    entries.iter().flat_map(|entry| {
        let (group, options) = match entry {
            OptionEntry::Option(option) => (None, std::slice::from_ref(option)),
            OptionEntry::Group(group) => (Some(group.label.as_str()), group.options.as_slice()),
        };
        options.iter().map(move |option| (group, option))
    })
}
