//! Label and value extraction.

use std::fmt;
use std::sync::Arc;

use crate::error::InvalidOptionError;

use super::record::{Record, record_field};

/// A pure function deriving a string from an option.
pub type Extractor<T> = Arc<dyn Fn(&T) -> Result<String, InvalidOptionError> + Send + Sync>;

/// The label/value extractor pair for an option type.
///
/// # Example
///
/// ```ignore
/// struct Country {
///     code: String,
///     name: String,
/// }
///
/// let accessors = Accessors::new(
///     |c: &Country| Ok(c.name.clone()),
///     |c: &Country| Ok(c.code.clone()),
/// );
/// ```
pub struct Accessors<T> {
    label: Extractor<T>,
    value: Extractor<T>,
}

impl<T> Accessors<T> {
    /// Create accessors from label and value extractors.
    pub fn new<L, V>(label: L, value: V) -> Self
    where
        L: Fn(&T) -> Result<String, InvalidOptionError> + Send + Sync + 'static,
        V: Fn(&T) -> Result<String, InvalidOptionError> + Send + Sync + 'static,
    {
        Self {
            label: Arc::new(label),
            value: Arc::new(value),
        }
    }

    /// Display string for an option.
    pub fn label(&self, option: &T) -> Result<String, InvalidOptionError> {
        (self.label)(option)
    }

    /// Identity string for an option.
    pub fn value(&self, option: &T) -> Result<String, InvalidOptionError> {
        (self.value)(option)
    }

    /// Extract both strings into a [`Candidate`] for filtering.
    pub fn candidate<'a>(&self, option: &'a T) -> Result<Candidate<'a, T>, InvalidOptionError> {
        Ok(Candidate {
            label: self.label(option)?,
            value: self.value(option)?,
            data: option,
        })
    }

    /// Whether two options share the same extracted value.
    pub fn same_option(&self, a: &T, b: &T) -> Result<bool, InvalidOptionError> {
        Ok(self.value(a)? == self.value(b)?)
    }

    /// Position of the first option in `options` with the same value as `option`.
    pub fn position(&self, options: &[T], option: &T) -> Result<Option<usize>, InvalidOptionError> {
        let target = self.value(option)?;
        for (index, candidate) in options.iter().enumerate() {
            if self.value(candidate)? == target {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }
}

impl Accessors<Record> {
    /// Accessors reading the `label` and `value` keys of a record.
    pub fn record() -> Self {
        Self::fields("label", "value")
    }

    /// Accessors reading arbitrary keys of a record.
    pub fn fields(label: &str, value: &str) -> Self {
        let label = label.to_string();
        let value = value.to_string();
        Self::new(
            move |rec: &Record| record_field(rec, &label),
            move |rec: &Record| record_field(rec, &value),
        )
    }
}

impl Default for Accessors<Record> {
    fn default() -> Self {
        Self::record()
    }
}

impl Accessors<String> {
    /// Accessors for plain strings, used as both label and value.
    pub fn strings() -> Self {
        Self::new(|s: &String| Ok(s.clone()), |s: &String| Ok(s.clone()))
    }
}

impl<T> Clone for Accessors<T> {
    fn clone(&self) -> Self {
        Self {
            label: Arc::clone(&self.label),
            value: Arc::clone(&self.value),
        }
    }
}

impl<T> fmt::Debug for Accessors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessors").finish_non_exhaustive()
    }
}

/// An option together with its extracted label and value.
///
/// This is what the filter sees.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a, T> {
    /// Extracted label.
    pub label: String,
    /// Extracted value.
    pub value: String,
    /// The original option.
    pub data: &'a T,
}
