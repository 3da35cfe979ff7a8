//! Option filtering by free-text query.
//!
//! [`create_filter`] turns a [`FilterConfig`] into a [`Filter`], a pure
//! predicate deciding whether an option matches the current input text. Case
//! and accent folding use nucleo-matcher's character tables so that the
//! behaviour lines up with the fuzzy matching used elsewhere.
//! [`Filter::custom`] wraps a caller-supplied predicate instead.

use std::fmt;
use std::sync::Arc;

use nucleo_matcher::chars;
use serde::{Deserialize, Serialize};

use crate::error::InvalidOptionError;
use crate::option::{Accessors, Candidate};

/// Where in the candidate string the input has to match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchFrom {
    /// Substring match anywhere.
    #[default]
    Any,
    /// Prefix match only.
    Start,
}

/// The serializable part of a filter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Case-fold both sides before comparing.
    pub ignore_case: bool,
    /// Fold accented characters to their base form on both sides.
    pub ignore_accents: bool,
    /// Strip surrounding whitespace before comparing.
    pub trim: bool,
    /// Substring or prefix matching.
    pub match_from: MatchFrom,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            ignore_case: true,
            ignore_accents: true,
            trim: true,
            match_from: MatchFrom::Any,
        }
    }
}

/// Custom candidate stringification.
pub type Stringify<T> = Arc<dyn for<'a> Fn(&Candidate<'a, T>) -> String + Send + Sync>;

/// Caller-supplied match predicate over a candidate and the raw input.
pub type FilterPredicate<T> = Arc<dyn for<'a> Fn(&Candidate<'a, T>, &str) -> bool + Send + Sync>;

/// Full filter configuration, including an optional custom stringifier.
pub struct FilterConfig<T> {
    /// Folding and matching flags.
    pub options: FilterOptions,
    /// Replaces the default `"{label} {value}"` candidate string.
    pub stringify: Option<Stringify<T>>,
}

impl<T> FilterConfig<T> {
    /// Create a config with default flags.
    pub fn new() -> Self {
        Self {
            options: FilterOptions::default(),
            stringify: None,
        }
    }

    /// Use the given flags.
    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    /// Set case folding.
    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.options.ignore_case = ignore;
        self
    }

    /// Set accent folding.
    pub fn ignore_accents(mut self, ignore: bool) -> Self {
        self.options.ignore_accents = ignore;
        self
    }

    /// Set whitespace trimming.
    pub fn trim(mut self, trim: bool) -> Self {
        self.options.trim = trim;
        self
    }

    /// Set substring or prefix matching.
    pub fn match_from(mut self, match_from: MatchFrom) -> Self {
        self.options.match_from = match_from;
        self
    }

    /// Use a custom candidate stringifier.
    pub fn stringify<F>(mut self, stringify: F) -> Self
    where
        F: for<'a> Fn(&Candidate<'a, T>) -> String + Send + Sync + 'static,
    {
        self.stringify = Some(Arc::new(stringify));
        self
    }
}

impl<T> Default for FilterConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<FilterOptions> for FilterConfig<T> {
    fn from(options: FilterOptions) -> Self {
        Self {
            options,
            stringify: None,
        }
    }
}

impl<T> Clone for FilterConfig<T> {
    fn clone(&self) -> Self {
        Self {
            options: self.options,
            stringify: self.stringify.clone(),
        }
    }
}

impl<T> fmt::Debug for FilterConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterConfig")
            .field("options", &self.options)
            .field("stringify", &self.stringify.is_some())
            .finish()
    }
}

/// Build a filter predicate from a configuration.
///
/// # Example
///
/// ```ignore
/// let filter = create_filter(FilterConfig::new().match_from(MatchFrom::Start));
/// let accessors = Accessors::record();
/// assert!(filter.matches_option(&accessors, &record("Apple", "apple"), "ap")?);
/// ```
pub fn create_filter<T>(config: FilterConfig<T>) -> Filter<T> {
    Filter {
        rule: Rule::Config(config),
    }
}

/// Pure predicate deciding whether a candidate matches an input text.
pub struct Filter<T> {
    rule: Rule<T>,
}

enum Rule<T> {
    Config(FilterConfig<T>),
    Custom(FilterPredicate<T>),
}

impl<T> Filter<T> {
    /// A filter that delegates every decision to `predicate`.
    ///
    /// The predicate sees the raw input, untrimmed and unfolded, including
    /// the empty string.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: for<'a> Fn(&Candidate<'a, T>, &str) -> bool + Send + Sync + 'static,
    {
        Self {
            rule: Rule::Custom(Arc::new(predicate)),
        }
    }

    /// The flags this filter was built with. `None` for a custom filter.
    pub fn options(&self) -> Option<&FilterOptions> {
        match &self.rule {
            Rule::Config(config) => Some(&config.options),
            Rule::Custom(_) => None,
        }
    }

    /// Whether `candidate` matches `input`.
    ///
    /// For a configured filter an input that is empty after trimming
    /// matches everything.
    pub fn matches(&self, candidate: &Candidate<'_, T>, input: &str) -> bool {
        let config = match &self.rule {
            Rule::Config(config) => config,
            Rule::Custom(predicate) => return predicate(candidate, input),
        };
        let options = &config.options;
        let input = fold(input, options);
        if input.is_empty() {
            return true;
        }

        let haystack = match &config.stringify {
            Some(stringify) => stringify(candidate),
            None => format!("{} {}", candidate.label, candidate.value),
        };
        let haystack = fold(&haystack, options);

        match options.match_from {
            MatchFrom::Any => haystack.contains(&input),
            MatchFrom::Start => haystack.starts_with(&input),
        }
    }

    /// Extract a candidate from `option` and test it against `input`.
    pub fn matches_option(
        &self,
        accessors: &Accessors<T>,
        option: &T,
        input: &str,
    ) -> Result<bool, InvalidOptionError> {
        let candidate = accessors.candidate(option)?;
        Ok(self.matches(&candidate, input))
    }
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        create_filter(FilterConfig::default())
    }
}

impl<T> Clone for Filter<T> {
    fn clone(&self) -> Self {
        let rule = match &self.rule {
            Rule::Config(config) => Rule::Config(config.clone()),
            Rule::Custom(predicate) => Rule::Custom(Arc::clone(predicate)),
        };
        Self { rule }
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.rule {
            Rule::Config(config) => f.debug_struct("Filter").field("config", config).finish(),
            Rule::Custom(_) => f.debug_struct("Filter").field("custom", &true).finish(),
        }
    }
}

/// Normalize `text` the way a filter with `options` compares it.
///
/// Folding is idempotent: `fold(&fold(s, o), o) == fold(s, o)`.
pub fn fold(text: &str, options: &FilterOptions) -> String {
    let text = if options.trim { text.trim() } else { text };
    text.chars()
        .map(|c| {
            let c = if options.ignore_case {
                chars::to_lower_case(c)
            } else {
                c
            };
            if options.ignore_accents {
                chars::normalize(c)
            } else {
                c
            }
        })
        .collect()
}
