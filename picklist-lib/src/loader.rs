//! Asynchronous option loading state.
//!
//! [`AsyncOptions`] does not load anything itself. It tracks which query is
//! in flight, which query the visible options belong to, and an optional
//! per-query cache. The caller performs the load for each [`LoadRequest`]
//! and hands the result back through [`AsyncOptions::resolve`]. Responses
//! for anything but the latest request are dropped.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifies one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(u64);

/// A query the caller has to load options for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LoadRequest {
    /// Matches the response to its request.
    pub id: RequestId,
    /// Input text to load options for.
    pub query: String,
}

/// Options shown before the user types.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DefaultOptions<T> {
    /// Show nothing until the user types.
    #[default]
    None,
    /// Show a fixed list.
    Provided(Vec<T>),
    /// Load the options for the empty query on mount.
    Autoload,
}

/// Loader settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Keep loaded results per query.
    pub cache_options: bool,
}

/// Loading state for a select whose options come from a callback.
#[derive(Debug, Clone)]
pub struct AsyncOptions<T> {
    options: LoaderOptions,
    default_options: DefaultOptions<T>,
    loaded_default_options: Option<Vec<T>>,
    cache: HashMap<String, Vec<T>>,
    is_loading: bool,
    input_value: String,
    loaded_input_value: Option<String>,
    loaded_options: Vec<T>,
    pass_empty_options: bool,
    last_request: Option<LoadRequest>,
    default_request: Option<LoadRequest>,
    next_id: u64,
}

impl<T: Clone> AsyncOptions<T> {
    /// Create a loader.
    pub fn new(options: LoaderOptions) -> Self {
        Self {
            options,
            default_options: DefaultOptions::None,
            loaded_default_options: None,
            cache: HashMap::new(),
            is_loading: false,
            input_value: String::new(),
            loaded_input_value: None,
            loaded_options: Vec::new(),
            pass_empty_options: false,
            last_request: None,
            default_request: None,
            next_id: 0,
        }
    }

    /// Set the options shown before typing.
    pub fn with_default_options(mut self, default_options: DefaultOptions<T>) -> Self {
        self.default_options = default_options;
        self
    }

    /// Start the autoload of default options, if configured.
    pub fn mount(&mut self) -> Option<LoadRequest> {
        if !matches!(self.default_options, DefaultOptions::Autoload) {
            return None;
        }
        log::debug!("Autoloading default options");
        self.is_loading = true;
        let request = self.next_request("");
        self.default_request = Some(request.clone());
        Some(request)
    }

    /// The input text changed to `query`.
    ///
    /// An empty query drops any pending load. A cached query is applied
    /// immediately. Anything else starts a load the caller must perform.
    pub fn input_change(&mut self, query: &str) -> Option<LoadRequest> {
        if query.is_empty() {
            self.last_request = None;
            self.input_value.clear();
            self.loaded_input_value = None;
            self.loaded_options.clear();
            self.is_loading = self.default_request.is_some();
            self.pass_empty_options = false;
            return None;
        }

        self.input_value = query.to_string();
        if self.options.cache_options
            && let Some(cached) = self.cache.get(query)
        {
            log::debug!("Options cache hit for {:?}", query);
            self.last_request = None;
            self.loaded_input_value = Some(query.to_string());
            self.loaded_options = cached.clone();
            self.is_loading = self.default_request.is_some();
            self.pass_empty_options = false;
            return None;
        }

        self.is_loading = true;
        self.pass_empty_options = self.loaded_input_value.is_none();
        let request = self.next_request(query);
        self.last_request = Some(request.clone());
        Some(request)
    }

    /// Hand back the result of a load.
    ///
    /// Returns `false` without touching the state when `request` is not the
    /// latest one. `None` counts as an empty, uncached result.
    pub fn resolve(&mut self, request: &LoadRequest, options: Option<Vec<T>>) -> bool {
        if self.default_request.as_ref() == Some(request) {
            self.default_request = None;
            self.loaded_default_options = Some(options.unwrap_or_default());
            self.is_loading = self.last_request.is_some();
            return true;
        }
        if self.last_request.as_ref() != Some(request) {
            log::debug!("Dropping stale options for {:?}", request.query);
            return false;
        }
        self.last_request = None;
        self.is_loading = false;
        self.pass_empty_options = false;

        if self.options.cache_options
            && let Some(loaded) = &options
        {
            self.cache.insert(request.query.clone(), loaded.clone());
        }
        self.loaded_input_value = Some(request.query.clone());
        self.loaded_options = options.unwrap_or_default();
        true
    }

    /// Options the menu should show right now.
    pub fn options(&self) -> &[T] {
        if self.pass_empty_options {
            return &[];
        }
        if !self.input_value.is_empty() && self.loaded_input_value.is_some() {
            return &self.loaded_options;
        }
        match (&self.default_options, &self.loaded_default_options) {
            (DefaultOptions::Provided(options), _) => options,
            (DefaultOptions::Autoload, Some(options)) => options,
            _ => &[],
        }
    }

    /// Turn caching on or off. Changing the setting drops the cache.
    pub fn set_cache_options(&mut self, cache_options: bool) {
        if self.options.cache_options != cache_options {
            self.cache.clear();
        }
        self.options.cache_options = cache_options;
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The query the user last typed.
    pub fn input_value(&self) -> &str {
        &self.input_value
    }

    /// The query the visible options were loaded for.
    pub fn loaded_input_value(&self) -> Option<&str> {
        self.loaded_input_value.as_deref()
    }

    /// Number of cached queries.
    pub fn cached_queries(&self) -> usize {
        self.cache.len()
    }

    fn next_request(&mut self, query: &str) -> LoadRequest {
        let request = LoadRequest {
            id: RequestId(self.next_id),
            query: query.to_string(),
        };
        self.next_id += 1;
        request
    }
}
