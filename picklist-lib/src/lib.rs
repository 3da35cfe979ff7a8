//! Searchable select engine
//!
//! Option filtering and the controlled selection/input lifecycle behind a
//! searchable dropdown, independent of any rendering layer.

pub mod action;
pub mod components;
pub mod config;
pub mod creatable;
pub mod error;
pub mod filter;
pub mod loader;
pub mod option;
pub mod select;
pub mod styles;
pub mod value;

pub use action::{Action, ActionMeta, InputAction, InputActionMeta};
pub use config::SelectConfig;
pub use error::{Error, Result};
pub use filter::{Filter, FilterConfig, FilterOptions, FilterPredicate, MatchFrom, create_filter};
pub use option::{Accessors, Candidate, Group, OptionEntry, Record, record};
pub use select::{MenuOption, Select, SelectEvent};
pub use styles::merge_styles;
pub use value::{Change, InputChange, SelectState, SelectValue, Transition};
