//! Select state machine: the controlled value and input lifecycle.
//!
//! [`Select`] computes the next value and input text for a discrete user or
//! programmatic action, given the consumer-owned [`SelectState`]. Each call
//! returns a [`Transition`] and fires `on_change` / `on_input_change` at most
//! once each. Actions whose precondition does not hold return an empty
//! transition and notify nobody.
//!
//! [`SelectState`]: crate::value::SelectState
//! [`Transition`]: crate::value::Transition

mod events;
mod menu;
mod state;
mod transitions;

pub use events::SelectEvent;
pub use menu::MenuOption;
pub use state::{ChangeHandler, CreateHandler, InputChangeHandler, OptionPredicate, Select};
