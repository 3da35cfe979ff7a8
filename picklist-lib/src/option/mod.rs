//! Option payloads and the extractors that derive labels and values from them.
//!
//! Options are opaque to the rest of the crate. Everything that needs a label
//! or a value goes through [`Accessors`], and identity is decided by the
//! extracted value string alone.

mod accessors;
mod group;
mod record;

pub use accessors::{Accessors, Candidate, Extractor};
pub use group::{Group, OptionEntry, flatten_options};
pub use record::{Record, record, record_field};
