// Engine module - pure presentation core
// This layer sits between wire models (types) and CLI presentation.
// It performs no I/O: every function is a deterministic transform of
// its inputs, including the clock, which is always passed explicitly.

mod author;
mod error;
mod layout;
mod timefmt;

pub use author::resolve_author;
pub use error::{Error, Result};
pub use layout::{LayoutStyle, active_params, resolve_layout};
pub use timefmt::{Locale, format_post_date};
