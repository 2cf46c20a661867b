//! User-facing operations, one per view of the journal.
//!
//! Views take already-loaded data and return the rendered text, so `main`
//! stays a thin dispatcher and every view can be tested without a terminal.

pub mod form;
pub mod history;
pub mod theme;
pub mod trends;
pub mod weather;

pub use form::{save_entry, EntryForm, SavedEntry};
pub use history::render_history;
pub use theme::{describe_theme, theme_header};
pub use trends::render_trends;
pub use weather::render_weather;
