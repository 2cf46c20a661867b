/*!
# moodlog

moodlog is a daily mood journal for the terminal. Each entry records a mood,
a short note, and optionally the weather at the time of writing. Entries can
be browsed by mood, charted over a rolling window, and exported to CSV or PDF.
The current weather also drives a visual theme shared by every view.

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `storage`: The key-value store entries are persisted in
- `journal`: Entry model, mood taxonomy, filtering and trend aggregation
- `theme`: Weather description to theme resolution
- `weather`: Location and weather provider client
- `state`: Shared weather status and theme
- `export`: CSV and PDF export
- `ops`: The user-facing views

## Usage Example

```rust,no_run
use moodlog::journal::EntryStore;
use moodlog::ops::{save_entry, EntryForm};
use moodlog::storage::FileStore;
use moodlog::Config;

fn main() -> moodlog::AppResult<()> {
    let config = Config::load()?;
    let mut store = EntryStore::new(FileStore::open(&config.data_dir)?);

    let today = chrono::Local::now().date_naive();
    let form = EntryForm::new(Some("happy"), "Sunny walk by the river");
    let saved = save_entry(&mut store, &form, today, None)?;
    println!("{}", saved.message);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// CSV and PDF export
pub mod export;
/// Journal entries, moods, filtering and trends
pub mod journal;
/// Tracing subscriber setup
pub mod logging;
/// User-facing operations
pub mod ops;
/// Shared application state
pub mod state;
/// Key-value persistence
pub mod storage;
/// Weather themes
pub mod theme;
/// Weather provider client
pub mod weather;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use state::AppState;
