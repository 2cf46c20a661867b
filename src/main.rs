/*!
# moodlog

A daily mood journal for the terminal.

## Usage

```
moodlog [OPTIONS] <COMMAND>

Commands:
  add      Record today's mood
  history  Show past entries, optionally filtered by mood
  trends   Chart moods over a rolling window
  export   Export every entry to a file
  weather  Show current weather
  theme    Resolve a weather description to a theme

Options:
  -v, --verbose                  Enable debug logging
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
  -h, --help                     Print help
  -V, --version                  Print version
```

## Configuration

- `MOODLOG_DIR`: where entries are stored (defaults to `~/.local/share/moodlog`)
- `MOODLOG_EXPORT_DIR`: default export directory (defaults to the current directory)
- `OPENWEATHER_API_KEY`: enables weather lookups
- `MOODLOG_LAT` / `MOODLOG_LON`: position used for weather lookups
- `MOODLOG_WEATHER_URL`, `MOODLOG_WEATHER_TIMEOUT_SECS`: provider endpoint and timeout
*/

use chrono::Local;
use moodlog::cli::{CliArgs, Commands};
use moodlog::config::Config;
use moodlog::constants;
use moodlog::errors::AppResult;
use moodlog::export;
use moodlog::journal::EntryStore;
use moodlog::logging;
use moodlog::ops::{
    describe_theme, render_history, render_trends, render_weather, save_entry, EntryForm,
};
use moodlog::state::AppState;
use moodlog::storage::FileStore;
use moodlog::weather::{self, WeatherStatus};
use std::process;
use tracing::{debug, info, info_span};
use uuid::Uuid;

fn open_store(config: &Config) -> AppResult<EntryStore<FileStore>> {
    debug!("Data directory: {:?}", config.data_dir);
    Ok(EntryStore::new(FileStore::open(&config.data_dir)?))
}

/// Runs one subcommand against the loaded configuration.
fn run(command: Commands) -> AppResult<()> {
    let config = Config::load()?;
    debug!("Loaded configuration: {:?}", config);

    let now = Local::now().naive_local();
    let today = now.date();
    let mut state = AppState::new();

    match command {
        Commands::Add(add) => {
            let form = EntryForm::new(add.mood.as_deref(), add.note);
            form.validate()?;

            let mut store = open_store(&config)?;
            if !add.no_weather {
                state.publish(weather::lookup(&config));
                if let WeatherStatus::Failed(reason) = state.weather() {
                    eprintln!("Warning: {}. Saving without weather.", reason);
                }
            }

            let saved = save_entry(&mut store, &form, today, state.report())?;
            println!("{}", saved.message);
        }
        Commands::History(history) => {
            let store = open_store(&config)?;
            state.publish(weather::lookup(&config));
            print!(
                "{}",
                render_history(&store.load_all(), history.mood, state.theme())
            );
        }
        Commands::Trends(trends) => {
            let store = open_store(&config)?;
            state.publish(weather::lookup(&config));
            match render_trends(&store.load_all(), trends.window, now, state.theme()) {
                Some(view) => print!("{}", view),
                None => debug!("Journal is empty; trends view not shown"),
            }
        }
        Commands::Export(args) => {
            let store = open_store(&config)?;
            let dir = args.output_dir.unwrap_or_else(|| config.export_dir.clone());
            let path = export::export_to_dir(&store.load_all(), args.format, &dir, today)?;
            println!("Exported to {}", path.display());
        }
        Commands::Weather => {
            state.publish(weather::lookup(&config));
            print!("{}", render_weather(state.weather(), state.theme()));
        }
        Commands::Theme(args) => {
            if args.description.is_none() {
                state.publish(weather::lookup(&config));
            }
            print!("{}", describe_theme(args.description.as_deref(), &state));
        }
    }

    Ok(())
}

fn main() {
    let args = CliArgs::parse();

    if let Err(e) = logging::init(args.log_format, args.verbose) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let correlation_id = Uuid::new_v4();
    let span = info_span!(
        constants::TRACING_ROOT_SPAN_NAME,
        service_name = constants::TRACING_SERVICE_NAME,
        correlation_id = %correlation_id,
        command = args.command.name()
    );
    let _guard = span.enter();

    info!("Starting {}", constants::APP_NAME);

    if let Err(e) = run(args.command) {
        debug!("Command failed: {:?}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
