use crate::constants;
use crate::export::ExportFormat;
use crate::journal::{MoodFilter, TrendWindow};
use crate::logging::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A daily mood journal with weather themes, trend charts, and CSV/PDF export
#[derive(Parser, Debug)]
#[clap(name = constants::APP_NAME, about = constants::APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Enable debug logging
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[clap(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record today's mood
    Add(AddArgs),
    /// Show past entries, optionally filtered by mood
    History(HistoryArgs),
    /// Chart moods over a rolling window
    Trends(TrendsArgs),
    /// Export every entry to a file
    Export(ExportArgs),
    /// Show current weather
    Weather,
    /// Resolve a weather description to a theme
    Theme(ThemeArgs),
}

impl Commands {
    /// Name used in the root tracing span.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Add(_) => "add",
            Commands::History(_) => "history",
            Commands::Trends(_) => "trends",
            Commands::Export(_) => "export",
            Commands::Weather => "weather",
            Commands::Theme(_) => "theme",
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Mood key: very-happy, happy, neutral, sad or angry
    #[clap(short = 'm', long)]
    pub mood: Option<String>,

    /// What happened today
    #[clap(short = 'n', long, default_value = "")]
    pub note: String,

    /// Save without looking up the weather
    #[clap(long)]
    pub no_weather: bool,
}

#[derive(clap::Args, Debug)]
pub struct HistoryArgs {
    /// Mood to show, or "all"
    #[clap(short = 'm', long, default_value = "all")]
    pub mood: MoodFilter,
}

#[derive(clap::Args, Debug)]
pub struct TrendsArgs {
    /// Time window: week, month or all
    #[clap(short = 'w', long, default_value = "week")]
    pub window: TrendWindow,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output format: csv or pdf
    pub format: ExportFormat,

    /// Directory to write the export into (defaults to MOODLOG_EXPORT_DIR or the current directory)
    #[clap(short = 'o', long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ThemeArgs {
    /// Weather description; the live weather is used when omitted
    pub description: Option<String>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
