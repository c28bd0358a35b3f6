//! logscroll - Entry Point

use clap::Parser;
use logscroll::config::{self, default_spread_limit, CliOverrides};
use logscroll::model::AppError;
use logscroll::source::LogLineSource;
use logscroll::state::AppState;
use logscroll::view::{self, entry_rows, ColorConfig, LevelStyles};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// logscroll - page through arbitrarily large log files in constant memory
#[derive(Parser, Debug)]
#[command(name = "logscroll")]
#[command(version)]
#[command(about = "Bounded-window pager for large log files")]
pub struct Args {
    /// Path to the log file
    pub file: PathBuf,

    /// Start with this line (1-based) at the top of the screen
    #[arg(short, long, value_parser = parse_positive, conflicts_with = "end")]
    pub line: Option<usize>,

    /// Start at the end of the file
    #[arg(short, long)]
    pub end: bool,

    /// Jump to the end whenever the file changes (like tail -f)
    #[arg(short, long)]
    pub follow: bool,

    /// Colour lines by their leading level letter (V/T/D/I/W/E/F)
    #[arg(long)]
    pub colorize: bool,

    /// Maximum number of lines held in memory
    #[arg(long, value_parser = parse_positive)]
    pub spread_limit: Option<usize>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Flags that override configured values. Boolean flags can only switch
    /// a setting on.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            spread_limit: self.spread_limit,
            colorize: self.colorize.then_some(true),
            follow: self.follow.then_some(true),
        }
    }

    /// Whether to open at the bottom. An explicit `--line` wins over
    /// follow; follow still applies to later changes.
    fn starts_at_end(&self, follow: bool) -> bool {
        self.line.is_none() && (self.end || follow)
    }
}

fn parse_positive(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "exiting with error");
            eprintln!("logscroll: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = config::resolve(args.config.clone(), args.overrides())?;

    logscroll::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let (_, rows) = crossterm::terminal::size()?;
    let height = entry_rows(rows);
    let spread_limit = config
        .spread_limit
        .unwrap_or_else(|| default_spread_limit(height));

    let mut source = LogLineSource::open(&args.file, spread_limit)?;
    source.set_colorized(config.colorize);
    if let Some(line) = args.line {
        source.set_top_line(line)?;
    }

    let mut state = AppState::new(source, height);
    state.follow = config.follow;
    if args.starts_at_end(state.follow) {
        state.jump_to_bottom();
    }

    info!(file = %args.file.display(), spread_limit, "opened");

    let styles = LevelStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));
    view::run(state, styles)?;

    Ok(())
}
