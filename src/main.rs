// Folio entry point.
// Resolves configuration, sets up logging, then runs the TUI or a one-shot export.

use std::fs::{self, OpenOptions};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio::aggregate::Aggregator;
use folio::app::App;
use folio::config::{Cli, Config, OutputMode};
use folio::error::Result;
use folio::github::GitHubClient;
use folio::output;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.hint() {
                eprintln!("Hint: {}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;
    init_logging(&config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let client = Arc::new(GitHubClient::new(&config.api_base)?);
    let aggregator = Arc::new(Aggregator::new(client.clone()));

    match config.mode.clone() {
        OutputMode::Interactive => {
            let mut app = App::new(config, client, aggregator, runtime.handle().clone());
            let mut terminal = ratatui::init();
            let result = app.run(&mut terminal);
            ratatui::restore();
            result?;
        }
        OutputMode::Html(path) => {
            let list = runtime.block_on(output::render_once(&aggregator, &config, Utc::now()));
            output::write_html(&list, &path)?;
        }
        OutputMode::Plain => {
            let list = runtime.block_on(output::render_once(&aggregator, &config, Utc::now()));
            for line in output::plain_lines(&list) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug. RUST_LOG overrides.
/// The TUI owns the terminal, so interactive runs log to a file.
fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match config.verbose {
        0 => EnvFilter::new("folio=warn"),
        1 => EnvFilter::new("folio=info"),
        _ => EnvFilter::new("folio=debug"),
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if config.mode == OutputMode::Interactive {
        fs::create_dir_all(&config.cache_dir)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else {
        builder.without_time().with_writer(std::io::stderr).init();
    }

    Ok(())
}
