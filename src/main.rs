use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

use lull::app::config::Config;
use lull::app::logging;
use lull::app::r#loop::{run_loop, SearchTarget};
use lull::app::state::AppState;
use lull::domain::debounce::DebouncedSubmitter;
use lull::infrastructure::page::Page;

/// Search box that submits its filter form once you stop typing
#[derive(Parser)]
#[command(name = "lull")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/lull/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Quiet period before the form is submitted, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Write logs here instead of the configured file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();
    let cli = Cli::parse();

    // An explicit --config must be valid; the default one may be broken.
    let (mut config, config_error) = match &cli.config {
        Some(path) => (Config::load_from(path)?, None),
        None => match Config::load() {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(err)),
        },
    };
    if let Some(delay_ms) = cli.delay_ms {
        config.search.delay_ms = delay_ms;
    }

    let _log_guard = match cli.log_file.or_else(|| config.log_file()) {
        Some(path) => Some(logging::init(&path)?),
        None => None,
    };
    if let Some(err) = config_error {
        tracing::warn!("ignoring config: {err:#}");
    }

    let (page, submissions) = Page::search(&config.search)?;
    let submitter = DebouncedSubmitter::spawn(page.clone(), &config.search);
    let app_state =
        AppState::new(config.search.delay_ms, submitter.is_some()).with_palette(config.palette);
    let target = SearchTarget {
        page,
        input_id: config.search.input_id.clone(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, target, submissions).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    // Only now that the terminal is back to normal.
    let state = res?;
    tracing::info!(submissions = state.submissions.len(), "exiting");

    Ok(())
}
