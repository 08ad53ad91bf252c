use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use docnav::app::config::{Config, SymbolSourceKind};
use docnav::app::symbols::{LocalSymbols, RemoteSymbols, SymbolSource};
use docnav::app::{r#loop::run_loop, state::AppState};
use docnav::domain::page::PageHost;
use docnav::infrastructure::{http_typeahead::HttpTypeahead, page_loader::load_page};
use docnav::logging;

/// Keyboard-driven browser for documentation pages.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Page file (TOML) to open
    page: PathBuf,

    /// Initial location fragment, e.g. `#Reader` or `#example-Copy`
    #[arg(short, long, default_value = "")]
    fragment: String,

    /// Configuration file [default: ~/.config/docnav/config.toml]
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_panic_hook();
    logging::init()?;

    // Everything that can fail on bad input happens BEFORE terminal setup,
    // so errors print to a normal terminal.
    let config = Config::load(cli.config.as_deref())?;
    let document = load_page(&cli.page)?;

    let app_state = AppState::new(&config, document, &cli.fragment);

    let symbols: Arc<dyn SymbolSource> = match config.symbols.source {
        SymbolSourceKind::Local => {
            Arc::new(LocalSymbols::from_ids(&app_state.page.element_ids()))
        }
        SymbolSourceKind::Remote => {
            let client = HttpTypeahead::new(config.symbols.endpoint.clone())?;
            tracing::info!(endpoint = client.endpoint(), "using remote identifier index");
            Arc::new(RemoteSymbols::new(Arc::new(client)))
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, symbols).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("{err:#}");
        println!("{err:?}");
    }

    Ok(())
}
