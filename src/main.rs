//! showdetail - neon TUI for show details
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI on the demo catalog
//! showdetail
//!
//! # Open a specific show from your own catalog
//! showdetail --catalog shows.json --show 1390
//!
//! # CLI mode (for automation)
//! showdetail items 1390 --json
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use showdetail::app::App;
use showdetail::cli::{Cli, Command, ExitCode, Output};
use showdetail::commands;
use showdetail::config::Config;
use showdetail::logging::{self, LogTarget, LoggingConfig};
use showdetail::models::ShowCatalog;
use showdetail::ui::screen;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    let target = if cli.is_cli_mode() {
        LogTarget::Stderr
    } else {
        match logging::default_log_file() {
            Some(path) => LogTarget::File(path),
            None => LogTarget::Stderr,
        }
    };
    logging::init_logging(LoggingConfig {
        filter: cli.log.clone().or_else(|| config.log_level.clone()),
        target,
    });

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli, &config);
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        run_tui(&cli, &config)
    }
}

fn load_catalog(cli: &Cli) -> Result<ShowCatalog> {
    let catalog = match &cli.catalog {
        Some(path) => ShowCatalog::load(path)
            .with_context(|| format!("Could not load catalog {}", path.display()))?,
        None => ShowCatalog::demo()?,
    };
    Ok(catalog)
}

/// Run CLI command and return exit code
fn run_cli(cli: Cli, config: &Config) -> ExitCode {
    let output = Output::new(&cli);

    let catalog = match load_catalog(&cli) {
        Ok(catalog) => catalog,
        Err(e) => return output.error(format!("{:#}", e), ExitCode::InvalidArgs),
    };

    match cli.command {
        Some(Command::List) => commands::list_cmd(&catalog, &output),

        Some(Command::Items(cmd)) => {
            let resources = match config.resources() {
                Ok(resources) => resources,
                Err(e) => return output.error(format!("{:#}", e), ExitCode::InvalidArgs),
            };
            commands::items_cmd(cmd, &catalog, resources, config.image_provider(), &output)
        }

        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
fn run_tui(cli: &Cli, config: &Config) -> Result<()> {
    // Load everything before touching the terminal so errors print normally
    let catalog = load_catalog(cli)?;
    let resources = config.resources()?;

    let mut app = App::new(
        catalog,
        resources,
        config.image_provider(),
        config.grid_columns(),
    );
    if let Some(id) = cli.show.or_else(|| app.catalog.first_id()) {
        app.open_show(id);
    }

    let mut terminal = init_terminal()?;

    let result = run_event_loop(&mut terminal, &mut app);

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, updates state, renders UI
fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    while app.running {
        terminal.draw(|frame| screen::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}
