use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four_4x4::config::AppConfig;
use connect_four_4x4::game::GameEngine;
use connect_four_4x4::logging::{self, Fallback};
use connect_four_4x4::ui::{plain, App};

/// Two-player Connect Four on a 4x4 board.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four on a 4x4 board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Read moves from stdin line by line instead of opening the terminal UI
    #[arg(long)]
    plain: bool,

    /// Append logs to this file (overrides log.file)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not ring the bell on rejected moves
    #[arg(long)]
    no_bell: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (mut config, defaulted) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(path) = cli.log_file {
        config.log.file = Some(path);
    }
    if cli.no_bell {
        config.ui.bell_on_invalid = false;
    }

    let fallback = if cli.plain {
        Fallback::Stderr
    } else {
        Fallback::Silent
    };
    logging::init(&config.log, fallback).context("initializing logging")?;
    if defaulted {
        tracing::warn!(
            path = %cli.config.display(),
            "config file not found, using defaults"
        );
    }
    tracing::info!(
        config = %cli.config.display(),
        plain = cli.plain,
        bell = config.ui.bell_on_invalid,
        "starting"
    );

    if cli.plain {
        let mut engine = GameEngine::new();
        let stdin = io::stdin();
        plain::run(&mut engine, stdin.lock(), io::stdout(), config.ui.bell_on_invalid)
            .context("plain session failed")?;
    } else {
        run_terminal(App::new(config.ui)).context("terminal UI failed")?;
    }

    Ok(())
}

fn run_terminal(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
