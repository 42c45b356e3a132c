mod app;
mod domain;
mod input;
mod logging;
mod persistence;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::Board;
use log::error;
use persistence::{
    board_file, config_file, ensure_data_dir, init_local_data_dir, load_config, log_dir,
    save_config, Config, JsonStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;

#[derive(Parser)]
#[command(name = "taskbin")]
#[command(about = "A terminal task bin: items holding sub-tasks you can tick off", long_about = None)]
struct Cli {
    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .taskbin directory in the current directory
    Init,
    /// Print every item and its tasks
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let data_dir = init_local_data_dir()?;
        save_config(config_file(&data_dir), &Config::default())?;
        println!("Initialized taskbin directory: {}", data_dir.display());
        println!();
        println!("taskbin will now use this local directory for storage.");
        return Ok(());
    }

    let data_dir = ensure_data_dir()?;
    let config = load_config(config_file(&data_dir))?;
    let level = cli.log_level.as_deref().unwrap_or(config.log_level.as_str());
    let _logger = logging::init_logging(level, &log_dir(&data_dir))?;

    let (store, board) = JsonStore::open(board_file(&data_dir))
        .with_context(|| format!("Failed to load board from {}", data_dir.display()))?;

    match cli.command {
        Some(Commands::List) => {
            println!("Board: {}", store.path().display());
            print_board(&board);
            Ok(())
        }
        _ => run_tui(AppState::new(board, store, config.default_category), &data_dir),
    }
}

/// Plain-text dump of the board for scripting
fn print_board(board: &Board) {
    if board.items.is_empty() {
        println!("No items.");
        return;
    }
    for item in &board.items {
        let (done, total) = item.progress();
        println!("{} [{}] {}/{}", item.title, item.category.name(), done, total);
        if item.tasks.is_empty() {
            println!("  (task bin is empty)");
        }
        for task in &item.tasks {
            let check = if task.completed { "x" } else { " " };
            if task.description.is_empty() {
                println!("  [{}] {}", check, task.name);
            } else {
                println!("  [{}] {}: {}", check, task.name, task.description);
            }
        }
    }
}

fn run_tui(mut app: AppState, data_dir: &Path) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = app.save_on_exit() {
        error!("event=save status=failed origin=exit error={:#}", e);
        eprintln!("Error saving board in {}: {:#}", data_dir.display(), e);
    }

    if let Err(err) = result {
        error!("event=app_exit status=failed error={:#}", err);
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                return Ok(());
            }
        }
    }
}
