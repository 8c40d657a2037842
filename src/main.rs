mod app;
mod event;
mod ui;

use anyhow::{bail, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};

use easymotion_buffer::TextView;
use easymotion_config::Config;
use easymotion_logger::{self as logger, LogLevel};
use easymotion_session::EasyMotion;

use app::App;

fn main() -> Result<()> {
    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: easymotion <FILE>");
    };
    let path = PathBuf::from(path);

    // A broken config should not keep the demo from starting
    let config = Config::load().unwrap_or_else(|err| {
        eprintln!("Config error, using defaults: {:#}", err);
        Config::default()
    });

    logger::init(
        config.logging.file_path.as_ref().map(PathBuf::from),
        config.logging.max_entries,
        config.logging.level().unwrap_or(LogLevel::Info),
    );
    logger::info(format!("Opening {}", path.display()));

    let view = TextView::from_file(&path)?;
    let easy_motion = EasyMotion::from_settings(&config.jump)?;
    let mut app = App::new(view, easy_motion, file_title(&path));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal, ui::render);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        logger::error(format!("{:?}", err));
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn file_title(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
