use std::{
    any::Any,
    fs::File,
    panic::{self, AssertUnwindSafe},
    path::Path,
    sync::Mutex,
};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use ratatui::DefaultTerminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod game;
mod game_theme;
mod helpers;
mod input;
mod render;
mod surface;

use crate::{
    app::App,
    config::{Config, MIN_HEIGHT, MIN_WIDTH},
    game::{Game, Player},
};

/// How a session ended.
enum Outcome {
    Quit { scores: [u32; 2] },
    Panicked(String),
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.log_file.as_deref())?;

    let (width, height) = crossterm::terminal::size().context("failed to read terminal size")?;
    ensure!(
        width >= MIN_WIDTH && height >= MIN_HEIGHT,
        "terminal too small: {width}x{height}, need at least {MIN_WIDTH}x{MIN_HEIGHT}"
    );

    let mut terminal = ratatui::try_init().context("failed to initialize terminal")?;
    info!(width, height, theme = ?config.theme, "game started");

    let result = play(&mut terminal, &config, width, height);

    ratatui::restore();

    match result? {
        Outcome::Quit { scores } => {
            println!("Closed: Ctrl+C");
            println!("Final Score: {} - {}", scores[0], scores[1]);
        }
        Outcome::Panicked(message) => {
            println!("Recovered: {message}");
        }
    }
    Ok(())
}

fn play(
    terminal: &mut DefaultTerminal,
    config: &Config,
    width: u16,
    height: u16,
) -> Result<Outcome> {
    let events = input::spawn().context("failed to start input thread")?;
    let mut app = App::new(Game::new(width, height, config.theme), config.paused);

    match panic::catch_unwind(AssertUnwindSafe(|| app.run(terminal, &events.rx))) {
        Ok(run) => {
            run.context("game loop failed")?;
            let game = app.game();
            let scores = [game.score(Player::One), game.score(Player::Two)];
            info!(p1 = scores[0], p2 = scores[1], "game closed");
            Ok(Outcome::Quit { scores })
        }
        Err(payload) => Ok(Outcome::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Logs go to a file because the terminal belongs to the game. Without a
/// path no subscriber is installed.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
