use std::{io, sync::mpsc, thread};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use crate::game::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    MoveUp(Player),
    MoveDown(Player),
    Quit,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('p') => Some(Command::TogglePause),
        KeyCode::Char('w') => Some(Command::MoveUp(Player::One)),
        KeyCode::Char('s') => Some(Command::MoveDown(Player::One)),
        KeyCode::Up => Some(Command::MoveUp(Player::Two)),
        KeyCode::Down => Some(Command::MoveDown(Player::Two)),
        _ => None,
    }
}

/// Events worth waking the game loop for: key presses (and auto-repeats) and
/// resizes.
fn is_forwarded(event: &Event) -> bool {
    match event {
        Event::Key(key) => key.kind != KeyEventKind::Release,
        Event::Resize(..) => true,
        _ => false,
    }
}

pub struct InputHandle {
    /// Game loop reads events from here without blocking.
    pub rx: mpsc::Receiver<Event>,
}

/// Spawns the thread that blocks on the terminal's event source.
pub fn spawn() -> io::Result<InputHandle> {
    spawn_with(event::read)
}

/// Forwards events from `read` in arrival order over an unbounded channel,
/// so the reader never waits on the game loop. The thread stops when the
/// receiver is dropped or `read` fails.
pub fn spawn_with<F>(mut read: F) -> io::Result<InputHandle>
where
    F: FnMut() -> io::Result<Event> + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<Event>();

    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || loop {
            match read() {
                Ok(event) if is_forwarded(&event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(%err, "terminal event source failed");
                    break;
                }
            }
        })?;

    Ok(InputHandle { rx })
}
