use std::{
    io,
    sync::mpsc::{Receiver, TryRecvError},
    thread::sleep,
    time::{Duration, Instant},
};

use crossterm::event::Event;
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info};

use crate::{
    game::Game,
    input::{command_for, Command},
    render,
};

/// Fixed frame interval; one tick per frame.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(75);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    game: Game,
    paused: bool,
}

impl App {
    pub fn new(game: Game, paused: bool) -> Self {
        Self { game, paused }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Runs until the quit key.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &Receiver<Event>,
    ) -> io::Result<()> {
        while self.iterate(terminal, events)? == Flow::Continue {}
        Ok(())
    }

    /// One pass of the loop. A pending event is handled on its own; only an
    /// empty queue ticks, renders and sleeps.
    pub fn iterate<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &Receiver<Event>,
    ) -> io::Result<Flow> {
        match events.try_recv() {
            Ok(event) => Ok(self.handle_event(event)),
            Err(TryRecvError::Empty) => {
                self.step(Instant::now());
                terminal.draw(|frame| render::draw(frame, &self.game, self.is_paused()))?;
                sleep(FRAME_INTERVAL);
                Ok(Flow::Continue)
            }
            Err(TryRecvError::Disconnected) => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "input thread stopped",
            )),
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) => match command_for(key) {
                Some(command) => self.handle_command(command),
                None => Flow::Continue,
            },
            Event::Resize(width, height) => {
                // Surfaces keep the size they were built with.
                debug!(width, height, "terminal resized");
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    pub fn handle_command(&mut self, command: Command) -> Flow {
        match command {
            Command::TogglePause => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
            }
            Command::MoveUp(player) => {
                self.game.move_paddle_up(player);
                debug!(?player, y = self.game.paddle(player).position.y, "paddle moved");
            }
            Command::MoveDown(player) => {
                self.game.move_paddle_down(player);
                debug!(?player, y = self.game.paddle(player).position.y, "paddle moved");
            }
            Command::Quit => {
                info!("quit requested");
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// The simulation half of a frame. A due serve is released even while
    /// paused; the ball just doesn't move until play resumes.
    pub fn step(&mut self, now: Instant) {
        self.game.release_due_launch(now);
        if !self.paused {
            self.game.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        game::{Player, Vector, LAUNCH_DELAY},
        game_theme::GameTheme,
    };
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect};
    use std::sync::mpsc;

    fn app(paused: bool) -> App {
        App::new(Game::new(40, 22, GameTheme::Classic), paused)
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn pause_key_toggles() {
        let mut app = app(false);

        assert_eq!(app.handle_event(press(KeyCode::Char('p'))), Flow::Continue);
        assert!(app.is_paused());
        app.handle_event(press(KeyCode::Char('p')));
        assert!(!app.is_paused());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app(false);
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert_eq!(app.handle_event(event), Flow::Quit);
    }

    #[test]
    fn movement_keys_reach_the_right_paddle() {
        let mut app = app(false);

        app.handle_event(press(KeyCode::Char('w')));
        app.handle_event(press(KeyCode::Down));

        assert_eq!(app.game().paddle(Player::One).position.y, 7);
        assert_eq!(app.game().paddle(Player::Two).position.y, 11);
    }

    #[test]
    fn paddles_move_while_paused() {
        let mut app = app(true);

        app.handle_event(press(KeyCode::Char('s')));

        assert_eq!(app.game().paddle(Player::One).position.y, 11);
    }

    #[test]
    fn resize_and_unbound_keys_are_ignored() {
        let mut app = app(false);

        assert_eq!(app.handle_event(Event::Resize(100, 40)), Flow::Continue);
        assert_eq!(app.handle_event(press(KeyCode::Char('x'))), Flow::Continue);
        assert!(!app.is_paused());
    }

    #[test]
    fn paused_step_serves_but_does_not_move() {
        let mut app = app(true);
        let later = Instant::now() + LAUNCH_DELAY;

        app.step(later);

        assert_eq!(app.game().ball().velocity, Vector::new(1, 1));
        assert_eq!(app.game().ball().position, Vector::new(20, 10));

        app.handle_command(Command::TogglePause);
        app.step(later);
        assert_eq!(app.game().ball().position, Vector::new(21, 11));
    }

    #[test]
    fn ball_waits_at_centre_until_the_serve() {
        let mut app = app(false);

        app.step(Instant::now());

        assert_eq!(app.game().ball().position, Vector::new(20, 10));
        assert!(app.game().is_serving());
    }

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(40, 22)).unwrap()
    }

    fn served_app() -> App {
        let mut app = app(false);
        assert!(app.game.release_due_launch(Instant::now() + LAUNCH_DELAY));
        app
    }

    #[test]
    fn pending_event_skips_the_frame() {
        let mut app = served_app();
        let mut terminal = terminal();
        let (tx, rx) = mpsc::channel();
        tx.send(press(KeyCode::Char('w'))).unwrap();

        assert_eq!(app.iterate(&mut terminal, &rx).unwrap(), Flow::Continue);

        assert_eq!(app.game().ball().position, Vector::new(20, 10));
        assert_eq!(app.game().paddle(Player::One).position.y, 7);
        assert_eq!(
            terminal.backend().buffer(),
            &Buffer::empty(Rect::new(0, 0, 40, 22))
        );
    }

    #[test]
    fn empty_queue_ticks_once_and_renders() {
        let mut app = served_app();
        let mut terminal = terminal();
        let (_tx, rx) = mpsc::channel();

        assert_eq!(app.iterate(&mut terminal, &rx).unwrap(), Flow::Continue);

        assert_eq!(app.game().ball().position, Vector::new(21, 11));
        // Field starts on terminal row 1.
        assert_eq!(terminal.backend().buffer()[(21, 12)].symbol(), "█");
    }

    #[test]
    fn quit_event_ends_the_loop() {
        let mut app = app(false);
        let mut terminal = terminal();
        let (tx, rx) = mpsc::channel();
        tx.send(press(KeyCode::Char('p'))).unwrap();
        tx.send(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
            .unwrap();

        app.run(&mut terminal, &rx).unwrap();

        assert!(app.is_paused());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn lost_input_thread_is_an_error() {
        let mut app = app(false);
        let mut terminal = terminal();
        let (tx, rx) = mpsc::channel::<Event>();
        drop(tx);

        let err = app.iterate(&mut terminal, &rx).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
