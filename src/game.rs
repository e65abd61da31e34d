use std::{
    ops::{AddAssign, Deref, DerefMut, Neg},
    time::{Duration, Instant},
};

use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::{game_theme::GameTheme, surface::Surface};

pub const PLAYER_ONE_GLYPH: char = '▒';
pub const PLAYER_TWO_GLYPH: char = '▓';
pub const BALL_GLYPH: char = '█';

/// Time the ball stays frozen at the centre before a serve.
pub const LAUNCH_DELAY: Duration = Duration::from_secs(1);

const DEFAULT_PADDLE_SIZE: i32 = 4;
const DEFAULT_PADDLE_STEP: i32 = 2;
const FIRST_SERVE: Vector = Vector::new(1, 1);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sprite {
    pub position: Vector,
    pub velocity: Vector,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ball {
    sprite: Sprite,
}

impl Deref for Ball {
    type Target = Sprite;

    fn deref(&self) -> &Sprite {
        &self.sprite
    }
}

impl DerefMut for Ball {
    fn deref_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    sprite: Sprite,
    pub size: i32,
    pub glyph: char,
}

impl Deref for Paddle {
    type Target = Sprite;

    fn deref(&self) -> &Sprite {
        &self.sprite
    }
}

impl DerefMut for Paddle {
    fn deref_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }
}

impl Paddle {
    /// Whether the ball is one column away and within the paddle's rows.
    /// The bottom bound is inclusive, so the row just under the paddle still
    /// returns the ball.
    fn intercepts(&self, ball: &Sprite) -> bool {
        (ball.position.x - self.position.x).abs() == 1
            && ball.position.y >= self.position.y
            && ball.position.y <= self.position.y + self.size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// A serve waiting for its timer.
#[derive(Debug, Clone, Copy)]
struct Relaunch {
    due: Instant,
    velocity: Vector,
}

#[derive(Debug)]
pub struct Game {
    ball: Ball,
    paddles: [Paddle; 2],
    scores: [u32; 2],
    paddle_step: i32,
    last_serve: Vector,
    relaunch: Option<Relaunch>,
    theme: GameTheme,
    score_bar: Surface,
    field: Surface,
    hint_bar: Surface,
}

impl Game {
    /// Lays the game out over a `width` x `height` terminal: a one-row score
    /// bar on top, a one-row hint bar at the bottom and the field between.
    pub fn new(width: u16, height: u16, theme: GameTheme) -> Self {
        let colors = theme.colors();
        let score_bar = Surface::new(Rect::new(0, 0, width, 1), colors.bar_style());
        let field = Surface::new(
            Rect::new(0, 1, width, height.saturating_sub(2)),
            colors.field_style(),
        );
        let hint_bar = Surface::new(
            Rect::new(0, height.saturating_sub(1), width, 1),
            colors.bar_style(),
        );

        let size = DEFAULT_PADDLE_SIZE;
        let starting_y = i32::from(height) / 2 - size / 2;
        let paddle = |x: i32, glyph: char| Paddle {
            sprite: Sprite {
                position: Vector::new(x, starting_y),
                velocity: Vector::default(),
            },
            size,
            glyph,
        };
        let paddles = [
            paddle(1, PLAYER_ONE_GLYPH),
            paddle(field.width() - 2, PLAYER_TWO_GLYPH),
        ];

        let mut game = Self {
            ball: Ball::default(),
            paddles,
            scores: [0; 2],
            paddle_step: DEFAULT_PADDLE_STEP,
            last_serve: Vector::default(),
            relaunch: None,
            theme,
            score_bar,
            field,
            hint_bar,
        };
        game.schedule_serve(FIRST_SERVE, Instant::now());
        game
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddles(&self) -> &[Paddle; 2] {
        &self.paddles
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        &self.paddles[player.index()]
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn theme(&self) -> GameTheme {
        self.theme
    }

    pub fn score_bar(&self) -> &Surface {
        &self.score_bar
    }

    pub fn field(&self) -> &Surface {
        &self.field
    }

    pub fn hint_bar(&self) -> &Surface {
        &self.hint_bar
    }

    /// True while the ball sits frozen at the centre waiting for a serve.
    #[cfg(test)]
    pub fn is_serving(&self) -> bool {
        self.relaunch.is_some()
    }

    pub fn move_paddle_up(&mut self, player: Player) {
        let step = self.paddle_step;
        let paddle = &mut self.paddles[player.index()];
        paddle.position.y = (paddle.position.y - step).max(0);
    }

    pub fn move_paddle_down(&mut self, player: Player) {
        let step = self.paddle_step;
        let lowest = (self.field.height() - self.paddles[player.index()].size).max(0);
        let paddle = &mut self.paddles[player.index()];
        paddle.position.y = (paddle.position.y + step).min(lowest);
    }

    /// Runs one tick of the simulation.
    ///
    /// Every step runs in order each tick. After a score the velocity is zero,
    /// so the bounce checks that follow leave the frozen ball alone.
    pub fn advance(&mut self) {
        let ball = &mut self.ball;
        let velocity = ball.velocity;
        ball.position += velocity;

        if self.ball.position.x >= self.field.width() {
            self.point_for(Player::One);
        } else if self.ball.position.x <= 0 {
            self.point_for(Player::Two);
        }

        let ball = &mut self.ball;
        if ball.position.y >= self.field.height() - 1 || ball.position.y <= 0 {
            ball.velocity.y = -ball.velocity.y;
        }

        for paddle in &self.paddles {
            if paddle.intercepts(&self.ball) {
                self.ball.velocity.x = -self.ball.velocity.x;
            }
        }
    }

    /// Starts the pending serve once its timer is due. Returns whether the
    /// ball was launched.
    pub fn release_due_launch(&mut self, now: Instant) -> bool {
        match self.relaunch {
            Some(relaunch) if now >= relaunch.due => {
                self.ball.velocity = relaunch.velocity;
                self.relaunch = None;
                debug!(dx = relaunch.velocity.x, dy = relaunch.velocity.y, "ball served");
                true
            }
            _ => false,
        }
    }

    fn point_for(&mut self, player: Player) {
        self.scores[player.index()] += 1;
        info!(
            scorer = ?player,
            p1 = self.scores[0],
            p2 = self.scores[1],
            "point scored"
        );
        // Serves alternate: each one goes the opposite way of the last.
        self.schedule_serve(-self.last_serve, Instant::now());
    }

    /// Centres and freezes the ball, arming the timer for `serve`. Replaces
    /// any serve that is still pending.
    fn schedule_serve(&mut self, serve: Vector, now: Instant) {
        self.ball.position = Vector::new(self.field.width() / 2, self.field.height() / 2);
        self.ball.velocity = Vector::default();
        self.last_serve = serve;
        self.relaunch = Some(Relaunch {
            due: now + LAUNCH_DELAY,
            velocity: serve,
        });
    }
}
