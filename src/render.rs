use ratatui::{buffer::Buffer, layout::Alignment, style::Style, widgets::Widget, Frame};
use tui_big_text::{BigText, PixelSize};

use crate::{
    game::{Game, Player, BALL_GLYPH},
    helpers::centered_rect,
    surface::TextAlignment,
};

const PLAYER_ONE_HINT: &str = "Up: W, Down: S";
const GLOBAL_HINT: &str = "Pause: P   Quit: Ctrl+C";
const PLAYER_TWO_HINT: &str = "Up: ↑, Down: ↓";

// Quadrant pixels are 4 x 4 cells per letter.
const BANNER_WIDTH: u16 = 6 * 4;
const BANNER_HEIGHT: u16 = 4;

pub fn draw(frame: &mut Frame, game: &Game, paused: bool) {
    draw_scene(game, paused, frame.buffer_mut());
}

/// Paints one frame. Only the field is cleared; both bars are fully
/// rewritten every frame.
pub fn draw_scene(game: &Game, paused: bool, buf: &mut Buffer) {
    game.field().clear(buf);

    draw_ball(game, buf);
    draw_paddles(game, buf);
    draw_scores(game, buf);
    draw_hints(game, buf);

    if paused {
        draw_pause_banner(game, buf);
    }
}

fn draw_ball(game: &Game, buf: &mut Buffer) {
    let ball = game.ball();
    game.field().set_cell(buf, ball.position.x, ball.position.y, BALL_GLYPH);
}

fn draw_paddles(game: &Game, buf: &mut Buffer) {
    let field = game.field();
    for paddle in game.paddles() {
        for i in 0..paddle.size {
            field.set_cell(buf, paddle.position.x, paddle.position.y + i, paddle.glyph);
        }
    }
}

fn draw_scores(game: &Game, buf: &mut Buffer) {
    let text = format!("{} : {}", game.score(Player::One), game.score(Player::Two));
    let center = game.field().width() / 2;
    game.score_bar().draw_text(buf, center, 0, &text, TextAlignment::Center);
}

fn draw_hints(game: &Game, buf: &mut Buffer) {
    let hints = game.hint_bar();
    hints.draw_text(buf, 0, 0, PLAYER_ONE_HINT, TextAlignment::Left);
    hints.draw_text(buf, hints.width() / 2, 0, GLOBAL_HINT, TextAlignment::Center);
    hints.draw_text(buf, hints.width(), 0, PLAYER_TWO_HINT, TextAlignment::Right);
}

fn draw_pause_banner(game: &Game, buf: &mut Buffer) {
    let field = game.field();
    let area = centered_rect(BANNER_WIDTH, BANNER_HEIGHT, field.area());
    let colors = game.theme().colors();
    BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(colors.accent).bg(colors.field_background))
        .lines(vec!["PAUSED".into()])
        .alignment(Alignment::Center)
        .build()
        .render(area, buf);
}
