mod cell;
mod direction;
mod engine;
mod options;
mod snake;
pub(crate) use self::options::{Options, OptionsError};
use self::cell::Cell;
use self::direction::Direction;
use self::engine::Engine;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
    Frame,
};
use std::io;
use std::time::{Duration, Instant};

/// The play screen: an [`Engine`] plus the scheduling & drawing around it.
///
/// While the game is running, input is polled with a deadline so that the
/// engine ticks once per `tick_period` no matter how many keys arrive in
/// between; once the game is over the screen just blocks on input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    engine: Engine<R>,
    tick_period: Duration,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(options: Options, tick_period: Duration) -> Result<Game, OptionsError> {
        Game::new_with_rng(options, tick_period, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(
        options: Options,
        tick_period: Duration,
        rng: R,
    ) -> Result<Game<R>, OptionsError> {
        let engine = Engine::new_with_rng(options, rng)?;
        Ok(Game {
            engine,
            tick_period,
            next_tick: None,
        })
    }

    /// Wait for the next key press or the next tick, whichever comes first,
    /// and feed it to the game.  Returns `Some` if the application should
    /// switch screens.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.tick_period);
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.engine.tick();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let command = Command::from_key_event(event.as_key_press_event()?)?;
        if self.running() {
            match command {
                Command::Quit | Command::Esc => return Some(Screen::Quit),
                Command::Up => self.engine.set_direction(Direction::North),
                Command::Down => self.engine.set_direction(Direction::South),
                Command::Left => self.engine.set_direction(Direction::West),
                Command::Right => self.engine.set_direction(Direction::East),
                _ => (),
            }
        } else {
            match command {
                Command::R => self.engine.reset(),
                Command::Quit | Command::Q | Command::Esc => return Some(Screen::Quit),
                _ => (),
            }
        }
        None
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn running(&self) -> bool {
        !self.engine.state().is_game_over()
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.engine.state();
        let display = get_display_area(area);
        let [status_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        Line::styled(
            format!(" Length: {}", state.snake().len()),
            consts::STATUS_BAR_STYLE,
        )
        .render(status_area, buf);

        let block_size = Size {
            width: state.grid_size().saturating_add(2),
            height: state.grid_size().saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let grid_area = block_area.inner(Margin::new(1, 1));
        let mut grid = Canvas {
            area: grid_area,
            buf,
        };
        for &cell in state.snake().body() {
            grid.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(cell) = state.food() {
            grid.draw_cell(cell, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        if state.is_game_over() {
            grid.draw_cell(
                state.snake().head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            grid.draw_cell(
                state.snake().head(),
                head_symbol(state.direction()),
                consts::SNAKE_STYLE,
            );
        }

        if state.is_game_over() {
            let popup_area = center_rect(
                display,
                Size {
                    width: GameOver::WIDTH,
                    height: GameOver::HEIGHT,
                },
            );
            GameOver.render(popup_area, buf);
        }
    }
}

/// Return the glyph for the snake's head when it is travelling in `direction`
fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
        Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
        Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
        Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        // The layout clips boards larger than the display; cells past the
        // clipped area would land on the border or beyond.
        if cell.x >= self.area.width || cell.y >= self.area.height {
            return;
        }
        let Some(x) = self.area.x.checked_add(cell.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(cell.y) else {
            return;
        };
        if let Some(screen_cell) = self.buf.cell_mut((x, y)) {
            screen_cell.set_char(symbol);
            screen_cell.set_style(Style::reset().patch(style));
        }
    }
}

/// A widget for the pop-up shown over the board once the game is over
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct GameOver;

impl GameOver {
    /// The height that should be used for the `Rect` passed to
    /// `GameOver::render()`
    const HEIGHT: u16 = 4;

    /// The width that should be used for the `Rect` passed to
    /// `GameOver::render()`
    const WIDTH: u16 = 15;
}

impl Widget for GameOver {
    /*
     * ┌─ GAME OVER ─┐
     * │ Restart (r) │
     * │ Quit (q)    │
     * └─────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" GAME OVER ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        let restart = Line::from_iter([
            Span::raw("Restart ("),
            Span::styled("r", consts::KEY_STYLE),
            Span::raw(")"),
        ]);
        let quit = Line::from_iter([
            Span::raw("Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ]);
        for (line, row) in [restart, quit].into_iter().zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}
