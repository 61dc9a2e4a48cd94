use super::cell::Cell;
use super::direction::Direction;
use super::options::{Options, OptionsError};
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};

/// Everything there is to know about a game at one instant.
///
/// `direction` is the committed direction: the one used by the most recent
/// tick, or the starting direction if no tick has happened yet.  `food` is
/// `None` only after the snake has filled the whole grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState {
    pub(super) grid_size: u16,
    pub(super) snake: Snake,
    pub(super) direction: Direction,
    pub(super) food: Option<Cell>,
    pub(super) game_over: bool,
}

impl GameState {
    fn new(grid_size: u16, snake: Snake, direction: Direction) -> GameState {
        GameState {
            grid_size,
            snake,
            direction,
            food: None,
            game_over: false,
        }
    }

    pub(crate) fn grid_size(&self) -> u16 {
        self.grid_size
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn food(&self) -> Option<Cell> {
        self.food
    }

    pub(crate) fn is_game_over(&self) -> bool {
        self.game_over
    }
}

/// The game rules, advanced one tick at a time.
///
/// The engine knows nothing of terminals, keys, or clocks: the host calls
/// [`set_direction`][Engine::set_direction] whenever the player asks for a
/// turn, calls [`tick`][Engine::tick] once per movement period, and reads
/// everything else from [`state`][Engine::state].  Direction changes are
/// staged in a single pending slot (last write wins) and take effect at the
/// next tick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Engine<R = rand::rngs::ThreadRng> {
    rng: R,
    options: Options,
    start: Snake,
    pub(super) state: GameState,
    pending: Option<Direction>,
}

impl<R: Rng> Engine<R> {
    /// Create an engine from `options`, drawing food placements from `rng`.
    /// Fails if the options do not describe a playable game.
    pub(crate) fn new_with_rng(options: Options, rng: R) -> Result<Engine<R>, OptionsError> {
        let start = options.new_snake()?;
        let state = GameState::new(options.grid_size, start.clone(), options.direction);
        let mut engine = Engine {
            rng,
            options,
            start,
            state,
            pending: None,
        };
        engine.place_food();
        Ok(engine)
    }

    /// Put the game back in its starting state with freshly placed food.
    pub(crate) fn reset(&mut self) {
        self.state = GameState::new(
            self.options.grid_size,
            self.start.clone(),
            self.options.direction,
        );
        self.pending = None;
        self.place_food();
    }

    /// Ask for the snake to turn towards `intent` at the next tick.
    ///
    /// The request is dropped silently if it is the exact reverse of the
    /// committed direction or if the game is already over; a previously
    /// staged request is kept in either case.
    pub(crate) fn set_direction(&mut self, intent: Direction) {
        if self.state.game_over || intent == self.state.direction.reverse() {
            return;
        }
        self.pending = Some(intent);
    }

    /// Advance the game by one move.
    ///
    /// Commits any pending direction, steps the head one cell, and settles
    /// the consequences: leaving the grid or running into a still-occupied
    /// body cell ends the game with the snake left where it was, while
    /// landing on the food grows the snake by one cell and places new food.
    pub(crate) fn tick(&mut self) -> &GameState {
        if self.state.game_over {
            return &self.state;
        }
        if let Some(direction) = self.pending.take() {
            self.state.direction = direction;
        }
        let head = self.state.snake.head();
        let Some(new_head) = self.state.direction.step(head, self.state.grid_size) else {
            self.state.game_over = true;
            return &self.state;
        };
        let growing = Some(new_head) == self.state.food;
        if self.state.snake.hits(new_head, growing) {
            self.state.game_over = true;
            return &self.state;
        }
        self.state.snake.advance(new_head, growing);
        if growing {
            self.place_food();
        }
        &self.state
    }

    /// Drop the food onto a random free cell, uniformly.
    ///
    /// A bounded number of rejection samples handles the common sparse case;
    /// a crowded grid falls back to choosing among an enumeration of the free
    /// cells, so placement always terminates.  If no free cell remains the
    /// food goes away and the game ends.
    fn place_food(&mut self) {
        let grid_size = self.state.grid_size;
        let mut placed = None;
        for _ in 0..consts::FOOD_SAMPLE_ATTEMPTS {
            let cell = Cell::new(
                self.rng.random_range(0..grid_size),
                self.rng.random_range(0..grid_size),
            );
            if !self.state.snake.contains(cell) {
                placed = Some(cell);
                break;
            }
        }
        if placed.is_none() {
            let snake = &self.state.snake;
            placed = Cell::grid(grid_size)
                .filter(|&cell| !snake.contains(cell))
                .choose(&mut self.rng);
        }
        self.state.food = placed;
        if placed.is_none() {
            self.state.game_over = true;
        }
    }
}

impl<R> Engine<R> {
    /// Return a read-only snapshot of the current game state
    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }
}
