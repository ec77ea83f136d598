use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{
    action::{InputEvent, InputSource},
    config::{ConfigError, GameConfig, Palette},
    draw::{Draw, Renderer},
    food::Food,
    grid::Grid,
    snake::{MoveResult, Snake},
};

/// What happened to the snake during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Plain move
    Moved,
    /// The head reached the food
    Ate,
    /// The head ran into the body and the snake was reset
    Collided,
    /// The snake covered the whole board and was reset
    BoardFilled,
}

/// Result of [`GameLoop::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue(StepEvent),
    /// A quit request arrived; the game state was left untouched
    Quit,
}

/// Owns the snake and the food and advances them one tick at a time
pub struct GameLoop<R = StdRng> {
    grid: Grid,
    palette: Palette,
    snake: Snake,
    food: Food,
    rng: R,
}

impl GameLoop<StdRng> {
    /// Create a game from the configuration, seeding food placement from
    /// `config.seed` when present
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameLoop<R> {
    /// Fails if `config` does not pass [`GameConfig::validate`]
    pub fn with_rng(config: &GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = config.grid();
        let palette = config.palette;
        let snake = Snake::new(grid.center(), config.initial_length, palette.snake);
        // A valid grid has at least four cells and the snake starts on one.
        let position = Food::place(&mut rng, &snake.occupied(), grid)
            .ok_or(ConfigError::GridTooSmall {
                width: grid.width,
                height: grid.height,
            })?;

        Ok(Self {
            grid,
            palette,
            snake,
            food: Food::new(position, palette.food),
            rng,
        })
    }

    /// Run one tick: input, movement, food, then a full render pass
    pub fn tick<I, D>(&mut self, input: &mut I, renderer: &mut D) -> TickOutcome
    where
        I: InputSource + ?Sized,
        D: Renderer + ?Sized,
    {
        if self.apply_input(input.drain()) {
            info!("quit requested");
            return TickOutcome::Quit;
        }

        let event = self.step();
        self.render(renderer);

        TickOutcome::Continue(event)
    }

    /// Feed queued events to the snake. Returns true if one of them was a quit.
    pub fn apply_input(&mut self, events: impl IntoIterator<Item = InputEvent>) -> bool {
        for event in events {
            match event {
                InputEvent::Quit => return true,
                InputEvent::KeyPressed(direction) => {
                    self.snake.set_pending_direction(direction);
                }
            }
        }
        false
    }

    /// Advance the snake and resolve collisions and food
    pub fn step(&mut self) -> StepEvent {
        if self.snake.advance(self.grid) == MoveResult::Collided {
            info!(length = self.snake.len(), "self collision, resetting snake");
            self.reset_round();
            return StepEvent::Collided;
        }

        self.consume_food()
    }

    /// Grow and move the food if the head is on it
    pub fn consume_food(&mut self) -> StepEvent {
        if self.snake.head_position() != self.food.position {
            return StepEvent::Moved;
        }

        self.snake.grow();
        match Food::place(&mut self.rng, &self.snake.occupied(), self.grid) {
            Some(position) => {
                debug!(length = self.snake.target_length(), ?position, "food eaten");
                self.food.position = position;
                StepEvent::Ate
            }
            None => {
                info!(length = self.snake.len(), "board filled, resetting snake");
                self.reset_round();
                StepEvent::BoardFilled
            }
        }
    }

    /// Clear the board and draw food, then snake
    pub fn render<D: Renderer + ?Sized>(&self, renderer: &mut D) {
        renderer.clear(self.palette.background);
        self.food.draw(renderer, &self.palette);
        self.snake.draw(renderer, &self.palette);
    }

    fn reset_round(&mut self) {
        self.snake.reset();
        if self.snake.occupies(self.food.position) {
            if let Some(position) = Food::place(&mut self.rng, &self.snake.occupied(), self.grid) {
                self.food.position = position;
            }
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn food_mut(&mut self) -> &mut Food {
        &mut self.food
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
