use std::collections::{HashSet, VecDeque};
use thiserror::Error;
use tracing::trace;

use super::action::Direction;
use super::config::{Palette, Rgb};
use super::draw::{draw_block, Draw, Renderer};
use super::grid::{Cell, Grid};

/// Direction of a freshly reset snake
pub const INITIAL_DIRECTION: Direction = Direction::Up;

/// Outcome of [`Snake::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The head moved to a free cell
    Moved,
    /// The head would have entered the body; nothing was moved
    Collided,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnakeError {
    #[error("snake body must contain at least one cell")]
    EmptyBody,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    positions: VecDeque<Cell>,
    /// Target body size; the body catches up one cell per move
    length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    /// Tail cell vacated by the most recent move
    last_dropped: Option<Cell>,
    spawn: Cell,
    initial_length: usize,
    pub color: Rgb,
}

impl Snake {
    /// A one-cell snake at `spawn`, heading up, that will grow to `initial_length`
    pub fn new(spawn: Cell, initial_length: usize, color: Rgb) -> Self {
        let mut snake = Self {
            positions: VecDeque::new(),
            length: initial_length,
            direction: INITIAL_DIRECTION,
            pending_direction: None,
            last_dropped: None,
            spawn,
            initial_length,
            color,
        };
        snake.reset();
        snake
    }

    /// A snake with an explicit body, head first.
    ///
    /// The target length is the body size. A later [`reset`](Self::reset)
    /// respawns at the current head with that length, unless changed with
    /// [`with_spawn`](Self::with_spawn).
    pub fn from_body(
        body: impl IntoIterator<Item = Cell>,
        direction: Direction,
        color: Rgb,
    ) -> Result<Self, SnakeError> {
        let positions: VecDeque<Cell> = body.into_iter().collect();
        let head = *positions.front().ok_or(SnakeError::EmptyBody)?;
        let length = positions.len();

        Ok(Self {
            positions,
            length,
            direction,
            pending_direction: None,
            last_dropped: None,
            spawn: head,
            initial_length: length,
            color,
        })
    }

    /// Change where and how long the snake comes back after a reset
    pub fn with_spawn(mut self, spawn: Cell, initial_length: usize) -> Self {
        self.spawn = spawn;
        self.initial_length = initial_length.max(1);
        self
    }

    /// Back to a single segment at the spawn cell, heading up
    pub fn reset(&mut self) {
        self.positions.clear();
        self.positions.push_back(self.spawn);
        self.length = self.initial_length.max(1);
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = None;
        self.last_dropped = None;
    }

    /// Buffer a turn for the next move.
    ///
    /// Turning straight back into the neck is refused and leaves the buffer
    /// as it was. A one-segment snake has no neck and may turn anywhere.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if self.positions.len() > 1 && direction.is_opposite(self.direction) {
            trace!(?direction, current = ?self.direction, "reversal rejected");
            return false;
        }

        self.pending_direction = Some(direction);
        true
    }

    /// Move one cell, wrapping around the grid edges.
    ///
    /// The tail only counts as an obstacle when it stays put, i.e. while the
    /// snake is still growing towards its target length.
    pub fn advance(&mut self, grid: Grid) -> MoveResult {
        if let Some(next) = self.pending_direction.take() {
            self.direction = next;
        }

        let new_head = grid.step(self.head_position(), self.direction);

        let tail_vacates = self.positions.len() >= self.length;
        let obstacles = if tail_vacates {
            self.positions.len() - 1
        } else {
            self.positions.len()
        };

        if self.positions.iter().take(obstacles).any(|c| *c == new_head) {
            return MoveResult::Collided;
        }

        self.positions.push_front(new_head);
        self.last_dropped = if self.positions.len() > self.length {
            self.positions.pop_back()
        } else {
            None
        };

        MoveResult::Moved
    }

    /// Add one segment; it appears over the next move
    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn head_position(&self) -> Cell {
        self.positions[0]
    }

    /// Body segments, head first
    pub fn positions(&self) -> &VecDeque<Cell> {
        &self.positions
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.positions.contains(&cell)
    }

    pub fn occupied(&self) -> HashSet<Cell> {
        self.positions.iter().copied().collect()
    }

    /// Current number of body segments
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a constructed snake
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn target_length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn last_dropped(&self) -> Option<Cell> {
        self.last_dropped
    }
}

impl Draw for Snake {
    fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, palette: &Palette) {
        // Erase first: the new head may sit where the old tail was.
        if let Some(cell) = self.last_dropped {
            renderer.fill_cell(cell, palette.background);
        }

        for cell in &self.positions {
            draw_block(renderer, *cell, self.color, palette);
        }
    }
}
