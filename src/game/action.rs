/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A discrete event delivered by an [`InputSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The player asked to leave the game
    Quit,
    /// A steering key was pressed
    KeyPressed(Direction),
}

impl From<Direction> for InputEvent {
    fn from(direction: Direction) -> Self {
        InputEvent::KeyPressed(direction)
    }
}

/// Source of player input, drained once at the start of every tick.
///
/// Implementations must not block: `drain` returns whatever is queued right
/// now, possibly nothing.
pub trait InputSource {
    fn drain(&mut self) -> Vec<InputEvent>;
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    fn drain(&mut self) -> Vec<InputEvent> {
        (**self).drain()
    }
}
