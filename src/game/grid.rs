use super::action::Direction;

/// A position on the game grid, in cell units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction, without wrapping
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Folds a cell back onto a `width` x `height` torus.
pub fn wrap(cell: Cell, width: i32, height: i32) -> Cell {
    Cell {
        x: cell.x.rem_euclid(width),
        y: cell.y.rem_euclid(height),
    }
}

/// Dimensions of the playing field in cells.
///
/// Edges are joined: leaving through one side re-enters on the opposite side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grid covering a canvas of `screen_width` x `screen_height` pixels
    pub fn from_canvas(screen_width: u32, screen_height: u32, cell_size: u32) -> Self {
        Self::new(
            (screen_width / cell_size) as i32,
            (screen_height / cell_size) as i32,
        )
    }

    pub fn wrap(&self, cell: Cell) -> Cell {
        wrap(cell, self.width, self.height)
    }

    /// One step from `cell` in `direction`, wrapped onto the grid
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        self.wrap(cell.moved_in_direction(direction))
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_movement() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.moved_by(1, 0), Cell::new(6, 5));
        assert_eq!(cell.moved_by(-1, 0), Cell::new(4, 5));
        assert_eq!(cell.moved_in_direction(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.moved_in_direction(Direction::Up), Cell::new(5, 4));
    }

    #[test]
    fn test_wrap_each_edge() {
        let grid = Grid::new(10, 8);

        assert_eq!(grid.step(Cell::new(9, 3), Direction::Right), Cell::new(0, 3));
        assert_eq!(grid.step(Cell::new(0, 3), Direction::Left), Cell::new(9, 3));
        assert_eq!(grid.step(Cell::new(4, 0), Direction::Up), Cell::new(4, 7));
        assert_eq!(grid.step(Cell::new(4, 7), Direction::Down), Cell::new(4, 0));
    }

    #[test]
    fn test_wrap_leaves_inner_cells_alone() {
        let cell = Cell::new(3, 4);
        assert_eq!(wrap(cell, 10, 10), cell);
    }

    #[test]
    fn test_wrap_far_outside() {
        assert_eq!(wrap(Cell::new(-21, 25), 10, 10), Cell::new(9, 5));
    }

    #[test]
    fn test_grid_from_default_canvas() {
        let grid = Grid::from_canvas(640, 480, 20);
        assert_eq!(grid, Grid::new(32, 24));
        assert_eq!(grid.center(), Cell::new(16, 12));
        assert_eq!(grid.cell_count(), 768);
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(20, 20);

        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(19, 19)));
        assert!(!grid.contains(Cell::new(-1, 0)));
        assert!(!grid.contains(Cell::new(20, 0)));
        assert!(!grid.contains(Cell::new(0, 20)));
    }

    #[test]
    fn test_cells_visits_every_cell_once() {
        let grid = Grid::new(3, 2);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|c| grid.contains(*c)));
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(2, 1));
    }
}
