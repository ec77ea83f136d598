use rand::Rng;
use std::collections::HashSet;

use super::config::{Palette, Rgb};
use super::draw::{draw_block, Draw, Renderer};
use super::grid::{Cell, Grid};

/// The single piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Cell,
    pub color: Rgb,
}

impl Food {
    pub fn new(position: Cell, color: Rgb) -> Self {
        Self { position, color }
    }

    /// Pick a uniformly random cell of `grid` that is not in `occupied`.
    ///
    /// Returns `None` when `occupied` covers the whole grid.
    pub fn place<R: Rng>(rng: &mut R, occupied: &HashSet<Cell>, grid: Grid) -> Option<Cell> {
        let free = grid.cell_count() - occupied.iter().filter(|c| grid.contains(**c)).count();
        if free == 0 {
            return None;
        }

        loop {
            let x = rng.gen_range(0..grid.width);
            let y = rng.gen_range(0..grid.height);
            let cell = Cell::new(x, y);

            if !occupied.contains(&cell) {
                return Some(cell);
            }
        }
    }
}

impl Draw for Food {
    fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, palette: &Palette) {
        draw_block(renderer, self.position, self.color, palette);
    }
}
