//! Drawing interface between the game state and whatever displays it

use super::config::{Palette, Rgb};
use super::grid::Cell;

/// A surface made of grid cells.
///
/// One render pass is `clear` followed by any number of cell operations.
pub trait Renderer {
    /// Paint every cell with `color`
    fn clear(&mut self, color: Rgb);
    /// Paint the inside of `cell`
    fn fill_cell(&mut self, cell: Cell, color: Rgb);
    /// Paint the outline of `cell`
    fn stroke_cell(&mut self, cell: Cell, color: Rgb);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn clear(&mut self, color: Rgb) {
        (**self).clear(color)
    }

    fn fill_cell(&mut self, cell: Cell, color: Rgb) {
        (**self).fill_cell(cell, color)
    }

    fn stroke_cell(&mut self, cell: Cell, color: Rgb) {
        (**self).stroke_cell(cell, color)
    }
}

/// Something that knows how to put itself on a [`Renderer`]
pub trait Draw {
    fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, palette: &Palette);
}

/// Fill `cell` and outline it with the palette border
pub(crate) fn draw_block<R: Renderer + ?Sized>(
    renderer: &mut R,
    cell: Cell,
    color: Rgb,
    palette: &Palette,
) {
    renderer.fill_cell(cell, color);
    renderer.stroke_cell(cell, palette.border);
}
