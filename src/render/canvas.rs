use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::game::{Cell, Grid, Renderer, Rgb};

/// Terminal columns used by one grid cell; terminal glyphs are about twice
/// as tall as they are wide.
pub const COLUMNS_PER_CELL: u16 = 2;

/// Paint state of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub fill: Rgb,
    pub border: Option<Rgb>,
}

/// In-memory grid the game draws into; shown on screen as a ratatui widget.
///
/// Cells outside the grid are ignored.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    grid: Grid,
    cells: Vec<Paint>,
}

impl CellCanvas {
    pub fn new(grid: Grid, background: Rgb) -> Self {
        let blank = Paint {
            fill: background,
            border: None,
        };
        Self {
            grid,
            cells: vec![blank; grid.cell_count()],
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn get(&self, cell: Cell) -> Option<Paint> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Size of the canvas in terminal columns and rows
    pub fn terminal_size(&self) -> (u16, u16) {
        (
            self.grid.width as u16 * COLUMNS_PER_CELL,
            self.grid.height as u16,
        )
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if self.grid.contains(cell) {
            Some(cell.y as usize * self.grid.width as usize + cell.x as usize)
        } else {
            None
        }
    }
}

impl Renderer for CellCanvas {
    fn clear(&mut self, color: Rgb) {
        self.cells.fill(Paint {
            fill: color,
            border: None,
        });
    }

    fn fill_cell(&mut self, cell: Cell, color: Rgb) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = Paint {
                fill: color,
                border: None,
            };
        }
    }

    fn stroke_cell(&mut self, cell: Cell, color: Rgb) {
        if let Some(i) = self.index(cell) {
            self.cells[i].border = Some(color);
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

impl Widget for &CellCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for cell in self.grid.cells() {
            // Offsets are bounded by the area size.
            let offset = cell.x as u32 * COLUMNS_PER_CELL as u32;
            if offset + COLUMNS_PER_CELL as u32 > area.width as u32
                || cell.y as u32 >= area.height as u32
            {
                continue;
            }
            let column = area.x + offset as u16;
            let row = area.y + cell.y as u16;

            let paint = self.cells[cell.y as usize * self.grid.width as usize + cell.x as usize];
            let (symbols, style) = match paint.border {
                Some(border) => (
                    ["[", "]"],
                    Style::default().fg(to_color(border)).bg(to_color(paint.fill)),
                ),
                None => ([" ", " "], Style::default().bg(to_color(paint.fill))),
            };

            for (offset, symbol) in symbols.iter().enumerate() {
                if let Some(target) = buf.cell_mut((column + offset as u16, row)) {
                    target.set_symbol(symbol).set_style(style);
                }
            }
        }
    }
}
