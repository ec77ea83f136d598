use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::grid::Grid;

/// An RGB color, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors used for every draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    /// Outline drawn around every occupied cell
    pub border: Rgb,
    pub food: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            border: Rgb(93, 216, 228),
            food: Rgb(255, 0, 0),
            snake: Rgb(0, 255, 0),
        }
    }
}

/// Reasons a [`GameConfig`] cannot be played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("canvas {width}x{height} is not divisible by cell size {cell_size}")]
    UnalignedCanvas {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("grid must be at least 2x2 cells, got {width}x{height}")]
    GridTooSmall { width: i32, height: i32 },
    #[error("grid must be at most {max_width}x{max_height} cells and {max_cells} cells in total, got {width}x{height}")]
    GridTooLarge {
        width: i32,
        height: i32,
        max_width: i32,
        max_height: i32,
        max_cells: usize,
    },
    #[error("speed must be between 1 and {max} ticks per second, got {speed}")]
    SpeedOutOfRange { speed: u32, max: u32 },
    #[error("initial length must be between 1 and {max}, got {length}")]
    InitialLengthOutOfRange { length: usize, max: usize },
}

/// Configuration for the game, built once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Canvas width in pixels
    pub screen_width: u32,
    /// Canvas height in pixels
    pub screen_height: u32,
    /// Edge length of one grid cell in pixels
    pub cell_size: u32,
    /// Ticks per second
    pub speed: u32,
    /// Target length of a freshly reset snake
    pub initial_length: usize,
    /// Seed for food placement; random when absent
    pub seed: Option<u64>,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            speed: 20,
            initial_length: 2,
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    pub const MAX_SPEED: u32 = 1000;
    /// Widest grid whose terminal rendering (two columns per cell) still
    /// fits in a `u16` column index
    pub const MAX_GRID_WIDTH: i32 = (u16::MAX / 2) as i32;
    pub const MAX_GRID_HEIGHT: i32 = u16::MAX as i32;
    /// Upper bound on the cell buffer a canvas allocates
    pub const MAX_GRID_CELLS: usize = 1 << 20;

    /// Create a configuration with a custom grid size, in cells
    pub fn new(columns: u32, rows: u32) -> Self {
        let defaults = Self::default();
        Self {
            screen_width: columns * defaults.cell_size,
            screen_height: rows * defaults.cell_size,
            ..defaults
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn grid(&self) -> Grid {
        Grid::from_canvas(self.screen_width, self.screen_height, self.cell_size)
    }

    /// Time between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        if self.screen_width % self.cell_size != 0 || self.screen_height % self.cell_size != 0 {
            return Err(ConfigError::UnalignedCanvas {
                width: self.screen_width,
                height: self.screen_height,
                cell_size: self.cell_size,
            });
        }

        let grid = self.grid();
        if grid.width < 2 || grid.height < 2 {
            return Err(ConfigError::GridTooSmall {
                width: grid.width,
                height: grid.height,
            });
        }

        if grid.width > Self::MAX_GRID_WIDTH
            || grid.height > Self::MAX_GRID_HEIGHT
            || grid.cell_count() > Self::MAX_GRID_CELLS
        {
            return Err(ConfigError::GridTooLarge {
                width: grid.width,
                height: grid.height,
                max_width: Self::MAX_GRID_WIDTH,
                max_height: Self::MAX_GRID_HEIGHT,
                max_cells: Self::MAX_GRID_CELLS,
            });
        }

        if self.speed == 0 || self.speed > Self::MAX_SPEED {
            return Err(ConfigError::SpeedOutOfRange {
                speed: self.speed,
                max: Self::MAX_SPEED,
            });
        }

        let max = grid.cell_count();
        if self.initial_length == 0 || self.initial_length > max {
            return Err(ConfigError::InitialLengthOutOfRange {
                length: self.initial_length,
                max,
            });
        }

        Ok(())
    }
}
