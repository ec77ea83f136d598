//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Input and drawing are reached through the [`InputSource`] and [`Renderer`] traits.

pub mod action;
pub mod config;
pub mod draw;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use action::{Direction, InputEvent, InputSource};
pub use config::{ConfigError, GameConfig, Palette, Rgb};
pub use draw::{Draw, Renderer};
pub use engine::{GameLoop, StepEvent, TickOutcome};
pub use food::Food;
pub use grid::{wrap, Cell, Grid};
pub use snake::{MoveResult, Snake, SnakeError};
