//! Torus Snake - a terminal Snake game on a grid whose edges wrap around
//!
//! This library provides:
//! - Core game logic, free of I/O (game module)
//! - Keyboard input from the terminal (input module)
//! - Terminal rendering of the board (render module)
//! - The fixed-rate tick clock (clock module)
//! - The interactive session tying them together (app module)

pub mod app;
pub mod clock;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
