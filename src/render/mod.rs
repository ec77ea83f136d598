pub mod canvas;
pub mod hud;

pub use canvas::CellCanvas;
pub use hud::Hud;
