pub mod handler;
pub mod terminal;

pub use handler::InputHandler;
pub use terminal::TerminalInput;
