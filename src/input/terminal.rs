use crossterm::event::{self, Event};
use std::time::Duration;
use tracing::warn;

use super::handler::InputHandler;
use crate::game::{InputEvent, InputSource};

/// Keyboard input from the controlling terminal.
///
/// Polls crossterm with a zero timeout, so draining never waits.
pub struct TerminalInput {
    handler: InputHandler,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            handler: InputHandler::new(),
        }
    }

    fn translate(&self, event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) => self.handler.handle_key_event(key),
            _ => None,
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn drain(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    warn!(?err, "failed to poll terminal events");
                    break;
                }
            }

            match event::read() {
                Ok(event) => events.extend(self.translate(event)),
                Err(err) => {
                    warn!(?err, "failed to read terminal event");
                    break;
                }
            }
        }

        events
    }
}
