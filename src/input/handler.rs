use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::{Direction, InputEvent};

/// Maps terminal key presses to game input
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// `None` for keys the game does not care about, and for releases
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<InputEvent> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Some(InputEvent::KeyPressed(Direction::Up)),
            KeyCode::Down => Some(InputEvent::KeyPressed(Direction::Down)),
            KeyCode::Left => Some(InputEvent::KeyPressed(Direction::Left)),
            KeyCode::Right => Some(InputEvent::KeyPressed(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Some(InputEvent::KeyPressed(Direction::Up)),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(InputEvent::KeyPressed(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(InputEvent::KeyPressed(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(InputEvent::KeyPressed(Direction::Right))
            }

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),

            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up)),
            Some(InputEvent::KeyPressed(Direction::Up))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down)),
            Some(InputEvent::KeyPressed(Direction::Down))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left)),
            Some(InputEvent::KeyPressed(Direction::Left))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            Some(InputEvent::KeyPressed(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w'))),
            Some(InputEvent::KeyPressed(Direction::Up))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a'))),
            Some(InputEvent::KeyPressed(Direction::Left))
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('s'))),
            Some(InputEvent::KeyPressed(Direction::Down))
        );
        assert_eq!(
            handler.handle_key_event(KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT)),
            Some(InputEvent::KeyPressed(Direction::Right))
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), Some(InputEvent::Quit));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), Some(InputEvent::Quit));
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('x'))), None);
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_ignored() {
        let handler = InputHandler::new();
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );

        assert_eq!(handler.handle_key_event(release), None);
    }
}
