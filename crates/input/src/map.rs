//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Letters are matched case-insensitively.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    let direction = match code {
        KeyCode::Up | KeyCode::Char('k' | 'w') => Direction::Up,
        KeyCode::Down | KeyCode::Char('j' | 's') => Direction::Down,
        KeyCode::Left | KeyCode::Char('h' | 'a') => Direction::Left,
        KeyCode::Right | KeyCode::Char('l' | 'd') => Direction::Right,

        KeyCode::Char('r') => return Some(GameAction::Restart),

        _ => return None,
    };
    Some(GameAction::Move(direction))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn dir(code: KeyCode) -> Option<Direction> {
        match handle_key_event(KeyEvent::from(code)) {
            Some(GameAction::Move(d)) => Some(d),
            _ => None,
        }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(dir(KeyCode::Up), Some(Direction::Up));
        assert_eq!(dir(KeyCode::Down), Some(Direction::Down));
        assert_eq!(dir(KeyCode::Left), Some(Direction::Left));
        assert_eq!(dir(KeyCode::Right), Some(Direction::Right));
    }

    #[test]
    fn test_vim_and_wasd_keys() {
        assert_eq!(dir(KeyCode::Char('k')), Some(Direction::Up));
        assert_eq!(dir(KeyCode::Char('J')), Some(Direction::Down));
        assert_eq!(dir(KeyCode::Char('h')), Some(Direction::Left));
        assert_eq!(dir(KeyCode::Char('L')), Some(Direction::Right));

        assert_eq!(dir(KeyCode::Char('W')), Some(Direction::Up));
        assert_eq!(dir(KeyCode::Char('s')), Some(Direction::Down));
        assert_eq!(dir(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(dir(KeyCode::Char('D')), Some(Direction::Right));
    }

    #[test]
    fn test_each_direction_has_its_own_arrow() {
        let arrows = [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right];
        let mapped: Vec<Direction> = arrows.iter().filter_map(|&k| dir(k)).collect();
        for d in Direction::ALL {
            assert_eq!(
                mapped.iter().filter(|&&m| m == d).count(),
                1,
                "{d} mapped twice or never"
            );
        }
    }

    #[test]
    fn test_restart_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
