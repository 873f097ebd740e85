//! Keyboard mapping.
//!
//! Translates raw terminal key events into game [`Command`]s. The step size policy lives
//! here: a plain arrow moves the cursor by [`STEP`], holding shift moves by [`FAST_STEP`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termsweeper_core::{Command, Coord, Direction};

const STEP: Coord = 1;
const FAST_STEP: Coord = 5;

#[derive(Debug, PartialEq)]
pub(crate) enum Action {
    Play(Command),
    Quit,
}

pub(crate) fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
        FAST_STEP
    } else {
        STEP
    };

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        KeyCode::Left => move_by(Direction::Left, step),
        KeyCode::Right => move_by(Direction::Right, step),
        KeyCode::Up => move_by(Direction::Up, step),
        KeyCode::Down => move_by(Direction::Down, step),

        // vi keys, upper case for the fast step
        KeyCode::Char('h') => move_by(Direction::Left, STEP),
        KeyCode::Char('l') => move_by(Direction::Right, STEP),
        KeyCode::Char('k') => move_by(Direction::Up, STEP),
        KeyCode::Char('j') => move_by(Direction::Down, STEP),
        KeyCode::Char('H') => move_by(Direction::Left, FAST_STEP),
        KeyCode::Char('L') => move_by(Direction::Right, FAST_STEP),
        KeyCode::Char('K') => move_by(Direction::Up, FAST_STEP),
        KeyCode::Char('J') => move_by(Direction::Down, FAST_STEP),

        KeyCode::Char(' ') | KeyCode::Enter => Action::Play(Command::Select),
        KeyCode::Char('f') => Action::Play(Command::ToggleFlag),

        _ => return None,
    };

    Some(action)
}

fn move_by(direction: Direction, step: Coord) -> Action {
    Action::Play(Command::Move { direction, step })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_arrow_moves_by_one() {
        assert_eq!(
            map_key(key(KeyCode::Left, KeyModifiers::NONE)),
            Some(move_by(Direction::Left, 1))
        );
        assert_eq!(
            map_key(key(KeyCode::Down, KeyModifiers::NONE)),
            Some(move_by(Direction::Down, 1))
        );
    }

    #[test]
    fn shifted_arrow_moves_by_five() {
        assert_eq!(
            map_key(key(KeyCode::Right, KeyModifiers::SHIFT)),
            Some(move_by(Direction::Right, 5))
        );
        assert_eq!(
            map_key(key(KeyCode::Up, KeyModifiers::SHIFT)),
            Some(move_by(Direction::Up, 5))
        );
    }

    #[test]
    fn vi_keys_move_the_cursor() {
        assert_eq!(
            map_key(key(KeyCode::Char('l'), KeyModifiers::NONE)),
            Some(move_by(Direction::Right, 1))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('J'), KeyModifiers::SHIFT)),
            Some(move_by(Direction::Down, 5))
        );
    }

    #[test]
    fn action_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Action::Play(Command::Select))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::Play(Command::Select))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('f'), KeyModifiers::NONE)),
            Some(Action::Play(Command::ToggleFlag))
        );
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(map_key(key(KeyCode::Esc, KeyModifiers::NONE)), Some(Action::Quit));
    }

    #[test]
    fn unmapped_and_released_keys_are_ignored() {
        assert_eq!(map_key(key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
        assert_eq!(map_key(key(KeyCode::Tab, KeyModifiers::NONE)), None);

        let mut release = key(KeyCode::Char(' '), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }
}
