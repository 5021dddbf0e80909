use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
}

/// Discrete input understood by both menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Navigate(Move),
    Toggle,
    Confirm,
    Quit,
}

/// Maps a key press to a menu event. `Toggle` is only produced when the
/// stage supports multi-select. Releases and repeats are dropped.
pub fn interpret(
    key: &KeyEvent,
    allow_toggle: bool,
) -> Option<MenuEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match (key.code, key.modifiers) {
        // Raw mode swallows SIGINT, so Ctrl+C has to quit explicitly
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(MenuEvent::Quit),
        (KeyCode::Char('q' | 'Q'), _) => Some(MenuEvent::Quit),
        (KeyCode::Up, _) => Some(MenuEvent::Navigate(Move::Up)),
        (KeyCode::Down, _) => Some(MenuEvent::Navigate(Move::Down)),
        (KeyCode::Char(' '), _) if allow_toggle => Some(MenuEvent::Toggle),
        (KeyCode::Enter, _) => Some(MenuEvent::Confirm),
        _ => None,
    }
}
