use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions represent all possible state changes in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,

    /// ## Overlay settings
    ToggleEnabled, // d
    ToggleNames, // n
    FloatPrecisionUp, // F
    FloatPrecisionDown, // f
    VectorPrecisionUp, // V
    VectorPrecisionDown, // v

    /// Advance the frame counter after a tick
    Tick,
}

/// Map a key press to an action
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('d') => Some(Action::ToggleEnabled),
        KeyCode::Char('n') => Some(Action::ToggleNames),
        KeyCode::Char('F') => Some(Action::FloatPrecisionUp),
        KeyCode::Char('f') => Some(Action::FloatPrecisionDown),
        KeyCode::Char('V') => Some(Action::VectorPrecisionUp),
        KeyCode::Char('v') => Some(Action::VectorPrecisionDown),
        _ => None,
    }
}
