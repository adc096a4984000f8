use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop playback, or leave once it has finished
    Quit,
    /// Repaint, e.g. after a resize
    Redraw,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Redraw,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(q), Action::Quit);
        assert_eq!(handle_key_event(esc), Action::Quit);
        assert_eq!(handle_key_event(ctrl_c), Action::Quit);
    }

    #[test]
    fn test_other_keys() {
        let c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(c), Action::None);
        assert_eq!(handle_key_event(ctrl_l), Action::Redraw);
    }
}
