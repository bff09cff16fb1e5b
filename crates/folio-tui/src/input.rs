use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use folio_core::SectionId;

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    // Sections
    NextSection,
    PrevSection,
    GotoSection(SectionId),
    // Hamburger menu
    ToggleMenu,
    MenuUp,
    MenuDown,
    MenuSelect,
    CloseMenu,
    // Project showcase
    NextProject,
    PrevProject,
    NextImage,
    PrevImage,
    // Social links
    NextLink,
    OpenLink,
    Select,
    Help,
    ExitMode,
    // Mouse, in screen cells
    PointerDown { column: u16, row: u16 },
    PointerDrag { column: u16, row: u16 },
    PointerUp { column: u16, row: u16 },
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key exits help
        return Action::ExitMode;
    }

    if app.menu.is_open() {
        if let Some(action) = handle_menu_mode(&key) {
            return action;
        }
    }

    let binding = KeyBinding::from_event(&key);

    if keymap.starts_sequence(&binding) {
        return if app.pending_key == Some('g') {
            keymap.sequence_action().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    match keymap.action(&binding) {
        Some(Action::ExitMode) if app.menu.is_open() => Action::CloseMenu,
        Some(Action::ToggleMenu) if app.menu.is_open() => Action::CloseMenu,
        Some(action) => action,
        None => Action::None,
    }
}

/// Keys with a fixed meaning while the menu is open
fn handle_menu_mode(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MenuDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MenuUp),
        KeyCode::Enter => Some(Action::MenuSelect),
        KeyCode::Esc => Some(Action::CloseMenu),
        _ => None,
    }
}

/// Handle a mouse event and return the corresponding action
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown { column, row },
        MouseEventKind::Drag(MouseButton::Left) => Action::PointerDrag { column, row },
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp { column, row },
        MouseEventKind::ScrollDown => Action::ScrollDown,
        MouseEventKind::ScrollUp => Action::ScrollUp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use folio_core::{AppConfig, Portfolio};

    fn app() -> App {
        App::new(AppConfig::default(), Portfolio::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_gg_sequence() {
        let keymap = Keymap::default();
        let mut app = app();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app, &keymap),
            Action::PendingG
        );
        app.pending_key = Some('g');
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app, &keymap),
            Action::JumpToTop
        );
    }

    #[test]
    fn test_help_mode_swallows_keys() {
        let keymap = Keymap::default();
        let mut app = app();
        app.mode = Mode::Help;
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &app, &keymap),
            Action::ExitMode
        );
    }

    #[test]
    fn test_menu_keys_while_open() {
        let keymap = Keymap::default();
        let mut app = app();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app, &keymap),
            Action::ScrollDown
        );
        app.menu.open();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app, &keymap),
            Action::MenuDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('m')), &app, &keymap),
            Action::CloseMenu
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3')), &app, &keymap),
            Action::GotoSection(SectionId::Projects)
        );
    }

    #[test]
    fn test_mouse_mapping() {
        let event = MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            handle_mouse_event(event),
            Action::PointerDrag { column: 12, row: 4 }
        );
        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..event
        };
        assert_eq!(handle_mouse_event(right), Action::None);
    }
}
