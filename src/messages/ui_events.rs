//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sections::Section;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Sidebar navigation
    SelectSection(Section),
    NextSection,
    PrevSection,

    // Actions
    TopUp,
    RefreshWeather,

    // Popups
    DismissToast,
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool, has_toast: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Help swallows the next key
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    if has_toast && key.code == KeyCode::Esc {
        return Some(UiEvent::DismissToast);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => Some(UiEvent::PrevSection),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(UiEvent::NextSection),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            Section::from_index(index).map(UiEvent::SelectSection)
        }
        KeyCode::Char('t') => Some(UiEvent::TopUp),
        KeyCode::Char('r') => Some(UiEvent::RefreshWeather),
        _ => None,
    }
}
