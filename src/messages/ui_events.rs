//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application tabs
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AppTab {
    #[default]
    Counter,
    Users,
}

impl AppTab {
    pub fn next(&self) -> AppTab {
        match self {
            AppTab::Counter => AppTab::Users,
            AppTab::Users => AppTab::Counter,
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    // Tab navigation
    SwitchTab(AppTab),
    NextTab,

    // Counter
    Increment,

    // Users
    LoadUsers,
    NextCity,
    PrevCity,
    ResetFilter,
    NextRow,
    PrevRow,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, active_tab: AppTab, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Any key closes the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        KeyCode::Char('1') => return Some(UiEvent::SwitchTab(AppTab::Counter)),
        KeyCode::Char('2') => return Some(UiEvent::SwitchTab(AppTab::Users)),
        KeyCode::Tab | KeyCode::BackTab => return Some(UiEvent::NextTab),
        _ => {}
    }

    match active_tab {
        AppTab::Counter => handle_counter_tab_keys(key),
        AppTab::Users => handle_users_tab_keys(key),
    }
}

/// Handle keys for the counter tab
fn handle_counter_tab_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('+') | KeyCode::Enter => Some(UiEvent::Increment),
        _ => None,
    }
}

/// Handle keys for the users tab
fn handle_users_tab_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('l') | KeyCode::Enter => Some(UiEvent::LoadUsers),
        KeyCode::Right => Some(UiEvent::NextCity),
        KeyCode::Left => Some(UiEvent::PrevCity),
        KeyCode::Char('r') => Some(UiEvent::ResetFilter),
        KeyCode::Down => Some(UiEvent::NextRow),
        KeyCode::Up => Some(UiEvent::PrevRow),
        _ => None,
    }
}
