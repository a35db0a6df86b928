//! Key event handlers for different UI modes

use crate::dashboard::NavTab;
use crate::detail::{DetailShell, DetailTab};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Normal => match state.detail() {
            Some(detail) if detail.selected_bot().is_some() => handle_key_bot_modal(key),
            Some(detail) => handle_key_detail(detail, key),
            None => handle_key_dashboard(state.dashboard.active_nav_tab(), key),
        },
    }
}

/// Handle key events in the quit confirmation dialog
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Keys shared by the grid and the detail view
fn handle_key_global(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::F(n @ 1..=4) => NavTab::ALL
            .get(usize::from(n) - 1)
            .map(|tab| Message::SelectNavTab(*tab)),
        _ => None,
    }
}

/// Handle key events on the dashboard
///
/// Area navigation only applies on the Automations tab, the one that shows
/// the grid.
fn handle_key_dashboard(nav_tab: NavTab, key: InputKey) -> Option<Message> {
    let on_grid = nav_tab == NavTab::Automations;

    match key {
        InputKey::Up | InputKey::Char('k') if on_grid => Some(Message::MoveAreaCursor(-1)),
        InputKey::Down | InputKey::Char('j') if on_grid => Some(Message::MoveAreaCursor(1)),
        InputKey::Enter if on_grid => Some(Message::SelectAreaAtCursor),
        InputKey::Tab => Some(Message::NextNavTab),
        InputKey::BackTab => Some(Message::PreviousNavTab),
        _ => handle_key_global(key),
    }
}

/// Handle key events in an area's detail view
fn handle_key_detail(detail: &DetailShell, key: InputKey) -> Option<Message> {
    let tab = detail.active_tab();

    match key {
        InputKey::Esc | InputKey::Backspace => Some(Message::Back),

        // Sub-tab navigation
        InputKey::Tab | InputKey::Right | InputKey::Char('l') => Some(Message::NextDetailTab),
        InputKey::BackTab | InputKey::Left | InputKey::Char('h') => {
            Some(Message::PreviousDetailTab)
        }
        InputKey::Char('1'..='6') => key
            .digit()
            .and_then(DetailTab::from_number)
            .map(Message::SelectDetailTab),

        // List navigation
        InputKey::Up | InputKey::Char('k') => Some(Message::MoveDetailCursor(-1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveDetailCursor(1)),

        InputKey::Enter if matches!(tab, DetailTab::Overview | DetailTab::Bots) => {
            Some(Message::OpenBotAtCursor)
        }
        InputKey::Char('a') if tab == DetailTab::FixOptimize => Some(Message::ApplyFixAtCursor),
        InputKey::Char('d') => Some(Message::ToggleAuxPanel),

        _ => handle_key_global(key),
    }
}

/// Handle key events while the bot modal is shown
fn handle_key_bot_modal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::CloseBotDetail),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
