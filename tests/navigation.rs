//! End-to-end navigation through the public message API
//!
//! Drives `process_message` with key events the way the TUI runner does and
//! checks the resulting session state against the built-in fixture.

use autobot_app::config::Settings;
use autobot_app::{process_message, AppState, DetailTab, InputKey, Message, NavTab};
use autobot_core::{fixture, AreaHealth, AreaId, BotId, BotStatus, FixId};

fn new_state() -> AppState {
    AppState::new(fixture::builtin(), Settings::default())
}

fn press(state: &mut AppState, key: InputKey) {
    process_message(state, Message::Key(key));
}

#[test]
fn drill_into_erp_update_bot_and_back() {
    let mut state = new_state();
    assert!(state.dashboard.selected_area_id().is_none());

    // Grid: second card is Veterinary Pathology
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    let area = state
        .dashboard
        .selected_area(&state.report)
        .expect("area selected");
    assert_eq!(area.id, AreaId::from("2"));
    assert_eq!(area.title, "Veterinary Pathology");
    assert_eq!(area.health, AreaHealth::Warning);

    let detail = state.detail().expect("detail mounted");
    assert_eq!(detail.active_tab(), DetailTab::Overview);
    assert!(detail.selected_bot().is_none());
    assert!(!detail.aux_panel_open());

    // Bots tab, third row
    press(&mut state, InputKey::Char('2'));
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Enter);

    let bot = state.selected_bot().expect("bot modal open");
    assert_eq!(bot.id, BotId::from("3"));
    assert_eq!(bot.name, "ERPUpdateBot");
    assert_eq!(bot.status, BotStatus::Critical);
    assert_eq!(bot.failures_7d, 3);

    // Esc closes the modal first, then leaves the area
    press(&mut state, InputKey::Esc);
    assert!(state.selected_bot().is_none());
    assert_eq!(state.detail().map(|d| d.active_tab()), Some(DetailTab::Bots));

    press(&mut state, InputKey::Esc);
    assert!(state.detail().is_none());
    assert!(state.dashboard.selected_area_id().is_none());
    assert_eq!(state.dashboard.active_nav_tab(), NavTab::Automations);
}

#[test]
fn back_discards_modal_panel_and_tab_state() {
    let mut state = new_state();
    process_message(&mut state, Message::SelectArea(AreaId::from("2")));
    process_message(&mut state, Message::SelectDetailTab(DetailTab::FixOptimize));
    process_message(&mut state, Message::ApplyFix(FixId::from("1")));
    process_message(&mut state, Message::ToggleAuxPanel);
    process_message(&mut state, Message::OpenBotDetail(BotId::from("3")));

    process_message(&mut state, Message::Back);
    assert!(state.detail().is_none());

    // Re-entering starts a fresh session
    process_message(&mut state, Message::SelectArea(AreaId::from("2")));
    let detail = state.detail().expect("detail mounted");
    assert_eq!(detail.active_tab(), DetailTab::Overview);
    assert!(detail.selected_bot().is_none());
    assert!(!detail.aux_panel_open());
    assert!(detail.applied_fixes().is_empty());
}

#[test]
fn nav_tab_change_clears_selection() {
    let mut state = new_state();
    process_message(&mut state, Message::SelectArea(AreaId::from("1")));
    assert!(state.detail().is_some());

    press(&mut state, InputKey::F(2));
    assert_eq!(state.dashboard.active_nav_tab(), NavTab::Issues);
    assert!(state.detail().is_none());

    // Returning to Automations does not restore the old selection
    press(&mut state, InputKey::F(1));
    assert!(state.detail().is_none());
}

#[test]
fn apply_fix_from_keyboard_is_idempotent() {
    let mut state = new_state();
    process_message(&mut state, Message::SelectArea(AreaId::from("2")));
    press(&mut state, InputKey::Char('6'));

    press(&mut state, InputKey::Char('a'));
    press(&mut state, InputKey::Char('a'));

    let detail = state.detail().expect("detail mounted");
    assert_eq!(detail.applied_fixes().len(), 1);
    assert!(detail.is_applied(&FixId::from("1")));
}

#[test]
fn quit_with_confirmation() {
    let mut state = new_state();
    state.settings.behavior.confirm_quit = true;

    press(&mut state, InputKey::Char('q'));
    assert!(!state.should_quit());
    assert!(state.confirm_dialog_state.is_some());

    press(&mut state, InputKey::Char('n'));
    assert!(!state.should_quit());
    assert!(state.confirm_dialog_state.is_none());

    press(&mut state, InputKey::Char('q'));
    press(&mut state, InputKey::Char('y'));
    assert!(state.should_quit());
}
