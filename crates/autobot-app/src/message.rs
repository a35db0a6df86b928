//! Message types for the application (TEA pattern)

use autobot_core::{AreaId, BotId, FixId};

use crate::dashboard::NavTab;
use crate::detail::DetailTab;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may show confirmation dialog)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Dashboard Messages
    // ─────────────────────────────────────────────────────────
    SelectNavTab(NavTab),
    NextNavTab,
    PreviousNavTab,
    /// Open the detail view for an area
    SelectArea(AreaId),
    /// Move the highlighted area card
    MoveAreaCursor(isize),
    SelectAreaAtCursor,
    /// Leave the detail view, clearing the area selection
    Back,

    // ─────────────────────────────────────────────────────────
    // Detail Messages
    // ─────────────────────────────────────────────────────────
    SelectDetailTab(DetailTab),
    NextDetailTab,
    PreviousDetailTab,
    /// Move the cursor of the active detail list
    MoveDetailCursor(isize),
    OpenBotDetail(BotId),
    OpenBotAtCursor,
    CloseBotDetail,
    ToggleAuxPanel,
    ApplyFix(FixId),
    ApplyFixAtCursor,
}
