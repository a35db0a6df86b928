//! Custom widget components

mod area_grid;
mod aux_panel;
mod bot_modal;
mod confirm_dialog;
pub mod detail;
mod footer;
mod header;
pub mod modal_overlay;
mod settings_view;

pub use area_grid::AreaGrid;
pub use aux_panel::AuxPanel;
pub use bot_modal::BotModal;
pub use confirm_dialog::ConfirmDialog;
pub use detail::{
    BotsTable, DetailHeader, DetailTabBar, FixList, InsightList, IssueList, OverviewTab,
    RunHistory,
};
pub use footer::{Footer, FooterContext};
pub use header::MainHeader;
pub use settings_view::SettingsView;
