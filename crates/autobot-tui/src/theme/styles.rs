//! Semantic style builders.

use autobot_core::{
    AreaHealth, BotStatus, InsightKind, InsightSeverity, IssueSeverity, RunOutcome, SuccessBand,
};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn brand_bold() -> Style {
    Style::default()
        .fg(palette::BRAND)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// White on brand red, used for the active detail tab
pub fn brand_selected() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::BRAND)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Status mapping ---

fn status_style(color: ratatui::style::Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Indicator for a bot or aggregated area status.
///
/// Returns `(label, Style)`.
pub fn bot_status(status: BotStatus) -> (&'static str, Style) {
    match status {
        BotStatus::Healthy => (status.label(), status_style(palette::STATUS_GREEN)),
        BotStatus::Warning => (status.label(), status_style(palette::STATUS_YELLOW)),
        BotStatus::Critical => (status.label(), status_style(palette::STATUS_RED)),
    }
}

pub fn area_health(health: AreaHealth) -> (&'static str, Style) {
    match health {
        AreaHealth::Healthy => (health.label(), status_style(palette::STATUS_GREEN)),
        AreaHealth::Warning => (health.label(), status_style(palette::STATUS_YELLOW)),
        AreaHealth::Error => (health.label(), status_style(palette::STATUS_RED)),
    }
}

pub fn issue_severity(severity: IssueSeverity) -> Style {
    match severity {
        IssueSeverity::Critical => status_style(palette::STATUS_RED),
        IssueSeverity::Warning => status_style(palette::STATUS_YELLOW),
        IssueSeverity::Minor => status_style(palette::STATUS_BLUE),
    }
}

pub fn insight_severity(severity: InsightSeverity) -> Style {
    match severity {
        InsightSeverity::High => status_style(palette::STATUS_RED),
        InsightSeverity::Medium => status_style(palette::STATUS_YELLOW),
        InsightSeverity::Low => status_style(palette::STATUS_BLUE),
    }
}

pub fn insight_kind(kind: InsightKind) -> Style {
    match kind {
        InsightKind::RootCause => status_style(palette::STATUS_PURPLE),
        InsightKind::Prediction => status_style(palette::STATUS_BLUE),
        InsightKind::Optimization => status_style(palette::STATUS_GREEN),
    }
}

pub fn run_outcome(outcome: &RunOutcome) -> Style {
    match outcome {
        RunOutcome::Success => Style::default().fg(palette::STATUS_GREEN),
        RunOutcome::Failure { .. } => Style::default().fg(palette::STATUS_RED),
    }
}

/// Fill color of a success-rate gauge
pub fn success_band(band: SuccessBand) -> Style {
    match band {
        SuccessBand::Good => Style::default().fg(palette::STATUS_GREEN),
        SuccessBand::Fair => Style::default().fg(palette::STATUS_YELLOW),
        SuccessBand::Poor => Style::default().fg(palette::STATUS_RED),
    }
}

pub fn gauge_track() -> Style {
    Style::default().fg(palette::GAUGE_TRACK)
}
