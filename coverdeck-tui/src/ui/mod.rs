//! UI rendering using ratatui

pub mod claim_form;
pub mod header;
pub mod marketplace;
pub mod policies;
pub mod status_bar;
pub mod summary;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, DashboardTab, Mode};

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Brand + tabs
            Constraint::Length(4), // Stat cards
            Constraint::Min(8),    // Card list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    header::render(frame, chunks[0], app);
    summary::render(frame, chunks[1], app);
    match app.tab {
        DashboardTab::Policies => policies::render(frame, chunks[2], app),
        DashboardTab::Marketplace => marketplace::render(frame, chunks[2], app),
    }
    status_bar::render(frame, chunks[3], app);

    // Modal overlay
    if app.mode == Mode::ClaimForm {
        claim_form::render(frame, app);
    }
}

/// Rect of the given size centered in `area`, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
