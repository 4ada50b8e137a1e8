//! Brand line and tab strip.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use crate::app::{App, DashboardTab};
use crate::theme::{ACCENT, DIM, HIGHLIGHT, SECONDARY};

/// Render the header: brand, greeting and the two dashboard tabs.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let titles = vec!["My Policies", "Buy Insurance"];
    let selected = match app.tab {
        DashboardTab::Policies => 0,
        DashboardTab::Marketplace => 1,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" InsurAI ")
                .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(SECONDARY)),
        )
        .select(selected)
        .highlight_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD));

    f.render_widget(tabs, area);

    // Greeting over the top-right border
    let greeting = match &app.user_name {
        Some(name) => format!(" Welcome back, {} ", name),
        None => " Welcome back ".to_string(),
    };
    let width = greeting.chars().count() as u16;
    if area.width > width + 2 {
        let greeting_area = Rect {
            x: area.x + area.width - width - 2,
            y: area.y,
            width,
            height: 1,
        };
        f.render_widget(
            Paragraph::new(Span::styled(greeting, Style::default().fg(DIM))),
            greeting_area,
        );
    }
}
