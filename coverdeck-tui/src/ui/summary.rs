//! Stat cards above the card list.

use coverdeck_core::{format_crore, total_coverage};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::theme::{DIM, SECONDARY};

/// Render the three stat cards: policy count, total coverage, and the
/// submit-claim quick action.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let coverage = format!("₹{} Crore", format_crore(total_coverage(&app.owned)));

    stat_card(f, cards[0], "🛡 Active Policies", &app.owned.len().to_string());
    stat_card(f, cards[1], "📈 Total Coverage", &coverage);
    stat_card(f, cards[2], "📋 Submit Claim", "Press 'c'");
}

fn stat_card(f: &mut Frame, area: Rect, label: &str, value: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    let lines = vec![
        Line::from(Span::styled(label.to_string(), Style::default().fg(DIM))),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
