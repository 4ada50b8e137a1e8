//! Marketplace catalog cards.

use coverdeck_core::{format_lakhs, group_inr, AvailablePolicy};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::theme::{kind_icon, ACCENT, DIM, SECONDARY};

/// Render the available-policy card list.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = app
        .available
        .iter()
        .map(|p| Constraint::Length(card_height(p)))
        .collect();
    constraints.push(Constraint::Min(0));
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, policy) in app.available.iter().enumerate() {
        render_card(f, slots[idx], policy, idx == app.selected_card);
    }
}

fn card_height(policy: &AvailablePolicy) -> u16 {
    // kind line, description (two rows for wrapping), coverage, premium,
    // features, action labels, border rows
    6 + policy.features.len() as u16 + 2
}

fn render_card(f: &mut Frame, area: Rect, policy: &AvailablePolicy, selected: bool) {
    let border = if selected { ACCENT } else { SECONDARY };

    let block = Block::default()
        .title(format!(" {} {} ", kind_icon(&policy.kind), policy.name))
        .title_style(Style::default().fg(border).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} Insurance", policy.kind.display_label()),
            Style::default().fg(DIM),
        )),
        Line::from(policy.description.clone()),
        Line::from(format!("Coverage: ₹{} Lakhs", format_lakhs(policy.coverage))),
        Line::from(format!("Premium: ₹{}/month", group_inr(policy.premium))),
    ];
    for feature in &policy.features {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(Color::Green)),
            Span::raw(feature.clone()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "[ Get Quote ]  [ Details ]",
        Style::default().fg(DIM),
    )));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
