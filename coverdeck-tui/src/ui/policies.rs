//! Owned policy cards.

use coverdeck_core::{format_display_date, format_lakhs, group_inr, OwnedPolicy};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::theme::{kind_icon, tone_color, ACCENT, DIM, SECONDARY};

const CARD_HEIGHT: u16 = 7;

/// Render the owned-policy card list.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.owned.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No policies yet",
                Style::default().fg(DIM).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Press '2' to browse the marketplace",
                Style::default().fg(DIM),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(SECONDARY)));
        f.render_widget(empty, area);
        return;
    }

    let mut constraints: Vec<Constraint> =
        app.owned.iter().map(|_| Constraint::Length(CARD_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, policy) in app.owned.iter().enumerate() {
        render_card(f, slots[idx], policy, idx == app.selected_card);
    }
}

fn render_card(f: &mut Frame, area: Rect, policy: &OwnedPolicy, selected: bool) {
    let border = if selected { ACCENT } else { SECONDARY };

    let block = Block::default()
        .title(format!(" {} {} ", kind_icon(&policy.kind), policy.name))
        .title_style(Style::default().fg(border).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let badge = Span::styled(
        policy.status.display_label(),
        Style::default()
            .fg(tone_color(policy.status.tone()))
            .add_modifier(Modifier::BOLD),
    );

    let lines = vec![
        Line::from(vec![
            Span::styled(policy.policy_number.clone(), Style::default().fg(DIM)),
            Span::raw("  "),
            badge,
        ]),
        Line::from(format!("Coverage: ₹{} Lakhs", format_lakhs(policy.coverage))),
        Line::from(format!("Premium: ₹{}/year", group_inr(policy.premium))),
        Line::from(format!("Expires: {}", format_display_date(&policy.end_date))),
        Line::from(Span::styled(
            "[ View Details ]  [ Documents ]",
            Style::default().fg(DIM),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
