//! Claim submission modal.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::form::{ClaimForm, FormField};
use crate::theme::{ACCENT, DIM, HIGHLIGHT};

use super::centered_rect;

/// Render the claim form as a centered overlay.
pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    let form = &app.form;

    let mut lines: Vec<Line> = Vec::new();
    for field in FormField::ALL {
        lines.push(label_line(form, field));
        match field {
            FormField::Policy => {
                let focused = form.focus == field;
                lines.push(Line::from(Span::styled(
                    format!("  ‹ {} ›", form.policy_label(&app.owned)),
                    value_style(focused),
                )));
            }
            FormField::IncidentDate => {
                lines.push(value_line(&form.draft.incident_date, form.focus == field));
            }
            FormField::Amount => {
                lines.push(value_line(&form.draft.amount, form.focus == field));
            }
            FormField::Description => {
                let focused = form.focus == field;
                let rows: Vec<&str> = form.draft.description.split('\n').collect();
                let last = rows.len() - 1;
                for (i, row) in rows.iter().enumerate() {
                    lines.push(value_line(row, focused && i == last));
                }
            }
            FormField::Documents => {
                lines.push(value_line(&form.document_input, form.focus == field));
                if !form.draft.documents.is_empty() {
                    let names: Vec<&str> =
                        form.draft.documents.iter().map(|d| d.name.as_str()).collect();
                    lines.push(Line::from(Span::styled(
                        format!(
                            "  Attached ({}): {}",
                            form.draft.documents.len(),
                            names.join(", ")
                        ),
                        Style::default().fg(DIM),
                    )));
                }
            }
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ Cancel (Esc) ]  [ Submit (Ctrl+S) ]",
        Style::default().fg(DIM),
    )));

    let width = 62.min(area.width.saturating_sub(4));
    let height = (lines.len() as u16 + 2).min(area.height);
    let popup = centered_rect(width, height, area);

    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Submit a Claim ")
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn label_line(form: &ClaimForm, field: FormField) -> Line<'static> {
    let style = if form.focus == field {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![Span::styled(field.label().to_string(), style)];
    match field {
        FormField::IncidentDate => {
            spans.push(Span::styled(" (YYYY-MM-DD)", Style::default().fg(DIM)));
        }
        FormField::Documents => {
            spans.push(Span::styled(
                " (names, Enter attaches)",
                Style::default().fg(DIM),
            ));
        }
        _ => {}
    }
    if let Some(claim_field) = field.claim_field() {
        if form.has_error(claim_field) {
            spans.push(Span::styled(" (required)", Style::default().fg(Color::Red)));
        }
    }
    Line::from(spans)
}

fn value_line(buffer: &str, cursor: bool) -> Line<'static> {
    let text = if cursor {
        format!("  {}|", buffer)
    } else {
        format!("  {}", buffer)
    };
    Line::from(Span::styled(text, value_style(cursor)))
}

fn value_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(HIGHLIGHT)
    } else {
        Style::default()
    }
}
