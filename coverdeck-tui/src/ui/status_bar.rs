//! Key hints and status messages.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Mode};
use crate::theme::{DIM, HIGHLIGHT};

/// Render the one-line status bar.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.mode {
        Mode::Browse => "1/2:tabs  j/k:cards  c:claim  r:refresh  q:quit",
        Mode::ClaimForm => "Tab:next field  Shift+Tab:prev  Enter:pick/attach  Ctrl+S:submit  Esc:cancel",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(DIM))];
    if let Some(msg) = &app.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(msg.clone(), Style::default().fg(HIGHLIGHT)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
