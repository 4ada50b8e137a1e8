//! Colors and icons shared by the renderers.

use coverdeck_core::{PolicyKind, StatusTone};
use ratatui::style::Color;

/// Primary accent color
pub const ACCENT: Color = Color::Cyan;
/// Secondary color for borders and less important elements
pub const SECONDARY: Color = Color::DarkGray;
/// Highlight color for the selected card and status messages
pub const HIGHLIGHT: Color = Color::Yellow;
/// Dim text color
pub const DIM: Color = Color::Rgb(100, 100, 100);

/// Badge color for a status tone.
pub fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Positive => Color::Green,
        StatusTone::Warning => Color::Yellow,
        StatusTone::Critical => Color::Red,
        StatusTone::Neutral => Color::Gray,
    }
}

/// Icon for a policy kind. Unknown kinds get the generic document icon.
pub fn kind_icon(kind: &PolicyKind) -> &'static str {
    match kind {
        PolicyKind::Auto => "🚗",
        PolicyKind::Home => "🏠",
        PolicyKind::Health => "❤",
        PolicyKind::Life => "🛡",
        PolicyKind::TwoWheeler => "🏍",
        PolicyKind::Other(_) => "📄",
    }
}
