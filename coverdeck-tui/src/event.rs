//! Event handling for the dashboard

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, DashboardTab, Mode};
use crate::form::FormField;

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
    /// Re-fetch policies through the directory
    Refresh,
    /// Hand the current draft to the claims intake
    Submit,
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            _ => {}
        }
    }

    match app.mode {
        Mode::Browse => handle_browse_mode(app, key),
        Mode::ClaimForm => handle_claim_form(app, key),
    }
}

/// Handle keys while browsing cards
fn handle_browse_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => HandleResult::Quit,

        // Card selection
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            HandleResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
            HandleResult::Continue
        }

        // Tab switching is a pure state change, no refetch
        KeyCode::Char('1') | KeyCode::Left => {
            app.switch_tab(DashboardTab::Policies);
            HandleResult::Continue
        }
        KeyCode::Char('2') | KeyCode::Right => {
            app.switch_tab(DashboardTab::Marketplace);
            HandleResult::Continue
        }

        // Claim modal
        KeyCode::Char('c') => {
            app.open_claim_form();
            HandleResult::Continue
        }

        // Refresh
        KeyCode::Char('r') => HandleResult::Refresh,

        _ => HandleResult::Continue,
    }
}

/// Handle keys while the claim modal owns the keyboard
fn handle_claim_form(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => {
            app.cancel_claim_form();
            HandleResult::Continue
        }

        // Submit
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            HandleResult::Submit
        }
        // Other control chords are not text
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            HandleResult::Continue
        }

        // Field focus
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus_next();
            HandleResult::Continue
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus_prev();
            HandleResult::Continue
        }

        // Policy selector
        KeyCode::Left if app.form.focus == FormField::Policy => {
            app.form.policy_prev(&app.owned);
            HandleResult::Continue
        }
        KeyCode::Right if app.form.focus == FormField::Policy => {
            app.form.policy_next(&app.owned);
            HandleResult::Continue
        }

        KeyCode::Enter => {
            match app.form.focus {
                FormField::Policy => app.form.policy_next(&app.owned),
                FormField::Description => app.form.insert_char('\n'),
                FormField::Documents => app.form.attach_pending(),
                FormField::IncidentDate | FormField::Amount => app.form.focus_next(),
            }
            HandleResult::Continue
        }
        KeyCode::Backspace => {
            app.form.backspace();
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            app.form.insert_char(c);
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}
